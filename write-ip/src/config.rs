use std::net::{Ipv4Addr, SocketAddrV4};
use std::path::PathBuf;

/// Public address used only to make the OS choose an outbound interface.
/// Nothing is sent to it.
pub const DEFAULT_PROBE_TARGET: SocketAddrV4 = SocketAddrV4::new(Ipv4Addr::new(8, 8, 8, 8), 80);

pub const DEFAULT_OUTPUT_FILE: &str = "ip.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub target: SocketAddrV4,
    /// Relative paths resolve against the process working directory.
    pub output: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target: DEFAULT_PROBE_TARGET,
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
        }
    }
}

impl Config {
    /// Name shown in the confirmation line.
    pub fn output_display(&self) -> String {
        self.output
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.output.display().to_string())
    }
}
