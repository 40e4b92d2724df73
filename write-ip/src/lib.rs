pub mod config;
pub mod error;
pub mod persist;
pub mod resolve;
pub mod util;

// === CLI entrypoint ===
pub mod cli;

pub use config::Config;
pub use error::{PersistError, ResolveError, WriteIpError, WriteIpResult};
pub use persist::persist;
pub use resolve::{AddressProbe, UdpProbe, discover_local_ip};
pub use write_ip_shared::LocalAddressRecord;

/// Resolve the local address, then write it to `config.output`.
///
/// Nothing is written when resolution fails.
pub fn run(probe: &impl AddressProbe, config: &Config) -> WriteIpResult<String> {
    let ip = probe.local_ip()?.to_string();
    persist(&ip, &config.output)?;
    Ok(ip)
}

pub fn confirmation_line(ip: &str, config: &Config) -> String {
    format!("[write_ip] Saved IP {} to {}", ip, config.output_display())
}

/// Entrypoint used by `main.rs` and tests to run the full CLI.
pub fn run_cli() -> anyhow::Result<()> {
    cli::cli()
}
