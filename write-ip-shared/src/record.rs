use serde::{Deserialize, Serialize, ser::Error as _};
use std::io;
use std::path::Path;

/// Contents of `ip.json`: the address this host uses for outbound traffic.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LocalAddressRecord {
    pub ip: String,
}

impl LocalAddressRecord {
    pub fn new(ip: impl Into<String>) -> Self {
        Self { ip: ip.into() }
    }

    /// Single-line JSON with a space after `:` and `,`, e.g. `{"ip": "10.0.0.5"}`.
    pub fn to_json(&self) -> serde_json::Result<String> {
        let mut buf = Vec::with_capacity(32);
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, SpacedFormatter);
        self.serialize(&mut ser)?;
        String::from_utf8(buf).map_err(serde_json::Error::custom)
    }

    pub fn from_json(s: &str) -> serde_json::Result<Self> {
        serde_json::from_str(s)
    }

    /// Read a record back from disk, as the app consuming `ip.json` does.
    pub fn load(path: impl AsRef<Path>) -> io::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(Self::from_json(&contents)?)
    }
}

/// Compact formatter that keeps separators readable: `", "` and `": "`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpacedFormatter;

impl serde_json::ser::Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}
