pub mod record;

pub use record::{LocalAddressRecord, SpacedFormatter};
