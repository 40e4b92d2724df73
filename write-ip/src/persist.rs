use std::path::Path;
use tracing::info;
use write_ip_shared::LocalAddressRecord;

use crate::error::PersistError;

/// Write `{"ip": <ip>}` to `path`, replacing whatever was there.
pub fn persist(ip: &str, path: &Path) -> Result<(), PersistError> {
    let json = LocalAddressRecord::new(ip).to_json()?;

    std::fs::write(path, json).map_err(|source| PersistError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    info!("Saved ip record to {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persist_writes_exact_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ip.json");

        persist("10.0.0.5", &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, r#"{"ip": "10.0.0.5"}"#);
    }

    #[test]
    fn test_persist_replaces_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ip.json");
        std::fs::write(&path, "{\"ip\": \"1.1.1.1\", \"stale\": \"a much longer previous payload\"}").unwrap();

        persist("10.0.0.6", &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, r#"{"ip": "10.0.0.6"}"#);
    }

    #[test]
    fn test_persist_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("ip.json");

        let err = persist("10.0.0.5", &path).unwrap_err();
        match err {
            PersistError::Write { path: failed, .. } => assert_eq!(failed, path),
            other => panic!("unexpected error: {other}"),
        }
        assert!(!path.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_persist_writes_through_symlink() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("real.json");
        let link = dir.path().join("ip.json");
        std::fs::write(&target, r#"{"ip": "1.1.1.1"}"#).unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        persist("10.0.0.5", &link).unwrap();

        assert!(std::fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        let contents = std::fs::read_to_string(&target).unwrap();
        assert_eq!(contents, r#"{"ip": "10.0.0.5"}"#);
    }

    #[cfg(unix)]
    #[test]
    fn test_persist_keeps_existing_file_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ip.json");
        std::fs::write(&path, r#"{"ip": "1.1.1.1"}"#).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o600)).unwrap();

        persist("10.0.0.5", &path).unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
