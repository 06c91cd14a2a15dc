//! Gallery runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into the store and
//! the REST adapter. Nothing here reads environment variables: the binaries read them and
//! hand the raw values to the parsing helpers below, which keeps request handling and
//! tests independent of process-wide state.

use crate::constants::{DEFAULT_GALLERY_DIR, DEFAULT_MAX_UPLOAD_BYTES, DEFAULT_REST_ADDR};
use crate::{ConfigError, ConfigResult};
use gallery_files::{GalleryStore, StoreOptions};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// Gallery configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct GalleryConfig {
    gallery_dir: PathBuf,
    rest_addr: SocketAddr,
    max_upload_bytes: usize,
    store_options: StoreOptions,
}

impl GalleryConfig {
    /// Create a new `GalleryConfig`.
    pub fn new(
        gallery_dir: PathBuf,
        rest_addr: SocketAddr,
        max_upload_bytes: usize,
        store_options: StoreOptions,
    ) -> ConfigResult<Self> {
        if max_upload_bytes == 0 {
            return Err(ConfigError::InvalidInput(
                "max_upload_bytes must be greater than zero".into(),
            ));
        }

        Ok(Self {
            gallery_dir,
            rest_addr,
            max_upload_bytes,
            store_options,
        })
    }

    pub fn gallery_dir(&self) -> &Path {
        &self.gallery_dir
    }

    pub fn rest_addr(&self) -> SocketAddr {
        self.rest_addr
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_bytes
    }

    pub fn store_options(&self) -> StoreOptions {
        self.store_options
    }

    /// Build the gallery store described by this configuration.
    pub fn store(&self) -> GalleryStore {
        GalleryStore::with_options(self.gallery_dir.clone(), self.store_options)
    }
}

/// Check that the gallery directory exists and is a directory.
///
/// Intended to be run once at startup; the store itself never checks.
pub fn validate_gallery_dir(gallery_dir: &Path) -> ConfigResult<()> {
    if !gallery_dir.exists() {
        return Err(ConfigError::GalleryDirMissing {
            path: gallery_dir.to_path_buf(),
        });
    }

    if !gallery_dir.is_dir() {
        return Err(ConfigError::GalleryDirNotDirectory {
            path: gallery_dir.to_path_buf(),
        });
    }

    Ok(())
}

/// Trim `value` and drop it if blank.
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parse the gallery directory from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns [`DEFAULT_GALLERY_DIR`].
pub fn gallery_dir_from_env_value(value: Option<String>) -> PathBuf {
    PathBuf::from(non_blank(value).unwrap_or_else(|| DEFAULT_GALLERY_DIR.into()))
}

/// Parse the REST bind address from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns [`DEFAULT_REST_ADDR`].
pub fn rest_addr_from_env_value(value: Option<String>) -> ConfigResult<SocketAddr> {
    let value = non_blank(value).unwrap_or_else(|| DEFAULT_REST_ADDR.into());
    value
        .parse()
        .map_err(|e| ConfigError::InvalidInput(format!("invalid REST address {:?}: {}", value, e)))
}

/// Parse the upload body limit from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns [`DEFAULT_MAX_UPLOAD_BYTES`].
pub fn max_upload_bytes_from_env_value(value: Option<String>) -> ConfigResult<usize> {
    let Some(value) = non_blank(value) else {
        return Ok(DEFAULT_MAX_UPLOAD_BYTES);
    };

    match value.parse::<usize>() {
        Ok(0) => Err(ConfigError::InvalidInput(
            "max upload size must be greater than zero".into(),
        )),
        Ok(bytes) => Ok(bytes),
        Err(e) => Err(ConfigError::InvalidInput(format!(
            "invalid max upload size {:?}: {}",
            value, e
        ))),
    }
}

/// Parse an on/off flag from an optional string value.
///
/// Accepts `true`/`false`, `1`/`0`, `yes`/`no` and `on`/`off` in any case. If `value` is
/// `None` or empty/whitespace, returns `false`.
pub fn bool_from_env_value(name: &str, value: Option<String>) -> ConfigResult<bool> {
    let Some(value) = non_blank(value) else {
        return Ok(false);
    };

    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidInput(format!(
            "{} must be true or false, got {:?}",
            name, value
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_gallery_dir_defaults_when_blank() {
        assert_eq!(
            gallery_dir_from_env_value(None),
            PathBuf::from(DEFAULT_GALLERY_DIR)
        );
        assert_eq!(
            gallery_dir_from_env_value(Some("   ".into())),
            PathBuf::from(DEFAULT_GALLERY_DIR)
        );
        assert_eq!(
            gallery_dir_from_env_value(Some(" /srv/gallery ".into())),
            PathBuf::from("/srv/gallery")
        );
    }

    #[test]
    fn test_rest_addr_parsing() {
        assert_eq!(
            rest_addr_from_env_value(None).unwrap(),
            DEFAULT_REST_ADDR.parse::<SocketAddr>().unwrap()
        );
        assert_eq!(
            rest_addr_from_env_value(Some("127.0.0.1:9000".into())).unwrap(),
            "127.0.0.1:9000".parse::<SocketAddr>().unwrap()
        );
        assert!(matches!(
            rest_addr_from_env_value(Some("localhost".into())),
            Err(ConfigError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_max_upload_bytes_parsing() {
        assert_eq!(
            max_upload_bytes_from_env_value(None).unwrap(),
            DEFAULT_MAX_UPLOAD_BYTES
        );
        assert_eq!(
            max_upload_bytes_from_env_value(Some("2048".into())).unwrap(),
            2048
        );
        assert!(max_upload_bytes_from_env_value(Some("0".into())).is_err());
        assert!(max_upload_bytes_from_env_value(Some("-1".into())).is_err());
        assert!(max_upload_bytes_from_env_value(Some("10MB".into())).is_err());
    }

    #[test]
    fn test_bool_parsing() {
        assert!(!bool_from_env_value("FLAG", None).unwrap());
        assert!(!bool_from_env_value("FLAG", Some("".into())).unwrap());
        assert!(bool_from_env_value("FLAG", Some("TRUE".into())).unwrap());
        assert!(bool_from_env_value("FLAG", Some(" on ".into())).unwrap());
        assert!(!bool_from_env_value("FLAG", Some("0".into())).unwrap());

        let err = bool_from_env_value("FLAG", Some("maybe".into())).unwrap_err();
        assert!(err.to_string().contains("FLAG"));
    }

    #[test]
    fn test_config_rejects_zero_upload_limit() {
        let result = GalleryConfig::new(
            PathBuf::from("uploads"),
            DEFAULT_REST_ADDR.parse().unwrap(),
            0,
            StoreOptions::default(),
        );

        assert!(matches!(result, Err(ConfigError::InvalidInput(_))));
    }

    #[test]
    fn test_config_builds_store_with_options() {
        let options = StoreOptions {
            strict_filenames: true,
            atomic_writes: true,
        };
        let cfg = GalleryConfig::new(
            PathBuf::from("uploads"),
            DEFAULT_REST_ADDR.parse().unwrap(),
            1024,
            options,
        )
        .unwrap();

        let store = cfg.store();

        assert_eq!(store.root_directory(), Path::new("uploads"));
        assert_eq!(store.options(), options);
        assert_eq!(cfg.max_upload_bytes(), 1024);
    }

    #[test]
    fn test_validate_gallery_dir() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("file.txt");
        std::fs::write(&file, "not a directory").unwrap();

        assert!(validate_gallery_dir(temp.path()).is_ok());
        assert!(matches!(
            validate_gallery_dir(&temp.path().join("missing")),
            Err(ConfigError::GalleryDirMissing { .. })
        ));
        assert!(matches!(
            validate_gallery_dir(&file),
            Err(ConfigError::GalleryDirNotDirectory { .. })
        ));
    }
}
