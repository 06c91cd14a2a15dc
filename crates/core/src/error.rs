#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("gallery directory does not exist: {path}", path = path.display())]
    GalleryDirMissing { path: std::path::PathBuf },
    #[error("gallery path is not a directory: {path}", path = path.display())]
    GalleryDirNotDirectory { path: std::path::PathBuf },
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
