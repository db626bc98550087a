use std::path::PathBuf;

use studydash_domain::shared::DomainError;

/// Process configuration: where the database and logs live.
///
/// Resolved once at startup; `STUDYDASH_DATA_DIR` overrides the
/// platform default for containerized deployments and tests.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub db_filename: String,
    pub log_dir: PathBuf,
}

impl AppConfig {
    pub fn resolve() -> Result<Self, DomainError> {
        let data_dir = match std::env::var_os("STUDYDASH_DATA_DIR") {
            Some(dir) => PathBuf::from(dir),
            None => dirs::data_dir()
                .ok_or_else(|| {
                    DomainError::Infrastructure(
                        "Could not determine platform data directory".to_string(),
                    )
                })?
                .join("studydash"),
        };

        Ok(Self::with_data_dir(data_dir))
    }

    pub fn with_data_dir(data_dir: PathBuf) -> Self {
        let db_filename = if cfg!(debug_assertions) {
            "studydash-dev.db"
        } else {
            "studydash.db"
        };

        let log_dir = data_dir.join("logs");

        Self {
            data_dir,
            db_filename: db_filename.to_string(),
            log_dir,
        }
    }

    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join(&self.db_filename)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_db_path_joins_data_dir() {
        let config = AppConfig::with_data_dir(PathBuf::from("/tmp/studydash-test"));

        assert!(config.db_path().starts_with("/tmp/studydash-test"));
        assert!(config
            .db_path()
            .file_name()
            .unwrap()
            .to_string_lossy()
            .starts_with("studydash"));
        assert_eq!(config.log_dir, PathBuf::from("/tmp/studydash-test/logs"));
    }
}
