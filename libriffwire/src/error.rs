//! Error types for Riffwire

use thiserror::Error;

pub type Result<T> = std::result::Result<T, RiffwireError>;

#[derive(Error, Debug)]
pub enum RiffwireError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Share error: {0}")]
    Share(#[from] ShareError),

    #[error("Asset error: {0}")]
    Asset(#[from] AssetError),
}

impl RiffwireError {
    /// Returns the appropriate exit code for this error
    ///
    /// Construction-time failures (config, catalog) exit with 2; runtime
    /// best-effort failures that somehow escalate exit with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            RiffwireError::Config(_) => 2,
            RiffwireError::Catalog(_) => 2,
            RiffwireError::Share(_) => 1,
            RiffwireError::Asset(_) => 1,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid color in theme config: {0}")]
    InvalidColor(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Unknown icon name: '{0}'")]
    UnknownIcon(String),

    #[error("Duplicate article id: '{0}'")]
    DuplicateArticleId(String),

    #[error("Duplicate category id: '{0}'")]
    DuplicateCategoryId(String),
}

#[derive(Error, Debug)]
pub enum ShareError {
    #[error("Share surface unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to hand off share payload: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("Failed to load asset: {0}")]
    Io(#[from] std::io::Error),

    #[error("Asset is empty: {0}")]
    Empty(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_config_error() {
        let error = RiffwireError::Config(ConfigError::MissingField("config directory".to_string()));
        assert_eq!(error.exit_code(), 2);
    }

    #[test]
    fn test_exit_code_catalog_error() {
        let error = RiffwireError::Catalog(CatalogError::UnknownIcon("sparkles".to_string()));
        assert_eq!(error.exit_code(), 2);
    }

    #[test]
    fn test_exit_code_share_error() {
        let error = RiffwireError::Share(ShareError::Unavailable("no data dir".to_string()));
        assert_eq!(error.exit_code(), 1);
    }

    #[test]
    fn test_error_message_formatting_unknown_icon() {
        let error = RiffwireError::Catalog(CatalogError::UnknownIcon("rocket".to_string()));
        assert_eq!(format!("{}", error), "Catalog error: Unknown icon name: 'rocket'");
    }

    #[test]
    fn test_error_message_formatting_duplicate_id() {
        let error = CatalogError::DuplicateArticleId("4".to_string());
        assert_eq!(format!("{}", error), "Duplicate article id: '4'");
    }

    #[test]
    fn test_error_conversion_from_catalog_error() {
        let catalog_error = CatalogError::DuplicateCategoryId("2".to_string());
        let error: RiffwireError = catalog_error.into();

        match error {
            RiffwireError::Catalog(_) => {}
            _ => panic!("Expected RiffwireError::Catalog"),
        }
    }

    #[test]
    fn test_error_conversion_from_config_error() {
        let config_error = ConfigError::InvalidColor("primary = FF00".to_string());
        let error: RiffwireError = config_error.into();

        match error {
            RiffwireError::Config(_) => {}
            _ => panic!("Expected RiffwireError::Config"),
        }
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_ok() -> Result<&'static str> {
            Ok("success")
        }

        assert!(returns_ok().is_ok());
    }
}
