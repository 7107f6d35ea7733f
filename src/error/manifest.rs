use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("failed to parse manifest '{path}': {source}")]
    ParseError {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("manifest has no resource named '{name}'")]
    UnknownResource { name: String },

    #[error("resource '{resource}' variant '{language}' points to a missing file: {path}")]
    MissingVariantFile {
        resource: String,
        language: String,
        path: PathBuf,
    },

    #[error("resource '{resource}' has no variant for default language '{language}'")]
    MissingDefaultVariant { resource: String, language: String },

    #[error("no language directories found under: {root}")]
    EmptyLayout { root: PathBuf },
}

impl ManifestError {
    pub fn parse_error(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::ParseError {
            path: path.into(),
            source,
        }
    }

    pub fn unknown_resource(name: impl Into<String>) -> Self {
        Self::UnknownResource { name: name.into() }
    }

    pub fn missing_variant_file(
        resource: impl Into<String>,
        language: impl Into<String>,
        path: impl Into<PathBuf>,
    ) -> Self {
        Self::MissingVariantFile {
            resource: resource.into(),
            language: language.into(),
            path: path.into(),
        }
    }

    pub fn missing_default_variant(
        resource: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        Self::MissingDefaultVariant {
            resource: resource.into(),
            language: language.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_resource_display() {
        let err = ManifestError::unknown_resource("logo.png");
        assert_eq!(err.to_string(), "manifest has no resource named 'logo.png'");
    }

    #[test]
    fn test_missing_default_variant_display() {
        let err = ManifestError::missing_default_variant("logo.png", "en");
        assert_eq!(
            err.to_string(),
            "resource 'logo.png' has no variant for default language 'en'"
        );
    }
}
