use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResourceError {
    #[error("resource has no child named '{name}'")]
    NotFound { name: String },

    #[error("unsupported language '{language}', available: {}", .available.join(", "))]
    UnsupportedLanguage {
        language: String,
        available: Vec<String>,
    },
}

impl ResourceError {
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }

    pub fn unsupported_language(
        language: impl Into<String>,
        available: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        let mut available: Vec<String> = available.into_iter().map(Into::into).collect();
        available.sort();
        Self::UnsupportedLanguage {
            language: language.into(),
            available,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = ResourceError::not_found("_data");
        assert_eq!(err.to_string(), "resource has no child named '_data'");
    }

    #[test]
    fn test_unsupported_language_display() {
        let err = ResourceError::unsupported_language("ru", ["fr", "en", "lt"]);
        assert_eq!(
            err.to_string(),
            "unsupported language 'ru', available: en, fr, lt"
        );
    }
}
