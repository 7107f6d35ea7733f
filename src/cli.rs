use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "i18n-resource")]
#[command(
    about = "Resolve language-negotiated file resources",
    long_about = None
)]
pub struct Args {
    /// Directory holding the resources: either a resources.json manifest
    /// or a <language>/<name> layout
    #[arg(long, value_name = "DIR")]
    pub root: PathBuf,

    /// Resource name to resolve (lists available resources if omitted)
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Raw Accept-Language header value to negotiate with
    #[arg(short = 'l', long, value_name = "HEADER")]
    pub accept_language: Option<String>,

    /// Default language used when negotiation finds no match (and for
    /// layout scans without a manifest)
    #[arg(long, default_value = "en", value_name = "LANG")]
    pub default_language: String,

    /// Issue a HEAD request instead of GET and print the headers
    #[arg(long)]
    pub head: bool,

    /// Output file for the body (prints to stdout if not specified)
    #[arg(short = 'O', long, value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn validate(&self) -> Result<()> {
        if !self.root.exists() {
            anyhow::bail!("Root does not exist: {}", self.root.display());
        }
        if !self.root.is_dir() {
            anyhow::bail!("Root is not a directory: {}", self.root.display());
        }
        if self.default_language.trim().is_empty() {
            anyhow::bail!("Default language must not be empty");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args(root: PathBuf) -> Args {
        Args {
            root,
            name: None,
            accept_language: None,
            default_language: "en".to_string(),
            head: false,
            output_file: None,
            verbose: 0,
            quiet: false,
        }
    }

    #[test]
    fn test_validate_existing_directory() {
        let temp_dir = TempDir::new().unwrap();
        assert!(args(temp_dir.path().to_path_buf()).validate().is_ok());
    }

    #[test]
    fn test_validate_missing_root() {
        let result = args(PathBuf::from("/nonexistent/resources")).validate();
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_root_must_be_directory() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("greeting.txt");
        fs::write(&file_path, "hello").unwrap();

        assert!(args(file_path).validate().is_err());
    }

    #[test]
    fn test_validate_empty_default_language() {
        let temp_dir = TempDir::new().unwrap();
        let mut invalid = args(temp_dir.path().to_path_buf());
        invalid.default_language = "  ".to_string();

        assert!(invalid.validate().is_err());
    }
}
