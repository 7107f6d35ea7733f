use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::{IoError, ManifestError};
use crate::negotiation::normalize_tag;
use crate::registry::Registry;
use crate::resource::{FileData, I18nFileResource, I18nFileResourceFactory};

pub const MANIFEST_FILENAME: &str = "resources.json";

/// Declares the published resources of a directory: a default language and,
/// per resource name, one file per language. Paths are relative to the
/// manifest's directory.
///
/// ```json
/// {
///   "default_language": "en",
///   "resources": {
///     "greeting.txt": { "en": "en/greeting.txt", "fr": "fr/greeting.txt" }
///   }
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceManifest {
    pub default_language: String,
    pub resources: BTreeMap<String, BTreeMap<String, PathBuf>>,
    #[serde(skip)]
    root: PathBuf,
}

impl ResourceManifest {
    pub fn load(path: &Path) -> crate::Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|source| IoError::read_error(path, source))?;
        let mut manifest: ResourceManifest = serde_json::from_str(&content)
            .map_err(|source| ManifestError::parse_error(path, source))?;
        manifest.root = path.parent().unwrap_or(Path::new(".")).to_path_buf();
        manifest.default_language = normalize_tag(&manifest.default_language);
        debug!(
            resources = manifest.resources.len(),
            root = %manifest.root.display(),
            "loaded resource manifest"
        );
        Ok(manifest)
    }

    /// Assembles a manifest from a `root/<language>/<name>` directory
    /// layout instead of a manifest file. Files outside a language
    /// directory are skipped.
    pub fn scan_layout(root: &Path, default_language: &str) -> crate::Result<Self> {
        if !root.is_dir() {
            return Err(IoError::directory_not_found(root).into());
        }

        let mut resources: BTreeMap<String, BTreeMap<String, PathBuf>> = BTreeMap::new();

        for entry in WalkDir::new(root).min_depth(2).max_depth(2) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    warn!(error = %err, "skipping unreadable entry");
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }

            let Some(name) = entry.file_name().to_str() else {
                continue;
            };
            let Some(language) = entry
                .path()
                .parent()
                .and_then(|dir| dir.file_name())
                .and_then(|dir| dir.to_str())
            else {
                continue;
            };

            resources
                .entry(name.to_string())
                .or_default()
                .insert(normalize_tag(language), entry.path().to_path_buf());
        }

        if resources.is_empty() {
            return Err(ManifestError::EmptyLayout {
                root: root.to_path_buf(),
            }
            .into());
        }

        debug!(resources = resources.len(), root = %root.display(), "scanned layout");
        Ok(Self {
            default_language: normalize_tag(default_language),
            resources,
            root: root.to_path_buf(),
        })
    }

    pub fn resource_names(&self) -> Vec<&str> {
        self.resources.keys().map(String::as_str).collect()
    }

    /// Builds the factory for one named resource, checking that every
    /// variant file exists and that the default language is covered.
    pub fn factory(&self, name: &str) -> crate::Result<I18nFileResourceFactory> {
        let variants = self
            .resources
            .get(name)
            .ok_or_else(|| ManifestError::unknown_resource(name))?;

        let mut files = Vec::with_capacity(variants.len());
        for (language, relative) in variants {
            let path = self.root.join(relative);
            if !path.is_file() {
                return Err(ManifestError::missing_variant_file(name, language, path).into());
            }
            files.push((language.clone(), FileData::new(path)));
        }

        if !variants.contains_key(&self.default_language) {
            return Err(
                ManifestError::missing_default_variant(name, &self.default_language).into(),
            );
        }

        Ok(I18nFileResourceFactory::new(files, &self.default_language)?)
    }

    pub fn build(&self, name: &str, registry: Arc<Registry>) -> crate::Result<I18nFileResource> {
        Ok(self.factory(name)?.bind(registry))
    }

    /// Checks every resource the way [`ResourceManifest::factory`] would.
    pub fn validate(&self) -> crate::Result<()> {
        for name in self.resources.keys() {
            self.factory(name)?;
        }
        Ok(())
    }
}
