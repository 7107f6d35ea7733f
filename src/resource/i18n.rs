use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::debug;

use crate::error::ResourceError;
use crate::http::{Request, Response};
use crate::negotiation::normalize_tag;
use crate::registry::Registry;
use crate::resource::file::{serve, FileData};

/// Objects carrying language-dependent content.
pub trait I18nAware {
    fn default_language(&self) -> &str;

    /// Fails when `language` has no content behind it.
    fn set_default_language(&mut self, language: &str) -> Result<(), ResourceError>;

    fn available_languages(&self) -> Vec<String>;
}

/// A published resource backed by one file per language. GET and HEAD pick
/// the variant best matching the client's `Accept-Language` preferences,
/// falling back to the default language when nothing matches.
pub struct I18nFileResource {
    variants: BTreeMap<String, FileData>,
    default_language: String,
    registry: Arc<Registry>,
}

impl std::fmt::Debug for I18nFileResource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18nFileResource")
            .field("variants", &self.variants)
            .field("default_language", &self.default_language)
            .finish_non_exhaustive()
    }
}

impl I18nFileResource {
    pub fn new(
        variants: impl IntoIterator<Item = (String, FileData)>,
        default_language: &str,
        registry: Arc<Registry>,
    ) -> Result<Self, ResourceError> {
        let variants: BTreeMap<String, FileData> = variants
            .into_iter()
            .map(|(language, data)| (normalize_tag(&language), data))
            .collect();
        let default_language = normalize_tag(default_language);

        if !variants.contains_key(&default_language) {
            return Err(ResourceError::unsupported_language(
                default_language,
                variants.keys().cloned(),
            ));
        }

        Ok(Self {
            variants,
            default_language,
            registry,
        })
    }

    /// Negotiates the language to serve. An empty preference list, a
    /// missing adapter or a missing negotiator all land on the default.
    fn choose_language(&self, request: &Request) -> String {
        let preferred = self
            .registry
            .language_adapter()
            .map(|adapter| adapter.preferred_languages(request))
            .unwrap_or_default();
        let available = self.available_languages();

        let negotiated = self
            .registry
            .negotiator()
            .and_then(|negotiator| negotiator.negotiate(&preferred, &available));

        negotiated.unwrap_or_else(|| {
            debug!(default = %self.default_language, "no language match, using default");
            self.default_language.clone()
        })
    }

    fn variant(&self, language: &str) -> Result<&FileData, ResourceError> {
        self.variants.get(language).ok_or_else(|| {
            ResourceError::unsupported_language(language, self.variants.keys().cloned())
        })
    }

    fn respond(&self, request: &Request, include_body: bool) -> crate::Result<Response> {
        let language = self.choose_language(request);
        let data = self.variant(&language)?;

        let mut response = serve(data, &self.registry, request, include_body)?;
        response.set_header("Content-Language", language);
        Ok(response)
    }

    pub fn get(&self, request: &Request) -> crate::Result<Response> {
        self.respond(request, true)
    }

    pub fn head(&self, request: &Request) -> crate::Result<Response> {
        self.respond(request, false)
    }

    pub fn traverse(&self, name: &str) -> crate::Result<I18nFileResource> {
        Err(ResourceError::not_found(name).into())
    }
}

impl I18nAware for I18nFileResource {
    fn default_language(&self) -> &str {
        &self.default_language
    }

    fn set_default_language(&mut self, language: &str) -> Result<(), ResourceError> {
        let language = normalize_tag(language);
        if !self.variants.contains_key(&language) {
            return Err(ResourceError::unsupported_language(
                language,
                self.variants.keys().cloned(),
            ));
        }
        self.default_language = language;
        Ok(())
    }

    fn available_languages(&self) -> Vec<String> {
        self.variants.keys().cloned().collect()
    }
}

/// Builds [`I18nFileResource`]s for a fixed variant set. Validates once at
/// construction, then binds any number of resources to a registry.
#[derive(Debug, Clone)]
pub struct I18nFileResourceFactory {
    variants: BTreeMap<String, FileData>,
    default_language: String,
}

impl I18nFileResourceFactory {
    pub fn new(
        variants: impl IntoIterator<Item = (String, FileData)>,
        default_language: &str,
    ) -> Result<Self, ResourceError> {
        let variants: BTreeMap<String, FileData> = variants
            .into_iter()
            .map(|(language, data)| (normalize_tag(&language), data))
            .collect();
        let default_language = normalize_tag(default_language);

        if !variants.contains_key(&default_language) {
            return Err(ResourceError::unsupported_language(
                default_language,
                variants.keys().cloned(),
            ));
        }

        Ok(Self {
            variants,
            default_language,
        })
    }

    pub fn bind(&self, registry: Arc<Registry>) -> I18nFileResource {
        I18nFileResource {
            variants: self.variants.clone(),
            default_language: self.default_language.clone(),
            registry,
        }
    }
}
