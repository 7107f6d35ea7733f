use std::sync::Arc;

use crate::http::{BrowserLanguages, HttpCharsets, Request};
use crate::negotiation::Negotiator;

/// Adapter from a request to the client's preference-ordered languages.
pub trait PreferredLanguages: Send + Sync {
    fn preferred_languages(&self, request: &Request) -> Vec<String>;
}

/// Adapter from a request to the client's acceptable charsets.
pub trait PreferredCharsets: Send + Sync {
    fn preferred_charsets(&self, request: &Request) -> Vec<String>;
}

/// Component registry wiring resources to their collaborators: the two
/// preference adapters and the negotiator utility. Resources hold it via
/// `Arc` and look components up per call; an empty slot degrades the
/// behavior (no negotiation, no charset tagging) rather than erroring.
///
/// Tests build a fresh registry per test or call [`Registry::reset`]
/// between them.
#[derive(Default)]
pub struct Registry {
    language_adapter: Option<Arc<dyn PreferredLanguages>>,
    charset_adapter: Option<Arc<dyn PreferredCharsets>>,
    negotiator: Option<Negotiator>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the stock components: browser language and charset
    /// adapters plus the default negotiator.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.provide_language_adapter(Arc::new(BrowserLanguages));
        registry.provide_charset_adapter(Arc::new(HttpCharsets));
        registry.provide_negotiator(Negotiator::new());
        registry
    }

    pub fn provide_language_adapter(&mut self, adapter: Arc<dyn PreferredLanguages>) {
        self.language_adapter = Some(adapter);
    }

    pub fn provide_charset_adapter(&mut self, adapter: Arc<dyn PreferredCharsets>) {
        self.charset_adapter = Some(adapter);
    }

    pub fn provide_negotiator(&mut self, negotiator: Negotiator) {
        self.negotiator = Some(negotiator);
    }

    pub fn language_adapter(&self) -> Option<Arc<dyn PreferredLanguages>> {
        self.language_adapter.clone()
    }

    pub fn charset_adapter(&self) -> Option<Arc<dyn PreferredCharsets>> {
        self.charset_adapter.clone()
    }

    pub fn negotiator(&self) -> Option<Negotiator> {
        self.negotiator
    }

    /// Clears every slot. The between-tests cleanup hook.
    pub fn reset(&mut self) {
        self.language_adapter = None;
        self.charset_adapter = None;
        self.negotiator = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_registry_has_no_components() {
        let registry = Registry::new();
        assert!(registry.language_adapter().is_none());
        assert!(registry.charset_adapter().is_none());
        assert!(registry.negotiator().is_none());
    }

    #[test]
    fn test_provide_and_look_up() {
        let mut registry = Registry::new();
        registry.provide_language_adapter(Arc::new(BrowserLanguages));
        registry.provide_negotiator(Negotiator::new());

        assert!(registry.language_adapter().is_some());
        assert!(registry.negotiator().is_some());
        assert!(registry.charset_adapter().is_none());
    }

    #[test]
    fn test_reset_clears_all_slots() {
        let mut registry = Registry::standard();
        registry.reset();

        assert!(registry.language_adapter().is_none());
        assert!(registry.charset_adapter().is_none());
        assert!(registry.negotiator().is_none());
    }

    #[test]
    fn test_standard_registry_reads_request_preferences() {
        let registry = Registry::standard();
        let request = Request::new().with_header("Accept-Language", "fr;q=0.9, en");

        let adapter = registry.language_adapter().unwrap();
        assert_eq!(
            adapter.preferred_languages(&request),
            vec!["en".to_string(), "fr".to_string()]
        );
    }
}
