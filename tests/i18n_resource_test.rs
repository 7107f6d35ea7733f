mod fixtures;

use std::fs;
use std::sync::Arc;

use i18n_resource_core::error::{Error, ResourceError};
use i18n_resource_core::http::{BrowserLanguages, HttpCharsets, Request};
use i18n_resource_core::{
    FileData, I18nAware, I18nFileResource, I18nFileResourceFactory, Negotiator, Registry,
};

use fixtures::fixture_path;

/// Per-test environment: both preference adapters and the negotiator
/// registered into a fresh registry. Each test builds its own, so nothing
/// leaks between tests.
fn setup() -> Arc<Registry> {
    let mut registry = Registry::new();
    registry.provide_charset_adapter(Arc::new(HttpCharsets));
    registry.provide_language_adapter(Arc::new(BrowserLanguages));
    registry.provide_negotiator(Negotiator::new());
    Arc::new(registry)
}

fn variant_files(filename1: &str, filename2: &str) -> Vec<(String, FileData)> {
    vec![
        ("en".to_string(), FileData::new(fixture_path(filename1))),
        ("fr".to_string(), FileData::new(fixture_path(filename2))),
    ]
}

fn resource(filename1: &str, filename2: &str) -> I18nFileResource {
    I18nFileResourceFactory::new(variant_files(filename1, filename2), "en")
        .unwrap()
        .bind(setup())
}

fn fixture_bytes(name: &str) -> Vec<u8> {
    fs::read(fixture_path(name)).unwrap()
}

#[test]
fn test_get_without_language_preference_serves_default() {
    let resource = resource("test.txt", "test2.html");

    let response = resource.get(&Request::new()).unwrap();

    assert_eq!(response.body(), fixture_bytes("test.txt"));
    assert_eq!(
        response.header("content-type"),
        Some("text/plain; charset=utf-8")
    );
    assert_eq!(response.header("content-language"), Some("en"));
}

#[test]
fn test_get_with_unsupported_language_falls_back_to_default() {
    let resource = resource("test.txt", "test2.html");

    let request = Request::new().with_header("Accept-Language", "lt");
    let response = resource.get(&request).unwrap();

    assert_eq!(response.body(), fixture_bytes("test.txt"));
    assert_eq!(
        response.header("content-type"),
        Some("text/plain; charset=utf-8")
    );
    assert_eq!(response.header("content-language"), Some("en"));
}

#[test]
fn test_get_with_supported_language_serves_that_variant() {
    let resource = resource("test.html", "test2.html");

    let request = Request::new().with_header("Accept-Language", "fr");
    let response = resource.get(&request).unwrap();

    assert_eq!(response.body(), fixture_bytes("test2.html"));
    assert_eq!(
        response.header("content-type"),
        Some("text/html; charset=utf-8")
    );
    assert_eq!(response.header("content-language"), Some("fr"));
}

#[test]
fn test_head_without_language_preference_serves_default() {
    let resource = resource("test.txt", "test2.html");

    let response = resource.head(&Request::new()).unwrap();

    assert!(response.body().is_empty());
    assert_eq!(
        response.header("content-type"),
        Some("text/plain; charset=utf-8")
    );
    assert_eq!(response.header("content-language"), Some("en"));
}

#[test]
fn test_head_with_unsupported_language_falls_back_to_default() {
    let resource = resource("test.txt", "test2.html");

    let request = Request::new().with_header("Accept-Language", "lt");
    let response = resource.head(&request).unwrap();

    assert!(response.body().is_empty());
    assert_eq!(
        response.header("content-type"),
        Some("text/plain; charset=utf-8")
    );
}

#[test]
fn test_head_with_supported_language_serves_that_variant() {
    let resource = resource("test.html", "test2.html");

    let request = Request::new().with_header("Accept-Language", "fr");
    let response = resource.head(&request).unwrap();

    assert!(response.body().is_empty());
    assert_eq!(
        response.header("content-type"),
        Some("text/html; charset=utf-8")
    );
    assert_eq!(response.header("content-language"), Some("fr"));
}

#[test]
fn test_no_traversal_below_a_resource() {
    let resource = resource("test.txt", "test2.html");

    let err = resource.traverse("_data").unwrap_err();
    assert!(matches!(
        err,
        Error::Resource(ResourceError::NotFound { .. })
    ));
}

#[test]
fn test_set_default_language_rejects_unsupported() {
    let variants = vec![
        ("en".to_string(), FileData::new(fixture_path("test.txt"))),
        ("lt".to_string(), FileData::new(fixture_path("test.txt"))),
        ("fr".to_string(), FileData::new(fixture_path("test.txt"))),
    ];
    let mut resource = I18nFileResourceFactory::new(variants, "fr")
        .unwrap()
        .bind(setup());

    let err = resource.set_default_language("ru").unwrap_err();
    assert!(matches!(err, ResourceError::UnsupportedLanguage { .. }));
    assert_eq!(resource.default_language(), "fr");
}

#[test]
fn test_default_language_round_trip() {
    let mut resource = resource("test.txt", "test2.html");

    assert_eq!(resource.default_language(), "en");
    resource.set_default_language("fr").unwrap();
    assert_eq!(resource.default_language(), "fr");
}

#[test]
fn test_available_languages() {
    let resource = resource("test.txt", "test2.html");
    assert_eq!(resource.available_languages(), ["en", "fr"]);
}
