use crate::http::Headers;

/// Incoming request fixture: the slice of an HTTP request the publisher
/// needs for content negotiation, namely its headers.
#[derive(Debug, Clone, Default)]
pub struct Request {
    headers: Headers,
}

impl Request {
    pub fn new() -> Self {
        Self {
            headers: Headers::new(),
        }
    }

    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.set(name, value);
        self
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }
}
