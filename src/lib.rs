//! I18n Resource
//!
//! Language-negotiated static file resources for HTTP publishers: a
//! resource wraps one file per language, negotiates the variant matching
//! the client's Accept-Language preferences and serves it with GET/HEAD
//! semantics.

pub mod cli;
pub mod error;
pub mod http;
pub mod logging;
pub mod manifest;
pub mod negotiation;
pub mod registry;
pub mod resource;

pub use error::{Error, Result};
pub use http::{Request, Response};
pub use negotiation::Negotiator;
pub use registry::Registry;
pub use resource::{FileData, FileResource, I18nAware, I18nFileResource, I18nFileResourceFactory};
