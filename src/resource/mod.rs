pub mod file;
pub mod i18n;

pub use file::{content_type_for, FileData, FileResource};
pub use i18n::{I18nAware, I18nFileResource, I18nFileResourceFactory};
