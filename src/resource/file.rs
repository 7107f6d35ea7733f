use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::error::{IoError, ResourceError};
use crate::http::{Request, Response};
use crate::registry::Registry;

/// Guesses a content type from the file extension.
pub fn content_type_for(path: &Path) -> String {
    mime_guess::from_path(path)
        .first_raw()
        .unwrap_or("application/octet-stream")
        .to_string()
}

pub(crate) fn format_http_date(date: DateTime<Utc>) -> String {
    date.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

fn if_modified_since(request: &Request) -> Option<DateTime<Utc>> {
    let raw = request.header("if-modified-since")?;
    DateTime::parse_from_rfc2822(raw)
        .ok()
        .map(|date| date.with_timezone(&Utc))
}

/// A file on disk together with the name and content type it is served
/// under.
#[derive(Debug, Clone)]
pub struct FileData {
    path: PathBuf,
    filename: String,
    content_type: String,
}

impl FileData {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let filename = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default()
            .to_string();
        let content_type = content_type_for(&path);
        Self {
            path,
            filename,
            content_type,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn read(&self) -> Result<Vec<u8>, IoError> {
        fs::read(&self.path).map_err(|source| match source.kind() {
            std::io::ErrorKind::NotFound => IoError::file_not_found(&self.path),
            _ => IoError::read_error(&self.path, source),
        })
    }

    /// Last modification time, if the file is stat-able.
    pub fn modified(&self) -> Option<DateTime<Utc>> {
        let metadata = fs::metadata(&self.path).ok()?;
        metadata.modified().ok().map(Into::into)
    }
}

/// `text/*` responses advertise utf-8 when the client accepts it. A
/// registry without a charset adapter behaves as if the client accepts
/// everything.
fn negotiated_content_type(data: &FileData, registry: &Registry, request: &Request) -> String {
    let content_type = data.content_type();
    if !content_type.starts_with("text/") {
        return content_type.to_string();
    }

    let accepts_utf8 = match registry.charset_adapter() {
        Some(adapter) => {
            let charsets = adapter.preferred_charsets(request);
            charsets.iter().any(|cs| cs == "utf-8" || cs == "*")
        }
        None => true,
    };

    if accepts_utf8 {
        format!("{content_type}; charset=utf-8")
    } else {
        content_type.to_string()
    }
}

pub(crate) fn serve(
    data: &FileData,
    registry: &Registry,
    request: &Request,
    include_body: bool,
) -> crate::Result<Response> {
    let modified = data.modified();

    if let (Some(modified), Some(since)) = (modified, if_modified_since(request)) {
        // HTTP dates have second resolution.
        if modified.timestamp() <= since.timestamp() {
            debug!(file = %data.filename(), "not modified");
            return Ok(Response::not_modified());
        }
    }

    let body = data.read()?;
    let length = body.len();

    let mut response = if include_body {
        Response::ok(body)
    } else {
        Response::ok(Vec::new())
    };
    response.set_header(
        "Content-Type",
        negotiated_content_type(data, registry, request),
    );
    response.set_header("Content-Length", length.to_string());
    if let Some(modified) = modified {
        response.set_header("Last-Modified", format_http_date(modified));
    }

    Ok(response)
}

/// A single published file. GET serves the bytes, HEAD serves the headers
/// only, and traversal below the resource is always a 404.
pub struct FileResource {
    data: FileData,
    registry: Arc<Registry>,
}

impl std::fmt::Debug for FileResource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileResource")
            .field("data", &self.data)
            .finish_non_exhaustive()
    }
}

impl FileResource {
    pub fn new(data: FileData, registry: Arc<Registry>) -> Self {
        Self { data, registry }
    }

    pub fn data(&self) -> &FileData {
        &self.data
    }

    pub fn get(&self, request: &Request) -> crate::Result<Response> {
        serve(&self.data, &self.registry, request, true)
    }

    pub fn head(&self, request: &Request) -> crate::Result<Response> {
        serve(&self.data, &self.registry, request, false)
    }

    pub fn traverse(&self, name: &str) -> crate::Result<FileResource> {
        Err(ResourceError::not_found(name).into())
    }
}
