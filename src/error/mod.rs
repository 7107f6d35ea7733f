mod io;
mod manifest;
mod resource;

pub use io::IoError;
pub use manifest::ManifestError;
pub use resource::ResourceError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] IoError),

    #[error(transparent)]
    Resource(#[from] ResourceError),

    #[error(transparent)]
    Manifest(#[from] ManifestError),
}

pub type Result<T> = std::result::Result<T, Error>;
