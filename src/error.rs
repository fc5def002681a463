//! Errors

use std::fmt;

/// Errors reported by page allocation and image export
#[derive(Debug,Clone,PartialEq)]
pub enum Error {
    /// Width or height of zero was requested
    ZeroSize,
    /// Page memory could not be allocated
    Alloc { bytes: usize },
    /// Image encoding or decoding failed
    Image(String),
    /// Image file could not be written
    Io(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::ZeroSize => write!(f, "cannot create pages with 0 width or height"),
            Error::Alloc { bytes } => write!(f, "not enough memory to allocate offscreen buffers ({} bytes)", bytes),
            Error::Image(msg) => write!(f, "image error: {}", msg),
            Error::Io(msg) => write!(f, "io error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<image::ImageError> for Error {
    fn from(e: image::ImageError) -> Error {
        Error::Image(e.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e.to_string())
    }
}
