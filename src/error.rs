use quick_xml::Error as XMLError;
use std::{str::Utf8Error, string::FromUtf8Error};
use thiserror::Error;

/// Wrapper around `std::Result`
pub type Result<T> = std::result::Result<T, Error>;

/// Error types
///
/// None of these are transient. A call that returns an error has left the tree untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Ordinary elements need a non-empty name.
    #[error("Element name cannot be empty")]
    InvalidName,
    /// The document node is identified by its prolog, not by a name.
    #[error("Document node cannot have a name")]
    DocumentHasNoName,
    /// The element would become its own descendant.
    #[error("Cannot append an element to itself or to one of its descendants")]
    CyclicAppend,
    /// The element was created in another document.
    #[error("Element belongs to another document")]
    ForeignElement,
    /// The document node is always the root of its tree.
    /// Use `element.is_document()` to check before assigning it to another parent.
    #[error("Document node cannot move")]
    DocumentCannotMove,
    /// You need to call `element.detach()` before assigning another parent.
    #[error("Element already has a parent. Call detach() before changing parent.")]
    HasAParent,
    /// A value in the XML declaration is not valid UTF-8.
    #[error("Cannot decode XML declaration")]
    CannotDecode,
    /// The XML declaration holds a value that makes no sense.
    #[error("Malformed XML: {0}")]
    MalformedXML(String),
}

impl From<XMLError> for Error {
    fn from(err: XMLError) -> Error {
        match err {
            XMLError::Utf8(_) => Error::CannotDecode,
            err => Error::MalformedXML(err.to_string()),
        }
    }
}

impl From<FromUtf8Error> for Error {
    fn from(_: FromUtf8Error) -> Error {
        Error::CannotDecode
    }
}

impl From<Utf8Error> for Error {
    fn from(_: Utf8Error) -> Error {
        Error::CannotDecode
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8_errors_map_to_cannot_decode() {
        let bytes = vec![0xff, 0xfe];
        let err: Error = String::from_utf8(bytes.clone()).unwrap_err().into();
        assert_eq!(err, Error::CannotDecode);
        let err: Error = std::str::from_utf8(&bytes).unwrap_err().into();
        assert_eq!(err, Error::CannotDecode);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Error::MalformedXML("bad".to_string()).to_string(),
            "Malformed XML: bad"
        );
        assert_eq!(Error::InvalidName.to_string(), "Element name cannot be empty");
    }
}
