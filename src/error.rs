use std::fmt;

/// Errors returned by the fallible operations of
/// [`LinkedList`](crate::LinkedList) and
/// [`DoublyLinkedList`](crate::DoublyLinkedList).
///
/// A failed operation never modifies the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The index is outside the valid range after negative indices are
    /// counted from the end.
    IndexOutOfRange { index: isize, len: usize },
    /// The operation needs at least one element.
    Empty,
    /// No element compares equal to the requested value.
    ValueNotFound,
}

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A position could not be resolved.
    Index,
    /// A value could not be found.
    Value,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::IndexOutOfRange { .. } | Error::Empty => ErrorKind::Index,
            Error::ValueNotFound => ErrorKind::Value,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::IndexOutOfRange { index, len } => {
                write!(f, "index {} out of range for list of length {}", index, len)
            }
            Error::Empty => f.write_str("cannot pop from an empty list"),
            Error::ValueNotFound => f.write_str("value not found in list"),
        }
    }
}

impl std::error::Error for Error {}

/// `Result` alias with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_kind() {
        assert_eq!(
            Error::IndexOutOfRange { index: 3, len: 2 }.kind(),
            ErrorKind::Index
        );
        assert_eq!(Error::Empty.kind(), ErrorKind::Index);
        assert_eq!(Error::ValueNotFound.kind(), ErrorKind::Value);
    }

    #[test]
    fn error_display() {
        assert_eq!(
            Error::IndexOutOfRange { index: -4, len: 3 }.to_string(),
            "index -4 out of range for list of length 3"
        );
        assert_eq!(Error::Empty.to_string(), "cannot pop from an empty list");
        assert_eq!(Error::ValueNotFound.to_string(), "value not found in list");
    }
}
