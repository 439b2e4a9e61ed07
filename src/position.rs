//! Index normalization shared by both lists.
//!
//! A negative index counts from the end: `-1` is the last element and
//! `-len` the first one. Element positions must then fall in `0..len`,
//! insertion positions in `0..=len`.

use crate::error::{Error, Result};

/// Resolves `index` to an element position in `0..len`.
pub(crate) fn element(index: isize, len: usize) -> Result<usize> {
    resolve(index, len, len)
}

/// Resolves `index` to an insertion position in `0..=len`.
///
/// `-1` resolves to `len - 1`, so the new element lands in front of the
/// current last element. Use `len` (or `push_back`) to append.
pub(crate) fn insertion(index: isize, len: usize) -> Result<usize> {
    resolve(index, len, len + 1)
}

fn resolve(index: isize, len: usize, bound: usize) -> Result<usize> {
    let at = if index < 0 {
        len.checked_sub(index.unsigned_abs())
    } else {
        Some(index as usize)
    };
    match at {
        Some(at) if at < bound => Ok(at),
        _ => {
            debug_event!(index, len, "index out of range");
            Err(Error::IndexOutOfRange { index, len })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_positions() {
        assert_eq!(element(0, 3), Ok(0));
        assert_eq!(element(2, 3), Ok(2));
        assert_eq!(element(-1, 3), Ok(2));
        assert_eq!(element(-3, 3), Ok(0));
        assert_eq!(
            element(3, 3),
            Err(Error::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(
            element(-4, 3),
            Err(Error::IndexOutOfRange { index: -4, len: 3 })
        );
        assert!(element(0, 0).is_err());
        assert!(element(-1, 0).is_err());
    }

    #[test]
    fn insertion_positions() {
        assert_eq!(insertion(0, 0), Ok(0));
        assert_eq!(insertion(3, 3), Ok(3));
        assert_eq!(insertion(-1, 3), Ok(2));
        assert_eq!(insertion(-3, 3), Ok(0));
        assert!(insertion(4, 3).is_err());
        assert!(insertion(-4, 3).is_err());
        assert!(insertion(-1, 0).is_err());
    }

    #[test]
    fn extreme_indices() {
        assert!(element(isize::MIN, 5).is_err());
        assert!(element(isize::MAX, 5).is_err());
        assert!(insertion(isize::MIN, usize::MAX / 2).is_err());
    }
}
