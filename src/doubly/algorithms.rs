use crate::doubly::DoublyLinkedList;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul};

impl<T: PartialEq> PartialEq for DoublyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for DoublyLinkedList<T> {}

impl<T: PartialOrd> PartialOrd for DoublyLinkedList<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for DoublyLinkedList<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T: Clone> Clone for DoublyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    fn clone_from(&mut self, other: &Self) {
        while self.len() > other.len() {
            self.pop_back();
        }
        let mut iter_other = other.iter();
        for (elem, elem_other) in self.iter_mut().zip(&mut iter_other) {
            elem.clone_from(elem_other);
        }
        self.extend(iter_other.cloned());
    }
}

impl<T: Hash> Hash for DoublyLinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for elt in self {
            elt.hash(state);
        }
    }
}

impl<T, const N: usize> From<[T; N]> for DoublyLinkedList<T> {
    fn from(array: [T; N]) -> Self {
        array.into_iter().collect()
    }
}

impl<T> DoublyLinkedList<T> {
    /// Returns `true` if the `DoublyLinkedList` contains an element equal to
    /// the given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_seq::DoublyLinkedList;
    ///
    /// let mut list = DoublyLinkedList::new();
    ///
    /// list.push_back(0);
    /// list.push_back(1);
    /// list.push_back(2);
    ///
    /// assert_eq!(list.contains(&0), true);
    /// assert_eq!(list.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|e| e == x)
    }

    /// Same as [`Clone::clone`].
    pub fn copy(&self) -> Self
    where
        T: Clone,
    {
        self.clone()
    }

    /// Returns a new list holding the elements of `self` followed by the
    /// elements of `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_seq::DoublyLinkedList;
    ///
    /// let a = DoublyLinkedList::from([1, 2]);
    /// let b = DoublyLinkedList::from([3]);
    /// assert_eq!(a.concat(&b), DoublyLinkedList::from([1, 2, 3]));
    /// assert_eq!(&b + &a, DoublyLinkedList::from([3, 1, 2]));
    /// ```
    pub fn concat(&self, other: &Self) -> Self
    where
        T: Clone,
    {
        let list: Self = self.iter().chain(other).cloned().collect();
        trace_event!(len = list.len(), "concatenated lists");
        list
    }

    /// Returns a new list holding the elements of `self` repeated `times`
    /// times. A `times` of zero or less yields an empty list.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_seq::DoublyLinkedList;
    ///
    /// let list = DoublyLinkedList::from(["x"]);
    /// assert_eq!(&list * 3, DoublyLinkedList::from(["x", "x", "x"]));
    /// assert!((&list * -1).is_empty());
    /// ```
    pub fn repeat(&self, times: isize) -> Self
    where
        T: Clone,
    {
        let times = usize::try_from(times).unwrap_or(0);
        let list: Self = (0..times).flat_map(|_| self.iter().cloned()).collect();
        trace_event!(times, len = list.len(), "repeated list");
        list
    }
}

impl<T: Clone> Add for &DoublyLinkedList<T> {
    type Output = DoublyLinkedList<T>;

    fn add(self, other: Self) -> Self::Output {
        self.concat(other)
    }
}

/// Concatenates two owned lists by relinking, without copying any element.
///
/// # Examples
///
/// ```
/// use linked_seq::DoublyLinkedList;
///
/// let list = DoublyLinkedList::from([1, 2]) + DoublyLinkedList::from([3]);
/// assert_eq!(list, DoublyLinkedList::from([1, 2, 3]));
/// ```
impl<T> Add for DoublyLinkedList<T> {
    type Output = DoublyLinkedList<T>;

    fn add(mut self, mut other: Self) -> Self::Output {
        self.append_list(&mut other);
        self
    }
}

impl<T: Clone> Mul<isize> for &DoublyLinkedList<T> {
    type Output = DoublyLinkedList<T>;

    fn mul(self, times: isize) -> Self::Output {
        self.repeat(times)
    }
}

#[cfg(test)]
mod tests {
    use crate::DoublyLinkedList;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_equality_and_order() {
        let data = DoublyLinkedList::from([1, 2, 3]);
        assert_eq!(data, DoublyLinkedList::from([1, 2, 3]));
        assert_ne!(data, DoublyLinkedList::from([1, 2]));
        assert_eq!(hash_of(&data), hash_of(&DoublyLinkedList::from([1, 2, 3])));
        assert!(DoublyLinkedList::from([1, 2, 4]) > data);
        assert!(DoublyLinkedList::from([1, 2]) < data);
        assert!(DoublyLinkedList::new() < data);
        assert!(DoublyLinkedList::from([0, 9, 9, 9]) < data);
    }

    #[test]
    fn test_clone_from() {
        let source = DoublyLinkedList::from([7, 8, 9]);
        for start in [vec![], vec![1], vec![1, 2, 3], vec![1, 2, 3, 4, 5]] {
            let mut target = DoublyLinkedList::from_iter(start);
            target.clone_from(&source);
            target.check_links();
            assert_eq!(target, source);
        }
    }

    #[test]
    fn test_copy_is_independent() {
        let data = DoublyLinkedList::from([4, 5, 6]);
        let mut copied = data.copy();
        copied.append(7);
        *copied.front_mut().unwrap() = 40;
        assert_eq!(data, DoublyLinkedList::from([4, 5, 6]));
        assert_eq!(copied, DoublyLinkedList::from([40, 5, 6, 7]));
    }

    #[test]
    fn test_concat_and_repeat() {
        let a = DoublyLinkedList::from([1, 2, 3]);
        let b = DoublyLinkedList::from([4, 5, 6, 7]);
        let ab = &a + &b;
        ab.check_links();
        assert_eq!(Vec::from_iter(ab.iter_rev().copied()), vec![7, 6, 5, 4, 3, 2, 1]);
        assert_eq!(a.len(), 3);
        assert_eq!(b.len(), 4);

        let moved = a.clone() + DoublyLinkedList::new();
        assert_eq!(moved, a);
        let moved = DoublyLinkedList::new() + b.clone();
        assert_eq!(moved, b);

        let tripled = &a * 3;
        tripled.check_links();
        assert_eq!(tripled.len(), 9);
        assert_eq!(tripled.get(-4), Ok(&3));
        assert!(a.repeat(0).is_empty());
        assert!(a.repeat(isize::MIN).is_empty());
    }
}
