use crate::singly::LinkedList;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul};

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

/// Lexicographic comparison, like slices: a strict prefix compares less.
impl<T: PartialOrd> PartialOrd for LinkedList<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for LinkedList<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: Hash> Hash for LinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for elt in self {
            elt.hash(state);
        }
    }
}

impl<T, const N: usize> From<[T; N]> for LinkedList<T> {
    fn from(array: [T; N]) -> Self {
        array.into_iter().collect()
    }
}

impl<T> LinkedList<T> {
    /// Returns `true` if the `LinkedList` contains an element equal to the
    /// given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_seq::LinkedList;
    ///
    /// let list = LinkedList::from([0, 1, 2]);
    /// assert_eq!(list.contains(&0), true);
    /// assert_eq!(list.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|e| e == x)
    }

    /// Returns a copy of the list built from freshly allocated nodes.
    /// Same as [`Clone::clone`].
    pub fn copy(&self) -> Self
    where
        T: Clone,
    {
        self.clone()
    }

    /// Returns a new list holding the elements of `self` followed by the
    /// elements of `other`. Neither operand is modified.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_seq::LinkedList;
    ///
    /// let a = LinkedList::from([1, 2, 3]);
    /// let b = LinkedList::from([4, 5]);
    /// assert_eq!(a.concat(&b), LinkedList::from([1, 2, 3, 4, 5]));
    /// assert_eq!(&b + &a, LinkedList::from([4, 5, 1, 2, 3]));
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
    /// use linked_seq::LinkedList;
    ///
    /// let list = LinkedList::from([1, 2]);
    /// assert_eq!(list.repeat(3), LinkedList::from([1, 2, 1, 2, 1, 2]));
    /// assert!(list.repeat(-3).is_empty());
    /// assert_eq!(&list * 2, LinkedList::from([1, 2, 1, 2]));
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

impl<T: Clone> Add for &LinkedList<T> {
    type Output = LinkedList<T>;

    fn add(self, other: Self) -> Self::Output {
        self.concat(other)
    }
}

impl<T: Clone> Mul<isize> for &LinkedList<T> {
    type Output = LinkedList<T>;

    fn mul(self, times: isize) -> Self::Output {
        self.repeat(times)
    }
}

#[cfg(test)]
mod tests {
    use crate::LinkedList;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_equality() {
        let data = LinkedList::from([1, 2, 3]);
        let another = LinkedList::from([1, 2, 3]);
        assert!(another == data);
        assert!(!(another != data));
        assert!(another != LinkedList::from([4, 5, 6, 7]));
        assert_eq!(LinkedList::<i32>::new(), LinkedList::new());
        assert_eq!(hash_of(&data), hash_of(&another));
    }

    #[test]
    fn test_comparison() {
        let data = LinkedList::from([1, 2, 3]);
        assert!(LinkedList::from([1, 2, 4]) > data);
        assert!(!(LinkedList::from([1, 2, 4]) < data));
        assert!(LinkedList::from([1, 10]) > data);
        let same = LinkedList::from([1, 2, 3]);
        assert!(same >= data);
        assert!(same <= data);
        assert!(!(same > data));
        assert!(LinkedList::from([1, 2, 3, -4]) > data);
        assert!(LinkedList::new() < data);
    }

    #[test]
    fn test_copy() {
        let data = LinkedList::from([4, 5, 6, 7]);
        let mut copied = data.copy();
        assert_eq!(copied, data);
        copied.set(0, 400).unwrap();
        assert_ne!(copied, data);
        assert_eq!(data.get(0), Ok(&4));
    }

    #[test]
    fn test_concat() {
        let a = LinkedList::from([1, 2, 3]);
        let b = LinkedList::from([4, 5, 6, 7]);
        let single = LinkedList::from([0]);

        let ab = &a + &b;
        assert_eq!(Vec::from_iter(ab.iter().copied()), vec![1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(ab.len(), 7);
        let ba = &b + &a;
        assert_eq!(Vec::from_iter(ba.iter().copied()), vec![4, 5, 6, 7, 1, 2, 3]);
        assert_eq!(a, LinkedList::from([1, 2, 3]));
        assert_eq!(b, LinkedList::from([4, 5, 6, 7]));

        let chained = &(&(&a + &b) + &a) + &single;
        assert_eq!(
            Vec::from_iter(chained),
            vec![1, 2, 3, 4, 5, 6, 7, 1, 2, 3, 0]
        );
    }

    #[test]
    fn test_repeat() {
        let data = LinkedList::from([1, 2, 3]);
        let tripled = &data * 3;
        assert_eq!(
            Vec::from_iter(tripled.iter().copied()),
            vec![1, 2, 3, 1, 2, 3, 1, 2, 3]
        );
        assert_eq!(tripled.len(), 9);
        assert!(data.repeat(0).is_empty());
        assert_eq!(data.repeat(-3).len(), 0);
        assert_eq!(data, LinkedList::from([1, 2, 3]));
    }
}
