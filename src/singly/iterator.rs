use crate::singly::{LinkedList, Node};
use std::fmt;
use std::iter::FusedIterator;

/// An iterator over the elements of a `LinkedList`.
///
/// It walks the forward links from the first node until the end of the
/// list. The iterator borrows the list, so the list cannot be modified
/// while it is alive.
///
/// # Examples
///
/// ```compile_fail
/// use linked_seq::LinkedList;
///
/// let mut list = LinkedList::from([1, 2, 3]);
/// let mut iter = list.iter();
///
/// // Won't compile, because list is already borrowed immutably.
/// list.append(4);
/// println!("{:?}", iter.next());
/// ```
pub struct Iter<'a, T: 'a> {
    next: Option<&'a Node<T>>,
    len: usize,
}

impl<'a, T: 'a> Iter<'a, T> {
    pub(crate) fn new(list: &'a LinkedList<T>) -> Self {
        Self {
            next: list.head.as_deref(),
            len: list.len,
        }
    }
}

impl<'a, T: 'a> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for Iter<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.len).finish()
    }
}

impl<'a, T: 'a> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.as_deref();
        self.len -= 1;
        Some(&node.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T: 'a> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T: 'a> FusedIterator for Iter<'a, T> {}

/// A mutable iterator over the elements of a `LinkedList`.
///
/// Only the elements can be changed through it, not the links.
pub struct IterMut<'a, T: 'a> {
    next: Option<&'a mut Node<T>>,
    len: usize,
}

impl<'a, T: 'a> IterMut<'a, T> {
    pub(crate) fn new(list: &'a mut LinkedList<T>) -> Self {
        let len = list.len;
        Self {
            next: list.head.as_deref_mut(),
            len,
        }
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for IterMut<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IterMut").field(&self.len).finish()
    }
}

impl<'a, T: 'a> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next.take()?;
        self.next = node.next.as_deref_mut();
        self.len -= 1;
        Some(&mut node.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T: 'a> ExactSizeIterator for IterMut<'a, T> {}

impl<'a, T: 'a> FusedIterator for IterMut<'a, T> {}

/// An owning iterator over the elements of a `LinkedList`.
///
/// This `struct` is created by the [`into_iter`] method on [`LinkedList`]
/// (provided by the `IntoIterator` trait).
///
/// [`into_iter`]: LinkedList::into_iter
pub struct IntoIter<T> {
    list: LinkedList<T>,
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter")
            .field("list", &self.list)
            .finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.list.len;
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut LinkedList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

/// Appends every element of `iter` in order.
///
/// The end of the list is located once, so extending a list of length *n*
/// with *m* elements computes in *O*(*n* + *m*) time.
impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut added = 0;
        let mut tail = self.link_mut(self.len);
        for element in iter {
            tail = &mut tail.insert(Node::new(element, None)).next;
            added += 1;
        }
        self.len += added;
        trace_event!(added, len = self.len, "extended list");
    }
}

impl<'a, T: 'a + Copy> Extend<&'a T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use crate::LinkedList;

    #[test]
    fn test_iter() {
        fn test_case<I>(input: I)
        where
            I: IntoIterator<Item = i32>,
        {
            let mut vec = Vec::from_iter(input);
            let mut list = LinkedList::from_iter(vec.clone());
            let len = vec.len();

            let mut iter = list.iter();
            for (i, item) in vec.iter().enumerate() {
                assert_eq!(iter.next(), Some(item));
                assert_eq!(iter.len(), len - i - 1);
            }
            assert_eq!(iter.next(), None);
            assert_eq!(iter.next(), None);

            let mut iter = list.iter_mut();
            for (i, item) in vec.iter_mut().enumerate() {
                assert_eq!(iter.next(), Some(item));
                assert_eq!(iter.len(), len - i - 1);
            }
            assert_eq!(iter.next(), None);

            assert_eq!(Vec::from_iter(list), vec);
        }
        test_case(0..10);
        test_case(0..2);
        test_case(0..1);
        test_case(0..0);
    }

    #[test]
    fn test_iter_restart() {
        let list = LinkedList::from([1, 2, 3]);
        for val in &list {
            assert_eq!(*val, 1);
            break;
        }
        assert_eq!(Vec::from_iter(list.iter().copied()), vec![1, 2, 3]);
        assert_eq!(list.iter().count(), list.len());
    }

    #[test]
    fn test_iter_mut() {
        let mut list = LinkedList::from([1, 2, 3]);
        for element in &mut list {
            *element *= 10;
        }
        assert_eq!(Vec::from_iter(list), vec![10, 20, 30]);
    }

    #[test]
    fn test_extend() {
        let mut list = LinkedList::from([1, 2, 3]);
        let other = LinkedList::from([4, 5, 6, 7]);
        list.extend(&other);
        assert_eq!(Vec::from_iter(other.iter().copied()), vec![4, 5, 6, 7]);
        assert_eq!(Vec::from_iter(list.iter().copied()), vec![1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(list.len(), 7);

        list.extend(&LinkedList::new());
        assert_eq!(list.len(), 7);

        let mut empty = LinkedList::new();
        empty.extend(&list);
        assert_eq!(empty, list);

        let mut single = LinkedList::from([0]);
        let copy = single.clone();
        single.extend(copy);
        assert_eq!(Vec::from_iter(single), vec![0, 0]);
    }
}
