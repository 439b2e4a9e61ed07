use crate::doubly::{DoublyLinkedList, Node};
use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ptr::NonNull;

/// The elements an iterator has not yielded yet: `remaining` nodes from
/// `front` up to `back`, both included. Once `remaining` is 0 neither end
/// is read again.
struct Span<T> {
    front: NonNull<Node<T>>,
    back: NonNull<Node<T>>,
    remaining: usize,
}

impl<T> Clone for Span<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Span<T> {}

impl<T> Span<T> {
    fn of(list: &DoublyLinkedList<T>) -> Self {
        Span {
            front: list.front_node(),
            back: list.back_node(),
            remaining: list.len(),
        }
    }

    fn take_front(&mut self) -> Option<NonNull<Node<T>>> {
        self.remaining = self.remaining.checked_sub(1)?;
        let node = self.front;
        // SAFETY: `node` is an element node, so its `next` link is valid.
        self.front = unsafe { Node::next(node) };
        Some(node)
    }

    fn take_back(&mut self) -> Option<NonNull<Node<T>>> {
        self.remaining = self.remaining.checked_sub(1)?;
        let node = self.back;
        // SAFETY: `node` is an element node, so its `prev` link is valid.
        self.back = unsafe { Node::prev(node) };
        Some(node)
    }
}

/// An iterator over the elements of a `DoublyLinkedList`.
///
/// It walks inwards from both ends and stops after yielding `len`
/// elements in total.
///
/// ```compile_fail
/// use linked_seq::DoublyLinkedList;
///
/// let mut list = DoublyLinkedList::from([1, 2, 3]);
/// let mut iter = list.iter();
///
/// // the list is borrowed by `iter`
/// list.push_back(4);
/// println!("{:?}", iter.next());
/// ```
pub struct Iter<'a, T: 'a> {
    span: Span<T>,
    _marker: PhantomData<&'a T>,
}

impl<'a, T: 'a> Iter<'a, T> {
    pub(crate) fn new(list: &'a DoublyLinkedList<T>) -> Self {
        Self {
            span: Span::of(list),
            _marker: PhantomData,
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            span: self.span,
            _marker: PhantomData,
        }
    }
}

/// Lists the elements not yet yielded.
impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, T: 'a> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.span.take_front()?;
        // SAFETY: the list is borrowed for `'a` and `node` holds an element.
        unsafe { Some(&(*node.as_ptr()).element) }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.span.remaining, Some(self.span.remaining))
    }

    fn last(mut self) -> Option<Self::Item> {
        self.next_back()
    }
}

impl<'a, T: 'a> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let node = self.span.take_back()?;
        // SAFETY: see `next`.
        unsafe { Some(&(*node.as_ptr()).element) }
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// A mutable iterator over the elements of a `DoublyLinkedList`.
///
/// The list can't be read while an `IterMut` is alive.
/// ```compile_fail
/// use linked_seq::DoublyLinkedList;
///
/// let mut list = DoublyLinkedList::from([1, 2, 3]);
/// let mut iter = list.iter_mut();
/// println!("{:?}", list.back());
/// println!("{:?}", iter.next());
/// ```
pub struct IterMut<'a, T: 'a> {
    span: Span<T>,
    _marker: PhantomData<&'a mut T>,
}

impl<'a, T: 'a> IterMut<'a, T> {
    pub(crate) fn new(list: &'a mut DoublyLinkedList<T>) -> Self {
        Self {
            span: Span::of(list),
            _marker: PhantomData,
        }
    }
}

impl<T> fmt::Debug for IterMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IterMut")
            .field("remaining", &self.span.remaining)
            .finish()
    }
}

impl<'a, T: 'a> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.span.take_front()?;
        // SAFETY: the list is borrowed mutably for `'a`, and the span hands
        // out each node once.
        unsafe { Some(&mut (*node.as_ptr()).element) }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.span.remaining, Some(self.span.remaining))
    }

    fn last(mut self) -> Option<Self::Item> {
        self.next_back()
    }
}

impl<'a, T: 'a> DoubleEndedIterator for IterMut<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let node = self.span.take_back()?;
        // SAFETY: see `next`.
        unsafe { Some(&mut (*node.as_ptr()).element) }
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

/// An owning iterator over the elements of a `DoublyLinkedList`.
///
/// This `struct` is created by the [`into_iter`] method on [`DoublyLinkedList`]
/// (provided by the `IntoIterator` trait).
///
/// [`into_iter`]: DoublyLinkedList::into_iter
pub struct IntoIter<T> {
    list: DoublyLinkedList<T>,
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

    fn last(mut self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.next_back()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for DoublyLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a DoublyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DoublyLinkedList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = DoublyLinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|item| self.push_back(item));
        trace_event!(len = self.len, "extended list");
    }
}

impl<'a, T: 'a + Copy> Extend<&'a T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied())
    }
}

unsafe impl<T: Sync> Send for Iter<'_, T> {}

unsafe impl<T: Sync> Sync for Iter<'_, T> {}

unsafe impl<T: Send> Send for IterMut<'_, T> {}

unsafe impl<T: Sync> Sync for IterMut<'_, T> {}

#[cfg(test)]
mod tests {
    use crate::DoublyLinkedList;

    #[test]
    fn iter_matches_vec_from_both_ends() {
        for n in 0..7 {
            let vec = Vec::from_iter(0..n);
            let list = DoublyLinkedList::from_iter(0..n);
            for front in 0..=n {
                for back in 0..=(n - front) {
                    let mut iter = list.iter();
                    let mut expected = vec.iter();
                    assert!(iter.by_ref().take(front).eq(expected.by_ref().take(front)));
                    assert!(iter.by_ref().rev().take(back).eq(expected.by_ref().rev().take(back)));
                    assert_eq!(iter.len(), n - front - back);
                    assert!(iter.clone().eq(expected.clone()));
                    assert!(iter.rev().eq(expected.rev()));
                }
            }
        }
    }

    #[test]
    fn iter_alternating_ends_meet_once() {
        let list = DoublyLinkedList::from_iter(0..5);
        let mut iter = list.iter();
        let mut seen = Vec::new();
        loop {
            let Some(x) = iter.next() else { break };
            seen.push(*x);
            let Some(y) = iter.next_back() else { break };
            seen.push(*y);
        }
        assert_eq!(seen, vec![0, 4, 1, 3, 2]);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
        assert_eq!(iter.len(), 0);
    }

    #[test]
    fn iter_mut_from_both_ends() {
        let mut list = DoublyLinkedList::from([1, 0, 0, 4]);
        let mut iter = list.iter_mut();
        *iter.next().unwrap() *= 10;
        *iter.next_back().unwrap() *= 100;
        assert_eq!(iter.len(), 2);
        assert_eq!(format!("{:?}", iter), "IterMut { remaining: 2 }");
        list.check_links();
        assert_eq!(Vec::from_iter(list), vec![10, 0, 0, 400]);

        let mut empty = DoublyLinkedList::<i32>::new();
        assert_eq!(empty.iter_mut().next_back(), None);
        assert_eq!((&mut empty).into_iter().next(), None);
    }

    #[test]
    fn iter_debug_shows_remaining() {
        let list = DoublyLinkedList::from([1, 2, 3]);
        let mut iter = list.iter();
        assert_eq!(format!("{:?}", iter), "[1, 2, 3]");
        iter.next_back();
        assert_eq!(format!("{:?}", iter), "[1, 2]");
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(format!("{:?}", iter), "[2]");
    }

    #[test]
    fn reverse_walk_matches_forward() {
        let list = DoublyLinkedList::from_iter(0..20);
        let mut forward = Vec::from_iter(list.iter().copied());
        forward.reverse();
        assert_eq!(Vec::from_iter(list.iter_rev().copied()), forward);
        assert_eq!(list.iter().last(), Some(&19));
    }

    #[test]
    fn into_iter_both_ends() {
        let list = DoublyLinkedList::from(['a', 'b', 'c', 'd']);
        let mut iter = list.into_iter();
        assert_eq!(iter.len(), 4);
        assert_eq!(iter.next(), Some('a'));
        assert_eq!(iter.next_back(), Some('d'));
        assert_eq!(iter.len(), 2);
        assert_eq!(Vec::from_iter(iter), vec!['b', 'c']);
    }

    #[test]
    fn extend_at_the_back() {
        let mut list = DoublyLinkedList::from([1, 2]);
        list.extend(&[3, 4]);
        list.extend(vec![5]);
        list.check_links();
        assert_eq!(Vec::from_iter(list), vec![1, 2, 3, 4, 5]);
    }
}
