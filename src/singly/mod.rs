use std::fmt::{self, Debug, Display, Formatter};
use std::mem;

use crate::error::{Error, Result};
use crate::position;

pub use self::iterator::{IntoIter, Iter, IterMut};

pub mod iterator;

mod algorithms;

/// A singly linked list with owned nodes.
///
/// Every node owns its successor, and the list owns the first node. The
/// list keeps the number of nodes, so [`len`](LinkedList::len) is *O*(1),
/// but it does not keep a pointer to the last node: operations at the
/// back ([`append`](LinkedList::append), [`pop`](LinkedList::pop),
/// [`back`](LinkedList::back)) walk the whole list.
///
/// Indices are `isize`. A negative index counts from the end, so `-1`
/// is the last element.
///
/// # Examples
///
/// ```
/// use linked_seq::LinkedList;
///
/// let mut list = LinkedList::from([1, 2, 3]);
/// list.insert(0, 0).unwrap();
/// assert_eq!(list.get(-1), Ok(&3));
/// assert_eq!(list.pop(), Ok(3));
/// assert_eq!(list.to_string(), "LinkedList(0, 1, 2)");
/// ```
pub struct LinkedList<T> {
    head: Link<T>,
    len: usize,
}

pub(crate) type Link<T> = Option<Box<Node<T>>>;

pub(crate) struct Node<T> {
    pub(crate) element: T,
    pub(crate) next: Link<T>,
}

impl<T> Node<T> {
    fn new(element: T, next: Link<T>) -> Box<Self> {
        Box::new(Node { element, next })
    }
}

// private methods
impl<T> LinkedList<T> {
    /// Returns the link that owns the node at position `at`. For
    /// `at == len` this is the empty link after the last node.
    ///
    /// The caller must make sure `at <= len`.
    fn link_mut(&mut self, at: usize) -> &mut Link<T> {
        debug_assert!(at <= self.len);
        let mut link = &mut self.head;
        for _ in 0..at {
            link = match link {
                Some(node) => &mut node.next,
                None => break,
            };
        }
        link
    }

    fn node(&self, at: usize) -> Option<&Node<T>> {
        let mut node = self.head.as_deref();
        for _ in 0..at {
            node = node?.next.as_deref();
        }
        node
    }

    fn node_mut(&mut self, at: usize) -> Option<&mut Node<T>> {
        let mut node = self.head.as_deref_mut();
        for _ in 0..at {
            node = node?.next.as_deref_mut();
        }
        node
    }

    /// Splices a new node in so that it becomes position `at`.
    fn link_in(&mut self, at: usize, element: T) {
        let link = self.link_mut(at);
        let next = link.take();
        *link = Some(Node::new(element, next));
        self.len += 1;
    }

    /// Splices out the node at position `at` and returns its element.
    fn unlink(&mut self, at: usize) -> Option<T> {
        let link = self.link_mut(at);
        let mut node = link.take()?;
        *link = node.next.take();
        self.len -= 1;
        Some(node.element)
    }
}

impl<T> LinkedList<T> {
    /// Creates an empty `LinkedList`.
    ///
    /// # Examples
    /// ```
    /// use linked_seq::LinkedList;
    /// let list: LinkedList<u32> = LinkedList::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    pub const fn new() -> Self {
        LinkedList { head: None, len: 0 }
    }

    /// Returns the number of elements in *O*(1) time.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Removes all elements.
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    /// Provides a reference to the first element, or `None` if the list is
    /// empty.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.element)
    }

    /// Provides a mutable reference to the first element, or `None` if the
    /// list is empty.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head.as_deref_mut().map(|node| &mut node.element)
    }

    /// Provides a reference to the last element, or `None` if the list is
    /// empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    pub fn back(&self) -> Option<&T> {
        let last = self.len.checked_sub(1)?;
        self.node(last).map(|node| &node.element)
    }

    /// Provides a mutable reference to the last element, or `None` if the
    /// list is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        let last = self.len.checked_sub(1)?;
        self.node_mut(last).map(|node| &mut node.element)
    }

    /// Adds an element first in the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_seq::LinkedList;
    ///
    /// let mut list = LinkedList::new();
    /// list.push_front(2);
    /// list.push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    /// assert_eq!(list.len(), 2);
    /// ```
    pub fn push_front(&mut self, element: T) {
        self.link_in(0, element);
    }

    /// Removes the first element and returns it, or `None` if the list is
    /// empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    pub fn pop_front(&mut self) -> Option<T> {
        self.unlink(0)
    }

    /// Appends an element to the back of the list.
    ///
    /// # Complexity
    ///
    /// The list does not track its last node, so this operation walks the
    /// whole list and computes in *O*(*n*) time. Prefer
    /// [`extend`](Extend::extend) to append many elements at once.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_seq::LinkedList;
    ///
    /// let mut list = LinkedList::from(["foo"]);
    /// list.append("bar");
    /// assert_eq!(list.back(), Some(&"bar"));
    /// ```
    pub fn append(&mut self, element: T) {
        self.link_in(self.len, element);
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `index` is not in `-len..len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_seq::LinkedList;
    ///
    /// let list = LinkedList::from([4, 5, 6, 7]);
    /// assert_eq!(list.get(1), Ok(&5));
    /// assert_eq!(list.get(-4), Ok(&4));
    /// assert!(list.get(4).is_err());
    /// ```
    pub fn get(&self, index: isize) -> Result<&T> {
        let at = position::element(index, self.len)?;
        self.node(at)
            .map(|node| &node.element)
            .ok_or(Error::IndexOutOfRange {
                index,
                len: self.len,
            })
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `index` is not in `-len..len`.
    pub fn get_mut(&mut self, index: isize) -> Result<&mut T> {
        let len = self.len;
        let at = position::element(index, len)?;
        self.node_mut(at)
            .map(|node| &mut node.element)
            .ok_or(Error::IndexOutOfRange { index, len })
    }

    /// Replaces the element at `index` and returns the old one.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `index` is not in `-len..len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_seq::LinkedList;
    ///
    /// let mut list = LinkedList::from([1, 2, 3]);
    /// assert_eq!(list.set(1, 4), Ok(2));
    /// assert_eq!(list.to_string(), "LinkedList(1, 4, 3)");
    /// ```
    pub fn set(&mut self, index: isize, element: T) -> Result<T> {
        self.get_mut(index)
            .map(|slot| mem::replace(slot, element))
    }

    /// Inserts an element so that it ends up at position `index`.
    ///
    /// A negative `index` is counted from the end *before* the insertion,
    /// so `insert(-1, x)` puts `x` in front of the current last element.
    /// To append, use `insert(len, x)`.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `index` is not in `-len..=len`.
    ///
    /// # Complexity
    ///
    /// *O*(1) at the front, *O*(*index*) elsewhere.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_seq::LinkedList;
    ///
    /// let mut list = LinkedList::from([1, 2, 3]);
    /// list.insert(0, 20).unwrap();
    /// list.insert(-1, 30).unwrap();
    /// list.insert(5, 40).unwrap();
    /// assert_eq!(Vec::from_iter(list), vec![20, 1, 2, 30, 3, 40]);
    /// ```
    pub fn insert(&mut self, index: isize, element: T) -> Result<()> {
        let at = position::insertion(index, self.len)?;
        self.link_in(at, element);
        Ok(())
    }

    /// Removes the last element and returns it.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] if the list is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    pub fn pop(&mut self) -> Result<T> {
        let last = match self.len.checked_sub(1) {
            Some(last) => last,
            None => {
                debug_event!("pop from an empty list");
                return Err(Error::Empty);
            }
        };
        self.unlink(last).ok_or(Error::Empty)
    }

    /// Removes the element at `index` and returns it.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `index` is not in `-len..len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_seq::LinkedList;
    ///
    /// let mut list = LinkedList::from([4, 5, 6, 7]);
    /// assert_eq!(list.pop_at(2), Ok(6));
    /// assert_eq!(list.pop_at(-2), Ok(5));
    /// assert_eq!(Vec::from_iter(list), vec![4, 7]);
    /// ```
    pub fn pop_at(&mut self, index: isize) -> Result<T> {
        let len = self.len;
        let at = position::element(index, len)?;
        self.unlink(at).ok_or(Error::IndexOutOfRange { index, len })
    }

    /// Removes the element at `index`, dropping it.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `index` is not in `-len..len`.
    pub fn delete(&mut self, index: isize) -> Result<()> {
        self.pop_at(index).map(drop)
    }

    /// Removes the first element equal to `value`.
    ///
    /// # Errors
    ///
    /// [`Error::ValueNotFound`] if no element is equal to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_seq::{Error, LinkedList};
    ///
    /// let mut list = LinkedList::from([4, 5, 6, 5]);
    /// assert_eq!(list.remove(&5), Ok(()));
    /// assert_eq!(Vec::from_iter(list.iter().copied()), vec![4, 6, 5]);
    /// assert_eq!(list.remove(&9), Err(Error::ValueNotFound));
    /// ```
    pub fn remove(&mut self, value: &T) -> Result<()>
    where
        T: PartialEq,
    {
        let at = self.position(value)?;
        self.unlink(at).map(drop).ok_or(Error::ValueNotFound)
    }

    /// Returns the position of the first element equal to `value`.
    ///
    /// # Errors
    ///
    /// [`Error::ValueNotFound`] if no element is equal to `value`.
    pub fn index(&self, value: &T) -> Result<usize>
    where
        T: PartialEq,
    {
        self.position(value)
    }

    /// Returns the number of elements equal to `value`.
    pub fn count(&self, value: &T) -> usize
    where
        T: PartialEq,
    {
        self.iter().filter(|element| *element == value).count()
    }

    /// Provides a forward iterator.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Provides a forward iterator with mutable references.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }

    fn position(&self, value: &T) -> Result<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|element| element == value).ok_or_else(|| {
            debug_event!(len = self.len, "value not found");
            Error::ValueNotFound
        })
    }
}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders the list as `LinkedList(a, b, c)`.
impl<T: Display> Display for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("LinkedList(")?;
        for (i, element) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            Display::fmt(element, f)?;
        }
        f.write_str(")")
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        // Unlink node by node; dropping the head box directly would recurse
        // once per node.
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Error, LinkedList};
    use std::cell::RefCell;

    #[derive(Debug, Clone, PartialEq)]
    enum Value {
        Int(i64),
        Text(&'static str),
    }

    #[test]
    fn list_create() {
        let mut list = LinkedList::<i32>::new();
        assert!(list.is_empty());
        list.append(1);
        assert!(!list.is_empty());
        assert_eq!(list.pop(), Ok(1));
        assert!(list.is_empty());
        assert_eq!(list.pop(), Err(Error::Empty));
    }

    #[test]
    fn list_drop() {
        #[derive(Debug)]
        struct DropChecker<'a, T: Copy> {
            value: T,
            dropped: &'a RefCell<Vec<T>>,
        }
        impl<'a, T: Copy> DropChecker<'a, T> {
            fn new(value: T, dropped: &'a RefCell<Vec<T>>) -> Self {
                Self { value, dropped }
            }
        }
        impl<'a, T: Copy> Drop for DropChecker<'a, T> {
            fn drop(&mut self) {
                self.dropped.borrow_mut().push(self.value);
            }
        }
        let dropped = RefCell::new(Vec::<i32>::new());
        let mut list = LinkedList::new();
        list.append(DropChecker::new(1, &dropped));
        list.append(DropChecker::new(2, &dropped));
        list.append(DropChecker::new(3, &dropped));
        list.append(DropChecker::new(4, &dropped));
        list.delete(1).unwrap();
        assert_eq!(dropped.borrow().as_slice(), &[2]);
        drop(list);
        assert_eq!(dropped.borrow().as_slice(), &[2, 1, 3, 4]);
    }

    #[test]
    fn list_drop_long() {
        let list = LinkedList::from_iter(0..200_000);
        assert_eq!(list.len(), 200_000);
        drop(list);
    }

    #[test]
    fn list_get() {
        let list = LinkedList::from([4, 5, 6, 7]);
        assert_eq!(list.get(0), Ok(&4));
        assert_eq!(list.get(3), Ok(&7));
        assert_eq!(list.get(-1), Ok(&7));
        assert_eq!(list.get(-3), Ok(&5));
        assert_eq!(
            list.get(4),
            Err(Error::IndexOutOfRange { index: 4, len: 4 })
        );
        assert_eq!(
            list.get(-5),
            Err(Error::IndexOutOfRange { index: -5, len: 4 })
        );
        assert!(LinkedList::<i32>::new().get(0).is_err());
    }

    #[test]
    fn list_set() {
        let mut list = LinkedList::from([1, 2, 3]);
        assert_eq!(list.set(1, 4), Ok(2));
        assert_eq!(list.set(2, 10), Ok(3));
        assert_eq!(list.set(-3, 0), Ok(1));
        assert_eq!(Vec::from_iter(list.iter().copied()), vec![0, 4, 10]);
        assert!(list.set(3, 10).is_err());
        assert!(list.set(-4, 10).is_err());
        assert_eq!(Vec::from_iter(list.iter().copied()), vec![0, 4, 10]);
    }

    #[test]
    fn list_delete() {
        let mut list = LinkedList::from([4, 5, 6, 7]);
        list.delete(0).unwrap();
        assert_eq!(Vec::from_iter(list.iter().copied()), vec![5, 6, 7]);
        list.delete(-2).unwrap();
        assert_eq!(Vec::from_iter(list.iter().copied()), vec![5, 7]);
        assert!(list.delete(2).is_err());
        assert!(list.delete(-3).is_err());
        assert_eq!(list.len(), 2);

        let mut single = LinkedList::from([0]);
        single.delete(0).unwrap();
        assert!(single.is_empty());
        assert!(single.delete(0).is_err());
    }

    #[test]
    fn list_insert() {
        let mut list = LinkedList::from([1, 2, 3]);
        list.insert(0, 20).unwrap();
        assert_eq!(Vec::from_iter(list.iter().copied()), vec![20, 1, 2, 3]);
        assert_eq!(list.len(), 4);
        assert_eq!(
            list.insert(5, 10),
            Err(Error::IndexOutOfRange { index: 5, len: 4 })
        );
        list.insert(4, 30).unwrap();
        assert_eq!(list.back(), Some(&30));
        list.insert(-1, 40).unwrap();
        assert_eq!(
            Vec::from_iter(list.iter().copied()),
            vec![20, 1, 2, 3, 40, 30]
        );
        assert!(list.insert(-7, 0).is_err());
        list.insert(-6, 0).unwrap();
        assert_eq!(list.front(), Some(&0));
        assert_eq!(list.len(), 7);

        let mut empty = LinkedList::new();
        assert!(empty.insert(-1, 1).is_err());
        empty.insert(0, 1).unwrap();
        assert_eq!(empty.get(0), Ok(&1));
    }

    #[test]
    fn list_pop() {
        let mut list = LinkedList::from([1, 2, 3]);
        assert_eq!(list.pop(), Ok(3));
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.len(), 1);
        let mut list = LinkedList::from([4, 5, 6, 7]);
        assert_eq!(list.pop_at(2), Ok(6));
        assert_eq!(list.pop_at(-2), Ok(5));
        assert_eq!(list.pop_at(2), Err(Error::IndexOutOfRange { index: 2, len: 2 }));
        assert_eq!(list.len(), 2);
        assert_eq!(list.pop_at(-1), Ok(7));
        assert_eq!(list.pop_at(0), Ok(4));
        assert_eq!(list.pop_at(0), Err(Error::IndexOutOfRange { index: 0, len: 0 }));
    }

    #[test]
    fn list_append_after_removing_last() {
        let mut list = LinkedList::from([1, 2, 3]);
        list.delete(-1).unwrap();
        list.append(4);
        assert_eq!(Vec::from_iter(list.iter().copied()), vec![1, 2, 4]);
        assert_eq!(list.back(), Some(&4));
    }

    #[test]
    fn list_search() {
        let list = LinkedList::from([1, 1, 3, 1, 2, 2]);
        assert_eq!(list.count(&1), 3);
        assert_eq!(list.count(&2), 2);
        assert_eq!(list.count(&4), 0);
        assert_eq!(list.index(&3), Ok(2));
        assert_eq!(list.index(&0), Err(Error::ValueNotFound));
        assert!(list.contains(&2));
        assert!(!list.contains(&9));
    }

    #[test]
    fn list_remove() {
        let mut list = LinkedList::from([4, 5, 6, 7]);
        list.remove(&6).unwrap();
        assert_eq!(Vec::from_iter(list.iter().copied()), vec![4, 5, 7]);
        assert_eq!(list.len(), 3);
        assert_eq!(list.remove(&9), Err(Error::ValueNotFound));
        assert_eq!(LinkedList::new().remove(&9), Err(Error::ValueNotFound));
        list.remove(&4).unwrap();
        list.remove(&7).unwrap();
        assert_eq!(list.front(), Some(&5));
        assert_eq!(list.back(), Some(&5));
    }

    #[test]
    fn list_display() {
        assert_eq!(LinkedList::<i32>::new().to_string(), "LinkedList()");
        assert_eq!(LinkedList::from([0]).to_string(), "LinkedList(0)");
        assert_eq!(LinkedList::from([4, 5, 6, 7]).to_string(), "LinkedList(4, 5, 6, 7)");
        assert_eq!(format!("{:?}", LinkedList::from([1, 2])), "[1, 2]");
    }

    #[test]
    fn list_mixed_values() {
        use Value::*;
        let mut list = LinkedList::from([Int(1), Int(2), Int(3), Text("pi"), Int(4)]);
        list.set(2, Text("approx pi")).unwrap();
        list.delete(1).unwrap();
        assert_eq!(
            list,
            LinkedList::from([Int(1), Text("approx pi"), Text("pi"), Int(4)])
        );
    }
}

// proptest doesn't run under miri with default config
#[cfg(all(not(miri), test))]
mod proptests {
    use crate::{Error, ErrorKind, LinkedList};
    use proptest::collection::vec;
    use proptest::prelude::*;
    use std::mem;

    #[derive(Clone, Debug)]
    enum Op {
        Append(u8),
        PushFront(u8),
        Insert(isize, u8),
        Set(isize, u8),
        Delete(isize),
        PopAt(isize),
        Pop,
        Remove(u8),
    }

    fn op() -> impl Strategy<Value = Op> {
        let value = 0u8..4;
        let index = -12isize..12;
        prop_oneof![
            3 => value.clone().prop_map(Op::Append),
            2 => value.clone().prop_map(Op::PushFront),
            3 => (index.clone(), value.clone()).prop_map(|(i, v)| Op::Insert(i, v)),
            2 => (index.clone(), value.clone()).prop_map(|(i, v)| Op::Set(i, v)),
            1 => index.clone().prop_map(Op::Delete),
            1 => index.prop_map(Op::PopAt),
            1 => Just(Op::Pop),
            1 => value.prop_map(Op::Remove),
        ]
    }

    /// Counts a negative `index` from `len`, and accepts the result if it is
    /// below `bound`.
    fn normalize(index: isize, len: usize, bound: usize) -> Option<usize> {
        let index = if index < 0 { index + len as isize } else { index };
        (0..bound as isize).contains(&index).then_some(index as usize)
    }

    fn apply(list: &mut LinkedList<u8>, model: &mut Vec<u8>, op: Op) {
        let len = model.len();
        match op {
            Op::Append(v) => {
                list.append(v);
                model.push(v);
            }
            Op::PushFront(v) => {
                list.push_front(v);
                model.insert(0, v);
            }
            Op::Insert(i, v) => {
                let result = list.insert(i, v);
                match normalize(i, len, len + 1) {
                    Some(at) => {
                        assert_eq!(result, Ok(()));
                        model.insert(at, v);
                        assert_eq!(list.get(at as isize), Ok(&v));
                    }
                    None => assert_eq!(result.map_err(|e| e.kind()), Err(ErrorKind::Index)),
                }
            }
            Op::Set(i, v) => {
                let result = list.set(i, v);
                match normalize(i, len, len) {
                    Some(at) => assert_eq!(result, Ok(mem::replace(&mut model[at], v))),
                    None => assert_eq!(result, Err(Error::IndexOutOfRange { index: i, len })),
                }
            }
            Op::Delete(i) => {
                let result = list.delete(i);
                match normalize(i, len, len) {
                    Some(at) => {
                        assert_eq!(result, Ok(()));
                        model.remove(at);
                    }
                    None => assert!(result.is_err()),
                }
            }
            Op::PopAt(i) => {
                let result = list.pop_at(i);
                match normalize(i, len, len) {
                    Some(at) => assert_eq!(result, Ok(model.remove(at))),
                    None => assert!(result.is_err()),
                }
            }
            Op::Pop => {
                let last = model.last().copied();
                assert_eq!(list.back(), last.as_ref());
                assert_eq!(list.pop(), model.pop().ok_or(Error::Empty));
            }
            Op::Remove(v) => {
                let result = list.remove(&v);
                match model.iter().position(|x| *x == v) {
                    Some(at) => {
                        assert_eq!(result, Ok(()));
                        model.remove(at);
                    }
                    None => assert_eq!(result, Err(Error::ValueNotFound)),
                }
            }
        }
    }

    fn check(list: &LinkedList<u8>, model: &[u8]) {
        assert_eq!(list.len(), model.len());
        assert_eq!(list.iter().count(), model.len());
        assert!(list.iter().eq(model));
        for v in 0..4 {
            assert_eq!(list.count(&v), model.iter().filter(|x| **x == v).count());
            assert_eq!(
                list.index(&v).ok(),
                model.iter().position(|x| *x == v)
            );
        }
    }

    proptest! {
        #[test]
        fn random_operations_match_vec(ops in vec(op(), 0..64)) {
            let mut list = LinkedList::new();
            let mut model = Vec::new();
            for op in ops {
                apply(&mut list, &mut model, op);
                check(&list, &model);
            }
        }

        #[test]
        fn concat_and_repeat(a in vec(any::<u8>(), 0..16), b in vec(any::<u8>(), 0..16), k in -3isize..4) {
            let (la, lb) = (LinkedList::from_iter(a.clone()), LinkedList::from_iter(b.clone()));
            let joined = &la + &lb;
            prop_assert_eq!(joined.len(), a.len() + b.len());
            for i in 0..joined.len() {
                let expected = if i < a.len() {
                    la.get(i as isize)
                } else {
                    lb.get((i - a.len()) as isize)
                };
                prop_assert_eq!(joined.get(i as isize), expected);
            }
            let repeated = &la * k;
            prop_assert_eq!(repeated.len(), k.max(0) as usize * a.len());
            prop_assert!(repeated.iter().eq(a.iter().cycle().take(repeated.len())));
        }

        #[test]
        fn copy_is_independent(a in vec(any::<u8>(), 1..16), v in any::<u8>()) {
            let original = LinkedList::from_iter(a.clone());
            let mut copy = original.copy();
            prop_assert_eq!(&copy, &original);
            copy.append(v);
            *copy.front_mut().unwrap() = v.wrapping_add(1);
            prop_assert_eq!(Vec::from_iter(original), a);
        }

        #[test]
        fn boundaries_are_rejected(a in vec(any::<u8>(), 0..8)) {
            let mut list = LinkedList::from_iter(a.clone());
            let n = a.len() as isize;
            for index in [n, -n - 1] {
                prop_assert_eq!(list.get(index).map_err(|e| e.kind()), Err(ErrorKind::Index));
                prop_assert!(list.set(index, 0).is_err());
                prop_assert!(list.delete(index).is_err());
                prop_assert!(list.pop_at(index).is_err());
            }
            prop_assert!(list.insert(n + 1, 0).is_err());
            prop_assert!(list.insert(-n - 1, 0).is_err());
            prop_assert_eq!(Vec::from_iter(list), a);
        }
    }
}
