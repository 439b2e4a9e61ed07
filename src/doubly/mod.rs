use std::fmt::{self, Debug, Display, Formatter};
use std::iter::Rev;
use std::marker::PhantomData;
use std::mem::{self, MaybeUninit};
use std::ptr::NonNull;

use crate::doubly::cursor::{Cursor, CursorMut};
use crate::error::{Error, Result};
use crate::position;

pub use self::iterator::{IntoIter, Iter, IterMut};

pub mod cursor;
pub mod iterator;

mod algorithms;

/// A doubly linked list with owned nodes.
///
/// Each node links to both of its neighbours, so elements can be added
/// and removed at either end in constant time, and the list can be walked
/// backwards. Indexed operations walk from whichever end is closer to the
/// target, so they take at most *n* / 2 steps.
///
/// Indices are `isize`. A negative index counts from the end, so `-1`
/// is the last element.
///
/// # Memory Layout
///
/// The list is cyclic around a "ghost" node whose element slot is never
/// initialized: `ghost.next` is
/// the first element (the head) and `ghost.prev` the last one (the tail).
/// In an empty list both links of the ghost point back to itself. In a
/// list of length *n* the elements are at positions 0, 1, ..., *n* - 1 and
/// the ghost node is at position *n*.
///
/// ```text
///          ┌──────────────────────────────────────────────────────┐
///          ↓                                         Ghost        │
///    ╔═══════════╗           ╔═══════════╗        ┌───────────┐   │
///    ║   next    ║ ────────→ ║   next    ║ ─┄┄──→ │   next    │ ──┘
///    ╟───────────╢           ╟───────────╢        ├───────────┤
/// ┌─ ║   prev    ║ ←──────── ║   prev    ║ ←─┄┄── │   prev    │
/// │  ╟───────────╢           ╟───────────╢        ├───────────┤
/// │  ║ element T ║           ║ element T ║        ┊ uninit T  ┊
/// │  ╚═══════════╝           ╚═══════════╝        └╌╌╌╌╌╌╌╌╌╌╌┘
/// │      Head                                          ↑
/// └────────────────────────────────────────────────────┘
/// ```
///
/// # Examples
///
/// ```
/// use linked_seq::DoublyLinkedList;
///
/// let mut list = DoublyLinkedList::from(["agent", "blind", "cross", "door", "entendre"]);
/// assert_eq!(list.lpop(), Ok("agent"));
/// assert_eq!(list.lpop(), Ok("blind"));
/// assert_eq!(list.rpop(), Ok("entendre"));
/// list.lappend("bass");
/// list.append("edged");
/// assert_eq!(list, DoublyLinkedList::from(["bass", "cross", "door", "edged"]));
/// ```
pub struct DoublyLinkedList<T> {
    ghost: NonNull<Node<MaybeUninit<T>>>,
    /// the number of elements, excluding the ghost node
    pub(crate) len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

#[repr(C)]
pub(crate) struct Node<T> {
    pub(crate) next: NonNull<Node<T>>,
    pub(crate) prev: NonNull<Node<T>>,
    pub(crate) element: T,
}

/// Nodes fragment detached from a list, used when moving all nodes of one
/// list into another.
///
/// When detached from a list, reading of `front.prev` and `back.next`
/// is invalid.
pub(crate) struct DetachedNodes<T> {
    front: NonNull<Node<T>>,
    back: NonNull<Node<T>>,
    len: usize,
}

// private methods
impl<T> DoublyLinkedList<T> {
    pub(crate) fn ghost_node(&self) -> NonNull<Node<T>> {
        self.ghost.cast()
    }
    pub(crate) fn front_node(&self) -> NonNull<Node<T>> {
        // SAFETY: `ghost.next` is always valid (either `ghost` itself, or the
        // first element in the list).
        unsafe { Node::next(self.ghost_node()) }
    }
    pub(crate) fn back_node(&self) -> NonNull<Node<T>> {
        // SAFETY: `ghost.prev` is always valid (either `ghost` itself, or the
        // last element in the list).
        unsafe { Node::prev(self.ghost_node()) }
    }

    /// Links `prev.next` to `next` and `next.prev` to `prev`.
    pub(crate) unsafe fn connect(&mut self, prev: NonNull<Node<T>>, next: NonNull<Node<T>>) {
        (*prev.as_ptr()).next = next;
        (*next.as_ptr()).prev = prev;
    }

    /// Detach a single node `node` from the list, and return it as a box.
    ///
    /// It is unsafe because it does not check whether `node` belongs to the
    /// list, or whether it is the ghost node.
    pub(crate) unsafe fn detach_node(&mut self, node: NonNull<Node<T>>) -> Box<Node<T>> {
        self.len -= 1;
        let node = Box::from_raw(node.as_ptr());
        self.connect(node.prev, node.next);
        node
    }

    /// Attach a single node `node` to the list, between `prev` and `next`.
    ///
    /// It is unsafe because it does not check whether `prev` and `next` belong
    /// to the list, or whether the `prev` and `next` are adjacent (only in
    /// `#[cfg(debug_assertions)]`).
    pub(crate) unsafe fn attach_node(
        &mut self,
        prev: NonNull<Node<T>>,
        next: NonNull<Node<T>>,
        node: NonNull<Node<T>>,
    ) {
        #[cfg(debug_assertions)]
        assert_adjacent(prev, next);
        self.connect(prev, node);
        self.connect(node, next);
        self.len += 1;
        #[cfg(debug_assertions)]
        {
            assert_adjacent(prev, node);
            assert_adjacent(node, next);
        }
    }

    /// Detach all nodes from the list, and return the detached nodes, or
    /// return `None` if the list is empty.
    pub(crate) fn detach_all_nodes(&mut self) -> Option<DetachedNodes<T>> {
        if self.is_empty() {
            return None;
        }
        let detached = DetachedNodes {
            front: self.front_node(),
            back: self.back_node(),
            len: self.len,
        };
        let ghost = self.ghost_node();
        // SAFETY: the ghost node always belongs to the list.
        unsafe { self.connect(ghost, ghost) };
        self.len = 0;
        Some(detached)
    }

    /// Attach a range of detached nodes to the list, between `prev` and `next`.
    ///
    /// It is unsafe because it does not check whether `prev` and `next`
    /// belong to the list, or whether they are adjacent (only in
    /// `#[cfg(debug_assertions)]`).
    pub(crate) unsafe fn attach_nodes(
        &mut self,
        prev: NonNull<Node<T>>,
        next: NonNull<Node<T>>,
        detached: DetachedNodes<T>,
    ) {
        #[cfg(debug_assertions)]
        assert_adjacent(prev, next);
        self.connect(prev, detached.front);
        self.connect(detached.back, next);
        self.len += detached.len;
    }

    /// Finds the node at position `target` in `0..=len`, given a node `from`
    /// known to be at position `at`.
    ///
    /// The walk starts at `from`, at the head or at the tail, whichever needs
    /// the fewest steps. Position `len` is the ghost node and needs none.
    pub(crate) fn walk_to(
        &self,
        target: usize,
        at: usize,
        from: NonNull<Node<T>>,
    ) -> NonNull<Node<T>> {
        debug_assert!(target <= self.len && at <= self.len);
        let Some(from_tail) = (self.len - target).checked_sub(1) else {
            return self.ghost_node();
        };
        let from_here = at.abs_diff(target);
        let (mut node, steps, forward) = if from_here <= target && from_here <= from_tail {
            (from, from_here, at < target)
        } else if target <= from_tail {
            (self.front_node(), target, true)
        } else {
            (self.back_node(), from_tail, false)
        };
        trace_event!(to = target, steps, forward, "walk");
        for _ in 0..steps {
            // SAFETY: every step stays within the `steps` nodes between the
            // start and `target`, all of which belong to the list.
            node = unsafe {
                if forward {
                    Node::next(node)
                } else {
                    Node::prev(node)
                }
            };
        }
        node
    }

    /// The node at position `target` in `0..=len`.
    pub(crate) fn node_at(&self, target: usize) -> NonNull<Node<T>> {
        self.walk_to(target, 0, self.front_node())
    }

    /// Unlinks the element at position `at`, which must be below `len`.
    fn take(&mut self, at: usize) -> T {
        debug_assert!(at < self.len);
        let node = self.node_at(at);
        // SAFETY: positions below `len` hold element nodes.
        unsafe { self.detach_node(node).element }
    }
}

impl<T> DoublyLinkedList<T> {
    /// Create an empty `DoublyLinkedList`.
    ///
    /// # Examples
    /// ```
    /// use linked_seq::DoublyLinkedList;
    /// let list: DoublyLinkedList<u32> = DoublyLinkedList::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            ghost: new_ghost(),
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Returns `true` if the list is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.front_node() == self.ghost_node()
    }

    /// Returns the length of the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_seq::DoublyLinkedList;
    ///
    /// let mut list = DoublyLinkedList::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.len(), 1);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.len(), 2);
    ///
    /// list.push_back(3);
    /// assert_eq!(list.len(), 3);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Removes all elements from the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    #[inline]
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    /// Provides a reference to the front element, or `None` if the list is
    /// empty.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.cursor_start().current()
    }

    /// Provides a mutable reference to the front element, or `None` if the
    /// list is empty.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.cursor_start_mut().into_current_mut()
    }

    /// Provides a reference to the back element, or `None` if the list is
    /// empty.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.cursor_end().previous()
    }

    /// Provides a mutable reference to the back element, or `None` if the
    /// list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_seq::DoublyLinkedList;
    ///
    /// let mut list = DoublyLinkedList::from([1, 2]);
    /// if let Some(x) = list.back_mut() {
    ///     *x = 5;
    /// }
    /// assert_eq!(list.back(), Some(&5));
    /// ```
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: the list is not empty, so the back node holds an element.
        unsafe { Some(&mut (*self.back_node().as_ptr()).element) }
    }

    /// Adds an element first in the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    pub fn push_front(&mut self, element: T) {
        self.cursor_start_mut().insert(element);
    }

    /// Removes the first element and returns it, or `None` if the list is
    /// empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    pub fn pop_front(&mut self) -> Option<T> {
        self.cursor_start_mut().remove()
    }

    /// Appends an element to the back of the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    pub fn push_back(&mut self, element: T) {
        self.cursor_end_mut().insert(element);
    }

    /// Removes the last element and returns it, or `None` if the list is
    /// empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let back = self.back_node();
        // SAFETY: the list is not empty, so `back` is an element node.
        unsafe { Some(self.detach_node(back).element) }
    }

    /// Appends an element to the back of the list, using the cached tail.
    /// Same as [`push_back`](DoublyLinkedList::push_back).
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    #[inline]
    pub fn append(&mut self, element: T) {
        self.push_back(element);
    }

    /// Adds an element first in the list. Same as
    /// [`push_front`](DoublyLinkedList::push_front).
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_seq::DoublyLinkedList;
    ///
    /// let mut list = DoublyLinkedList::from([2, 3]);
    /// let first = list.lpop().unwrap();
    /// list.lappend(first);
    /// assert_eq!(list, DoublyLinkedList::from([2, 3]));
    /// ```
    #[inline]
    pub fn lappend(&mut self, element: T) {
        self.push_front(element);
    }

    /// Removes the first element and returns it.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] if the list is empty.
    pub fn lpop(&mut self) -> Result<T> {
        self.pop_front().ok_or_else(|| {
            debug_event!("lpop from an empty list");
            Error::Empty
        })
    }

    /// Removes the last element and returns it.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] if the list is empty.
    pub fn rpop(&mut self) -> Result<T> {
        self.pop_back().ok_or_else(|| {
            debug_event!("rpop from an empty list");
            Error::Empty
        })
    }

    /// Removes the last element and returns it. Same as
    /// [`rpop`](DoublyLinkedList::rpop).
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] if the list is empty.
    #[inline]
    pub fn pop(&mut self) -> Result<T> {
        self.rpop()
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `index` is not in `-len..len`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(min(*i*, *n* - *i*)) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_seq::DoublyLinkedList;
    ///
    /// let list = DoublyLinkedList::from_iter(0..100);
    /// assert_eq!(list.get(2), Ok(&2));
    /// assert_eq!(list.get(97), Ok(&97));
    /// assert_eq!(list.get(-1), Ok(&99));
    /// assert!(list.get(100).is_err());
    /// ```
    pub fn get(&self, index: isize) -> Result<&T> {
        let at = position::element(index, self.len)?;
        // SAFETY: `at < len`, so the node holds an element.
        unsafe { Ok(&(*self.node_at(at).as_ptr()).element) }
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `index` is not in `-len..len`.
    pub fn get_mut(&mut self, index: isize) -> Result<&mut T> {
        let at = position::element(index, self.len)?;
        // SAFETY: `at < len`, and the list is borrowed mutably.
        unsafe { Ok(&mut (*self.node_at(at).as_ptr()).element) }
    }

    /// Replaces the element at `index` and returns the old one.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `index` is not in `-len..len`.
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
    /// # Examples
    ///
    /// ```
    /// use linked_seq::DoublyLinkedList;
    ///
    /// let mut list = DoublyLinkedList::from([1, 2, 3]);
    /// list.insert(2, 4).unwrap();
    /// list.insert(4, 5).unwrap();
    /// list.insert(-1, 6).unwrap();
    /// assert_eq!(Vec::from_iter(list), vec![1, 2, 4, 3, 6, 5]);
    /// ```
    pub fn insert(&mut self, index: isize, element: T) -> Result<()> {
        let at = position::insertion(index, self.len)?;
        let next = self.node_at(at);
        // SAFETY: `next` is in the list (possibly the ghost) and `prev` is
        // linked right before it.
        unsafe {
            let prev = Node::prev(next);
            self.attach_node(prev, next, Node::new_detached(element));
        }
        Ok(())
    }

    /// Removes the element at `index` and returns it.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `index` is not in `-len..len`.
    pub fn pop_at(&mut self, index: isize) -> Result<T> {
        let at = position::element(index, self.len)?;
        Ok(self.take(at))
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
    pub fn remove(&mut self, value: &T) -> Result<()>
    where
        T: PartialEq,
    {
        let at = self.index(value)?;
        drop(self.take(at));
        Ok(())
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
        self.iter().position(|element| element == value).ok_or_else(|| {
            debug_event!(len = self.len, "value not found");
            Error::ValueNotFound
        })
    }

    /// Returns the number of elements equal to `value`.
    pub fn count(&self, value: &T) -> usize
    where
        T: PartialEq,
    {
        self.iter().filter(|element| *element == value).count()
    }

    /// Provides a cursor at the node with given position, or `None` if
    /// `at > len`.
    ///
    /// By convention, the cursor is pointing to the ghost node if
    /// `at == len`. The walk starts from whichever end is closer.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_seq::DoublyLinkedList;
    ///
    /// let list = DoublyLinkedList::from([1, 2, 3]);
    /// assert_eq!(list.cursor(1).unwrap().current(), Some(&2));
    /// assert_eq!(list.cursor(3).unwrap().current(), None);
    /// assert!(list.cursor(4).is_none());
    /// ```
    pub fn cursor(&self, at: usize) -> Option<Cursor<'_, T>> {
        (at <= self.len).then(|| Cursor::new(self, self.node_at(at), at))
    }

    /// Provides a cursor at the first node.
    ///
    /// The cursor is pointing to the ghost node if the list is empty.
    pub fn cursor_start(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.front_node(), 0)
    }

    /// Provides a cursor at the ghost node.
    pub fn cursor_end(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.ghost_node(), self.len)
    }

    /// Provides a cursor with editing operations at the node with given
    /// position, or `None` if `at > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_seq::DoublyLinkedList;
    ///
    /// let mut list = DoublyLinkedList::from([1, 2, 3]);
    /// let mut cursor = list.cursor_mut(1).unwrap();
    ///
    /// if let Some(x) = cursor.current_mut() {
    ///     *x *= 5;
    /// }
    /// assert_eq!(cursor.current(), Some(&10));
    /// ```
    pub fn cursor_mut(&mut self, at: usize) -> Option<CursorMut<'_, T>> {
        if at > self.len {
            return None;
        }
        let node = self.node_at(at);
        Some(CursorMut::new(self, node, at))
    }

    /// Provides a cursor with editing operations at the first node.
    pub fn cursor_start_mut(&mut self) -> CursorMut<'_, T> {
        let front = self.front_node();
        CursorMut::new(self, front, 0)
    }

    /// Provides a cursor with editing operations at the ghost node.
    pub fn cursor_end_mut(&mut self) -> CursorMut<'_, T> {
        let (ghost, len) = (self.ghost_node(), self.len);
        CursorMut::new(self, ghost, len)
    }

    /// Provides a forward iterator. It is double-ended, so `.rev()` walks
    /// the list from the tail.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_seq::DoublyLinkedList;
    ///
    /// let list = DoublyLinkedList::from([0, 1, 2]);
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next_back(), Some(&2));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Provides a forward iterator with mutable references.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }

    /// Provides an iterator walking the backward links from the tail to
    /// the head.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_seq::DoublyLinkedList;
    ///
    /// let list = DoublyLinkedList::from(['a', 'b', 'c']);
    /// assert_eq!(String::from_iter(list.iter_rev()), "cba");
    /// ```
    #[inline]
    pub fn iter_rev(&self) -> Rev<Iter<'_, T>> {
        self.iter().rev()
    }

    /// Moves all elements from `other` to the end of the list.
    ///
    /// This reuses all the nodes from `other` and moves them into `self`.
    /// After this operation, `other` becomes empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time and *O*(1) memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_seq::DoublyLinkedList;
    ///
    /// let mut list1 = DoublyLinkedList::from(['a']);
    /// let mut list2 = DoublyLinkedList::from(['b', 'c']);
    ///
    /// list1.append_list(&mut list2);
    ///
    /// assert_eq!(list1, DoublyLinkedList::from(['a', 'b', 'c']));
    /// assert!(list2.is_empty());
    /// ```
    pub fn append_list(&mut self, other: &mut Self) {
        if let Some(detached) = other.detach_all_nodes() {
            // `self.back_node()` and `self.ghost_node()` are valid
            // nodes in the list and they are adjacent, so it is safe.
            unsafe { self.attach_nodes(self.back_node(), self.ghost_node(), detached) }
        }
    }

    /// Walks the list in both directions and checks that every `next` link
    /// is mirrored by a `prev` link and that both walks see `len` nodes.
    #[cfg(test)]
    pub(crate) fn check_links(&self) {
        let ghost = self.ghost_node();
        let mut forward = 0;
        let mut node = ghost;
        loop {
            // SAFETY: every node reachable from the ghost belongs to the list.
            let next = unsafe { Node::next(node) };
            assert_eq!(unsafe { Node::prev(next) }, node, "prev link mismatch");
            node = next;
            if node == ghost {
                break;
            }
            forward += 1;
            assert!(forward <= self.len, "forward walk longer than len");
        }
        let mut backward = 0;
        let mut node = ghost;
        loop {
            node = unsafe { Node::prev(node) };
            if node == ghost {
                break;
            }
            backward += 1;
            assert!(backward <= self.len, "backward walk longer than len");
        }
        assert_eq!(forward, self.len);
        assert_eq!(backward, self.len);
    }
}

impl<T: Debug> Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders the list as `DoublyLinkedList(a, b, c)`.
impl<T: Display> Display for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("DoublyLinkedList(")?;
        for (i, element) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            Display::fmt(element, f)?;
        }
        f.write_str(")")
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Node<T> {
    /// Create a detached node with given element. Its links are dangling
    /// until it is attached to a list.
    pub(crate) fn new_detached(element: T) -> NonNull<Node<T>> {
        NonNull::from(Box::leak(Box::new(Node {
            next: NonNull::dangling(),
            prev: NonNull::dangling(),
            element,
        })))
    }

    /// Reads `node.next` without creating a reference to the whole node,
    /// which may be the ghost node with its uninitialized element.
    pub(crate) unsafe fn next(node: NonNull<Node<T>>) -> NonNull<Node<T>> {
        (*node.as_ptr()).next
    }

    /// Reads `node.prev`, see [`Node::next`].
    pub(crate) unsafe fn prev(node: NonNull<Node<T>>) -> NonNull<Node<T>> {
        (*node.as_ptr()).prev
    }
}

fn new_ghost<T>() -> NonNull<Node<MaybeUninit<T>>> {
    let ghost = Node::new_detached(MaybeUninit::uninit());
    // SAFETY: `ghost` was just allocated and is exclusively owned here.
    unsafe {
        (*ghost.as_ptr()).next = ghost;
        (*ghost.as_ptr()).prev = ghost;
    }
    ghost
}

#[cfg(debug_assertions)]
fn assert_adjacent<T>(prev: NonNull<Node<T>>, next: NonNull<Node<T>>) {
    unsafe {
        assert_eq!(Node::next(prev), next);
        assert_eq!(Node::prev(next), prev);
    }
}

impl<T> Drop for DoublyLinkedList<T> {
    fn drop(&mut self) {
        self.clear();
        // SAFETY: the ghost was allocated by `new_ghost` and is released once.
        // Dropping a `MaybeUninit<T>` never drops a `T`.
        unsafe { drop(Box::from_raw(self.ghost.as_ptr())) };
    }
}

unsafe impl<T: Send> Send for DoublyLinkedList<T> {}

unsafe impl<T: Sync> Sync for DoublyLinkedList<T> {}

// Ensure that `DoublyLinkedList` and its read-only iterators are covariant in
// their type parameters.
#[allow(dead_code)]
fn assert_covariance() {
    fn a<'a>(x: DoublyLinkedList<&'static str>) -> DoublyLinkedList<&'a str> {
        x
    }
    fn b<'i, 'a>(x: Iter<'i, &'static str>) -> Iter<'i, &'a str> {
        x
    }
    fn c<'a>(x: IntoIter<&'static str>) -> IntoIter<&'a str> {
        x
    }
}


// proptest doesn't run under miri with default config
#[cfg(all(not(miri), test))]
mod proptests {
    use crate::{DoublyLinkedList, Error, ErrorKind};
    use proptest::collection::vec;
    use proptest::prelude::*;

    #[derive(Clone, Debug)]
    enum Op {
        Append(u8),
        Lappend(u8),
        Insert(isize, u8),
        Set(isize, u8),
        Get(isize),
        PopAt(isize),
        Lpop,
        Rpop,
        Remove(u8),
    }

    fn op() -> impl Strategy<Value = Op> {
        let value = 0u8..4;
        let index = -12isize..12;
        prop_oneof![
            3 => value.clone().prop_map(Op::Append),
            2 => value.clone().prop_map(Op::Lappend),
            3 => (index.clone(), value.clone()).prop_map(|(i, v)| Op::Insert(i, v)),
            1 => (index.clone(), value.clone()).prop_map(|(i, v)| Op::Set(i, v)),
            2 => index.clone().prop_map(Op::Get),
            1 => index.prop_map(Op::PopAt),
            1 => Just(Op::Lpop),
            1 => Just(Op::Rpop),
            1 => value.prop_map(Op::Remove),
        ]
    }

    fn normalize(index: isize, len: usize, bound: usize) -> Option<usize> {
        let index = if index < 0 { index + len as isize } else { index };
        (0..bound as isize).contains(&index).then_some(index as usize)
    }

    fn apply(list: &mut DoublyLinkedList<u8>, model: &mut Vec<u8>, op: Op) {
        let len = model.len();
        match op {
            Op::Append(v) => {
                list.append(v);
                model.push(v);
            }
            Op::Lappend(v) => {
                list.lappend(v);
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
                    None => assert_eq!(result, Err(Error::IndexOutOfRange { index: i, len })),
                }
            }
            Op::Set(i, v) => {
                let result = list.set(i, v);
                match normalize(i, len, len) {
                    Some(at) => assert_eq!(result, Ok(std::mem::replace(&mut model[at], v))),
                    None => assert_eq!(result.map_err(|e| e.kind()), Err(ErrorKind::Index)),
                }
            }
            Op::Get(i) => {
                let expected = normalize(i, len, len).map(|at| &model[at]);
                assert_eq!(list.get(i).ok(), expected);
            }
            Op::PopAt(i) => {
                let result = list.pop_at(i);
                match normalize(i, len, len) {
                    Some(at) => assert_eq!(result, Ok(model.remove(at))),
                    None => assert!(result.is_err()),
                }
            }
            Op::Lpop => {
                let expected = if model.is_empty() {
                    Err(Error::Empty)
                } else {
                    Ok(model.remove(0))
                };
                assert_eq!(list.lpop(), expected);
            }
            Op::Rpop => assert_eq!(list.rpop(), model.pop().ok_or(Error::Empty)),
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

    proptest! {
        #[test]
        fn random_operations_match_vec(ops in vec(op(), 0..64)) {
            let mut list = DoublyLinkedList::new();
            let mut model = Vec::new();
            for op in ops {
                apply(&mut list, &mut model, op);
                list.check_links();
                prop_assert_eq!(list.len(), model.len());
                prop_assert_eq!(list.iter().count(), model.len());
                prop_assert!(list.iter().eq(&model));
                prop_assert!(list.iter_rev().eq(model.iter().rev()));
                prop_assert_eq!(list.front(), model.first());
                prop_assert_eq!(list.back(), model.last());
            }
        }

        #[test]
        fn lpop_then_lappend_restores(a in vec(any::<u8>(), 1..16)) {
            let mut list = DoublyLinkedList::from_iter(a.clone());
            let original = list.clone();
            let first = list.lpop().unwrap();
            list.lappend(first);
            prop_assert_eq!(list, original);
        }

        #[test]
        fn cursor_seeks_anywhere(a in vec(any::<u8>(), 0..24), targets in vec(0usize..30, 1..16)) {
            let list = DoublyLinkedList::from_iter(a.clone());
            let mut cursor = list.cursor_start();
            for target in targets {
                if target <= a.len() {
                    prop_assert_eq!(cursor.seek_to(target), Ok(()));
                    prop_assert_eq!(cursor.index(), target);
                    prop_assert_eq!(cursor.current(), a.get(target));
                } else {
                    let index = cursor.index();
                    prop_assert_eq!(cursor.seek_to(target), Err(target - a.len()));
                    prop_assert_eq!(cursor.index(), index);
                }
            }
        }

        #[test]
        fn concat_and_repeat(a in vec(any::<u8>(), 0..16), b in vec(any::<u8>(), 0..16), k in -3isize..4) {
            let (la, lb) = (DoublyLinkedList::from_iter(a.clone()), DoublyLinkedList::from_iter(b.clone()));
            let joined = &la + &lb;
            joined.check_links();
            prop_assert!(joined.iter().eq(a.iter().chain(&b)));
            let moved = la.clone() + lb.clone();
            moved.check_links();
            prop_assert_eq!(&moved, &joined);
            let repeated = &la * k;
            prop_assert_eq!(repeated.len(), k.max(0) as usize * a.len());
        }

        #[test]
        fn boundaries_are_rejected(a in vec(any::<u8>(), 0..8)) {
            let mut list = DoublyLinkedList::from_iter(a.clone());
            let n = a.len() as isize;
            for index in [n, -n - 1] {
                prop_assert_eq!(list.get(index).map_err(|e| e.kind()), Err(ErrorKind::Index));
                prop_assert!(list.set(index, 0).is_err());
                prop_assert!(list.delete(index).is_err());
                prop_assert!(list.pop_at(index).is_err());
            }
            prop_assert!(list.insert(n + 1, 0).is_err());
            list.check_links();
            prop_assert_eq!(Vec::from_iter(list), a);
        }
    }
}
