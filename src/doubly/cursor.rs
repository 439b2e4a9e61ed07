use crate::doubly::{DoublyLinkedList, Node};
use std::fmt;
use std::ptr::NonNull;

/// Where a cursor stands: a node of the list and its position. Element
/// nodes are at `0..len` and the ghost node is at `len`.
struct Pos<T> {
    index: usize,
    node: NonNull<Node<T>>,
}

impl<T> Clone for Pos<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Pos<T> {}

impl<T> Pos<T> {
    fn is_ghost(self, list: &DoublyLinkedList<T>) -> bool {
        self.index == list.len()
    }

    /// One step towards the ghost node, or `None` when already there.
    fn next(self, list: &DoublyLinkedList<T>) -> Option<Self> {
        if self.is_ghost(list) {
            return None;
        }
        Some(Pos {
            index: self.index + 1,
            // SAFETY: `node` is an element node, so its `next` link is valid.
            node: unsafe { Node::next(self.node) },
        })
    }

    /// One step towards the head, or `None` at position 0.
    fn prev(self) -> Option<Self> {
        let index = self.index.checked_sub(1)?;
        Some(Pos {
            index,
            // SAFETY: a position above 0 always has an element node before it.
            node: unsafe { Node::prev(self.node) },
        })
    }

    fn seek(self, list: &DoublyLinkedList<T>, target: usize) -> Result<Self, usize> {
        let len = list.len();
        if target > len {
            debug_event!(to = target, len, "cursor seek out of range");
            return Err(target - len);
        }
        Ok(Pos {
            index: target,
            node: list.walk_to(target, self.index, self.node),
        })
    }
}

/// A read-only cursor over a [`DoublyLinkedList`].
///
/// A cursor stands at one of the *n* + 1 positions of a list of length
/// *n*: one per element, plus position *n* for the ghost node past the
/// tail. Unlike an iterator it can move in both directions and jump.
///
/// # Examples
///
/// ```
/// use linked_seq::DoublyLinkedList;
///
/// let list = DoublyLinkedList::from(['A', 'B', 'C']);
///
/// let mut cursor = list.cursor_start();
/// assert_eq!(cursor.current(), Some(&'A'));
/// assert!(cursor.move_next());
/// assert_eq!((cursor.index(), cursor.current()), (1, Some(&'B')));
///
/// let mut cursor = list.cursor_end();
/// assert_eq!(cursor.current(), None);
/// assert!(!cursor.move_next());
/// assert_eq!(cursor.previous(), Some(&'C'));
/// ```
pub struct Cursor<'a, T: 'a> {
    pos: Pos<T>,
    list: &'a DoublyLinkedList<T>,
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        Self {
            pos: self.pos,
            list: self.list,
        }
    }
}

impl<'a, T: 'a> Cursor<'a, T> {
    pub(crate) fn new(list: &'a DoublyLinkedList<T>, node: NonNull<Node<T>>, index: usize) -> Self {
        Self {
            pos: Pos { index, node },
            list,
        }
    }

    /// The position of the cursor, `len` meaning the ghost node.
    pub fn index(&self) -> usize {
        self.pos.index
    }

    /// The element under the cursor, or `None` at the ghost node.
    pub fn current(&self) -> Option<&'a T> {
        if self.pos.is_ghost(self.list) {
            return None;
        }
        // SAFETY: positions below `len` hold element nodes, which live as
        // long as the shared borrow of the list.
        unsafe { Some(&(*self.pos.node.as_ptr()).element) }
    }

    /// The element just before the cursor, or `None` at position 0.
    pub fn previous(&self) -> Option<&'a T> {
        let mut before = self.clone();
        before.move_prev().then(|| before.current()).flatten()
    }

    /// Steps forward. Returns `false` and stays put at the ghost node.
    pub fn move_next(&mut self) -> bool {
        self.pos.next(self.list).map(|pos| self.pos = pos).is_some()
    }

    /// Steps backward. Returns `false` and stays put at position 0.
    pub fn move_prev(&mut self) -> bool {
        self.pos.prev().map(|pos| self.pos = pos).is_some()
    }

    /// Jumps to position `target` in `0..=len`.
    ///
    /// The walk starts at the current node, at the head or at the tail,
    /// whichever needs the fewest steps. If `target > len` the cursor stays
    /// put and the excess `target - len` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_seq::DoublyLinkedList;
    ///
    /// let list = DoublyLinkedList::from_iter(0..10);
    /// let mut cursor = list.cursor_start();
    ///
    /// assert_eq!(cursor.seek_to(8), Ok(()));
    /// assert_eq!(cursor.current(), Some(&8));
    /// assert_eq!(cursor.seek_to(10), Ok(()));
    /// assert_eq!(cursor.current(), None);
    /// assert_eq!(cursor.seek_to(13), Err(3));
    /// assert_eq!(cursor.index(), 10);
    /// ```
    pub fn seek_to(&mut self, target: usize) -> Result<(), usize> {
        self.pos = self.pos.seek(self.list, target)?;
        Ok(())
    }

    pub fn move_to_start(&mut self) {
        self.pos = Pos {
            index: 0,
            node: self.list.front_node(),
        };
    }

    pub fn move_to_end(&mut self) {
        self.pos = Pos {
            index: self.list.len(),
            node: self.list.ghost_node(),
        };
    }
}

impl<T: fmt::Debug> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("index", &self.pos.index)
            .field("current", &self.current())
            .finish()
    }
}

/// A cursor over a [`DoublyLinkedList`] that can also edit it.
///
/// References it hands out borrow the cursor, so the list cannot be
/// reached any other way while the cursor is alive.
///
/// ```compile_fail
/// use linked_seq::DoublyLinkedList;
///
/// let mut list = DoublyLinkedList::from([1, 2, 3]);
/// let cursor = list.cursor_start_mut();
/// println!("{:?}", list.back());
/// println!("{:?}", cursor.current());
/// ```
pub struct CursorMut<'a, T: 'a> {
    pos: Pos<T>,
    list: &'a mut DoublyLinkedList<T>,
}

impl<'a, T: 'a> CursorMut<'a, T> {
    pub(crate) fn new(
        list: &'a mut DoublyLinkedList<T>,
        node: NonNull<Node<T>>,
        index: usize,
    ) -> Self {
        Self {
            pos: Pos { index, node },
            list,
        }
    }

    /// A read-only view of the cursor, borrowing it.
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor {
            pos: self.pos,
            list: &*self.list,
        }
    }

    pub fn index(&self) -> usize {
        self.pos.index
    }

    pub fn current(&self) -> Option<&T> {
        self.as_cursor().current()
    }

    /// The element under the cursor for mutation, or `None` at the ghost
    /// node.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_seq::DoublyLinkedList;
    ///
    /// let mut list = DoublyLinkedList::from([1, 2, 3]);
    ///
    /// let mut cursor = list.cursor_mut(0).unwrap();
    /// *cursor.current_mut().unwrap() *= 5;
    /// assert_eq!(cursor.current(), Some(&5));
    ///
    /// assert!(list.cursor_mut(3).unwrap().current_mut().is_none());
    /// ```
    pub fn current_mut(&mut self) -> Option<&mut T> {
        if self.pos.is_ghost(self.list) {
            return None;
        }
        // SAFETY: an element node, reachable only through this cursor
        // while the returned borrow lives.
        unsafe { Some(&mut (*self.pos.node.as_ptr()).element) }
    }

    /// Like [`current_mut`](CursorMut::current_mut), but gives up the cursor
    /// so the reference can live as long as the list borrow.
    pub fn into_current_mut(self) -> Option<&'a mut T> {
        if self.pos.is_ghost(self.list) {
            return None;
        }
        // SAFETY: the cursor is consumed, so nothing else reaches this node
        // for `'a`.
        unsafe { Some(&mut (*self.pos.node.as_ptr()).element) }
    }

    pub fn move_next(&mut self) -> bool {
        self.pos.next(self.list).map(|pos| self.pos = pos).is_some()
    }

    pub fn move_prev(&mut self) -> bool {
        self.pos.prev().map(|pos| self.pos = pos).is_some()
    }

    /// See [`Cursor::seek_to`].
    pub fn seek_to(&mut self, target: usize) -> Result<(), usize> {
        self.pos = self.pos.seek(self.list, target)?;
        Ok(())
    }

    pub fn move_to_start(&mut self) {
        self.pos = Pos {
            index: 0,
            node: self.list.front_node(),
        };
    }

    pub fn move_to_end(&mut self) {
        self.pos = Pos {
            index: self.list.len(),
            node: self.list.ghost_node(),
        };
    }

    pub fn view(&self) -> &DoublyLinkedList<T> {
        self.list
    }

    /// Links `item` in just before the cursor. The cursor keeps its node,
    /// whose position grows by one.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_seq::DoublyLinkedList;
    ///
    /// let mut list = DoublyLinkedList::from([1, 2, 3]);
    /// let mut cursor = list.cursor_mut(1).unwrap();
    ///
    /// cursor.insert(4);
    /// assert_eq!((cursor.index(), cursor.current()), (2, Some(&2)));
    ///
    /// cursor.move_to_end();
    /// cursor.insert(5);
    /// assert_eq!(cursor.index(), 5);
    ///
    /// assert_eq!(Vec::from_iter(list), vec![1, 4, 2, 3, 5]);
    /// ```
    pub fn insert(&mut self, item: T) {
        let node = Node::new_detached(item);
        // SAFETY: the cursor node is in the list (possibly the ghost), and
        // its `prev` neighbour is adjacent to it.
        unsafe {
            let prev = Node::prev(self.pos.node);
            self.list.attach_node(prev, self.pos.node, node);
        }
        self.pos.index += 1;
    }

    /// Unlinks the element under the cursor and returns it. The cursor
    /// lands on the following node at the same position. At the ghost node
    /// nothing happens and `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_seq::DoublyLinkedList;
    ///
    /// let mut list = DoublyLinkedList::from_iter(0..10);
    /// let mut cursor = list.cursor_mut(5).unwrap();
    ///
    /// assert_eq!(cursor.remove(), Some(5));
    /// assert_eq!((cursor.index(), cursor.current()), (5, Some(&6)));
    ///
    /// cursor.move_to_end();
    /// assert_eq!(cursor.remove(), None);
    /// assert_eq!(cursor.index(), 9);
    /// ```
    pub fn remove(&mut self) -> Option<T> {
        if self.pos.is_ghost(self.list) {
            return None;
        }
        let node = self.pos.node;
        // SAFETY: `node` is an element node of the list.
        unsafe {
            self.pos.node = Node::next(node);
            Some(self.list.detach_node(node).element)
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for CursorMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("index", &self.pos.index)
            .field("current", &self.current())
            .finish()
    }
}

unsafe impl<T: Sync> Send for Cursor<'_, T> {}

unsafe impl<T: Sync> Sync for Cursor<'_, T> {}

unsafe impl<T: Send> Send for CursorMut<'_, T> {}

unsafe impl<T: Sync> Sync for CursorMut<'_, T> {}

#[cfg(test)]
mod tests {
    use crate::DoublyLinkedList;

    #[test]
    fn cursor_seek_from_anywhere() {
        let list = DoublyLinkedList::from_iter(0..9);
        let mut cursor = list.cursor_start();
        for target in [8, 1, 7, 4, 0, 9, 5, 5, 3, 6] {
            assert_eq!(cursor.seek_to(target), Ok(()));
            assert_eq!(cursor.index(), target);
            assert_eq!(cursor.current(), if target < 9 { Some(&target) } else { None });
        }
        assert_eq!(cursor.seek_to(10), Err(1));
        assert_eq!(cursor.index(), 6);
    }

    #[test]
    fn cursor_moves() {
        let list = DoublyLinkedList::from([1, 2]);
        let mut cursor = list.cursor_start();
        assert!(!cursor.move_prev());
        assert_eq!(cursor.previous(), None);
        assert!(cursor.move_next());
        assert_eq!(cursor.previous(), Some(&1));
        assert!(cursor.move_next());
        assert_eq!(cursor.current(), None);
        assert_eq!(cursor.previous(), Some(&2));
        assert!(!cursor.move_next());
        assert_eq!(cursor.index(), 2);

        let empty = DoublyLinkedList::<i32>::new();
        let mut cursor = empty.cursor_start();
        assert!(!cursor.move_next());
        assert!(!cursor.move_prev());
        assert_eq!(cursor.current(), None);
        assert_eq!(cursor.previous(), None);
    }

    #[test]
    fn cursor_mut_edits() {
        let mut list = DoublyLinkedList::from_iter(0..6);
        let mut cursor = list.cursor_mut(4).unwrap();
        assert_eq!(cursor.remove(), Some(4));
        assert_eq!(cursor.remove(), Some(5));
        assert_eq!(cursor.remove(), None);
        cursor.insert(6);
        assert!(cursor.move_prev());
        assert_eq!(cursor.current(), Some(&6));
        cursor.move_to_start();
        cursor.insert(-1);
        assert_eq!(cursor.view().len(), 6);
        list.check_links();
        assert_eq!(Vec::from_iter(list), vec![-1, 0, 1, 2, 3, 6]);
    }
}
