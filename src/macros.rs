/// Creates a [`LinkedList`](crate::LinkedList) containing the arguments.
///
/// # Examples
///
/// ```
/// use linked_seq::{linked_list, LinkedList};
///
/// let list = linked_list![1, 2, 3];
/// assert_eq!(list, LinkedList::from([1, 2, 3]));
///
/// let zeros = linked_list![0; 4];
/// assert_eq!(zeros.len(), 4);
///
/// let empty: LinkedList<i32> = linked_list![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! linked_list {
    () => {
        $crate::LinkedList::new()
    };
    ($elem:expr; $n:expr) => {{
        // Evaluate the count only once.
        let count: usize = $n;
        ::core::iter::repeat($elem).take(count).collect::<$crate::LinkedList<_>>()
    }};
    ($($elem:expr),+ $(,)?) => {
        $crate::LinkedList::from([$($elem),+])
    };
}

/// Creates a [`DoublyLinkedList`](crate::DoublyLinkedList) containing the
/// arguments.
///
/// # Examples
///
/// ```
/// use linked_seq::{doubly_linked_list, DoublyLinkedList};
///
/// let mut list = doubly_linked_list!["a", "b"];
/// list.lappend("z");
/// assert_eq!(list, DoublyLinkedList::from(["z", "a", "b"]));
/// assert_eq!(doubly_linked_list!['x'; 2], DoublyLinkedList::from(['x', 'x']));
/// ```
#[macro_export]
macro_rules! doubly_linked_list {
    () => {
        $crate::DoublyLinkedList::new()
    };
    ($elem:expr; $n:expr) => {{
        let count: usize = $n;
        ::core::iter::repeat($elem).take(count).collect::<$crate::DoublyLinkedList<_>>()
    }};
    ($($elem:expr),+ $(,)?) => {
        $crate::DoublyLinkedList::from([$($elem),+])
    };
}

#[cfg(test)]
mod tests {
    use crate::{DoublyLinkedList, LinkedList};

    #[test]
    fn macro_forms() {
        let list: LinkedList<String> = linked_list![String::from("a"), String::from("b"),];
        assert_eq!(list.len(), 2);
        assert_eq!(linked_list![vec![1]; 3], LinkedList::from([vec![1], vec![1], vec![1]]));
        assert!(linked_list![5; 0].is_empty());

        let doubly: DoublyLinkedList<u8> = doubly_linked_list![];
        assert!(doubly.is_empty());
        assert_eq!(doubly_linked_list![1, 2], DoublyLinkedList::from([1, 2]));
    }
}
