//! This crate provides two linked sequences with owned nodes and
//! sequence-style, position-based operations:
//!
//! - [`LinkedList`], a singly linked list that keeps only a head pointer;
//! - [`DoublyLinkedList`], a doubly linked list implemented as a cyclic list
//!   around a ghost node, so both ends are reachable in constant time.
//!
//! Positions may be negative and count from the end, so `-1` is the last
//! element. Failed operations return an [`Error`] instead of panicking.
//!
//! ```
//! use linked_seq::{DoublyLinkedList, ErrorKind, LinkedList};
//!
//! let mut list = LinkedList::from([1, 2, 3]);
//! list.insert(0, 0).unwrap();
//! assert_eq!(list.get(-1), Ok(&3));
//! assert_eq!(list.pop(), Ok(3));
//! assert_eq!(list.get(7).unwrap_err().kind(), ErrorKind::Index);
//!
//! let mut doubly = DoublyLinkedList::from_iter(0..100);
//! assert_eq!(doubly.get(-2), Ok(&98)); // walks backward from the tail
//! doubly.lappend(-1);
//! assert_eq!(doubly.lpop(), Ok(-1));
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of a [`DoublyLinkedList`] is like the following graph:
//! ```text
//!          ┌─────────────────────────────────────────────────────────────────────┐
//!          ↓                                                     (Ghost) Node N  │
//!    ╔═══════════╗           ╔═══════════╗                        ┌───────────┐  │
//!    ║   next    ║ ────────→ ║   next    ║ ────────→ ┄┄ ────────→ │   next    │ ─┘
//!    ╟───────────╢           ╟───────────╢     Node 2, 3, ...     ├───────────┤
//! ┌─ ║   prev    ║ ←──────── ║   prev    ║ ←──────── ┄┄ ←──────── │   prev    │
//! │  ╟───────────╢           ╟───────────╢                        ├───────────┤
//! │  ║ payload T ║           ║ payload T ║                        ┊ uninit T  ┊
//! │  ╚═══════════╝           ╚═══════════╝                        └╌╌╌╌╌╌╌╌╌╌╌┘
//! │      Node 0                  Node 1                               ↑   ↑
//! └───────────────────────────────────────────────────────────────────┘   │
//! ╔═══════════╗                                                           │
//! ║   ghost   ║ ──────────────────────────────────────────────────────────┘
//! ╟───────────╢
//! ║    len    ║
//! ╚═══════════╝
//!  DoublyLinkedList
//! ```
//! `ghost.next` is the head and `ghost.prev` is the tail. In an empty list
//! both point to the ghost node itself. The ghost node is allocated with the
//! same layout as the other nodes, but its payload is never initialized.
//!
//! A [`LinkedList`] is a plain chain of boxed nodes ending in `None`:
//! ```text
//! ╔═══════════╗     ┌───────────┐     ┌───────────┐
//! ║   head    ║ ──→ │ payload T │ ──→ │ payload T │ ──→ None
//! ╟───────────╢     └───────────┘     └───────────┘
//! ║    len    ║
//! ╚═══════════╝
//! ```
//!
//! # Positions
//!
//! For a list of length *n*, element operations ([`get`], [`set`],
//! [`delete`], [`pop_at`]) accept `-n..n`. [`insert`] also accepts *n*,
//! which appends. A negative index `i` always means `i + n`, so `insert(-1, v)`
//! puts `v` before the last element.
//!
//! # Cursors
//!
//! [`Cursor`] and [`CursorMut`] move over the *n* + 1 positions of a
//! [`DoublyLinkedList`], where position *n* is the ghost node. Indexed
//! operations of the doubly linked list and [`Cursor::seek_to`] share one
//! walk, which starts from whichever end of the list or cursor node is
//! closest.
//!
//! # Logging
//!
//! With the default `tracing` feature, rejected operations are reported as
//! `debug` events and bulk operations as `trace` events through the
//! [`tracing`](https://docs.rs/tracing) facade. Disable default features to
//! compile them out.
//!
//! [`get`]: LinkedList::get
//! [`set`]: LinkedList::set
//! [`delete`]: LinkedList::delete
//! [`pop_at`]: LinkedList::pop_at
//! [`insert`]: LinkedList::insert
//! [`Cursor`]: crate::doubly::cursor::Cursor
//! [`CursorMut`]: crate::doubly::cursor::CursorMut
//! [`Cursor::seek_to`]: crate::doubly::cursor::Cursor::seek_to

#[macro_use]
mod log;

mod error;
mod macros;
mod position;

pub mod doubly;
pub mod singly;

pub use doubly::DoublyLinkedList;
pub use error::{Error, ErrorKind, Result};
pub use singly::LinkedList;
