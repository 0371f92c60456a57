//! A singly linked list of `i32` values.
//!
//! The list is a [`List`] handle owning a chain of [`Node`]s. Every operation is a
//! free function over that handle, and every fallible one reports a [`ListError`]
//! without touching the list.

mod print_utils;

mod access;
mod error;
mod extract;
mod insert;
mod invert;
mod node;
mod remove;
mod search;
mod serial;

pub use access::{get_node, len};
pub use error::ListError;
pub use extract::{pop_at, pop_at_end, pop_at_start, slice_at, slice_section};
pub use insert::{
    insert_all_at, insert_all_at_end, insert_all_at_start, insert_at, insert_at_end,
    insert_at_start,
};
pub use invert::invert;
pub use node::{IntoNodes, IntoValues, Iter, List, Node};
pub use print_utils::{print_list, write_list, Diagram};
pub use remove::{remove_at, remove_at_end, remove_at_start};
pub use search::{has_node, has_value, position_of};
