use std::ptr;

use crate::node::{List, Node};

pub fn has_value(list: &List, value: i32) -> bool {
    list.values().any(|v| v == value)
}

pub fn position_of(list: &List, value: i32) -> Option<usize> {
    list.values().position(|v| v == value)
}

/// Whether some node of `list` carries `target`'s value and links to the very same successor
/// node as `target` does. Two nodes without a successor count as linking to the same one.
///
/// This is a positional check, not value containment: equal values in front of a different
/// successor do not match.
pub fn has_node(list: &List, target: &Node) -> bool {
    list.iter()
        .any(|node| node.value == target.value && same_successor(node, target))
}

fn same_successor(a: &Node, b: &Node) -> bool {
    match (a.next(), b.next()) {
        (None, None) => true,
        (Some(a), Some(b)) => ptr::eq(a, b),
        _ => false,
    }
}
