use crate::node::{List, Node};

/// The node at zero-based position `idx`, or `None` when `idx` is negative or past the tail.
pub fn get_node(list: &List, idx: isize) -> Option<&Node> {
    let pos = position(idx)?;
    list.iter().nth(pos)
}

pub fn len(list: &List) -> usize {
    list.len()
}

/// A signed index as a position. Negative indices have none.
pub(crate) fn position(idx: isize) -> Option<usize> {
    usize::try_from(idx).ok()
}
