use crate::access::position;
use crate::error::{out_of_bounds, ListError};
use crate::node::{slot_mut, tail_slot, List, Node};

/// Makes `node` the new head. An empty list gains its first element.
pub fn insert_at_start(list: &mut List, mut node: Box<Node>) {
    node.next = list.head.take();
    list.head = Some(node);
}

/// Appends `node` after the current tail.
pub fn insert_at_end(list: &mut List, mut node: Box<Node>) {
    node.next = None;
    *tail_slot(&mut list.head) = Some(node);
}

/// Inserts `node` so that it becomes element `idx`, shifting the former occupant down by one.
///
/// Any `idx` from `0` up to and including the length is accepted; the length itself appends.
pub fn insert_at(list: &mut List, mut node: Box<Node>, idx: isize) -> Result<(), ListError> {
    if idx == 0 {
        insert_at_start(list, node);
        return Ok(());
    }

    let Some(slot) = position(idx).and_then(|pos| slot_mut(&mut list.head, pos)) else {
        return Err(out_of_bounds(list, idx));
    };
    node.next = slot.take();
    *slot = Some(node);
    log::trace!("linked node at {idx}");
    Ok(())
}

/// Splices the whole of `sublist` in front of the current head.
pub fn insert_all_at_start(list: &mut List, mut sublist: List) {
    let rest = list.head.take();
    list.head = sublist.head.take();
    *tail_slot(&mut list.head) = rest;
}

/// Links the whole of `sublist` after the current tail.
pub fn insert_all_at_end(list: &mut List, mut sublist: List) {
    *tail_slot(&mut list.head) = sublist.head.take();
}

/// Inserts every node of `sublist` at `idx`, last node first, so the sublist keeps its order
/// starting at position `idx`.
pub fn insert_all_at(list: &mut List, sublist: List, idx: isize) -> Result<(), ListError> {
    if position(idx).map_or(true, |pos| pos > list.len()) {
        return Err(out_of_bounds(list, idx));
    }

    let nodes: Vec<Box<Node>> = sublist.into_nodes().collect();
    log::trace!("inserting {} nodes at {idx}", nodes.len());
    for node in nodes.into_iter().rev() {
        insert_at(list, node, idx)?;
    }
    Ok(())
}
