use crate::access::position;
use crate::error::{empty_list, out_of_bounds, ListError};
use crate::node::{last_slot, slot_mut, unlink, List};

/// Destroys the head; the former second node becomes the head.
pub fn remove_at_start(list: &mut List) -> Result<(), ListError> {
    unlink(&mut list.head).map(drop).ok_or_else(empty_list)
}

/// Destroys the node at `idx`, linking its predecessor to its successor.
pub fn remove_at(list: &mut List, idx: isize) -> Result<(), ListError> {
    if list.is_empty() {
        return Err(empty_list());
    }
    if idx == 0 {
        return remove_at_start(list);
    }

    let removed = position(idx)
        .and_then(|pos| slot_mut(&mut list.head, pos))
        .and_then(unlink);
    match removed {
        Some(node) => {
            log::trace!("removed {} at {idx}", node.value);
            Ok(())
        }
        None => Err(out_of_bounds(list, idx)),
    }
}

/// Destroys the last node. A single-node list becomes empty.
pub fn remove_at_end(list: &mut List) -> Result<(), ListError> {
    let slot = last_slot(&mut list.head).ok_or_else(empty_list)?;
    *slot = None;
    Ok(())
}
