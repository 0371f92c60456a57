use crate::access::position;
use crate::error::{empty_list, out_of_bounds, ListError};
use crate::node::{slot_mut, Link, List};

/// Reverses the nodes from position `start` through the tail in place.
///
/// `invert(list, 0)` reverses the whole list: the former tail becomes the head. For a later
/// `start` the nodes before it stay where they are and now lead into the reversed run.
pub fn invert(list: &mut List, start: isize) -> Result<(), ListError> {
    if list.is_empty() {
        return Err(empty_list());
    }

    let Some(slot) = position(start)
        .and_then(|pos| slot_mut(&mut list.head, pos))
        .filter(|slot| slot.is_some())
    else {
        return Err(out_of_bounds(list, start));
    };
    *slot = reverse(slot.take());
    log::trace!("inverted from {start}");
    Ok(())
}

fn reverse(mut chain: Link) -> Link {
    let mut reversed = None;
    while let Some(mut node) = chain {
        chain = node.next.take();
        node.next = reversed;
        reversed = Some(node);
    }
    reversed
}
