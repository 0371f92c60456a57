use std::mem;

use crate::access::position;
use crate::error::{empty_list, invalid_range, out_of_bounds, ListError};
use crate::insert::insert_all_at_end;
use crate::node::{slot_mut, List, Node};

/// Splits the list before `idx` and hands back the chain that starts there.
///
/// The list keeps elements `0..idx`. With `idx == 0` the whole chain moves out and the list
/// is left empty.
pub fn slice_at(list: &mut List, idx: isize) -> Result<List, ListError> {
    if list.is_empty() {
        return Err(empty_list());
    }

    let Some(slot) = position(idx)
        .and_then(|pos| slot_mut(&mut list.head, pos))
        .filter(|slot| slot.is_some())
    else {
        return Err(out_of_bounds(list, idx));
    };
    log::trace!("sliced at {idx}");
    Ok(List { head: slot.take() })
}

/// Extracts the inclusive section `[start, end]` as an independent chain and joins what was
/// before it to what was after it.
pub fn slice_section(list: &mut List, start: isize, end: isize) -> Result<List, ListError> {
    if start < 0 || end < 0 || end < start {
        return Err(invalid_range(start, end));
    }
    if list.is_empty() {
        return Err(empty_list());
    }
    let len = list.len();
    if position(end).map_or(true, |pos| pos >= len) {
        return Err(out_of_bounds(list, end));
    }

    // Bounds are settled; the slices below cannot fail halfway through.
    let reaches_tail = position(end + 1) == Some(len);
    if start == 0 {
        let rest = if reaches_tail {
            List::new()
        } else {
            slice_at(list, end + 1)?
        };
        return Ok(mem::replace(list, rest));
    }

    let mut section = slice_at(list, start)?;
    if !reaches_tail {
        let rest = slice_at(&mut section, end - start + 1)?;
        insert_all_at_end(list, rest);
    }
    Ok(section)
}

/// Removes the node at `idx` and returns it detached; the list closes the gap.
pub fn pop_at(list: &mut List, idx: isize) -> Result<Box<Node>, ListError> {
    slice_section(list, idx, idx)?
        .into_nodes()
        .next()
        .ok_or_else(empty_list)
}

pub fn pop_at_start(list: &mut List) -> Result<Box<Node>, ListError> {
    pop_at(list, 0)
}

/// Removes the last node and returns it. A single-node list becomes empty.
pub fn pop_at_end(list: &mut List) -> Result<Box<Node>, ListError> {
    match list.len() {
        0 => Err(empty_list()),
        len => pop_at(list, len as isize - 1),
    }
}
