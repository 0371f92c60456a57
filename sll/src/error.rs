use crate::node::List;

/// Why a list operation was rejected. A rejected operation leaves the list untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ListError {
    #[error("index {idx} is out of bounds for a list of length {len}")]
    IndexOutOfBounds { idx: isize, len: usize },

    #[error("the list is empty")]
    EmptyList,

    #[error("invalid range [{start}, {end}]")]
    InvalidRange { start: isize, end: isize },
}

pub(crate) fn out_of_bounds(list: &List, idx: isize) -> ListError {
    reject(ListError::IndexOutOfBounds {
        idx,
        len: list.len(),
    })
}

pub(crate) fn empty_list() -> ListError {
    reject(ListError::EmptyList)
}

pub(crate) fn invalid_range(start: isize, end: isize) -> ListError {
    reject(ListError::InvalidRange { start, end })
}

fn reject(err: ListError) -> ListError {
    log::debug!("rejected list operation: {err}");
    err
}
