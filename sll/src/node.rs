use std::fmt;

/// An owning link to the next node of a chain.
pub(crate) type Link = Option<Box<Node>>;

/// One unit of a chain: a value and the chain that follows it.
pub struct Node {
    pub value: i32,
    pub(crate) next: Link,
}

impl Node {
    /// Creates a detached node. Nodes only gain a successor by being linked into a [`List`].
    pub fn new(value: i32) -> Box<Self> {
        Box::new(Node { value, next: None })
    }

    pub fn next(&self) -> Option<&Node> {
        self.next.as_deref()
    }

    pub fn is_last(&self) -> bool {
        self.next.is_none()
    }
}

// Unlinks the suffix one node at a time, so dropping a long chain never recurses.
impl Drop for Node {
    fn drop(&mut self) {
        let mut next = self.next.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("next", &self.next().map(|next| next.value))
            .finish()
    }
}

/// The owning handle of a chain. An empty list holds no node at all.
#[derive(Default)]
pub struct List {
    pub(crate) head: Link,
}

impl List {
    pub const fn new() -> Self {
        List { head: None }
    }

    /// A list whose only element is `node`.
    pub fn from_node(mut node: Box<Node>) -> Self {
        node.next = None;
        List { head: Some(node) }
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn front(&self) -> Option<&Node> {
        self.head.as_deref()
    }

    pub fn back(&self) -> Option<&Node> {
        self.iter().last()
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    pub fn values(&self) -> impl Iterator<Item = i32> + '_ {
        self.iter().map(|node| node.value)
    }

    pub fn to_vec(&self) -> Vec<i32> {
        self.values().collect()
    }

    /// Consumes the list, yielding each node detached from its successor.
    pub fn into_nodes(self) -> IntoNodes {
        IntoNodes(self)
    }
}

impl fmt::Debug for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.values()).finish()
    }
}

impl PartialEq for List {
    fn eq(&self, other: &Self) -> bool {
        self.values().eq(other.values())
    }
}

impl Eq for List {}

impl FromIterator<i32> for List {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut list = List::new();
        list.extend(iter);
        list
    }
}

impl Extend<i32> for List {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        let mut slot = tail_slot(&mut self.head);
        for value in iter {
            let node = slot.insert(Node::new(value));
            slot = &mut node.next;
        }
    }
}

impl IntoIterator for List {
    type Item = i32;
    type IntoIter = IntoValues;

    fn into_iter(self) -> IntoValues {
        IntoValues(self.into_nodes())
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Node;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

pub struct Iter<'a> {
    next: Option<&'a Node>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<&'a Node> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            node
        })
    }
}

pub struct IntoNodes(List);

impl Iterator for IntoNodes {
    type Item = Box<Node>;

    fn next(&mut self) -> Option<Box<Node>> {
        unlink(&mut self.0.head)
    }
}

pub struct IntoValues(IntoNodes);

impl Iterator for IntoValues {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        self.0.next().map(|node| node.value)
    }
}

/// The slot holding position `pos`, or `None` when `pos` is past the end.
/// Position `len` yields the empty slot after the tail.
pub(crate) fn slot_mut(head: &mut Link, pos: usize) -> Option<&mut Link> {
    let mut slot = head;
    for _ in 0..pos {
        slot = &mut slot.as_mut()?.next;
    }
    Some(slot)
}

/// The empty slot after the tail.
pub(crate) fn tail_slot(head: &mut Link) -> &mut Link {
    let mut slot = head;
    while let Some(node) = slot {
        slot = &mut node.next;
    }
    slot
}

/// The slot holding the last node, `None` for an empty chain.
pub(crate) fn last_slot(head: &mut Link) -> Option<&mut Link> {
    let mut slot = head;
    while slot.as_ref()?.next.is_some() {
        slot = &mut slot.as_mut()?.next;
    }
    Some(slot)
}

/// Takes the node out of `slot` and closes the gap with its successor.
pub(crate) fn unlink(slot: &mut Link) -> Option<Box<Node>> {
    let mut node = slot.take()?;
    *slot = node.next.take();
    Some(node)
}
