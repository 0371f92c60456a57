use std::fmt;
use std::io;
use std::iter;

use pretty::{DocAllocator, Pretty};

use crate::node::List;

/// `[9,10,12,15,]`: every value is followed by a comma, including the last.
impl fmt::Display for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for value in self.values() {
            write!(f, "{},", value)?;
        }
        write!(f, "]")
    }
}

/// Writes `list` on its own line. An empty list writes nothing.
pub fn write_list<W: io::Write>(out: &mut W, list: &List) -> io::Result<()> {
    if list.is_empty() {
        return Ok(());
    }
    writeln!(out, "{}", list)
}

/// Prints `list` to stdout on its own line. An empty list prints nothing.
pub fn print_list(list: &List) {
    if !list.is_empty() {
        println!("{}", list);
    }
}

/// A `9 -> 10 -> nil` rendering of a list, broken over lines to fit a width.
pub struct Diagram<'a> {
    list: &'a List,
    width: usize,
}

impl List {
    pub fn diagram(&self, width: usize) -> Diagram<'_> {
        Diagram { list: self, width }
    }
}

impl fmt::Display for Diagram<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let alloc = pretty::Arena::new();
        self.list.pretty(&alloc).render_fmt(self.width, f)
    }
}

impl<'a, D: DocAllocator<'a>> Pretty<'a, D> for &'a List
where
    D::Doc: Clone,
{
    fn pretty(self, alloc: &'a D) -> pretty::DocBuilder<'a, D, ()> {
        let values = self.values().map(move |value| alloc.text(value.to_string()));
        let arrow = alloc.text(" ->").append(alloc.softline());
        alloc.intersperse(values.chain(iter::once(alloc.text("nil"))), arrow)
    }
}
