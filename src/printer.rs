use std::fmt::Display;
use std::io::Write;

use crate::arena::{ListArena, NodeId};
use crate::builder::Chain;
use crate::error::Error;

pub struct Traversal<'a, T> {
    arena: &'a ListArena<T>,
    current: Option<NodeId>,
}

impl<'a, T> Traversal<'a, T> {
    pub(crate) fn new(arena: &'a ListArena<T>, head: Option<NodeId>) -> Self {
        Traversal {
            arena,
            current: head,
        }
    }
}

impl<'a, T> Iterator for Traversal<'a, T> {
    type Item = (NodeId, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|id| {
            self.current = self.arena.successor(id);
            (id, self.arena.value(id))
        })
    }
}

/// Renders the chain as `a -> b -> ... -> NULL`, writing each entry as it is
/// visited. Stepping onto an already-visited node aborts with
/// `UnboundedTraversal` instead of repeating forever; everything written so
/// far stays written.
pub fn print_list<T: Display>(chain: &Chain<T>, out: &mut impl Write) -> Result<(), Error> {
    writeln!(out, "Attempting to print list:")?;
    let mut visited = vec![false; chain.len()];
    let mut steps = 0;
    for (id, value) in chain.traverse() {
        if visited[id.0] {
            return Err(Error::UnboundedTraversal { steps });
        }
        visited[id.0] = true;
        write!(out, "{} -> ", value)?;
        out.flush()?;
        steps += 1;
    }
    writeln!(out, "NULL")?;
    Ok(())
}
