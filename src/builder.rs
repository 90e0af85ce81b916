use crate::arena::{ListArena, NodeId};
use crate::error::Error;
use crate::printer::Traversal;

/// What the last node's successor is set to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalLink {
    /// Leave the last successor absent, terminating the chain.
    Terminate,
    /// Point the last node back at the second-to-last one, forming a cycle.
    /// This is the bug under study.
    BackToSecondLast,
}

/// A chain of nodes: the arena that owns them plus the head reference.
#[derive(Debug)]
pub struct Chain<T> {
    arena: ListArena<T>,
    head: Option<NodeId>,
}

pub fn build_chain<T>(
    values: impl IntoIterator<Item = T>,
    terminal: TerminalLink,
) -> Result<Chain<T>, Error> {
    let mut arena = ListArena::new();
    let mut ids = Vec::new();
    for value in values {
        ids.try_reserve(1)?;
        ids.push(arena.try_alloc(value)?);
    }
    for pair in ids.windows(2) {
        arena.set_successor(pair[0], Some(pair[1]));
    }
    if terminal == TerminalLink::BackToSecondLast {
        if ids.len() < 2 {
            return Err(Error::NoSecondToLast);
        }
        arena.set_successor(ids[ids.len() - 1], Some(ids[ids.len() - 2]));
    }
    Ok(Chain {
        arena,
        head: ids.first().copied(),
    })
}

impl<T> Chain<T> {
    pub fn head(&self) -> Option<NodeId> {
        self.head
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    pub fn value(&self, id: NodeId) -> &T {
        self.arena.value(id)
    }

    /// Lazy walk along successor references starting at the head. Does no
    /// cycle detection: on a cyclic chain it never ends, so bound it.
    pub fn traverse(&self) -> Traversal<'_, T> {
        Traversal::new(&self.arena, self.head)
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.traverse().map(|(_, value)| value)
    }

    /// True iff the walk from the head reaches the absence value and visits
    /// every allocated node exactly once.
    pub fn is_well_formed(&self) -> bool {
        let mut seen = 0;
        let mut current = self.head;
        while let Some(id) = current {
            seen += 1;
            if seen > self.arena.len() {
                return false;
            }
            current = self.arena.successor(id);
        }
        seen == self.arena.len()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn terminate_policy_builds_a_simple_path() {
        for n in 1..=5 {
            let chain = build_chain(0..n, TerminalLink::Terminate).unwrap();
            let visited: Vec<i32> = chain.values().copied().collect();
            assert_eq!(visited, (0..n).collect::<Vec<i32>>());
            assert!(chain.is_well_formed());
        }
    }

    #[test]
    fn empty_chain_has_no_head() {
        let chain = build_chain(std::iter::empty::<i32>(), TerminalLink::Terminate).unwrap();
        assert_eq!(chain.head(), None);
        assert!(chain.is_empty());
        assert!(chain.is_well_formed());
    }

    #[test]
    fn back_link_revisits_the_second_node() {
        let chain = build_chain([10, 20, 30], TerminalLink::BackToSecondLast).unwrap();
        let ids: Vec<NodeId> = chain.traverse().take(4).map(|(id, _)| id).collect();
        assert_eq!(ids[3], ids[1]);
        assert_eq!(chain.value(ids[3]), &20);
        assert!(!chain.is_well_formed());
    }

    #[test]
    fn back_link_needs_two_nodes() {
        assert!(matches!(
            build_chain(std::iter::empty::<i32>(), TerminalLink::BackToSecondLast),
            Err(Error::NoSecondToLast)
        ));
        assert!(matches!(
            build_chain([10], TerminalLink::BackToSecondLast),
            Err(Error::NoSecondToLast)
        ));
    }

    struct Guard(Rc<Cell<usize>>);
    impl Drop for Guard {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn nodes_released_exactly_once() {
        for terminal in [TerminalLink::Terminate, TerminalLink::BackToSecondLast] {
            let drops = Rc::new(Cell::new(0));
            let chain = build_chain((0..3).map(|_| Guard(Rc::clone(&drops))), terminal).unwrap();
            assert_eq!(drops.get(), 0);
            drop(chain);
            assert_eq!(drops.get(), 3);
        }
    }
}
