use crate::error::Error;

/// Index of a node inside its `ListArena`. `Option<NodeId>` is the successor
/// reference; `None` means "no successor".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

#[derive(Debug)]
struct Node<T> {
    value: T,
    successor: Option<NodeId>,
}

#[derive(Debug)]
pub struct ListArena<T> {
    nodes: Vec<Node<T>>,
}

impl<T> ListArena<T> {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn try_alloc(&mut self, value: T) -> Result<NodeId, Error> {
        self.nodes.try_reserve(1)?;
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            value,
            successor: None,
        });
        Ok(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn value(&self, id: NodeId) -> &T {
        &self.nodes[id.0].value
    }

    pub fn successor(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].successor
    }

    pub fn set_successor(&mut self, id: NodeId, successor: Option<NodeId>) {
        self.nodes[id.0].successor = successor;
    }
}

impl<T> Default for ListArena<T> {
    fn default() -> Self {
        Self::new()
    }
}
