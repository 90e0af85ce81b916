//! A three-node linked list that deliberately links its last node back to
//! the second one, to demonstrate how a cycle breaks list traversal.

pub mod arena;
pub mod builder;
pub mod error;
pub mod printer;

pub use arena::{ListArena, NodeId};
pub use builder::{build_chain, Chain, TerminalLink};
pub use error::Error;
pub use printer::{print_list, Traversal};
