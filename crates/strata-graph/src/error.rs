use crate::graph::NodeId;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("node {id} is defined more than once")]
    DuplicateNode { id: NodeId },

    #[error("edge {from} -> {to} references a node that does not exist")]
    MissingEndpoint { from: NodeId, to: NodeId },

    #[error("node {id} has an unusable size {width}x{height}")]
    InvalidSize { id: NodeId, width: f64, height: f64 },
}

pub type Result<T> = std::result::Result<T, Error>;
