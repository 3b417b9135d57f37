use std::ops::RangeInclusive;

pub type NodeId = u64;
pub type Port = u16;
pub type Address = String;

// ports are handed out starting at BASE_PORT + 1
pub const BASE_PORT: Port = 7000;
pub const DEFAULT_ADDRESS: &str = "127.0.0.1";
pub const DEFAULT_OUTPUT: &str = "cluster.json";

pub const NODES_PER_SERVER: NodeId = 5;
pub const SERVER_COUNT: usize = 3;
pub const NODE_COUNT: NodeId = NODES_PER_SERVER * SERVER_COUNT as NodeId;

/// One of the three fixed server positions, each hosting five nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServerSlot {
    // 1-based
    pub index: usize,
}

impl ServerSlot {
    pub fn all() -> [ServerSlot; SERVER_COUNT] {
        [
            ServerSlot { index: 1 },
            ServerSlot { index: 2 },
            ServerSlot { index: 3 },
        ]
    }

    pub fn nodes(&self) -> RangeInclusive<NodeId> {
        let first = (self.index as NodeId - 1) * NODES_PER_SERVER + 1;
        first..=first + NODES_PER_SERVER - 1
    }

    // e.g. "Server 2 (Nodes 6-10)"
    pub fn label(&self) -> String {
        let nodes = self.nodes();
        format!(
            "Server {} (Nodes {}-{})",
            self.index,
            nodes.start(),
            nodes.end()
        )
    }
}
