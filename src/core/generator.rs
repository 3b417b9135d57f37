use std::collections::HashSet;

use log::{debug, warn};

use crate::base::{Address, ClusterConfig, ServerSlot, BASE_PORT, SERVER_COUNT};

use super::PortAllocator;

/// Maps nodes 1-15 onto the three servers, five per server.
///
/// Ports come from a counter keyed by address, so when two slots share an
/// address the second group continues numbering after the first instead of
/// starting again at `BASE_PORT + 1`.
pub fn generate_peers(addresses: &[Address; SERVER_COUNT]) -> ClusterConfig {
    let distinct: HashSet<&Address> = addresses.iter().collect();
    if distinct.len() < SERVER_COUNT {
        warn!(
            "servers share an address, ports continue across their groups: {:?}",
            addresses
        );
    }

    let mut allocator = PortAllocator::new(addresses, BASE_PORT);
    let mut config = ClusterConfig::new();
    for (slot, address) in ServerSlot::all().iter().zip(addresses) {
        for node_id in slot.nodes() {
            let port = allocator.next_port(address);
            debug!("node {} -> {}:{}", node_id, address, port);
            config.peers.insert(node_id, format!("{}:{}", address, port));
        }
    }

    config
}
