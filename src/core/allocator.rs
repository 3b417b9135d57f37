use std::collections::HashMap;

use crate::base::{Address, Port};

// last port handed out per address; servers sharing an address share a counter
pub struct PortAllocator {
    base: Port,
    next_port: HashMap<Address, Port>,
}

impl PortAllocator {
    pub fn new<'a>(addresses: impl IntoIterator<Item = &'a Address>, base: Port) -> Self {
        let next_port = addresses
            .into_iter()
            .map(|address| (address.clone(), base))
            .collect();
        Self { base, next_port }
    }

    pub fn next_port(&mut self, address: &str) -> Port {
        let port = self
            .next_port
            .entry(address.to_string())
            .or_insert(self.base);
        *port += 1;
        *port
    }
}
