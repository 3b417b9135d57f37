use std::io::Write;

use crate::base::{Address, ClusterConfig, ServerSlot, SERVER_COUNT};

pub fn write_summary(
    out: &mut impl Write,
    file_name: &str,
    config: &ClusterConfig,
    addresses: &[Address; SERVER_COUNT],
) -> std::io::Result<()> {
    writeln!(
        out,
        "Generated {} with {} nodes.",
        file_name,
        config.peers.len()
    )?;
    for (slot, address) in ServerSlot::all().iter().zip(addresses) {
        writeln!(out, "{}: {}", slot.label(), address)?;
    }
    writeln!(out, "Copy this file to all servers.")?;
    Ok(())
}
