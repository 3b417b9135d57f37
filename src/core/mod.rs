mod allocator;
mod generator;
mod prompt;
mod report;

pub use allocator::PortAllocator;
pub use generator::generate_peers;
pub use prompt::Prompter;
pub use report::write_summary;
