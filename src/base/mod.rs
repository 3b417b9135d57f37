mod config;
mod error;
mod types;

pub use config::ClusterConfig;
pub use error::Error;
pub use error::Result;
pub use types::*;
