pub mod attributes;
pub mod config;
pub mod topic;

pub use attributes::*;
pub use config::*;
pub use topic::*;
