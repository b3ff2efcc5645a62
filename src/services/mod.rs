// Service exports
pub mod pool;

pub use pool::{PoolError, ProfilePool};
