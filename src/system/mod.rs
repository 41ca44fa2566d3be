pub mod collector;
pub mod memory;
pub mod sampler;
pub mod snapshot;
pub mod store;
