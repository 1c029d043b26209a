// src/core/mod.rs
pub mod case;
pub mod context;
pub mod filter;
pub mod registry;
pub mod report;
pub mod suite;

pub use case::*;
pub use context::*;
pub use filter::*;
pub use registry::*;
pub use report::*;
pub use suite::*;
