//! Backend order retrieval and the figures derived from it.

pub mod fetcher;
pub mod stats;
pub mod timing;

pub use fetcher::*;
pub use stats::*;
pub use timing::*;
