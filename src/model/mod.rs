//! Pure data structures shared by the session runtime, the gateway and the views.

pub mod cart;
pub mod notice;
pub mod order;
pub mod product;

pub use cart::*;
pub use notice::*;
pub use order::*;
pub use product::*;
