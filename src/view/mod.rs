//! # Presentation Layer
//!
//! Views are borrowed snapshots of state that render through [`Display`](std::fmt::Display).
//! They never fetch or mutate anything, so rendering the same state twice
//! yields the same text.

pub mod cart;
pub mod catalog;
pub mod format;
pub mod orders;
pub mod sidebar;

pub use cart::*;
pub use catalog::*;
pub use orders::*;
pub use sidebar::*;

use crate::model::Notice;
use std::fmt::{self, Display};

/// Notices rendered one per line, in the order they were raised.
pub struct NoticesView<'a> {
    notices: &'a [Notice],
}

impl<'a> NoticesView<'a> {
    pub fn new(notices: &'a [Notice]) -> Self {
        Self { notices }
    }
}

impl Display for NoticesView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for notice in self.notices {
            writeln!(f, "{}", notice)?;
        }
        Ok(())
    }
}
