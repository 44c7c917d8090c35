//! Timeline layout.
//!
//! Events that overlap in time are drawn side by side. This module decides
//! which column each event takes and how wide the columns of its overlap
//! group are.

mod layout;

pub use layout::{EventLayout, LayoutMap, TimelineLayoutEngine};
