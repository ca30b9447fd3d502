//! # fsa-nav
//!
//! Page-level widgets that sit around module content: the previous/next
//! navigation strip and the reading-progress indicator.

pub mod navigation;
pub mod reading;

pub use navigation::{ModuleLink, ModuleNavigation, NavLinks, NextLink};
pub use reading::{ReadingProgress, ReadingUpdate, ScrollMetrics, visible_text};
