//! Pure renderers turning model snapshots into terminal markup.
//!
//! Nothing in here reads application state or talks to the network; the
//! controller passes in whatever should be shown.

pub mod base;
pub mod likes;
pub mod list;
pub mod recipe;
pub mod search;
