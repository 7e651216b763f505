//! # calpick-core
//! Page addressing and presentation helpers for the calpick date picker.
//!
//! A *page* is the unit a calendar surface displays: a month, optionally
//! narrowed to a week or day. This crate owns the page coordinate type and
//! the small pile of helpers the picker components share: page ordering and
//! identity, listener merging and attachment, keyboard activation, prop
//! mixing, and id/hash generation for cache keys.
//!
//! Everything here is synchronous and pure (or near-pure: [`Guid::new`]
//! draws randomness, [`DateTime::now`] reads the clock). Malformed input
//! degrades to a defined boolean or `None`, never a panic.

#[macro_use]
mod macros;

pub mod date_time;
pub mod guid;
pub mod page;
pub mod props;
pub mod ui;
pub mod utils;

pub use date_time::{DateTime, dates_are_equal};
pub use guid::Guid;
pub use page::Page;
pub use props::{Prop, PropDescriptor, PropMap, PropValue};
