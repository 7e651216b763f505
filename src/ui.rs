//! Presentation-layer seams and event plumbing.
//!
//! The picker renders through a host shell (web view or native toolkit).
//! The traits here are the narrow surface the helpers need from that shell,
//! so everything else in the crate stays host-agnostic.

mod element;
mod events;
mod keyboard;

pub use element::{ElementNode, ElementPosition, element_contains};
pub use events::{Event, EventMap, EventTarget, Listener, merge_events, off, on};
pub use keyboard::{Key, on_space_or_enter};
