//! Scroll-triggered animation primitives.
//!
//! [`VisibilityTracker`] latches once its region is visible enough and then
//! stops observing. [`TimedCounter`] owns a tracker and counts from zero up to
//! a target once that latch closes. Both are written against the host traits
//! in [`host`] so the browser bindings in [`dom`] can be swapped for the
//! deterministic doubles used in tests.

mod counter;
pub mod dom;
mod error;
pub mod host;
mod hooks;
mod reveal;
#[cfg(test)]
pub(crate) mod testing;

pub use counter::{CounterSettings, Pacing, TimedCounter};
pub use error::AnimationError;
pub use hooks::use_in_view;
pub use reveal::{Threshold, Visibility, VisibilityTracker};
