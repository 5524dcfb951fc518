//! Services the animation core borrows from its host runtime.

use super::Threshold;

/// Reports how much of a region intersects the viewport.
pub trait IntersectionSource {
    type Region;
    type Subscription: Subscription;

    /// Starts observing `region`, calling `on_change` with the visible
    /// fraction (0.0 to 1.0) whenever the host notices a threshold crossing.
    ///
    /// Returns `None` when the region cannot be observed, e.g. it is no
    /// longer attached. Implementations must deliver asynchronously, never
    /// from inside `observe` itself.
    fn observe(
        &self,
        region: &Self::Region,
        threshold: Threshold,
        on_change: Box<dyn FnMut(f64)>,
    ) -> Option<Self::Subscription>;
}

pub trait Subscription {
    /// Stops delivery. No callback may run after this returns.
    fn cancel(self);
}

/// Repeating timer service.
pub trait Scheduler {
    type Task: ScheduledTask;

    fn schedule(&self, interval_ms: u32, tick: Box<dyn FnMut()>) -> Self::Task;
}

pub trait ScheduledTask {
    /// Stops the timer. No tick may run after this returns.
    fn cancel(self);
}

/// Monotonic-enough millisecond clock.
pub trait Clock {
    fn now_ms(&self) -> f64;
}
