use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use log::{debug, warn};

use super::host::{IntersectionSource, Subscription};
use super::AnimationError;
use crate::config;

/// Smallest threshold the clamping constructor will produce.
pub const MIN_THRESHOLD: f64 = 0.01;

/// Fraction of a region that must intersect the viewport, always in (0, 1].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Threshold(f64);

impl Threshold {
    /// Clamps `value` into (0, 1]. NaN falls back to the default threshold.
    pub fn new(value: f64) -> Self {
        match Self::try_new(value) {
            Ok(threshold) => threshold,
            Err(err) => {
                let clamped = if value.is_nan() {
                    config::DEFAULT_REVEAL_THRESHOLD
                } else {
                    value.clamp(MIN_THRESHOLD, 1.0)
                };
                warn!("{err}, using {clamped}");
                Threshold(clamped)
            }
        }
    }

    pub fn try_new(value: f64) -> Result<Self, AnimationError> {
        if value > 0.0 && value <= 1.0 {
            Ok(Threshold(value))
        } else {
            Err(AnimationError::InvalidThreshold { value })
        }
    }

    pub fn get(self) -> f64 {
        self.0
    }

    fn is_reached_by(self, fraction: f64) -> bool {
        fraction >= self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Threshold(config::DEFAULT_REVEAL_THRESHOLD)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Hidden,
    Visible,
}

impl Visibility {
    pub fn is_visible(self) -> bool {
        self == Visibility::Visible
    }
}

enum Latch<S> {
    /// Nothing to observe; stays hidden for good.
    Unbound,
    Observing(S),
    Visible,
    Released(Visibility),
}

impl<S> Latch<S> {
    fn visibility(&self) -> Visibility {
        match self {
            Latch::Visible => Visibility::Visible,
            Latch::Released(visibility) => *visibility,
            Latch::Unbound | Latch::Observing(_) => Visibility::Hidden,
        }
    }
}

struct TrackerCore<S> {
    threshold: Threshold,
    latch: Latch<S>,
    on_visible: Option<Box<dyn FnOnce()>>,
}

impl<S: Subscription> TrackerCore<S> {
    fn on_intersection(core: &Rc<RefCell<Self>>, fraction: f64) {
        let (subscription, trigger) = {
            let mut this = core.borrow_mut();
            if !this.threshold.is_reached_by(fraction) {
                return;
            }
            // Close the latch and pull the subscription out in one borrow.
            let subscription = match std::mem::replace(&mut this.latch, Latch::Visible) {
                Latch::Observing(subscription) => subscription,
                other => {
                    this.latch = other;
                    return;
                }
            };
            (subscription, this.on_visible.take())
        };

        subscription.cancel();
        debug!("region became visible at fraction {fraction:.3}");
        if let Some(trigger) = trigger {
            trigger();
        }
    }
}

/// One-shot "has this region been seen" latch over an [`IntersectionSource`].
///
/// Dropping the tracker releases its subscription.
pub struct VisibilityTracker<S: Subscription> {
    core: Rc<RefCell<TrackerCore<S>>>,
}

impl<S: Subscription + 'static> VisibilityTracker<S> {
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn create<I>(source: &I, region: Option<&I::Region>, threshold: Threshold) -> Self
    where
        I: IntersectionSource<Subscription = S>,
    {
        Self::with_trigger(source, region, threshold, || ())
    }

    /// Like [`create`](Self::create), running `on_visible` once when the
    /// latch closes.
    pub fn with_trigger<I, F>(
        source: &I,
        region: Option<&I::Region>,
        threshold: Threshold,
        on_visible: F,
    ) -> Self
    where
        I: IntersectionSource<Subscription = S>,
        F: FnOnce() + 'static,
    {
        let core = Rc::new(RefCell::new(TrackerCore {
            threshold,
            latch: Latch::Unbound,
            on_visible: Some(Box::new(on_visible)),
        }));

        let Some(region) = region else {
            debug!("no region to observe, tracker stays hidden");
            return Self { core };
        };

        let weak = Rc::downgrade(&core);
        let subscription = source.observe(
            region,
            threshold,
            Box::new(move |fraction| {
                if let Some(core) = weak.upgrade() {
                    TrackerCore::on_intersection(&core, fraction);
                }
            }),
        );

        match subscription {
            Some(subscription) => core.borrow_mut().latch = Latch::Observing(subscription),
            None => debug!("region rejected by intersection source, tracker stays hidden"),
        }
        Self { core }
    }
}

impl<S: Subscription> VisibilityTracker<S> {
    pub fn visibility(&self) -> Visibility {
        self.core.borrow().latch.visibility()
    }

    pub fn threshold(&self) -> Threshold {
        self.core.borrow().threshold
    }

    pub fn is_observing(&self) -> bool {
        matches!(self.core.borrow().latch, Latch::Observing(_))
    }

    /// Releases the observation. The last visibility is kept; the tracker
    /// can never transition again.
    pub fn destroy(&self) {
        let previous = {
            let mut this = self.core.borrow_mut();
            if let Latch::Released(_) = this.latch {
                return;
            }
            let visibility = this.latch.visibility();
            this.on_visible = None;
            std::mem::replace(&mut this.latch, Latch::Released(visibility))
        };
        if let Latch::Observing(subscription) = previous {
            debug!("tracker destroyed before its region became visible");
            subscription.cancel();
        }
    }
}

impl<S: Subscription> Drop for VisibilityTracker<S> {
    fn drop(&mut self) {
        self.destroy();
    }
}

impl<S: Subscription> fmt::Debug for VisibilityTracker<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VisibilityTracker")
            .field("threshold", &self.threshold())
            .field("visibility", &self.visibility())
            .field("observing", &self.is_observing())
            .finish()
    }
}
