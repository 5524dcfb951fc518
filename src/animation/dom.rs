//! Browser implementations of the host services.

use gloo_timers::callback::Interval;
use log::warn;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Date};
use web_sys::{
    Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Performance,
};

use super::host::{Clock, IntersectionSource, ScheduledTask, Scheduler, Subscription};
use super::{Threshold, TimedCounter};

pub type DomCounter = TimedCounter<DomSubscription, DomTask, BrowserClock>;

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Viewport intersections reported by `IntersectionObserver`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomViewport;

pub struct DomSubscription {
    observer: IntersectionObserver,
    element: Element,
    callback: ObserverCallback,
}

impl IntersectionSource for DomViewport {
    type Region = Element;
    type Subscription = DomSubscription;

    fn observe(
        &self,
        region: &Element,
        threshold: Threshold,
        mut on_change: Box<dyn FnMut(f64)>,
    ) -> Option<DomSubscription> {
        if !region.is_connected() {
            return None;
        }

        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    let fraction = if entry.is_intersecting() {
                        entry.intersection_ratio()
                    } else {
                        0.0
                    };
                    on_change(fraction);
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold.get()));
        let observer = match IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        ) {
            Ok(observer) => observer,
            Err(err) => {
                warn!("IntersectionObserver unavailable: {:?}", err);
                return None;
            }
        };
        observer.observe(region);

        Some(DomSubscription {
            observer,
            element: region.clone(),
            callback,
        })
    }
}

impl Subscription for DomSubscription {
    fn cancel(self) {
        self.observer.unobserve(&self.element);
        self.observer.disconnect();
        // Usually called from inside the observer callback, which must not
        // free itself while running.
        release_later(self.callback);
    }
}

/// Repeating timers backed by `setInterval`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomScheduler;

pub struct DomTask(Interval);

impl Scheduler for DomScheduler {
    type Task = DomTask;

    fn schedule(&self, interval_ms: u32, mut tick: Box<dyn FnMut()>) -> DomTask {
        DomTask(Interval::new(interval_ms, move || tick()))
    }
}

impl ScheduledTask for DomTask {
    fn cancel(self) {
        let callback = self.0.cancel();
        release_later(callback);
    }
}

/// `performance.now()`, which ignores wall-clock adjustments. Falls back to
/// `Date.now()` where the Performance API is missing.
#[derive(Debug, Clone)]
pub struct BrowserClock {
    performance: Option<Performance>,
}

impl BrowserClock {
    pub fn new() -> Self {
        let performance = web_sys::window().and_then(|window| window.performance());
        if performance.is_none() {
            warn!("performance API unavailable, counters pace against the wall clock");
        }
        Self { performance }
    }
}

impl Clock for BrowserClock {
    fn now_ms(&self) -> f64 {
        match &self.performance {
            Some(performance) => performance.now(),
            None => Date::now(),
        }
    }
}

fn release_later<T: 'static>(resource: T) {
    wasm_bindgen_futures::spawn_local(async move {
        drop(resource);
    });
}
