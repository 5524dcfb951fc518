//! Deterministic stand-ins for the browser services.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::{Rc, Weak};

use super::host::{Clock, IntersectionSource, ScheduledTask, Scheduler, Subscription};
use super::Threshold;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegionId(u32);

struct Observer {
    id: u64,
    region: RegionId,
    callback: Option<Box<dyn FnMut(f64)>>,
}

#[derive(Default)]
struct ViewportState {
    next_region: u32,
    next_observer: u64,
    mounted: HashSet<RegionId>,
    observers: Vec<Observer>,
    deliveries: usize,
}

/// Viewport whose intersection changes are pushed by the test.
#[derive(Clone, Default)]
pub struct SimulatedViewport {
    state: Rc<RefCell<ViewportState>>,
}

impl SimulatedViewport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mount(&self) -> RegionId {
        let mut state = self.state.borrow_mut();
        let region = RegionId(state.next_region);
        state.next_region += 1;
        state.mounted.insert(region);
        region
    }

    pub fn unmount(&self, region: RegionId) {
        self.state.borrow_mut().mounted.remove(&region);
    }

    /// Delivers `fraction` to every live observer of `region`.
    pub fn report(&self, region: RegionId, fraction: f64) {
        let ids: Vec<u64> = self
            .state
            .borrow()
            .observers
            .iter()
            .filter(|observer| observer.region == region)
            .map(|observer| observer.id)
            .collect();

        for id in ids {
            let callback = {
                let mut state = self.state.borrow_mut();
                let callback = state
                    .observers
                    .iter_mut()
                    .find(|observer| observer.id == id)
                    .and_then(|observer| observer.callback.take());
                if callback.is_some() {
                    state.deliveries += 1;
                }
                callback
            };
            let Some(mut callback) = callback else {
                continue;
            };
            callback(fraction);

            // The callback may have cancelled its own subscription.
            let mut state = self.state.borrow_mut();
            if let Some(observer) = state.observers.iter_mut().find(|observer| observer.id == id) {
                observer.callback = Some(callback);
            }
        }
    }

    pub fn deliveries(&self) -> usize {
        self.state.borrow().deliveries
    }

    pub fn active_subscriptions(&self) -> usize {
        self.state.borrow().observers.len()
    }
}

pub struct SimSubscription {
    id: u64,
    state: Weak<RefCell<ViewportState>>,
}

impl Subscription for SimSubscription {
    fn cancel(self) {
        if let Some(state) = self.state.upgrade() {
            state.borrow_mut().observers.retain(|observer| observer.id != self.id);
        }
    }
}

impl IntersectionSource for SimulatedViewport {
    type Region = RegionId;
    type Subscription = SimSubscription;

    fn observe(
        &self,
        region: &RegionId,
        _threshold: Threshold,
        on_change: Box<dyn FnMut(f64)>,
    ) -> Option<SimSubscription> {
        let mut state = self.state.borrow_mut();
        if !state.mounted.contains(region) {
            return None;
        }
        let id = state.next_observer;
        state.next_observer += 1;
        state.observers.push(Observer {
            id,
            region: *region,
            callback: Some(on_change),
        });
        Some(SimSubscription {
            id,
            state: Rc::downgrade(&self.state),
        })
    }
}

struct Timer {
    id: u64,
    interval_ms: f64,
    due_at: f64,
    tick: Option<Box<dyn FnMut()>>,
}

#[derive(Default)]
struct TimerState {
    now: f64,
    next_id: u64,
    timers: Vec<Timer>,
    scheduled: usize,
    fired: usize,
}

/// Scheduler and clock sharing one manually advanced timeline.
#[derive(Clone, Default)]
pub struct ManualTimers {
    state: Rc<RefCell<TimerState>>,
}

impl ManualTimers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves time forward by `ms`, firing every timer that comes due in
    /// order.
    pub fn advance(&self, ms: f64) {
        let until = self.state.borrow().now + ms;
        loop {
            let next = {
                let state = self.state.borrow();
                state
                    .timers
                    .iter()
                    .filter(|timer| timer.due_at <= until)
                    .min_by(|a, b| a.due_at.total_cmp(&b.due_at))
                    .map(|timer| (timer.id, timer.due_at))
            };
            let Some((id, due_at)) = next else {
                break;
            };

            let tick = {
                let mut state = self.state.borrow_mut();
                state.now = due_at;
                state.fired += 1;
                let timer = state.timers.iter_mut().find(|timer| timer.id == id);
                timer.and_then(|timer| {
                    timer.due_at += timer.interval_ms;
                    timer.tick.take()
                })
            };
            let Some(mut tick) = tick else {
                continue;
            };
            tick();

            let mut state = self.state.borrow_mut();
            if let Some(timer) = state.timers.iter_mut().find(|timer| timer.id == id) {
                timer.tick = Some(tick);
            }
        }
        self.state.borrow_mut().now = until;
    }

    /// Moves the clock without firing anything, as if the main thread was
    /// blocked; pending timers slip by the same amount.
    pub fn stall(&self, ms: f64) {
        let mut state = self.state.borrow_mut();
        state.now += ms;
        for timer in &mut state.timers {
            timer.due_at += ms;
        }
    }

    pub fn pending(&self) -> usize {
        self.state.borrow().timers.len()
    }

    pub fn scheduled(&self) -> usize {
        self.state.borrow().scheduled
    }

    pub fn fired(&self) -> usize {
        self.state.borrow().fired
    }
}

pub struct TimerTask {
    id: u64,
    state: Weak<RefCell<TimerState>>,
}

impl ScheduledTask for TimerTask {
    fn cancel(self) {
        if let Some(state) = self.state.upgrade() {
            state.borrow_mut().timers.retain(|timer| timer.id != self.id);
        }
    }
}

impl Scheduler for ManualTimers {
    type Task = TimerTask;

    fn schedule(&self, interval_ms: u32, tick: Box<dyn FnMut()>) -> TimerTask {
        let mut state = self.state.borrow_mut();
        let id = state.next_id;
        state.next_id += 1;
        state.scheduled += 1;
        let interval_ms = f64::from(interval_ms);
        let due_at = state.now + interval_ms;
        state.timers.push(Timer {
            id,
            interval_ms,
            due_at,
            tick: Some(tick),
        });
        TimerTask {
            id,
            state: Rc::downgrade(&self.state),
        }
    }
}

impl Clock for ManualTimers {
    fn now_ms(&self) -> f64 {
        self.state.borrow().now
    }
}
