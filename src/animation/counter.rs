use std::cell::RefCell;
use std::rc::Rc;

use log::debug;

use super::host::{Clock, IntersectionSource, ScheduledTask, Scheduler, Subscription};
use super::{AnimationError, Threshold, Visibility, VisibilityTracker};
use crate::config;

/// How each tick turns time into a displayed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pacing {
    /// `target * elapsed / duration`, read from the clock on every tick.
    /// Late ticks catch up instead of stretching the animation.
    #[default]
    Elapsed,
    /// Adds `target / (duration / tick)` per tick regardless of the clock.
    /// Selected through `config::COUNTER_PACING`.
    #[cfg_attr(not(test), allow(dead_code))]
    FixedStep,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterSettings {
    pub target: u32,
    pub duration_ms: u32,
    pub tick_ms: u32,
    pub threshold: Threshold,
    pub pacing: Pacing,
}

impl CounterSettings {
    pub fn new(target: u32, duration_ms: u32) -> Self {
        Self {
            target,
            duration_ms,
            tick_ms: config::COUNTER_TICK_MS,
            threshold: Threshold::new(config::COUNTER_THRESHOLD),
            pacing: config::COUNTER_PACING,
        }
    }

    pub fn with_threshold(mut self, threshold: Threshold) -> Self {
        self.threshold = threshold;
        self
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn with_pacing(mut self, pacing: Pacing) -> Self {
        self.pacing = pacing;
        self
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn with_tick_ms(mut self, tick_ms: u32) -> Self {
        self.tick_ms = tick_ms;
        self
    }

    /// Degenerate settings still animate (they settle at once); this only
    /// reports them.
    pub fn validate(&self) -> Result<(), AnimationError> {
        if self.duration_ms == 0 {
            return Err(AnimationError::DegenerateDuration);
        }
        if self.tick_ms == 0 {
            return Err(AnimationError::DegenerateTick);
        }
        Ok(())
    }

    fn settles_immediately(&self) -> bool {
        self.target == 0 || self.validate().is_err()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Running(u32),
    Settled(u32),
}

impl Step {
    pub fn value(self) -> u32 {
        match self {
            Step::Running(value) | Step::Settled(value) => value,
        }
    }
}

/// Interpolation state of a single count-up run, independent of any timer.
#[derive(Debug, Clone)]
pub struct Progress {
    settings: CounterSettings,
    ticks: u32,
    acc: f64,
    current: u32,
    settled: bool,
}

impl Progress {
    pub fn new(settings: CounterSettings) -> Self {
        Self {
            settings,
            ticks: 0,
            acc: 0.0,
            current: 0,
            settled: false,
        }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn is_settled(&self) -> bool {
        self.settled
    }

    /// Applies one tick. `elapsed_ms` is the time since the run started and
    /// is only consulted by [`Pacing::Elapsed`].
    pub fn advance(&mut self, elapsed_ms: f64) -> Step {
        if self.settled {
            return Step::Settled(self.current);
        }
        self.ticks = self.ticks.saturating_add(1);
        if self.settings.settles_immediately() {
            return self.settle();
        }

        let target = f64::from(self.settings.target);
        let duration = f64::from(self.settings.duration_ms);
        let finished = match self.settings.pacing {
            Pacing::FixedStep => {
                let steps = duration / f64::from(self.settings.tick_ms);
                self.acc += target / steps;
                let fixed_elapsed =
                    u64::from(self.ticks) * u64::from(self.settings.tick_ms);
                self.acc >= target || fixed_elapsed >= u64::from(self.settings.duration_ms)
            }
            Pacing::Elapsed => {
                // `max` also maps NaN to zero.
                let elapsed = elapsed_ms.max(0.0);
                self.acc = target * elapsed / duration;
                elapsed >= duration || self.acc >= target
            }
        };
        if finished {
            return self.settle();
        }

        let floored = (self.acc.floor() as u32).min(self.settings.target);
        self.current = self.current.max(floored);
        Step::Running(self.current)
    }

    pub fn settle(&mut self) -> Step {
        self.settled = true;
        self.current = self.settings.target;
        Step::Settled(self.current)
    }
}

#[cfg_attr(not(test), allow(dead_code))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterPhase {
    Idle,
    Animating,
    Settled,
    Cancelled,
}

enum Run<T> {
    Idle,
    /// The task slot is empty only while the timer is being created.
    Animating(Option<T>),
    Settled,
    Cancelled,
}

#[cfg_attr(not(test), allow(dead_code))]
impl<T> Run<T> {
    fn phase(&self) -> CounterPhase {
        match self {
            Run::Idle => CounterPhase::Idle,
            Run::Animating(_) => CounterPhase::Animating,
            Run::Settled => CounterPhase::Settled,
            Run::Cancelled => CounterPhase::Cancelled,
        }
    }
}

type Listener = Rc<dyn Fn(u32)>;

struct CounterCore<T, C> {
    progress: Progress,
    run: Run<T>,
    clock: C,
    started_at: f64,
    listener: Option<Listener>,
}

impl<T: ScheduledTask + 'static, C: Clock + 'static> CounterCore<T, C> {
    fn start<K>(core: &Rc<RefCell<Self>>, scheduler: &K)
    where
        K: Scheduler<Task = T>,
    {
        let tick_ms = {
            let mut this = core.borrow_mut();
            if !matches!(this.run, Run::Idle) {
                return;
            }
            if this.progress.settings.settles_immediately() {
                let value = this.progress.settle().value();
                this.run = Run::Settled;
                let listener = this.listener.clone();
                drop(this);
                debug!("counter settled at {value} without animating");
                notify(listener, value);
                return;
            }
            this.started_at = this.clock.now_ms();
            this.run = Run::Animating(None);
            this.progress.settings.tick_ms
        };

        let weak = Rc::downgrade(core);
        let task = scheduler.schedule(
            tick_ms,
            Box::new(move || {
                if let Some(core) = weak.upgrade() {
                    Self::tick(&core);
                }
            }),
        );

        let mut this = core.borrow_mut();
        if let Run::Animating(slot) = &mut this.run {
            if slot.is_none() {
                *slot = Some(task);
                return;
            }
        }
        drop(this);
        task.cancel();
    }

    fn tick(core: &Rc<RefCell<Self>>) {
        let mut this = core.borrow_mut();
        if !matches!(this.run, Run::Animating(_)) {
            return;
        }
        let before = this.progress.current();
        let elapsed = this.clock.now_ms() - this.started_at;
        let step = this.progress.advance(elapsed);

        let finished = match step {
            Step::Settled(_) => Some(std::mem::replace(&mut this.run, Run::Settled)),
            Step::Running(_) => None,
        };
        let listener = this.listener.clone();
        let ticks = this.progress.ticks();
        drop(this);

        if let Some(Run::Animating(Some(task))) = finished {
            task.cancel();
        }
        if let Step::Settled(value) = step {
            debug!("counter settled at {value} after {ticks} ticks");
        }
        if step.value() != before {
            notify(listener, step.value());
        }
    }
}

fn notify(listener: Option<Listener>, value: u32) {
    if let Some(listener) = listener {
        listener(value);
    }
}

/// Counts from zero to a target once its region has been revealed.
///
/// The counter never restarts; a fresh instance is needed for another run.
/// Dropping it cancels both the observation and any running timer.
pub struct TimedCounter<S, T, C>
where
    S: Subscription,
    T: ScheduledTask,
{
    core: Rc<RefCell<CounterCore<T, C>>>,
    tracker: VisibilityTracker<S>,
}

impl<S, T, C> TimedCounter<S, T, C>
where
    S: Subscription + 'static,
    T: ScheduledTask + 'static,
    C: Clock + 'static,
{
    pub fn create<I, K, F>(
        source: &I,
        scheduler: K,
        clock: C,
        region: Option<&I::Region>,
        settings: CounterSettings,
        on_change: F,
    ) -> Self
    where
        I: IntersectionSource<Subscription = S>,
        K: Scheduler<Task = T> + 'static,
        F: Fn(u32) + 'static,
    {
        if let Err(err) = settings.validate() {
            debug!("{err}, counter will jump straight to {}", settings.target);
        }
        let core = Rc::new(RefCell::new(CounterCore {
            progress: Progress::new(settings),
            run: Run::Idle,
            clock,
            started_at: 0.0,
            listener: Some(Rc::new(on_change)),
        }));

        let weak = Rc::downgrade(&core);
        let tracker = VisibilityTracker::with_trigger(source, region, settings.threshold, move || {
            if let Some(core) = weak.upgrade() {
                CounterCore::start(&core, &scheduler);
            }
        });

        Self { core, tracker }
    }
}

#[cfg_attr(not(test), allow(dead_code))]
impl<S, T, C> TimedCounter<S, T, C>
where
    S: Subscription,
    T: ScheduledTask,
{
    pub fn value(&self) -> u32 {
        self.core.borrow().progress.current()
    }

    pub fn target(&self) -> u32 {
        self.core.borrow().progress.settings.target
    }

    pub fn phase(&self) -> CounterPhase {
        self.core.borrow().run.phase()
    }

    pub fn visibility(&self) -> Visibility {
        self.tracker.visibility()
    }
}

impl<S, T, C> TimedCounter<S, T, C>
where
    S: Subscription,
    T: ScheduledTask,
{
    /// Stops observation and any running timer. A settled counter keeps its
    /// value; an idle or animating one becomes cancelled.
    pub fn destroy(&self) {
        self.tracker.destroy();
        let previous = {
            let mut this = self.core.borrow_mut();
            this.listener = None;
            if matches!(this.run, Run::Settled | Run::Cancelled) {
                return;
            }
            std::mem::replace(&mut this.run, Run::Cancelled)
        };
        if let Run::Animating(Some(task)) = previous {
            debug!("counter cancelled mid-animation");
            task.cancel();
        }
    }
}

impl<S, T, C> Drop for TimedCounter<S, T, C>
where
    S: Subscription,
    T: ScheduledTask,
{
    fn drop(&mut self) {
        self.destroy();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::testing::{ManualTimers, RegionId, SimSubscription, SimulatedViewport, TimerTask};
    use proptest::prelude::*;
    use std::cell::RefCell;

    type TestCounter = TimedCounter<SimSubscription, TimerTask, ManualTimers>;

    struct Harness {
        viewport: SimulatedViewport,
        timers: ManualTimers,
        region: RegionId,
        seen: Rc<RefCell<Vec<u32>>>,
    }

    impl Harness {
        fn new() -> Self {
            let viewport = SimulatedViewport::new();
            let region = viewport.mount();
            Self {
                viewport,
                timers: ManualTimers::new(),
                region,
                seen: Rc::new(RefCell::new(Vec::new())),
            }
        }

        fn counter(&self, settings: CounterSettings) -> TestCounter {
            let seen = self.seen.clone();
            TimedCounter::create(
                &self.viewport,
                self.timers.clone(),
                self.timers.clone(),
                Some(&self.region),
                settings,
                move |value| seen.borrow_mut().push(value),
            )
        }

        fn reveal(&self) {
            self.viewport.report(self.region, 1.0);
        }
    }

    fn settings(target: u32, duration_ms: u32) -> CounterSettings {
        CounterSettings::new(target, duration_ms).with_tick_ms(16)
    }

    #[test]
    fn fixed_step_matches_reference_sequence() {
        let mut progress = Progress::new(settings(98, 2000).with_pacing(Pacing::FixedStep));

        assert_eq!(progress.advance(0.0), Step::Running(0));
        let mut last = Step::Running(0);
        while !progress.is_settled() {
            last = progress.advance(0.0);
        }

        assert_eq!(last, Step::Settled(98));
        assert_eq!(progress.ticks(), 125);
    }

    #[test]
    fn elapsed_pacing_matches_reference_sequence() {
        let mut progress = Progress::new(settings(98, 2000));

        assert_eq!(progress.advance(16.0), Step::Running(0));
        assert_eq!(progress.advance(32.0), Step::Running(1));
        assert_eq!(progress.advance(1984.0), Step::Running(97));
        assert_eq!(progress.advance(2000.0), Step::Settled(98));
    }

    #[test]
    fn elapsed_pacing_never_goes_backwards() {
        let mut progress = Progress::new(settings(500, 2000));

        assert_eq!(progress.advance(1000.0), Step::Running(250));
        assert_eq!(progress.advance(400.0), Step::Running(250));
        assert_eq!(progress.advance(f64::NAN), Step::Running(250));
    }

    #[test]
    fn degenerate_settings_settle_on_first_tick() {
        let mut zero_target = Progress::new(settings(0, 2000));
        assert_eq!(zero_target.advance(16.0), Step::Settled(0));

        let mut zero_duration = Progress::new(settings(42, 0));
        assert_eq!(zero_duration.advance(16.0), Step::Settled(42));
    }

    #[test]
    fn validate_reports_degenerate_settings() {
        assert_eq!(settings(5, 0).validate(), Err(AnimationError::DegenerateDuration));
        assert_eq!(
            settings(5, 100).with_tick_ms(0).validate(),
            Err(AnimationError::DegenerateTick)
        );
        assert_eq!(settings(5, 100).validate(), Ok(()));
    }

    #[test]
    fn stays_at_zero_until_revealed() {
        let harness = Harness::new();
        let counter = harness.counter(settings(500, 2000));

        harness.timers.advance(5000.0);

        assert_eq!(counter.value(), 0);
        assert_eq!(counter.phase(), CounterPhase::Idle);
        assert_eq!(harness.timers.pending(), 0);
    }

    #[test]
    fn settles_exactly_on_target() {
        let harness = Harness::new();
        let counter = harness.counter(settings(500, 2000));

        harness.reveal();
        assert_eq!(counter.phase(), CounterPhase::Animating);
        harness.timers.advance(2000.0);

        assert_eq!(counter.value(), 500);
        assert_eq!(counter.phase(), CounterPhase::Settled);
        assert_eq!(harness.timers.pending(), 0);
        assert_eq!(harness.seen.borrow().last(), Some(&500));
    }

    #[test]
    fn fixed_step_counter_settles_exactly_on_target() {
        let harness = Harness::new();
        let counter = harness.counter(settings(500, 2000).with_pacing(Pacing::FixedStep));

        harness.reveal();
        harness.timers.advance(2000.0);

        assert_eq!(counter.value(), 500);
        assert_eq!(harness.timers.fired(), 125);
    }

    #[test]
    fn reference_example_ticks() {
        let harness = Harness::new();
        let counter = harness.counter(settings(98, 2000));

        harness.reveal();
        harness.timers.advance(16.0);
        assert_eq!(counter.value(), 0);

        harness.timers.advance(124.0 * 16.0);
        assert_eq!(counter.value(), 98);
        assert_eq!(harness.timers.fired(), 125);

        harness.timers.advance(1000.0);
        assert_eq!(harness.timers.fired(), 125);
    }

    #[test]
    fn zero_target_settles_without_ticking() {
        let harness = Harness::new();
        let counter = harness.counter(settings(0, 2000));

        harness.reveal();

        assert_eq!(counter.phase(), CounterPhase::Settled);
        assert_eq!(counter.value(), 0);
        assert_eq!(harness.timers.pending(), 0);
        assert_eq!(harness.timers.scheduled(), 0);
    }

    #[test]
    fn destroy_mid_animation_freezes_value() {
        let harness = Harness::new();
        let counter = harness.counter(settings(500, 2000));

        harness.reveal();
        harness.timers.advance(10.0 * 16.0);
        let frozen = counter.value();
        assert_eq!(frozen, 40);
        let emitted = harness.seen.borrow().len();

        counter.destroy();
        harness.timers.advance(5000.0);

        assert_eq!(counter.value(), frozen);
        assert_eq!(counter.phase(), CounterPhase::Cancelled);
        assert_eq!(harness.timers.pending(), 0);
        assert_eq!(harness.seen.borrow().len(), emitted);
    }

    #[test]
    fn destroy_before_reveal_never_animates() {
        let harness = Harness::new();
        let counter = harness.counter(settings(15, 2000));

        counter.destroy();
        harness.reveal();
        harness.timers.advance(3000.0);

        assert_eq!(counter.value(), 0);
        assert_eq!(counter.phase(), CounterPhase::Cancelled);
        assert_eq!(harness.viewport.active_subscriptions(), 0);
        assert_eq!(harness.timers.scheduled(), 0);
    }

    #[test]
    fn dropping_counter_stops_timer() {
        let harness = Harness::new();
        let counter = harness.counter(settings(500, 2000));

        harness.reveal();
        harness.timers.advance(160.0);
        drop(counter);
        let emitted = harness.seen.borrow().len();
        harness.timers.advance(5000.0);

        assert_eq!(harness.timers.pending(), 0);
        assert_eq!(harness.seen.borrow().len(), emitted);
    }

    #[test]
    fn late_ticks_still_finish_on_time() {
        let harness = Harness::new();
        let counter = harness.counter(settings(500, 2000));

        harness.reveal();
        harness.timers.advance(16.0);
        harness.timers.stall(1500.0);
        harness.timers.advance(16.0);
        assert_eq!(counter.value(), 383);

        harness.timers.advance(496.0);
        assert_eq!(counter.value(), 500);
        assert_eq!(counter.phase(), CounterPhase::Settled);
    }

    #[derive(Clone, Default)]
    struct SetClock(Rc<std::cell::Cell<f64>>);

    impl Clock for SetClock {
        fn now_ms(&self) -> f64 {
            self.0.get()
        }
    }

    #[test]
    fn clock_stepping_back_neither_rewinds_nor_stalls_settling() {
        let viewport = SimulatedViewport::new();
        let timers = ManualTimers::new();
        let clock = SetClock::default();
        let region = viewport.mount();
        let counter: TimedCounter<SimSubscription, TimerTask, SetClock> = TimedCounter::create(
            &viewport,
            timers.clone(),
            clock.clone(),
            Some(&region),
            settings(500, 2000),
            |_| (),
        );

        viewport.report(region, 1.0);
        clock.0.set(1000.0);
        timers.advance(16.0);
        assert_eq!(counter.value(), 250);

        clock.0.set(-5000.0);
        timers.advance(16.0);
        assert_eq!(counter.value(), 250);
        assert_eq!(counter.phase(), CounterPhase::Animating);

        clock.0.set(2000.0);
        timers.advance(16.0);
        assert_eq!(counter.value(), 500);
        assert_eq!(counter.phase(), CounterPhase::Settled);
        assert_eq!(timers.pending(), 0);
    }

    #[test]
    fn counters_run_independently() {
        let viewport = SimulatedViewport::new();
        let timers = ManualTimers::new();
        let big_region = viewport.mount();
        let small_region = viewport.mount();
        let big: TestCounter = TimedCounter::create(
            &viewport,
            timers.clone(),
            timers.clone(),
            Some(&big_region),
            settings(500, 2000),
            |_| (),
        );
        let small: TestCounter = TimedCounter::create(
            &viewport,
            timers.clone(),
            timers.clone(),
            Some(&small_region),
            settings(15, 2000),
            |_| (),
        );

        viewport.report(big_region, 1.0);
        viewport.report(small_region, 1.0);
        timers.advance(2000.0);

        assert_eq!(big.value(), 500);
        assert_eq!(small.value(), 15);
        assert_eq!(timers.pending(), 0);
    }

    #[test]
    fn below_threshold_does_not_start() {
        let harness = Harness::new();
        let counter = harness.counter(settings(98, 2000).with_threshold(Threshold::new(0.3)));

        harness.viewport.report(harness.region, 0.2);
        harness.timers.advance(2000.0);

        assert_eq!(counter.value(), 0);
        assert_eq!(counter.visibility(), Visibility::Hidden);
    }

    proptest! {
        #[test]
        fn snapshots_stay_in_bounds(
            target in 0u32..10_000,
            duration_ms in 1u32..5_000,
            fixed in any::<bool>(),
        ) {
            let pacing = if fixed { Pacing::FixedStep } else { Pacing::Elapsed };
            let harness = Harness::new();
            let counter = harness.counter(settings(target, duration_ms).with_pacing(pacing));

            harness.reveal();
            let mut previous = 0;
            while counter.phase() != CounterPhase::Settled {
                harness.timers.advance(16.0);
                let value = counter.value();
                prop_assert!(value <= target);
                prop_assert!(value >= previous);
                previous = value;
            }

            prop_assert_eq!(counter.value(), target);
            prop_assert_eq!(harness.timers.pending(), 0);
            let seen = harness.seen.borrow();
            prop_assert!(seen.windows(2).all(|pair| pair[0] <= pair[1]));
            prop_assert!(seen.iter().all(|value| *value <= target));
        }
    }
}
