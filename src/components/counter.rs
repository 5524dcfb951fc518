use web_sys::Element;
use yew::prelude::*;

use crate::animation::dom::{BrowserClock, DomCounter, DomScheduler, DomViewport};
use crate::animation::{CounterSettings, Threshold, TimedCounter};
use crate::config;

#[derive(Properties, PartialEq)]
pub struct CounterProps {
    pub end: u32,
    #[prop_or_default]
    pub suffix: &'static str,
    #[prop_or(config::COUNTER_DURATION_MS)]
    pub duration_ms: u32,
}

/// Counts up to `end` the first time it scrolls into view.
#[function_component(Counter)]
pub fn counter(props: &CounterProps) -> Html {
    let node = use_node_ref();
    let count = use_state_eq(|| 0u32);

    {
        let node = node.clone();
        let count = count.clone();
        use_effect_with_deps(
            move |(end, duration_ms)| {
                let settings = CounterSettings::new(*end, *duration_ms)
                    .with_threshold(Threshold::new(config::COUNTER_THRESHOLD));
                let region = node.cast::<Element>();
                let counter: DomCounter = TimedCounter::create(
                    &DomViewport,
                    DomScheduler,
                    BrowserClock::new(),
                    region.as_ref(),
                    settings,
                    move |value| count.set(value),
                );
                move || counter.destroy()
            },
            (props.end, props.duration_ms),
        );
    }

    html! {
        <span ref={node} class="counter">
            {count.to_string()}
            {props.suffix}
        </span>
    }
}
