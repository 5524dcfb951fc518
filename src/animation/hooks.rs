use web_sys::Element;
use yew::prelude::*;

use super::dom::DomViewport;
use super::{Threshold, Visibility, VisibilityTracker};

#[derive(Clone, PartialEq)]
pub struct InView {
    pub node: NodeRef,
    pub visibility: Visibility,
}

impl InView {
    pub fn is_visible(&self) -> bool {
        self.visibility.is_visible()
    }

    /// `animation` once revealed, fully transparent before.
    pub fn reveal_class(&self, animation: &'static str) -> &'static str {
        if self.is_visible() {
            animation
        } else {
            "opacity-0"
        }
    }
}

/// Reveals the element behind `node` once `threshold` of it has been on
/// screen. Attach the returned `node` with `ref={...}`.
#[hook]
pub fn use_in_view(threshold: f64) -> InView {
    let node = use_node_ref();
    let visibility = use_state_eq(Visibility::default);

    {
        let node = node.clone();
        let visibility = visibility.clone();
        use_effect_with_deps(
            move |threshold| {
                let element = node.cast::<Element>();
                let tracker = VisibilityTracker::with_trigger(
                    &DomViewport,
                    element.as_ref(),
                    Threshold::new(*threshold),
                    move || visibility.set(Visibility::Visible),
                );
                move || tracker.destroy()
            },
            threshold,
        );
    }

    InView {
        node,
        visibility: *visibility,
    }
}
