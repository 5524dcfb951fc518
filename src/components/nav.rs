use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;
use crate::content::{Section, BRAND, BRAND_ACCENT, NAV_LINKS};

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = scroll_y > config::NAV_SCROLLED_OFFSET_PX;

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Anchor links keep their default jump; only the menu closes.
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let links = |class: &'static str| -> Html {
        NAV_LINKS
            .iter()
            .map(|link| {
                html! {
                    <a key={link.section.id()} href={link.section.href()} class={class} onclick={close_menu.clone()}>
                        {link.label}
                    </a>
                }
            })
            .collect()
    };

    html! {
        <nav class={classes!("top-nav", is_scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <a href="#" class="nav-logo">
                    <span class="nav-logo-heart">{"♥"}</span>
                    {BRAND}{" "}<span class="accent">{BRAND_ACCENT}</span>
                </a>

                <div class="nav-right">
                    {links("nav-link")}
                    <a href={Section::Contact.href()} class="nav-cta">{"Book Consultation"}</a>
                </div>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
            </div>

            <div class={classes!("mobile-menu", (*menu_open).then(|| "mobile-menu-open"))}>
                {links("mobile-link")}
                <a href={Section::Contact.href()} class="nav-cta mobile-cta" onclick={close_menu.clone()}>
                    {"Book Consultation"}
                </a>
            </div>
        </nav>
    }
}
