use chrono::Datelike;
use yew::prelude::*;

use crate::content::{
    Section, ADDRESS, BRAND, BRAND_ACCENT, EMAIL, FOUNDED, NAV_LINKS, PHONE, SERVICES, SOCIAL_LINKS,
};

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div>
                    <div class="footer-brand">
                        <span class="nav-logo-heart">{"♥"}</span>
                        {BRAND}{" "}<span class="accent">{BRAND_ACCENT}</span>
                    </div>
                    <p class="footer-blurb">
                        {format!("Creating unforgettable celebrations with elegance, precision, and heart since {}.", FOUNDED)}
                    </p>
                    <div class="social-links">
                        { for SOCIAL_LINKS.iter().map(|social| html! {
                            <a key={social.label} href="#" aria-label={social.label} class="social-link">
                                {social.glyph}
                            </a>
                        }) }
                    </div>
                </div>

                <div>
                    <h4>{"Quick Links"}</h4>
                    <ul>
                        { for NAV_LINKS.iter().map(|link| html! {
                            <li key={link.section.id()}><a href={link.section.href()}>{link.label}</a></li>
                        }) }
                    </ul>
                </div>

                <div>
                    <h4>{"Services"}</h4>
                    <ul>
                        { for SERVICES.iter().map(|service| html! {
                            <li key={service.title}><a href={Section::Services.href()}>{service.title}</a></li>
                        }) }
                    </ul>
                </div>

                <div>
                    <h4>{"Contact"}</h4>
                    <ul class="footer-contact">
                        <li>{"☏ "}{PHONE}</li>
                        <li>{"✉ "}{EMAIL}</li>
                        <li>{"⌂ "}{ADDRESS}</li>
                    </ul>
                </div>
            </div>

            <div class="footer-bottom">
                {format!("© {} {} {}. All rights reserved.", year, BRAND, BRAND_ACCENT)}
            </div>
        </footer>
    }
}
