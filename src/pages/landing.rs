use yew::prelude::*;

use crate::animation::use_in_view;
use crate::components::contact_form::ContactForm;
use crate::components::counter::Counter;
use crate::components::faq::FaqItem;
use crate::components::footer::Footer;
use crate::config::{ABOUT_REVEAL_THRESHOLD, SECTION_REVEAL_THRESHOLD};
use crate::content::{
    Section, CONTACT_DETAILS, FAQS, GALLERY, PRICING, PROCESS, SERVICES, STATS, TESTIMONIALS,
};
use crate::pages::styles::LANDING_STYLES;

fn stagger(index: usize, step_ms: usize) -> String {
    format!("animation-delay: {}ms;", index * step_ms)
}

#[derive(Properties, PartialEq)]
struct SectionHeadingProps {
    eyebrow: &'static str,
    title: &'static str,
    accent: &'static str,
    #[prop_or_default]
    lead: Option<&'static str>,
}

#[function_component(SectionHeading)]
fn section_heading(props: &SectionHeadingProps) -> Html {
    html! {
        <div class="section-heading">
            <span class="eyebrow">{props.eyebrow}</span>
            <h2>{props.title}{" "}<span class="accent">{props.accent}</span></h2>
            { for props.lead.map(|lead| html! { <p class="lead">{lead}</p> }) }
        </div>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let hero = use_in_view(SECTION_REVEAL_THRESHOLD);
    let about = use_in_view(ABOUT_REVEAL_THRESHOLD);
    let services = use_in_view(SECTION_REVEAL_THRESHOLD);
    let gallery = use_in_view(SECTION_REVEAL_THRESHOLD);
    let process = use_in_view(SECTION_REVEAL_THRESHOLD);
    let testimonials = use_in_view(SECTION_REVEAL_THRESHOLD);
    let pricing = use_in_view(SECTION_REVEAL_THRESHOLD);
    let faq_section = use_in_view(SECTION_REVEAL_THRESHOLD);
    let contact = use_in_view(SECTION_REVEAL_THRESHOLD);

    html! {
        <div class="landing-page">
            <style>{LANDING_STYLES}</style>

            // Hero Section
            <section ref={hero.node.clone()} class="hero">
                <div class="blob blob-gold"></div>
                <div class="blob blob-blush"></div>
                <div class="blob blob-sage"></div>
                <div class="hero-content">
                    <div class={hero.reveal_class("animate-fade-in-up")}>
                        <div class="hero-badge">{"✦ Luxury Wedding & Event Planning"}</div>
                    </div>
                    <h1 class={classes!(hero.reveal_class("animate-fade-in-up"), hero.is_visible().then(|| "delay-200"))}>
                        {"Your Perfect Day,"}<br />
                        <span class="accent">{"Perfectly Planned"}</span>
                    </h1>
                    <p class={classes!("hero-subtitle", hero.reveal_class("animate-fade-in-up"), hero.is_visible().then(|| "delay-300"))}>
                        {"From intimate ceremonies to grand celebrations, we craft unforgettable experiences tailored to your unique vision."}
                    </p>
                    <div class={classes!("hero-actions", hero.reveal_class("animate-fade-in-up"), hero.is_visible().then(|| "delay-400"))}>
                        <a href={Section::Contact.href()} class="button-primary">{"Start Planning →"}</a>
                        <a href={Section::Services.href()} class="button-outline">{"Our Services"}</a>
                    </div>
                </div>
            </section>

            // About Section
            <section id={Section::About.id()} ref={about.node.clone()} class="section section-white">
                <div class="container about-grid">
                    <div class={about.reveal_class("animate-fade-in-up")}>
                        <span class="eyebrow">{"About Us"}</span>
                        <h2>{"Crafting Dreams Into "}<span class="accent">{"Reality"}</span></h2>
                        <p class="lead-left">
                            {"With over 15 years of experience, EverAfter Events has been the trusted partner for couples and organizations seeking flawless, memorable celebrations. Our dedicated team of planners, designers, and coordinators brings passion and precision to every detail."}
                        </p>
                        <p class="lead-left">
                            {"We believe every event tells a story. Our mission is to ensure yours is told beautifully, from the first consultation to the last dance."}
                        </p>
                    </div>
                    <div class={classes!("stats-grid", about.reveal_class("animate-scale-in"))}>
                        { for STATS.iter().map(|stat| html! {
                            <div key={stat.label} class="stat-card">
                                <div class="icon-circle">{stat.icon}</div>
                                <span class="stat-number">
                                    <Counter end={stat.number} suffix={stat.suffix} />
                                </span>
                                <span class="stat-label">{stat.label}</span>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            // Services Section
            <section id={Section::Services.id()} ref={services.node.clone()} class="section section-blush">
                <div class="container">
                    <SectionHeading
                        eyebrow="What We Offer"
                        title="Our"
                        accent="Services"
                        lead={Some("Comprehensive event planning services designed to make your special moments truly extraordinary.")}
                    />
                    <div class={classes!("card-grid", services.reveal_class("animate-fade-in"))}>
                        { for SERVICES.iter().enumerate().map(|(i, service)| html! {
                            <div key={service.title} class="service-card" style={stagger(i, 100)}>
                                <div class="icon-square">{service.icon}</div>
                                <h3>{service.title}</h3>
                                <p>{service.description}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            // Gallery Section
            <section id={Section::Gallery.id()} ref={gallery.node.clone()} class="section section-white">
                <div class="container">
                    <SectionHeading
                        eyebrow="Our Portfolio"
                        title="Event"
                        accent="Gallery"
                        lead={Some("A glimpse into the beautiful celebrations we have had the honor of creating.")}
                    />
                    <div class={classes!("card-grid", gallery.reveal_class("animate-scale-in"))}>
                        { for GALLERY.iter().enumerate().map(|(i, item)| html! {
                            <div key={item.label} class="gallery-tile" style={stagger(i, 100)}>
                                <div class="gallery-fill" style={format!("background: {};", item.gradient)}></div>
                                <div class="gallery-shade"></div>
                                <div class="gallery-title">{item.label}</div>
                                <div class="gallery-chip"><span>{item.label}</span></div>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            // Process Section
            <section id={Section::Process.id()} ref={process.node.clone()} class="section section-sage">
                <div class="container narrow">
                    <SectionHeading
                        eyebrow="How It Works"
                        title="Our"
                        accent="Process"
                        lead={Some("A seamless journey from your first inquiry to your picture-perfect celebration.")}
                    />
                    <div class={classes!("process-list", process.reveal_class("animate-fade-in"))}>
                        { for PROCESS.iter().enumerate().map(|(i, item)| html! {
                            <div key={item.step} class="process-step">
                                { if i + 1 < PROCESS.len() { html! { <div class="process-line"></div> } } else { html! {} } }
                                <div class="process-icon">{item.icon}</div>
                                <div class="process-body">
                                    <span class="process-index">{format!("Step {}", item.step)}</span>
                                    <h3>{item.title}</h3>
                                    <p>{item.description}</p>
                                </div>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            // Testimonials Section
            <section ref={testimonials.node.clone()} class="section section-white">
                <div class="container">
                    <SectionHeading eyebrow="Testimonials" title="What Our" accent="Couples Say" />
                    <div class={classes!("card-grid", "three", testimonials.reveal_class("animate-fade-in-up"))}>
                        { for TESTIMONIALS.iter().enumerate().map(|(i, testimonial)| html! {
                            <div key={testimonial.name} class="testimonial-card" style={stagger(i, 150)}>
                                <div class="stars">{testimonial.stars()}</div>
                                <p class="quote">{format!("“{}”", testimonial.text)}</p>
                                <div class="testimonial-author">
                                    <div class="icon-circle small">{"♥"}</div>
                                    <div>
                                        <p class="author-name">{testimonial.name}</p>
                                        <p class="author-event">{testimonial.event}</p>
                                    </div>
                                </div>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            // Pricing Section
            <section id={Section::Pricing.id()} ref={pricing.node.clone()} class="section section-blush">
                <div class="container">
                    <SectionHeading
                        eyebrow="Pricing"
                        title="Investment"
                        accent="Packages"
                        lead={Some("Transparent pricing for every scope and style. Custom packages available upon request.")}
                    />
                    <div class={classes!("card-grid", "three", pricing.reveal_class("animate-scale-in"))}>
                        { for PRICING.iter().enumerate().map(|(i, tier)| html! {
                            <div key={tier.name} class={classes!("pricing-card", tier.popular.then(|| "popular"))} style={stagger(i, 150)}>
                                { if tier.popular { html! { <div class="popular-badge">{"Most Popular"}</div> } } else { html! {} } }
                                <div class="icon-square">{tier.icon}</div>
                                <h3>{tier.name}</h3>
                                <p class="tier-description">{tier.description}</p>
                                <div class="tier-price">{tier.price}</div>
                                <ul class="tier-features">
                                    { for tier.features.iter().map(|feature| html! {
                                        <li key={*feature}><span class="check">{"✓"}</span>{*feature}</li>
                                    }) }
                                </ul>
                                <a href={Section::Contact.href()} class={if tier.popular { "button-primary block" } else { "button-outline block" }}>
                                    {"Get Started"}
                                </a>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            // FAQ Section
            <section ref={faq_section.node.clone()} class="section section-white">
                <div class="container faq-container">
                    <SectionHeading eyebrow="FAQ" title="Common" accent="Questions" />
                    <div class={faq_section.reveal_class("animate-fade-in-up")}>
                        { for FAQS.iter().map(|faq| html! {
                            <FaqItem key={faq.question} question={faq.question.to_string()} answer={faq.answer.to_string()} />
                        }) }
                    </div>
                </div>
            </section>

            // Contact Section
            <section id={Section::Contact.id()} ref={contact.node.clone()} class="section section-sage">
                <div class="container">
                    <SectionHeading
                        eyebrow="Get In Touch"
                        title="Contact"
                        accent="Us"
                        lead={Some("Ready to start planning your dream event? Reach out and let us bring your vision to life.")}
                    />
                    <div class={classes!("contact-grid", contact.reveal_class("animate-fade-in-up"))}>
                        <div class="contact-details">
                            { for CONTACT_DETAILS.iter().map(|detail| html! {
                                <div key={detail.title} class="contact-detail">
                                    <div class="icon-square light">{detail.icon}</div>
                                    <div>
                                        <h3>{detail.title}</h3>
                                        { for detail.lines.iter().map(|line| html! { <p>{*line}</p> }) }
                                    </div>
                                </div>
                            }) }
                        </div>
                        <ContactForm />
                    </div>
                </div>
            </section>

            <Footer />
        </div>
    }
}
