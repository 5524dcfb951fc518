//! Copy and listings rendered by the landing page.

pub const BRAND: &str = "EverAfter";
pub const BRAND_ACCENT: &str = "Events";
pub const FOUNDED: i32 = 2010;

/// Landing page sections that anchors can land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    About,
    Services,
    Gallery,
    Process,
    Pricing,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::About,
        Section::Services,
        Section::Gallery,
        Section::Process,
        Section::Pricing,
        Section::Contact,
    ];

    /// The `id` attribute of the rendered `<section>`.
    pub fn id(self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Services => "services",
            Section::Gallery => "gallery",
            Section::Process => "process",
            Section::Pricing => "pricing",
            Section::Contact => "contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}

pub struct NavLink {
    pub section: Section,
    pub label: &'static str,
}

pub const NAV_LINKS: [NavLink; 6] = [
    NavLink { section: Section::About, label: "About" },
    NavLink { section: Section::Services, label: "Services" },
    NavLink { section: Section::Gallery, label: "Gallery" },
    NavLink { section: Section::Process, label: "Process" },
    NavLink { section: Section::Pricing, label: "Pricing" },
    NavLink { section: Section::Contact, label: "Contact" },
];

pub struct Stat {
    pub number: u32,
    pub suffix: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

pub const STATS: [Stat; 3] = [
    Stat { number: 500, suffix: "+", label: "Weddings Planned", icon: "♥" },
    Stat { number: 15, suffix: "+", label: "Years Experience", icon: "▦" },
    Stat { number: 98, suffix: "%", label: "Client Satisfaction", icon: "★" },
];

pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const SERVICES: [Service; 6] = [
    Service {
        icon: "✎",
        title: "Full Planning",
        description: "End-to-end wedding planning from concept to execution. We handle every detail so you can enjoy the journey.",
    },
    Service {
        icon: "✿",
        title: "Partial Planning",
        description: "Already started planning? We step in wherever you need us, filling gaps and adding professional expertise.",
    },
    Service {
        icon: "◷",
        title: "Day-of Coordination",
        description: "Relax on your big day knowing our team is managing every timeline, vendor, and detail flawlessly.",
    },
    Service {
        icon: "⌖",
        title: "Destination Weddings",
        description: "Dream of saying 'I do' somewhere extraordinary? We plan stunning celebrations in breathtaking locations worldwide.",
    },
    Service {
        icon: "▥",
        title: "Corporate Events",
        description: "From galas to conferences, we bring the same elegance and precision to your professional celebrations.",
    },
    Service {
        icon: "❀",
        title: "Floral Design",
        description: "Bespoke floral arrangements that transform spaces and capture the essence of your event's aesthetic.",
    },
];

pub struct GalleryItem {
    pub label: &'static str,
    pub gradient: &'static str,
}

pub const GALLERY: [GalleryItem; 6] = [
    GalleryItem { label: "Garden Wedding", gradient: "linear-gradient(135deg, rgba(178,189,160,0.6), rgba(201,169,110,0.4))" },
    GalleryItem { label: "Beach Ceremony", gradient: "linear-gradient(135deg, rgba(244,225,225,0.6), rgba(178,189,160,0.4))" },
    GalleryItem { label: "Ballroom Reception", gradient: "linear-gradient(135deg, rgba(201,169,110,0.5), rgba(244,225,225,0.4))" },
    GalleryItem { label: "Rustic Celebration", gradient: "linear-gradient(135deg, rgba(178,189,160,0.5), rgba(240,234,214,0.6))" },
    GalleryItem { label: "Rooftop Gala", gradient: "linear-gradient(135deg, rgba(54,54,54,0.3), rgba(201,169,110,0.4))" },
    GalleryItem { label: "Vineyard Affair", gradient: "linear-gradient(135deg, rgba(178,189,160,0.4), rgba(201,169,110,0.3))" },
];

pub struct ProcessStep {
    pub step: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const PROCESS: [ProcessStep; 4] = [
    ProcessStep {
        step: "01",
        icon: "☏",
        title: "Initial Consultation",
        description: "We begin with a complimentary consultation to understand your vision, style, and budget. This is where your dream starts taking shape.",
    },
    ProcessStep {
        step: "02",
        icon: "✿",
        title: "Design & Planning",
        description: "Our team creates a detailed plan with mood boards, vendor recommendations, timelines, and a comprehensive budget breakdown.",
    },
    ProcessStep {
        step: "03",
        icon: "✎",
        title: "Coordination & Setup",
        description: "We manage all vendor communications, logistics, and rehearsals. Every element is orchestrated to perfection.",
    },
    ProcessStep {
        step: "04",
        icon: "✦",
        title: "Your Perfect Day",
        description: "Sit back and enjoy every moment. Our team handles everything behind the scenes so your celebration is flawless.",
    },
];

pub struct Testimonial {
    pub name: &'static str,
    pub event: &'static str,
    pub text: &'static str,
    pub rating: usize,
}

impl Testimonial {
    pub fn stars(&self) -> String {
        "★".repeat(self.rating)
    }
}

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Sarah & Michael",
        event: "Garden Wedding",
        text: "EverAfter Events made our dream wedding a reality. Every detail was perfect, from the flowers to the timeline. We could not have done it without them.",
        rating: 5,
    },
    Testimonial {
        name: "Jessica & David",
        event: "Destination Wedding",
        text: "Planning a destination wedding felt overwhelming until we found EverAfter. They handled everything with grace and professionalism. Truly magical.",
        rating: 5,
    },
    Testimonial {
        name: "Emily & James",
        event: "Luxury Reception",
        text: "The attention to detail was extraordinary. Our guests are still talking about how beautiful everything was. Worth every penny.",
        rating: 5,
    },
];

pub struct PricingTier {
    pub icon: &'static str,
    pub name: &'static str,
    pub price: &'static str,
    pub description: &'static str,
    pub popular: bool,
    pub features: &'static [&'static str],
}

pub const PRICING: [PricingTier; 3] = [
    PricingTier {
        icon: "✦",
        name: "Essential",
        price: "$3,500",
        description: "Day-of coordination and essential planning support",
        popular: false,
        features: &[
            "Day-of coordination (10+ hours)",
            "Vendor communication (final month)",
            "Timeline creation & management",
            "Rehearsal coordination",
            "Emergency kit on event day",
            "Setup & breakdown oversight",
        ],
    },
    PricingTier {
        icon: "♛",
        name: "Premium",
        price: "$7,500",
        description: "Comprehensive planning for a seamless experience",
        popular: true,
        features: &[
            "Everything in Essential",
            "Full vendor sourcing & booking",
            "Budget management & tracking",
            "Design concept & mood boards",
            "Monthly planning meetings",
            "Guest management assistance",
            "Accommodation coordination",
        ],
    },
    PricingTier {
        icon: "◆",
        name: "Luxury",
        price: "$15,000+",
        description: "White-glove service for the most discerning clients",
        popular: false,
        features: &[
            "Everything in Premium",
            "Unlimited planning sessions",
            "Custom floral & decor design",
            "Welcome party planning",
            "Day-after brunch coordination",
            "Honeymoon planning assistance",
            "VIP concierge services",
            "Multi-event weekend management",
        ],
    },
];

pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: [Faq; 6] = [
    Faq {
        question: "How far in advance should we book?",
        answer: "We recommend booking 12 to 18 months before your event for full planning services. For day-of coordination, 3 to 6 months is typically sufficient. However, we always try to accommodate shorter timelines when possible.",
    },
    Faq {
        question: "Do you travel for destination weddings?",
        answer: "We plan destination weddings worldwide. Travel fees vary by location and are discussed during the initial consultation. We have established vendor relationships in many popular destinations.",
    },
    Faq {
        question: "Can we customize a package?",
        answer: "Every couple is unique, and so is every celebration. Our packages serve as starting points, and we are happy to create a custom proposal tailored to your specific needs and budget.",
    },
    Faq {
        question: "What is included in the initial consultation?",
        answer: "The initial consultation is complimentary and typically lasts 60 to 90 minutes. We discuss your vision, budget, guest count, venue preferences, and any special requirements. It is a chance for us to get to know each other.",
    },
    Faq {
        question: "How many events do you take on per weekend?",
        answer: "To ensure each client receives our full attention, we limit ourselves to one event per weekend. This allows our team to be fully present and dedicated to making your day perfect.",
    },
    Faq {
        question: "What happens if there is an issue on the day of the event?",
        answer: "Our experienced team is trained to handle any situation discreetly and efficiently. We always have backup plans, an emergency kit, and strong vendor relationships that allow us to resolve issues quickly without disrupting your celebration.",
    },
];

pub struct ContactDetail {
    pub icon: &'static str,
    pub title: &'static str,
    pub lines: &'static [&'static str],
}

pub const PHONE: &str = "(555) 123-4567";
pub const EMAIL: &str = "hello@everafterevents.com";
pub const ADDRESS: &str = "123 Bridal Lane, Suite 200, New York, NY 10001";

pub const CONTACT_DETAILS: [ContactDetail; 4] = [
    ContactDetail { icon: "☏", title: "Phone", lines: &[PHONE] },
    ContactDetail { icon: "✉", title: "Email", lines: &[EMAIL] },
    ContactDetail { icon: "⌂", title: "Studio", lines: &["123 Bridal Lane, Suite 200", "New York, NY 10001"] },
    ContactDetail { icon: "◷", title: "Hours", lines: &["Mon - Fri: 9:00 AM - 6:00 PM", "Sat: By Appointment"] },
];

pub struct SocialLink {
    pub label: &'static str,
    pub glyph: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink { label: "Instagram", glyph: "IG" },
    SocialLink { label: "Facebook", glyph: "f" },
    SocialLink { label: "Twitter", glyph: "X" },
    SocialLink { label: "LinkedIn", glyph: "in" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_links_cover_every_section_in_page_order() {
        let linked: Vec<Section> = NAV_LINKS.iter().map(|link| link.section).collect();
        assert_eq!(linked, Section::ALL);
    }

    #[test]
    fn section_anchors_are_unique() {
        for (i, section) in Section::ALL.iter().enumerate() {
            assert_eq!(section.href(), format!("#{}", section.id()));
            assert!(Section::ALL[i + 1..].iter().all(|other| other.id() != section.id()));
        }
    }

    #[test]
    fn stars_match_rating() {
        for testimonial in &TESTIMONIALS {
            assert_eq!(testimonial.stars().chars().count(), testimonial.rating);
            assert!(testimonial.stars().chars().all(|c| c == '★'));
        }
    }

    #[test]
    fn exactly_one_tier_is_popular() {
        assert_eq!(PRICING.iter().filter(|tier| tier.popular).count(), 1);
    }

    #[test]
    fn ratings_fit_five_stars() {
        assert!(TESTIMONIALS.iter().all(|t| (1..=5).contains(&t.rating)));
    }
}
