pub const LANDING_STYLES: &str = r#"
    :root {
        --gold: #C9A96E;
        --gold-dark: #B08D4F;
        --ivory: #FFFFF0;
        --ivory-dark: #F0EAD6;
        --blush: #F4E1E1;
        --sage: #B2BDA0;
        --sage-dark: #8A9A78;
        --charcoal: #363636;
    }
    html { scroll-behavior: smooth; }
    body {
        margin: 0;
        background: var(--ivory);
        color: var(--charcoal);
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    }
    h1, h2, h3, h4, .nav-logo, .footer-brand, .stat-number, .tier-price, .gallery-title {
        font-family: "Playfair Display", Georgia, serif;
    }
    a { color: inherit; text-decoration: none; }
    .accent { color: var(--gold); }

    @keyframes fadeInUp {
        from { opacity: 0; transform: translateY(30px); }
        to { opacity: 1; transform: translateY(0); }
    }
    @keyframes fadeIn {
        from { opacity: 0; }
        to { opacity: 1; }
    }
    @keyframes scaleIn {
        from { opacity: 0; transform: scale(0.92); }
        to { opacity: 1; transform: scale(1); }
    }
    .opacity-0 { opacity: 0; }
    .animate-fade-in-up { animation: fadeInUp 0.8s ease-out both; }
    .animate-fade-in { animation: fadeIn 0.8s ease-out both; }
    .animate-scale-in { animation: scaleIn 0.7s ease-out both; }
    .animate-fade-in > *, .animate-scale-in > *, .animate-fade-in-up > * {
        animation: fadeInUp 0.7s ease-out both;
    }
    .delay-200 { animation-delay: 200ms; }
    .delay-300 { animation-delay: 300ms; }
    .delay-400 { animation-delay: 400ms; }

    .top-nav {
        position: fixed;
        top: 0; left: 0; right: 0;
        z-index: 50;
        transition: all 0.3s;
        background: transparent;
    }
    .top-nav.scrolled {
        background: rgba(255, 255, 240, 0.95);
        backdrop-filter: blur(12px);
        box-shadow: 0 10px 15px rgba(54, 54, 54, 0.05);
    }
    .nav-content {
        max-width: 1280px;
        margin: 0 auto;
        padding: 0 24px;
        height: 80px;
        display: flex;
        align-items: center;
        justify-content: space-between;
    }
    .nav-logo { font-size: 1.5rem; font-weight: 700; display: flex; gap: 8px; align-items: center; }
    .nav-logo-heart { color: var(--gold); }
    .nav-right { display: flex; align-items: center; gap: 32px; }
    .nav-link { font-size: 0.875rem; font-weight: 500; opacity: 0.8; transition: color 0.2s; }
    .nav-link:hover, .mobile-link:hover { color: var(--gold); }
    .nav-cta {
        border-radius: 9999px;
        background: var(--gold);
        color: white;
        padding: 10px 24px;
        font-size: 0.875rem;
        font-weight: 600;
    }
    .nav-cta:hover { background: var(--gold-dark); }
    .burger-menu { display: none; background: none; border: none; font-size: 1.5rem; cursor: pointer; }
    .mobile-menu {
        display: none;
        overflow: hidden;
        max-height: 0;
        opacity: 0;
        transition: all 0.3s;
        background: rgba(255, 255, 240, 0.95);
        padding: 0 16px;
    }
    .mobile-menu.mobile-menu-open { max-height: 24rem; opacity: 1; padding-bottom: 24px; }
    .mobile-link { display: block; padding: 12px 0; border-bottom: 1px solid rgba(201, 169, 110, 0.1); }
    .mobile-cta { display: block; margin-top: 16px; text-align: center; }

    .hero {
        position: relative;
        min-height: 100vh;
        display: flex;
        align-items: center;
        justify-content: center;
        overflow: hidden;
        background: linear-gradient(135deg, #FFFFF0 0%, #F4E1E1 40%, #FFFFF0 70%, #B2BDA0 100%);
    }
    .blob { position: absolute; border-radius: 50%; filter: blur(60px); }
    .blob-gold { top: 80px; left: 40px; width: 16rem; height: 16rem; background: rgba(201, 169, 110, 0.05); }
    .blob-blush { bottom: 80px; right: 40px; width: 24rem; height: 24rem; background: rgba(244, 225, 225, 0.3); }
    .blob-sage { top: 33%; right: 25%; width: 12rem; height: 12rem; background: rgba(178, 189, 160, 0.2); }
    .hero-content { position: relative; z-index: 10; max-width: 56rem; padding: 0 16px; text-align: center; }
    .hero-badge {
        display: inline-flex;
        margin-bottom: 24px;
        border: 1px solid rgba(201, 169, 110, 0.3);
        border-radius: 9999px;
        background: rgba(255, 255, 255, 0.6);
        padding: 8px 20px;
        font-size: 0.875rem;
    }
    .hero h1 { font-size: clamp(3rem, 7vw, 4.5rem); line-height: 1.1; margin: 0; }
    .hero-subtitle { max-width: 42rem; margin: 24px auto 0; font-size: 1.25rem; opacity: 0.7; }
    .hero-actions { margin-top: 40px; display: flex; gap: 16px; justify-content: center; flex-wrap: wrap; }
    .button-primary, .button-outline {
        display: inline-flex;
        align-items: center;
        justify-content: center;
        border-radius: 9999px;
        padding: 16px 32px;
        font-weight: 600;
        transition: all 0.2s;
    }
    .button-primary { background: var(--gold); color: white; }
    .button-primary:hover { background: var(--gold-dark); box-shadow: 0 20px 25px rgba(201, 169, 110, 0.25); }
    .button-outline { border: 2px solid rgba(201, 169, 110, 0.4); background: rgba(255, 255, 255, 0.5); }
    .button-outline:hover { border-color: var(--gold); }
    .block { display: block; text-align: center; padding: 12px; }

    .section { padding: 96px 0; }
    .section-white { background: white; }
    .section-blush { background: linear-gradient(180deg, #FFFFF0 0%, #F4E1E1 50%, #FFFFF0 100%); }
    .section-sage { background: linear-gradient(180deg, #FFFFF0 0%, #B2BDA0 30%, #B2BDA0 70%, #FFFFF0 100%); }
    .container { max-width: 1280px; margin: 0 auto; padding: 0 24px; }
    .container.narrow { max-width: 56rem; }
    .section-heading { text-align: center; }
    .eyebrow {
        font-size: 0.875rem;
        font-weight: 600;
        text-transform: uppercase;
        letter-spacing: 0.1em;
        color: var(--gold);
    }
    h2 { font-size: clamp(2.25rem, 4vw, 3rem); margin: 12px 0 0; }
    .lead { max-width: 42rem; margin: 16px auto 0; font-size: 1.125rem; opacity: 0.7; }
    .lead-left { font-size: 1.125rem; line-height: 1.7; opacity: 0.7; }

    .about-grid { display: grid; gap: 64px; grid-template-columns: repeat(2, 1fr); align-items: center; }
    .stats-grid { display: grid; gap: 24px; grid-template-columns: repeat(3, 1fr); }
    .stat-card {
        display: flex;
        flex-direction: column;
        align-items: center;
        border: 1px solid rgba(201, 169, 110, 0.1);
        border-radius: 16px;
        background: var(--ivory);
        padding: 32px;
        text-align: center;
    }
    .stat-number { font-size: 2.25rem; font-weight: 700; }
    .stat-label { margin-top: 8px; font-size: 0.875rem; opacity: 0.6; }
    .icon-circle, .icon-square {
        display: flex;
        align-items: center;
        justify-content: center;
        width: 56px;
        height: 56px;
        margin-bottom: 16px;
        background: rgba(201, 169, 110, 0.1);
        color: var(--gold);
        font-size: 1.5rem;
    }
    .icon-circle { border-radius: 50%; }
    .icon-circle.small { width: 44px; height: 44px; margin: 0; font-size: 1rem; }
    .icon-square { border-radius: 12px; }
    .icon-square.light { background: rgba(255, 255, 255, 0.8); }

    .card-grid { margin-top: 64px; display: grid; gap: 32px; grid-template-columns: repeat(3, 1fr); }
    .service-card, .testimonial-card, .pricing-card {
        border: 1px solid rgba(201, 169, 110, 0.1);
        border-radius: 16px;
        background: rgba(255, 255, 255, 0.8);
        padding: 32px;
        transition: box-shadow 0.3s;
    }
    .service-card:hover, .pricing-card:hover { box-shadow: 0 20px 25px rgba(201, 169, 110, 0.1); }
    .service-card p, .process-body p { line-height: 1.7; opacity: 0.7; }

    .gallery-tile { position: relative; height: 18rem; border-radius: 16px; overflow: hidden; }
    .gallery-fill { position: absolute; inset: 0; transition: transform 0.5s; }
    .gallery-tile:hover .gallery-fill { transform: scale(1.1); }
    .gallery-shade { position: absolute; inset: 0; transition: background 0.3s; }
    .gallery-tile:hover .gallery-shade { background: rgba(54, 54, 54, 0.2); }
    .gallery-title {
        position: absolute;
        inset: 0;
        display: flex;
        align-items: center;
        justify-content: center;
        color: rgba(255, 255, 255, 0.8);
        font-size: 1.5rem;
        font-weight: 700;
    }
    .gallery-chip { position: absolute; left: 24px; bottom: 24px; opacity: 0; transition: opacity 0.3s; }
    .gallery-chip span { border-radius: 9999px; background: rgba(255, 255, 255, 0.9); padding: 8px 16px; font-size: 0.875rem; }
    .gallery-tile:hover .gallery-chip { opacity: 1; }

    .process-list { margin-top: 64px; }
    .process-step { position: relative; display: flex; gap: 24px; padding-bottom: 48px; }
    .process-line { position: absolute; left: 28px; top: 64px; height: 100%; width: 1px; background: rgba(201, 169, 110, 0.3); }
    .process-icon {
        position: relative;
        z-index: 1;
        display: flex;
        flex-shrink: 0;
        align-items: center;
        justify-content: center;
        width: 56px;
        height: 56px;
        border: 2px solid var(--gold);
        border-radius: 50%;
        background: white;
        color: var(--gold);
    }
    .process-index { font-size: 0.75rem; font-weight: 700; text-transform: uppercase; letter-spacing: 0.1em; color: var(--gold); }
    .process-body h3 { margin: 4px 0 0; }

    .stars { color: var(--gold); letter-spacing: 4px; }
    .quote { margin-top: 16px; font-style: italic; line-height: 1.7; opacity: 0.7; }
    .testimonial-author { margin-top: 24px; display: flex; gap: 12px; align-items: center; }
    .author-name { margin: 0; font-weight: 700; }
    .author-event { margin: 0; font-size: 0.875rem; opacity: 0.6; }

    .pricing-card { position: relative; display: flex; flex-direction: column; }
    .pricing-card.popular { border-color: var(--gold); background: white; transform: scale(1.02); }
    .popular-badge {
        position: absolute;
        top: -16px;
        left: 50%;
        transform: translateX(-50%);
        border-radius: 9999px;
        background: var(--gold);
        color: white;
        padding: 4px 16px;
        font-size: 0.75rem;
        font-weight: 700;
        text-transform: uppercase;
    }
    .tier-description { font-size: 0.875rem; opacity: 0.6; }
    .tier-price { margin: 16px 0 24px; font-size: 2.25rem; font-weight: 700; color: var(--gold); }
    .tier-features { flex: 1; margin: 0 0 32px; padding: 0; list-style: none; }
    .tier-features li { display: flex; gap: 8px; margin-bottom: 12px; font-size: 0.875rem; }
    .check { color: var(--sage-dark); }

    .faq-container { max-width: 48rem; }
    .faq-item { border-bottom: 1px solid rgba(201, 169, 110, 0.2); }
    .faq-question {
        display: flex;
        width: 100%;
        align-items: center;
        justify-content: space-between;
        padding: 20px 0;
        border: none;
        background: none;
        text-align: left;
        cursor: pointer;
        font-size: 1.125rem;
        color: var(--charcoal);
    }
    .faq-question:hover { color: var(--gold); }
    .toggle-icon { color: var(--gold); transition: transform 0.3s; }
    .faq-item.open .toggle-icon { transform: rotate(180deg); }
    .faq-answer { display: grid; grid-template-rows: 0fr; opacity: 0; transition: all 0.3s ease-in-out; }
    .faq-item.open .faq-answer { grid-template-rows: 1fr; opacity: 1; padding-bottom: 20px; }
    .faq-answer-inner { overflow: hidden; line-height: 1.7; opacity: 0.7; }

    .contact-grid { margin-top: 64px; display: grid; gap: 48px; grid-template-columns: 2fr 3fr; }
    .contact-detail { display: flex; gap: 16px; margin-bottom: 32px; }
    .contact-detail h3 { margin: 0; }
    .contact-detail p { margin: 4px 0 0; opacity: 0.7; }
    .contact-form {
        border: 1px solid rgba(201, 169, 110, 0.1);
        border-radius: 16px;
        background: rgba(255, 255, 255, 0.9);
        padding: 32px;
    }
    .form-grid { display: grid; gap: 20px; grid-template-columns: repeat(2, 1fr); }
    .form-message { margin-top: 20px; }
    .contact-form label { display: block; margin-bottom: 6px; font-size: 0.875rem; font-weight: 500; }
    .contact-form input, .contact-form select, .contact-form textarea {
        box-sizing: border-box;
        width: 100%;
        border: 1px solid rgba(201, 169, 110, 0.2);
        border-radius: 8px;
        background: var(--ivory);
        padding: 12px 16px;
        font: inherit;
        color: var(--charcoal);
    }
    .contact-form textarea { resize: none; }
    .contact-form input:focus, .contact-form select:focus, .contact-form textarea:focus {
        outline: none;
        border-color: var(--gold);
    }
    .submit-button {
        margin-top: 24px;
        border: none;
        border-radius: 9999px;
        background: var(--gold);
        color: white;
        padding: 16px 32px;
        font-weight: 600;
        cursor: pointer;
    }
    .submit-button:hover { background: var(--gold-dark); }
    .success-message, .error-message { margin-bottom: 24px; border-radius: 8px; padding: 16px; }
    .success-message { background: rgba(178, 189, 160, 0.2); }
    .error-message { background: rgba(244, 225, 225, 0.6); }

    .site-footer { background: var(--charcoal); color: rgba(255, 255, 255, 0.8); padding: 64px 0; }
    .footer-grid { max-width: 1280px; margin: 0 auto; padding: 0 24px; display: grid; gap: 48px; grid-template-columns: repeat(4, 1fr); }
    .footer-brand { font-size: 1.25rem; font-weight: 700; color: white; }
    .footer-blurb { margin-top: 16px; font-size: 0.875rem; line-height: 1.7; color: rgba(255, 255, 255, 0.6); }
    .social-links { margin-top: 24px; display: flex; gap: 12px; }
    .social-link {
        display: flex;
        align-items: center;
        justify-content: center;
        width: 40px;
        height: 40px;
        border-radius: 50%;
        background: rgba(255, 255, 255, 0.1);
        font-size: 0.75rem;
    }
    .social-link:hover { background: rgba(201, 169, 110, 0.3); color: var(--gold); }
    .site-footer h4 { color: white; font-size: 1.125rem; }
    .site-footer ul { margin: 16px 0 0; padding: 0; list-style: none; }
    .site-footer li { margin-bottom: 10px; font-size: 0.875rem; color: rgba(255, 255, 255, 0.6); }
    .site-footer li a:hover { color: var(--gold); }
    .footer-bottom {
        max-width: 1280px;
        margin: 48px auto 0;
        padding: 32px 24px 0;
        border-top: 1px solid rgba(255, 255, 255, 0.1);
        text-align: center;
        font-size: 0.875rem;
        color: rgba(255, 255, 255, 0.4);
    }

    @media (max-width: 950px) {
        .nav-right { display: none; }
        .burger-menu { display: block; }
        .mobile-menu { display: block; }
        .about-grid, .contact-grid { grid-template-columns: 1fr; }
        .card-grid { grid-template-columns: repeat(2, 1fr); }
        .footer-grid { grid-template-columns: repeat(2, 1fr); }
    }
    @media (max-width: 640px) {
        .stats-grid, .card-grid, .form-grid, .footer-grid { grid-template-columns: 1fr; }
    }
"#;
