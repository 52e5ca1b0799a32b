use yew::prelude::*;
use log::{info, warn};

use crate::config::EffectsConfig;
use crate::dom;
use crate::effects::PageEffects;

struct Service {
    icon: &'static str,
    title: &'static str,
    body: &'static str,
}

const SERVICES: [Service; 6] = [
    Service { icon: "◐", title: "Companion Visits", body: "Friendly faces who stop by for tea, a walk or a game of cards, on your schedule." },
    Service { icon: "✚", title: "Medication Reminders", body: "Gentle nudges at the right time, with a quick check-in if a dose is missed." },
    Service { icon: "⌂", title: "Home Help", body: "Light housekeeping, laundry and tidying so home stays the way you like it." },
    Service { icon: "➜", title: "Errands & Rides", body: "Groceries, pharmacy runs and appointments, with someone by your side." },
    Service { icon: "♥", title: "Family Updates", body: "Short weekly notes so the people who care always know how things are going." },
    Service { icon: "☼", title: "Daily Routines", body: "Meals, mornings and evenings planned around the rhythm of each day." },
];

const STEPS: [(&str, &str); 3] = [
    ("Talk to us", "A relaxed call to hear what a good week looks like for you."),
    ("Meet your match", "We introduce a carer whose skills and temperament fit."),
    ("Settle in", "Visits begin, and we check in often during the first month."),
];

const GOALS: [(&str, &str); 3] = [
    ("Independence", "Staying at home, on your own terms, for as long as possible."),
    ("Connection", "Real conversation and company, not just tasks ticked off."),
    ("Peace of mind", "Families who can breathe easier between visits."),
];

const SUBTITLE: &str = "Warm, dependable care that fits around the life you already love";

#[function_component(Landing)]
pub fn landing() -> Html {
    // Effects bind to the rendered markup, so install after the first render
    // and drop everything when the page goes away.
    use_effect_with_deps(
        move |_| {
            let effects = dom::document()
                .map(|document| EffectsConfig::load(&document))
                .and_then(PageEffects::install);
            let effects = match effects {
                Ok(effects) => {
                    info!("Landing effects ready (reduced motion: {})", effects.reduced_motion());
                    Some(effects)
                }
                Err(e) => {
                    warn!("Landing effects unavailable: {}", e);
                    None
                }
            };
            move || drop(effects)
        },
        (),
    );

    html! {
        <div class="landing-page">
            <div class="cursor"></div>
            <div class="cursor-follower"></div>

            <nav class="navbar">
                <div class="nav-content">
                    <a href="#top" class="nav-logo">{"Harbor & Hearth"}</a>
                    <div class="nav-links">
                        <a href="#services" class="nav-link">{"Services"}</a>
                        <a href="#how" class="nav-link">{"How it works"}</a>
                        <a href="#goals" class="nav-link">{"Our goals"}</a>
                        <a href="#contact" class="cta-button nav-cta">{"Get in touch"}</a>
                    </div>
                </div>
            </nav>

            <section class="hero" id="top">
                <div class="hero-background"></div>
                <div class="float-circle circle-1"></div>
                <div class="float-circle circle-2"></div>
                <div class="float-circle circle-3"></div>
                <div class="hero-content">
                    <h1 class="hero-title">{"Care that feels like home"}</h1>
                    <p class="hero-subtitle">
                        {
                            SUBTITLE.split(' ').map(|word| html! {
                                <span class="subtitle-word">{word}{" "}</span>
                            }).collect::<Html>()
                        }
                    </p>
                    <a href="#services" class="cta-button">{"See what we do"}</a>
                </div>
            </section>

            <section class="services-section" id="services">
                <h2 class="section-title">{"What we offer"}</h2>
                <p class="section-subtitle">{"Pick one, or mix and match as needs change."}</p>
                <div class="services-slider">
                    <button type="button" class="slider-btn slider-btn-prev" aria-label="Previous">{"‹"}</button>
                    <div class="services-slider-viewport">
                        <div class="services-slider-track">
                            {
                                SERVICES.iter().map(|service| html! {
                                    <div class="service-card-wrapper">
                                        <div class="service-card">
                                            <div class="service-icon">{service.icon}</div>
                                            <h3>{service.title}</h3>
                                            <p>{service.body}</p>
                                        </div>
                                    </div>
                                }).collect::<Html>()
                            }
                        </div>
                    </div>
                    <button type="button" class="slider-btn slider-btn-next" aria-label="Next">{"›"}</button>
                </div>
                <div class="slider-dots"></div>
            </section>

            <section class="steps-section" id="how">
                <h2 class="section-title">{"How it works"}</h2>
                <div class="steps">
                    {
                        STEPS.iter().enumerate().map(|(i, (title, body))| html! {
                            <div class="step-item">
                                <span class="step-number">{i + 1}</span>
                                <h3>{*title}</h3>
                                <p>{*body}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section class="trust-section">
                <div class="trust-background"></div>
                <p class="trust-paragraph">
                    {"Every carer is background-checked, trained and introduced in person. We stay small on purpose, so we know everyone by name."}
                </p>
            </section>

            <section class="goals-section" id="goals">
                <h2 class="section-title">{"What we are working towards"}</h2>
                <div class="goals">
                    {
                        GOALS.iter().map(|(title, body)| html! {
                            <div class="goal-card">
                                <h3>{*title}</h3>
                                <p>{*body}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section class="cta-section" id="contact">
                <h2 class="cta-title">{"Let's talk about what you need"}</h2>
                <p class="cta-subtitle">{"No forms, no pressure. Just a conversation."}</p>
                <a href="tel:+15550100" class="cta-button cta-large">{"Call (555) 0100"}</a>
                <p class="cta-note">{"Weekdays 8am to 6pm."}</p>
            </section>

            <style>
                {r#"
                :root {
                    --soft-teal: #4ecdc4;
                    --deep-teal: #2ea89f;
                    --warm-gold: #f4a261;
                    --cream: #fdf8f0;
                    --ink: #26343a;
                }

                html { scroll-behavior: auto; }

                body {
                    margin: 0;
                    background: var(--cream);
                    color: var(--ink);
                    font-family: "Inter", system-ui, sans-serif;
                    cursor: none;
                }

                .landing-page { overflow-x: hidden; }

                .cursor,
                .cursor-follower {
                    position: fixed;
                    top: 0;
                    left: 0;
                    border-radius: 50%;
                    pointer-events: none;
                    z-index: 1000;
                    transform: translate(-50%, -50%) scale(1);
                    transition: transform 0.2s ease, border-color 0.2s ease;
                }

                .cursor {
                    width: 10px;
                    height: 10px;
                    border: 2px solid var(--soft-teal);
                }

                .cursor-follower {
                    width: 36px;
                    height: 36px;
                    border: 1px solid rgba(78, 205, 196, 0.3);
                }

                .navbar {
                    position: fixed;
                    top: 0;
                    width: 100%;
                    height: 80px;
                    background: rgba(253, 248, 240, 0.92);
                    backdrop-filter: blur(8px);
                    box-shadow: 0 2px 20px rgba(46, 168, 159, 0.05);
                    transition: box-shadow 0.3s ease;
                    z-index: 100;
                }

                .nav-content {
                    max-width: 1200px;
                    height: 100%;
                    margin: 0 auto;
                    padding: 0 2rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }

                .nav-logo {
                    font-weight: 700;
                    font-size: 1.3rem;
                    color: var(--deep-teal);
                    text-decoration: none;
                }

                .nav-links { display: flex; gap: 1.5rem; align-items: center; }
                .nav-link { color: var(--ink); text-decoration: none; }

                .cta-button {
                    display: inline-block;
                    padding: 0.8rem 1.8rem;
                    border-radius: 999px;
                    background: var(--deep-teal);
                    color: #fff;
                    text-decoration: none;
                    transition: transform 0.3s ease, background 0.3s ease;
                }

                .cta-button:hover { background: var(--warm-gold); transform: translateY(-2px); }

                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                    text-align: center;
                }

                .hero-background {
                    position: absolute;
                    inset: -20% 0 0 0;
                    background: radial-gradient(circle at 30% 30%, rgba(78, 205, 196, 0.25), transparent 60%),
                                radial-gradient(circle at 70% 60%, rgba(244, 162, 97, 0.2), transparent 55%);
                    will-change: transform;
                }

                .float-circle {
                    position: absolute;
                    border-radius: 50%;
                    background: rgba(78, 205, 196, 0.12);
                    will-change: transform;
                }

                .circle-1 { width: 220px; height: 220px; top: 12%; left: 8%; }
                .circle-2 { width: 140px; height: 140px; top: 60%; right: 12%; background: rgba(244, 162, 97, 0.15); }
                .circle-3 { width: 80px; height: 80px; top: 30%; right: 30%; }

                .hero-content {
                    position: relative;
                    max-width: 760px;
                    padding: 0 2rem;
                    opacity: 0;
                    transition: opacity 0.8s ease;
                }

                .hero-title { font-size: 3.5rem; margin-bottom: 1rem; }

                .subtitle-word {
                    display: inline-block;
                    opacity: 0;
                    animation: wordIn 0.5s ease forwards;
                }

                @keyframes wordIn {
                    from { opacity: 0; transform: translateY(12px); }
                    to { opacity: 1; transform: translateY(0); }
                }

                section { padding: 6rem 2rem; }

                .section-title,
                .section-subtitle,
                .step-item,
                .trust-paragraph,
                .cta-title,
                .cta-subtitle,
                .cta-large,
                .cta-note,
                .goal-card {
                    opacity: 0;
                    transform: translateY(30px);
                    transition: opacity 0.7s ease, transform 0.7s ease;
                }

                .visible {
                    opacity: 1;
                    transform: translateY(0);
                }

                .section-title { text-align: center; font-size: 2.4rem; }
                .section-subtitle { text-align: center; margin-bottom: 3rem; }

                .services-slider {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                }

                .services-slider-viewport { overflow: hidden; flex: 1; padding: 1rem 0; }

                .services-slider-track {
                    display: flex;
                    gap: 32px;
                    transition: transform 0.5s ease;
                }

                .service-card-wrapper { flex: 0 0 calc((100% - 64px) / 3); }

                .service-card {
                    height: 100%;
                    padding: 2rem;
                    border-radius: 20px;
                    background: #fff;
                    box-shadow: 0 10px 30px rgba(38, 52, 58, 0.08);
                    transition: transform 0.2s ease, box-shadow 0.3s ease;
                    transform-style: preserve-3d;
                }

                .service-icon { font-size: 2rem; color: var(--deep-teal); }

                .slider-btn {
                    width: 44px;
                    height: 44px;
                    border-radius: 50%;
                    border: 1px solid var(--soft-teal);
                    background: #fff;
                    font-size: 1.5rem;
                }

                .slider-btn:disabled { opacity: 0.35; }

                .slider-dots { display: flex; justify-content: center; gap: 0.6rem; margin-top: 2rem; }

                .slider-dot {
                    width: 10px;
                    height: 10px;
                    padding: 0;
                    border-radius: 50%;
                    border: none;
                    background: rgba(46, 168, 159, 0.25);
                    transition: background 0.3s ease, transform 0.3s ease;
                }

                .slider-dot.active { background: var(--deep-teal); transform: scale(1.3); }

                .steps { display: flex; gap: 2rem; max-width: 1000px; margin: 3rem auto 0; }
                .step-item { flex: 1; }
                .step-item:nth-child(2) { transition-delay: 0.15s; }
                .step-item:nth-child(3) { transition-delay: 0.3s; }
                .step-number { font-size: 2.5rem; font-weight: 700; color: var(--warm-gold); }

                .trust-section { position: relative; overflow: hidden; background: var(--ink); color: #fff; }

                .trust-background {
                    position: absolute;
                    inset: -30% 0;
                    background: radial-gradient(circle at 50% 50%, rgba(78, 205, 196, 0.2), transparent 65%);
                    will-change: transform;
                }

                .trust-paragraph {
                    position: relative;
                    max-width: 760px;
                    margin: 0 auto;
                    font-size: 1.5rem;
                    line-height: 1.6;
                    text-align: center;
                }

                .goals { display: grid; grid-template-columns: repeat(3, 1fr); gap: 2rem; max-width: 1100px; margin: 3rem auto 0; }
                .goal-card { padding: 2rem; border-radius: 16px; background: #fff; }

                .cta-section { text-align: center; }
                .cta-large { font-size: 1.3rem; padding: 1.1rem 2.6rem; margin: 1.5rem 0; }

                @media (max-width: 1200px) {
                    .service-card-wrapper { flex: 0 0 calc((100% - 32px) / 2); }
                }

                @media (max-width: 768px) {
                    body { cursor: auto; }
                    .cursor, .cursor-follower { display: none; }
                    .nav-links .nav-link { display: none; }
                    .hero-title { font-size: 2.4rem; }
                    .service-card-wrapper { flex: 0 0 100%; }
                    .steps { flex-direction: column; }
                    .goals { grid-template-columns: 1fr; }
                }
                "#}
            </style>
        </div>
    }
}
