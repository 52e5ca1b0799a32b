#![cfg(target_arch = "wasm32")]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::{Document, HtmlButtonElement, HtmlElement};

use landing_frontend::config::EffectsConfig;
use landing_frontend::effects::carousel::Slider;
use landing_frontend::effects::cursor::{self, CustomCursor};
use landing_frontend::effects::hero::HeroEntrance;
use landing_frontend::effects::reveal::{RevealOnScroll, VISIBLE_CLASS};
use landing_frontend::effects::motion::{StillStyles, STILL_CSS};
use landing_frontend::effects::scheduler::{Debouncer, FrameCoalescer, FrameLoop};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn mount(parent: &HtmlElement, tag: &str, class: &str) -> HtmlElement {
    let el: HtmlElement = document().create_element(tag).unwrap().unchecked_into();
    el.set_class_name(class);
    parent.append_child(&el).unwrap();
    el
}

fn display(el: &HtmlElement) -> String {
    el.style().get_property_value("display").unwrap()
}

/// Browsers may serialise `1500ms` back as `1.5s`.
fn millis(time: &str) -> u32 {
    match time.strip_suffix("ms") {
        Some(ms) => ms.parse::<f64>().unwrap().round() as u32,
        None => (time.trim_end_matches('s').parse::<f64>().unwrap() * 1000.0).round() as u32,
    }
}

/// Resolves right after the next animation frame's callbacks have run.
async fn next_frame() {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        web_sys::window()
            .unwrap()
            .request_animation_frame(&resolve)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

fn still_style_count(document: &Document) -> usize {
    let styles = document.head().unwrap().query_selector_all("style").unwrap();
    (0..styles.length())
        .filter_map(|i| styles.get(i))
        .filter(|node| node.text_content().as_deref() == Some(STILL_CSS))
        .count()
}

#[wasm_bindgen_test]
fn cursor_follows_only_above_the_mobile_breakpoint() {
    let body = document().body().unwrap();
    let dot = mount(&body, "div", "cursor");
    let ring = mount(&body, "div", "cursor-follower");
    let config = EffectsConfig::default();

    let custom = CustomCursor::install(&document(), &config, 500.0).unwrap();
    assert!(!custom.is_following());
    assert_eq!(display(&dot), "none");
    assert_eq!(display(&ring), "none");

    custom.fit_width(1300.0);
    assert!(custom.is_following());
    assert_eq!(display(&dot), "block");
    assert_eq!(display(&ring), "block");

    custom.fit_width(700.0);
    assert!(!custom.is_following());
    assert_eq!(display(&ring), "none");

    drop(custom);
    dot.remove();
    ring.remove();
}

#[wasm_bindgen_test]
fn reduced_motion_hides_markers_and_stills_the_page() {
    let document = document();
    let body = document.body().unwrap();
    let dot = mount(&body, "div", "cursor");
    let ring = mount(&body, "div", "cursor-follower");

    cursor::hide_markers(&document);
    assert_eq!(display(&dot), "none");
    assert_eq!(display(&ring), "none");
    assert_eq!(body.style().get_property_value("cursor").unwrap(), "auto");

    let before = still_style_count(&document);
    let still = StillStyles::install(&document).unwrap();
    assert_eq!(still_style_count(&document), before + 1);
    drop(still);
    assert_eq!(still_style_count(&document), before);

    dot.remove();
    ring.remove();
}

#[wasm_bindgen_test]
async fn coalescer_runs_once_per_frame() {
    let runs = Rc::new(Cell::new(0u32));
    let frame = {
        let runs = runs.clone();
        FrameCoalescer::new(move || runs.set(runs.get() + 1))
    };

    for _ in 0..5 {
        frame.schedule();
    }
    assert!(frame.is_pending());
    next_frame().await;
    assert_eq!(runs.get(), 1);
    assert!(!frame.is_pending());

    frame.schedule();
    frame.schedule();
    next_frame().await;
    assert_eq!(runs.get(), 2);
}

#[wasm_bindgen_test]
async fn frame_loop_ticks_once_per_frame_until_stopped() {
    let ticks = Rc::new(Cell::new(0u32));
    let follow = {
        let ticks = ticks.clone();
        FrameLoop::new(move || ticks.set(ticks.get() + 1))
    };

    follow.start();
    follow.start();
    assert!(follow.is_running());
    next_frame().await;
    assert_eq!(ticks.get(), 1);
    next_frame().await;
    assert_eq!(ticks.get(), 2);

    follow.stop();
    assert!(!follow.is_running());
    next_frame().await;
    next_frame().await;
    assert_eq!(ticks.get(), 2);
}

#[wasm_bindgen_test]
async fn debouncer_keeps_only_the_last_call() {
    let fired = Rc::new(RefCell::new(Vec::new()));
    let debouncer = Debouncer::new(20);
    for n in 1..=3 {
        let fired = fired.clone();
        debouncer.call(move || fired.borrow_mut().push(n));
    }
    TimeoutFuture::new(80).await;
    assert_eq!(*fired.borrow(), vec![3]);
}

#[wasm_bindgen_test]
fn slider_controls_follow_the_index_and_dots_go_away_on_drop() {
    let body = document().body().unwrap();
    let section = mount(&body, "section", "services-section");
    let prev: HtmlButtonElement = mount(&section, "button", "slider-btn-prev").unchecked_into();
    let track = mount(&section, "div", "services-slider-track");
    for _ in 0..6 {
        mount(&track, "div", "service-card-wrapper");
    }
    let next: HtmlButtonElement = mount(&section, "button", "slider-btn-next").unchecked_into();
    let dots = mount(&section, "div", "slider-dots");
    let config = EffectsConfig::default();

    let slider = Slider::install(&document(), &config, 1300.0).unwrap();
    assert_eq!(dots.child_element_count(), 6);
    assert!(prev.disabled());
    assert!(!next.disabled());

    for _ in 0..5 {
        next.click();
    }
    assert_eq!(slider.index(), 3);
    assert!(next.disabled());
    assert!(!prev.disabled());

    slider.fit_width(500.0);
    assert_eq!(slider.index(), 3);
    assert!(!next.disabled());

    drop(slider);
    assert_eq!(dots.child_element_count(), 0);
    section.remove();
}

#[wasm_bindgen_test]
async fn loaded_page_runs_the_hero_entrance_right_away() {
    for _ in 0..50 {
        if document().ready_state() == "complete" {
            break;
        }
        TimeoutFuture::new(20).await;
    }
    let body = document().body().unwrap();
    let content = mount(&body, "div", "hero-content");
    let subtitle = mount(&content, "p", "hero-subtitle");
    let words: Vec<_> = (0..3).map(|_| mount(&subtitle, "span", "subtitle-word")).collect();
    let loaded = Rc::new(Cell::new(false));
    let config = EffectsConfig::default();

    let entrance = {
        let loaded = loaded.clone();
        HeroEntrance::install(&web_sys::window().unwrap(), &document(), &config, move || loaded.set(true))
    };
    assert!(loaded.get());

    TimeoutFuture::new(config.hero_reveal_delay_ms + 100).await;
    assert_eq!(content.style().get_property_value("opacity").unwrap(), "1");
    let delays: Vec<_> = words
        .iter()
        .map(|word| millis(&word.style().get_property_value("animation-delay").unwrap()))
        .collect();
    assert_eq!(delays, vec![1500, 1540, 1580]);

    drop(entrance);
    content.remove();
}

#[wasm_bindgen_test]
async fn sections_in_view_are_revealed() {
    let body = document().body().unwrap();
    let title = mount(&body, "h2", "section-title");
    title.style().set_property("height", "120px").unwrap();
    body.prepend_with_node_1(&title).unwrap();

    let reveal = RevealOnScroll::install(&document(), &EffectsConfig::default()).unwrap();
    for _ in 0..10 {
        if title.class_list().contains(VISIBLE_CLASS) {
            break;
        }
        TimeoutFuture::new(30).await;
    }
    assert!(title.class_list().contains(VISIBLE_CLASS));

    drop(reveal);
    title.remove();
}
