use leptos::{html, prelude::*, web_sys::IntersectionObserverEntry};
use leptos_use::{
    js, use_intersection_observer_with_options, use_supported, UseIntersectionObserverOptions,
    UseIntersectionObserverReturn,
};

use crate::reveal::RevealLatch;

/// A section's reveal controller: attach `node` to the section element and
/// read `revealed` to drive its entrance.
#[derive(Clone, Copy)]
pub struct SectionReveal {
    pub node: NodeRef<html::Section>,
    pub revealed: Signal<bool>,
}

pub fn use_reveal(threshold: f64) -> SectionReveal {
    let node = NodeRef::<html::Section>::new();
    let latch = RwSignal::new(RevealLatch::new(threshold));
    let revealed = Memo::new(move |_| latch.with(RevealLatch::is_revealed));

    let supported = use_supported(|| js!("IntersectionObserver" in &window()));
    let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
        node,
        move |entries: Vec<IntersectionObserverEntry>, _| {
            if latch.with_untracked(RevealLatch::is_revealed) {
                return;
            }
            let ratio = entries
                .iter()
                .filter(|e| e.is_intersecting())
                .map(|e| e.intersection_ratio())
                .fold(0.0, f64::max);
            latch.maybe_update(|l| l.observe(ratio));
        },
        UseIntersectionObserverOptions::default().thresholds(vec![threshold]),
    );

    // effects only run in the browser, so this never reveals during SSR
    Effect::new(move |_| {
        let supported = supported.get();
        latch.maybe_update(|l| l.observer_support(supported));
    });
    Effect::new(move |_| {
        if revealed.get() {
            stop();
        }
    });

    SectionReveal {
        node,
        revealed: revealed.into(),
    }
}

/// Reveal for content that animates in as soon as the page is interactive.
pub fn use_mount_reveal() -> Signal<bool> {
    let (mounted, set_mounted) = signal(false);
    Effect::new(move |_| set_mounted.set(true));
    mounted.into()
}

/// Where staged content slides in from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Enter {
    #[default]
    Below,
    Left,
    Right,
    Grow,
}

impl Enter {
    fn hidden_class(self) -> &'static str {
        match self {
            Enter::Below => "opacity-0 translate-y-5",
            Enter::Left => "opacity-0 -translate-x-5",
            Enter::Right => "opacity-0 translate-x-5",
            Enter::Grow => "opacity-0 scale-75",
        }
    }
}

/// Wraps children in the hidden/shown transition pair.
#[component]
pub fn Staged(
    #[prop(into)] shown: Signal<bool>,
    #[prop(optional)] delay_ms: u32,
    #[prop(optional)] from: Enter,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let hidden = from.hidden_class();
    view! {
        <div
            class=move || {
                let state = if shown.get() {
                    "opacity-100 translate-x-0 translate-y-0 scale-100"
                } else {
                    hidden
                };
                format!("transform transition-all duration-700 ease-out {state} {class}")
            }
            style=format!("transition-delay: {delay_ms}ms")
        >
            {children()}
        </div>
    }
}
