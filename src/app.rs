mod about;
mod contact;
mod footer;
mod hero;
mod navbar;
mod primitives;
mod projects;
mod reveal;
mod timers;
mod toast;

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};
use leptos_use::{use_color_mode_with_options, ColorMode, UseColorModeOptions, UseColorModeReturn};

use crate::content::{registry, AppearanceMode, DEVICON_STYLESHEET};
use crate::scheduler::Scheduler;

use about::About;
use contact::Contact;
use footer::Footer;
use hero::Hero;
use navbar::Navbar;
use projects::Projects;
use timers::BrowserScheduler;
use toast::{Toaster, Toasts};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light dark" />
                <link rel="stylesheet" href=DEVICON_STYLESHEET />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

/// Current appearance, provided by the page shell.
#[derive(Clone, Copy)]
pub struct Appearance {
    /// What the visitor picked, possibly "follow the system".
    pub chosen: Signal<AppearanceMode>,
    /// What is actually on screen.
    pub resolved: Signal<AppearanceMode>,
    set_chosen: WriteSignal<ColorMode>,
}

impl Appearance {
    pub fn cycle(&self) {
        let next = self.chosen.get_untracked().next();
        self.set_chosen.set(to_color_mode(next));
    }
}

fn to_color_mode(mode: AppearanceMode) -> ColorMode {
    match mode {
        AppearanceMode::Light => ColorMode::Light,
        AppearanceMode::Dark => ColorMode::Dark,
        AppearanceMode::System => ColorMode::Auto,
    }
}

fn from_color_mode(mode: &ColorMode) -> AppearanceMode {
    match mode {
        ColorMode::Light => AppearanceMode::Light,
        ColorMode::Dark => AppearanceMode::Dark,
        _ => AppearanceMode::System,
    }
}

fn provide_appearance() {
    let settings = registry().settings.appearance;
    let UseColorModeReturn {
        store,
        set_store,
        state,
        ..
    } = use_color_mode_with_options(
        UseColorModeOptions::default()
            .initial_value(to_color_mode(settings.mode))
            .transition_enabled(settings.transition_on_mode_change),
    );
    let appearance = Appearance {
        chosen: Signal::derive(move || store.with(from_color_mode)),
        resolved: Signal::derive(move || state.with(from_color_mode)),
        set_chosen: set_store,
    };
    provide_context(appearance);
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_appearance();

    let settings = &registry().settings;
    let scheduler: Arc<dyn Scheduler> = Arc::new(BrowserScheduler::default());
    provide_context(Toasts::new(scheduler.clone(), settings.toast_duration()));
    provide_context(scheduler);

    view! {
        <SiteMeta />
        <Router>
            <Navbar />
            <main class="min-h-screen">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
            <Footer />
        </Router>
        <Toaster />
    }
}

/// Static metadata for the page head.
#[component]
fn SiteMeta() -> impl IntoView {
    let site = &registry().site;
    view! {
        <Title text=site.title.as_str() />
        <Meta name="description" content=site.description.as_str() />
        <Meta name="keywords" content=site.keywords.join(", ") />
        <Meta name="author" content=site.name.as_str() />
        <Meta name="creator" content=site.name.as_str() />
        <Meta name="robots" content="index, follow" />
        <Link rel="canonical" href=site.url.as_str() />
        <Meta property="og:title" content=site.title.as_str() />
        <Meta property="og:description" content=site.share_description.as_str() />
        <Meta property="og:url" content=site.url.as_str() />
        <Meta property="og:site_name" content=site.site_name.as_str() />
        <Meta property="og:image" content=format!("{}{}", site.url, site.og_image) />
        <Meta property="og:locale" content="en_US" />
        <Meta property="og:type" content="website" />
        <Meta name="twitter:card" content="summary_large_image" />
        <Meta name="twitter:title" content=site.title.as_str() />
        <Meta name="twitter:description" content=site.share_description.as_str() />
        <Meta name="twitter:creator" content=site.twitter_handle.as_str() />
        <Meta name="twitter:image" content=format!("{}{}", site.url, site.og_image) />
    }
}

/// Sections in page order; each anchors one navigation target.
#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Hero />
        <About />
        <Projects />
        <Contact />
    }
}
