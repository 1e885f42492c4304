use leptos::prelude::*;

use crate::content::{Icon, SocialLink};

#[component]
pub fn Card(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! {
        <div class=format!(
            "rounded-lg border border-gray-200 dark:border-gray-700 shadow-lg {class}",
        )>{children()}</div>
    }
}

#[component]
pub fn Badge(children: Children) -> impl IntoView {
    view! {
        <span class="inline-flex items-center rounded-full px-3 py-1 text-xs font-medium bg-blue-100 text-blue-800 dark:bg-blue-900 dark:text-blue-200 transition-colors">
            {children()}
        </span>
    }
}

#[component]
pub fn Glyph(icon: Icon, #[prop(optional)] class: &'static str) -> impl IntoView {
    view! { <i class=format!("{} {class}", icon.class()) aria-hidden="true"></i> }
}

/// Section title with the accent rule underneath.
#[component]
pub fn SectionHeading(
    title: &'static str,
    #[prop(optional)] subtitle: Option<&'static str>,
) -> impl IntoView {
    view! {
        <h2 class="text-3xl md:text-4xl font-bold text-gray-900 dark:text-white mb-4">{title}</h2>
        <div class="w-20 h-1 bg-blue-600 mx-auto mb-8"></div>
        {subtitle
            .map(|s| {
                view! {
                    <p class="text-xl text-gray-600 dark:text-gray-300 max-w-3xl mx-auto">{s}</p>
                }
            })}
    }
}

#[component]
pub fn SocialIcons(links: &'static [SocialLink], class: &'static str) -> impl IntoView {
    links
        .iter()
        .map(|link| {
            let (target, rel) = if link.is_external() {
                (Some("_blank"), Some("noopener noreferrer"))
            } else {
                (None, None)
            };
            view! {
                <a
                    href=link.href.as_str()
                    target=target
                    rel=rel
                    class=class
                    aria-label=link.label.as_str()
                >
                    <Glyph icon=link.icon class="text-xl" />
                </a>
            }
        })
        .collect_view()
}
