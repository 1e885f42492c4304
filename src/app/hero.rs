use leptos::prelude::*;

use crate::content::{registry, Anchor};
use crate::reveal::stagger;

use super::primitives::SocialIcons;
use super::reveal::{use_mount_reveal, Enter, Staged};

#[component]
pub fn Hero() -> impl IntoView {
    let content = registry();
    let site = &content.site;
    let shown = use_mount_reveal();

    view! {
        <section
            id=Anchor::Home.id()
            class="min-h-screen flex items-center justify-center relative overflow-hidden pt-16 pb-8"
        >
            <div class="absolute inset-0 bg-gradient-to-br from-blue-50 via-white to-purple-50 dark:from-gray-900 dark:via-gray-800 dark:to-gray-900"></div>
            <div class="absolute inset-0 overflow-hidden">
                <div class="absolute -top-40 -right-40 w-80 h-80 bg-blue-400 rounded-full opacity-10 animate-pulse"></div>
                <div class="absolute -bottom-40 -left-40 w-80 h-80 bg-purple-400 rounded-full opacity-10 animate-pulse delay-1000"></div>
            </div>

            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 relative z-10 text-center">
                <Staged shown class="mb-8">
                    <h1 class="text-4xl md:text-6xl lg:text-7xl font-bold text-gray-900 dark:text-white mb-6">
                        "Hi, I'm "
                        <span class="text-transparent bg-clip-text bg-gradient-to-r from-blue-600 to-purple-600">
                            {site.name.as_str()}
                        </span>
                    </h1>
                    <p class="text-xl md:text-2xl text-gray-600 dark:text-gray-300 mb-8">
                        {site.role.as_str()}
                    </p>
                    <p class="text-lg md:text-xl text-gray-500 dark:text-gray-400 max-w-2xl mx-auto">
                        {site.tagline.as_str()}
                    </p>
                </Staged>

                <Staged
                    shown
                    delay_ms=200
                    class="flex flex-col sm:flex-row items-center justify-center gap-4 mb-12"
                >
                    <a
                        href=Anchor::Projects.href()
                        class="bg-blue-600 hover:bg-blue-700 text-white px-8 py-3 rounded-full text-lg font-semibold transition-all duration-300 hover:scale-105"
                    >
                        "View My Work"
                    </a>
                    <a
                        href=Anchor::Contact.href()
                        class="border border-blue-600 text-blue-600 hover:bg-blue-600 hover:text-white px-8 py-3 rounded-full text-lg font-semibold transition-all duration-300 hover:scale-105"
                    >
                        "Contact Me"
                    </a>
                </Staged>

                <Staged shown delay_ms=400 class="flex items-center justify-center gap-6 mb-12">
                    <SocialIcons
                        links=content.contact.social.as_slice()
                        class="p-3 rounded-full bg-gray-100 dark:bg-gray-800 hover:bg-gray-200 dark:hover:bg-gray-700 text-gray-700 dark:text-gray-300 transition-colors"
                    />
                </Staged>

                <Staged shown delay_ms=600 class="max-w-4xl mx-auto">
                    <p class="text-sm text-gray-500 dark:text-gray-400 mb-4">
                        "Technologies I work with"
                    </p>
                    <div class="flex flex-wrap items-center justify-center gap-3">
                        {content
                            .hero
                            .technologies
                            .iter()
                            .enumerate()
                            .map(|(i, tech)| {
                                view! {
                                    <Staged shown delay_ms=stagger(700, 100, i) from=Enter::Grow>
                                        <span class=format!(
                                            "inline-block px-4 py-2 rounded-full text-white text-sm font-medium {} hover:scale-105 transition-transform cursor-default",
                                            tech.color,
                                        )>{tech.name.as_str()}</span>
                                    </Staged>
                                }
                            })
                            .collect_view()}
                    </div>
                </Staged>
            </div>
        </section>
    }
}
