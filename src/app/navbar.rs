use leptos::prelude::*;

use crate::content::{registry, Anchor, AppearanceMode};

use super::Appearance;

#[component]
pub fn Navbar() -> impl IntoView {
    let appearance = expect_context::<Appearance>();
    let site = &registry().site;
    let (open, set_open) = signal(false);

    let links = move |class: &'static str| {
        Anchor::ALL
            .into_iter()
            .map(|anchor| {
                view! {
                    <a href=anchor.href() class=class on:click=move |_| set_open.set(false)>
                        {anchor.label()}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <nav class="fixed top-0 inset-x-0 z-40 backdrop-blur bg-white/80 dark:bg-gray-900/80 shadow-sm">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    <a href=Anchor::Home.href() class="text-xl font-bold text-gray-900 dark:text-white">
                        {site.name.as_str()}
                    </a>
                    <div class="hidden md:flex items-center gap-8">
                        {links("text-gray-600 dark:text-gray-300 hover:text-blue-600 dark:hover:text-blue-400 transition-colors")}
                    </div>
                    <div class="flex items-center gap-2">
                        <button
                            class="p-2 rounded-full hover:bg-gray-100 dark:hover:bg-gray-800 transition-colors"
                            title=move || format!("Appearance: {}", appearance.chosen.get().label())
                            aria-label="Toggle appearance"
                            on:click=move |_| appearance.cycle()
                        >
                            {move || match appearance.chosen.get() {
                                AppearanceMode::System => "🖥",
                                _ if appearance.resolved.get() == AppearanceMode::Dark => "🌙",
                                _ => "☀",
                            }}
                        </button>
                        <button
                            class="md:hidden p-2 rounded-md hover:bg-gray-100 dark:hover:bg-gray-800"
                            aria-label="Toggle navigation"
                            on:click=move |_| set_open.update(|o| *o = !*o)
                        >
                            "☰"
                        </button>
                    </div>
                </div>
                <Show when=move || open.get()>
                    <div class="md:hidden flex flex-col gap-4 pb-4">
                        {links("text-gray-600 dark:text-gray-300 hover:text-blue-600")}
                    </div>
                </Show>
            </div>
        </nav>
    }
}
