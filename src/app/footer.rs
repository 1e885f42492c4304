use leptos::prelude::*;

use crate::content::{copyright_year, registry, Anchor};

use super::primitives::SocialIcons;

#[component]
pub fn Footer() -> impl IntoView {
    let content = registry();
    let name = content.site.name.as_str();
    let year = copyright_year().map(|y| format!("© {y} ")).unwrap_or_default();

    view! {
        <footer class="bg-gray-100 dark:bg-gray-900 text-gray-900 dark:text-white py-12">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="grid md:grid-cols-3 gap-8">
                    <div>
                        <h3 class="text-2xl font-bold mb-4">{name}</h3>
                        <p class="text-gray-600 dark:text-gray-400 mb-6">{content.footer.blurb.as_str()}</p>
                        <div class="flex space-x-4">
                            <SocialIcons
                                links=content.contact.social.as_slice()
                                class="p-2 bg-gray-200 dark:bg-gray-800 rounded-lg hover:bg-gray-300 dark:hover:bg-gray-700 transition-colors"
                            />
                        </div>
                    </div>

                    <div>
                        <h4 class="text-lg font-semibold mb-4">"Quick Links"</h4>
                        <ul class="space-y-2">
                            {Anchor::ALL
                                .into_iter()
                                .map(|anchor| {
                                    view! {
                                        <li>
                                            <a
                                                href=anchor.href()
                                                class="text-gray-600 dark:text-gray-400 hover:text-gray-900 dark:hover:text-white transition-colors"
                                            >
                                                {anchor.label()}
                                            </a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>

                    <div>
                        <h4 class="text-lg font-semibold mb-4">"Technologies"</h4>
                        <div class="flex flex-wrap gap-2">
                            {content
                                .footer
                                .technologies
                                .iter()
                                .map(|tech| {
                                    view! {
                                        <span class="px-3 py-1 bg-gray-200 dark:bg-gray-800 text-gray-700 dark:text-gray-300 rounded-full text-sm">
                                            {tech.as_str()}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>

                <div class="border-t border-gray-300 dark:border-gray-800 mt-12 pt-8">
                    <p class="text-center text-gray-600 dark:text-gray-400">
                        {year} {name} ". Made with " <span class="text-red-500">"♥"</span>
                        " and lots of coffee."
                    </p>
                </div>
            </div>
        </footer>
    }
}
