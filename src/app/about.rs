use leptos::prelude::*;

use crate::content::{registry, Anchor};
use crate::reveal::stagger;

use super::primitives::{Badge, Card, SectionHeading};
use super::reveal::{use_reveal, Enter, Staged};

#[component]
pub fn About() -> impl IntoView {
    let content = registry();
    let reveal = use_reveal(content.settings.reveal_threshold);
    let shown = reveal.revealed;

    view! {
        <section node_ref=reveal.node id=Anchor::About.id() class="py-20 bg-gray-50 dark:bg-gray-900">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <Staged shown class="text-center mb-16">
                    <SectionHeading title="About Me" />
                </Staged>

                <div class="grid md:grid-cols-2 gap-12 items-center">
                    <Staged shown delay_ms=200 from=Enter::Left>
                        <Card class="p-8 bg-white dark:bg-gray-800">
                            <h3 class="text-2xl font-bold text-gray-900 dark:text-white mb-6">
                                "My Journey"
                            </h3>
                            {content
                                .about
                                .journey
                                .iter()
                                .map(|paragraph| {
                                    view! {
                                        <p class="text-gray-600 dark:text-gray-300 mb-4 leading-relaxed">
                                            {paragraph.as_str()}
                                        </p>
                                    }
                                })
                                .collect_view()}
                        </Card>
                    </Staged>

                    <Staged shown delay_ms=400 from=Enter::Right class="space-y-8">
                        <h3 class="text-2xl font-bold text-gray-900 dark:text-white mb-6">
                            "Technical Skills"
                        </h3>
                        {content
                            .about
                            .skills
                            .iter()
                            .enumerate()
                            .map(|(i, group)| {
                                view! {
                                    <Staged shown delay_ms=stagger(600, 100, i) class="mb-6">
                                        <h4 class="text-lg font-semibold text-gray-900 dark:text-white mb-3">
                                            {group.category.as_str()}
                                        </h4>
                                        <div class="flex flex-wrap gap-2">
                                            {group
                                                .skills
                                                .iter()
                                                .map(|skill| view! { <Badge>{skill.as_str()}</Badge> })
                                                .collect_view()}
                                        </div>
                                    </Staged>
                                }
                            })
                            .collect_view()}
                    </Staged>
                </div>
            </div>
        </section>
    }
}
