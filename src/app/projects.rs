use leptos::prelude::*;

use crate::content::{registry, Anchor, Icon, Project};
use crate::filter::{CategoryFilter, Selection};
use crate::reveal::stagger;

use super::primitives::{Badge, Card, Glyph, SectionHeading};
use super::reveal::{use_reveal, Staged};

#[component]
pub fn Projects() -> impl IntoView {
    let content = registry();
    let projects = content.projects.as_slice();
    let reveal = use_reveal(content.settings.reveal_threshold);
    let shown = reveal.revealed;
    let filter = RwSignal::new(CategoryFilter::new());

    let buttons = Selection::options()
        .into_iter()
        .map(|option| {
            view! {
                <button
                    class=move || {
                        if filter.with(|f| f.is_selected(option)) {
                            "px-6 py-2 rounded-full transition-all duration-300 bg-blue-600 text-white"
                        } else {
                            "px-6 py-2 rounded-full transition-all duration-300 border border-gray-300 dark:border-gray-600 text-gray-700 dark:text-gray-200 hover:bg-gray-100 dark:hover:bg-gray-700"
                        }
                    }
                    on:click=move |_| filter.update(|f| f.select(option))
                >
                    <Glyph icon=Icon::Filter class="mr-2" />
                    {option.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <section node_ref=reveal.node id=Anchor::Projects.id() class="py-20 bg-white dark:bg-gray-800">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <Staged shown class="text-center mb-16">
                    <SectionHeading
                        title="Featured Projects"
                        subtitle="Here are some of my recent projects that showcase my skills and experience"
                    />
                </Staged>

                <Staged shown delay_ms=200 class="flex flex-wrap justify-center gap-4 mb-12">
                    {buttons}
                </Staged>

                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {move || {
                        filter
                            .with(|f| {
                                f.visible(projects)
                                    .enumerate()
                                    .map(|(i, project)| {
                                        view! {
                                            <Staged shown delay_ms=stagger(400, 100, i)>
                                                <ProjectCard project />
                                            </Staged>
                                        }
                                    })
                                    .collect_view()
                            })
                    }}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <Card class="bg-white dark:bg-gray-900 overflow-hidden hover:shadow-xl hover:scale-105 transition-all duration-300 h-full">
            <div class="relative overflow-hidden">
                <img
                    src=project.image_ref.as_str()
                    alt=project.title.as_str()
                    loading="lazy"
                    class="w-full h-48 object-cover transition-transform duration-300 hover:scale-110"
                />
                <div class="absolute inset-0 bg-gradient-to-t from-black/50 to-transparent"></div>
            </div>
            <div class="p-6">
                <h3 class="text-xl font-bold text-gray-900 dark:text-white mb-2">
                    {project.title.as_str()}
                </h3>
                <p class="text-gray-600 dark:text-gray-300 text-sm mb-4">
                    {project.description.as_str()}
                </p>
                <div class="flex flex-wrap gap-2 mb-4">
                    {project
                        .technologies
                        .iter()
                        .map(|tech| view! { <Badge>{tech.as_str()}</Badge> })
                        .collect_view()}
                </div>
                <div class="flex gap-3">
                    <a
                        href=project.code_url.as_str()
                        target="_blank"
                        rel="noopener noreferrer"
                        class="flex-1 text-center text-sm px-3 py-2 rounded-md border border-gray-300 dark:border-gray-600 hover:bg-gray-100 dark:hover:bg-gray-800"
                    >
                        <Glyph icon=Icon::Github class="mr-2" />
                        "Code"
                    </a>
                    <a
                        href=project.demo_url.as_str()
                        target="_blank"
                        rel="noopener noreferrer"
                        class="flex-1 text-center text-sm px-3 py-2 rounded-md bg-blue-600 hover:bg-blue-700 text-white"
                    >
                        <Glyph icon=Icon::External class="mr-2" />
                        "Live Demo"
                    </a>
                </div>
            </div>
        </Card>
    }
}
