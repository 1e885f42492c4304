use std::sync::Arc;

use leptos::{ev::Event, prelude::*};

use crate::contact::{ContactForm, Field, FormSnapshot};
use crate::content::{registry, Anchor, Icon};
use crate::scheduler::Scheduler;

use super::primitives::{Card, Glyph, SectionHeading, SocialIcons};
use super::reveal::{use_reveal, Enter, Staged};
use super::toast::Toasts;

const INPUT_CLASS: &str = "w-full px-4 py-2 rounded-md border border-gray-300 dark:border-gray-600 bg-white dark:bg-gray-900 text-gray-900 dark:text-white focus:outline-none focus:ring-2 focus:ring-blue-500";

#[component]
pub fn Contact() -> impl IntoView {
    let content = registry();
    let reveal = use_reveal(content.settings.reveal_threshold);
    let shown = reveal.revealed;

    view! {
        <section node_ref=reveal.node id=Anchor::Contact.id() class="py-20 bg-gray-50 dark:bg-gray-900">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <Staged shown class="text-center mb-16">
                    <SectionHeading title="Get In Touch" subtitle=content.contact.blurb.as_str() />
                </Staged>

                <div class="grid lg:grid-cols-2 gap-12">
                    <Staged shown delay_ms=200 from=Enter::Left>
                        <MessageForm />
                    </Staged>
                    <Staged shown delay_ms=400 from=Enter::Right class="space-y-8">
                        <ContactInfo />
                        <Connect />
                    </Staged>
                </div>
            </div>
        </section>
    }
}

/// The contact form; its controller lives and dies with this view.
#[component]
fn MessageForm() -> impl IntoView {
    let settings = &registry().settings;
    let scheduler = expect_context::<Arc<dyn Scheduler>>();
    let toasts = expect_context::<Toasts>();
    let snapshot = RwSignal::new(FormSnapshot::default());

    let form = ContactForm::new(scheduler, Arc::new(toasts), settings.form_config())
        .on_change(move |s| snapshot.set(s.clone()));
    on_cleanup({
        let form = form.clone();
        move || form.dispose()
    });
    let form = StoredValue::new(form);
    let submitting = Signal::derive(move || snapshot.with(|s| s.submitting));

    view! {
        <Card class="p-8 bg-white dark:bg-gray-800">
            <h3 class="text-2xl font-bold text-gray-900 dark:text-white mb-6">"Send a Message"</h3>
            <form
                class="space-y-6"
                on:submit=move |ev| {
                    ev.prevent_default();
                    let outcome = form.with_value(|f| f.submit());
                    log::debug!("contact form submit: {outcome:?}");
                }
            >
                <DraftInput field=Field::Name label="Name" form snapshot />
                <DraftInput field=Field::Email label="Email" form snapshot />
                <DraftInput field=Field::Body label="Message" form snapshot />
                <button
                    type="submit"
                    disabled=submitting
                    class="w-full px-6 py-3 rounded-md font-semibold text-white bg-blue-600 hover:bg-blue-700 disabled:opacity-60 disabled:cursor-not-allowed transition-colors"
                >
                    {move || if submitting.get() { "Sending..." } else { "Send Message" }}
                </button>
            </form>
        </Card>
    }
}

/// One draft field, mirrored from the controller's last snapshot.
#[component]
fn DraftInput(
    field: Field,
    label: &'static str,
    form: StoredValue<ContactForm>,
    snapshot: RwSignal<FormSnapshot>,
) -> impl IntoView {
    let id = format!("contact-{field}");
    let value = move || snapshot.with(|s| s.draft.get(field).to_string());
    let on_input = move |ev: Event| {
        let text = event_target_value(&ev);
        form.with_value(|f| f.update_field(field, text));
    };
    let input = match field {
        Field::Body => view! {
            <textarea
                id=id.clone()
                name=field.as_str()
                rows="5"
                required
                class=INPUT_CLASS
                prop:value=value
                on:input=on_input
            ></textarea>
        }
        .into_any(),
        Field::Email => view! {
            <input
                id=id.clone()
                type="email"
                name=field.as_str()
                required
                class=INPUT_CLASS
                prop:value=value
                on:input=on_input
            />
        }
        .into_any(),
        Field::Name => view! {
            <input
                id=id.clone()
                type="text"
                name=field.as_str()
                required
                class=INPUT_CLASS
                prop:value=value
                on:input=on_input
            />
        }
        .into_any(),
    };
    view! {
        <div>
            <label for=id class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-2">
                {label}
            </label>
            {input}
        </div>
    }
}

#[component]
fn ContactInfo() -> impl IntoView {
    let channels = &registry().contact.channels;
    view! {
        <Card class="p-8 bg-white dark:bg-gray-800">
            <h3 class="text-2xl font-bold text-gray-900 dark:text-white mb-6">"Contact Information"</h3>
            <div class="space-y-6">
                {channels
                    .iter()
                    .map(|channel| {
                        let value = match &channel.link {
                            Some(link) => view! {
                                <a
                                    href=link.as_str()
                                    class="text-gray-900 dark:text-white hover:text-blue-600 dark:hover:text-blue-400 transition-colors"
                                >
                                    {channel.value.as_str()}
                                </a>
                            }
                            .into_any(),
                            None => view! {
                                <p class="text-gray-900 dark:text-white">{channel.value.as_str()}</p>
                            }
                            .into_any(),
                        };
                        view! {
                            <div class="flex items-center space-x-4">
                                <div class="p-3 bg-blue-100 dark:bg-blue-900 rounded-lg">
                                    <Glyph icon=channel.icon />
                                </div>
                                <div>
                                    <p class="text-sm text-gray-500 dark:text-gray-400">
                                        {channel.label.as_str()}
                                    </p>
                                    {value}
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </Card>
    }
}

#[component]
fn Connect() -> impl IntoView {
    let contact = &registry().contact;
    view! {
        <Card class="p-8 bg-white dark:bg-gray-800">
            <h3 class="text-xl font-bold text-gray-900 dark:text-white mb-6">"Connect With Me"</h3>
            <div class="flex space-x-4 mb-6">
                <SocialIcons
                    links=contact.social.as_slice()
                    class="p-3 bg-gray-100 dark:bg-gray-700 rounded-lg hover:bg-blue-100 dark:hover:bg-blue-900 transition-colors"
                />
            </div>
            <a
                href=contact.resume_url.as_str()
                target="_blank"
                rel="noopener noreferrer"
                class="block w-full text-center px-4 py-2 rounded-md border border-gray-300 dark:border-gray-600 hover:bg-gray-100 dark:hover:bg-gray-700 transition-colors"
            >
                <Glyph icon=Icon::Download class="mr-2" />
                "Download Resume"
            </a>
        </Card>
    }
}
