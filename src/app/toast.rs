use std::{
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
    time::Duration,
};

use leptos::prelude::*;

use crate::notify::{Notification, NotificationKind, Notifier};
use crate::scheduler::Scheduler;

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
}

/// The notification surface: a reactive stack of toasts that expire on their own.
#[derive(Clone)]
pub struct Toasts {
    items: ArcRwSignal<Vec<Toast>>,
    next_id: Arc<AtomicU64>,
    scheduler: Arc<dyn Scheduler>,
    ttl: Duration,
}

impl Toasts {
    pub fn new(scheduler: Arc<dyn Scheduler>, ttl: Duration) -> Self {
        Self {
            items: ArcRwSignal::new(Vec::new()),
            next_id: Arc::new(AtomicU64::new(0)),
            scheduler,
            ttl,
        }
    }

    pub fn list(&self) -> Vec<Toast> {
        self.items.get()
    }

    pub fn dismiss(&self, id: u64) {
        self.items.update(|items| items.retain(|t| t.id != id));
    }
}

impl Notifier for Toasts {
    fn notify(&self, notification: Notification) {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        log::debug!("toast {id}: {}", notification.title);
        self.items.update(|items| items.push(Toast { id, notification }));
        let this = self.clone();
        if self
            .scheduler
            .schedule(self.ttl, Box::new(move || this.dismiss(id)))
            .is_none()
        {
            log::warn!("toast {id} will stay until dismissed");
        }
    }
}

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<Toasts>();
    let each = {
        let toasts = toasts.clone();
        move || toasts.list()
    };
    view! {
        <ol class="fixed bottom-4 right-4 z-50 flex flex-col gap-2 w-full max-w-sm" aria-live="polite">
            <For
                each=each
                key=|toast: &Toast| toast.id
                children=move |toast: Toast| {
                    let toasts = toasts.clone();
                    let id = toast.id;
                    let accent = match toast.notification.kind {
                        NotificationKind::Success => "border-green-500",
                        NotificationKind::Error => "border-red-500",
                    };
                    view! {
                        <li class=format!(
                            "toast-enter p-4 rounded-lg shadow-lg border-l-4 {accent} bg-white text-gray-900 dark:bg-gray-800 dark:text-white",
                        )>
                            <div class="flex items-start justify-between gap-4">
                                <div>
                                    <p class="font-semibold">{toast.notification.title}</p>
                                    <p class="text-sm text-gray-600 dark:text-gray-300">
                                        {toast.notification.description}
                                    </p>
                                </div>
                                <button
                                    class="text-gray-500 hover:text-gray-900 dark:hover:text-white"
                                    aria-label="Dismiss"
                                    on:click=move |_| toasts.dismiss(id)
                                >
                                    "✕"
                                </button>
                            </div>
                        </li>
                    }
                }
            />
        </ol>
    }
}
