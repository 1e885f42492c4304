use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::Duration,
};

use leptos::prelude::{set_timeout_with_handle, TimeoutHandle};
use log::warn;

use crate::scheduler::{Scheduler, Task, TaskId};

/// `setTimeout`-backed scheduler for the browser.
#[derive(Clone, Default)]
pub struct BrowserScheduler {
    handles: Arc<Mutex<HashMap<TaskId, TimeoutHandle>>>,
}

impl BrowserScheduler {
    fn handles(&self) -> MutexGuard<'_, HashMap<TaskId, TimeoutHandle>> {
        self.handles.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Scheduler for BrowserScheduler {
    fn schedule(&self, delay: Duration, task: Task) -> Option<TaskId> {
        let id = TaskId::next();
        let this = self.clone();
        let res = set_timeout_with_handle(
            move || {
                this.handles().remove(&id);
                task();
            },
            delay,
        );
        match res {
            Ok(handle) => {
                self.handles().insert(id, handle);
                Some(id)
            }
            Err(e) => {
                warn!("couldn't schedule {id}: {e:?}");
                None
            }
        }
    }

    fn cancel(&self, id: TaskId) -> bool {
        match self.handles().remove(&id) {
            Some(handle) => {
                handle.clear();
                true
            }
            None => false,
        }
    }
}
