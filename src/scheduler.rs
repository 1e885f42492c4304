use std::{
    fmt,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc, Mutex, PoisonError,
    },
    time::Duration,
};

pub type Task = Box<dyn FnOnce() + Send + 'static>;

static NEXT_TASK_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

impl TaskId {
    pub fn next() -> Self {
        Self(NEXT_TASK_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "task#{}", self.0)
    }
}

/// Runs deferred callbacks. The browser implementation sits on `setTimeout`;
/// [`ManualScheduler`] advances virtual time instead.
pub trait Scheduler: Send + Sync {
    /// Returns `None` if the task could not be queued; it is dropped unrun.
    fn schedule(&self, delay: Duration, task: Task) -> Option<TaskId>;

    /// Returns false if the task already ran or was never scheduled.
    fn cancel(&self, id: TaskId) -> bool;
}

struct Pending {
    id: TaskId,
    due: Duration,
    task: Task,
}

#[derive(Default)]
struct Clock {
    now: Duration,
    pending: Vec<Pending>,
}

/// Virtual-time scheduler; nothing runs until [`ManualScheduler::advance`].
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Arc<Mutex<Clock>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.clock().now
    }

    pub fn pending(&self) -> usize {
        self.clock().pending.len()
    }

    /// Moves time forward, running every task that falls due, earliest first.
    /// Tasks scheduled by a running task are picked up if they are due too.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.clock().now + by;
        let mut ran = 0;
        while let Some(next) = self.pop_due(target) {
            (next.task)();
            ran += 1;
        }
        self.clock().now = target;
        ran
    }

    fn pop_due(&self, target: Duration) -> Option<Pending> {
        let mut clock = self.clock();
        let index = clock
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due <= target)
            .min_by_key(|(_, p)| (p.due, p.id))
            .map(|(i, _)| i)?;
        let next = clock.pending.remove(index);
        clock.now = next.due;
        Some(next)
    }

    fn clock(&self) -> std::sync::MutexGuard<'_, Clock> {
        self.clock.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Task) -> Option<TaskId> {
        let id = TaskId::next();
        let mut clock = self.clock();
        let due = clock.now + delay;
        clock.pending.push(Pending { id, due, task });
        Some(id)
    }

    fn cancel(&self, id: TaskId) -> bool {
        let mut clock = self.clock();
        let before = clock.pending.len();
        clock.pending.retain(|p| p.id != id);
        clock.pending.len() != before
    }
}
