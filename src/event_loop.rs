//! Single-threaded run-after-delay queue for the UI thread.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

pub type Action = Box<dyn FnOnce()>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timer {
    pub id: TaskId,
    pub delay: Duration,
}

struct Entry {
    id: TaskId,
    due: Duration,
    action: Action,
}

#[derive(Default)]
struct Queue {
    now: Duration,
    next_id: u64,
    entries: Vec<Entry>,
    fresh: Vec<Timer>,
}

impl Queue {
    // Earliest entry due at or before `limit`, ties broken by scheduling order.
    fn pop_due(&mut self, limit: Duration) -> Option<Entry> {
        let index = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.due <= limit)
            .min_by_key(|(_, entry)| (entry.due, entry.id))
            .map(|(index, _)| index)?;
        Some(self.remove(index))
    }

    // An entry that ran must not be handed out as a timer afterwards.
    fn remove(&mut self, index: usize) -> Entry {
        let entry = self.entries.remove(index);
        self.fresh.retain(|timer| timer.id != entry.id);
        entry
    }
}

#[derive(Clone, Default)]
pub struct EventLoop {
    queue: Rc<RefCell<Queue>>,
}

impl EventLoop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.queue.borrow().now
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().entries.len()
    }

    pub fn run_after(&self, delay: Duration, action: impl FnOnce() + 'static) -> TaskId {
        let mut queue = self.queue.borrow_mut();
        let id = TaskId(queue.next_id);
        queue.next_id += 1;
        let due = queue.now + delay;
        queue.entries.push(Entry {
            id,
            due,
            action: Box::new(action),
        });
        queue.fresh.push(Timer { id, delay });
        log::trace!("scheduled {:?} in {:?}", id, delay);
        id
    }

    /// Runs everything due within `by`, in deadline order. Returns how many ran.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.now() + by;
        let mut ran = 0;
        loop {
            let next = {
                let mut queue = self.queue.borrow_mut();
                let next = queue.pop_due(target);
                if let Some(entry) = &next {
                    queue.now = queue.now.max(entry.due);
                }
                next
            };
            match next {
                Some(entry) => {
                    (entry.action)();
                    ran += 1;
                }
                None => break,
            }
        }
        self.queue.borrow_mut().now = target;
        ran
    }

    pub fn fire(&self, id: TaskId) -> bool {
        let entry = {
            let mut queue = self.queue.borrow_mut();
            let Some(index) = queue.entries.iter().position(|entry| entry.id == id) else {
                return false;
            };
            let entry = queue.remove(index);
            queue.now = queue.now.max(entry.due);
            entry
        };
        (entry.action)();
        true
    }

    pub fn take_timers(&self) -> Vec<Timer> {
        std::mem::take(&mut self.queue.borrow_mut().fresh)
    }
}
