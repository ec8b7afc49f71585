//! Blocking task queue and the termination protocol.
//!
//! Workers pop tasks, process them, and push successor tasks back. The
//! queue tracks how many popped tasks are still being processed: a worker
//! that finds the queue empty while that count is non-zero must block,
//! because an in-flight task may yet produce successors. Only
//! `empty ∧ zero in-flight` means the search space is drained.
//!
//! The pop/increment and push/decrement pairs each happen under a single
//! lock acquisition. Splitting them would open a window where the queue
//! looks empty and the counter looks zero while a worker still holds
//! successors it is about to push, and a blocked worker would terminate
//! early with work still pending.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Condvar, Mutex, MutexGuard};

use super::task::Task;

/// Result of a blocking pop.
#[derive(Debug)]
pub enum Popped {
    /// A task to process; the caller owes the queue exactly one
    /// [`TaskQueue::complete`] call for it.
    Task(Task),
    /// No task will ever be available again.
    Terminate,
}

#[derive(Default)]
struct QueueInner {
    tasks: VecDeque<Task>,
    active: usize,
    closed: bool,
}

/// Blocking multi-producer/multi-consumer queue of search tasks.
#[derive(Default)]
pub struct TaskQueue {
    inner: Mutex<QueueInner>,
    available: Condvar,
}

impl TaskQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a task and wake a blocked consumer. Pushes to a closed queue
    /// are dropped: once the exit is found no new work may start.
    pub fn push(&self, task: Task) {
        let mut inner = self.lock();
        if inner.closed {
            return;
        }
        inner.tasks.push_back(task);
        self.available.notify_one();
    }

    /// Remove and return an arbitrary task, blocking while the queue is
    /// empty but other workers may still produce successors.
    ///
    /// Returns [`Popped::Terminate`] once no more work can exist: the queue
    /// was closed, or it is empty with zero tasks in flight.
    pub fn pop(&self) -> Popped {
        let mut inner = self.lock();
        loop {
            if inner.closed {
                return Popped::Terminate;
            }
            if let Some(task) = inner.tasks.pop_front() {
                inner.active += 1;
                return Popped::Task(task);
            }
            if inner.active == 0 {
                // The queue is drained for everyone; wake the other
                // sleepers so they observe the same state.
                self.available.notify_all();
                return Popped::Terminate;
            }
            inner = self
                .available
                .wait(inner)
                .expect("task queue lock poisoned");
        }
    }

    /// Finish one unit of work: push its successor tasks and decrement the
    /// in-flight count in a single critical section.
    pub fn complete(&self, successors: Vec<Task>) {
        let mut inner = self.lock();
        debug_assert!(inner.active > 0, "complete without a matching pop");
        inner.active -= 1;
        if !inner.closed {
            inner.tasks.extend(successors);
        }
        if !inner.tasks.is_empty() || inner.active == 0 {
            self.available.notify_all();
        }
    }

    /// Close the queue: all pending and future pops terminate immediately.
    pub fn close(&self) {
        let mut inner = self.lock();
        inner.closed = true;
        self.available.notify_all();
    }

    /// Number of queued tasks (in-flight work not included).
    pub fn len(&self) -> usize {
        self.lock().tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().tasks.is_empty()
    }

    /// Number of popped tasks whose processing has not completed yet.
    pub fn in_flight(&self) -> usize {
        self.lock().active
    }

    fn lock(&self) -> MutexGuard<'_, QueueInner> {
        self.inner.lock().expect("task queue lock poisoned")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::Position;
    use std::sync::Arc;
    use std::thread;
    use std::time::Duration;

    fn task(row: usize, col: usize) -> Task {
        Task::seed(Position::new(row, col))
    }

    #[test]
    fn test_empty_idle_queue_terminates_immediately() {
        let queue = TaskQueue::new();
        assert!(matches!(queue.pop(), Popped::Terminate));
    }

    #[test]
    fn test_pop_hands_out_pushed_task() {
        let queue = TaskQueue::new();
        queue.push(task(0, 0));

        match queue.pop() {
            Popped::Task(t) => assert_eq!(t.frontier(), Position::new(0, 0)),
            Popped::Terminate => panic!("expected a task"),
        }
        assert_eq!(queue.in_flight(), 1);

        queue.complete(Vec::new());
        assert_eq!(queue.in_flight(), 0);
        assert!(matches!(queue.pop(), Popped::Terminate));
    }

    #[test]
    fn test_complete_pushes_successors_atomically() {
        let queue = TaskQueue::new();
        queue.push(task(0, 0));

        let popped = match queue.pop() {
            Popped::Task(t) => t,
            Popped::Terminate => panic!("expected a task"),
        };
        queue.complete(vec![popped.fork(Position::new(0, 1))]);

        assert_eq!(queue.len(), 1);
        match queue.pop() {
            Popped::Task(t) => assert_eq!(t.frontier(), Position::new(0, 1)),
            Popped::Terminate => panic!("expected the successor"),
        }
        queue.complete(Vec::new());
    }

    #[test]
    fn test_blocked_pop_woken_by_completion() {
        let queue = Arc::new(TaskQueue::new());
        queue.push(task(0, 0));

        // Take the only task so the second consumer has to wait.
        let held = match queue.pop() {
            Popped::Task(t) => t,
            Popped::Terminate => panic!("expected a task"),
        };

        let waiter = {
            let queue = Arc::clone(&queue);
            thread::spawn(move || queue.pop())
        };

        // Give the waiter time to block on the empty queue.
        thread::sleep(Duration::from_millis(50));
        queue.complete(vec![held.fork(Position::new(0, 1))]);

        match waiter.join().unwrap() {
            Popped::Task(t) => assert_eq!(t.frontier(), Position::new(0, 1)),
            Popped::Terminate => panic!("waiter should receive the successor"),
        }
        queue.complete(Vec::new());
    }

    #[test]
    fn test_last_completion_terminates_blocked_pops() {
        let queue = Arc::new(TaskQueue::new());
        queue.push(task(0, 0));

        match queue.pop() {
            Popped::Task(_) => {}
            Popped::Terminate => panic!("expected a task"),
        }

        let waiters: Vec<_> = (0..3)
            .map(|_| {
                let queue = Arc::clone(&queue);
                thread::spawn(move || queue.pop())
            })
            .collect();

        thread::sleep(Duration::from_millis(50));
        queue.complete(Vec::new());

        for waiter in waiters {
            assert!(matches!(waiter.join().unwrap(), Popped::Terminate));
        }
    }

    #[test]
    fn test_close_terminates_blocked_pops() {
        let queue = Arc::new(TaskQueue::new());
        queue.push(task(0, 0));
        match queue.pop() {
            Popped::Task(_) => {}
            Popped::Terminate => panic!("expected a task"),
        }

        let waiter = {
            let queue = Arc::clone(&queue);
            thread::spawn(move || queue.pop())
        };

        thread::sleep(Duration::from_millis(50));
        queue.close();
        assert!(matches!(waiter.join().unwrap(), Popped::Terminate));

        queue.complete(Vec::new());
    }

    #[test]
    fn test_push_after_close_is_dropped() {
        let queue = TaskQueue::new();
        queue.close();
        queue.push(task(0, 0));

        assert!(queue.is_empty());
        assert!(matches!(queue.pop(), Popped::Terminate));
    }

    #[test]
    fn test_many_consumers_drain_and_terminate() {
        let queue = Arc::new(TaskQueue::new());
        for col in 0..32 {
            queue.push(task(0, col));
        }

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let queue = Arc::clone(&queue);
                thread::spawn(move || {
                    let mut drained = 0u32;
                    loop {
                        match queue.pop() {
                            Popped::Task(_) => {
                                queue.complete(Vec::new());
                                drained += 1;
                            }
                            Popped::Terminate => return drained,
                        }
                    }
                })
            })
            .collect();

        let total: u32 = handles.into_iter().map(|h| h.join().unwrap()).sum();
        assert_eq!(total, 32);
        assert!(queue.is_empty());
        assert_eq!(queue.in_flight(), 0);
    }
}
