//! Fixed-size worker pool with a bounded task queue.
//!
//! Backpressure policy: when the queue is full, `execute` runs the task
//! inline on the submitting thread instead of blocking or dropping it. The
//! queue therefore bounds backlog, not throughput.
//!
//! Shutdown closes the queue, waits up to a grace period for in-flight and
//! queued tasks to drain, then detaches any workers that are still running
//! (threads cannot be killed; detaching is the forced-cancellation step).

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{self, TrySendError};
use std::sync::{Arc, Condvar, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

type Job = Box<dyn FnOnce() + Send + 'static>;

/// Tracks outstanding (queued + running) tasks for the shutdown wait.
struct PoolState {
    outstanding: AtomicUsize,
    lock: Mutex<()>,
    drained: Condvar,
}

impl PoolState {
    fn task_started(&self) {
        self.outstanding.fetch_add(1, Ordering::SeqCst);
    }

    fn task_finished(&self) {
        if self.outstanding.fetch_sub(1, Ordering::SeqCst) == 1 {
            let _guard = self.lock.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
            self.drained.notify_all();
        }
    }
}

/// A fixed set of worker threads fed from one bounded channel.
pub struct WorkerPool {
    sender: Option<mpsc::SyncSender<Job>>,
    workers: Vec<JoinHandle<()>>,
    state: Arc<PoolState>,
}

impl WorkerPool {
    /// Spawns `threads` workers sharing a queue of `queue_depth` slots.
    /// Both values are forced to at least 1.
    #[must_use]
    pub fn new(threads: usize, queue_depth: usize) -> Self {
        let threads = threads.max(1);
        let (sender, receiver) = mpsc::sync_channel::<Job>(queue_depth.max(1));
        let receiver = Arc::new(Mutex::new(receiver));
        let state = Arc::new(PoolState {
            outstanding: AtomicUsize::new(0),
            lock: Mutex::new(()),
            drained: Condvar::new(),
        });

        let workers = (0..threads)
            .map(|i| {
                let receiver = Arc::clone(&receiver);
                std::thread::Builder::new()
                    .name(format!("jmetrics-worker-{i}"))
                    .spawn(move || loop {
                        let job = {
                            let guard = receiver
                                .lock()
                                .unwrap_or_else(std::sync::PoisonError::into_inner);
                            guard.recv()
                        };
                        match job {
                            Ok(job) => job(),
                            // Channel closed and drained: worker retires
                            Err(_) => break,
                        }
                    })
                    .unwrap_or_else(|_| {
                        // Spawn failure leaves the pool smaller; submissions
                        // still complete through the caller-runs path
                        std::thread::spawn(|| {})
                    })
            })
            .collect();

        Self {
            sender: Some(sender),
            workers,
            state,
        }
    }

    /// Number of worker threads.
    #[must_use]
    pub fn worker_count(&self) -> usize {
        self.workers.len()
    }

    /// Submits a task. If the queue is full (or the pool is shutting down)
    /// the task runs synchronously on the calling thread.
    pub fn execute<F>(&self, job: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.state.task_started();
        let state = Arc::clone(&self.state);
        let wrapped: Job = Box::new(move || {
            job();
            state.task_finished();
        });

        let Some(sender) = &self.sender else {
            wrapped();
            return;
        };
        match sender.try_send(wrapped) {
            Ok(()) => {}
            Err(TrySendError::Full(job) | TrySendError::Disconnected(job)) => {
                // Caller-runs backpressure: the submitting thread does the
                // work itself rather than dropping it
                job();
            }
        }
    }

    /// Closes the queue and waits up to `grace` for all outstanding tasks.
    /// Returns `true` when everything drained; `false` when the grace
    /// period expired and the remaining workers were detached.
    pub fn shutdown(mut self, grace: Duration) -> bool {
        // Closing the channel lets idle workers retire immediately
        self.sender = None;

        let deadline = Instant::now() + grace;
        let mut guard = self
            .state
            .lock
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        while self.state.outstanding.load(Ordering::SeqCst) > 0 {
            let now = Instant::now();
            if now >= deadline {
                // Forced cancellation: abandon the workers; they finish
                // their current task in the background
                self.workers.clear();
                return false;
            }
            let (g, _timeout) = self
                .state
                .drained
                .wait_timeout(guard, deadline - now)
                .unwrap_or_else(std::sync::PoisonError::into_inner);
            guard = g;
        }
        drop(guard);

        for worker in self.workers.drain(..) {
            let _ = worker.join();
        }
        true
    }
}

impl Drop for WorkerPool {
    fn drop(&mut self) {
        // Close the queue so workers retire instead of blocking forever
        self.sender = None;
        for worker in self.workers.drain(..) {
            let _ = worker.join();
        }
    }
}
