use core::fmt;
use parking_lot::RwLock;
use serde::Serialize;
use std::borrow::Borrow;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::{Mutex, mpsc};

/// Opaque identifier for a registered job.
///
/// Ids are the decimal encoding of a process-wide monotonic counter, but the
/// contract is uniqueness, not format: clients must treat them as opaque
/// tokens. An id is never reused for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct JobId(String);

impl JobId {
    fn from_counter(value: u64) -> Self {
        Self(value.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Lets the registry map be probed with the raw header value. `JobId` hashes
// and compares exactly like its inner string.
impl Borrow<str> for JobId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Shared handle to one job's output stream.
///
/// Wraps the receiving half of the job's single-slot channel. Concurrent
/// retrieval requests serialize on the inner async mutex, so each buffered
/// permutation is delivered to exactly one requester.
#[derive(Clone)]
pub struct JobStream {
    rx: Arc<Mutex<mpsc::Receiver<Vec<i64>>>>,
}

impl JobStream {
    pub fn new(rx: mpsc::Receiver<Vec<i64>>) -> Self {
        Self {
            rx: Arc::new(Mutex::new(rx)),
        }
    }

    /// Receives the next permutation, waiting for the producer if the slot is
    /// empty. Returns `None` once the producer has closed the channel; the
    /// closed state is permanent, so repeated calls keep returning `None`.
    pub async fn recv(&self) -> Option<Vec<i64>> {
        self.rx.lock().await.recv().await
    }
}

/// Concurrency-safe mapping from job id to output stream.
///
/// Lookups take a shared lock and proceed unimpeded by each other;
/// registration briefly takes the exclusive lock. Entries are never removed:
/// an exhausted job stays resident and keeps answering with the
/// empty-sequence response until process exit.
pub struct JobRegistry {
    last_id: AtomicU64,
    jobs: RwLock<HashMap<JobId, JobStream>>,
}

impl JobRegistry {
    pub fn new() -> Self {
        Self {
            last_id: AtomicU64::new(0),
            jobs: RwLock::new(HashMap::new()),
        }
    }

    /// Returns a fresh, never-before-issued id.
    ///
    /// Uses a relaxed atomic increment; uniqueness does not depend on any
    /// ordering between allocations on different threads.
    pub fn allocate_id(&self) -> JobId {
        JobId::from_counter(self.last_id.fetch_add(1, Ordering::Relaxed) + 1)
    }

    /// Associates `id` with `stream`.
    ///
    /// Ids come from [`allocate_id`](Self::allocate_id) immediately before
    /// registration, so the entry cannot already exist.
    pub fn register(&self, id: JobId, stream: JobStream) {
        self.jobs.write().insert(id, stream);
    }

    /// Looks up the stream for `id`, returning `None` for unknown ids.
    pub fn lookup(&self, id: &str) -> Option<JobStream> {
        self.jobs.read().get(id).cloned()
    }
}

impl Default for JobRegistry {
    fn default() -> Self {
        Self::new()
    }
}
