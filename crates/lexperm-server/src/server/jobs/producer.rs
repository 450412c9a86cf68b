use super::registry::JobId;
use lexperm::{PermuteStatus, Permuter, SortedSet};
use tokio::sync::mpsc;

/// Producer task for a single job.
///
/// Starting from the sorted arrangement, repeatedly steps the permutation
/// engine and hands each successor to the job's channel. The channel has a
/// single slot, so `send` parks until a consumer receives the previous value;
/// the producer never runs more than one permutation ahead.
///
/// On exhaustion the task drops `tx`, closing the channel, and terminates.
/// There is no error path: set validity was enforced before the task was
/// spawned, and a closed receiving side (only possible at process teardown,
/// since the registry holds it for the process lifetime) just ends the task
/// early.
///
/// # Arguments
///
/// - `job_id`: Identifier of the owning job, used in logs.
/// - `set`: The validated set to permute.
/// - `tx`: Sending half of the job's single-slot channel. This task is its
///   sole writer.
pub async fn producer_loop(job_id: JobId, set: SortedSet, tx: mpsc::Sender<Vec<i64>>) {
    tracing::debug!(%job_id, set_size = set.len(), "producer started");

    let mut permuter = Permuter::new(set);
    loop {
        match permuter.advance() {
            PermuteStatus::Ready => {
                if tx.send(permuter.current().to_vec()).await.is_err() {
                    tracing::debug!(%job_id, "consumer side closed, producer exiting");
                    return;
                }
            }
            PermuteStatus::Exhausted => break,
        }
    }

    tracing::debug!(%job_id, "permutations exhausted");
}
