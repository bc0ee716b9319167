//! Harness runner: wires worlds into the search driver and enforces
//! deadlines.
//!
//! # Deadline protocol
//!
//! ```text
//! spawn worker(job, flag) → wait(deadline)
//!   → finished?  return outcome
//!   → raise flag → wait(grace)
//!       → finished?  return partial outcome
//!       → detach worker, return RunError::Abandoned
//! ```
//!
//! A thread cannot be killed, so an abandoned worker keeps running until
//! its job returns; its result is dropped.

use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use thiserror::Error;
use tracing::{info, warn};

use lodestone_search::{SearchBuilder, SearchError, SearchOutcome, SearchPolicy, StopFlag};

use crate::contract::SearchWorld;

/// Error during a harness run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RunError {
    /// The search configuration was rejected before running.
    #[error("search rejected: {0}")]
    Search(#[from] SearchError),
    /// The worker did not return within `deadline + grace`.
    #[error("worker ignored the stop flag for {grace:?} after the {deadline:?} deadline")]
    Abandoned { deadline: Duration, grace: Duration },
    /// The worker thread panicked.
    #[error("search worker panicked")]
    WorkerPanicked,
}

/// Search `world` under `policy` with its value function and a single
/// optimistic estimator. Patterns are reported in rendered form.
///
/// # Errors
///
/// Returns [`SearchError`] if `policy` does not validate.
pub fn search_world<W: SearchWorld>(
    world: &W,
    policy: SearchPolicy,
    stop: StopFlag,
) -> Result<SearchOutcome<String>, SearchError> {
    info!(world = world.world_id(), "running world");
    let search = SearchBuilder::new(
        world.root(),
        |n: &W::Node| world.successors(n),
        |n: &W::Node| world.value(n),
        |n: W::Node| world.render(&n),
    )
    .estimator(|n: &W::Node| world.optimistic_estimate(n))
    .policy(policy)
    .stop_flag(stop)
    .build()?;
    Ok(search.run())
}

/// Run `job` on a worker thread with a fresh [`StopFlag`], raising the
/// flag once `deadline` has passed.
///
/// # Errors
///
/// - [`RunError::Search`] if the job rejected its configuration.
/// - [`RunError::Abandoned`] if the job is still running `grace` after the
///   flag was raised.
/// - [`RunError::WorkerPanicked`] if the job panicked.
pub fn run_with_deadline<R, F>(
    job: F,
    deadline: Duration,
    grace: Duration,
) -> Result<SearchOutcome<R>, RunError>
where
    R: Send + 'static,
    F: FnOnce(StopFlag) -> Result<SearchOutcome<R>, SearchError> + Send + 'static,
{
    let stop = StopFlag::new();
    let worker_stop = stop.clone();
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        // The receiver is gone once the runner has abandoned us.
        let _ = tx.send(job(worker_stop));
    });

    match rx.recv_timeout(deadline) {
        Ok(result) => return result.map_err(RunError::from),
        Err(mpsc::RecvTimeoutError::Disconnected) => return Err(RunError::WorkerPanicked),
        Err(mpsc::RecvTimeoutError::Timeout) => {}
    }

    info!(?deadline, "deadline reached; requesting stop");
    stop.request_stop();
    match rx.recv_timeout(grace) {
        Ok(result) => result.map_err(RunError::from),
        Err(mpsc::RecvTimeoutError::Disconnected) => Err(RunError::WorkerPanicked),
        Err(mpsc::RecvTimeoutError::Timeout) => {
            warn!(?deadline, ?grace, "search worker ignored stop flag; abandoning");
            Err(RunError::Abandoned { deadline, grace })
        }
    }
}
