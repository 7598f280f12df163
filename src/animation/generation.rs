use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
    mpsc::{self, Receiver, TryRecvError},
};

use crate::{
    config::GrammarRequest,
    foundation::error::{LsysError, LsysResult},
    grammar::{
        command::CommandSequence,
        expand::{expand, expand_cancellable},
    },
    turtle::normalize::{Layout, Viewport, normalize},
};

/// Output of one generation run.
#[derive(Clone, Debug)]
pub struct Generated {
    pub commands: CommandSequence,
    pub layout: Layout,
}

/// Expand and normalize synchronously.
pub fn generate(request: &GrammarRequest, viewport: &Viewport) -> LsysResult<Generated> {
    let rules = request.description.rule_set(request.turn_angle)?;
    let commands = expand(&request.seed, &rules, request.turn_angle, request.iterations)?;
    let layout = normalize(&commands, viewport);
    Ok(Generated { commands, layout })
}

/// Expansion that gives up (`Ok(None)`) as soon as `cancelled` reports true.
fn expand_request(
    request: &GrammarRequest,
    cancelled: impl Fn() -> bool,
) -> LsysResult<Option<CommandSequence>> {
    let rules = request.description.rule_set(request.turn_angle)?;
    expand_cancellable(
        &request.seed,
        &rules,
        request.turn_angle,
        request.iterations,
        cancelled,
    )
}

pub(crate) enum TaskPoll {
    Pending,
    Done(LsysResult<Generated>),
}

/// Handle to a background generation run keyed by configuration version.
///
/// Dropping the handle abandons the run; the worker's result is discarded.
pub struct GenerationTask {
    version: u64,
    rx: Receiver<LsysResult<Generated>>,
}

impl GenerationTask {
    /// Start a run on the rayon pool. `latest` holds the newest requested
    /// version; a worker that falls behind it abandons expansion at its next
    /// check, or skips normalization, and sends nothing.
    pub fn spawn(
        request: GrammarRequest,
        viewport: Viewport,
        version: u64,
        latest: Arc<AtomicU64>,
    ) -> Self {
        let (tx, rx) = mpsc::channel();
        rayon::spawn(move || {
            let grammar = request.description.name;
            let span = tracing::debug_span!("generation", version, grammar);
            let _guard = span.enter();

            let superseded = || latest.load(Ordering::Acquire) != version;
            let result = match expand_request(&request, superseded) {
                Ok(Some(commands)) => Ok(commands),
                Ok(None) => {
                    tracing::debug!("superseded during expansion");
                    return;
                }
                Err(err) => Err(err),
            };
            if superseded() {
                tracing::debug!("superseded before normalization");
                return;
            }
            let result = result.map(|commands| {
                let layout = normalize(&commands, &viewport);
                Generated { commands, layout }
            });
            // The receiver is gone when the run was superseded.
            let _ = tx.send(result);
        });
        Self { version, rx }
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub(crate) fn poll(&self) -> TaskPoll {
        match self.rx.try_recv() {
            Ok(result) => TaskPoll::Done(result),
            Err(TryRecvError::Empty) => TaskPoll::Pending,
            Err(TryRecvError::Disconnected) => TaskPoll::Done(Err(worker_lost())),
        }
    }

    /// Block until the run finishes.
    pub fn wait(&self) -> LsysResult<Generated> {
        self.rx.recv().map_err(|_| worker_lost())?
    }
}

fn worker_lost() -> LsysError {
    LsysError::Other(anyhow::anyhow!(
        "generation worker exited without producing a result"
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/animation/generation.rs"]
mod tests;
