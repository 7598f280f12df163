use crate::{
    foundation::error::{LsysError, LsysResult},
    grammar::{
        command::{Command, CommandSequence, parse_symbols},
        rule::RuleSet,
    },
};

/// Clamp a user-supplied iteration count to the supported range (`>= 1`).
pub fn clamp_iterations(requested: i64) -> u32 {
    u32::try_from(requested.max(1)).unwrap_or(u32::MAX)
}

/// Commands written between two cancellation checks inside one pass.
const CANCEL_CHECK_INTERVAL: usize = 4096;

/// Rewrite `seed` with `rules`, `iterations` times, into a flat command sequence.
///
/// Passes run for depth `iterations, iterations - 1, ..., 0`. Within a pass every
/// `Expand` present at the start of the pass is replaced exactly once and the
/// scan continues after the inserted commands, so symbols introduced by a pass
/// are only rewritten by the next one. At depth 0 every rule contracts to its
/// base move, which leaves no `Expand` behind.
///
/// Any reference to an undefined rule aborts with [`LsysError::Config`] and no
/// partial sequence is returned.
pub fn expand(
    seed: &str,
    rules: &RuleSet,
    turn_angle: f64,
    iterations: u32,
) -> LsysResult<CommandSequence> {
    expand_cancellable(seed, rules, turn_angle, iterations, || false)
        .map(Option::unwrap_or_default)
}

/// [`expand`] that polls `cancelled` before every pass and every
/// few thousand commands within a pass. Returns `Ok(None)` once it reports
/// `true`; no partial sequence escapes.
#[tracing::instrument(skip(rules, cancelled), fields(rules = rules.len()))]
pub fn expand_cancellable(
    seed: &str,
    rules: &RuleSet,
    turn_angle: f64,
    iterations: u32,
    cancelled: impl Fn() -> bool,
) -> LsysResult<Option<CommandSequence>> {
    let iterations = iterations.max(1);

    let mut current = parse_symbols(seed, turn_angle);
    let mut next: Vec<Command> = Vec::with_capacity(current.len().max(64));

    for depth in (0..=iterations).rev() {
        if cancelled() {
            tracing::debug!(depth, "expansion cancelled");
            return Ok(None);
        }
        next.clear();
        let mut budget = CANCEL_CHECK_INTERVAL;
        for cmd in &current {
            match *cmd {
                Command::Expand(name) => {
                    let rule = rules.get(name).ok_or_else(|| {
                        LsysError::config(format!(
                            "grammar references undefined rule '{name}'"
                        ))
                    })?;
                    let body = rule.resolve(depth);
                    next.extend_from_slice(body);
                    budget = budget.saturating_sub(body.len());
                }
                other => {
                    next.push(other);
                    budget = budget.saturating_sub(1);
                }
            }
            if budget == 0 {
                if cancelled() {
                    tracing::debug!(depth, written = next.len(), "expansion cancelled mid-pass");
                    return Ok(None);
                }
                budget = CANCEL_CHECK_INTERVAL;
            }
        }
        std::mem::swap(&mut current, &mut next);
        tracing::debug!(depth, len = current.len(), "expansion pass complete");
    }

    let commands = current
        .into_iter()
        .map(|cmd| {
            cmd.into_draw().ok_or_else(|| {
                LsysError::config("expansion finished with an unresolved rule reference")
            })
        })
        .collect::<LsysResult<Vec<_>>>()?;

    Ok(Some(CommandSequence::new(commands)))
}

#[cfg(test)]
#[path = "../../tests/unit/grammar/expand.rs"]
mod tests;
