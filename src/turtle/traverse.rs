use crate::{foundation::core::Point, grammar::command::DrawCommand, turtle::pose::Pose};

/// Non-fatal problem found while walking a command sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TraversalWarning {
    /// `BranchEnd` at `index` with nothing on the branch stack; skipped.
    UnmatchedBranchEnd { index: usize },
}

/// One drawing step: a nonzero move from `from` to `to`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Step {
    pub from: Point,
    pub to: Point,
    /// A branch was popped since the previous step, so `from` is a resumed
    /// position rather than the end of the previous segment.
    pub branch_resumed: bool,
}

/// Turtle walking a command sequence one drawing step at a time.
///
/// Used for both the dry run (layout) and the live run (animation); each run
/// owns its own `Turtle`.
#[derive(Clone, Debug)]
pub struct Turtle {
    start: Pose,
    pose: Pose,
    stack: Vec<Pose>,
    cursor: usize,
    pushes: usize,
    pops: usize,
    warnings: Vec<TraversalWarning>,
    report_warnings: bool,
}

impl Turtle {
    /// Turtle that logs every structural warning it records.
    pub fn new(start: Pose) -> Self {
        Self {
            start,
            pose: start,
            stack: Vec::new(),
            cursor: 0,
            pushes: 0,
            pops: 0,
            warnings: Vec::new(),
            report_warnings: true,
        }
    }

    /// Turtle that only records warnings. For replays of a sequence whose
    /// warnings were already logged by the dry run.
    pub fn silent(start: Pose) -> Self {
        Self {
            report_warnings: false,
            ..Self::new(start)
        }
    }

    pub fn reports_warnings(&self) -> bool {
        self.report_warnings
    }

    /// Return to the start pose with an empty branch stack.
    pub fn reset(&mut self) {
        self.pose = self.start;
        self.stack.clear();
        self.cursor = 0;
        self.pushes = 0;
        self.pops = 0;
        self.warnings.clear();
    }

    pub fn pose(&self) -> Pose {
        self.pose
    }

    pub fn stack_depth(&self) -> usize {
        self.stack.len()
    }

    pub fn pushes(&self) -> usize {
        self.pushes
    }

    pub fn pops(&self) -> usize {
        self.pops
    }

    pub fn warnings(&self) -> &[TraversalWarning] {
        &self.warnings
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_exhausted(&self, commands: &[DrawCommand]) -> bool {
        self.cursor >= commands.len()
    }

    /// Advance to the next nonzero move, applying every turn and branch
    /// command on the way. `None` once the sequence is exhausted.
    pub fn next_step(&mut self, commands: &[DrawCommand], scale: f64) -> Option<Step> {
        let mut branch_resumed = false;
        while let Some(&cmd) = commands.get(self.cursor) {
            let index = self.cursor;
            self.cursor += 1;
            match cmd {
                DrawCommand::Turn(delta) => self.pose.angle += delta,
                DrawCommand::BranchStart => {
                    self.stack.push(self.pose);
                    self.pushes += 1;
                }
                DrawCommand::BranchEnd => match self.stack.pop() {
                    Some(saved) => {
                        self.pose = saved;
                        self.pops += 1;
                        branch_resumed = true;
                    }
                    None => {
                        if self.report_warnings {
                            tracing::warn!(index, "unmatched branch end; skipping");
                        }
                        self.warnings.push(TraversalWarning::UnmatchedBranchEnd { index });
                    }
                },
                DrawCommand::Move(distance) if distance == 0.0 => {}
                DrawCommand::Move(distance) => {
                    let from = self.pose.point();
                    self.pose = self.pose.advanced(distance, scale);
                    return Some(Step {
                        from,
                        to: self.pose.point(),
                        branch_resumed,
                    });
                }
            }
        }
        None
    }
}

#[cfg(test)]
#[path = "../../tests/unit/turtle/traverse.rs"]
mod tests;
