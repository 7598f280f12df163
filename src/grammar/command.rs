/// A single grammar character: one of the structural literals or a rule name.
pub type Symbol = char;

pub const TURN_LEFT: Symbol = '+';
pub const TURN_RIGHT: Symbol = '-';
pub const BRANCH_START: Symbol = '[';
pub const BRANCH_END: Symbol = ']';

pub fn is_structural(symbol: Symbol) -> bool {
    matches!(symbol, TURN_LEFT | TURN_RIGHT | BRANCH_START | BRANCH_END)
}

/// Command vocabulary used while rewriting.
///
/// `Expand` only exists during expansion; the sequence handed to the turtle
/// stages is made of [`DrawCommand`], which has no such variant.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Command {
    Move(f64),
    Turn(f64),
    BranchStart,
    BranchEnd,
    Expand(Symbol),
}

impl Command {
    /// Translate one grammar character with the given turn angle (degrees).
    pub fn from_symbol(symbol: Symbol, turn_angle: f64) -> Self {
        match symbol {
            TURN_LEFT => Self::Turn(turn_angle),
            TURN_RIGHT => Self::Turn(-turn_angle),
            BRANCH_START => Self::BranchStart,
            BRANCH_END => Self::BranchEnd,
            name => Self::Expand(name),
        }
    }

    /// `None` for `Expand`, which has no drawing meaning.
    pub fn into_draw(self) -> Option<DrawCommand> {
        match self {
            Self::Move(d) => Some(DrawCommand::Move(d)),
            Self::Turn(a) => Some(DrawCommand::Turn(a)),
            Self::BranchStart => Some(DrawCommand::BranchStart),
            Self::BranchEnd => Some(DrawCommand::BranchEnd),
            Self::Expand(_) => None,
        }
    }
}

pub fn parse_symbols(text: &str, turn_angle: f64) -> Vec<Command> {
    text.chars()
        .map(|c| Command::from_symbol(c, turn_angle))
        .collect()
}

/// Fully expanded turtle instruction.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum DrawCommand {
    Move(f64),
    Turn(f64),
    BranchStart,
    BranchEnd,
}

impl DrawCommand {
    /// Nonzero moves are the only commands that produce a drawing step.
    pub fn is_drawing_move(self) -> bool {
        matches!(self, Self::Move(d) if d != 0.0)
    }
}

/// Expand-free command sequence produced by the expansion engine.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct CommandSequence(Vec<DrawCommand>);

impl CommandSequence {
    pub fn new(commands: Vec<DrawCommand>) -> Self {
        Self(commands)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[DrawCommand] {
        &self.0
    }

    /// Copy of this sequence with every move distance multiplied by `k`.
    pub fn scaled_moves(&self, k: f64) -> Self {
        Self(
            self.0
                .iter()
                .map(|c| match *c {
                    DrawCommand::Move(d) => DrawCommand::Move(d * k),
                    other => other,
                })
                .collect(),
        )
    }

    pub fn count_drawing_moves(&self) -> usize {
        self.0.iter().filter(|c| c.is_drawing_move()).count()
    }
}

impl std::ops::Deref for CommandSequence {
    type Target = [DrawCommand];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/grammar/command.rs"]
mod tests;
