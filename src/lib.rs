//! `lsys` expands Lindenmayer-system grammars into turtle draw commands and
//! animates them one segment per tick.
//!
//! The pipeline:
//!
//! - Pick a [`GrammarDescription`] from the built-in catalogue (or a [`Config`])
//! - [`expand`] it into a [`CommandSequence`]
//! - [`normalize`] the sequence into a [`Layout`] that fits a [`Viewport`]
//! - Drive a [`DrawingEngine`] against any [`RenderSurface`], such as [`CpuSurface`]
#![forbid(unsafe_code)]

mod foundation;

/// Tick-driven animation engine.
pub mod animation;
/// User-facing configuration snapshot.
pub mod config;
/// Grammar parsing, expansion, and the built-in catalogue.
pub mod grammar;
/// Drawing surfaces.
pub mod render;
/// Turtle traversal and layout normalization.
pub mod turtle;

pub use crate::foundation::core::{BezPath, FrameRGBA, Point, Rgba8, Vec2};
pub use crate::foundation::error::{LsysError, LsysResult};

pub use crate::animation::animator::{Animator, AnimatorStyle, DrawState};
pub use crate::animation::engine::{DrawingEngine, Phase};
pub use crate::animation::generation::{Generated, GenerationTask, generate};
pub use crate::config::{Config, GrammarRequest, Placement};
pub use crate::grammar::catalogue::GrammarDescription;
pub use crate::grammar::command::{Command, CommandSequence, DrawCommand};
pub use crate::grammar::expand::{expand, expand_cancellable};
pub use crate::grammar::rule::{ProductionRule, RuleSet};
pub use crate::render::cpu::CpuSurface;
pub use crate::render::surface::{PaintStyle, RenderSurface};
pub use crate::turtle::normalize::{Layout, Viewport, normalize};
