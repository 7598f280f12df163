//! Turtle interpretation of draw commands.

pub mod normalize;
pub mod pose;
pub mod traverse;
