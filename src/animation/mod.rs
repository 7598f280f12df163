//! Tick-driven animation: background generation, the live turtle, and the
//! `Preparing/Drawing/Fading/Error` engine that ties them together.

/// Per-tick turtle drawing and trail fading.
pub mod animator;
/// Phase state machine driving generation and animation.
pub mod engine;
/// Expansion plus normalization, synchronously or on the rayon pool.
pub mod generation;
