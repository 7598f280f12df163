//! Drawing surfaces.

/// CPU raster surface backed by `vello_cpu`.
pub mod cpu;
/// Surface trait and paint style.
pub mod surface;
