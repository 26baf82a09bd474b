//! WebGPU rendering module
//!
//! Draws the simulation's painter primitives as a flat-colored triangle list.

pub mod painter;
pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use painter::{TextLabel, VertexPainter, overlay_html};
pub use pipeline::RenderState;
