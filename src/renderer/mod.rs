//! Rendering module
//!
//! `scene` turns a `GameState` into a backend-neutral `Frame` of rectangles,
//! circles and text labels. Shapes are tessellated into triangles and drawn by
//! the WebGPU pipeline; labels are laid out by the host (DOM overlay).

pub mod palette;
pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use palette::{Palette, Rgb};
pub use pipeline::RenderState;
pub use scene::{Frame, Label, Shape, compose};
pub use vertex::Vertex;
