//! egui-backed window collaborators: font loading, pointer input and slide
//! rendering.

pub mod input;
pub mod platform;
pub mod render;
