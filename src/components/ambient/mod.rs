//! Ambient decorative network behind the interactive content.
//!
//! A 3D point-and-line mesh generated once at mount: points sampled inside a
//! fixed cube, edges kept for every pair closer than a distance threshold.
//! The mesh itself never changes afterwards; each animation frame only
//! re-orients it from a constant spin plus the latest pointer position. It
//! is pure decoration and never sees the analysis data.

mod component;
mod mesh;
mod pointer;

pub use component::AmbientScene;
pub use mesh::{AmbientMesh, Orientation, Vec3};
pub use pointer::{PointerCell, PointerOffset};
