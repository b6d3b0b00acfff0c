//! Wavefront OBJ loading and buffer layout for a small teaching viewer.
//!
//! `loaders::obj` parses triangle meshes into raw attribute arrays,
//! `scene::Model` aligns, flattens and unitizes them, and
//! `scene::GeometryBuffer` holds the interleaved buffers a renderer uploads.

pub mod app;
pub mod export;
pub mod loaders;
pub mod math;
pub mod scene;
