mod align;
mod bounds;
mod flatten;
mod geometry;
mod interleave;
mod model;
mod model_builder;
mod transform;

pub use align::{align, IndexingMode};
pub use bounds::{unitize_points, Bounds, Unitize};
pub use flatten::flatten;
pub use geometry::{DrawPath, FlatGeometry, GeometryBuffer, IndexedGeometry};
pub use interleave::{deinterleave, interleave, VertexAttribute, VertexLayout};
pub use model::Model;
pub use model_builder::{build_geometry, build_scene_model, LoadOptions, SceneModel};
pub use transform::{PhongMaterial, TransformState};
