use std::path::Path;

use log::{error, info};

use crate::loaders::obj::ObjError;

use super::align::IndexingMode;
use super::geometry::GeometryBuffer;
use super::model::Model;
use super::transform::TransformState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    pub indexing: IndexingMode,
    pub unitize: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            indexing: IndexingMode::PerCorner,
            unitize: true,
        }
    }
}

/// Immutable geometry paired with the transform state the scene driver animates.
#[derive(Debug, Clone, Default)]
pub struct SceneModel {
    pub geometry: GeometryBuffer,
    pub transform: TransformState,
}

impl SceneModel {
    /// Never fails: a model that cannot be loaded becomes empty geometry.
    pub fn load_or_empty(
        model_path: &Path,
        options: &LoadOptions,
        transform: TransformState,
    ) -> Self {
        let geometry = match build_geometry(model_path, options) {
            Ok(geometry) => geometry,
            Err(err) => {
                error!(
                    "failed to load model '{}', continuing with an empty model: {}",
                    model_path.display(),
                    err
                );
                GeometryBuffer::empty()
            }
        };

        Self {
            geometry,
            transform,
        }
    }
}

pub fn build_scene_model(
    model_path: &Path,
    options: &LoadOptions,
    transform: TransformState,
) -> Result<SceneModel, ObjError> {
    let geometry = build_geometry(model_path, options)?;
    Ok(SceneModel {
        geometry,
        transform,
    })
}

/// parse -> align -> flatten -> unitize (optional) -> interleave
pub fn build_geometry(
    model_path: &Path,
    options: &LoadOptions,
) -> Result<GeometryBuffer, ObjError> {
    let mut model = Model::new(model_path)?;
    model.derive(options.indexing);
    if options.unitize {
        model.unitize();
    }

    let geometry = model.freeze();
    info!(
        "loaded '{}': {} triangles, normals: {}, texcoords: {}",
        model_path.display(),
        geometry.triangle_count(),
        geometry.has_normals(),
        geometry.has_texture_coords()
    );
    Ok(geometry)
}
