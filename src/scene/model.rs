use std::path::Path;

use log::{debug, error};

use crate::loaders::obj::{self, ObjError, RawGeometry};

use super::align::{align, IndexingMode};
use super::bounds::{Bounds, Unitize};
use super::flatten::flatten;
use super::geometry::{FlatGeometry, GeometryBuffer, IndexedGeometry};

/// A model in the middle of derivation.
///
/// Parsing happens in the constructor; `align`, `flatten` and `unitize` are
/// explicit steps run once by the owner before [`Model::freeze`] hands out the
/// read-only [`GeometryBuffer`].
#[derive(Debug, Clone, Default)]
pub struct Model {
    raw: RawGeometry,
    indexed: Option<IndexedGeometry>,
    flat: Option<FlatGeometry>,
}

impl Model {
    /// constructor, expects a filepath to a Wavefront OBJ file.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Model, ObjError> {
        obj::load(path.as_ref()).map(Model::from_raw)
    }

    /// Like [`Model::new`], but a failed load is logged and yields an empty model.
    pub fn load_or_empty<P: AsRef<Path>>(path: P) -> Model {
        let path = path.as_ref();
        Model::new(path).unwrap_or_else(|err| {
            error!("failed to load model '{}': {}", path.display(), err);
            Model::default()
        })
    }

    pub fn from_obj_str(source: &str) -> Result<Model, ObjError> {
        obj::parse_str(source).map(Model::from_raw)
    }

    pub fn from_raw(raw: RawGeometry) -> Model {
        Model {
            raw,
            indexed: None,
            flat: None,
        }
    }

    /// Builds the indexed geometry, replacing any earlier one and the flat
    /// geometry derived from it.
    pub fn align(&mut self, mode: IndexingMode) -> &IndexedGeometry {
        self.flat = None;
        self.indexed.insert(align(&self.raw, mode))
    }

    /// Expands the indexed geometry, aligning per corner first if nothing was aligned yet.
    pub fn flatten(&mut self) -> &FlatGeometry {
        let raw = &self.raw;
        let indexed = self
            .indexed
            .get_or_insert_with(|| align(raw, IndexingMode::PerCorner));
        self.flat.insert(flatten(indexed))
    }

    pub fn derive(&mut self, mode: IndexingMode) {
        self.align(mode);
        self.flatten();
    }

    /// Recenters and rescales every position array built so far so the raw
    /// bounding box maps onto a unit cube at the origin. Returns the applied
    /// mapping, `None` for a model without positions.
    ///
    /// Calling this twice renormalizes the already unit-sized model.
    pub fn unitize(&mut self) -> Option<Unitize> {
        let bounds = Bounds::from_points(&self.raw.positions)?;
        let unitize = Unitize::for_bounds(&bounds);

        unitize.apply_all(&mut self.raw.positions);
        if let Some(indexed) = self.indexed.as_mut() {
            unitize.apply_all(&mut indexed.positions);
        }
        if let Some(flat) = self.flat.as_mut() {
            unitize.apply_all(&mut flat.positions);
        }

        debug!(
            "unitized model: center {:?}, extent {}",
            unitize.center,
            unitize.extent()
        );
        Some(unitize)
    }

    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::from_points(&self.raw.positions)
    }

    pub fn raw(&self) -> &RawGeometry {
        &self.raw
    }

    pub fn indexed(&self) -> Option<&IndexedGeometry> {
        self.indexed.as_ref()
    }

    pub fn flat(&self) -> Option<&FlatGeometry> {
        self.flat.as_ref()
    }

    pub fn has_normals(&self) -> bool {
        self.raw.has_normals
    }

    pub fn has_texture_coords(&self) -> bool {
        self.raw.has_texture_coords
    }

    pub fn triangle_count(&self) -> usize {
        self.raw.triangle_count()
    }

    pub fn skipped_lines(&self) -> usize {
        self.raw.skipped_lines
    }

    /// Finishes derivation (per-corner alignment and flattening if still missing)
    /// and packs the interleaved buffers.
    pub fn freeze(mut self) -> GeometryBuffer {
        if self.flat.is_none() {
            self.flatten();
        }

        let indexed = self.indexed.unwrap_or_default();
        let flat = self.flat.unwrap_or_default();
        GeometryBuffer::new(
            flat,
            indexed,
            self.raw.has_normals,
            self.raw.has_texture_coords,
        )
    }
}
