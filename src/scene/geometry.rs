use crate::math::{Vector2, Vector3};

use super::interleave::{interleave, VertexLayout};

/// One attribute slot per aligned vertex, addressed through `indices`.
///
/// `positions`, `normals` and `texcoords` always have the same length; missing
/// attributes are filled with zero vectors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndexedGeometry {
    pub positions: Vec<Vector3>,
    pub normals: Vec<Vector3>,
    pub texcoords: Vec<Vector2>,
    pub indices: Vec<u32>,
}

impl IndexedGeometry {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// One entry per (triangle, corner) pair, no sharing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlatGeometry {
    pub positions: Vec<Vector3>,
    pub normals: Vec<Vector3>,
    pub texcoords: Vec<Vector2>,
}

impl FlatGeometry {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.positions.len() / 3
    }
}

/// Which representation a draw call consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawPath {
    /// Non-indexed, `glDrawArrays` style.
    Flat,
    /// Indexed, `glDrawElements` style.
    Indexed,
}

/// Fully derived, read-only geometry ready for upload.
///
/// Built once by [`Model::freeze`](super::Model::freeze); nothing mutates it
/// afterwards, so it can be shared freely between readers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeometryBuffer {
    flat: FlatGeometry,
    indexed: IndexedGeometry,
    has_normals: bool,
    has_texture_coords: bool,
    flat_pn: Vec<f32>,
    flat_pnt: Vec<f32>,
    indexed_pn: Vec<f32>,
    indexed_pnt: Vec<f32>,
}

impl GeometryBuffer {
    pub(crate) fn new(
        flat: FlatGeometry,
        indexed: IndexedGeometry,
        has_normals: bool,
        has_texture_coords: bool,
    ) -> Self {
        let flat_pn = interleave(
            VertexLayout::PositionNormal,
            &flat.positions,
            &flat.normals,
            &flat.texcoords,
        );
        let flat_pnt = interleave(
            VertexLayout::PositionNormalTexCoord,
            &flat.positions,
            &flat.normals,
            &flat.texcoords,
        );
        let indexed_pn = interleave(
            VertexLayout::PositionNormal,
            &indexed.positions,
            &indexed.normals,
            &indexed.texcoords,
        );
        let indexed_pnt = interleave(
            VertexLayout::PositionNormalTexCoord,
            &indexed.positions,
            &indexed.normals,
            &indexed.texcoords,
        );

        Self {
            flat,
            indexed,
            has_normals,
            has_texture_coords,
            flat_pn,
            flat_pnt,
            indexed_pn,
            indexed_pnt,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.triangle_count() == 0
    }

    pub fn has_normals(&self) -> bool {
        self.has_normals
    }

    pub fn has_texture_coords(&self) -> bool {
        self.has_texture_coords
    }

    pub fn triangle_count(&self) -> usize {
        self.indexed.triangle_count()
    }

    pub fn flat(&self) -> &FlatGeometry {
        &self.flat
    }

    pub fn indexed(&self) -> &IndexedGeometry {
        &self.indexed
    }

    pub fn indices(&self) -> &[u32] {
        &self.indexed.indices
    }

    /// Packed vertex data for `layout`, in the occurrence order of `path`.
    pub fn vertex_data(&self, layout: VertexLayout, path: DrawPath) -> &[f32] {
        match (layout, path) {
            (VertexLayout::PositionNormal, DrawPath::Flat) => &self.flat_pn,
            (VertexLayout::PositionNormalTexCoord, DrawPath::Flat) => &self.flat_pnt,
            (VertexLayout::PositionNormal, DrawPath::Indexed) => &self.indexed_pn,
            (VertexLayout::PositionNormalTexCoord, DrawPath::Indexed) => &self.indexed_pnt,
        }
    }

    /// Number of vertices a draw over `path` submits.
    pub fn draw_count(&self, path: DrawPath) -> usize {
        match path {
            DrawPath::Flat => self.flat.vertex_count(),
            DrawPath::Indexed => self.indexed.indices.len(),
        }
    }
}
