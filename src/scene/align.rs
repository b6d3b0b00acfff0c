use std::collections::HashMap;

use log::debug;

use crate::loaders::obj::{FaceCorner, RawGeometry};
use crate::math::{Vector2, Vector3};

use super::geometry::IndexedGeometry;

/// How face corners are mapped onto shared index slots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IndexingMode {
    /// Every corner occurrence gets its own slot, indices run `0..n`.
    #[default]
    PerCorner,
    /// Corners with the same (position, texcoord, normal) triple share a slot.
    Deduplicated,
}

/// Resolves the per-attribute OBJ indices into a single index stream.
pub fn align(raw: &RawGeometry, mode: IndexingMode) -> IndexedGeometry {
    let indexed = match mode {
        IndexingMode::PerCorner => align_per_corner(raw),
        IndexingMode::Deduplicated => align_deduplicated(raw),
    };

    debug!(
        "aligned {} corners into {} slots ({:?})",
        raw.corners.len(),
        indexed.vertex_count(),
        mode
    );
    indexed
}

fn align_per_corner(raw: &RawGeometry) -> IndexedGeometry {
    let count = raw.corners.len();
    let mut indexed = IndexedGeometry {
        positions: Vec::with_capacity(count),
        normals: Vec::with_capacity(count),
        texcoords: Vec::with_capacity(count),
        indices: Vec::with_capacity(count),
    };

    for (slot, corner) in raw.corners.iter().enumerate() {
        push_corner(&mut indexed, raw, corner);
        indexed.indices.push(slot as u32);
    }

    indexed
}

fn align_deduplicated(raw: &RawGeometry) -> IndexedGeometry {
    let mut indexed = IndexedGeometry {
        indices: Vec::with_capacity(raw.corners.len()),
        ..Default::default()
    };
    let mut slots: HashMap<FaceCorner, u32> = HashMap::new();

    for corner in &raw.corners {
        let slot = match slots.get(corner) {
            Some(&slot) => slot,
            None => {
                let slot = indexed.positions.len() as u32;
                push_corner(&mut indexed, raw, corner);
                slots.insert(*corner, slot);
                slot
            }
        };
        indexed.indices.push(slot);
    }

    indexed
}

fn push_corner(indexed: &mut IndexedGeometry, raw: &RawGeometry, corner: &FaceCorner) {
    let (position, normal, texcoord) = corner_attributes(raw, corner);
    indexed.positions.push(position);
    indexed.normals.push(normal);
    indexed.texcoords.push(texcoord);
}

/// Attribute values for one corner. Absent or unresolvable references read as zero.
fn corner_attributes(raw: &RawGeometry, corner: &FaceCorner) -> (Vector3, Vector3, Vector2) {
    let position = raw
        .positions
        .get(corner.position)
        .copied()
        .unwrap_or_default();
    let normal = corner
        .normal
        .and_then(|i| raw.normals.get(i).copied())
        .unwrap_or_default();
    let texcoord = corner
        .texcoord
        .and_then(|i| raw.texcoords.get(i).copied())
        .unwrap_or_default();

    (position, normal, texcoord)
}
