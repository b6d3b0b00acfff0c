use std::mem::size_of;

use crate::math::{Vector2, Vector3};

/// Fixed per-vertex layouts of the packed buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexLayout {
    /// `[px, py, pz, nx, ny, nz]`
    PositionNormal,
    /// `[px, py, pz, nx, ny, nz, u, v]`
    PositionNormalTexCoord,
}

/// Where one attribute sits inside a packed vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexAttribute {
    pub location: u32,
    pub components: usize,
    pub offset_bytes: usize,
}

impl VertexLayout {
    /// Picks the smallest layout that still carries what the shading technique samples.
    pub fn for_shading(needs_texture_coords: bool) -> Self {
        if needs_texture_coords {
            VertexLayout::PositionNormalTexCoord
        } else {
            VertexLayout::PositionNormal
        }
    }

    pub fn components(self) -> usize {
        match self {
            VertexLayout::PositionNormal => 6,
            VertexLayout::PositionNormalTexCoord => 8,
        }
    }

    pub fn stride_bytes(self) -> usize {
        self.components() * size_of::<f32>()
    }

    pub fn attributes(self) -> Vec<VertexAttribute> {
        let float = size_of::<f32>();
        let mut attributes = vec![
            VertexAttribute {
                location: 0,
                components: 3,
                offset_bytes: 0,
            },
            VertexAttribute {
                location: 1,
                components: 3,
                offset_bytes: 3 * float,
            },
        ];

        if self == VertexLayout::PositionNormalTexCoord {
            attributes.push(VertexAttribute {
                location: 2,
                components: 2,
                offset_bytes: 6 * float,
            });
        }

        attributes
    }
}

/// Packs parallel attribute arrays into one buffer. `positions` drives the vertex count;
/// `normals` and `texcoords` must be at least as long (texcoords are unused for
/// [`VertexLayout::PositionNormal`]).
pub fn interleave(
    layout: VertexLayout,
    positions: &[Vector3],
    normals: &[Vector3],
    texcoords: &[Vector2],
) -> Vec<f32> {
    let mut data = Vec::with_capacity(positions.len() * layout.components());

    for (i, position) in positions.iter().enumerate() {
        data.extend_from_slice(&position.to_array());
        data.extend_from_slice(&normals[i].to_array());
        if layout == VertexLayout::PositionNormalTexCoord {
            data.extend_from_slice(&texcoords[i].to_array());
        }
    }

    data
}

/// Splits a packed buffer back into its attribute arrays. A trailing partial vertex is
/// dropped; texcoords are empty for [`VertexLayout::PositionNormal`].
pub fn deinterleave(
    layout: VertexLayout,
    data: &[f32],
) -> (Vec<Vector3>, Vec<Vector3>, Vec<Vector2>) {
    let count = data.len() / layout.components();
    let mut positions = Vec::with_capacity(count);
    let mut normals = Vec::with_capacity(count);
    let mut texcoords = Vec::new();

    for vertex in data.chunks_exact(layout.components()) {
        positions.push(Vector3::new(vertex[0], vertex[1], vertex[2]));
        normals.push(Vector3::new(vertex[3], vertex[4], vertex[5]));
        if layout == VertexLayout::PositionNormalTexCoord {
            texcoords.push(Vector2::new(vertex[6], vertex[7]));
        }
    }

    (positions, normals, texcoords)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::{deinterleave, interleave, VertexLayout};
    use crate::math::{Vector2, Vector3};

    fn random_vertices(
        rng: &mut StdRng,
        count: usize,
    ) -> (Vec<Vector3>, Vec<Vector3>, Vec<Vector2>) {
        let v3 = |rng: &mut StdRng| {
            Vector3::new(
                rng.gen_range(-10.0..10.0),
                rng.gen_range(-10.0..10.0),
                rng.gen_range(-10.0..10.0),
            )
        };
        let positions = (0..count).map(|_| v3(rng)).collect();
        let normals = (0..count).map(|_| v3(rng)).collect();
        let texcoords = (0..count)
            .map(|_| Vector2::new(rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0)))
            .collect();
        (positions, normals, texcoords)
    }

    #[test]
    fn position_normal_layout_packs_six_floats() {
        let data = interleave(
            VertexLayout::PositionNormal,
            &[Vector3::new(1.0, 2.0, 3.0)],
            &[Vector3::new(0.0, 0.0, 1.0)],
            &[Vector2::new(0.5, 0.5)],
        );
        assert_eq!(data, vec![1.0, 2.0, 3.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn texcoord_layout_packs_eight_floats() {
        let data = interleave(
            VertexLayout::PositionNormalTexCoord,
            &[Vector3::new(1.0, 2.0, 3.0), Vector3::zero()],
            &[Vector3::new(0.0, 1.0, 0.0), Vector3::zero()],
            &[Vector2::new(0.25, 0.75), Vector2::new(1.0, 0.0)],
        );
        assert_eq!(data.len(), 16);
        assert_eq!(&data[..8], &[1.0, 2.0, 3.0, 0.0, 1.0, 0.0, 0.25, 0.75]);
        assert_eq!(&data[14..], &[1.0, 0.0]);
    }

    #[test]
    fn deinterleave_recovers_random_attributes_exactly() {
        let mut rng = StdRng::seed_from_u64(7);
        let (positions, normals, texcoords) = random_vertices(&mut rng, 64);

        let packed = interleave(
            VertexLayout::PositionNormalTexCoord,
            &positions,
            &normals,
            &texcoords,
        );
        let (p, n, t) = deinterleave(VertexLayout::PositionNormalTexCoord, &packed);
        assert_eq!((p, n, t), (positions.clone(), normals.clone(), texcoords));

        let packed = interleave(VertexLayout::PositionNormal, &positions, &normals, &[]);
        let (p, n, t) = deinterleave(VertexLayout::PositionNormal, &packed);
        assert_eq!(p, positions);
        assert_eq!(n, normals);
        assert!(t.is_empty());
    }

    #[test]
    fn attribute_offsets_match_stride() {
        let layout = VertexLayout::for_shading(true);
        assert_eq!(layout.stride_bytes(), 32);
        let offsets: Vec<usize> = layout.attributes().iter().map(|a| a.offset_bytes).collect();
        assert_eq!(offsets, vec![0, 12, 24]);

        assert_eq!(VertexLayout::for_shading(false).attributes().len(), 2);
        assert_eq!(VertexLayout::for_shading(false).stride_bytes(), 24);
    }
}
