use log::debug;

use super::geometry::{FlatGeometry, IndexedGeometry};

/// Expands the index stream into one attribute entry per triangle corner.
/// Winding follows the index order unchanged.
pub fn flatten(indexed: &IndexedGeometry) -> FlatGeometry {
    let count = indexed.indices.len();
    let mut flat = FlatGeometry {
        positions: Vec::with_capacity(count),
        normals: Vec::with_capacity(count),
        texcoords: Vec::with_capacity(count),
    };

    for &index in &indexed.indices {
        let slot = index as usize;
        flat.positions.push(indexed.positions[slot]);
        flat.normals.push(indexed.normals[slot]);
        flat.texcoords.push(indexed.texcoords[slot]);
    }

    debug!("flattened {} triangles", flat.triangle_count());
    flat
}

#[cfg(test)]
mod tests {
    use super::flatten;
    use crate::loaders::obj::parse_str;
    use crate::math::Vector3;
    use crate::scene::align::{align, IndexingMode};

    #[test]
    fn both_indexing_modes_flatten_to_the_same_triangles() {
        let source = "\
v 0 0 0
v 1 0 0
v 1 1 0
v 0 1 0
vn 0 0 1
f 1//1 2//1 3//1
f 1//1 3//1 4//1
";
        let raw = parse_str(source).unwrap();
        let per_corner = flatten(&align(&raw, IndexingMode::PerCorner));
        let deduplicated = flatten(&align(&raw, IndexingMode::Deduplicated));

        assert_eq!(per_corner, deduplicated);
        assert_eq!(per_corner.vertex_count(), 6);
        assert_eq!(per_corner.triangle_count(), 2);
    }

    #[test]
    fn winding_is_preserved() {
        let source = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 3 2 1\n";
        let raw = parse_str(source).unwrap();
        let flat = flatten(&align(&raw, IndexingMode::PerCorner));

        assert_eq!(
            flat.positions,
            vec![
                Vector3::new(0.0, 1.0, 0.0),
                Vector3::new(1.0, 0.0, 0.0),
                Vector3::new(0.0, 0.0, 0.0),
            ]
        );
    }
}
