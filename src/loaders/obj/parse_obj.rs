use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, warn};

use crate::math::{Vector2, Vector3};

use super::error::ObjError;
use super::index::{parse_components, parse_face_corner};
use super::types::RawGeometry;

pub fn load(path: &Path) -> Result<RawGeometry, ObjError> {
    let file = File::open(path).map_err(|source| ObjError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let raw = parse_reader(BufReader::new(file))?;
    debug!(
        "parsed '{}': {} positions, {} normals, {} texcoords, {} triangles",
        path.display(),
        raw.positions.len(),
        raw.normals.len(),
        raw.texcoords.len(),
        raw.triangle_count()
    );
    Ok(raw)
}

pub fn parse_str(source: &str) -> Result<RawGeometry, ObjError> {
    parse_reader(source.as_bytes())
}

pub fn parse_reader<R: BufRead>(reader: R) -> Result<RawGeometry, ObjError> {
    let mut raw = RawGeometry::default();

    for (line_number, line_result) in reader.lines().enumerate() {
        let line_number = line_number + 1;
        let line = line_result.map_err(|source| ObjError::Read {
            line: line_number,
            source,
        })?;
        let line = strip_comment(&line).trim();

        if line.is_empty() {
            continue;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        let (directive, values) = match parts.split_first() {
            Some(split) => split,
            None => continue,
        };

        match *directive {
            // A malformed record still occupies its slot, OBJ numbers records by position.
            "v" => {
                let position = match parse_components::<3>(values, "vertex") {
                    Ok(v) => Vector3::from(v),
                    Err(reason) => skip(&mut raw, line_number, &reason),
                };
                raw.positions.push(position);
            }
            "vn" => {
                let normal = match parse_components::<3>(values, "normal") {
                    Ok(n) => {
                        raw.has_normals = true;
                        Vector3::from(n)
                    }
                    Err(reason) => skip(&mut raw, line_number, &reason),
                };
                raw.normals.push(normal);
            }
            "vt" => {
                let texcoord = match parse_components::<2>(values, "texcoord") {
                    Ok([u, v]) => {
                        raw.has_texture_coords = true;
                        Vector2::new(u, v)
                    }
                    Err(reason) => skip(&mut raw, line_number, &reason),
                };
                raw.texcoords.push(texcoord);
            }
            "f" => {
                if values.len() != 3 {
                    return Err(ObjError::UnsupportedGeometry {
                        line: line_number,
                        corners: values.len(),
                    });
                }

                for token in values {
                    let corner = parse_face_corner(
                        token,
                        line_number,
                        raw.positions.len(),
                        raw.texcoords.len(),
                        raw.normals.len(),
                    )?;
                    raw.corners.push(corner);
                }
            }
            _ => {}
        }
    }

    if raw.skipped_lines > 0 {
        warn!("replaced {} malformed OBJ records with zero", raw.skipped_lines);
    }

    Ok(raw)
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(start) => &line[..start],
        None => line,
    }
}

/// Counts a malformed record and hands back the zero sentinel that takes its slot.
fn skip<T: Default>(raw: &mut RawGeometry, line_number: usize, reason: &str) -> T {
    warn!(
        "OBJ line {}: malformed record replaced with zero, {}",
        line_number, reason
    );
    raw.skipped_lines += 1;
    T::default()
}

#[cfg(test)]
mod tests {
    use super::{load, parse_str};
    use crate::loaders::obj::error::ObjError;
    use crate::math::{Vector2, Vector3};

    const TRIANGLE: &str = "\
# one triangle
v 0 0 0
v 1 0 0
v 0 1 0
vn 0 0 1
vn 0 0 1
vn 0 0 1
f 1//1 2//1 3//1
";

    #[test]
    fn parses_single_triangle_with_normals() {
        let raw = parse_str(TRIANGLE).unwrap();

        assert_eq!(raw.triangle_count(), 1);
        assert!(raw.has_normals);
        assert!(!raw.has_texture_coords);
        assert_eq!(raw.positions[1], Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(raw.corners[2].position, 2);
        assert_eq!(raw.corners[2].normal, Some(0));
        assert_eq!(raw.corners[2].texcoord, None);
        assert_eq!(raw.skipped_lines, 0);
    }

    #[test]
    fn two_corner_face_is_unsupported_geometry() {
        let err = parse_str("v 0 0 0\nv 1 0 0\nf 1 2\n").unwrap_err();
        assert!(matches!(
            err,
            ObjError::UnsupportedGeometry {
                line: 3,
                corners: 2
            }
        ));
    }

    #[test]
    fn quad_is_not_triangulated() {
        let source = "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3 4\n";
        assert!(matches!(
            parse_str(source),
            Err(ObjError::UnsupportedGeometry { corners: 4, .. })
        ));
    }

    #[test]
    fn forward_reference_is_out_of_range() {
        let source = "v 0 0 0\nv 1 0 0\nf 1 2 3\nv 0 1 0\n";
        assert!(matches!(
            parse_str(source),
            Err(ObjError::IndexOutOfRange { line: 3, index: 3, count: 2, .. })
        ));
    }

    #[test]
    fn malformed_attribute_records_keep_their_slot() {
        let source = "\
v 0 0 0
v 1 0
v 1 0 0
vt 0.5
vt 0.0 1.0
vn x y z
v 0 1 0
f 1/2 3/2 4/2
";
        let raw = parse_str(source).unwrap();

        assert_eq!(raw.skipped_lines, 3);
        assert_eq!(raw.positions.len(), 4);
        assert_eq!(raw.positions[1], Vector3::zero());
        assert_eq!(raw.texcoords, vec![Vector2::zero(), Vector2::new(0.0, 1.0)]);
        assert_eq!(raw.normals, vec![Vector3::zero()]);
        assert!(!raw.has_normals);
        assert!(raw.has_texture_coords);
        assert_eq!(raw.triangle_count(), 1);
    }

    #[test]
    fn faces_after_a_malformed_vertex_resolve_by_file_position() {
        let raw = parse_str("v 0 0 0\nv bad\nv 1 0 0\nv 0 1 0\nf 1 3 4\n").unwrap();

        assert_eq!(raw.skipped_lines, 1);
        assert_eq!(raw.positions[raw.corners[1].position], Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(raw.positions[raw.corners[2].position], Vector3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn face_may_reference_a_malformed_vertex_slot() {
        let raw = parse_str("v 0 0 0\nv bad\nv 1 0 0\nf 1 2 3\n").unwrap();

        assert_eq!(raw.corners[1].position, 1);
        assert_eq!(raw.positions[1], Vector3::zero());
    }

    #[test]
    fn unknown_directives_and_trailing_comments_are_ignored() {
        let source = "\
mtllib scene.mtl
o cube
g side
usemtl red
s off
v 0 0 0 # origin
v 1 0 0
v 0 1 0
f 1 2 3
";
        let raw = parse_str(source).unwrap();
        assert_eq!(raw.positions[0], Vector3::zero());
        assert_eq!(raw.triangle_count(), 1);
        assert_eq!(raw.skipped_lines, 0);
    }

    #[test]
    fn missing_file_reports_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(&dir.path().join("missing.obj")).unwrap_err();
        assert!(matches!(err, ObjError::Io { .. }));
        assert_eq!(err.line(), None);
    }

    #[test]
    fn loads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("triangle.obj");
        std::fs::write(&path, TRIANGLE).unwrap();

        let raw = load(&path).unwrap();
        assert_eq!(raw.triangle_count(), 1);
    }
}
