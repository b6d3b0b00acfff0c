use std::fmt;

use crate::math::{Vector2, Vector3};

/// One face corner, 0-based. `texcoord`/`normal` are `None` when the token omits them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FaceCorner {
    pub position: usize,
    pub texcoord: Option<usize>,
    pub normal: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeKind {
    Position,
    TexCoord,
    Normal,
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeKind::Position => write!(f, "position"),
            AttributeKind::TexCoord => write!(f, "texcoord"),
            AttributeKind::Normal => write!(f, "normal"),
        }
    }
}

/// Attribute arrays exactly as parsed, plus the face corners in file order.
///
/// `corners.len()` is always a multiple of 3: the parser rejects any face
/// that is not a triangle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawGeometry {
    pub positions: Vec<Vector3>,
    pub normals: Vec<Vector3>,
    pub texcoords: Vec<Vector2>,
    pub corners: Vec<FaceCorner>,
    pub has_normals: bool,
    pub has_texture_coords: bool,
    /// `v`/`vn`/`vt` records with bad component counts or values. Each one still
    /// occupies its slot as a zero vector so later indices keep their meaning.
    pub skipped_lines: usize,
}

impl RawGeometry {
    pub fn triangle_count(&self) -> usize {
        self.corners.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.corners.is_empty() && self.positions.is_empty()
    }
}
