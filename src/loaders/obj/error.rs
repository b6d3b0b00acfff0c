use std::path::PathBuf;

use thiserror::Error;

use super::types::AttributeKind;

/// Fatal conditions for a single OBJ load.
#[derive(Debug, Error)]
pub enum ObjError {
    #[error("failed to open OBJ file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read OBJ line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("OBJ line {line}: face has {corners} corners, only triangles are supported")]
    UnsupportedGeometry { line: usize, corners: usize },

    #[error("OBJ line {line}: {kind} index {index} is out of range (count={count})")]
    IndexOutOfRange {
        line: usize,
        kind: AttributeKind,
        index: i64,
        count: usize,
    },

    #[error("OBJ line {line}: malformed face token '{token}': {reason}")]
    MalformedFace {
        line: usize,
        token: String,
        reason: String,
    },
}

impl ObjError {
    pub fn line(&self) -> Option<usize> {
        match self {
            ObjError::Io { .. } => None,
            ObjError::Read { line, .. }
            | ObjError::UnsupportedGeometry { line, .. }
            | ObjError::IndexOutOfRange { line, .. }
            | ObjError::MalformedFace { line, .. } => Some(*line),
        }
    }
}
