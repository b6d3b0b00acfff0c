mod error;
mod index;
mod parse_obj;
mod types;

pub use error::ObjError;
pub use parse_obj::{load, parse_reader, parse_str};
pub use types::{AttributeKind, FaceCorner, RawGeometry};
