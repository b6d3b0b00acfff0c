//! Packed buffer files for renderers that live outside this crate.
//!
//! Layout (little-endian):
//! ```text
//! magic      b"OBJV"
//! version    u32 (1)
//! components u32 (6 = position+normal, 8 = position+normal+texcoord)
//! vertices   u32
//! indices    u32 (0 for flat buffers)
//! data       f32 * components * vertices
//! indices    u32 * indices
//! ```

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use byteorder::{ByteOrder, LittleEndian, ReadBytesExt, WriteBytesExt};
use log::debug;
use thiserror::Error;

use crate::scene::{DrawPath, GeometryBuffer, VertexLayout};

pub const MAGIC: &[u8; 4] = b"OBJV";
pub const VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid buffer file: {0}")]
    Format(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct BufferFile {
    pub layout: VertexLayout,
    pub vertices: Vec<f32>,
    pub indices: Vec<u32>,
}

impl BufferFile {
    pub fn from_geometry(geometry: &GeometryBuffer, layout: VertexLayout, path: DrawPath) -> Self {
        let indices = match path {
            DrawPath::Flat => Vec::new(),
            DrawPath::Indexed => geometry.indices().to_vec(),
        };

        Self {
            layout,
            vertices: geometry.vertex_data(layout, path).to_vec(),
            indices,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / self.layout.components()
    }

    pub fn save(&self, path: &Path) -> Result<(), ExportError> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_to(&mut writer)?;
        writer.flush()?;
        debug!(
            "wrote {} vertices and {} indices to '{}'",
            self.vertex_count(),
            self.indices.len(),
            path.display()
        );
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self, ExportError> {
        Self::read_from(&mut BufReader::new(File::open(path)?))
    }

    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<(), ExportError> {
        let vertex_count = count_u32(self.vertex_count(), "vertex")?;
        let index_count = count_u32(self.indices.len(), "index")?;

        writer.write_all(MAGIC)?;
        writer.write_u32::<LittleEndian>(VERSION)?;
        writer.write_u32::<LittleEndian>(self.layout.components() as u32)?;
        writer.write_u32::<LittleEndian>(vertex_count)?;
        writer.write_u32::<LittleEndian>(index_count)?;

        for &value in &self.vertices {
            writer.write_f32::<LittleEndian>(value)?;
        }
        for &index in &self.indices {
            writer.write_u32::<LittleEndian>(index)?;
        }
        Ok(())
    }

    pub fn read_from<R: Read>(reader: &mut R) -> Result<Self, ExportError> {
        let mut magic = [0u8; 4];
        reader.read_exact(&mut magic)?;
        if &magic != MAGIC {
            return Err(ExportError::Format(format!("bad magic {:?}", magic)));
        }

        let version = reader.read_u32::<LittleEndian>()?;
        if version != VERSION {
            return Err(ExportError::Format(format!("unsupported version {}", version)));
        }

        let layout = match reader.read_u32::<LittleEndian>()? {
            6 => VertexLayout::PositionNormal,
            8 => VertexLayout::PositionNormalTexCoord,
            other => {
                return Err(ExportError::Format(format!(
                    "unsupported vertex width {}",
                    other
                )))
            }
        };

        let vertex_count = reader.read_u32::<LittleEndian>()? as usize;
        let index_count = reader.read_u32::<LittleEndian>()? as usize;

        // Header counts are untrusted: only allocate for bytes that are really there.
        let float_count = vertex_count
            .checked_mul(layout.components())
            .ok_or_else(|| {
                ExportError::Format(format!("vertex count {} too large", vertex_count))
            })?;
        let vertex_bytes = read_payload(reader, float_count, "vertex")?;
        let index_bytes = read_payload(reader, index_count, "index")?;

        let mut vertices = vec![0.0f32; float_count];
        LittleEndian::read_f32_into(&vertex_bytes, &mut vertices);
        let mut indices = vec![0u32; index_count];
        LittleEndian::read_u32_into(&index_bytes, &mut indices);

        if let Some(&bad) = indices.iter().find(|&&i| i as usize >= vertex_count) {
            return Err(ExportError::Format(format!(
                "index {} out of range for {} vertices",
                bad, vertex_count
            )));
        }

        Ok(Self {
            layout,
            vertices,
            indices,
        })
    }
}

/// Reads `count` 4-byte words, failing with a format error when the file ends early.
fn read_payload<R: Read>(
    reader: &mut R,
    count: usize,
    label: &str,
) -> Result<Vec<u8>, ExportError> {
    let expected = (count as u64)
        .checked_mul(4)
        .ok_or_else(|| ExportError::Format(format!("{} count {} too large", label, count)))?;

    let mut bytes = Vec::new();
    reader.by_ref().take(expected).read_to_end(&mut bytes)?;
    if (bytes.len() as u64) != expected {
        return Err(ExportError::Format(format!(
            "truncated {} data: expected {} bytes, found {}",
            label,
            expected,
            bytes.len()
        )));
    }
    Ok(bytes)
}

fn count_u32(count: usize, label: &str) -> Result<u32, ExportError> {
    u32::try_from(count)
        .map_err(|_| ExportError::Format(format!("{} count {} does not fit in u32", label, count)))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::{BufferFile, ExportError};
    use crate::scene::{DrawPath, IndexingMode, Model, VertexLayout};

    const TRIANGLE: &str = "\
v 0 0 0
v 1 0 0
v 0 1 0
vt 0 0
vt 1 0
vt 0 1
vn 0 0 1
f 1/1/1 2/2/1 3/3/1
";

    #[test]
    fn header_is_little_endian() {
        let file = BufferFile {
            layout: VertexLayout::PositionNormal,
            vertices: vec![1.0, 0.0, 0.0, 0.0, 0.0, 1.0],
            indices: vec![0],
        };
        let mut bytes = Vec::new();
        file.write_to(&mut bytes).unwrap();

        assert_eq!(&bytes[..4], b"OBJV");
        assert_eq!(&bytes[4..8], &[1, 0, 0, 0]);
        assert_eq!(&bytes[8..12], &[6, 0, 0, 0]);
        assert_eq!(&bytes[12..16], &[1, 0, 0, 0]);
        assert_eq!(&bytes[16..20], &[1, 0, 0, 0]);
        assert_eq!(&bytes[20..24], &1.0f32.to_le_bytes());
        assert_eq!(bytes.len(), 20 + 6 * 4 + 4);
    }

    #[test]
    fn indexed_export_survives_a_trip_through_disk() {
        let mut model = Model::from_obj_str(TRIANGLE).unwrap();
        model.derive(IndexingMode::PerCorner);
        let geometry = model.freeze();
        let file = BufferFile::from_geometry(
            &geometry,
            VertexLayout::PositionNormalTexCoord,
            DrawPath::Indexed,
        );

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("triangle.bin");
        file.save(&path).unwrap();

        let loaded = BufferFile::load(&path).unwrap();
        assert_eq!(loaded, file);
        assert_eq!(loaded.vertex_count(), 3);
        assert_eq!(loaded.indices, vec![0, 1, 2]);
    }

    #[test]
    fn rejects_foreign_files() {
        let mut cursor = Cursor::new(b"PLY\n0000000000000000".to_vec());
        assert!(matches!(
            BufferFile::read_from(&mut cursor),
            Err(ExportError::Format(_))
        ));
    }

    #[test]
    fn rejects_dangling_indices() {
        let file = BufferFile {
            layout: VertexLayout::PositionNormal,
            vertices: vec![0.0; 6],
            indices: vec![0, 3, 1],
        };
        let mut bytes = Vec::new();
        file.write_to(&mut bytes).unwrap();

        assert!(matches!(
            BufferFile::read_from(&mut Cursor::new(bytes)),
            Err(ExportError::Format(_))
        ));
    }

    #[test]
    fn truncated_file_is_an_io_error() {
        let mut cursor = Cursor::new(b"OBJV\x01\x00\x00\x00\x06\x00\x00\x00\x05".to_vec());
        assert!(matches!(
            BufferFile::read_from(&mut cursor),
            Err(ExportError::Io(_))
        ));
    }

    #[test]
    fn oversized_header_counts_are_rejected_without_allocating() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(b"OBJV");
        for word in [1u32, 8, u32::MAX, 0] {
            bytes.extend_from_slice(&word.to_le_bytes());
        }
        bytes.extend_from_slice(&0.5f32.to_le_bytes());

        match BufferFile::read_from(&mut Cursor::new(bytes)) {
            Err(ExportError::Format(message)) => assert!(message.contains("truncated vertex data")),
            other => panic!("expected format error, got {:?}", other),
        }
    }

    #[test]
    fn missing_indices_are_reported() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(b"OBJV");
        for word in [1u32, 6, 1, u32::MAX] {
            bytes.extend_from_slice(&word.to_le_bytes());
        }
        for _ in 0..6 {
            bytes.extend_from_slice(&0.0f32.to_le_bytes());
        }

        assert!(matches!(
            BufferFile::read_from(&mut Cursor::new(bytes)),
            Err(ExportError::Format(_))
        ));
    }
}
