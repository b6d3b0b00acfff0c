use std::fmt;
use std::path::Path;

use crate::loaders::obj::ObjError;
use crate::scene::{Bounds, LoadOptions, Model};

/// What `objview info` reports about one model.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelSummary {
    pub triangles: usize,
    pub indexed_vertices: usize,
    pub has_normals: bool,
    pub has_texture_coords: bool,
    pub skipped_lines: usize,
    pub source_bounds: Option<Bounds>,
    pub final_bounds: Option<Bounds>,
}

pub fn summarize(model_path: &Path, options: &LoadOptions) -> Result<ModelSummary, ObjError> {
    let mut model = Model::new(model_path)?;
    let source_bounds = model.bounds();

    model.derive(options.indexing);
    if options.unitize {
        model.unitize();
    }

    Ok(ModelSummary {
        triangles: model.triangle_count(),
        indexed_vertices: model.indexed().map_or(0, |indexed| indexed.vertex_count()),
        has_normals: model.has_normals(),
        has_texture_coords: model.has_texture_coords(),
        skipped_lines: model.skipped_lines(),
        source_bounds,
        final_bounds: model.bounds(),
    })
}

impl fmt::Display for ModelSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "triangles:        {}", self.triangles)?;
        writeln!(f, "indexed vertices: {}", self.indexed_vertices)?;
        writeln!(f, "normals:          {}", self.has_normals)?;
        writeln!(f, "texture coords:   {}", self.has_texture_coords)?;
        writeln!(f, "skipped records:  {}", self.skipped_lines)?;
        write_bounds(f, "source bounds:   ", self.source_bounds)?;
        write_bounds(f, "final bounds:    ", self.final_bounds)
    }
}

fn write_bounds(f: &mut fmt::Formatter<'_>, label: &str, bounds: Option<Bounds>) -> fmt::Result {
    match bounds {
        Some(Bounds { min, max }) => writeln!(
            f,
            "{} ({:.4}, {:.4}, {:.4}) .. ({:.4}, {:.4}, {:.4})",
            label, min.x, min.y, min.z, max.x, max.y, max.z
        ),
        None => writeln!(f, "{} none", label),
    }
}
