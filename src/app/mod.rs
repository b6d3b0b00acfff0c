pub mod cli;
pub mod error;
pub mod summary;

use log::{info, warn};

use crate::export::BufferFile;
use crate::scene;

use cli::{Action, AppConfig};
use error::AppError;

pub fn run_from_env() -> Result<(), AppError> {
    let config = cli::parse_from_env()?;
    run(config)
}

pub fn run(config: AppConfig) -> Result<(), AppError> {
    match config.action {
        Action::Info => {
            let summary = summary::summarize(&config.model_path, &config.options)?;
            print!("{}", summary);
        }
        Action::Export {
            output,
            layout,
            path,
        } => {
            let geometry = scene::build_geometry(&config.model_path, &config.options)?;
            if layout == scene::VertexLayout::PositionNormalTexCoord
                && !geometry.has_texture_coords()
            {
                warn!("model has no texture coordinates, texcoord slots are zero-filled");
            }

            let file = BufferFile::from_geometry(&geometry, layout, path);
            file.save(&output)?;
            info!(
                "exported {} vertices ({} floats each) and {} indices to '{}'",
                file.vertex_count(),
                layout.components(),
                file.indices.len(),
                output.display()
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::cli::{Action, AppConfig};
    use super::error::AppError;
    use super::run;
    use crate::export::BufferFile;
    use crate::scene::{DrawPath, LoadOptions, VertexLayout};

    #[test]
    fn export_writes_flat_buffer() {
        let dir = tempfile::tempdir().unwrap();
        let model_path = dir.path().join("tri.obj");
        std::fs::write(&model_path, "v 0 0 0\nv 2 0 0\nv 0 2 0\nf 1 2 3\n").unwrap();
        let output = dir.path().join("tri.bin");

        run(AppConfig {
            model_path,
            options: LoadOptions::default(),
            action: Action::Export {
                output: output.clone(),
                layout: VertexLayout::PositionNormal,
                path: DrawPath::Flat,
            },
        })
        .unwrap();

        let file = BufferFile::load(&output).unwrap();
        assert_eq!(file.vertex_count(), 3);
        assert!(file.indices.is_empty());
        assert_eq!(&file.vertices[..6], &[-0.5, -0.5, 0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn unsupported_faces_surface_as_load_errors() {
        let dir = tempfile::tempdir().unwrap();
        let model_path = dir.path().join("quad.obj");
        std::fs::write(&model_path, "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3 4\n").unwrap();

        let result = run(AppConfig {
            model_path,
            options: LoadOptions::default(),
            action: Action::Info,
        });
        assert!(matches!(result, Err(AppError::Load(_))));
    }
}
