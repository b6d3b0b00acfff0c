use std::fs::File;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::scene::{DrawPath, IndexingMode, LoadOptions, VertexLayout};

use super::error::AppError;

/// Load Wavefront OBJ triangle meshes into GPU-ready buffers
#[derive(Parser, Debug)]
#[command(name = "objview", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print triangle count, attribute presence and bounds of a model
    Info {
        /// Path to the .obj file
        model: PathBuf,

        #[command(flatten)]
        load: LoadArgs,
    },
    /// Write the interleaved vertex buffer (and indices) to a binary file
    Export {
        /// Path to the .obj file
        model: PathBuf,

        /// Output file
        #[arg(short, long)]
        output: PathBuf,

        /// Per-vertex layout
        #[arg(long, value_enum, default_value_t = LayoutArg::Pnt)]
        layout: LayoutArg,

        /// Export the indexed representation instead of the flat one
        #[arg(long)]
        indexed: bool,

        #[command(flatten)]
        load: LoadArgs,
    },
}

#[derive(Args, Debug, Clone, Copy)]
pub struct LoadArgs {
    /// Share index slots between identical face corners
    #[arg(long)]
    pub dedup: bool,

    /// Keep the original coordinates instead of fitting the model into a unit cube
    #[arg(long)]
    pub no_unitize: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutArg {
    /// position + normal
    Pn,
    /// position + normal + texture coordinate
    Pnt,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Info,
    Export {
        output: PathBuf,
        layout: VertexLayout,
        path: DrawPath,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub model_path: PathBuf,
    pub options: LoadOptions,
    pub action: Action,
}

impl From<LoadArgs> for LoadOptions {
    fn from(args: LoadArgs) -> Self {
        LoadOptions {
            indexing: if args.dedup {
                IndexingMode::Deduplicated
            } else {
                IndexingMode::PerCorner
            },
            unitize: !args.no_unitize,
        }
    }
}

impl From<LayoutArg> for VertexLayout {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::Pn => VertexLayout::PositionNormal,
            LayoutArg::Pnt => VertexLayout::PositionNormalTexCoord,
        }
    }
}

pub fn parse_from_env() -> Result<AppConfig, AppError> {
    config_from_cli(Cli::parse())
}

pub fn config_from_cli(cli: Cli) -> Result<AppConfig, AppError> {
    let config = match cli.command {
        Command::Info { model, load } => AppConfig {
            model_path: model,
            options: load.into(),
            action: Action::Info,
        },
        Command::Export {
            model,
            output,
            layout,
            indexed,
            load,
        } => AppConfig {
            model_path: model,
            options: load.into(),
            action: Action::Export {
                output,
                layout: layout.into(),
                path: if indexed {
                    DrawPath::Indexed
                } else {
                    DrawPath::Flat
                },
            },
        },
    };

    validate_path(&config.model_path, "obj", "model").map_err(AppError::Cli)?;
    Ok(config)
}

fn validate_path(file_path: &Path, expected_extension: &str, label: &str) -> Result<(), String> {
    let path = file_path.display();
    if !file_path.exists() {
        return Err(format!("{} file does not exist: {}", label, path));
    }
    if !file_path.is_file() {
        return Err(format!("{} path is not a file: {}", label, path));
    }

    let extension = file_path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or_else(|| format!("{} file has no extension: {}", label, path))?;
    if !extension.eq_ignore_ascii_case(expected_extension) {
        return Err(format!(
            "{} file must have .{} extension: {}",
            label, expected_extension, path
        ));
    }

    File::open(file_path)
        .map(|_| ())
        .map_err(|error| format!("Failed to open {} file '{}': {}", label, path, error))
}
