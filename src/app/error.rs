use thiserror::Error;

use crate::export::ExportError;
use crate::loaders::obj::ObjError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Cli(String),

    #[error(transparent)]
    Load(#[from] ObjError),

    #[error("failed to export buffers: {0}")]
    Export(#[from] ExportError),
}
