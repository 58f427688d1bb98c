use thiserror::Error;

use crate::validate::SupportFileKind;

#[derive(Error, Debug)]
pub enum SupportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No location recorded for {0}")]
    LocationNotSet(SupportFileKind),
}
