use thiserror::Error;

use crate::generator::GeneratorError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WorksheetError {
    #[error("Section {index} failed: {source}")]
    Section {
        index: usize,
        #[source]
        source: GeneratorError,
    },
}
