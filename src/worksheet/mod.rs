//! Sectioned worksheets built from several generation requests

mod core;
mod errors;

pub use self::core::{Worksheet, WorksheetSection};
pub use errors::WorksheetError;

#[cfg(test)]
mod tests;
