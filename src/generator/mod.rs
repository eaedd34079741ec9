pub mod constants;
mod core;
mod errors;
mod profile;
mod sampler;
mod types;

pub use self::core::ProblemGenerator;
pub use errors::GeneratorError;
pub use types::{DivisionType, GenerationRequest, Problem};
