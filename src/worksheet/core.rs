use std::fmt;

use log::info;
use rayon::prelude::*;

use crate::generator::{DivisionType, GenerationRequest, Problem, ProblemGenerator};
use crate::worksheet::errors::WorksheetError;

/// Problems generated for one request of a worksheet.
#[derive(Debug, Clone, PartialEq)]
pub struct WorksheetSection {
    pub kind: DivisionType,
    pub requested: usize,
    pub problems: Vec<Problem>,
}

impl WorksheetSection {
    pub fn is_short(&self) -> bool {
        self.problems.len() < self.requested
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Worksheet {
    pub seed: u64,
    pub sections: Vec<WorksheetSection>,
}

impl Worksheet {
    /// Generate every section in parallel. Section `i` draws from its own
    /// generator seeded with `seed + i`, so the result depends only on `seed`.
    ///
    /// # Errors
    ///
    /// Returns the error of a failing section, tagged with its index.
    pub fn generate(requests: &[GenerationRequest], seed: u64) -> Result<Self, WorksheetError> {
        info!(
            "Building worksheet with {} sections from seed {}",
            requests.len(),
            seed
        );

        let sections = requests
            .par_iter()
            .enumerate()
            .map(|(index, request)| {
                let mut generator = ProblemGenerator::with_seed(seed.wrapping_add(index as u64));
                generator
                    .generate(request)
                    .map(|problems| WorksheetSection {
                        kind: request.kind,
                        requested: request.count,
                        problems,
                    })
                    .map_err(|source| WorksheetError::Section { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { seed, sections })
    }

    pub fn problem_count(&self) -> usize {
        self.sections.iter().map(|s| s.problems.len()).sum()
    }

    /// Answer key: one `dividend ÷ divisor = quotient` line per problem
    pub fn answer_key(&self) -> String {
        let mut out = String::new();
        for (index, section) in self.sections.iter().enumerate() {
            out.push_str(&format!("Section {} ({})\n", index + 1, section.kind));
            for (number, problem) in section.problems.iter().enumerate() {
                out.push_str(&format!("{:>3}. {} {}\n", number + 1, problem, problem.quotient()));
            }
        }
        out
    }
}

impl fmt::Display for Worksheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, section) in self.sections.iter().enumerate() {
            writeln!(
                f,
                "Section {}: Type {}: {}",
                index + 1,
                section.kind.number(),
                section.kind.description()
            )?;
            for (number, problem) in section.problems.iter().enumerate() {
                writeln!(f, "{:>3}. {}", number + 1, problem)?;
            }
        }
        Ok(())
    }
}
