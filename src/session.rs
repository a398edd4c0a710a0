use std::path::PathBuf;
use std::time::Instant;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::math::{fmt, pascal, polynomial, CoefficientRow, Evaluation};
use crate::report::{Report, Timings};

// timed wrapper around the pure core, shared by the cli and the prompt frontend
pub struct Session {
    pub config: Config,
    /// Explicit report destination; forces a report for any degree.
    pub out_path: Option<PathBuf>,
}

pub struct Outcome {
    pub n: u32,
    pub x: u64,
    pub row: CoefficientRow,
    pub row_display: String,
    pub polynomial_display: String,
    pub evaluation: Evaluation,
    pub timings: Timings,
}

impl Outcome {
    pub fn report(&self) -> Report {
        Report {
            n: self.n,
            x: self.x,
            timings: self.timings,
            result: self.evaluation.sum.clone(),
        }
    }
}

impl Session {
    pub fn new(config: Config) -> Self {
        Self { config, out_path: None }
    }

    pub fn run(&self, n: u32, x: u64) -> Result<Outcome> {
        let start = Instant::now();
        let row = pascal::row(n);
        let generation = start.elapsed();
        log::debug!("generated row {n} in {generation:?}");

        let start = Instant::now();
        let row_display = fmt::render_row(&row);
        let polynomial_display = fmt::render_polynomial(&row);
        let rendering = start.elapsed();
        log::debug!("rendered row {n} in {rendering:?}");

        let start = Instant::now();
        let evaluation = polynomial::evaluate_row(&row, x);
        let evaluation_time = start.elapsed();
        log::debug!("evaluated f({x}) for n = {n} in {evaluation_time:?}");

        if !evaluation.identity_holds {
            log::error!(
                "sum {} differs from cross check {} (n = {n}, x = {x})",
                evaluation.sum,
                evaluation.cross_check
            );
            return Err(Error::IdentityMismatch { n, x });
        }

        Ok(Outcome {
            n,
            x,
            row,
            row_display,
            polynomial_display,
            evaluation,
            timings: Timings { generation, rendering, evaluation: evaluation_time },
        })
    }

    pub fn should_report(&self, n: u32) -> bool {
        self.out_path.is_some() || n == self.config.report_degree
    }

    pub fn report_path(&self) -> PathBuf {
        self.out_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(&self.config.report_path))
    }

    /// Writes the report when one is due, returning where it went.
    pub fn persist(&self, outcome: &Outcome) -> Result<Option<PathBuf>> {
        if !self.should_report(outcome.n) {
            return Ok(None);
        }
        let path = self.report_path();
        outcome.report().write(&path)?;
        Ok(Some(path))
    }
}

pub fn parse_degree(text: &str) -> Result<u32> {
    let text = text.trim();
    match text.parse::<i64>() {
        Ok(n) if n < 0 => Err(Error::InvalidInput(format!("n must be 0 or greater, got {n}"))),
        Ok(n) => u32::try_from(n).map_err(|_| Error::InvalidInput(format!("n = {n} is too large"))),
        Err(_) => Err(Error::InvalidInput(format!("'{text}' is not an integer"))),
    }
}

/// Accepts any integer text but refuses negative values instead of wrapping them.
pub fn parse_base(text: &str) -> Result<u64> {
    let text = text.trim();
    match text.parse::<i64>() {
        Ok(x) if x < 0 => Err(Error::NegativeBase(x)),
        Ok(x) => Ok(x as u64),
        Err(_) => text
            .parse::<u64>()
            .map_err(|_| Error::InvalidInput(format!("'{text}' is not an integer"))),
    }
}
