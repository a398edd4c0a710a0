//! Plain "label: value" artifact recording one timed run.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::error::Result;
use crate::math::BigNat;

/// Wall time spent in each phase of a run.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Timings {
    pub generation: Duration,
    pub rendering: Duration,
    pub evaluation: Duration,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    pub n: u32,
    pub x: u64,
    pub timings: Timings,
    pub result: BigNat,
}

fn millis(d: Duration) -> String {
    format!("{:.3}", d.as_secs_f64() * 1000.)
}

impl Report {
    pub fn render(&self) -> String {
        let mut out = String::new();
        let lines = [
            ("n", self.n.to_string()),
            ("x", self.x.to_string()),
            ("coefficient generation (ms)", millis(self.timings.generation)),
            ("rendering (ms)", millis(self.timings.rendering)),
            ("evaluation (ms)", millis(self.timings.evaluation)),
            ("result", self.result.to_decimal_string()),
        ];
        for (label, value) in lines {
            let _ = writeln!(out, "{label}: {value}");
        }
        out
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        fs::write(path, self.render())?;
        log::info!("wrote report for n = {} to {}", self.n, path.display());
        Ok(())
    }
}
