use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("ron error: {0}")]
    Ron(#[from] ron::Error),
    #[error("ron error: {0}")]
    RonSpanned(#[from] ron::error::SpannedError),
    #[error("x = {0} is negative; only non-negative bases are supported")]
    NegativeBase(i64),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("internal defect: sum of terms differs from (x + 1)^n for n = {n}, x = {x}")]
    IdentityMismatch { n: u32, x: u64 },
}

pub type Result<T> = std::result::Result<T, Error>;
