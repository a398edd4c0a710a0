pub mod bignat;
pub mod fmt;
pub mod pascal;
pub mod polynomial;
pub mod power;

pub use bignat::BigNat;
pub use pascal::CoefficientRow;
pub use polynomial::{Evaluation, Term, TermBreakdown};
