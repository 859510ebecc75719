pub mod numerical_check;

pub use numerical_check::{check_output, ensure_finite, sanitize, NumericalIssue};
