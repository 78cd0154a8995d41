pub mod average;
pub mod probe;
pub mod rank;
pub mod sweep;
