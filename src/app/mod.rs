// Application layer: runs operators against a loaded dataset and shapes reports.

pub mod runner;

pub use runner::{QueryKind, QueryReport, QueryRunner};
