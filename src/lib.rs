pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{DirectoryDataSource, JsonDataSource};
pub use app::{QueryKind, QueryReport, QueryRunner};
pub use config::toml_config::QueryConfig;
pub use utils::error::{QueryError, Result};
