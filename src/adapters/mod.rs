// Adapters layer: concrete record loaders behind the `DataSource` port.

pub mod file_source;

pub use file_source::{DirectoryDataSource, JsonDataSource};
