pub mod toml_config;

#[cfg(feature = "cli")]
use crate::app::runner::QueryKind;
#[cfg(feature = "cli")]
use bigdecimal::BigDecimal;
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "record-query")]
#[command(about = "Run declarative queries over customer, supplier and product records")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Dataset path (JSON file or directory); overrides [dataset] in the config
    #[arg(short, long)]
    pub dataset: Option<String>,

    /// Query to run; runs every query when omitted
    #[arg(short, long, value_enum)]
    pub query: Option<QueryKind>,

    /// Override both turnover and order limits (may be negative)
    #[arg(long, allow_negative_numbers = true)]
    pub limit: Option<BigDecimal>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}
