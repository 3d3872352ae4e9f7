use anyhow::Context;
use clap::Parser;
use record_query::config::toml_config::DatasetConfig;
use record_query::utils::{logger, validation::Validate};
use record_query::{CliConfig, QueryConfig, QueryRunner};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("🚀 Starting record-query");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            QueryConfig::from_file(path)
                .with_context(|| format!("failed to load config file '{}'", path))?
        }
        None => QueryConfig::default(),
    };

    // 應用命令列覆蓋設定
    if let Some(path) = &cli.dataset {
        config.dataset = Some(DatasetConfig::new(path.clone()));
    }
    if let Some(limit) = &cli.limit {
        config.parameters.turnover_limit = limit.clone();
        config.parameters.order_limit = limit.clone();
        tracing::info!("🔧 Limits overridden to: {}", limit);
    }
    if cli.pretty {
        config.output.pretty = true;
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(e.exit_code());
    }

    let source = match config.dataset() {
        Ok(dataset) => dataset.source(),
        Err(e) => {
            eprintln!("❌ {} (use --dataset or a [dataset] section)", e);
            std::process::exit(e.exit_code());
        }
    };
    tracing::info!("📥 Loading dataset from {}", source.describe());
    let dataset = source
        .load()
        .with_context(|| format!("failed to load dataset from {}", source.describe()))?;
    if dataset.is_empty() {
        tracing::warn!("⚠️ Dataset from {} is empty, every query returns no rows", source.describe());
    }

    let runner = QueryRunner::new(&dataset, &config);
    let reports = match cli.query {
        Some(kind) => runner.run(kind).map(|report| vec![report]),
        None => runner.run_all(),
    };

    let reports = match reports {
        Ok(reports) => reports,
        Err(e) => {
            tracing::error!("❌ Query failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(e.exit_code());
        }
    };

    let output = if config.output.pretty {
        serde_json::to_string_pretty(&reports)?
    } else {
        serde_json::to_string(&reports)?
    };
    println!("{}", output);

    Ok(())
}
