use crate::adapters::{DirectoryDataSource, JsonDataSource};
use crate::core::aggregate::Rounding;
use crate::core::grouping::PriceThresholds;
use crate::domain::ports::DataSource;
use crate::utils::error::{QueryError, Result};
use crate::utils::validation::{
    validate_non_decreasing, validate_non_negative, validate_path, Validate,
};
use bigdecimal::{BigDecimal, Zero};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueryConfig {
    pub dataset: Option<DatasetConfig>,
    #[serde(default)]
    pub parameters: ParametersConfig,
    #[serde(default)]
    pub price_tiers: PriceTiersConfig,
    #[serde(default)]
    pub aggregation: AggregationConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatasetKind {
    #[default]
    Json,
    Directory,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    pub path: String,
    #[serde(default)]
    pub kind: DatasetKind,
}

impl DatasetConfig {
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        let kind = if Path::new(&path).is_dir() {
            DatasetKind::Directory
        } else {
            DatasetKind::Json
        };
        Self { path, kind }
    }

    pub fn source(&self) -> Box<dyn DataSource> {
        match self.kind {
            DatasetKind::Json => Box::new(JsonDataSource::new(&self.path)),
            DatasetKind::Directory => Box::new(DirectoryDataSource::new(&self.path)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParametersConfig {
    #[serde(deserialize_with = "crate::domain::decimal::deserialize")]
    pub turnover_limit: BigDecimal,
    #[serde(deserialize_with = "crate::domain::decimal::deserialize")]
    pub order_limit: BigDecimal,
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            turnover_limit: BigDecimal::zero(),
            order_limit: BigDecimal::zero(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceTiersConfig {
    #[serde(deserialize_with = "crate::domain::decimal::deserialize")]
    pub cheap: BigDecimal,
    #[serde(deserialize_with = "crate::domain::decimal::deserialize")]
    pub middle: BigDecimal,
    #[serde(deserialize_with = "crate::domain::decimal::deserialize")]
    pub expensive: BigDecimal,
}

impl Default for PriceTiersConfig {
    fn default() -> Self {
        Self {
            cheap: BigDecimal::from(10),
            middle: BigDecimal::from(20),
            expensive: BigDecimal::from(30),
        }
    }
}

impl PriceTiersConfig {
    pub fn thresholds(&self) -> Result<PriceThresholds> {
        PriceThresholds::new(
            self.cheap.clone(),
            self.middle.clone(),
            self.expensive.clone(),
        )
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AggregationConfig {
    #[serde(default)]
    pub rounding: Rounding,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub pretty: bool,
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("valid pattern"))
}

impl QueryConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| QueryError::ConfigParseError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DATA_DIR})；未設定的變數保留原樣
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &regex::Captures<'_>| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn dataset(&self) -> Result<&DatasetConfig> {
        crate::utils::validation::validate_required_field("dataset", &self.dataset)
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        if let Some(dataset) = &self.dataset {
            validate_path("dataset.path", &dataset.path)?;
        }

        // 上限值可以是負數：負的營業額上限會讓沒有訂單的客戶也通過篩選

        let tiers = &self.price_tiers;
        validate_non_negative("price_tiers.cheap", &tiers.cheap)?;
        validate_non_decreasing(
            "price_tiers",
            &[
                ("cheap", &tiers.cheap),
                ("middle", &tiers.middle),
                ("expensive", &tiers.expensive),
            ],
        )?;

        Ok(())
    }
}

impl Validate for QueryConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
