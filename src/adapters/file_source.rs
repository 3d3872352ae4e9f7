use crate::domain::model::{Customer, Dataset, Product, Supplier};
use crate::domain::ports::DataSource;
use crate::utils::error::{QueryError, Result};
use bigdecimal::BigDecimal;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// 單一 JSON 檔案：`{ "customers": [...], "suppliers": [...], "products": [...] }`
#[derive(Debug, Clone)]
pub struct JsonDataSource {
    path: PathBuf,
}

impl JsonDataSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DataSource for JsonDataSource {
    fn describe(&self) -> String {
        format!("json file {}", self.path.display())
    }

    fn load(&self) -> Result<Dataset> {
        tracing::debug!("Reading dataset from {}", self.path.display());
        let content = fs::read_to_string(&self.path)?;
        let dataset: Dataset = serde_json::from_str(&content)?;
        log_loaded(&dataset);
        Ok(dataset)
    }
}

/// 資料夾：`customers.json`、`suppliers.csv`、`products.csv`。
///
/// 客戶含巢狀訂單，所以只支援 JSON；供應商與商品是平面表格，使用 CSV。
/// 缺少的檔案視為空集合。
#[derive(Debug, Clone)]
pub struct DirectoryDataSource {
    dir: PathBuf,
}

impl DirectoryDataSource {
    pub const CUSTOMERS_FILE: &'static str = "customers.json";
    pub const SUPPLIERS_FILE: &'static str = "suppliers.csv";
    pub const PRODUCTS_FILE: &'static str = "products.csv";

    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl DataSource for DirectoryDataSource {
    fn describe(&self) -> String {
        format!("directory {}", self.dir.display())
    }

    fn load(&self) -> Result<Dataset> {
        if !self.dir.is_dir() {
            return Err(QueryError::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Dataset directory not found: {}", self.dir.display()),
            )));
        }

        let customers_path = self.dir.join(Self::CUSTOMERS_FILE);
        let customers: Vec<Customer> = if customers_path.exists() {
            serde_json::from_str(&fs::read_to_string(&customers_path)?)?
        } else {
            tracing::warn!("{} not found, no customers loaded", customers_path.display());
            Vec::new()
        };

        let dataset = Dataset {
            customers,
            suppliers: read_csv_table::<Supplier>(&self.dir.join(Self::SUPPLIERS_FILE))?,
            products: read_csv_table::<ProductRow>(&self.dir.join(Self::PRODUCTS_FILE))?
                .into_iter()
                .map(Product::from)
                .collect(),
        };
        log_loaded(&dataset);
        Ok(dataset)
    }
}

/// products.csv 的一列；單價以欄位原文解析，不經過浮點數
#[derive(Debug, Deserialize)]
struct ProductRow {
    product_id: u32,
    product_name: String,
    category: String,
    #[serde(deserialize_with = "crate::domain::decimal::deserialize_text")]
    unit_price: BigDecimal,
    units_in_stock: u32,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self {
            product_id: row.product_id,
            product_name: row.product_name,
            category: row.category,
            unit_price: row.unit_price,
            units_in_stock: row.units_in_stock,
        }
    }
}

fn read_csv_table<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    if !path.exists() {
        tracing::warn!("{} not found, table left empty", path.display());
        return Ok(Vec::new());
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut rows = Vec::new();
    for record in reader.deserialize() {
        rows.push(record?);
    }
    tracing::debug!("Read {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

fn log_loaded(dataset: &Dataset) {
    tracing::info!(
        "📥 Loaded {} customers, {} suppliers, {} products",
        dataset.customers.len(),
        dataset.suppliers.len(),
        dataset.products.len()
    );
}
