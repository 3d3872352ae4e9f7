use crate::config::toml_config::QueryConfig;
use crate::core::{
    city_statistics, customers_by_entry_date, customers_with_data_defects,
    customers_with_first_order, customers_with_order_above, customers_with_turnover_above,
    products_by_category_and_stock, products_by_price_tier, supplier_country_string,
    suppliers_by_location, suppliers_by_location_grouped, Customer, CustomerEntry,
    CustomerSuppliers, DataDefects, Dataset,
};
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// 可執行的查詢
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum QueryKind {
    TurnoverAbove,
    SuppliersByLocation,
    SuppliersByLocationGrouped,
    OrderAbove,
    FirstOrder,
    FirstOrderSorted,
    DataDefects,
    ProductsByCategory,
    PriceTiers,
    CityStatistics,
    SupplierCountries,
}

impl QueryKind {
    pub const ALL: [QueryKind; 11] = [
        QueryKind::TurnoverAbove,
        QueryKind::SuppliersByLocation,
        QueryKind::SuppliersByLocationGrouped,
        QueryKind::OrderAbove,
        QueryKind::FirstOrder,
        QueryKind::FirstOrderSorted,
        QueryKind::DataDefects,
        QueryKind::ProductsByCategory,
        QueryKind::PriceTiers,
        QueryKind::CityStatistics,
        QueryKind::SupplierCountries,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            QueryKind::TurnoverAbove => "turnover-above",
            QueryKind::SuppliersByLocation => "suppliers-by-location",
            QueryKind::SuppliersByLocationGrouped => "suppliers-by-location-grouped",
            QueryKind::OrderAbove => "order-above",
            QueryKind::FirstOrder => "first-order",
            QueryKind::FirstOrderSorted => "first-order-sorted",
            QueryKind::DataDefects => "data-defects",
            QueryKind::ProductsByCategory => "products-by-category",
            QueryKind::PriceTiers => "price-tiers",
            QueryKind::CityStatistics => "city-statistics",
            QueryKind::SupplierCountries => "supplier-countries",
        }
    }
}

/// 單一查詢的輸出
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryReport {
    pub query: QueryKind,
    pub row_count: usize,
    pub body: Value,
}

/// 以配置參數在資料集上執行查詢，並轉成精簡的 JSON 報表
pub struct QueryRunner<'a> {
    dataset: &'a Dataset,
    config: &'a QueryConfig,
}

impl<'a> QueryRunner<'a> {
    pub fn new(dataset: &'a Dataset, config: &'a QueryConfig) -> Self {
        Self { dataset, config }
    }

    pub fn run(&self, kind: QueryKind) -> Result<QueryReport> {
        let customers = &self.dataset.customers;
        let suppliers = &self.dataset.suppliers;
        let products = &self.dataset.products;
        let params = &self.config.parameters;

        let (row_count, body) = match kind {
            QueryKind::TurnoverAbove => {
                customer_rows(&customers_with_turnover_above(customers, &params.turnover_limit))
            }
            QueryKind::OrderAbove => {
                customer_rows(&customers_with_order_above(customers, &params.order_limit))
            }
            QueryKind::SuppliersByLocation => {
                supplier_rows(&suppliers_by_location(customers, suppliers))
            }
            QueryKind::SuppliersByLocationGrouped => {
                supplier_rows(&suppliers_by_location_grouped(customers, suppliers))
            }
            QueryKind::FirstOrder => entry_rows(&customers_with_first_order(customers)),
            QueryKind::FirstOrderSorted => entry_rows(&customers_by_entry_date(customers)),
            QueryKind::DataDefects => {
                let rows: Vec<Value> = customers_with_data_defects(customers)
                    .into_iter()
                    .map(|c| {
                        json!({
                            "customer_id": c.customer_id,
                            "company_name": c.company_name,
                            "defects": DataDefects::of(c),
                        })
                    })
                    .collect();
                (rows.len(), Value::Array(rows))
            }
            QueryKind::ProductsByCategory => {
                let groups = products_by_category_and_stock(products);
                (groups.len(), serde_json::to_value(&groups)?)
            }
            QueryKind::PriceTiers => {
                let thresholds = self.config.price_tiers.thresholds()?;
                let rows: Vec<Value> = products_by_price_tier(products, &thresholds)
                    .into_iter()
                    .map(|bucket| {
                        json!({
                            "threshold": bucket.threshold,
                            "products": bucket
                                .products
                                .iter()
                                .map(|p| p.product_name.as_str())
                                .collect::<Vec<_>>(),
                        })
                    })
                    .collect();
                (rows.len(), Value::Array(rows))
            }
            QueryKind::CityStatistics => {
                let stats = city_statistics(customers, self.config.aggregation.rounding);
                (stats.len(), serde_json::to_value(&stats)?)
            }
            QueryKind::SupplierCountries => (1, Value::String(supplier_country_string(suppliers))),
        };

        tracing::info!("✅ {}: {} rows", kind.name(), row_count);
        Ok(QueryReport {
            query: kind,
            row_count,
            body,
        })
    }

    pub fn run_all(&self) -> Result<Vec<QueryReport>> {
        QueryKind::ALL.iter().map(|kind| self.run(*kind)).collect()
    }
}

fn customer_ref(customer: &Customer) -> Value {
    json!({
        "customer_id": customer.customer_id,
        "company_name": customer.company_name,
    })
}

fn customer_rows(customers: &[&Customer]) -> (usize, Value) {
    let rows: Vec<Value> = customers.iter().map(|c| customer_ref(c)).collect();
    (rows.len(), Value::Array(rows))
}

fn supplier_rows(rows: &[CustomerSuppliers<'_>]) -> (usize, Value) {
    let values: Vec<Value> = rows
        .iter()
        .map(|row| {
            json!({
                "customer": customer_ref(row.customer),
                "suppliers": row
                    .suppliers
                    .iter()
                    .map(|s| s.supplier_name.as_str())
                    .collect::<Vec<_>>(),
            })
        })
        .collect();
    (values.len(), Value::Array(values))
}

fn entry_rows(entries: &[CustomerEntry<'_>]) -> (usize, Value) {
    let values: Vec<Value> = entries
        .iter()
        .map(|entry| {
            json!({
                "customer": customer_ref(entry.customer),
                "date_of_entry": entry.date_of_entry,
            })
        })
        .collect();
    (values.len(), Value::Array(values))
}
