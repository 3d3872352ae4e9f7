use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: u32,
    pub order_date: NaiveDateTime,
    #[serde(deserialize_with = "crate::domain::decimal::deserialize")]
    pub total: BigDecimal,
}

/// 客戶資料；`orders` 可以是空陣列，但不可為 null 或缺漏
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub customer_id: String,
    pub company_name: String,
    #[serde(default)]
    pub address: Option<String>,
    pub city: String,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub postal_code: String,
    pub country: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub fax: Option<String>,
    pub orders: Vec<Order>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub supplier_name: String,
    #[serde(default)]
    pub address: Option<String>,
    pub city: String,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: u32,
    pub product_name: String,
    pub category: String,
    #[serde(deserialize_with = "crate::domain::decimal::deserialize")]
    pub unit_price: BigDecimal,
    pub units_in_stock: u32,
}

/// 一次載入的完整資料集
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub customers: Vec<Customer>,
    #[serde(default)]
    pub suppliers: Vec<Supplier>,
    #[serde(default)]
    pub products: Vec<Product>,
}

impl Dataset {
    pub fn is_empty(&self) -> bool {
        self.customers.is_empty() && self.suppliers.is_empty() && self.products.is_empty()
    }
}
