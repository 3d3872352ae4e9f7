pub mod aggregate;
pub mod distinct;
pub mod enrichment;
pub mod filter;
pub mod group;
pub mod grouping;
pub mod join;

pub use crate::domain::model::{Customer, Dataset, Order, Product, Supplier};
pub use crate::domain::ports::DataSource;
pub use crate::utils::error::Result;

pub use aggregate::{city_statistics, CityStatistics, Rounding};
pub use distinct::supplier_country_string;
pub use enrichment::{customers_by_entry_date, customers_with_first_order, CustomerEntry};
pub use filter::{
    customers_with_data_defects, customers_with_order_above, customers_with_turnover_above,
    DataDefects,
};
pub use grouping::{
    products_by_category_and_stock, products_by_price_tier, CategoryGroup, PriceBucket,
    PriceThresholds, PriceTier, StockGroup,
};
pub use join::{suppliers_by_location, suppliers_by_location_grouped, CustomerSuppliers};
