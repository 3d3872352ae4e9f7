//! 商品分組：類別/庫存兩層分組 (Op7) 與價格門檻分級 (Op8)。

use crate::core::group::group_by_key;
use crate::domain::model::Product;
use crate::utils::error::Result;
use crate::utils::validation::validate_non_decreasing;
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockGroup<'a> {
    pub units_in_stock: u32,
    pub prices: Vec<&'a BigDecimal>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryGroup<'a> {
    pub category: &'a str,
    pub stock_groups: Vec<StockGroup<'a>>,
}

/// Op7：依類別分組 (第一次出現的順序)，類別內依庫存量分組並升冪排列，
/// 每個庫存群組列出升冪排列的單價。
pub fn products_by_category_and_stock(products: &[Product]) -> Vec<CategoryGroup<'_>> {
    let result: Vec<CategoryGroup<'_>> = group_by_key(products, |p| p.category.as_str())
        .into_iter()
        .map(|(category, members)| {
            let mut stock_groups: Vec<StockGroup<'_>> =
                group_by_key(members, |p| p.units_in_stock)
                    .into_iter()
                    .map(|(units_in_stock, stocked)| {
                        let mut prices: Vec<&BigDecimal> =
                            stocked.into_iter().map(|p| &p.unit_price).collect();
                        prices.sort();
                        StockGroup {
                            units_in_stock,
                            prices,
                        }
                    })
                    .collect();
            stock_groups.sort_by_key(|group| group.units_in_stock);

            CategoryGroup {
                category,
                stock_groups,
            }
        })
        .collect();

    tracing::debug!(
        "products_by_category_and_stock: {} products -> {} categories",
        products.len(),
        result.len()
    );
    result
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceTier {
    Cheap,
    Middle,
    Expensive,
}

/// 價格分級門檻，必須滿足 `cheap <= middle <= expensive`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceThresholds {
    cheap: BigDecimal,
    middle: BigDecimal,
    expensive: BigDecimal,
}

impl PriceThresholds {
    pub fn new(cheap: BigDecimal, middle: BigDecimal, expensive: BigDecimal) -> Result<Self> {
        validate_non_decreasing(
            "price_thresholds",
            &[
                ("cheap", &cheap),
                ("middle", &middle),
                ("expensive", &expensive),
            ],
        )?;
        Ok(Self {
            cheap,
            middle,
            expensive,
        })
    }

    /// `expensive` 只作為最高級的鍵值，不參與比較：高於 `middle` 即為 expensive
    pub fn classify(&self, price: &BigDecimal) -> PriceTier {
        if *price <= self.cheap {
            PriceTier::Cheap
        } else if *price <= self.middle {
            PriceTier::Middle
        } else {
            PriceTier::Expensive
        }
    }

    pub fn threshold(&self, tier: PriceTier) -> &BigDecimal {
        match tier {
            PriceTier::Cheap => &self.cheap,
            PriceTier::Middle => &self.middle,
            PriceTier::Expensive => &self.expensive,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceBucket<'a> {
    pub threshold: BigDecimal,
    pub products: Vec<&'a Product>,
}

/// Op8：依門檻值分桶，桶依門檻值升冪排列，空桶不輸出。
///
/// 門檻值相等的級別會併入同一桶 (以門檻值為鍵)。
pub fn products_by_price_tier<'a>(
    products: &'a [Product],
    thresholds: &PriceThresholds,
) -> Vec<PriceBucket<'a>> {
    let mut buckets: BTreeMap<&BigDecimal, Vec<&'a Product>> = BTreeMap::new();
    for product in products {
        let tier = thresholds.classify(&product.unit_price);
        buckets
            .entry(thresholds.threshold(tier))
            .or_default()
            .push(product);
    }

    let result: Vec<PriceBucket<'a>> = buckets
        .into_iter()
        .map(|(threshold, products)| PriceBucket {
            threshold: threshold.clone(),
            products,
        })
        .collect();

    tracing::debug!(
        "products_by_price_tier: {} products -> {} buckets",
        products.len(),
        result.len()
    );
    result
}
