//! 共用聚合：營業額、訂單數、首筆訂單日期，以及城市統計 (Op9)。

use crate::core::group::group_by_key;
use crate::domain::model::Customer;
use bigdecimal::{BigDecimal, RoundingMode, ToPrimitive, Zero};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// 四捨五入規則。兩個城市統計欄位一律使用同一規則。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rounding {
    /// 銀行家捨入：2.5 -> 2, 3.5 -> 4
    #[default]
    HalfEven,
    /// 2.5 -> 3, -2.5 -> -3
    HalfAwayFromZero,
}

impl Rounding {
    fn mode(self) -> RoundingMode {
        match self {
            Rounding::HalfEven => RoundingMode::HalfEven,
            Rounding::HalfAwayFromZero => RoundingMode::HalfUp,
        }
    }

    /// 捨入到整數；超出 i64 範圍時飽和
    pub fn round_to_i64(self, value: &BigDecimal) -> i64 {
        let rounded = value.with_scale_round(0, self.mode());
        rounded.to_i64().unwrap_or(if rounded < BigDecimal::zero() {
            i64::MIN
        } else {
            i64::MAX
        })
    }
}

/// 客戶所有訂單金額總和；沒有訂單時為 0
pub fn turnover(customer: &Customer) -> BigDecimal {
    customer
        .orders
        .iter()
        .fold(BigDecimal::zero(), |acc, order| acc + &order.total)
}

pub fn order_count(customer: &Customer) -> usize {
    customer.orders.len()
}

/// 最早的訂單日期；沒有訂單時未定義
pub fn first_order_date(customer: &Customer) -> Option<NaiveDateTime> {
    customer.orders.iter().map(|order| order.order_date).min()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CityStatistics<'a> {
    pub city: &'a str,
    pub average_income: i64,
    pub average_intensity: i64,
}

/// Op9：依城市分組，計算每位客戶平均營業額與平均訂單數。
///
/// 平均值以客戶為單位：`average_income` 是每位客戶訂單總和的平均，
/// `average_intensity` 是城市訂單總數除以客戶數。
pub fn city_statistics(customers: &[Customer], rounding: Rounding) -> Vec<CityStatistics<'_>> {
    let result: Vec<CityStatistics<'_>> = group_by_key(customers, |c| c.city.as_str())
        .into_iter()
        .map(|(city, members)| {
            let count = BigDecimal::from(members.len() as u64);
            let income_sum = members
                .iter()
                .fold(BigDecimal::zero(), |acc, c| acc + turnover(c));
            let order_sum: u64 = members.iter().map(|c| order_count(c) as u64).sum();

            CityStatistics {
                city,
                average_income: rounding.round_to_i64(&(income_sum / &count)),
                average_intensity: rounding.round_to_i64(&(BigDecimal::from(order_sum) / &count)),
            }
        })
        .collect();

    tracing::debug!(
        "city_statistics: {} customers -> {} cities ({:?})",
        customers.len(),
        result.len(),
        rounding
    );
    result
}
