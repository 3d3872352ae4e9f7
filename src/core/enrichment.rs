//! 首筆訂單日期 (Op4) 與依日期、營業額、名稱的多鍵排序 (Op5)。

use crate::core::aggregate::{first_order_date, turnover};
use crate::domain::model::Customer;
use chrono::{Datelike, NaiveDateTime};
use serde::Serialize;
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerEntry<'a> {
    pub customer: &'a Customer,
    pub date_of_entry: NaiveDateTime,
}

/// Op4：有訂單的客戶及其首筆訂單日期，沒有訂單的客戶不輸出
pub fn customers_with_first_order(customers: &[Customer]) -> Vec<CustomerEntry<'_>> {
    let result: Vec<CustomerEntry<'_>> = customers
        .iter()
        .filter_map(|customer| {
            first_order_date(customer).map(|date_of_entry| CustomerEntry {
                customer,
                date_of_entry,
            })
        })
        .collect();

    tracing::debug!(
        "customers_with_first_order: {} -> {}",
        customers.len(),
        result.len()
    );
    result
}

/// Op5：同 Op4，排序鍵依序為年 (升冪)、月 (升冪)、營業額 (降冪)、公司名稱 (升冪)。
///
/// 排序是穩定的，所有鍵都相同的客戶保留輸入順序。
pub fn customers_by_entry_date(customers: &[Customer]) -> Vec<CustomerEntry<'_>> {
    // 訂單金額為必填欄位，「至少一筆有金額的訂單」等同「至少一筆訂單」
    let mut keyed: Vec<_> = customers_with_first_order(customers)
        .into_iter()
        .map(|entry| (turnover(entry.customer), entry))
        .collect();

    keyed.sort_by(|(turnover_a, a), (turnover_b, b)| {
        compare_entry_date(a, b)
            .then_with(|| turnover_b.cmp(turnover_a))
            .then_with(|| a.customer.company_name.cmp(&b.customer.company_name))
    });

    tracing::debug!("customers_by_entry_date: sorted {} entries", keyed.len());
    keyed.into_iter().map(|(_, entry)| entry).collect()
}

fn compare_entry_date(a: &CustomerEntry<'_>, b: &CustomerEntry<'_>) -> Ordering {
    a.date_of_entry
        .year()
        .cmp(&b.date_of_entry.year())
        .then_with(|| a.date_of_entry.month().cmp(&b.date_of_entry.month()))
}
