//! 客戶篩選運算子 (Op1、Op3、Op6)。所有篩選都保留輸入順序。

use crate::core::aggregate::turnover;
use crate::domain::model::Customer;
use bigdecimal::BigDecimal;
use serde::Serialize;

/// Op1：訂單總額嚴格大於 `limit` 的客戶
pub fn customers_with_turnover_above<'a>(
    customers: &'a [Customer],
    limit: &BigDecimal,
) -> Vec<&'a Customer> {
    let result: Vec<&Customer> = customers
        .iter()
        .filter(|customer| turnover(customer) > *limit)
        .collect();

    tracing::debug!(
        "customers_with_turnover_above({}): {} -> {}",
        limit,
        customers.len(),
        result.len()
    );
    result
}

/// Op3：至少有一筆訂單金額嚴格大於 `limit` 的客戶
pub fn customers_with_order_above<'a>(
    customers: &'a [Customer],
    limit: &BigDecimal,
) -> Vec<&'a Customer> {
    let result: Vec<&Customer> = customers
        .iter()
        .filter(|customer| customer.orders.iter().any(|order| order.total > *limit))
        .collect();

    tracing::debug!(
        "customers_with_order_above({}): {} -> {}",
        limit,
        customers.len(),
        result.len()
    );
    result
}

/// 客戶資料品質問題
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DataDefects {
    /// 郵遞區號非空且含有非數字字元
    pub non_digit_postal_code: bool,
    /// 地區未定義 (null 或空字串)
    pub missing_region: bool,
    /// 電話非空但缺少區碼括號
    pub missing_operator_code: bool,
}

impl DataDefects {
    pub fn of(customer: &Customer) -> Self {
        let postal_code = &customer.postal_code;
        let phone = &customer.phone;

        Self {
            non_digit_postal_code: !postal_code.is_empty()
                && postal_code.chars().any(|c| !c.is_ascii_digit()),
            missing_region: customer.region.as_deref().map_or(true, str::is_empty),
            missing_operator_code: !phone.is_empty()
                && !(phone.contains('(') && phone.contains(')')),
        }
    }

    pub fn any(&self) -> bool {
        self.non_digit_postal_code || self.missing_region || self.missing_operator_code
    }
}

/// Op6：至少符合一項資料品質問題的客戶，每位客戶最多出現一次
pub fn customers_with_data_defects(customers: &[Customer]) -> Vec<&Customer> {
    let result: Vec<&Customer> = customers
        .iter()
        .filter(|customer| DataDefects::of(customer).any())
        .collect();

    tracing::debug!(
        "customers_with_data_defects: {} -> {}",
        customers.len(),
        result.len()
    );
    result
}
