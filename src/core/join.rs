//! 客戶與供應商依 (Country, City) 做左外群組連接 (Op2)。

use crate::core::group::group_by_key;
use crate::domain::keys::LocationKey;
use crate::domain::model::{Customer, Supplier};
use serde::Serialize;
use std::collections::HashMap;

/// 一位客戶與同城市同國家的所有供應商；沒有符合者時 `suppliers` 為空
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerSuppliers<'a> {
    pub customer: &'a Customer,
    pub suppliers: Vec<&'a Supplier>,
}

fn index_suppliers(suppliers: &[Supplier]) -> HashMap<LocationKey<'_>, Vec<&Supplier>> {
    let mut index: HashMap<LocationKey<'_>, Vec<&Supplier>> = HashMap::new();
    for supplier in suppliers {
        index
            .entry(LocationKey::of_supplier(supplier))
            .or_default()
            .push(supplier);
    }
    index
}

/// Op2：直接群組連接，每位客戶輸出一筆
pub fn suppliers_by_location<'a>(
    customers: &'a [Customer],
    suppliers: &'a [Supplier],
) -> Vec<CustomerSuppliers<'a>> {
    let index = index_suppliers(suppliers);

    let result: Vec<CustomerSuppliers<'a>> = customers
        .iter()
        .map(|customer| CustomerSuppliers {
            customer,
            suppliers: index
                .get(&LocationKey::of_customer(customer))
                .cloned()
                .unwrap_or_default(),
        })
        .collect();

    tracing::debug!(
        "suppliers_by_location: {} customers x {} suppliers -> {} rows",
        customers.len(),
        suppliers.len(),
        result.len()
    );
    result
}

/// Op2 (分組版本)：先展開成 (客戶, 供應商或無) 配對，再依客戶重新分組。
///
/// 沒有符合供應商的客戶會帶一個 `None` 佔位，使其在分組後仍然存在；
/// 佔位在輸出前被濾掉。客戶以輸入位置識別，重複的客戶記錄不會被合併。
pub fn suppliers_by_location_grouped<'a>(
    customers: &'a [Customer],
    suppliers: &'a [Supplier],
) -> Vec<CustomerSuppliers<'a>> {
    let index = index_suppliers(suppliers);

    let pairs = customers
        .iter()
        .enumerate()
        .flat_map(|(position, customer)| {
            let matches: Vec<Option<&Supplier>> =
                match index.get(&LocationKey::of_customer(customer)) {
                    Some(found) => found.iter().copied().map(Some).collect(),
                    None => vec![None],
                };
            matches
                .into_iter()
                .map(move |supplier| (position, customer, supplier))
        });

    let result: Vec<CustomerSuppliers<'a>> = group_by_key(pairs, |(position, _, _)| *position)
        .into_iter()
        .map(|(_, rows)| CustomerSuppliers {
            customer: rows[0].1,
            suppliers: rows.into_iter().filter_map(|(_, _, supplier)| supplier).collect(),
        })
        .collect();

    tracing::debug!(
        "suppliers_by_location_grouped: {} customers x {} suppliers -> {} rows",
        customers.len(),
        suppliers.len(),
        result.len()
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer(id: &str, country: &str, city: &str) -> Customer {
        Customer {
            customer_id: id.to_string(),
            company_name: id.to_string(),
            address: None,
            city: city.to_string(),
            region: None,
            postal_code: String::new(),
            country: country.to_string(),
            phone: String::new(),
            fax: None,
            orders: vec![],
        }
    }

    fn supplier(name: &str, country: &str, city: &str) -> Supplier {
        Supplier {
            supplier_name: name.to_string(),
            address: None,
            city: city.to_string(),
            country: country.to_string(),
        }
    }

    fn names<'a>(row: &'a CustomerSuppliers<'a>) -> Vec<&'a str> {
        row.suppliers.iter().map(|s| s.supplier_name.as_str()).collect()
    }

    fn fixture() -> (Vec<Customer>, Vec<Supplier>) {
        let customers = vec![
            customer("AROUT", "UK", "London"),
            customer("ALFKI", "Germany", "Berlin"),
            customer("LONDN", "Canada", "London"),
            customer("SEVES", "UK", "London"),
        ];
        let suppliers = vec![
            supplier("Exotic Liquids", "UK", "London"),
            supplier("Heli Süßwaren", "Germany", "Berlin"),
            supplier("Specialty Biscuits", "UK", "Manchester"),
            supplier("Thames Teas", "UK", "London"),
        ];
        (customers, suppliers)
    }

    #[test]
    fn test_group_join_keeps_every_customer() {
        let (customers, suppliers) = fixture();
        let result = suppliers_by_location(&customers, &suppliers);

        assert_eq!(result.len(), customers.len());
        assert_eq!(names(&result[0]), vec!["Exotic Liquids", "Thames Teas"]);
        assert_eq!(names(&result[1]), vec!["Heli Süßwaren"]);
        // 同城市不同國家不算符合
        assert!(result[2].suppliers.is_empty());
        assert_eq!(result[3].customer.customer_id, "SEVES");
    }

    #[test]
    fn test_grouped_formulation_matches_direct_join() {
        let (customers, suppliers) = fixture();
        let direct = suppliers_by_location(&customers, &suppliers);
        let grouped = suppliers_by_location_grouped(&customers, &suppliers);

        assert_eq!(direct, grouped);
        assert!(grouped[2].suppliers.is_empty());
    }

    #[test]
    fn test_grouped_formulation_keeps_duplicate_customers_apart() {
        let customers = vec![customer("DUP", "UK", "London"), customer("DUP", "UK", "London")];
        let suppliers = vec![supplier("Exotic Liquids", "UK", "London")];

        let grouped = suppliers_by_location_grouped(&customers, &suppliers);
        assert_eq!(grouped.len(), 2);
        assert_eq!(names(&grouped[1]), vec!["Exotic Liquids"]);
    }

    #[test]
    fn test_no_suppliers() {
        let (customers, _) = fixture();
        let result = suppliers_by_location_grouped(&customers, &[]);
        assert_eq!(result.len(), 4);
        assert!(result.iter().all(|row| row.suppliers.is_empty()));
    }
}
