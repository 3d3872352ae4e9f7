use crate::domain::model::Supplier;
use std::collections::HashSet;

/// 不重複的供應商國家，依 (字元長度, 字母順序) 排序後串接 (無分隔符)
pub fn supplier_countries(suppliers: &[Supplier]) -> Vec<&str> {
    let mut seen = HashSet::new();
    let mut countries: Vec<&str> = suppliers
        .iter()
        .map(|supplier| supplier.country.as_str())
        .filter(|country| seen.insert(*country))
        .collect();

    countries.sort_by(|a, b| a.chars().count().cmp(&b.chars().count()).then_with(|| a.cmp(b)));
    countries
}

/// Op10
pub fn supplier_country_string(suppliers: &[Supplier]) -> String {
    let countries = supplier_countries(suppliers);
    tracing::debug!(
        "supplier_country_string: {} suppliers -> {} countries",
        suppliers.len(),
        countries.len()
    );
    countries.concat()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suppliers(countries: &[&str]) -> Vec<Supplier> {
        countries
            .iter()
            .map(|country| Supplier {
                supplier_name: format!("{} Trading", country),
                address: None,
                city: "Somewhere".to_string(),
                country: country.to_string(),
            })
            .collect()
    }

    #[test]
    fn test_dedupe_sort_and_concat() {
        let suppliers = suppliers(&["USA", "UK", "Spain", "UK"]);
        assert_eq!(supplier_countries(&suppliers), vec!["UK", "USA", "Spain"]);
        assert_eq!(supplier_country_string(&suppliers), "UKUSASpain");
    }

    #[test]
    fn test_equal_length_sorted_alphabetically_and_case_sensitive() {
        let suppliers = suppliers(&["Japan", "Italy", "Spain", "spain", "Japan"]);
        assert_eq!(
            supplier_countries(&suppliers),
            vec!["Italy", "Japan", "Spain", "spain"]
        );
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        // "𝔸𝔸" 是 2 個字元 (8 bytes)，"Åland" 是 5 個字元 (6 bytes)
        let suppliers = suppliers(&["Åland", "ab", "𝔸𝔸", "Chad", "Ab"]);
        assert_eq!(
            supplier_countries(&suppliers),
            vec!["Ab", "ab", "𝔸𝔸", "Chad", "Åland"]
        );
        assert_eq!(supplier_country_string(&suppliers), "Abab𝔸𝔸ChadÅland");
    }

    #[test]
    fn test_no_suppliers() {
        assert_eq!(supplier_country_string(&[]), "");
    }
}
