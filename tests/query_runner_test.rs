use anyhow::Result;
use record_query::config::toml_config::DatasetKind;
use record_query::utils::validation::Validate;
use record_query::{QueryConfig, QueryKind, QueryRunner};
use serde_json::json;
use std::fs;
use tempfile::TempDir;

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/dataset.json");

/// TOML 配置 -> 載入 JSON 資料集 -> 執行查詢
#[test]
fn test_config_driven_run_over_json_dataset() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("query.toml");
    let fixture = FIXTURE.replace('\\', "/");

    fs::write(
        &config_path,
        format!(
            r#"
[dataset]
path = "{}"

[parameters]
turnover_limit = "2000"
order_limit = "1000"

[price_tiers]
cheap = "15"
middle = "20"
expensive = "100"
"#,
            fixture
        ),
    )?;

    let config = QueryConfig::from_file(&config_path)?;
    config.validate()?;

    let dataset = config.dataset()?.source().load()?;
    let runner = QueryRunner::new(&dataset, &config);

    let turnover = runner.run(QueryKind::TurnoverAbove)?;
    assert_eq!(
        turnover.body,
        json!([
            { "customer_id": "ALFKI", "company_name": "Alfreds Futterkiste" },
            { "customer_id": "BSBEV", "company_name": "B's Beverages" },
        ])
    );

    let tiers = runner.run(QueryKind::PriceTiers)?;
    assert_eq!(tiers.row_count, 3);
    assert_eq!(tiers.body[0]["products"], json!(["Aniseed Syrup", "Guaraná Fantástica"]));
    assert_eq!(tiers.body[2]["products"], json!(["Chef Anton's Cajun Seasoning", "Côte de Blaye"]));

    let reports = runner.run_all()?;
    assert_eq!(reports.len(), QueryKind::ALL.len());
    let countries = reports
        .iter()
        .find(|r| r.query == QueryKind::SupplierCountries)
        .map(|r| r.body.clone());
    assert_eq!(countries, Some(json!("UKUSASpainGermany")));

    Ok(())
}

/// 資料夾來源：客戶 JSON + 供應商/商品 CSV
#[test]
fn test_directory_dataset_with_csv_tables() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let dir = temp_dir.path();

    fs::write(
        dir.join("customers.json"),
        r#"[
  { "customer_id": "C1", "company_name": "One", "city": "London", "country": "UK",
    "region": "Essex", "postal_code": "12345", "phone": "(171) 555",
    "orders": [ { "order_id": 1, "order_date": "1997-01-02T00:00:00", "total": 10.1 } ] }
]"#,
    )?;
    fs::write(
        dir.join("suppliers.csv"),
        "supplier_name,address,city,country\nExotic Liquids,,London,UK\nTokyo Traders,,Tokyo,Japan\n",
    )?;
    fs::write(
        dir.join("products.csv"),
        "product_id,product_name,category,unit_price,units_in_stock\n1,Chai,Beverages,18.1,39\n",
    )?;

    let toml_content = format!(
        "[dataset]\npath = \"{}\"\nkind = \"directory\"\n",
        dir.to_string_lossy().replace('\\', "/")
    );
    let config = QueryConfig::from_toml_str(&toml_content)?;
    assert_eq!(config.dataset()?.kind, DatasetKind::Directory);

    let dataset = config.dataset()?.source().load()?;
    assert_eq!(dataset.customers[0].orders[0].total.to_string(), "10.1");
    assert_eq!(dataset.products[0].unit_price.to_string(), "18.1");

    let runner = QueryRunner::new(&dataset, &config);
    let joined = runner.run(QueryKind::SuppliersByLocationGrouped)?;
    assert_eq!(joined.body[0]["suppliers"], json!(["Exotic Liquids"]));

    let countries = runner.run(QueryKind::SupplierCountries)?;
    assert_eq!(countries.body, json!("UKJapan"));

    Ok(())
}

/// 負的營業額上限：沒有訂單的客戶 (營業額 0) 也會被選入
#[test]
fn test_negative_turnover_limit_from_config() -> Result<()> {
    let toml_content = format!(
        "[dataset]\npath = \"{}\"\n\n[parameters]\nturnover_limit = \"-1\"\n",
        FIXTURE.replace('\\', "/")
    );
    let config = QueryConfig::from_toml_str(&toml_content)?;
    config.validate()?;

    let dataset = config.dataset()?.source().load()?;
    let report = QueryRunner::new(&dataset, &config).run(QueryKind::TurnoverAbove)?;

    assert_eq!(report.row_count, dataset.customers.len());
    let ids: Vec<&str> = report
        .body
        .as_array()
        .into_iter()
        .flatten()
        .filter_map(|row| row["customer_id"].as_str())
        .collect();
    assert!(ids.contains(&"PARIS"));

    Ok(())
}

#[test]
fn test_missing_dataset_section() {
    let config = QueryConfig::from_toml_str("[output]\npretty = true\n").unwrap();
    let err = config.dataset().unwrap_err();
    assert!(err.is_user_error());
    assert_eq!(err.exit_code(), 1);
}
