//! 十進位金額的反序列化。
//!
//! `deserialize` 接受字串、整數或浮點數 (JSON、TOML)。浮點數先轉成最短的
//! 十進位字串再解析，`10.1` 會得到 `10.1`，但超過 17 位有效數字的值已經在
//! 格式解析時失去精度。
//!
//! `deserialize_text` 只讀取欄位原文，給 CSV 使用：csv 的 `deserialize_any`
//! 會先把數字欄位猜成 `f64`。

use bigdecimal::BigDecimal;
use serde::de::{self, Deserializer, Visitor};
use std::fmt;
use std::str::FromStr;

struct DecimalVisitor;

impl<'de> Visitor<'de> for DecimalVisitor {
    type Value = BigDecimal;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a decimal number or a decimal string")
    }

    fn visit_str<E>(self, value: &str) -> Result<BigDecimal, E>
    where
        E: de::Error,
    {
        BigDecimal::from_str(value.trim())
            .map_err(|_| E::custom(format!("invalid decimal: {}", value)))
    }

    fn visit_i64<E>(self, value: i64) -> Result<BigDecimal, E>
    where
        E: de::Error,
    {
        Ok(BigDecimal::from(value))
    }

    fn visit_u64<E>(self, value: u64) -> Result<BigDecimal, E>
    where
        E: de::Error,
    {
        Ok(BigDecimal::from(value))
    }

    fn visit_f64<E>(self, value: f64) -> Result<BigDecimal, E>
    where
        E: de::Error,
    {
        if !value.is_finite() {
            return Err(E::custom(format!("invalid decimal: {}", value)));
        }
        self.visit_str(&value.to_string())
    }
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<BigDecimal, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(DecimalVisitor)
}

pub fn deserialize_text<'de, D>(deserializer: D) -> Result<BigDecimal, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_str(DecimalVisitor)
}
