use crate::domain::model::Dataset;
use crate::utils::error::Result;

/// 資料來源：負責提供查詢運算子所需的記錄集合
pub trait DataSource {
    fn describe(&self) -> String;
    fn load(&self) -> Result<Dataset>;
}
