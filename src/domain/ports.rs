use crate::domain::model::Sum;
use crate::utils::error::Result;

/// 亂數來源
pub trait RandomSource: Send {
    /// 在 [0, upper] 之間均勻抽取一個整數
    fn draw(&mut self, upper: u32) -> u32;
}

/// 結果的檔案輸出端
pub trait SumSink: Send + Sync {
    fn write_sum(&self, sum: Sum) -> Result<()>;
}
