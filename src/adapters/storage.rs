use crate::domain::model::Sum;
use crate::domain::ports::SumSink;
use crate::utils::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// 把結果寫入單一檔案（覆寫，不加換行）
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SumSink for FileSink {
    fn write_sum(&self, sum: Sum) -> Result<()> {
        // 不建立父目錄：開檔失敗就交給呼叫端略過
        fs::write(&self.path, sum.to_string())?;
        Ok(())
    }
}
