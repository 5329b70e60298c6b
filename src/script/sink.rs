//! # 脚本输出
//!
//! 展示编译结果，并按需写入文件。只保留最近一次的脚本。
//!
//! ## 依赖关系
//! - 被 `commands/generate.rs` 使用
//! - 使用 `error.rs`

use crate::error::{Result, SbatchError};

use std::fs::File;
use std::io::Write;
use std::path::Path;

/// 默认保存文件名
pub const DEFAULT_SCRIPT_NAME: &str = "jobscript.sh";

/// 将脚本原样写入目标文件，已存在则覆盖
pub fn persist(script: &str, destination: &Path) -> Result<()> {
    let write_err = |e: std::io::Error| SbatchError::FileWriteError {
        path: destination.display().to_string(),
        source: e,
    };

    let mut file = File::create(destination).map_err(write_err)?;
    file.write_all(script.as_bytes()).map_err(write_err)?;
    file.flush().map_err(write_err)?;
    Ok(())
}

/// 持有"最近一次编译的脚本"
#[derive(Debug, Default)]
pub struct ScriptSink {
    last: Option<String>,
}

impl ScriptSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// 记录脚本，覆盖之前的内容
    pub fn store(&mut self, script: String) {
        self.last = Some(script);
    }

    /// 输出到终端并记录
    pub fn display(&mut self, script: String) {
        print!("{}", script);
        self.store(script);
    }

    /// 保存最近一次的脚本；尚未编译时报错
    pub fn save_last(&self, destination: &Path) -> Result<()> {
        let script = self.last.as_deref().ok_or(SbatchError::NothingToSave)?;
        persist(script, destination)
    }
}
