//! # 作业表单数据模型
//!
//! 描述脚本编译器的全部输入：字段值映射、邮件通知开关、工作目录模式。
//!
//! ## 依赖关系
//! - 被 `script/`、`parsers/`、`commands/` 使用
//! - 使用 `error.rs`

use crate::error::{Result, SbatchError};

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// 表单字段标识符
///
/// 变体顺序即注册表顺序。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldId {
    JobName,
    Partition,
    Nodes,
    CpuCores,
    GpuCores,
    Mem,
    Email,
    WallTimeDays,
    WallTimeHours,
    WallTimeMinutes,
    Directory,
    Modules,
    Commands,
}

impl FieldId {
    /// 全部字段，按注册表顺序
    pub const ALL: [FieldId; 13] = [
        FieldId::JobName,
        FieldId::Partition,
        FieldId::Nodes,
        FieldId::CpuCores,
        FieldId::GpuCores,
        FieldId::Mem,
        FieldId::Email,
        FieldId::WallTimeDays,
        FieldId::WallTimeHours,
        FieldId::WallTimeMinutes,
        FieldId::Directory,
        FieldId::Modules,
        FieldId::Commands,
    ];

    /// 稳定的字段标识符字符串
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldId::JobName => "job_name",
            FieldId::Partition => "partition",
            FieldId::Nodes => "nodes",
            FieldId::CpuCores => "cpu_cores",
            FieldId::GpuCores => "gpu_cores",
            FieldId::Mem => "mem",
            FieldId::Email => "email",
            FieldId::WallTimeDays => "wall_time_days",
            FieldId::WallTimeHours => "wall_time_hours",
            FieldId::WallTimeMinutes => "wall_time_minutes",
            FieldId::Directory => "directory",
            FieldId::Modules => "modules",
            FieldId::Commands => "commands",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldId {
    type Err = SbatchError;

    fn from_str(s: &str) -> Result<Self> {
        FieldId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| SbatchError::UnknownField {
                field: s.to_string(),
            })
    }
}

/// 字段原始值映射
///
/// 空字符串与缺失等价，均视为未设置。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValues {
    values: BTreeMap<FieldId, String>,
}

impl FieldValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// 从 (标识符, 值) 字符串对构建；未知标识符直接报错
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut values = Self::new();
        for (key, value) in pairs {
            values.set_raw(key.as_ref(), value)?;
        }
        Ok(values)
    }

    /// 设置字段值
    pub fn set(&mut self, id: FieldId, value: impl Into<String>) {
        self.values.insert(id, value.into());
    }

    /// 按字符串标识符设置字段值
    pub fn set_raw(&mut self, key: &str, value: impl Into<String>) -> Result<()> {
        let id: FieldId = key.parse()?;
        self.set(id, value);
        Ok(())
    }

    /// 链式设置
    pub fn with(mut self, id: FieldId, value: impl Into<String>) -> Self {
        self.set(id, value);
        self
    }

    /// 原始值；未设置时返回空串
    pub fn raw(&self, id: FieldId) -> &str {
        self.values.get(&id).map(String::as_str).unwrap_or("")
    }

    /// 原始值是否非空（不去除空白）
    pub fn is_set(&self, id: FieldId) -> bool {
        !self.raw(id).is_empty()
    }

    /// 用另一组值覆盖当前值（逐字段）
    pub fn merge(&mut self, other: FieldValues) {
        self.values.extend(other.values);
    }
}

/// 邮件通知开关，仅在 email 字段非空时生效
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmailToggles {
    pub notify_on_start: bool,
    pub notify_on_end: bool,
    pub notify_on_fail: bool,
}

impl EmailToggles {
    pub fn new(notify_on_start: bool, notify_on_end: bool, notify_on_fail: bool) -> Self {
        EmailToggles {
            notify_on_start,
            notify_on_end,
            notify_on_fail,
        }
    }
}

/// 作业运行目录模式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DirectoryMode {
    /// 当前目录，不输出 cd
    #[default]
    CurrentDirectory,
    /// 用户主目录 ($HOME)
    HomeDirectory,
    /// 由 directory 字段给出路径
    OtherDirectory,
}

/// 完整的作业表单状态
///
/// `Default` 即清空后的表单：无字段、开关全关、当前目录。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobForm {
    pub fields: FieldValues,
    pub toggles: EmailToggles,
    pub dir_mode: DirectoryMode,
}
