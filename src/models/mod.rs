//! # 数据模型模块
//!
//! 定义作业表单的字段、开关与目录模式。
//!
//! ## 依赖关系
//! - 被 `script/`、`parsers/` 和 `commands/` 使用
//! - 子模块: job

pub mod job;

pub use job::{DirectoryMode, EmailToggles, FieldId, FieldValues, JobForm};
