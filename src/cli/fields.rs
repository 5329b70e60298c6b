//! # fields 子命令 CLI 定义
//!
//! 查看字段注册表
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/fields.rs`

use clap::Args;

/// fields 子命令参数
#[derive(Args, Debug)]
pub struct FieldsArgs {
    /// Show only this field (e.g. 'wall_time', 'email_fail')
    pub field: Option<String>,
}
