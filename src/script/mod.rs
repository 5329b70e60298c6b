//! # 作业脚本模块
//!
//! 字段注册表、脚本编译器和脚本输出。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: registry, compiler, sink

pub mod compiler;
pub mod registry;
pub mod sink;

pub use compiler::Compiler;
pub use sink::ScriptSink;
