//! # 解析器模块
//!
//! 读取外部提供的作业参数。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: params

pub mod params;
