//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `generate`: 生成 sbatch 脚本
//! - `fields`: 列出字段注册表
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: generate, fields

pub mod fields;
pub mod generate;

use clap::{Parser, Subcommand};

/// sbatchgen - SLURM 作业脚本生成器
#[derive(Parser)]
#[command(name = "sbatchgen")]
#[command(version)]
#[command(about = "Generate SLURM batch job scripts from job parameters", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Compile job parameters into an sbatch script
    Generate(generate::GenerateArgs),

    /// List recognized fields and their directive templates
    Fields(fields::FieldsArgs),
}
