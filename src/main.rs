//! # sbatchgen - SLURM 作业脚本生成器
//!
//! 将作业参数（分区、资源数量、时限、通知、工作目录、模块、运行命令）
//! 编译为 sbatch 提交脚本。
//!
//! ## 子命令
//! - `generate` - 生成并保存 sbatch 脚本
//! - `fields`   - 列出可识别的字段及其模板
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── parsers/   (参数文件解析)
//!   │     ├── script/    (注册表、编译器、输出)
//!   │     └── models/    (数据模型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod cli;
mod commands;
mod error;
mod models;
mod parsers;
mod script;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&e);
        std::process::exit(1);
    }
}
