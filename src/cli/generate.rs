//! # generate 子命令 CLI 定义
//!
//! 收集作业参数并生成 sbatch 脚本
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/generate.rs`

use crate::models::DirectoryMode;
use crate::script::sink::DEFAULT_SCRIPT_NAME;

use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// 作业运行目录
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum DirMode {
    /// Run from the submission directory (no cd line)
    Current,
    /// Run from $HOME
    Home,
    /// Run from the path given by --directory
    Other,
}

impl From<DirMode> for DirectoryMode {
    fn from(mode: DirMode) -> Self {
        match mode {
            DirMode::Current => DirectoryMode::CurrentDirectory,
            DirMode::Home => DirectoryMode::HomeDirectory,
            DirMode::Other => DirectoryMode::OtherDirectory,
        }
    }
}

/// generate 子命令参数
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// CSV parameter file with `field,value` rows (flags override its values)
    #[arg(long)]
    pub params: Option<PathBuf>,

    // ─────────────────────────────────────────────────────────────
    // Resources
    // ─────────────────────────────────────────────────────────────
    /// Job name
    #[arg(long)]
    pub job_name: Option<String>,

    /// Partition (use 'sinfo' to see available partitions)
    #[arg(long)]
    pub partition: Option<String>,

    /// Number of nodes
    #[arg(long)]
    pub nodes: Option<String>,

    /// Number of CPU cores / tasks (total)
    #[arg(long)]
    pub cpu_cores: Option<String>,

    /// GPUs per node (only used on partitions containing 'gpu')
    #[arg(long)]
    pub gpu_cores: Option<String>,

    /// Memory per node in GB
    #[arg(long)]
    pub mem: Option<String>,

    // ─────────────────────────────────────────────────────────────
    // Notifications
    // ─────────────────────────────────────────────────────────────
    /// Notification email address
    #[arg(long)]
    pub email: Option<String>,

    /// Send mail when the job starts
    #[arg(long, default_value_t = false)]
    pub email_start: bool,

    /// Send mail when the job ends
    #[arg(long, default_value_t = false)]
    pub email_end: bool,

    /// Send mail when the job fails
    #[arg(long, default_value_t = false)]
    pub email_fail: bool,

    // ─────────────────────────────────────────────────────────────
    // Wall time
    // ─────────────────────────────────────────────────────────────
    /// Wall time days
    #[arg(long = "wall-time-days", visible_alias = "days")]
    pub days: Option<String>,

    /// Wall time hours
    #[arg(long = "wall-time-hours", visible_alias = "hours")]
    pub hours: Option<String>,

    /// Wall time minutes
    #[arg(long = "wall-time-minutes", visible_alias = "minutes")]
    pub minutes: Option<String>,

    // ─────────────────────────────────────────────────────────────
    // Commands
    // ─────────────────────────────────────────────────────────────
    /// Directory to run the job from
    #[arg(long, value_enum, default_value = "current")]
    pub dir_mode: DirMode,

    /// Path used when --dir-mode is 'other'
    #[arg(long)]
    pub directory: Option<String>,

    /// Modules to load (comma-separated)
    #[arg(long)]
    pub modules: Option<String>,

    /// Command to run with srun
    #[arg(long, allow_hyphen_values = true)]
    pub commands: Option<String>,

    // ─────────────────────────────────────────────────────────────
    // Output
    // ─────────────────────────────────────────────────────────────
    /// Output script path
    #[arg(long, env = "SBATCHGEN_OUTPUT", default_value = DEFAULT_SCRIPT_NAME)]
    pub output: PathBuf,

    /// Only print the script, do not write it
    #[arg(long, default_value_t = false)]
    pub no_save: bool,

    /// Add descriptive comments to directives and commands
    #[arg(long, default_value_t = false)]
    pub annotate: bool,
}
