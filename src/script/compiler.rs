//! # 脚本编译器
//!
//! 把表单状态编译为 sbatch 脚本文本。
//!
//! ## 规则
//! - 指令区在前、命令区在后，各区内部按注册表顺序
//! - 除 commands 外，字段值去除全部空白字符（不只是首尾）
//! - 非空判断基于原始值：纯空白值会产生一条空值指令
//! - gpu_cores 仅在 partition 含 "gpu" 子串时输出
//! - 三个时间分量合并为一条 --time，只输出一次
//!
//! ## 依赖关系
//! - 被 `commands/generate.rs` 使用
//! - 使用 `script/registry.rs`, `models/`

use super::registry::{template, Directive};
use crate::models::{DirectoryMode, EmailToggles, FieldId, FieldValues};

/// 脚本首行
pub const SHEBANG: &str = "#!/bin/bash\n";

/// HomeDirectory 模式下 cd 的目标
pub const HOME_TOKEN: &str = "$HOME";

/// 一次性写入指令区的单值字段
const SIMPLE_OPTIONS: [FieldId; 6] = [
    FieldId::JobName,
    FieldId::Partition,
    FieldId::Nodes,
    FieldId::CpuCores,
    FieldId::GpuCores,
    FieldId::Mem,
];

/// 空白字符：Unicode White_Space，外加 U+001C..=U+001F 分隔符
fn is_blank(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// 去除字符串中所有空白字符
pub fn strip_whitespace(value: &str) -> String {
    value.chars().filter(|&c| !is_blank(c)).collect()
}

/// 时/分补零到两位；空值为 "00"，两位及以上原样保留
fn pad_two(value: &str) -> String {
    match value.chars().count() {
        0 => "00".to_string(),
        1 => format!("0{}", value),
        _ => value.to_string(),
    }
}

/// 脚本编译器
#[derive(Debug, Clone, Copy, Default)]
pub struct Compiler {
    annotate: bool,
}

impl Compiler {
    pub fn new() -> Self {
        Self::default()
    }

    /// 是否在输出中附加说明注释
    pub fn annotated(mut self, annotate: bool) -> Self {
        self.annotate = annotate;
        self
    }

    /// 编译完整脚本
    pub fn compile(
        &self,
        fields: &FieldValues,
        toggles: EmailToggles,
        dir_mode: DirectoryMode,
    ) -> String {
        let mut options = String::new();
        let mut commands = String::new();

        self.push_simple_options(&mut options, fields);
        self.push_email(&mut options, fields, toggles);
        self.push_wall_time(&mut options, fields);
        self.push_directory(&mut commands, fields, dir_mode);
        self.push_modules(&mut commands, fields);
        self.push_run_command(&mut commands, fields);

        format!("{}{}\n{}\n", SHEBANG, options, commands)
    }

    fn line(&self, directive: Directive, args: &[&str]) -> String {
        template(directive).render(args, self.annotate)
    }

    fn push_simple_options(&self, options: &mut String, fields: &FieldValues) {
        // gpu 判定读取整张映射中的 partition，与遍历位置无关
        let partition = strip_whitespace(fields.raw(FieldId::Partition));
        let gpu_partition = partition.contains("gpu");

        for id in SIMPLE_OPTIONS {
            if !fields.is_set(id) {
                continue;
            }
            if id == FieldId::GpuCores && !gpu_partition {
                continue;
            }
            let Some(directive) = Directive::for_field(id) else {
                continue;
            };
            let value = strip_whitespace(fields.raw(id));
            options.push_str(&self.line(directive, &[&value]));
        }
    }

    fn push_email(&self, options: &mut String, fields: &FieldValues, toggles: EmailToggles) {
        if !fields.is_set(FieldId::Email) {
            return;
        }
        let email = strip_whitespace(fields.raw(FieldId::Email));
        options.push_str(&self.line(Directive::Email, &[&email]));

        let types = [
            (toggles.notify_on_start, Directive::EmailStart),
            (toggles.notify_on_end, Directive::EmailEnd),
            (toggles.notify_on_fail, Directive::EmailFail),
        ];
        for (enabled, directive) in types {
            if enabled {
                options.push_str(&self.line(directive, &[]));
            }
        }
    }

    fn push_wall_time(&self, options: &mut String, fields: &FieldValues) {
        let parts = [
            FieldId::WallTimeDays,
            FieldId::WallTimeHours,
            FieldId::WallTimeMinutes,
        ];
        if !parts.iter().any(|&id| fields.is_set(id)) {
            return;
        }

        let days = strip_whitespace(fields.raw(FieldId::WallTimeDays));
        let days = if days.is_empty() { "0".to_string() } else { days };
        let hours = pad_two(&strip_whitespace(fields.raw(FieldId::WallTimeHours)));
        let minutes = pad_two(&strip_whitespace(fields.raw(FieldId::WallTimeMinutes)));

        options.push_str(&self.line(Directive::WallTime, &[&days, &hours, &minutes]));
    }

    fn push_directory(&self, commands: &mut String, fields: &FieldValues, dir_mode: DirectoryMode) {
        match dir_mode {
            DirectoryMode::CurrentDirectory => {}
            DirectoryMode::HomeDirectory => {
                commands.push_str(&self.line(Directive::Directory, &[HOME_TOKEN]));
            }
            DirectoryMode::OtherDirectory => {
                if fields.is_set(FieldId::Directory) {
                    let dir = strip_whitespace(fields.raw(FieldId::Directory));
                    commands.push_str(&self.line(Directive::Directory, &[&dir]));
                }
            }
        }
    }

    fn push_modules(&self, commands: &mut String, fields: &FieldValues) {
        if !fields.is_set(FieldId::Modules) {
            return;
        }
        let modules = strip_whitespace(fields.raw(FieldId::Modules)).replace(',', " ");
        commands.push_str(&self.line(Directive::Modules, &[&modules]));
    }

    fn push_run_command(&self, commands: &mut String, fields: &FieldValues) {
        // 运行命令保留原始空白（参数之间需要空格）
        if fields.is_set(FieldId::Commands) {
            commands.push_str(&self.line(Directive::Commands, &[fields.raw(FieldId::Commands)]));
        }
    }
}

/// 以默认设置编译
pub fn compile(fields: &FieldValues, toggles: EmailToggles, dir_mode: DirectoryMode) -> String {
    Compiler::new().compile(fields, toggles, dir_mode)
}
