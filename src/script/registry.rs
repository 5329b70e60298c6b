//! # 字段注册表
//!
//! 每个字段标识符绑定一条带位置占位符 `{}` 的指令模板。
//! 表的顺序即编译输出顺序，初始化后不可修改。
//!
//! ## 依赖关系
//! - 被 `script/compiler.rs` 和 `commands/fields.rs` 使用
//! - 使用 `error.rs`

use crate::error::{Result, SbatchError};
use crate::models::FieldId;

/// 模板所属输出区域
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// `#SBATCH` 指令区
    Options,
    /// shell 命令区
    Commands,
}

/// 注册表条目
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    JobName,
    Partition,
    Nodes,
    CpuCores,
    GpuCores,
    Mem,
    Email,
    EmailStart,
    EmailEnd,
    EmailFail,
    WallTime,
    Directory,
    Modules,
    Commands,
}

impl Directive {
    /// 直接对应单个字段的条目
    pub fn for_field(id: FieldId) -> Option<Directive> {
        match id {
            FieldId::JobName => Some(Directive::JobName),
            FieldId::Partition => Some(Directive::Partition),
            FieldId::Nodes => Some(Directive::Nodes),
            FieldId::CpuCores => Some(Directive::CpuCores),
            FieldId::GpuCores => Some(Directive::GpuCores),
            FieldId::Mem => Some(Directive::Mem),
            FieldId::Email => Some(Directive::Email),
            FieldId::Directory => Some(Directive::Directory),
            FieldId::Modules => Some(Directive::Modules),
            FieldId::Commands => Some(Directive::Commands),
            // 三个时间分量合并为一条 --time
            FieldId::WallTimeDays | FieldId::WallTimeHours | FieldId::WallTimeMinutes => None,
        }
    }
}

/// 指令模板
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectiveTemplate {
    pub directive: Directive,
    /// 稳定标识符
    pub id: &'static str,
    pub template: &'static str,
    /// 占位符数量 (0-3)
    pub placeholders: usize,
    pub region: Region,
    /// 注释模式下输出的说明；空串表示不加注释
    pub note: &'static str,
}

const fn entry(
    directive: Directive,
    id: &'static str,
    template: &'static str,
    placeholders: usize,
    region: Region,
    note: &'static str,
) -> DirectiveTemplate {
    DirectiveTemplate {
        directive,
        id,
        template,
        placeholders,
        region,
        note,
    }
}

/// 注册表，顺序与 [`Directive`] 变体一致
#[rustfmt::skip]
static REGISTRY: [DirectiveTemplate; 14] = [
    entry(Directive::JobName, "job_name", "#SBATCH --job-name={}", 1, Region::Options, "job name"),
    entry(Directive::Partition, "partition", "#SBATCH --partition={}", 1, Region::Options, "partition"),
    entry(Directive::Nodes, "nodes", "#SBATCH --nodes={}", 1, Region::Options, "number of nodes"),
    entry(Directive::CpuCores, "cpu_cores", "#SBATCH --ntasks={}", 1, Region::Options, "number of tasks"),
    entry(Directive::GpuCores, "gpu_cores", "#SBATCH --gres=gpu:{}", 1, Region::Options, "number of gpus per node"),
    entry(Directive::Mem, "mem", "#SBATCH --mem={}G", 1, Region::Options, "memory per node"),
    entry(Directive::Email, "email", "#SBATCH --mail-user={}", 1, Region::Options, "email address"),
    entry(Directive::EmailStart, "email_start", "#SBATCH --mail-type=BEGIN", 0, Region::Options, ""),
    entry(Directive::EmailEnd, "email_end", "#SBATCH --mail-type=END", 0, Region::Options, ""),
    entry(Directive::EmailFail, "email_fail", "#SBATCH --mail-type=FAIL", 0, Region::Options, ""),
    entry(Directive::WallTime, "wall_time", "#SBATCH --time={}-{}:{}", 3, Region::Options, "wall time D-HH:MM"),
    entry(Directive::Directory, "directory", "cd {}", 1, Region::Commands, "Run the job from this directory"),
    entry(Directive::Modules, "modules", "module load {}", 1, Region::Commands, "Load modules"),
    entry(Directive::Commands, "commands", "srun {}", 1, Region::Commands, "Run the job"),
];

/// 全部模板，按编译顺序
pub fn entries() -> &'static [DirectiveTemplate] {
    &REGISTRY
}

/// 按条目取模板
pub fn template(directive: Directive) -> &'static DirectiveTemplate {
    let t = &REGISTRY[directive as usize];
    debug_assert_eq!(t.directive, directive);
    t
}

/// 按字符串标识符取模板
pub fn template_for(id: &str) -> Result<&'static DirectiveTemplate> {
    REGISTRY
        .iter()
        .find(|t| t.id == id)
        .ok_or_else(|| SbatchError::UnknownField {
            field: id.to_string(),
        })
}

impl DirectiveTemplate {
    /// 依次替换占位符，不含换行
    pub fn fill(&self, args: &[&str]) -> String {
        debug_assert_eq!(
            args.len(),
            self.placeholders,
            "wrong argument count for template '{}'",
            self.id
        );

        let mut out = String::with_capacity(self.template.len() + 32);
        let mut pieces = self.template.split("{}");
        if let Some(head) = pieces.next() {
            out.push_str(head);
        }
        for (piece, arg) in pieces.zip(args.iter().chain(std::iter::repeat(&""))) {
            out.push_str(arg);
            out.push_str(piece);
        }
        out
    }

    /// 渲染为完整行（以换行结尾）
    ///
    /// 注释模式下，指令行追加 `\t\t# 说明`，命令行前加一行 `# 说明`。
    pub fn render(&self, args: &[&str], annotate: bool) -> String {
        let line = self.fill(args);
        if !annotate || self.note.is_empty() {
            return format!("{}\n", line);
        }
        match self.region {
            Region::Options => format!("{}\t\t# {}\n", line, self.note),
            Region::Commands => format!("# {}\n{}\n", self.note, line),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_order_matches_directive() {
        for (i, t) in entries().iter().enumerate() {
            assert_eq!(t.directive as usize, i, "registry out of order at '{}'", t.id);
        }
    }

    #[test]
    fn test_placeholder_counts() {
        for t in entries() {
            assert_eq!(t.template.matches("{}").count(), t.placeholders, "{}", t.id);
            assert!(t.placeholders <= 3);
        }
    }

    #[test]
    fn test_template_for() {
        let t = template_for("gpu_cores").unwrap();
        assert_eq!(t.template, "#SBATCH --gres=gpu:{}");
        assert_eq!(template_for("email_fail").unwrap().placeholders, 0);
        assert_eq!(template_for("wall_time").unwrap().placeholders, 3);

        let err = template_for("account").unwrap_err();
        assert!(matches!(err, SbatchError::UnknownField { ref field } if field == "account"));
    }

    #[test]
    fn test_field_lookup() {
        for id in FieldId::ALL {
            if let Some(d) = Directive::for_field(id) {
                assert_eq!(template(d).id, id.as_str());
            }
        }
        assert_eq!(Directive::for_field(FieldId::WallTimeHours), None);
    }

    #[test]
    fn test_fill() {
        assert_eq!(template(Directive::Mem).fill(&["16"]), "#SBATCH --mem=16G");
        assert_eq!(
            template(Directive::WallTime).fill(&["1", "02", "30"]),
            "#SBATCH --time=1-02:30"
        );
        assert_eq!(
            template(Directive::EmailEnd).fill(&[]),
            "#SBATCH --mail-type=END"
        );
    }

    #[test]
    fn test_render_annotated() {
        let nodes = template(Directive::Nodes);
        assert_eq!(nodes.render(&["2"], false), "#SBATCH --nodes=2\n");
        assert_eq!(
            nodes.render(&["2"], true),
            "#SBATCH --nodes=2\t\t# number of nodes\n"
        );
        assert_eq!(
            template(Directive::EmailStart).render(&[], true),
            "#SBATCH --mail-type=BEGIN\n"
        );
        assert_eq!(
            template(Directive::Modules).render(&["gcc cuda"], true),
            "# Load modules\nmodule load gcc cuda\n"
        );
    }
}
