//! # fields 命令实现
//!
//! 以表格形式列出字段注册表，顺序即脚本中的输出顺序。
//!
//! ## 依赖关系
//! - 使用 `cli/fields.rs` 定义的参数
//! - 使用 `script/registry.rs`, `utils/output.rs`
//! - 使用 `tabled` 输出表格

use crate::cli::fields::FieldsArgs;
use crate::error::Result;
use crate::script::registry::{self, DirectiveTemplate, Region};
use crate::utils::output;

use tabled::{Table, Tabled};

/// 表格行
#[derive(Tabled)]
struct FieldRow {
    #[tabled(rename = "Field")]
    id: &'static str,
    #[tabled(rename = "Template")]
    template: &'static str,
    #[tabled(rename = "Args")]
    placeholders: usize,
    #[tabled(rename = "Region")]
    region: &'static str,
    #[tabled(rename = "Description")]
    note: &'static str,
}

impl From<&DirectiveTemplate> for FieldRow {
    fn from(t: &DirectiveTemplate) -> Self {
        FieldRow {
            id: t.id,
            template: t.template,
            placeholders: t.placeholders,
            region: match t.region {
                Region::Options => "options",
                Region::Commands => "commands",
            },
            note: t.note,
        }
    }
}

/// 执行 fields 命令
pub fn execute(args: FieldsArgs) -> Result<()> {
    output::print_header("Registered Fields");

    let rows = select_rows(args.field.as_deref())?;
    println!("{}", Table::new(rows));

    Ok(())
}

/// 指定字段时只取该条目，未知标识符报错
fn select_rows(field: Option<&str>) -> Result<Vec<FieldRow>> {
    match field {
        Some(id) => Ok(vec![FieldRow::from(registry::template_for(id)?)]),
        None => Ok(registry::entries().iter().map(FieldRow::from).collect()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_follow_registry() {
        let rows = select_rows(None).unwrap();
        assert_eq!(rows.first().map(|r| r.id), Some("job_name"));
        assert_eq!(rows.last().map(|r| r.id), Some("commands"));

        let table = Table::new(rows).to_string();
        assert!(table.contains("#SBATCH --gres=gpu:{}"));
        assert!(table.contains("wall_time"));
    }

    #[test]
    fn test_single_field() {
        let rows = select_rows(Some("mem")).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].template, "#SBATCH --mem={}G");
        assert_eq!(rows[0].region, "options");

        assert!(matches!(
            select_rows(Some("account")),
            Err(crate::error::SbatchError::UnknownField { .. })
        ));
    }
}
