//! # generate 命令实现
//!
//! 汇总参数文件与命令行参数，编译 sbatch 脚本并保存。
//!
//! ## 功能
//! - 读取可选的 CSV 参数文件
//! - 命令行参数逐字段覆盖文件中的值
//! - 编译脚本、输出到终端、写入文件
//!
//! ## 依赖关系
//! - 使用 `cli/generate.rs` 定义的参数
//! - 使用 `parsers/params.rs`, `script/`, `utils/output.rs`

use crate::cli::generate::GenerateArgs;
use crate::error::Result;
use crate::models::{DirectoryMode, EmailToggles, FieldId, FieldValues, JobForm};
use crate::parsers::params;
use crate::script::compiler::{self, strip_whitespace};
use crate::script::{Compiler, ScriptSink};
use crate::utils::output;

/// 执行 generate 命令
pub fn execute(args: GenerateArgs) -> Result<()> {
    let form = build_form(&args)?;

    if form.dir_mode != DirectoryMode::OtherDirectory && form.fields.is_set(FieldId::Directory) {
        output::print_warning("--directory is ignored unless --dir-mode other is selected");
    }
    if form.fields.is_set(FieldId::GpuCores)
        && !strip_whitespace(form.fields.raw(FieldId::Partition)).contains("gpu")
    {
        output::print_warning("GPU count ignored: partition does not contain 'gpu'");
    }

    output::print_header("SLURM Script Generator");

    let script = if args.annotate {
        Compiler::new()
            .annotated(true)
            .compile(&form.fields, form.toggles, form.dir_mode)
    } else {
        compiler::compile(&form.fields, form.toggles, form.dir_mode)
    };

    let mut sink = ScriptSink::new();
    sink.display(script);
    output::print_separator();

    if args.no_save {
        output::print_info("Script not saved (--no-save)");
        return Ok(());
    }

    sink.save_last(&args.output)?;
    output::print_success(&format!("Script written to {}", args.output.display()));

    Ok(())
}

/// 汇总表单状态：参数文件为底，命令行参数覆盖
fn build_form(args: &GenerateArgs) -> Result<JobForm> {
    let mut fields = match &args.params {
        Some(path) => {
            let values = params::parse_params_file(path)?;
            output::print_info(&format!("Loaded parameters from {}", path.display()));
            values
        }
        None => FieldValues::new(),
    };
    fields.merge(flag_values(args));

    Ok(JobForm {
        fields,
        toggles: EmailToggles::new(args.email_start, args.email_end, args.email_fail),
        dir_mode: args.dir_mode.into(),
    })
}

/// 命令行上显式给出的字段
fn flag_values(args: &GenerateArgs) -> FieldValues {
    let flags = [
        (FieldId::JobName, &args.job_name),
        (FieldId::Partition, &args.partition),
        (FieldId::Nodes, &args.nodes),
        (FieldId::CpuCores, &args.cpu_cores),
        (FieldId::GpuCores, &args.gpu_cores),
        (FieldId::Mem, &args.mem),
        (FieldId::Email, &args.email),
        (FieldId::WallTimeDays, &args.days),
        (FieldId::WallTimeHours, &args.hours),
        (FieldId::WallTimeMinutes, &args.minutes),
        (FieldId::Directory, &args.directory),
        (FieldId::Modules, &args.modules),
        (FieldId::Commands, &args.commands),
    ];

    flags
        .into_iter()
        .filter_map(|(id, value)| value.as_ref().map(|v| (id, v)))
        .fold(FieldValues::new(), |values, (id, v)| values.with(id, v.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use crate::script::sink::DEFAULT_SCRIPT_NAME;
    use clap::Parser;
    use std::fs;
    use tempfile::tempdir;

    fn parse(argv: &[&str]) -> GenerateArgs {
        let mut full = vec!["sbatchgen", "generate"];
        full.extend_from_slice(argv);
        match Cli::try_parse_from(full).unwrap().command {
            Commands::Generate(args) => args,
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn test_flags_to_form() {
        let args = parse(&[
            "--job-name",
            "relax",
            "--email",
            "a@b.com",
            "--email-fail",
            "--dir-mode",
            "home",
            "--commands",
            "./run.x --flag value",
        ]);
        let form = build_form(&args).unwrap();
        assert_eq!(form.fields.raw(FieldId::JobName), "relax");
        assert_eq!(form.fields.raw(FieldId::Commands), "./run.x --flag value");
        assert_eq!(form.toggles, EmailToggles::new(false, false, true));
        assert_eq!(form.dir_mode, DirectoryMode::HomeDirectory);
        assert!(!form.fields.is_set(FieldId::Nodes));
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]);
        assert_eq!(args.dir_mode, crate::cli::generate::DirMode::Current);
        assert!(!args.no_save);
        let form = build_form(&args).unwrap();
        assert_eq!(form, JobForm::default());
    }

    #[test]
    fn test_flags_override_params_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("params.csv");
        fs::write(&path, "field,value\npartition,cpu\nnodes,4\n").unwrap();

        let path_str = path.display().to_string();
        let args = parse(&["--params", &path_str, "--partition", "gpu"]);
        let form = build_form(&args).unwrap();
        assert_eq!(form.fields.raw(FieldId::Partition), "gpu");
        assert_eq!(form.fields.raw(FieldId::Nodes), "4");
    }

    #[test]
    fn test_execute_writes_script() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gpu.sh");
        let path_str = path.display().to_string();
        let args = parse(&[
            "--partition",
            "gpu-a100",
            "--gpu-cores",
            "2",
            "--output",
            &path_str,
        ]);
        execute(args).unwrap();

        let saved = fs::read_to_string(&path).unwrap();
        assert_eq!(
            saved,
            "#!/bin/bash\n#SBATCH --partition=gpu-a100\n#SBATCH --gres=gpu:2\n\n\n"
        );
    }

    #[test]
    fn test_default_output_name() {
        let args = parse(&[]);
        if std::env::var_os("SBATCHGEN_OUTPUT").is_none() {
            assert_eq!(args.output, std::path::PathBuf::from(DEFAULT_SCRIPT_NAME));
        }
    }

    #[test]
    fn test_wall_time_flags() {
        let args = parse(&["--wall-time-days", "1", "--wall-time-hours", "2", "--minutes", "3"]);
        let form = build_form(&args).unwrap();
        assert_eq!(form.fields.raw(FieldId::WallTimeDays), "1");
        assert_eq!(form.fields.raw(FieldId::WallTimeHours), "2");
        assert_eq!(form.fields.raw(FieldId::WallTimeMinutes), "3");
    }

    #[test]
    fn test_annotate_flag() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("annotated.sh");
        let path_str = path.display().to_string();
        let args = parse(&["--nodes", "2", "--annotate", "--output", &path_str]);
        execute(args).unwrap();

        let saved = fs::read_to_string(&path).unwrap();
        assert_eq!(saved, "#!/bin/bash\n#SBATCH --nodes=2\t\t# number of nodes\n\n\n");
    }
}
