//! # 参数文件解析器
//!
//! 读取 `field,value` 两列的 CSV 参数文件，生成字段值映射。
//!
//! ## 格式
//! ```text
//! field,value
//! job_name,relax
//! partition,gpu
//! commands,./vasp_std --np 4
//! ```
//!
//! ## 依赖关系
//! - 被 `commands/generate.rs` 使用
//! - 使用 `models/job.rs`
//! - 使用 `csv` + `serde`

use crate::error::{Result, SbatchError};
use crate::models::FieldValues;

use serde::Deserialize;
use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// 参数文件中的一行
#[derive(Debug, Deserialize)]
struct ParamRow {
    field: String,
    value: String,
}

/// 解析参数文件
pub fn parse_params_file(path: &Path) -> Result<FieldValues> {
    if !path.exists() {
        return Err(SbatchError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let file = File::open(path).map_err(|e| SbatchError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_params(file, &path.display().to_string())
}

/// 从任意读取器解析；`source` 仅用于错误信息
pub fn parse_params<R: Read>(reader: R, source: &str) -> Result<FieldValues> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let mut pairs = Vec::new();
    let mut seen = HashSet::new();

    for row in rdr.deserialize() {
        let row: ParamRow = row?;
        let key = row.field.trim().to_string();
        if key.is_empty() {
            return Err(SbatchError::InvalidParameterFile {
                path: source.to_string(),
                reason: "empty field name".to_string(),
            });
        }
        if !seen.insert(key.clone()) {
            return Err(SbatchError::InvalidParameterFile {
                path: source.to_string(),
                reason: format!("field '{}' given more than once", key),
            });
        }
        // 值保持原样，空白处理交给编译器
        pairs.push((key, row.value));
    }

    FieldValues::from_pairs(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FieldId;

    #[test]
    fn test_parse_params() {
        let text = "field,value\njob_name,relax\npartition, gpu \ncommands,./run.x --flag value\n";
        let values = parse_params(text.as_bytes(), "inline").unwrap();
        assert_eq!(values.raw(FieldId::JobName), "relax");
        assert_eq!(values.raw(FieldId::Partition), " gpu ");
        assert_eq!(values.raw(FieldId::Commands), "./run.x --flag value");
        assert!(!values.is_set(FieldId::Nodes));
    }

    #[test]
    fn test_quoted_comma_value() {
        let text = "field,value\nmodules,\"gcc,openmpi\"\nmem,\n";
        let values = parse_params(text.as_bytes(), "inline").unwrap();
        assert_eq!(values.raw(FieldId::Modules), "gcc,openmpi");
        assert!(!values.is_set(FieldId::Mem));
    }

    #[test]
    fn test_unknown_field() {
        let text = "field,value\naccount,physics\n";
        let err = parse_params(text.as_bytes(), "inline").unwrap_err();
        assert!(matches!(err, SbatchError::UnknownField { ref field } if field == "account"));
    }

    #[test]
    fn test_duplicate_field() {
        let text = "field,value\nnodes,1\nnodes,2\n";
        let err = parse_params(text.as_bytes(), "inline").unwrap_err();
        assert!(matches!(err, SbatchError::InvalidParameterFile { .. }));
    }

    #[test]
    fn test_missing_column() {
        let text = "field,value\nnodes\n";
        let err = parse_params(text.as_bytes(), "inline").unwrap_err();
        assert!(matches!(err, SbatchError::CsvError(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = parse_params_file(Path::new("/nonexistent/params.csv")).unwrap_err();
        assert!(matches!(err, SbatchError::FileNotFound { .. }));
    }
}
