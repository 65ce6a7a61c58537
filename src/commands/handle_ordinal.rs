use crate::common::OutputFormat;
use crate::error::AppError;
use crate::ordinal::{from_ordinal, ordinal};
use crate::output::{Conversion, render_lines};

/// 整数列を序数文字列に変換
pub fn run_ordinal(numbers: &[i64], output_format: OutputFormat) -> Result<String, AppError> {
    let conversions: Vec<Conversion> = numbers
        .iter()
        .map(|n| Conversion::new(n.to_string(), ordinal(*n)))
        .collect();
    render_lines(&conversions, output_format)
}

/// 序数文字列から整数を取り出す。1件でも失敗したらエラー
pub fn run_from_ordinal(
    ordinals: &[String],
    output_format: OutputFormat,
) -> Result<String, AppError> {
    let mut conversions = Vec::with_capacity(ordinals.len());
    for s in ordinals {
        let n = from_ordinal(s)?;
        conversions.push(Conversion::new(s.as_str(), n.to_string()));
    }
    render_lines(&conversions, output_format)
}
