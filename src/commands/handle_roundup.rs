use crate::common::OutputFormat;
use crate::error::AppError;
use crate::float::roundup;
use crate::output::{Conversion, render_lines};

pub fn run_roundup(values: &[f64], output_format: OutputFormat) -> Result<String, AppError> {
    let mut conversions = Vec::with_capacity(values.len());
    for v in values {
        if !v.is_finite() {
            return Err(AppError::InvalidArgument(format!(
                "{v} is not a finite value"
            )));
        }
        // 4.0 を "4" ではなく "4.0" と表示する
        conversions.push(Conversion::new(v.to_string(), format!("{:?}", roundup(*v))));
    }
    render_lines(&conversions, output_format)
}
