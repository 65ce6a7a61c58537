use crate::common::OutputFormat;
use crate::error::AppError;
use crate::list::delimited_list;
use crate::output::{Conversion, render_lines};

pub fn run_list(
    items: &[String],
    delim: char,
    conjunction: bool,
    output_format: OutputFormat,
) -> Result<String, AppError> {
    let joined = delimited_list(items, delim, conjunction);
    tracing::debug!(count = items.len(), %delim, conjunction, "joined list");
    render_lines(&[Conversion::new(items.join(" "), joined)], output_format)
}
