use crate::cli::Command;
use crate::commands::{
    handle_count::run_count,
    handle_list::run_list,
    handle_ordinal::{run_from_ordinal, run_ordinal},
    handle_roundup::run_roundup,
};
use crate::common::OutputFormat;
use crate::error::AppError;

/// サブコマンドを実行して出力文字列を返す。
/// エラーはここでは表示せず呼び出し元へ返す
pub fn run_command(command: &Command, output_format: OutputFormat) -> Result<String, AppError> {
    tracing::debug!(?output_format, ?command, "dispatching");
    match command {
        Command::Count { cidrs } => run_count(cidrs, output_format),
        Command::Ordinal { numbers } => run_ordinal(numbers, output_format),
        Command::FromOrdinal { ordinals } => run_from_ordinal(ordinals, output_format),
        Command::Roundup { values } => run_roundup(values, output_format),
        Command::List {
            delim,
            no_conjunction,
            items,
        } => run_list(items, *delim, !no_conjunction, output_format),
    }
}
