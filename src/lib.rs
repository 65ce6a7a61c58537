pub mod cli;
pub mod common;
pub mod error;
pub mod float;
pub mod ip_count;
pub mod list;
pub mod ordinal;
pub mod output;

pub mod commands {
    pub mod dispatch;
    pub mod handle_count;
    pub mod handle_list;
    pub mod handle_ordinal;
    pub mod handle_roundup;
}
