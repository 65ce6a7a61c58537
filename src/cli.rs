use clap::{Parser, Subcommand};

/// CLIの定義
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Small numeric, network and string helpers: CIDR address counting, round-up, ordinals and lists."
)]
pub struct Cli {
    #[arg(
        short = 'f',
        long = "format",
        default_value = "txt",
        global = true,
        hide_default_value = true,
        help = "Select output format: 'txt' or 'json'.\ndefault: txt"
    )]
    pub output_format: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Count the addresses in each CIDR block.
    Count {
        #[arg(
            required = true,
            num_args = 1..,
            help = "Specify CIDR blocks.\nExample: 1.2.3.4/24 2402:9400::1/64"
        )]
        cidrs: Vec<String>,
    },

    /// Format integers as ordinals (1st, 2nd, 3rd, ...).
    Ordinal {
        #[arg(
            required = true,
            num_args = 1..,
            allow_negative_numbers = true,
            value_parser = clap::value_parser!(i64),
            help = "Specify integers.\nExample: 1 2 11 -21"
        )]
        numbers: Vec<i64>,
    },

    /// Extract the leading integer of ordinal strings.
    FromOrdinal {
        #[arg(
            required = true,
            num_args = 1..,
            allow_hyphen_values = true,
            help = "Specify ordinals.\nExample: 1st 22nd 113th"
        )]
        ordinals: Vec<String>,
    },

    /// Round numbers up to one decimal place.
    Roundup {
        #[arg(
            required = true,
            num_args = 1..,
            allow_negative_numbers = true,
            value_parser = clap::value_parser!(f64),
            help = "Specify numbers.\nExample: 4.02 6.4467"
        )]
        values: Vec<f64>,
    },

    /// Join items into a delimited list.
    List {
        #[arg(
            short = 'd',
            long = "delim",
            default_value_t = ',',
            help = "Delimiter character placed between items."
        )]
        delim: char,

        #[arg(
            long = "no-conjunction",
            default_value = "false",
            help = "Do not insert 'and' before the last item."
        )]
        no_conjunction: bool,

        #[arg(required = true, num_args = 1.., help = "Items to join.\nExample: Dagger Sword Spear")]
        items: Vec<String>,
    },
}
