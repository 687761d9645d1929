use crate::highlight::Theme;
use crate::output::OutputFormat;
use crate::query::SearchMode;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file to use instead of the default lookup
    #[clap(long, global = true, value_parser)]
    pub config: Option<PathBuf>,

    #[clap(long, global = true, value_parser, default_value_t = false)]
    pub verbose: bool,

    /// Write log output to this file instead of stderr
    #[clap(long, global = true, value_parser)]
    pub log: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search every line of every file in scope
    Search(SearchArgs),
    /// Open a file at a line with the configured editor
    Open {
        file: PathBuf,

        #[clap(value_parser = clap::value_parser!(u64).range(1..))]
        line: u64,
    },
    /// Print the extension filter in display order
    Extensions,
    /// Generate shell completions
    Completions {
        #[clap(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Text or pattern to search for
    #[clap(default_value = "")]
    pub query: String,

    #[clap(long, value_enum)]
    pub mode: Option<SearchMode>,

    #[clap(short = 's', long, default_value_t = false)]
    pub case_sensitive: bool,

    /// Only match whole words (text mode only)
    #[clap(short = 'w', long, default_value_t = false)]
    pub whole_word: bool,

    /// Limit the search to these folders (repeatable)
    #[clap(long = "include", value_name = "DIR")]
    pub include: Vec<PathBuf>,

    /// Skip everything under these folders (repeatable)
    #[clap(long = "exclude", value_name = "DIR")]
    pub exclude: Vec<PathBuf>,

    /// Also search the secondary root
    #[clap(long, default_value_t = false)]
    pub secondary: bool,

    /// Default root searched when no --include is given
    #[clap(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Secondary root added by --secondary
    #[clap(long, value_name = "DIR")]
    pub secondary_root: Option<PathBuf>,

    /// Enable exactly these extensions
    #[clap(long = "ext", value_name = "EXT", value_delimiter = ',')]
    pub extensions: Vec<String>,

    /// Disable these extensions
    #[clap(long = "disable-ext", value_name = "EXT", value_delimiter = ',')]
    pub disabled_extensions: Vec<String>,

    /// Skip hidden and gitignored files
    #[clap(long, default_value_t = false)]
    pub respect_ignore: bool,

    #[clap(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[clap(long, value_enum, default_value_t = MarkerStyle::Auto)]
    pub marker: MarkerStyle,

    #[clap(long, value_enum)]
    pub theme: Option<Theme>,

    /// Show file headers only
    #[clap(long, default_value_t = false)]
    pub collapse: bool,

    /// Open the N-th match (1-based) after listing results
    #[clap(long, value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
    pub open: Option<u64>,

    #[clap(long, default_value_t = false)]
    pub no_progress: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MarkerStyle {
    /// ANSI when stdout is a terminal, otherwise none
    #[default]
    Auto,
    Ansi,
    /// Rich-text color tags
    Rich,
    Plain,
}
