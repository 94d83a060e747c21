//! CLI argument definitions for the inventory reconciler.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use invrec_model::{MalformedRowPolicy, ValueComparison};

#[derive(Parser)]
#[command(
    name = "invrec",
    version,
    about = "Inventory reconciler - Compare a supplier feed with a storefront export",
    long_about = "Reconcile a supplier inventory feed against a storefront catalog export.\n\n\
                  Produces new-product, zero-inventory, quantity-mismatch and\n\
                  cost-mismatch reports, and updates the known SKU list."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Reconcile the inputs of a folder and write the reports.
    Reconcile(ReconcileArgs),

    /// List the report files a run produces.
    Outputs,
}

#[derive(Parser, Debug, Clone)]
pub struct ReconcileArgs {
    /// Folder holding all_skus.csv, shopify_data.csv, to_add.csv and the supplier file.
    #[arg(long = "input-folder", alias = "input_folder", value_name = "DIR")]
    pub input_folder: PathBuf,

    /// File name of the cleaned supplier feed inside the input folder.
    #[arg(long = "clean-file", alias = "clean_file", value_name = "FILE")]
    pub clean_file: String,

    /// Directory for the reports (default: the input folder).
    ///
    /// The updated known SKU list is written here as all_skus.csv; with the
    /// default it replaces the list that was read.
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Reconcile and report without writing any file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Handling of catalog rows whose size and quantity lists differ in length.
    #[arg(long = "on-malformed", value_enum, default_value = "fail")]
    pub on_malformed: MalformedArg,

    /// Size value marking a product without size variants.
    #[arg(long = "one-size", value_name = "SIZE", default_value = "OS")]
    pub one_size: String,

    /// How quantities and unit costs are compared.
    #[arg(long = "compare", value_enum, default_value = "exact")]
    pub compare: CompareArg,

    /// Also write a JSON run summary to this path.
    #[arg(long = "summary-json", value_name = "PATH")]
    pub summary_json: Option<PathBuf>,
}

impl ReconcileArgs {
    pub fn new(input_folder: impl Into<PathBuf>, clean_file: impl Into<String>) -> Self {
        Self {
            input_folder: input_folder.into(),
            clean_file: clean_file.into(),
            output_dir: None,
            dry_run: false,
            on_malformed: MalformedArg::Fail,
            one_size: "OS".to_string(),
            compare: CompareArg::Exact,
            summary_json: None,
        }
    }

    pub fn output_dir(&self) -> PathBuf {
        self.output_dir
            .clone()
            .unwrap_or_else(|| self.input_folder.clone())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum MalformedArg {
    Fail,
    Skip,
}

impl From<MalformedArg> for MalformedRowPolicy {
    fn from(value: MalformedArg) -> Self {
        match value {
            MalformedArg::Fail => MalformedRowPolicy::Fail,
            MalformedArg::Skip => MalformedRowPolicy::Skip,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CompareArg {
    Exact,
    Numeric,
}

impl From<CompareArg> for ValueComparison {
    fn from(value: CompareArg) -> Self {
        match value {
            CompareArg::Exact => ValueComparison::Exact,
            CompareArg::Numeric => ValueComparison::Numeric,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reconcile_args(argv: &[&str]) -> ReconcileArgs {
        let cli = Cli::try_parse_from(argv).expect("parse args");
        match cli.command {
            Command::Reconcile(args) => args,
            Command::Outputs => panic!("expected reconcile"),
        }
    }

    #[test]
    fn parses_reconcile_defaults() {
        let args = reconcile_args(&[
            "invrec",
            "reconcile",
            "--input-folder",
            "data",
            "--clean-file",
            "clean.csv",
        ]);
        assert_eq!(args.input_folder, PathBuf::from("data"));
        assert_eq!(args.clean_file, "clean.csv");
        assert_eq!(args.output_dir(), PathBuf::from("data"));
        assert!(!args.dry_run);
        assert_eq!(args.on_malformed, MalformedArg::Fail);
        assert_eq!(args.one_size, "OS");
        assert_eq!(args.compare, CompareArg::Exact);
    }

    #[test]
    fn accepts_underscore_aliases_and_options() {
        let args = reconcile_args(&[
            "invrec",
            "reconcile",
            "--input_folder",
            "data",
            "--clean_file",
            "clean.csv",
            "--output-dir",
            "out",
            "--on-malformed",
            "skip",
            "--compare",
            "numeric",
            "--one-size",
            "ONE",
            "--dry-run",
        ]);
        assert_eq!(args.one_size, "ONE");
        assert_eq!(args.output_dir(), PathBuf::from("out"));
        assert!(args.dry_run);
        assert_eq!(
            MalformedRowPolicy::from(args.on_malformed),
            MalformedRowPolicy::Skip
        );
        assert_eq!(
            ValueComparison::from(args.compare),
            ValueComparison::Numeric
        );
    }

    #[test]
    fn clean_file_is_required() {
        let result = Cli::try_parse_from(["invrec", "reconcile", "--input-folder", "data"]);
        assert!(result.is_err());
    }
}
