//! inquirykit CLI - builds the Public Inquiry Consulting Toolkit workbook.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use inquirykit_io_xlsx::SpecXlsxReport;
use inquirykit_log::{EnumLogFormat, SpecLogOptions, init_logging};
use inquirykit_toolkit::conf::{
    C_FILE_OUT_DEFAULT, N_ROWS_REGISTER_DEFAULT, N_ROWS_VALIDATION_HEADROOM_DEFAULT,
};
use inquirykit_toolkit::{SpecToolkitOptions, write_toolkit, write_toolkit_to_buffer};

/// Public inquiry consulting toolkit workbook generator
#[derive(Parser)]
#[command(name = "inquirykit", version, about = "Build the inquiry consulting toolkit workbook")]
struct Cli {
    /// Log rendering on stderr
    #[arg(long, global = true, value_enum, default_value = "pretty")]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the workbook and save it
    Build {
        /// Output file path
        #[arg(short, long, env = "INQUIRYKIT_OUTPUT", default_value = C_FILE_OUT_DEFAULT)]
        output: PathBuf,

        #[command(flatten)]
        layout: LayoutArgs,

        /// Report rendering on stdout
        #[arg(long, value_enum, default_value = "text")]
        report: ReportFormat,
    },

    /// Build the workbook in memory and print its sheet manifest
    List {
        #[command(flatten)]
        layout: LayoutArgs,

        /// Report rendering on stdout
        #[arg(long, value_enum, default_value = "text")]
        report: ReportFormat,
    },
}

#[derive(clap::Args)]
struct LayoutArgs {
    /// Blank numbered rows in each register sheet
    #[arg(long, default_value_t = N_ROWS_REGISTER_DEFAULT)]
    register_rows: usize,

    /// Rows past the last risk that keep the risk register dropdowns
    #[arg(long, default_value_t = N_ROWS_VALIDATION_HEADROOM_DEFAULT)]
    validation_headroom: usize,
}

impl From<&LayoutArgs> for SpecToolkitOptions {
    fn from(args: &LayoutArgs) -> Self {
        Self {
            n_rows_register: args.register_rows,
            n_rows_validation_headroom: args.validation_headroom,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum LogFormat {
    Pretty,
    Json,
}

impl From<LogFormat> for EnumLogFormat {
    fn from(format: LogFormat) -> Self {
        match format {
            LogFormat::Pretty => EnumLogFormat::Pretty,
            LogFormat::Json => EnumLogFormat::Json,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ReportFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&SpecLogOptions {
        format: cli.log_format.into(),
        ..Default::default()
    });

    match cli.command {
        Commands::Build {
            output,
            layout,
            report,
        } => {
            let result = write_toolkit(&output, &SpecToolkitOptions::from(&layout))
                .with_context(|| format!("failed to build {}", output.display()))?;
            print_report(&result, report)
        }
        Commands::List { layout, report } => {
            let (_, result) = write_toolkit_to_buffer(&SpecToolkitOptions::from(&layout))
                .context("failed to build workbook in memory")?;
            print_report(&result, report)
        }
    }
}

fn print_report(report: &SpecXlsxReport, format: ReportFormat) -> Result<()> {
    match format {
        ReportFormat::Json => println!("{}", report.to_json()?),
        ReportFormat::Text => {
            for sheet in &report.sheets {
                println!(
                    "{:<30} rows={:<4} cols={:<3} formulas={:<3} validations={}",
                    sheet.sheet_name,
                    sheet.n_rows_used,
                    sheet.n_cols_used,
                    sheet.n_formulas,
                    sheet.n_validations
                );
            }
            if let Some(c_file_out) = &report.file_out {
                println!("Saved to {c_file_out}");
            }
            println!("{}", report.format("[TOOLKIT]"));
        }
    }
    Ok(())
}
