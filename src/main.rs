use bittricks::error::Result;
use bittricks::operation::{Operation, evaluate_all};
use bittricks::output::write_results;
use bittricks::report::{ReportConfig, write_report};
use bittricks::values::read_input;
use clap::{
    CommandFactory, Parser,
    builder::styling::{AnsiColor, Style, Styles},
};
use clio::{Input, Output};
use env_logger::Builder;
use log::{LevelFilter, info, warn};
use std::io::{IsTerminal, Write};
use std::process::ExitCode;

const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Cyan.on_default().bold())
    .usage(AnsiColor::Yellow.on_default().bold())
    .literal(AnsiColor::Yellow.on_default().bold())
    .placeholder(Style::new().dimmed());

fn parse_count(s: &str) -> std::result::Result<usize, String> {
    let v: usize = s
        .parse()
        .map_err(|_| format!("`{s}` is not a valid count"))?;
    if v == 0 {
        Err("count must be at least 1".to_string())
    } else {
        Ok(v)
    }
}

#[derive(Parser)]
#[command(version, about, styles = STYLES, max_term_width = 88)]
struct Cli {
    /// Operation: power-of-two, swap, alt-order, compare, random, even, any-bit-set, bit-count
    #[arg(value_parser = clap::value_parser!(Operation))]
    operation: Operation,

    /// Input file with integer values (decimal, 0x, 0b or 0o literals)
    #[arg(default_value = "-")]
    input: Input,

    /// Output file
    #[arg(default_value = "-")]
    output: Output,

    /// Numbers to draw from the xorshift stream of each seed (random only)
    #[arg(short = 'n', long, default_value = "1", value_parser = parse_count)]
    count: usize,

    /// Report file path
    #[arg(short = 'r', long)]
    report: Option<String>,

    /// Verbosity level (-v for normal logging, -vv for detailed logging)
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbosity: u8,
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Off,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| writeln!(buf, "[{}] {}", buf.timestamp(), record.args()))
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    if cli.input.is_std() && std::io::stdin().is_terminal() {
        #[allow(clippy::unwrap_used)]
        Cli::command().print_help().unwrap();
        return Ok(());
    }

    if cli.count > 1 && cli.operation != Operation::Random {
        warn!(
            "--count only applies to 'random' and is ignored for '{}'",
            cli.operation
        );
    }

    let mut input = cli.input.clone();
    let values = read_input(&mut input, cli.operation)?;

    info!(
        "Evaluating '{}' over {} value(s)",
        cli.operation,
        values.len()
    );
    let evaluations = evaluate_all(cli.operation, &values, cli.count)?;

    let mut output = cli.output.clone();
    let output_name = if output.is_std() {
        "stdout".to_string()
    } else {
        output.path().to_string_lossy().into_owned()
    };

    write_results(&evaluations, &mut output)?;
    info!("{} result(s) written to {}", evaluations.len(), output_name);

    if let Some(ref report_path) = cli.report {
        let input_path = if cli.input.is_std() {
            "<stdin>".to_string()
        } else {
            cli.input.path().to_string_lossy().to_string()
        };

        let output_path = if cli.output.is_std() {
            "<stdout>".to_string()
        } else {
            cli.output.path().to_string_lossy().to_string()
        };

        let config = ReportConfig {
            input_path,
            output_path,
            operation: cli.operation,
            count: cli.count,
        };

        write_report(report_path, &config, &evaluations)?;
        info!("Report written to {}", report_path);
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.verbosity);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
