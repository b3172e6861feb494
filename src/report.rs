//! Markdown report generation for evaluation runs.

use crate::error::{Error, Result};
use crate::operation::{Evaluation, Operation};
use markdown_tables::{MarkdownTableRow, as_table};
use std::io::{BufWriter, Write};
use std::path::Path;

struct RunOption {
    option: String,
    value: String,
}

impl MarkdownTableRow for RunOption {
    fn column_names() -> Vec<&'static str> {
        vec!["Option", "Value"]
    }

    fn column_values(&self) -> Vec<String> {
        vec![self.option.clone(), self.value.clone()]
    }
}

struct ResultRow<'a> {
    number: usize,
    eval: &'a Evaluation,
}

impl MarkdownTableRow for ResultRow<'_> {
    fn column_names() -> Vec<&'static str> {
        vec!["#", "Operands", "Result"]
    }

    fn column_values(&self) -> Vec<String> {
        vec![
            self.number.to_string(),
            self.eval.operands.clone(),
            self.eval.result.clone(),
        ]
    }
}

/// Configuration for generating a report.
#[derive(Debug)]
pub struct ReportConfig {
    pub input_path: String,
    pub output_path: String,
    pub operation: Operation,
    pub count: usize,
}

/// Writes a report of an evaluation run to `path`.
pub fn write_report(
    path: impl AsRef<Path>,
    config: &ReportConfig,
    evaluations: &[Evaluation],
) -> Result<()> {
    let path = path.as_ref();
    let file = std::fs::File::create(path).map_err(|e| Error::ReportWrite {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut writer = BufWriter::new(file);

    render_report(&mut writer, config, evaluations, path).map_err(|e| Error::ReportWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    writer.flush().map_err(|e| Error::ReportWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

fn render_report(
    writer: &mut impl Write,
    config: &ReportConfig,
    evaluations: &[Evaluation],
    report_path: &Path,
) -> std::io::Result<()> {
    writeln!(writer, "# bittricks results\n")?;
    write_options_section(writer, config, report_path)?;
    write_summary_section(writer, config.operation, evaluations)?;
    write_results_section(writer, evaluations)
}

fn write_options_section(
    writer: &mut impl Write,
    config: &ReportConfig,
    report_path: &Path,
) -> std::io::Result<()> {
    writeln!(writer, "## Run options\n")?;

    let mut options = vec![
        RunOption {
            option: "Input file".to_string(),
            value: config.input_path.clone(),
        },
        RunOption {
            option: "Output file".to_string(),
            value: config.output_path.clone(),
        },
        RunOption {
            option: "Operation".to_string(),
            value: config.operation.to_string(),
        },
    ];

    if config.operation == Operation::Random {
        options.push(RunOption {
            option: "Numbers per seed".to_string(),
            value: config.count.to_string(),
        });
    }

    options.push(RunOption {
        option: "Report file".to_string(),
        value: report_path.display().to_string(),
    });

    writeln!(writer, "{}", as_table(&options))
}

fn write_summary_section(
    writer: &mut impl Write,
    operation: Operation,
    evaluations: &[Evaluation],
) -> std::io::Result<()> {
    writeln!(writer, "## Summary\n")?;
    writeln!(writer, "- Evaluations: {}", evaluations.len())?;

    if operation.is_predicate() {
        let true_count = evaluations
            .iter()
            .filter(|e| e.truth == Some(true))
            .count();
        writeln!(writer, "- True: {}", true_count)?;
        writeln!(writer, "- False: {}", evaluations.len() - true_count)?;
    }

    writeln!(writer)
}

fn write_results_section(
    writer: &mut impl Write,
    evaluations: &[Evaluation],
) -> std::io::Result<()> {
    writeln!(writer, "## Results\n")?;

    if evaluations.is_empty() {
        return writeln!(writer, "No values were evaluated.");
    }

    let rows: Vec<ResultRow<'_>> = evaluations
        .iter()
        .enumerate()
        .map(|(i, eval)| ResultRow { number: i + 1, eval })
        .collect();
    writeln!(writer, "{}", as_table(&rows))
}
