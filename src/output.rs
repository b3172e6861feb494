//! Output utilities for writing evaluation results.

use crate::error::Result;
use crate::operation::Evaluation;
use std::io::Write;

/// Writes one `operands<TAB>result` line per evaluation.
pub fn write_results(evaluations: &[Evaluation], output: &mut impl Write) -> Result<()> {
    if evaluations.is_empty() {
        return Ok(());
    }

    for eval in evaluations {
        writeln!(output, "{}\t{}", eval.operands, eval.result)?;
    }
    output.flush()?;

    Ok(())
}
