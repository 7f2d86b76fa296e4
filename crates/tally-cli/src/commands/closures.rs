//! `tally closures`: two accumulators advanced side by side.

use tally_core::application::{AccumulatorService, PairedRow};
use tracing::debug;

use crate::{cli::ClosuresArgs, config::AppConfig, error::CliResult, output::OutputManager};

pub fn execute(args: ClosuresArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let rounds = args.rounds.unwrap_or(config.demo.rounds);
    debug!(rounds, "running paired accumulators");

    let rows = AccumulatorService::paired_run(rounds);

    if output.is_json() {
        output.json(&rows)?;
        return Ok(());
    }

    output.header(&format!("{:>5} {:>8} {:>8}", "round", "pos", "neg"))?;
    for row in &rows {
        output.print(&render_row(row))?;
    }
    Ok(())
}

fn render_row(row: &PairedRow) -> String {
    format!("{:>5} {:>8} {:>8}", row.round, row.pos, row.neg)
}
