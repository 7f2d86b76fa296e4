//! `tally demo`: the reference accumulator and store scenarios.

use serde::Serialize;
use tally_adapters::InMemoryStore;
use tally_core::{
    application::{AccumulatorService, SnapshotService},
    domain::{OpOutcome, Record, StoreOp},
};
use tracing::info;

use crate::{
    commands::{accumulate::Step, store::render},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

const DEMO_ACCUMULATOR: &str = "demo";
const DEMO_DELTAS: [i64; 3] = [5, -2, 0];
const DEMO_RECORD: Record = Record::new(5, 8);

#[derive(Debug, Serialize)]
struct DemoReport {
    accumulator: Vec<Step>,
    store: Vec<OpOutcome>,
}

pub fn execute(config: AppConfig, output: OutputManager) -> CliResult<()> {
    let report = DemoReport {
        accumulator: accumulator_scenario()?,
        store: store_scenario(&config.demo.default_key),
    };
    info!(key = %config.demo.default_key, "demo scenarios complete");

    if output.is_json() {
        output.json(&report)?;
        return Ok(());
    }

    output.header("Accumulator")?;
    for step in &report.accumulator {
        output.print(&step.render())?;
    }

    output.header("Snapshot store")?;
    for outcome in &report.store {
        output.print(&render(&output, outcome))?;
    }
    Ok(())
}

fn accumulator_scenario() -> CliResult<Vec<Step>> {
    let mut service = AccumulatorService::new();
    service.create(DEMO_ACCUMULATOR);

    DEMO_DELTAS
        .iter()
        .map(|&delta| {
            let total = service.add(DEMO_ACCUMULATOR, delta)?;
            Ok::<_, CliError>(Step { delta, total })
        })
        .collect()
}

fn store_scenario(key: &str) -> Vec<OpOutcome> {
    let mut service = SnapshotService::new(Box::new(InMemoryStore::new()));
    service.run_script([
        StoreOp::put(key, DEMO_RECORD),
        StoreOp::get(key),
        StoreOp::delete(key),
        StoreOp::get(key),
    ])
}
