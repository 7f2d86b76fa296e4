//! `tally accumulate`: feed deltas to one fresh named accumulator.

use serde::Serialize;
use tally_core::application::AccumulatorService;
use tracing::{info, instrument};

use crate::{
    cli::AccumulateArgs,
    error::{CliError, CliResult},
    output::OutputManager,
};

const ACCUMULATOR: &str = "accumulate";

/// One `add` call and the total it produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub(crate) struct Step {
    pub delta: i64,
    pub total: i64,
}

impl Step {
    pub fn render(&self) -> String {
        format!("add({}) = {}", self.delta, self.total)
    }
}

#[instrument(skip_all, fields(deltas = args.deltas.len(), checked = args.checked))]
pub fn execute(args: AccumulateArgs, output: OutputManager) -> CliResult<()> {
    let mut service = AccumulatorService::new();
    service.create(ACCUMULATOR);
    let steps = run(&mut service, &args.deltas, args.checked)?;
    info!(total = service.total(ACCUMULATOR)?, "accumulation finished");

    if output.is_json() {
        output.json(&steps)?;
        return Ok(());
    }

    for step in &steps {
        output.print(&step.render())?;
    }
    Ok(())
}

fn run(service: &mut AccumulatorService, deltas: &[i64], checked: bool) -> CliResult<Vec<Step>> {
    deltas
        .iter()
        .map(|&delta| {
            let total = if checked {
                service.checked_add(ACCUMULATOR, delta)?
            } else {
                service.add(ACCUMULATOR, delta)?
            };
            Ok::<_, CliError>(Step { delta, total })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh() -> AccumulatorService {
        let mut service = AccumulatorService::new();
        service.create(ACCUMULATOR);
        service
    }

    #[test]
    fn running_totals_follow_each_delta() {
        let mut service = fresh();
        let steps = run(&mut service, &[5, -2, 0], false).unwrap();
        let totals: Vec<i64> = steps.iter().map(|s| s.total).collect();
        assert_eq!(totals, [5, 3, 3]);
    }

    #[test]
    fn checked_overflow_is_a_user_error() {
        let mut service = fresh();
        let err = run(&mut service, &[i64::MAX, 1], true).unwrap_err();
        assert!(matches!(err, CliError::Core(_)));
        assert_eq!(err.exit_code(), 2);
        assert_eq!(service.total(ACCUMULATOR).unwrap(), i64::MAX);
    }

    #[test]
    fn unchecked_overflow_wraps() {
        let mut service = fresh();
        let steps = run(&mut service, &[i64::MAX, 1], false).unwrap();
        assert_eq!(steps[1].total, i64::MIN);
    }
}
