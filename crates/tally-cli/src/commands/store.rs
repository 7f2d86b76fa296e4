//! `tally store`: run a script of operations against one fresh store.

use tally_adapters::InMemoryStore;
use tally_core::{
    application::SnapshotService,
    domain::{OpOutcome, StoreOp},
    error::TallyError,
};
use tracing::instrument;

use crate::{
    cli::StoreArgs,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[instrument(skip_all, fields(ops = args.ops.len()))]
pub fn execute(args: StoreArgs, output: OutputManager) -> CliResult<()> {
    let ops = parse_ops(&args.ops)?;

    let mut service = SnapshotService::new(Box::new(InMemoryStore::new()));
    let outcomes = service.run_script(ops);

    if output.is_json() {
        output.json(&outcomes)?;
        return Ok(());
    }

    for outcome in &outcomes {
        output.print(&render(&output, outcome))?;
    }
    Ok(())
}

/// Parse every operation before running any.
fn parse_ops(raw: &[String]) -> CliResult<Vec<StoreOp>> {
    raw.iter()
        .map(|s| {
            s.parse::<StoreOp>()
                .map_err(|e| CliError::from(TallyError::from(e)))
        })
        .collect()
}

/// One outcome per line; lookups show the record and a coloured found flag.
pub(crate) fn render(output: &OutputManager, outcome: &OpOutcome) -> String {
    match outcome {
        OpOutcome::Looked { key, record, found } => {
            format!("{key}: {record} {}", output.flag(*found))
        }
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ops(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn parses_every_op_in_order() {
        let parsed = parse_ops(&ops(&["put:default=5,8", "get:default", "del:default"])).unwrap();
        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed[0].key(), "default");
        assert!(matches!(parsed[2], StoreOp::Delete { .. }));
    }

    #[test]
    fn one_bad_op_fails_the_whole_script() {
        let err = parse_ops(&ops(&["get:a", "frobnicate:a"])).unwrap_err();
        assert!(matches!(err, CliError::Core(TallyError::Domain(_))));
        assert_eq!(err.exit_code(), 2);
    }
}
