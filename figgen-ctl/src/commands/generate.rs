//! `figgen generate`

use anyhow::Context;
use figgen_ctl::Pipeline;

use super::resolve_config;
use crate::output;
use crate::GenerateArgs;

pub(crate) async fn handle_generate_command(args: GenerateArgs) -> anyhow::Result<()> {
    let config = resolve_config(args.source.into_raw(!args.no_snapshot))?;
    let pipeline = Pipeline::new(config).context("failed to set up the document source")?;

    let report = pipeline.run().await.context("generation failed")?;

    if report.components.is_empty() {
        output::warning("No nodes matched a component keyword; nothing rendered");
    } else {
        output::success(format!("Generated {} component(s)", report.components.len()));
    }
    output::header("Output");
    output::label("Matched nodes", report.matched_nodes);
    output::label("Model files", report.models_copied);
    for path in &report.components {
        output::item(path.display());
    }
    if let Some(snapshot) = &report.snapshot {
        output::dim(format!("  document saved to {}", snapshot.display()));
    }

    Ok(())
}
