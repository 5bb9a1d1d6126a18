//! `figgen list`

use anyhow::Context;
use figgen_ctl::Pipeline;

use super::resolve_config;
use crate::output;
use crate::SourceArgs;

pub(crate) async fn handle_list_command(args: SourceArgs) -> anyhow::Result<()> {
    let config = resolve_config(args.into_raw(false))?;
    let pipeline = Pipeline::new(config).context("failed to set up the document source")?;

    let nodes = pipeline.fetch().await.context("fetch failed")?;
    let keywords = &pipeline.config().keywords;

    output::header(format!(
        "{} matching {} node(s)",
        nodes.len(),
        pipeline.config().node_kind
    ));
    for node in &nodes {
        // Every fetched node matched at least one keyword.
        let keyword = keywords.last_match(&node.name).unwrap_or_default();
        output::tagged_item(&node.name, keyword);
    }

    Ok(())
}
