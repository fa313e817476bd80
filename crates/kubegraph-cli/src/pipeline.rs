//! The visualize pipeline: configure → scaffold → gather → connect → render.

use tracing::info;

use kubegraph_core::{GraphModel, RankTable};
use kubegraph_dot::{render_graph, RenderOptions};
use kubegraph_error::Result;

use crate::client::Client;
use crate::config::Config;
use crate::summary::summarize;
use crate::KubegraphOptions;

/// Gather the configured resources from the cluster and render the DOT
/// document.
///
/// Aborts on the first listing failure; no partial graph is ever returned.
/// Writing the result anywhere is the caller's concern, so a failed run
/// produces no output artifact.
pub async fn run(opts: &KubegraphOptions) -> Result<String> {
    let config = Config::load(&opts.config)?;
    let table = RankTable::from_descriptors(&config.descriptors())?;

    let mut model = GraphModel::scaffold(&opts.title, &opts.namespace, &table);
    let client = Client::new(opts.kubeconfig.as_deref(), &opts.label_selector).await?;

    for resource in table.resources() {
        info!(resource = %resource.descriptor.gvr(), "gathering");
        let listing = client.list(&resource.descriptor, &opts.namespace).await?;
        let summaries = listing
            .items
            .iter()
            .map(|item| summarize(item, &listing.kind))
            .collect::<Result<Vec<_>>>()?;
        model.populate(&summaries, resource)?;
    }

    info!("graphing gathered resources");
    model.connect();

    Ok(render_graph(
        &model,
        &RenderOptions {
            assets_base: opts.assets.clone(),
        },
    ))
}
