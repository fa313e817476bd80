use clap::Parser;

use kubegraph_cli::{pipeline, KubegraphOptions};
use kubegraph_error::{Error, ErrorKind};

#[derive(Parser, Debug)]
#[command(
    name = "kubegraph",
    about = "Visualize resources in a Kubernetes namespace as a hierarchical graph",
    version
)]
pub struct Cli {
    /// Path to the configuration file mapping resources to ranks
    #[arg(long, value_name = "FILE", default_value = "config/config.json")]
    config: String,

    /// Namespace of the resources to visualize
    #[arg(short = 'n', long, value_name = "NAMESPACE", default_value = "default")]
    namespace: String,

    /// Path of the output DOT file
    #[arg(short = 'o', long, value_name = "FILE", default_value = "assets/output.dot")]
    output: String,

    /// Directory containing the node icon images
    #[arg(long, value_name = "DIR", default_value = "assets")]
    assets: String,

    /// Filter resources by label; comma separated key=value pairs
    #[arg(long = "label-selector", value_name = "SELECTOR", default_value = "")]
    label_selector: String,

    /// Path to a kubeconfig file (default: in-cluster, then local config)
    #[arg(long, value_name = "FILE")]
    kubeconfig: Option<String>,

    /// Title of the rendered graph
    #[arg(long, value_name = "NAME", default_value = "Visualization")]
    title: String,

    /// Print the DOT document to stdout instead of writing the output file
    #[arg(long, default_value_t = false)]
    stdout: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    // Initialize tracing subscriber for logging
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    let opts = KubegraphOptions {
        config: args.config,
        namespace: args.namespace,
        output: args.output,
        assets: args.assets,
        label_selector: args.label_selector,
        kubeconfig: args.kubeconfig,
        title: args.title,
        stdout: args.stdout,
    };

    let dot = pipeline::run(&opts).await?;

    if opts.stdout {
        println!("{dot}");
    } else {
        std::fs::write(&opts.output, &dot).map_err(|e| {
            Error::new(ErrorKind::WriteFailed, "failed to write output file")
                .with_operation("main")
                .with_context("path", opts.output.clone())
                .set_source(e)
        })?;
        tracing::info!(path = %opts.output, "output written");
    }

    Ok(())
}
