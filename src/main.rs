use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use storcli_exporter::collectors::{
    collect_controller_metrics, collect_megaraid_metrics, MEGARAID_DRIVER,
};
use storcli_exporter::config;
use storcli_exporter::metrics::MetricsCollector;
use storcli_exporter::output;
use storcli_exporter::storcli::{StorcliClient, StorcliDetailSource};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Absolute path to the StorCLI binary
    #[arg(
        long,
        env = "STORCLI_PATH",
        default_value = config::DEFAULT_STORCLI_PATH
    )]
    storcli_path: PathBuf,

    /// Do not fall back to searching PATH when the configured binary is missing
    #[arg(long)]
    no_path_fallback: bool,

    /// Text file to write output to; defaults to standard output
    #[arg(short, long, env = "STORCLI_EXPORTER_OUTPUT")]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let storcli_path = config::resolve_storcli(
        &args.storcli_path,
        args.no_path_fallback,
        std::env::var("PATH").ok().as_deref(),
    )?;
    debug!("using storcli binary at {}", storcli_path.display());

    let client = StorcliClient::new(storcli_path);
    let controllers = client.query_controllers()?;
    info!("found {} controller(s)", controllers.controllers.len());

    let metrics = MetricsCollector::new()?;
    let mut details = StorcliDetailSource::new(&client);

    for controller in &controllers.controllers {
        collect_controller_metrics(controller, &metrics);
        if controller.response_data.version.driver_name == MEGARAID_DRIVER {
            collect_megaraid_metrics(controller, &metrics, &mut details)?;
        } else {
            info!(
                "controller {} uses unsupported driver {:?}, exporting basic metrics only",
                controller.response_data.basics.controller,
                controller.response_data.version.driver_name
            );
        }
    }

    let rendered = metrics.render()?;
    output::write_metrics(&rendered, args.output.as_deref())?;

    Ok(())
}
