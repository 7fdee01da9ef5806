use anyhow::Result;
use clap::Parser;
use metrics_exporter_prometheus::PrometheusHandle;
use pmg_ai_cli::cli::{Cli, Commands};
use pmg_ai_cli::config::AppConfig;
use pmg_ai_cli::server::{run_server, AppState};
use pmg_ai_cli::{interactive, output};
use pmg_ai_providers::ProviderChain;
use tokio::signal;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let config = AppConfig::load(&cli.config, &cli)?;
    let chain = ProviderChain::from_config(&config.providers)?;

    match cli.command {
        Some(Commands::Generate { prompt, json, .. }) => {
            let response = chain
                .process(&prompt, config.default_provider, &config.generation)
                .await;

            if json {
                println!("{}", output::render_json(&response)?);
            } else {
                println!("{}", output::render_human(&response));
            }
        }

        Some(Commands::Status) => {
            print!("{}", output::render_status(&chain.availability()));
        }

        Some(Commands::Serve { .. }) => {
            let addr = config.server.socket_addr()?;
            let metrics = init_metrics()?;
            let state = AppState::new(chain, config.default_provider, config.generation, metrics);

            let shutdown = async {
                shutdown_signal().await;
                warn!("Shutdown signal received, stopping server...");
            };

            run_server(state, addr, shutdown).await?;
        }

        Some(Commands::Interactive { .. }) | None => {
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            let mut stdout = std::io::stdout();

            tokio::select! {
                result = interactive::run(
                    &chain,
                    config.default_provider,
                    &config.generation,
                    stdin,
                    &mut stdout,
                ) => {
                    result?;
                }
                _ = signal::ctrl_c() => {
                    println!("\nAté logo!");
                }
            }
        }
    }

    Ok(())
}

/// Listen for shutdown signals (SIGTERM, SIGINT)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

/// Initialize tracing; logs go to stderr so stdout stays clean for `--json`
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("pmg_ai=debug,tower_http=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pmg_ai=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Initialize metrics exporter and return handle for rendering
fn init_metrics() -> Result<PrometheusHandle> {
    use metrics_exporter_prometheus::PrometheusBuilder;

    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| anyhow::anyhow!("Failed to install metrics: {}", e))?;

    metrics::describe_counter!(
        "pmg_ai_generations_total",
        "Responses returned, by provider and response type"
    );
    metrics::describe_counter!(
        "pmg_ai_provider_failures_total",
        "Remote provider failures that fell back to the next provider"
    );

    info!("Metrics exporter initialized");
    Ok(handle)
}
