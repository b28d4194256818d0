//! ProfileTwin - Main CLI Entry Point

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use std::sync::Arc;

use profiletwin::bootstrap::IndexBootstrap;
use profiletwin::cli::{Args, Commands, Verbosity};
use profiletwin::config::Config;
use profiletwin::errors::TwinError;
use profiletwin::llm::GroqClient;
use profiletwin::rag::RagPipeline;
use profiletwin::repl::{ChatSession, DisplayManager};
use profiletwin::vector::{UpstashVectorClient, VectorIndexGateway};

/// Exit code when required credentials are missing
const EXIT_CODE_CONFIG_NEEDED: i32 = 2;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Err(e) = run(args).await {
        eprintln!("{} {}", "Error:".bold().red(), e);
        let code = match e.downcast_ref::<TwinError>() {
            Some(TwinError::Config(_)) => EXIT_CODE_CONFIG_NEEDED,
            _ => 1,
        };
        std::process::exit(code);
    }
}

async fn run(args: Args) -> Result<()> {
    let mut config = Config::load(args.config.as_deref())?;

    // CLI overrides win over the config file
    if let Some(profile) = &args.profile {
        config.settings.profile = profile.clone();
    }
    if let Some(model) = &args.model {
        config.settings.model = model.clone();
    }
    if let Some(top_k) = args.top_k {
        config.settings.top_k = top_k;
    }

    let gateway: Arc<dyn VectorIndexGateway> = Arc::new(UpstashVectorClient::new(
        &config.credentials.vector_url,
        &config.credentials.vector_token,
    )?);
    let verbosity = args.verbosity();

    match args.command {
        Some(Commands::Info) => show_info(gateway.as_ref()).await,
        Some(Commands::Config) => show_config(&config),
        Some(Commands::Chat) | None => chat(verbosity, config, gateway).await,
    }
}

async fn chat(
    verbosity: Verbosity,
    config: Config,
    gateway: Arc<dyn VectorIndexGateway>,
) -> Result<()> {
    let generator = Arc::new(GroqClient::new(&config.credentials.groq_api_key)?);
    let display = DisplayManager::new();

    let report = IndexBootstrap::new(gateway.clone())
        .with_progress(verbosity.show_progress())
        .ensure_loaded(&config.settings.profile)
        .await?;
    if !report.already_loaded && verbosity.show_progress() {
        display.show_load_report(report.chunks_loaded);
    }

    let pipeline = RagPipeline::with_config(gateway, generator, config.rag_config());
    let mut session = ChatSession::new(pipeline, verbosity.show_hits())?;
    session.run().await
}

async fn show_info(gateway: &dyn VectorIndexGateway) -> Result<()> {
    let info = gateway.info().await?;
    println!("Vectors:  {}", info.vector_count);
    println!("Pending:  {}", info.pending_vector_count);
    println!("Dimension: {}", info.dimension);
    Ok(())
}

fn show_config(config: &Config) -> Result<()> {
    println!("Profile:  {}", config.settings.profile.display());
    println!("Model:    {}", config.settings.model);
    println!("Top-k:    {}", config.settings.top_k);
    println!("Index:    {}", config.credentials.vector_url);
    Ok(())
}
