use anyhow::Result;
use chunklist::backend::create_backend;
use chunklist::config::{BackendKind, Config};
use chunklist::constants::ERROR_NO_PROJECT;
use chunklist::logger::Logger;
use chunklist::ui::{run_app, AppComponent};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "chunklist")]
#[command(about = "Browse, edit and generate questions for the text chunks of a project")]
#[command(version)]
struct Cli {
    /// Project whose chunks are listed (defaults to service.project_id)
    project_id: Option<String>,

    /// Write a default configuration file and exit
    #[arg(long, value_name = "PATH", num_args = 0..=1)]
    generate_config: Option<Option<PathBuf>>,

    /// Read configuration from this file instead of the default locations
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Use the in-process demo store instead of the chunk service
    #[arg(long)]
    demo: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = cli.generate_config {
        let path = match path {
            Some(path) => path,
            None => Config::get_default_config_path()?,
        };
        return Config::generate_default_config(path);
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load()?,
    };
    if cli.demo {
        config.service.backend = BackendKind::Memory;
    }

    let project_id = cli
        .project_id
        .or_else(|| Some(config.service.project_id.clone()).filter(|id| !id.is_empty()));
    let Some(project_id) = project_id else {
        anyhow::bail!(ERROR_NO_PROJECT);
    };

    Logger::init_log_backend(config.logging.enabled)?;
    let logger = Logger::from_config(config.logging.enabled)?;
    log::info!("starting chunklist for project {}", project_id);

    let backend = create_backend(&config.service, &project_id)?;
    let app = AppComponent::new(backend, project_id, &config, logger.clone());

    let result = run_app(app).await;
    logger.flush();
    result
}
