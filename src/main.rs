use clap::Parser;
use comando::ai::factory::ProviderFactory;
use comando::cli::{print_usage, Cli};
use comando::commands::{configure_settings, GeneratePipeline};
use comando::config::{Config, ConfigPaths};
use comando::error::{ComandoError, Result};
use comando::history::HistoryStore;
use comando::logging;
use comando::ui::Formatter;
use tracing::debug;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init(cli.debug);

    if let Err(e) = run(cli).await {
        match &e {
            // 하위 프로세스의 stderr는 이미 출력됨
            ComandoError::Subprocess { .. } => {}
            _ => Formatter::show_error(&e.to_string()),
        }
        std::process::exit(e.exit_code());
    }
}

async fn run(cli: Cli) -> Result<()> {
    debug!("{:?}", cli);

    let paths = ConfigPaths::from_env()?;
    let config = Config::load(&paths)?;

    if cli.config {
        return configure_settings(&config, &paths);
    }

    if !cli.has_prompt() {
        print_usage();
        return Ok(());
    }

    let provider = match cli.provider.as_deref() {
        Some(key) => ProviderFactory::create(key, &config)?,
        None => ProviderFactory::default_provider(&config)?,
    };

    let history = HistoryStore::new(paths.history_file())
        .with_shell(&config.shell, dirs::home_dir().as_deref());

    GeneratePipeline::new(provider, history)
        .force(cli.force)
        .run(&cli.prompt_text())
        .await?;

    Ok(())
}
