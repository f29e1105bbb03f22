use clap::Parser;
use course_catalog::domain::ports::ConfigProvider;
use course_catalog::utils::{logger, validation::Validate};
use course_catalog::{CliConfig, MenuSession, Settings, TextFileStore, TomlConfig};
use std::io;

fn main() -> anyhow::Result<()> {
    // Usage errors are printed like --help; the exit status stays 0.
    let cli = match CliConfig::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            e.print()?;
            return Ok(());
        }
    };

    // A broken settings file is reported, then ignored.
    let (file_config, config_error) = match cli.config.as_deref().map(load_settings_file) {
        Some(Ok(config)) => (Some(config), None),
        Some(Err(e)) => (None, Some(e)),
        None => (None, None),
    };
    let settings = Settings::merge(&cli, file_config.as_ref().map(|c| c as &dyn ConfigProvider));

    if settings.json_logs() {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(settings.verbose());
    }

    tracing::info!("Starting course-catalog");
    tracing::debug!("Effective settings: {:?}", settings);
    if let Some(e) = config_error {
        tracing::debug!("Settings file ignored: {}", e);
        println!("Error: {}", e);
    }

    // Interactive session on the console
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = MenuSession::new(TextFileStore::new(), stdin.lock(), stdout.lock());

    // Optional preload before the first menu
    if let Some(path) = settings.autoload_file() {
        if let Err(e) = session.load_file(path) {
            tracing::debug!("Autoload of '{}' failed: {}", path, e);
            println!("Error: {}", e);
        }
    }

    if let Err(e) = session.run() {
        // Console I/O failed; there is no one left to report to but the log.
        tracing::error!("Menu loop stopped: {}", e);
    }

    tracing::info!("course-catalog finished");
    Ok(())
}

fn load_settings_file(path: &str) -> course_catalog::Result<TomlConfig> {
    let config = TomlConfig::from_file(path)?;
    config.validate()?;
    Ok(config)
}
