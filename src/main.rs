mod cli;

use alertrow::adapters::outbound::console::StderrProgressReporter;
use alertrow::adapters::outbound::filesystem::FileSystemReader;
use alertrow::adapters::outbound::network::{SensuApiClient, UpstreamRegistry};
use alertrow::application::dto::{RenderRequest, SnapshotInput};
use alertrow::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use alertrow::application::read_models::RowOptions;
use alertrow::application::use_cases::{CollectSensuAlertsUseCase, RenderAlertListUseCase};
use alertrow::config::{self, ConfigFile, CONFIG_FILENAME};
use alertrow::shared::error::{AlertViewError, ExitCode};
use alertrow::shared::Result;
use clap::Parser;
use cli::Args;
use std::process;

#[tokio::main]
async fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version are reported as errors by clap
            let code = if e.use_stderr() {
                ExitCode::InvalidArguments
            } else {
                ExitCode::Success
            };
            let _ = e.print();
            process::exit(code.as_i32());
        }
    };

    if let Err(e) = run(args).await {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn reporter(quiet: bool) -> StderrProgressReporter {
    if quiet {
        StderrProgressReporter::quiet()
    } else {
        StderrProgressReporter::new()
    }
}

fn load_config(args: &Args) -> Result<ConfigFile> {
    match &args.config {
        Some(path) => config::load_config_from_path(path),
        None => {
            let current_dir = std::env::current_dir()?;
            match config::discover_config(&current_dir)? {
                Some(config) => {
                    if !args.quiet {
                        eprintln!(
                            "📄 Auto-discovered config file: {}",
                            current_dir.join(CONFIG_FILENAME).display()
                        );
                    }
                    Ok(config)
                }
                None => Ok(ConfigFile::default()),
            }
        }
    }
}

async fn run(args: Args) -> Result<()> {
    let config = load_config(&args)?;

    let format = args.format.or(config.format).unwrap_or_default();
    let options = RowOptions {
        show_alertmanagers: args.show_alertmanagers_or(config.show_alertmanagers),
        show_receiver: args.show_receiver_or(config.show_receiver),
    };
    let policy = config.visibility_policy();

    let input = match args.input {
        Some(path) => SnapshotInput::File(path),
        None if !config.sensu.is_empty() => {
            // Create adapters (Dependency Injection)
            let registry = UpstreamRegistry::new();
            for upstream in &config.sensu {
                registry.register(SensuApiClient::new(upstream.to_client_options())?)?;
            }

            let use_case = CollectSensuAlertsUseCase::new(reporter(args.quiet), policy.clone());
            let snapshot = use_case.execute(&registry.event_sources()).await?;
            SnapshotInput::Loaded(snapshot)
        }
        None => {
            return Err(AlertViewError::NoAlertSource {
                config_file: CONFIG_FILENAME.to_string(),
            }
            .into())
        }
    };

    let use_case = RenderAlertListUseCase::new(FileSystemReader::new(), reporter(args.quiet));
    let response = use_case.execute(RenderRequest::new(input, options, policy))?;

    if !args.quiet {
        eprintln!("{}", FormatterFactory::progress_message(format));
    }
    let formatter = FormatterFactory::create(format);
    let formatted_output = formatter.format(&response.view)?;

    let presenter = PresenterFactory::create(PresenterType::from(args.output));
    presenter.present(&formatted_output)?;

    Ok(())
}
