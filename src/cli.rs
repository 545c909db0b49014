use alertrow::application::dto::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

/// Render alert rows from Alertmanager and Sensu alert snapshots
#[derive(Parser, Debug)]
#[command(name = "alertrow")]
#[command(version)]
#[command(
    about = "Render alert rows with unseen silences and inhibition state",
    long_about = None
)]
pub struct Args {
    /// Alert snapshot (JSON) to render; without it, configured Sensu upstreams are pulled
    #[arg(short, long, value_name = "SNAPSHOT")]
    pub input: Option<PathBuf>,

    /// Config file path (defaults to ./alertrow.config.yml when present)
    #[arg(short, long, value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format: json or markdown
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Add an @alertmanager label for every upstream reporting an alert
    #[arg(long, overrides_with = "no_show_alertmanagers")]
    pub show_alertmanagers: bool,

    /// Omit @alertmanager labels even when the config file enables them
    #[arg(long, overrides_with = "show_alertmanagers")]
    pub no_show_alertmanagers: bool,

    /// Add an @receiver label with the alert receiver
    #[arg(long, overrides_with = "no_show_receiver")]
    pub show_receiver: bool,

    /// Omit the @receiver label even when the config file enables it
    #[arg(long, overrides_with = "show_receiver")]
    pub no_show_receiver: bool,

    /// Only print warnings and errors on stderr
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// `--show-alertmanagers` or `--no-show-alertmanagers`, else the config value
    pub fn show_alertmanagers_or(&self, configured: Option<bool>) -> bool {
        resolve_flag(self.show_alertmanagers, self.no_show_alertmanagers, configured)
    }

    /// `--show-receiver` or `--no-show-receiver`, else the config value
    pub fn show_receiver_or(&self, configured: Option<bool>) -> bool {
        resolve_flag(self.show_receiver, self.no_show_receiver, configured)
    }
}

fn resolve_flag(on: bool, off: bool, configured: Option<bool>) -> bool {
    match (on, off) {
        (true, _) => true,
        (_, true) => false,
        _ => configured.unwrap_or(false),
    }
}
