mod logging;

use anyhow::{Context, Result, ensure};
use clap::Parser;
use discord_log::{Config, Logger, Severity, Value};

/// Send a single key/value notification to a Discord webhook
#[derive(Parser)]
struct Args {
    /// The Discord WebHook URL the notification should be sent to
    #[arg(short, long, env = discord_log::WEBHOOK_VAR, hide_env_values = true)]
    webhook: String,

    /// Message content shown above the embed
    #[arg(short, long, env = discord_log::TITLE_VAR, default_value = "")]
    title: String,

    /// Severity deciding the embed color
    #[arg(short, long, default_value_t = Severity::Info)]
    level: Severity,

    /// Do not verify the TLS certificate of the webhook host
    #[arg(long)]
    insecure: bool,

    /// Increase log output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Alternating keys and values, e.g. `user alice description "Login failed"`
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pairs: Vec<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    ensure!(!args.webhook.trim().is_empty(), "Webhook URL is empty");
    if args.insecure {
        log::warn!("TLS certificate verification is disabled");
    }

    let config = Config::new(args.webhook, args.title).danger_accept_invalid_certs(args.insecure);
    let logger = Logger::new(config).context("Could not create Discord Webhook Client")?;

    let pairs: Vec<Value> = args.pairs.into_iter().map(Value::from).collect();
    if pairs.len() % 2 == 1 {
        log::warn!("Odd number of key/value arguments; the last key gets no value");
    }

    log::info!("Sending {} notification", args.level);
    logger
        .log(args.level, &pairs)
        .with_context(|| format!("Could not send {} notification", args.level))?;
    log::info!("Notification sent");
    Ok(())
}
