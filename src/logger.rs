use crate::{Config, Severity, Value, dispatch::Dispatcher, error::Result, format::format};

/// Sends one Discord embed per log call.
///
/// Every call blocks until the webhook request has completed. Failures are
/// returned, never logged or retried.
///
/// ```no_run
/// use discord_log::{Config, Logger, kv};
///
/// let logger = Logger::new(Config::new(
///     "https://discord.com/api/webhooks/123/token",
///     "Payments",
/// ))?;
/// logger.warn(&kv!["description", "Card declined", "order", 1042, "color", "7506394"])?;
/// # Ok::<(), discord_log::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Logger {
    dispatcher: Dispatcher,
    title: String,
}

impl Logger {
    pub fn new(config: Config) -> Result<Self> {
        let dispatcher = Dispatcher::new(&config)?;
        Ok(Self {
            dispatcher,
            title: config.title,
        })
    }

    /// Logger configured from the `DISCORD_LOG_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(Config::from_env())
    }

    pub fn log(&self, severity: Severity, args: &[Value]) -> Result<()> {
        let envelope = format(args, &self.title, severity.color());
        self.dispatcher.send(&envelope)
    }

    pub fn info(&self, args: &[Value]) -> Result<()> {
        self.log(Severity::Info, args)
    }

    pub fn debug(&self, args: &[Value]) -> Result<()> {
        self.log(Severity::Debug, args)
    }

    pub fn warn(&self, args: &[Value]) -> Result<()> {
        self.log(Severity::Warn, args)
    }

    pub fn error(&self, args: &[Value]) -> Result<()> {
        self.log(Severity::Error, args)
    }

    /// Only selects the fatal color; the process keeps running.
    pub fn fatal(&self, args: &[Value]) -> Result<()> {
        self.log(Severity::Fatal, args)
    }

    pub fn trace(&self, args: &[Value]) -> Result<()> {
        self.log(Severity::Trace, args)
    }

    /// Only selects the panic color; nothing unwinds.
    pub fn panic(&self, args: &[Value]) -> Result<()> {
        self.log(Severity::Panic, args)
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub const fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }
}
