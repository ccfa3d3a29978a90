use std::env;

pub const WEBHOOK_VAR: &str = "DISCORD_LOG_WEBHOOK";
pub const TITLE_VAR: &str = "DISCORD_LOG_TITLE";
pub const INSECURE_VAR: &str = "DISCORD_LOG_INSECURE";

/// Settings a [`Logger`](crate::Logger) is built from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Destination URL. Left empty, every send fails with
    /// [`Error::MissingWebhook`](crate::Error::MissingWebhook).
    pub webhook: String,
    /// Sent as the `content` of every message.
    pub title: String,
    /// Skip TLS certificate verification for the webhook host.
    ///
    /// This makes the connection open to interception and should only be
    /// enabled for endpoints behind a self-signed or otherwise broken
    /// certificate chain.
    pub danger_accept_invalid_certs: bool,
}

impl Config {
    #[must_use]
    pub fn new(webhook: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            webhook: webhook.into(),
            title: title.into(),
            danger_accept_invalid_certs: false,
        }
    }

    #[must_use]
    pub fn danger_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.danger_accept_invalid_certs = accept;
        self
    }

    /// Reads the configuration from `DISCORD_LOG_WEBHOOK`, `DISCORD_LOG_TITLE`
    /// and `DISCORD_LOG_INSECURE`. Missing variables fall back to empty strings
    /// and certificate verification.
    #[must_use]
    pub fn from_env() -> Self {
        let webhook = env::var(WEBHOOK_VAR).unwrap_or_else(|_| {
            log::debug!("No {WEBHOOK_VAR} found, webhook stays unset");
            String::new()
        });
        let title = env::var(TITLE_VAR).unwrap_or_default();
        let insecure = env::var(INSECURE_VAR).is_ok_and(|v| is_truthy(&v));
        if insecure {
            log::debug!("{INSECURE_VAR} is set; TLS certificates will not be verified");
        }
        Self::new(webhook, title).danger_accept_invalid_certs(insecure)
    }
}

fn is_truthy(value: &str) -> bool {
    ["1", "true", "yes"]
        .iter()
        .any(|t| value.trim().eq_ignore_ascii_case(t))
}

#[cfg(test)]
mod tests {
    use std::sync::{Mutex, Once};

    use log::{Level, LevelFilter, Log, Metadata, Record};
    use serial_test::serial;

    use super::*;

    fn clear() {
        // SAFETY: env tests are serialized
        unsafe {
            env::remove_var(WEBHOOK_VAR);
            env::remove_var(TITLE_VAR);
            env::remove_var(INSECURE_VAR);
        }
    }

    fn set(key: &str, value: &str) {
        // SAFETY: env tests are serialized
        unsafe { env::set_var(key, value) };
    }

    #[test]
    fn builder_defaults_to_verifying_certs() {
        let config = Config::new("https://example.com/hook", "Alerts");
        assert_eq!(config.webhook, "https://example.com/hook");
        assert_eq!(config.title, "Alerts");
        assert!(!config.danger_accept_invalid_certs);
        assert!(config.danger_accept_invalid_certs(true).danger_accept_invalid_certs);
    }

    mod from_env {
        use super::*;

        #[test]
        #[serial]
        fn default() {
            clear();
            assert_eq!(Config::from_env(), Config::default());
        }

        #[test]
        #[serial]
        fn custom() {
            clear();
            set(WEBHOOK_VAR, "https://discord.com/api/webhooks/1/abc");
            set(TITLE_VAR, "Billing");
            let config = Config::from_env();
            assert_eq!(config.webhook, "https://discord.com/api/webhooks/1/abc");
            assert_eq!(config.title, "Billing");
            assert!(!config.danger_accept_invalid_certs);
            clear();
        }

        #[test]
        #[serial]
        fn insecure_flag() {
            for (raw, expected) in [
                ("1", true),
                ("TRUE", true),
                ("yes", true),
                ("0", false),
                ("no", false),
                ("", false),
            ] {
                clear();
                set(INSECURE_VAR, raw);
                assert_eq!(
                    Config::from_env().danger_accept_invalid_certs,
                    expected,
                    "{INSECURE_VAR}={raw:?}"
                );
            }
            clear();
        }

        #[test]
        #[serial]
        fn insecure_flag_is_only_logged_at_debug() {
            clear();
            set(INSECURE_VAR, "1");
            let logs = capture_logs();
            logs.records.lock().unwrap().clear();

            assert!(Config::from_env().danger_accept_invalid_certs);
            clear();

            let records = logs.records.lock().unwrap();
            let insecure: Vec<&(Level, String)> = records
                .iter()
                .filter(|(_, message)| message.contains(INSECURE_VAR))
                .collect();
            assert_eq!(insecure.len(), 1, "{records:?}");
            assert!(records.iter().all(|(level, _)| *level == Level::Debug));
        }
    }

    /// Keeps every record this module emits.
    struct CapturedLogs {
        records: Mutex<Vec<(Level, String)>>,
    }

    impl Log for CapturedLogs {
        fn enabled(&self, _: &Metadata<'_>) -> bool {
            true
        }

        fn log(&self, record: &Record<'_>) {
            if record.target() == "discord_log::config" {
                let entry = (record.level(), record.args().to_string());
                self.records.lock().unwrap().push(entry);
            }
        }

        fn flush(&self) {}
    }

    static LOGS: CapturedLogs = CapturedLogs {
        records: Mutex::new(Vec::new()),
    };

    fn capture_logs() -> &'static CapturedLogs {
        static INSTALL: Once = Once::new();
        INSTALL.call_once(|| {
            log::set_logger(&LOGS).unwrap();
            log::set_max_level(LevelFilter::Trace);
        });
        &LOGS
    }
}
