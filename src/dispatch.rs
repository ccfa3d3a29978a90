use reqwest::{
    Url,
    blocking::{Client, Response},
    header::CONTENT_TYPE,
};

use crate::{
    Config,
    embed::Envelope,
    error::{Error, Result},
};

/// Posts envelopes to one webhook.
///
/// The HTTP client is built once and shared by clones; it is safe to use from
/// several threads at once.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    http_client: Client,
    url: Option<Url>,
}

impl Dispatcher {
    /// An empty webhook is accepted here and reported on every [`send`](Self::send)
    /// instead. A malformed one, or one that is not `http`/`https`, is
    /// rejected right away.
    pub fn new(config: &Config) -> Result<Self> {
        let url = if config.webhook.trim().is_empty() {
            None
        } else {
            Some(parse_webhook(config.webhook.trim())?)
        };

        if config.danger_accept_invalid_certs {
            log::debug!("Building webhook client without certificate verification");
        }
        let http_client = Client::builder()
            .danger_accept_invalid_certs(config.danger_accept_invalid_certs)
            .build()
            .map_err(Error::Client)?;

        Ok(Self { http_client, url })
    }

    /// Serializes the envelope and sends it in a single POST request.
    ///
    /// Any HTTP response counts as success, including 4xx and 5xx statuses:
    /// `Ok` means the request completed, not that the message was accepted.
    ///
    /// # Errors
    /// * [`Error::MissingWebhook`] if no webhook is configured. Nothing is sent.
    /// * [`Error::Transport`] if the request could not be completed.
    pub fn send(&self, envelope: &Envelope) -> Result<()> {
        let url: &Url = self.url.as_ref().ok_or(Error::MissingWebhook)?;
        let body: Vec<u8> = serde_json::to_vec(envelope)?;

        // The URL path holds the webhook token, so only the host is logged.
        log::debug!(
            "Posting {} byte payload to webhook on {}",
            body.len(),
            url.host_str().unwrap_or("<no host>"),
        );
        let resp: Response = self
            .http_client
            .post(url.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .map_err(Error::Transport)?;
        log::debug!("Webhook responded with status {}", resp.status());
        Ok(())
    }

    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.url.is_some()
    }
}

fn parse_webhook(webhook: &str) -> Result<Url> {
    let url = Url::parse(webhook).map_err(|e| Error::InvalidWebhook(e.to_string()))?;
    match url.scheme() {
        "https" | "http" => Ok(url),
        scheme => Err(Error::InvalidWebhook(format!(
            "unsupported scheme {scheme:?} (expected https or http)"
        ))),
    }
}
