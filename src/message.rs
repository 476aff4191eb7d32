use serde::Serialize;

use crate::address::Address;
use crate::config::Config;
use crate::error::{SendError, ValidationError};
use crate::transport::{HttpTransport, OutboundRequest, Transport};

/// Hard cap imposed by the provider: 1 To + all Cc + all Bcc.
const MAX_RECIPIENTS: usize = 20;

/// Local diagnostic behavior. Never transmitted to the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DebugMode {
    #[default]
    Off,
    /// Log request and response details via `log::debug!`.
    Verbose,
    /// Like `Verbose`, and additionally attach a [`SendTrace`] to the outcome.
    ReturnTrace,
}

/// What a successful `send` returns. `trace` is populated only in
/// [`DebugMode::ReturnTrace`]; in every other mode the response body is
/// discarded once the status has been checked.
#[derive(Debug, Clone)]
pub struct SendOutcome {
    pub status: u16,
    pub trace: Option<SendTrace>,
}

/// Captured request/response details for callers that asked for them.
#[derive(Debug, Clone)]
pub struct SendTrace {
    pub payload: String,
    pub headers: Vec<(String, String)>,
    pub response_body: String,
}

/// Wire shape of the submission. Fields map 1:1 onto the provider's JSON:
/// `Subject` is always present (null when unset), everything else optional
/// is omitted rather than sent empty.
#[derive(Debug, Serialize)]
struct Payload {
    #[serde(rename = "Subject")]
    subject: Option<String>,
    #[serde(rename = "From")]
    from: String,
    #[serde(rename = "To")]
    to: String,
    #[serde(rename = "HtmlBody", skip_serializing_if = "Option::is_none")]
    html_body: Option<String>,
    #[serde(rename = "TextBody", skip_serializing_if = "Option::is_none")]
    text_body: Option<String>,
    #[serde(rename = "Tag", skip_serializing_if = "Option::is_none")]
    tag: Option<String>,
    #[serde(rename = "ReplyTo", skip_serializing_if = "Option::is_none")]
    reply_to: Option<String>,
    #[serde(rename = "Cc", skip_serializing_if = "Option::is_none")]
    cc: Option<String>,
    #[serde(rename = "Bcc", skip_serializing_if = "Option::is_none")]
    bcc: Option<String>,
}

/// Accumulates one outgoing message and submits it.
///
/// Setters chain by value and never validate; all checking happens in
/// [`send`](MessageBuilder::send). One builder per message; the builder stays
/// inspectable after a send, but reusing it for a second submission is
/// discouraged.
#[derive(Debug, Clone)]
pub struct MessageBuilder {
    config: Config,
    from: Address,
    to: Option<Address>,
    reply_to: Option<Address>,
    cc: Vec<String>,
    bcc: Vec<String>,
    subject: Option<String>,
    tag: Option<String>,
    text_body: Option<String>,
    html_body: Option<String>,
    debug_mode: DebugMode,
}

impl MessageBuilder {
    /// Start a new message. The sender is seeded from the config defaults.
    pub fn compose(config: &Config) -> Self {
        MessageBuilder {
            from: Address::new(&config.from_address, config.from_name.as_deref()),
            config: config.clone(),
            to: None,
            reply_to: None,
            cc: Vec::new(),
            bcc: Vec::new(),
            subject: None,
            tag: None,
            text_body: None,
            html_body: None,
            debug_mode: DebugMode::default(),
        }
    }

    /// Specify the sender. Overwrites the configured default From.
    pub fn from(mut self, address: &str, name: Option<&str>) -> Self {
        self.from = Address::new(address, name);
        self
    }

    /// Overwrite the sender display name without touching the address.
    pub fn from_name(mut self, name: &str) -> Self {
        self.from.name = Some(name.to_string());
        self
    }

    /// Attach a single analytics tag. Only one tag per message is supported;
    /// repeated calls overwrite.
    pub fn tag(mut self, tag: &str) -> Self {
        self.tag = Some(tag.to_string());
        self
    }

    /// Specify the receiver. Repeated calls overwrite.
    pub fn to(mut self, address: &str, name: Option<&str>) -> Self {
        self.to = Some(Address::new(address, name));
        self
    }

    pub fn reply_to(mut self, address: &str, name: Option<&str>) -> Self {
        self.reply_to = Some(Address::new(address, name));
        self
    }

    /// Add one CC address. Append-only.
    pub fn add_cc(mut self, address: &str, name: Option<&str>) -> Self {
        self.cc.push(Address::new(address, name).render());
        self
    }

    /// Add one BCC address. Append-only.
    pub fn add_bcc(mut self, address: &str, name: Option<&str>) -> Self {
        self.bcc.push(Address::new(address, name).render());
        self
    }

    pub fn subject(mut self, subject: &str) -> Self {
        self.subject = Some(subject.to_string());
        self
    }

    /// Plaintext body. Can be combined with `message_html`.
    pub fn message_plain(mut self, body: &str) -> Self {
        self.text_body = Some(body.to_string());
        self
    }

    /// HTML body. Can be combined with `message_plain`.
    pub fn message_html(mut self, body: &str) -> Self {
        self.html_body = Some(body.to_string());
        self
    }

    /// Turn on verbose diagnostics.
    pub fn debug(self) -> Self {
        self.debug_mode(DebugMode::Verbose)
    }

    pub fn debug_mode(mut self, mode: DebugMode) -> Self {
        self.debug_mode = mode;
        self
    }

    /// Submit the message over the default HTTP transport.
    pub fn send(&self) -> Result<SendOutcome, SendError> {
        self.send_with(&HttpTransport::new(self.config.timeout))
    }

    /// Submit the message over a caller-supplied transport.
    ///
    /// Validates preconditions first (failing without any transport call),
    /// then issues exactly one POST. Non-2xx responses become
    /// [`SendError::Api`]; anything that keeps the call from completing
    /// becomes [`SendError::Transport`].
    pub fn send_with(&self, transport: &dyn Transport) -> Result<SendOutcome, SendError> {
        let to = self.validate()?;

        let payload = Payload {
            subject: self.subject.clone(),
            from: self.from.render(),
            to: to.render(),
            html_body: self.html_body.clone(),
            text_body: self.text_body.clone(),
            tag: self.tag.clone(),
            reply_to: self.reply_to.as_ref().map(|a| a.render()),
            cc: join_rendered(&self.cc),
            bcc: join_rendered(&self.bcc),
        };
        let body = serde_json::to_string(&payload)
            .map_err(|e| SendError::Transport(format!("payload encode error: {}", e)))?;

        let request = OutboundRequest {
            url: self.config.endpoint.clone(),
            headers: vec![
                ("Accept".to_string(), "application/json".to_string()),
                ("Content-Type".to_string(), "application/json".to_string()),
                (
                    "X-Postmark-Server-Token".to_string(),
                    self.config.api_key.clone(),
                ),
            ],
            body,
        };

        if self.debug_mode != DebugMode::Off {
            log::debug!(
                "[mail] POST {} headers={:?} json={}",
                request.url,
                request.headers,
                request.body
            );
        }

        let resp = transport.post(&request).map_err(SendError::Transport)?;

        if self.debug_mode != DebugMode::Off {
            log::debug!("[mail] response status={} body={}", resp.status, resp.body);
        }

        if !(200..300).contains(&resp.status) {
            return Err(api_error(resp.status, &resp.body));
        }

        let trace = match self.debug_mode {
            DebugMode::ReturnTrace => Some(SendTrace {
                payload: request.body,
                headers: request.headers,
                response_body: resp.body,
            }),
            _ => None,
        };

        Ok(SendOutcome {
            status: resp.status,
            trace,
        })
    }

    /// Check the send preconditions in order, first violation wins.
    fn validate(&self) -> Result<&Address, ValidationError> {
        if self.config.api_key.is_empty() {
            return Err(ValidationError::MissingApiKey);
        }
        if self.from.address.is_empty() {
            return Err(ValidationError::MissingFrom);
        }
        let to = match &self.to {
            Some(to) if !to.address.is_empty() => to,
            _ => return Err(ValidationError::MissingTo),
        };
        if 1 + self.cc.len() + self.bcc.len() > MAX_RECIPIENTS {
            return Err(ValidationError::TooManyRecipients);
        }
        Ok(to)
    }
}

/// Comma-join pre-rendered addresses; `None` keeps the key out of the payload.
fn join_rendered(rendered: &[String]) -> Option<String> {
    if rendered.is_empty() {
        None
    } else {
        Some(rendered.join(","))
    }
}

/// Translate a non-2xx response into the error taxonomy. A body that is not
/// JSON surfaces as a transport error rather than a parse panic.
fn api_error(status: u16, body: &str) -> SendError {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(json) => SendError::Api {
            status,
            message: json
                .get("Message")
                .and_then(|m| m.as_str())
                .unwrap_or_default()
                .to_string(),
        },
        Err(e) => SendError::Transport(format!(
            "provider returned HTTP {} with a malformed error body: {}",
            status, e
        )),
    }
}
