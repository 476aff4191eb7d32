//! Fluent client for Postmark-style transactional email APIs.
//!
//! Compose a message with chained setters, then `send()` it as a single JSON
//! POST. Validation happens at send time; failures surface as distinct
//! [`SendError`] values and nothing is retried.
//!
//! ```no_run
//! use transmail::{Config, MessageBuilder};
//!
//! let config = Config::new("server-token", "noreply@example.com").from_name("Example");
//! MessageBuilder::compose(&config)
//!     .to("user@example.com", Some("User"))
//!     .subject("Welcome")
//!     .message_plain("Hello!")
//!     .send()?;
//! # Ok::<(), transmail::SendError>(())
//! ```

mod address;
mod config;
mod error;
mod message;
mod transport;


pub use address::Address;
pub use config::{Config, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT};
pub use error::{SendError, ValidationError};
pub use message::{DebugMode, MessageBuilder, SendOutcome, SendTrace};
pub use transport::{HttpTransport, OutboundRequest, OutboundResponse, Transport};
