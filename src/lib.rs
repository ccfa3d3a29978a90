#![deny(unexpected_cfgs)]
//
#![warn(clippy::cargo)]
#![warn(clippy::nursery)]
//
// https://github.com/rust-lang/rust-clippy/issues/16440
#![allow(clippy::multiple_crate_versions)]

mod config;
mod dispatch;
mod error;
mod format;
mod logger;
mod severity;
mod value;

pub mod embed;

pub use config::{Config, INSECURE_VAR, TITLE_VAR, WEBHOOK_VAR};
pub use dispatch::Dispatcher;
pub use embed::{Color, Embed, Envelope, Field};
pub use error::{Error, ErrorKind, Result};
pub use format::format;
pub use logger::Logger;
pub use severity::{ParseSeverityError, Severity};
pub use value::Value;
