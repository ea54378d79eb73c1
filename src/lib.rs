//! A crate to decide, per client, how to emit the `SameSite` cookie attribute.
//!
//! # Overview
//!
//! Some browsers released between 2016 and 2019 mishandle `SameSite=None`:
//! they either reject the cookie altogether or treat it as `SameSite=Strict`,
//! breaking cross-site cookie flows.
//!
//! `samesite-compat` sits between your cookie encoder and the response: it takes the
//! `Set-Cookie` header value you built and appends the `SameSite` attribute you
//! configured, unless the client is known to be incompatible with it.
//!
//! It has support for:
//!
//! - Classifying user agents, via the functions in the [`user_agent`] module
//! - Appending the `SameSite` attribute to a header value, via [`append_same_site`]
//! - Configuring the behaviour once and applying it to every response, via [`Processor`]
//!
//! # Non-goals
//!
//! `samesite-compat` is not a user-agent parser.
//! It only recognizes the narrow signals required to take the `SameSite=None` decision.
//! It doesn't build `Set-Cookie` header values either: bring your own cookie encoder.
//!
//! # Quickstart
//!
//! ```rust
//! use samesite_compat::{Processor, RequestMetadata, SameSitePolicy};
//! use samesite_compat::config::Config;
//!
//! // Start by creating a `Processor` instance from a `Config`.
//! // It determines which `SameSite` attribute should be appended.
//! let processor: Processor = Config::from_policy_str("none").unwrap().into();
//!
//! // Collect what the processor needs to know about the incoming request.
//! let ios_13 = "Mozilla/5.0 (iPhone; CPU iPhone OS 13_3_1 like Mac OS X) \
//!     AppleWebKit/605.1.15 (KHTML, like Gecko) Version/12.1.1 Mobile/15E148 Safari/604.1";
//! let request = RequestMetadata::new(true, Some(ios_13));
//!
//! // `SameSite=None` is appended, together with `Secure`.
//! assert_eq!(
//!     processor.process_header("name=value; Path=/", &request),
//!     "name=value; Path=/; SameSite=None; Secure"
//! );
//!
//! // iOS 12 would treat the cookie as `SameSite=Strict`: the attribute is omitted.
//! let ios_12 = "Mozilla/5.0 (iPhone; CPU iPhone OS 12_3_1 like Mac OS X) \
//!     AppleWebKit/605.1.15 (KHTML, like Gecko) Version/12.1.1 Mobile/15E148 Safari/604.1";
//! let request = RequestMetadata::new(true, Some(ios_12));
//! assert_eq!(
//!     processor.process_header("name=value; Path=/", &request),
//!     "name=value; Path=/"
//! );
//! ```
//!
//! [`Processor`]: crate::Processor

mod appender;
pub mod config;
mod processor;
mod request;
mod same_site;
pub mod user_agent;

pub use appender::{append_same_site, decide};
pub use processor::Processor;
pub use request::{RequestMetadata, USER_AGENT_HEADER};
pub use same_site::SameSitePolicy;

/// Errors that can occur when using `samesite-compat`.
pub mod errors {
    pub use crate::same_site::ParsePolicyError;
}
