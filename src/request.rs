//! The slice of an incoming request that matters when deciding on `SameSite=None`.
use crate::user_agent::should_send_same_site_none;

/// The (lowercase) name of the header carrying the client identification string.
pub const USER_AGENT_HEADER: &str = "user-agent";

/// What the cookie processor needs to know about the request it is responding to.
///
/// ```rust
/// use samesite_compat::RequestMetadata;
///
/// let request = RequestMetadata::new(true, Some("Mozilla/5.0 (X11; Linux x86_64) Firefox/120.0"));
/// assert!(request.secure());
/// assert!(request.supports_same_site_none());
///
/// // Clients that don't identify themselves are assumed to be incompatible.
/// let anonymous = RequestMetadata::new(true, None);
/// assert!(!anonymous.supports_same_site_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RequestMetadata<'a> {
    secure: bool,
    user_agent: Option<&'a str>,
}

impl<'a> RequestMetadata<'a> {
    /// Creates a new [`RequestMetadata`].
    ///
    /// `secure` must be `true` if the request was received over an encrypted transport.
    /// `user_agent` is the raw value of the `User-Agent` header, if any.
    pub fn new(secure: bool, user_agent: Option<&'a str>) -> Self {
        Self { secure, user_agent }
    }

    /// Whether the request was received over an encrypted transport.
    pub fn secure(&self) -> bool {
        self.secure
    }

    /// The raw value of the `User-Agent` header, if any.
    pub fn user_agent(&self) -> Option<&'a str> {
        self.user_agent
    }

    /// Returns `true` if the client is expected to handle `SameSite=None` correctly.
    ///
    /// A missing or empty `User-Agent` header yields `false`.
    pub fn supports_same_site_none(&self) -> bool {
        match self.user_agent {
            Some(user_agent) if !user_agent.is_empty() => should_send_same_site_none(user_agent),
            _ => {
                tracing::debug!("The user agent is missing or empty");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::RequestMetadata;

    #[test]
    fn empty_user_agent_is_not_supported() {
        assert!(!RequestMetadata::new(true, Some("")).supports_same_site_none());
        assert!(!RequestMetadata::new(true, None).supports_same_site_none());
        assert!(!RequestMetadata::default().supports_same_site_none());
    }

    #[test]
    fn user_agent_is_classified() {
        let ios_12 = "Mozilla/5.0 (iPhone; CPU iPhone OS 12_3_1 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/12.1.1 Mobile/15E148 Safari/604.1";
        let ios_13 = "Mozilla/5.0 (iPhone; CPU iPhone OS 13_3_1 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/12.1.1 Mobile/15E148 Safari/604.1";
        assert!(!RequestMetadata::new(true, Some(ios_12)).supports_same_site_none());
        assert!(RequestMetadata::new(true, Some(ios_13)).supports_same_site_none());
        // Transport security plays no part in the classification.
        assert!(RequestMetadata::new(false, Some(ios_13)).supports_same_site_none());
    }
}
