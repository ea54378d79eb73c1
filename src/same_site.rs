//! The `SameSite` policy a server wants applied to its outgoing cookies.

use std::fmt;
use std::str::FromStr;

/// The `SameSite` policy configured for outgoing cookies.
///
/// A cookie with a `SameSite` attribute is imposed restrictions on when it is
/// sent to the origin server in a cross-site request. If the `SameSite`
/// attribute is "Strict", then the cookie is never sent in cross-site requests.
/// If the `SameSite` attribute is "Lax", the cookie is only sent in cross-site
/// requests with "safe" HTTP methods, i.e, `GET`, `HEAD`, `OPTIONS`, `TRACE`.
/// If the `SameSite` attribute is "None", the cookie is sent in all cross-site
/// requests if the "Secure" flag is also set, otherwise the cookie is ignored.
///
/// `Unset` means that no `SameSite` attribute is added at all.
///
/// Unlike the other values, `None` is only emitted for clients that are known to
/// handle it correctly. Check out [`append_same_site`] for the details.
///
/// [`append_same_site`]: crate::append_same_site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum SameSitePolicy {
    /// Do not emit a `SameSite` attribute.
    #[default]
    #[cfg_attr(feature = "serde", serde(alias = "unset"))]
    Unset,
    /// The "Strict" `SameSite` attribute.
    #[cfg_attr(feature = "serde", serde(alias = "strict"))]
    Strict,
    /// The "Lax" `SameSite` attribute.
    #[cfg_attr(feature = "serde", serde(alias = "lax"))]
    Lax,
    /// The "None" `SameSite` attribute.
    #[cfg_attr(feature = "serde", serde(alias = "none"))]
    None,
}

impl SameSitePolicy {
    /// Returns `true` if `self` is `SameSitePolicy::Unset` and `false` otherwise.
    #[inline]
    pub fn is_unset(&self) -> bool {
        matches!(self, SameSitePolicy::Unset)
    }

    /// Returns `true` if `self` is `SameSitePolicy::Strict` and `false` otherwise.
    ///
    /// # Example
    ///
    /// ```rust
    /// use samesite_compat::SameSitePolicy;
    ///
    /// let strict = SameSitePolicy::Strict;
    /// assert!(strict.is_strict());
    /// assert!(!strict.is_lax());
    /// assert!(!strict.is_none());
    /// ```
    #[inline]
    pub fn is_strict(&self) -> bool {
        matches!(self, SameSitePolicy::Strict)
    }

    /// Returns `true` if `self` is `SameSitePolicy::Lax` and `false` otherwise.
    #[inline]
    pub fn is_lax(&self) -> bool {
        matches!(self, SameSitePolicy::Lax)
    }

    /// Returns `true` if `self` is `SameSitePolicy::None` and `false` otherwise.
    ///
    /// # Example
    ///
    /// ```rust
    /// use samesite_compat::SameSitePolicy;
    ///
    /// let none = SameSitePolicy::None;
    /// assert!(none.is_none());
    /// assert!(!none.is_unset());
    /// ```
    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self, SameSitePolicy::None)
    }

    /// Returns the policy as a string slice.
    ///
    /// For every value other than `Unset` this is the spelling used in the
    /// `SameSite` attribute of a `Set-Cookie` header.
    pub fn as_str(&self) -> &'static str {
        match *self {
            SameSitePolicy::Unset => "Unset",
            SameSitePolicy::Strict => "Strict",
            SameSitePolicy::Lax => "Lax",
            SameSitePolicy::None => "None",
        }
    }
}

impl fmt::Display for SameSitePolicy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SameSitePolicy {
    type Err = ParsePolicyError;

    /// Parse a policy out of a configuration value.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace.
    ///
    /// ```rust
    /// use samesite_compat::SameSitePolicy;
    ///
    /// assert_eq!("lax".parse::<SameSitePolicy>().unwrap(), SameSitePolicy::Lax);
    /// assert_eq!(" NONE ".parse::<SameSitePolicy>().unwrap(), SameSitePolicy::None);
    /// assert!("sometimes".parse::<SameSitePolicy>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        [
            SameSitePolicy::Unset,
            SameSitePolicy::Strict,
            SameSitePolicy::Lax,
            SameSitePolicy::None,
        ]
        .into_iter()
        .find(|policy| policy.as_str().eq_ignore_ascii_case(trimmed))
        .ok_or_else(|| ParsePolicyError {
            value: s.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("`{value}` is not a valid SameSite policy. Expected one of `unset`, `strict`, `lax` or `none`")]
/// The error returned when a configuration value can't be parsed into a [`SameSitePolicy`].
pub struct ParsePolicyError {
    value: String,
}

impl ParsePolicyError {
    /// The raw value that was rejected.
    pub fn value(&self) -> &str {
        &self.value
    }
}
