//! Configuration for a [`Processor`].
//!
//! Check out the [`Config`] struct for more information.
//!
//! [`Processor`]: crate::Processor
use crate::errors::ParsePolicyError;
use crate::SameSitePolicy;

/// `Config` specifies which `SameSite` attribute the server wants on its
/// outgoing cookies.
///
/// # [`Processor`]
///
/// To action the rules specified in this struct, you must convert it into a [`Processor`]:
///
/// ```rust
/// use samesite_compat::{Processor, SameSitePolicy};
/// use samesite_compat::config::Config;
///
/// let mut config = Config::default();
/// config.same_site = SameSitePolicy::None;
/// let processor: Processor = config.into();
/// ```
///
/// [`Processor`]: crate::Processor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[non_exhaustive]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct Config {
    /// The `SameSite` policy applied to every outgoing cookie.
    ///
    /// `SameSitePolicy::None` is only emitted for clients that are known to
    /// support it: check out [`append_same_site`] for more details.
    ///
    /// By default, this field is `SameSitePolicy::Unset`.
    ///
    /// [`append_same_site`]: crate::append_same_site
    #[cfg_attr(feature = "serde", serde(default))]
    pub same_site: SameSitePolicy,
}

impl Config {
    /// Build a [`Config`] from a raw policy string, e.g. the value of an
    /// environment variable or of a server configuration attribute.
    ///
    /// ```rust
    /// use samesite_compat::SameSitePolicy;
    /// use samesite_compat::config::Config;
    ///
    /// let config = Config::from_policy_str("none").unwrap();
    /// assert_eq!(config.same_site, SameSitePolicy::None);
    ///
    /// assert!(Config::from_policy_str("whatever").is_err());
    /// ```
    pub fn from_policy_str(policy: &str) -> Result<Self, ParsePolicyError> {
        Ok(Config {
            same_site: policy.parse()?,
        })
    }
}

impl From<SameSitePolicy> for Config {
    fn from(same_site: SameSitePolicy) -> Self {
        Config { same_site }
    }
}
