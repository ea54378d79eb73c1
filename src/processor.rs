use crate::config::Config;
use crate::{append_same_site, RequestMetadata, SameSitePolicy};

/// Adds the configured `SameSite` attribute to `Set-Cookie` header values, taking
/// into account which client the response is going to.
///
/// The `Set-Cookie` header value itself (name, value, `Path`, `Domain`, etc.) is
/// built by your cookie encoder of choice. It must not include a `SameSite` attribute:
/// the processor takes care of it.
///
/// # Creating a `Processor`
///
/// A processor is created from a [`Config`] using the [`From`] trait.
///
/// ```rust
/// use samesite_compat::{Processor, SameSitePolicy};
/// use samesite_compat::config::Config;
///
/// let processor: Processor = Config::from(SameSitePolicy::None).into();
/// ```
///
/// # Using a `Processor`
///
/// ```rust
/// use samesite_compat::{Processor, RequestMetadata, SameSitePolicy};
/// use samesite_compat::config::Config;
///
/// let processor: Processor = Config::from(SameSitePolicy::None).into();
///
/// let chrome_78 = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
///     (KHTML, like Gecko) Chrome/78.0.3904.108 Safari/537.36";
/// let request = RequestMetadata::new(true, Some(chrome_78));
/// assert_eq!(
///     processor.process_header("session=abc; HttpOnly", &request),
///     "session=abc; HttpOnly; SameSite=None; Secure"
/// );
///
/// // Chrome 66 rejects cookies with `SameSite=None`.
/// let chrome_66 = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
///     (KHTML, like Gecko) Chrome/66.0.3359.181 Safari/537.36";
/// let request = RequestMetadata::new(true, Some(chrome_66));
/// assert_eq!(
///     processor.process_header("session=abc; HttpOnly", &request),
///     "session=abc; HttpOnly"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct Processor {
    same_site: SameSitePolicy,
}

impl From<Config> for Processor {
    fn from(value: Config) -> Self {
        Processor {
            same_site: value.same_site,
        }
    }
}

impl Processor {
    /// The `SameSite` policy this processor was configured with.
    pub fn same_site(&self) -> SameSitePolicy {
        self.same_site
    }

    /// Transform a `Set-Cookie` header value before it is sent to the client.
    pub fn process_header(&self, base_header: &str, request: &RequestMetadata<'_>) -> String {
        append_same_site(self.same_site, base_header, Some(request))
    }

    /// Transform all the `Set-Cookie` header values of a response.
    ///
    /// Every header value receives the same treatment, since they are all sent
    /// to the same client.
    pub fn process_headers<'a, I, S>(
        &'a self,
        base_headers: I,
        request: &'a RequestMetadata<'a>,
    ) -> impl Iterator<Item = String> + 'a
    where
        I: IntoIterator<Item = S> + 'a,
        I::IntoIter: 'a,
        S: AsRef<str> + 'a,
    {
        base_headers
            .into_iter()
            .map(move |header| self.process_header(header.as_ref(), request))
    }
}
