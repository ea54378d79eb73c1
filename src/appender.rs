use crate::{RequestMetadata, SameSitePolicy};

/// Append the `SameSite` attribute to the `Set-Cookie` header value built by
/// the host's cookie encoder, returning the header value to send.
///
/// - `Unset` leaves the header untouched.
/// - `Strict` and `Lax` are always appended.
/// - `None` is appended, together with `Secure`, only if the request was received
///   over a secure transport **and** the client is known to handle it correctly
///   (see [`is_same_site_none_incompatible`]). Otherwise the header is left untouched
///   and the client falls back to its default behaviour.
///
/// A missing request is treated as a request from an unknown client.
///
/// ```rust
/// use samesite_compat::{append_same_site, RequestMetadata, SameSitePolicy};
///
/// let firefox = RequestMetadata::new(true, Some("Mozilla/5.0 (X11; Linux x86_64; rv:120.0) Gecko/20100101 Firefox/120.0"));
/// let header = append_same_site(SameSitePolicy::None, "id=42; HttpOnly", Some(&firefox));
/// assert_eq!(header, "id=42; HttpOnly; SameSite=None; Secure");
///
/// let header = append_same_site(SameSitePolicy::Lax, "id=42", None);
/// assert_eq!(header, "id=42; SameSite=Lax");
/// ```
///
/// [`is_same_site_none_incompatible`]: crate::user_agent::is_same_site_none_incompatible
pub fn append_same_site(
    policy: SameSitePolicy,
    base_header: &str,
    request: Option<&RequestMetadata<'_>>,
) -> String {
    let mut header = base_header.to_string();
    match policy {
        SameSitePolicy::Unset => {
            tracing::debug!("No SameSite policy configured");
        }
        SameSitePolicy::Strict | SameSitePolicy::Lax => {
            tracing::debug!(same_site = %policy, "Appending the SameSite attribute");
            push_same_site(&mut header, policy);
        }
        SameSitePolicy::None => {
            let Some(request) = request else {
                tracing::debug!("SameSite=None will not be set: there is no request");
                return header;
            };
            if !request.secure() {
                tracing::debug!("SameSite=None will not be set: the request is not secure");
                return header;
            }
            // `None` only works alongside `Secure`, and only for compatible clients.
            if request.supports_same_site_none() {
                tracing::debug!("SameSite=None will be set for a compatible user agent");
                push_same_site(&mut header, policy);
                header.push_str("; Secure");
            } else {
                tracing::debug!(
                    user_agent = request.user_agent(),
                    "SameSite=None will not be set for an incompatible user agent"
                );
            }
        }
    }
    header
}

/// The same as [`append_same_site`], with the request metadata passed as flat arguments.
pub fn decide(
    policy: SameSitePolicy,
    base_header: &str,
    is_secure_transport: bool,
    user_agent: Option<&str>,
) -> String {
    let request = RequestMetadata::new(is_secure_transport, user_agent);
    append_same_site(policy, base_header, Some(&request))
}

fn push_same_site(header: &mut String, policy: SameSitePolicy) {
    header.push_str("; SameSite=");
    header.push_str(policy.as_str());
}

#[cfg(test)]
mod tests {
    use super::{append_same_site, decide};
    use crate::{RequestMetadata, SameSitePolicy};
    use googletest::prelude::*;

    const IOS_12: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 12_3_1 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/12.1.1 Mobile/15E148 Safari/604.1";
    const IOS_13: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 13_3_1 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/12.1.1 Mobile/15E148 Safari/604.1";

    #[test]
    fn unset_leaves_the_header_untouched() {
        for (secure, user_agent) in [(true, Some(IOS_13)), (false, None), (true, Some(""))] {
            let header = decide(SameSitePolicy::Unset, "name=value", secure, user_agent);
            assert_that!(header, eq("name=value"));
        }
    }

    #[test]
    fn strict_and_lax_are_always_appended() {
        for user_agent in [Some(IOS_12), Some(IOS_13), Some(""), None] {
            for secure in [true, false] {
                assert_that!(
                    decide(SameSitePolicy::Strict, "name=value", secure, user_agent),
                    eq("name=value; SameSite=Strict")
                );
                assert_that!(
                    decide(SameSitePolicy::Lax, "name=value", secure, user_agent),
                    eq("name=value; SameSite=Lax")
                );
            }
        }
        assert_that!(
            append_same_site(SameSitePolicy::Strict, "name=value", None),
            eq("name=value; SameSite=Strict")
        );
    }

    #[test]
    fn none_is_appended_for_compatible_clients() {
        let header = decide(SameSitePolicy::None, "name=value", true, Some(IOS_13));
        assert_that!(header, contains_substring("SameSite=None; Secure"));
        assert_that!(header, eq("name=value; SameSite=None; Secure"));
    }

    #[test]
    fn none_is_suppressed_for_incompatible_clients() {
        let header = decide(SameSitePolicy::None, "name=value", true, Some(IOS_12));
        assert_that!(header, not(contains_substring("SameSite=None; Secure")));
        assert_that!(header, eq("name=value"));
    }

    #[test]
    fn none_is_suppressed_over_insecure_transport() {
        let header = decide(SameSitePolicy::None, "name=value", false, Some(IOS_13));
        assert_that!(header, eq("name=value"));
    }

    #[test]
    fn none_is_suppressed_for_unknown_clients() {
        for user_agent in [None, Some("")] {
            let header = decide(SameSitePolicy::None, "name=value", true, user_agent);
            assert_that!(header, not(contains_substring("SameSite=None")));
        }
        let header = append_same_site(SameSitePolicy::None, "name=value", None);
        assert_that!(header, eq("name=value"));
    }

    #[test]
    fn decisions_are_repeatable() {
        let request = RequestMetadata::new(true, Some(IOS_13));
        let first = append_same_site(SameSitePolicy::None, "name=value", Some(&request));
        let second = append_same_site(SameSitePolicy::None, "name=value", Some(&request));
        assert_that!(first, eq(second.as_str()));
    }
}
