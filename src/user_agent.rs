//! Classify clients by their `User-Agent` header.
//!
//! Some user agents are known to be incompatible with the `SameSite=None` attribute:
//!
//! - Versions of Chrome from Chrome 51 to Chrome 66 (inclusive on both ends) reject
//!   a cookie with `SameSite=None`. This also affects older versions of Chromium-derived
//!   browsers, as well as Android WebView.
//! - Versions of UC Browser on Android prior to version 12.13.2 reject a cookie
//!   with `SameSite=None`.
//! - Versions of Safari and embedded browsers on MacOS 10.14 and all browsers on iOS 12
//!   erroneously treat cookies marked with `SameSite=None` as if they were marked
//!   `SameSite=Strict`.
//!
//! The rules follow the [list of incompatible clients] maintained by the Chromium project.
//! This is **not** a general purpose user-agent parser: it only looks for the narrow
//! signals required to take the `SameSite=None` decision.
//!
//! [list of incompatible clients]: https://www.chromium.org/updates/same-site/incompatible-clients
use regex::Regex;
use std::sync::LazyLock;

static IOS_VERSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\(iP.+; CPU .*OS ([0-9]+)[_0-9]*.*\) AppleWebKit/")
        .expect("The iOS version regex is invalid")
});
static MACOSX_VERSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\(Macintosh;.*Mac OS X ([0-9]+)_([0-9]+)[_0-9]*.*\) AppleWebKit/")
        .expect("The macOS version regex is invalid")
});
static SAFARI: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Version/.* Safari/").expect("The Safari regex is invalid")
});
static MAC_EMBEDDED_BROWSER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^Mozilla/[.0-9]+ \(Macintosh;.*Mac OS X [_0-9]+\) ",
        r"AppleWebKit/[.0-9]+ \(KHTML, like Gecko\)$"
    ))
    .expect("The macOS embedded browser regex is invalid")
});
static CHROMIUM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Chrom(e|ium)").expect("The Chromium regex is invalid"));
static CHROMIUM_VERSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Chrom[^ /]+/([0-9]+)[.0-9]* ").expect("The Chromium version regex is invalid")
});
static UC_BROWSER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"UCBrowser/").expect("The UC Browser regex is invalid"));
static UC_BROWSER_VERSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"UCBrowser/([0-9]+)\.([0-9]+)\.([0-9]+)[.0-9]* ")
        .expect("The UC Browser version regex is invalid")
});

/// A `major.minor.build` version triple.
///
/// The derived ordering is lexicographic: major first, then minor, then build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Version {
    major: u32,
    minor: u32,
    build: u32,
}

/// Returns `true` if the client is known to mishandle `SameSite=None`.
///
/// ```rust
/// use samesite_compat::user_agent::is_same_site_none_incompatible;
///
/// // iOS 12 treats `SameSite=None` as `SameSite=Strict`.
/// assert!(is_same_site_none_incompatible(
///     "Mozilla/5.0 (iPhone; CPU iPhone OS 12_3_1 like Mac OS X) AppleWebKit/605.1.15 \
///     (KHTML, like Gecko) Version/12.1.1 Mobile/15E148 Safari/604.1"
/// ));
/// // iOS 13 is fine.
/// assert!(!is_same_site_none_incompatible(
///     "Mozilla/5.0 (iPhone; CPU iPhone OS 13_3_1 like Mac OS X) AppleWebKit/605.1.15 \
///     (KHTML, like Gecko) Version/12.1.1 Mobile/15E148 Safari/604.1"
/// ));
/// ```
pub fn is_same_site_none_incompatible(user_agent: &str) -> bool {
    has_webkit_same_site_bug(user_agent) || drops_unrecognized_same_site_cookies(user_agent)
}

/// The negation of [`is_same_site_none_incompatible`].
pub fn should_send_same_site_none(user_agent: &str) -> bool {
    !is_same_site_none_incompatible(user_agent)
}

/// iOS 12, as well as Safari and embedded browsers on macOS 10.14, treat
/// `SameSite=None` as `SameSite=Strict`.
pub fn has_webkit_same_site_bug(user_agent: &str) -> bool {
    is_ios_version(12, user_agent)
        || (is_macosx_version(10, 14, user_agent)
            && (is_safari(user_agent) || is_mac_embedded_browser(user_agent)))
}

/// Chrome 51 to 66 and UC Browser before 12.13.2 reject cookies with `SameSite=None`.
pub fn drops_unrecognized_same_site_cookies(user_agent: &str) -> bool {
    if is_uc_browser(user_agent) {
        return !is_uc_browser_version_at_least(12, 13, 2, user_agent);
    }
    is_chromium_based(user_agent)
        && is_chromium_version_at_least(51, user_agent)
        && !is_chromium_version_at_least(67, user_agent)
}

/// Returns `true` if the user agent belongs to an iOS device running exactly
/// the given major version.
pub fn is_ios_version(major: u32, user_agent: &str) -> bool {
    IOS_VERSION
        .captures(user_agent)
        .is_some_and(|captures| captures[1] == major.to_string())
}

/// Returns `true` if the user agent belongs to a macOS device running exactly
/// the given `major.minor` version.
pub fn is_macosx_version(major: u32, minor: u32, user_agent: &str) -> bool {
    MACOSX_VERSION.captures(user_agent).is_some_and(|captures| {
        captures[1] == major.to_string() && captures[2] == minor.to_string()
    })
}

/// Returns `true` for Safari.
///
/// Chromium-based browsers include a `Safari/` token too: they are excluded.
pub fn is_safari(user_agent: &str) -> bool {
    SAFARI.is_match(user_agent) && !is_chromium_based(user_agent)
}

/// Returns `true` for an embedded browser on macOS, i.e. a WebView that
/// doesn't append any product token after `(KHTML, like Gecko)`.
///
/// The whole user agent must match.
pub fn is_mac_embedded_browser(user_agent: &str) -> bool {
    MAC_EMBEDDED_BROWSER.is_match(user_agent)
}

/// Returns `true` if the user agent mentions `Chrome` or `Chromium` anywhere.
pub fn is_chromium_based(user_agent: &str) -> bool {
    CHROMIUM.is_match(user_agent)
}

/// Returns `true` if the first `Chrom*/<version>` token carries a major version
/// greater than or equal to `major`.
///
/// Returns `false` if there is no such token or if its major version can't be parsed.
pub fn is_chromium_version_at_least(major: u32, user_agent: &str) -> bool {
    let Some(captures) = CHROMIUM_VERSION.captures(user_agent) else {
        return false;
    };
    match captures[1].parse::<u32>() {
        Ok(version) => version >= major,
        Err(e) => {
            tracing::debug!(
                error = %e,
                raw_version = &captures[1],
                "Failed to parse the major version of a Chromium-based user agent"
            );
            false
        }
    }
}

/// Returns `true` if the user agent contains a `UCBrowser/` token.
pub fn is_uc_browser(user_agent: &str) -> bool {
    UC_BROWSER.is_match(user_agent)
}

/// Returns `true` if the first `UCBrowser/<major>.<minor>.<build>` token carries
/// a version greater than or equal to `major.minor.build`.
///
/// Returns `false` if there is no such token or if its version can't be parsed.
pub fn is_uc_browser_version_at_least(major: u32, minor: u32, build: u32, user_agent: &str) -> bool {
    let Some(captures) = UC_BROWSER_VERSION.captures(user_agent) else {
        return false;
    };
    let parsed = (|| {
        Ok::<_, std::num::ParseIntError>(Version {
            major: captures[1].parse()?,
            minor: captures[2].parse()?,
            build: captures[3].parse()?,
        })
    })();
    match parsed {
        Ok(version) => version >= Version { major, minor, build },
        Err(e) => {
            tracing::debug!(
                error = %e,
                raw_version = &captures[0],
                "Failed to parse the version of a UC Browser user agent"
            );
            false
        }
    }
}
