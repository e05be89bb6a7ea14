//! Which cover image URLs may be embedded in a page.

use shelf_kernel::settings::{ImageSettings, RemotePattern};
use url::Url;

#[derive(Debug, Clone, Default)]
pub struct ImagePolicy {
    patterns: Vec<RemotePattern>,
}

impl From<&ImageSettings> for ImagePolicy {
    fn from(settings: &ImageSettings) -> Self {
        Self {
            patterns: settings.remote_patterns.clone(),
        }
    }
}

impl ImagePolicy {
    /// True when `raw` parses and matches one of the remote patterns.
    pub fn allows(&self, raw: &str) -> bool {
        let Ok(url) = Url::parse(raw) else {
            return false;
        };
        let Some(host) = url.host_str() else {
            return false;
        };
        self.patterns
            .iter()
            .any(|pattern| matches(pattern, url.scheme(), host, url.port()))
    }
}

fn matches(pattern: &RemotePattern, scheme: &str, host: &str, port: Option<u16>) -> bool {
    if !pattern.protocol.eq_ignore_ascii_case(scheme) {
        return false;
    }
    if let Some(expected) = pattern.port {
        if port != Some(expected) {
            return false;
        }
    }
    let host = host.to_ascii_lowercase();
    let hostname = pattern.hostname.to_ascii_lowercase();
    match hostname.strip_prefix("**.") {
        // Any depth of subdomain, but not the bare domain.
        Some(domain) => host
            .strip_suffix(domain)
            .is_some_and(|prefix| prefix.len() > 1 && prefix.ends_with('.')),
        None => host == hostname,
    }
}
