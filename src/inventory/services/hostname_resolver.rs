use crate::inventory::domain::{HostnameSource, ResolvedHostname};
use crate::inventory::patterns::{CONFIG_HOSTNAME, PROMPT_HOSTNAME};

/// HostnameResolver identifies the device a capture belongs to.
///
/// Priority order (first match wins, no merging within a block):
/// 1. `HOST#show inventory` prompt (priority 2)
/// 2. `hostname HOST` configuration line (priority 1)
/// 3. The fallback identifier, verbatim (priority 0)
pub struct HostnameResolver;

impl HostnameResolver {
    /// Resolves the hostname of one block of text
    ///
    /// # Arguments
    /// * `text` - Full content of the capture
    /// * `fallback_identifier` - File or archive member name used when the text names no host
    pub fn resolve(text: &str, fallback_identifier: &str) -> ResolvedHostname {
        Self::from_prompt(text)
            .map(|name| ResolvedHostname::new(name, HostnameSource::Prompt))
            .or_else(|| {
                Self::from_configuration(text)
                    .map(|name| ResolvedHostname::new(name, HostnameSource::Configuration))
            })
            .unwrap_or_else(|| {
                ResolvedHostname::new(fallback_identifier.to_string(), HostnameSource::Fallback)
            })
    }

    fn from_prompt(text: &str) -> Option<String> {
        PROMPT_HOSTNAME
            .captures_iter(text)
            .map(|caps| caps[1].trim().to_string())
            .find(|name| !name.is_empty())
    }

    fn from_configuration(text: &str) -> Option<String> {
        CONFIG_HOSTNAME
            .captures(text)
            .map(|caps| caps[1].to_string())
    }
}
