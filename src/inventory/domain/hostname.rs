/// Where a capture's hostname was found, ordered by trustworthiness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostnameSource {
    /// `HOST#show inventory` command prompt
    Prompt,
    /// `hostname HOST` configuration line
    Configuration,
    /// The file or archive member name
    Fallback,
}

impl HostnameSource {
    /// Confidence rank of this source (higher is more trustworthy)
    pub fn priority(self) -> u8 {
        match self {
            HostnameSource::Prompt => 2,
            HostnameSource::Configuration => 1,
            HostnameSource::Fallback => 0,
        }
    }
}

/// A hostname resolved for one capture, with the source it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedHostname {
    name: String,
    source: HostnameSource,
}

impl ResolvedHostname {
    pub fn new(name: String, source: HostnameSource) -> Self {
        Self { name, source }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn source(&self) -> HostnameSource {
        self.source
    }

    pub fn priority(&self) -> u8 {
        self.source.priority()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_ranks() {
        assert_eq!(HostnameSource::Prompt.priority(), 2);
        assert_eq!(HostnameSource::Configuration.priority(), 1);
        assert_eq!(HostnameSource::Fallback.priority(), 0);
    }

    #[test]
    fn test_resolved_hostname_accessors() {
        let hostname = ResolvedHostname::new("core-sw1".to_string(), HostnameSource::Prompt);
        assert_eq!(hostname.name(), "core-sw1");
        assert_eq!(hostname.source(), HostnameSource::Prompt);
        assert_eq!(hostname.priority(), 2);
    }
}
