/// Where a capture came from: a file under the scan root, optionally a member
/// inside a zip or tar archive at that path.
///
/// Both paths use `/` separators regardless of platform.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceLocation {
    path: String,
    member: Option<String>,
}

impl SourceLocation {
    pub fn file(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            member: None,
        }
    }

    pub fn archive_member(archive_path: impl Into<String>, member: impl Into<String>) -> Self {
        Self {
            path: archive_path.into(),
            member: Some(member.into()),
        }
    }

    pub fn member(&self) -> Option<&str> {
        self.member.as_deref()
    }

    /// Human-readable provenance: `path` or `archive > member`
    pub fn identifier(&self) -> String {
        match &self.member {
            Some(member) => format!("{} > {}", self.path, member),
            None => self.path.clone(),
        }
    }

    /// File name of the innermost source, used as the last-resort hostname
    pub fn fallback_name(&self) -> &str {
        let innermost = self.member.as_deref().unwrap_or(&self.path);
        last_segment(innermost)
    }

    /// Directory segments of the file path, the archive stem, then the member's folders
    pub fn directory_segments(&self) -> Vec<&str> {
        let mut segments = parent_segments(&self.path);
        if let Some(member) = &self.member {
            // The archive acts as a folder level for its members
            segments.push(archive_stem(last_segment(&self.path)));
            segments.extend(parent_segments(member));
        }
        segments
    }
}

fn last_segment(path: &str) -> &str {
    path.trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or(path)
}

fn archive_stem(name: &str) -> &str {
    let lower = name.to_ascii_lowercase();
    if let Some(suffix) = [".tar.gz", ".tgz", ".tar"]
        .iter()
        .find(|suffix| lower.ends_with(*suffix) && lower.len() > suffix.len())
    {
        return &name[..name.len() - suffix.len()];
    }
    name.rsplit_once('.')
        .map(|(stem, _)| stem)
        .filter(|stem| !stem.is_empty())
        .unwrap_or(name)
}

fn parent_segments(path: &str) -> Vec<&str> {
    let mut segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    segments.pop();
    segments
}

/// Full text of one capture together with its location
#[derive(Debug, Clone)]
pub struct SourceBlock {
    pub content: String,
    pub location: SourceLocation,
}

impl SourceBlock {
    pub fn new(content: String, location: SourceLocation) -> Self {
        Self { content, location }
    }
}
