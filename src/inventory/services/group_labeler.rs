use crate::inventory::domain::SourceLocation;

/// GroupLabeler derives an organisational tag from where a capture lives.
///
/// Log collections are usually filed as `<anchor>/<group>/...`, for example
/// `Sites/Denver/core-sw1.log`. With anchor `Sites` the label is `Denver`.
/// The anchor comparison ignores ASCII case; the first occurrence wins.
#[derive(Debug, Clone)]
pub struct GroupLabeler {
    anchor: String,
}

impl GroupLabeler {
    pub fn new(anchor: impl Into<String>) -> Self {
        Self {
            anchor: anchor.into(),
        }
    }

    /// Returns the directory segment that follows the anchor folder, if any
    pub fn label_for(&self, location: &SourceLocation) -> Option<String> {
        let segments = location.directory_segments();
        segments
            .iter()
            .position(|segment| segment.eq_ignore_ascii_case(&self.anchor))
            .and_then(|idx| segments.get(idx + 1))
            .map(|segment| segment.to_string())
    }
}
