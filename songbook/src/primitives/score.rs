use super::Part;

/// A complete melody: named, ordered parts, terminal once exported.
#[derive(Debug, PartialEq, Clone)]
pub struct Score {
    title: String,
    parts: Vec<Part>,
}
impl Score {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            parts: Vec::new(),
        }
    }
    pub fn push_part(&mut self, part: Part) {
        self.parts.push(part);
    }
    pub fn title(&self) -> &str {
        &self.title
    }
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// File stem of the exported score: the title with spaces
    /// replaced by underscores.
    pub fn file_stem(&self) -> String {
        self.title.replace(' ', "_")
    }
}
