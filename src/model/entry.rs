use std::fmt;

/// A stored `(label, count)` pair shown in the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub text: String,
    pub count: u8,
}

impl Entry {
    pub fn new(text: impl Into<String>, count: u8) -> Self {
        Self {
            text: text.into(),
            count,
        }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.text, self.count)
    }
}
