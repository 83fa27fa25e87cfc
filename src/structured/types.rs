use serde::Serialize;

/// One instructional step recovered from a body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HowToStep {
    pub name: String,
    pub text: String,
}

/// One troubleshooting question and answer recovered from a body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

/// Outcome of running an ordered chain of extraction patterns
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction<T> {
    /// The named pattern was the first to yield anything
    Found { pattern: &'static str, items: Vec<T> },
    /// No section, or no pattern matched
    Empty,
}

impl<T> Extraction<T> {
    pub fn pattern(&self) -> Option<&'static str> {
        match self {
            Extraction::Found { pattern, .. } => Some(*pattern),
            Extraction::Empty => None,
        }
    }

    pub fn items(&self) -> &[T] {
        match self {
            Extraction::Found { items, .. } => items,
            Extraction::Empty => &[],
        }
    }

    pub fn into_items(self) -> Vec<T> {
        match self {
            Extraction::Found { items, .. } => items,
            Extraction::Empty => Vec::new(),
        }
    }

    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Extraction<U> {
        match self {
            Extraction::Found { pattern, items } => Extraction::Found {
                pattern,
                items: items.into_iter().map(f).collect(),
            },
            Extraction::Empty => Extraction::Empty,
        }
    }
}

/// A named pattern: a pure function from section text to items
pub type Pattern<T> = (&'static str, fn(&str) -> Vec<T>);

/// Try each pattern in order and keep the first non-empty result
pub fn first_match<T>(section: &str, patterns: &[Pattern<T>]) -> Extraction<T> {
    for &(name, pattern) in patterns {
        let items = pattern(section);
        if !items.is_empty() {
            return Extraction::Found { pattern: name, items };
        }
    }
    Extraction::Empty
}
