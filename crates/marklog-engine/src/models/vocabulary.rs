use crate::error::ParseError;

/// The set of category labels a log is expected to use.
///
/// Only consulted for warnings and for validating new entries; the parser
/// accepts any non-empty category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryVocabulary {
    categories: Vec<String>,
}

impl CategoryVocabulary {
    pub const DEFAULT: [&'static str; 4] = ["メモ", "学習", "気づき", "問題"];

    pub fn new<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut out: Vec<String> = Vec::new();
        for c in categories {
            let c = c.into();
            if !c.is_empty() && !out.contains(&c) {
                out.push(c);
            }
        }
        Self { categories: out }
    }

    pub fn contains(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }

    pub fn validate(&self, category: &str) -> Result<(), ParseError> {
        if self.contains(category) {
            return Ok(());
        }
        Err(ParseError::UnknownCategory {
            category: category.to_string(),
            valid: self.categories.join(", "),
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl Default for CategoryVocabulary {
    fn default() -> Self {
        Self::new(Self::DEFAULT)
    }
}
