//! The extracted message list.
//!
//! [`MessageList`] is the sole output payload: the ordered texts of every
//! request that carried a non-empty `message.text`. It serializes as a plain
//! JSON array of strings.

use serde::{Deserialize, Serialize};

/// Ordered list of extracted message texts.
///
/// Order always matches the order of the `requests` sequence the texts were
/// taken from. Serializes transparently as `["...", "..."]`.
///
/// ```
/// use chatcompress::MessageList;
///
/// let list: MessageList = ["hi", "bye"].into_iter().map(String::from).collect();
/// assert_eq!(list.len(), 2);
/// assert_eq!(serde_json::to_string(&list)?, r#"["hi","bye"]"#);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageList(Vec<String>);

impl MessageList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a text at the end.
    pub fn push(&mut self, text: impl Into<String>) {
        self.0.push(text.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Consumes the list, returning the underlying vector.
    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl From<Vec<String>> for MessageList {
    fn from(texts: Vec<String>) -> Self {
        Self(texts)
    }
}

impl FromIterator<String> for MessageList {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for MessageList {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a MessageList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
