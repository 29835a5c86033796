//! Chat export data model.
//!
//! A chat export is a JSON object of the shape:
//!
//! ```json
//! {
//!   "requests": [
//!     { "message": { "text": "Hello", "parts": [] }, "response": [] },
//!     { "message": { "text": "" } }
//!   ]
//! }
//! ```
//!
//! Only `requests[*].message.text` is read. Every lookup is optional: a
//! missing or wrong-typed field yields "no text" instead of an error, so any
//! syntactically valid JSON document produces a (possibly empty) export.

use serde_json::Value;

use crate::message::MessageList;

/// One element of the `requests` sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Request {
    /// `message.text`, when present and a JSON string.
    pub text: Option<String>,
}

impl Request {
    /// Reads `message.text` from a single request value.
    ///
    /// Returns a request without text if the value is not an object, if
    /// `message` is missing or not an object, or if `text` is missing or not
    /// a string.
    pub fn from_value(value: &Value) -> Self {
        let text = value
            .get("message")
            .filter(|message| message.is_object())
            .and_then(|message| message.get("text"))
            .and_then(Value::as_str)
            .map(ToString::to_string);

        Self { text }
    }

    /// Returns the text if it is present and non-empty.
    pub fn non_empty_text(&self) -> Option<&str> {
        self.text.as_deref().filter(|text| !text.is_empty())
    }
}

/// A parsed chat export document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatExport {
    /// All requests, in document order.
    pub requests: Vec<Request>,
}

impl ChatExport {
    /// Builds an export from an already-parsed JSON value.
    ///
    /// A non-object top-level value, a missing `requests` field or a
    /// non-array `requests` field all produce an export with no requests.
    ///
    /// ```
    /// use chatcompress::ChatExport;
    /// use serde_json::json;
    ///
    /// let export = ChatExport::from_value(&json!({
    ///     "requests": [{"message": {"text": "hi"}}, {"message": {}}]
    /// }));
    /// assert_eq!(export.request_count(), 2);
    /// assert_eq!(export.messages().as_slice(), &["hi"]);
    ///
    /// assert_eq!(ChatExport::from_value(&json!([1, 2])).request_count(), 0);
    /// ```
    pub fn from_value(value: &Value) -> Self {
        let requests = value
            .get("requests")
            .and_then(Value::as_array)
            .map(|requests| requests.iter().map(Request::from_value).collect())
            .unwrap_or_default();

        Self { requests }
    }

    /// Number of requests in the document, with or without text.
    pub fn request_count(&self) -> usize {
        self.requests.len()
    }

    /// Collects the non-empty texts in request order.
    pub fn messages(&self) -> MessageList {
        self.requests
            .iter()
            .filter_map(Request::non_empty_text)
            .map(ToString::to_string)
            .collect()
    }

    /// Like [`messages`](Self::messages), but moves the texts out.
    pub fn into_messages(self) -> MessageList {
        self.requests
            .into_iter()
            .filter_map(|request| request.text)
            .filter(|text| !text.is_empty())
            .collect()
    }
}
