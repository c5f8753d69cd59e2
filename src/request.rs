//! Request construction
//!
//! Turns an operation's method, path and body fields into a `reqwest::Request`
//! carrying the headers and credentials every ProcessOut call needs. Nothing
//! here touches the network, so failures surface before any I/O.

use crate::client::ProcessOut;
use crate::options::Options;
use crate::{ProcessOutError, Result};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Method;
use serde::Serialize;
use serde_json::{Map, Value};

/// Bytes left untouched in a path segment: RFC 3986 unreserved characters
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encode an identifier for use as a single URL path segment.
///
/// Empty identifiers and the dot segments `.` and `..` are rejected, since
/// URL normalization would silently change which resource is addressed.
pub fn escape_segment(segment: &str) -> Result<String> {
    if segment.is_empty() || segment == "." || segment == ".." {
        return Err(ProcessOutError::invalid_request(format!(
            "'{}' is not a valid resource identifier",
            segment
        )));
    }
    Ok(utf8_percent_encode(segment, PATH_SEGMENT).to_string())
}

/// JSON object sent as the request body
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestBody {
    fields: Map<String, Value>,
}

impl RequestBody {
    /// Create an empty body
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field. Zero and empty values are kept: the API expects every
    /// documented field to be present.
    pub fn field<T>(mut self, name: &str, value: &T) -> Result<Self>
    where
        T: Serialize + ?Sized,
    {
        let value = serde_json::to_value(value).map_err(ProcessOutError::Serialize)?;
        self.fields.insert(name.to_string(), value);
        Ok(self)
    }

    /// Fields set so far
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    fn insert(&mut self, name: &str, value: Value) {
        self.fields.insert(name.to_string(), value);
    }
}

/// A single API call before options and credentials are applied
#[derive(Debug, Clone)]
pub struct ApiRequest {
    method: Method,
    path: String,
    body: RequestBody,
    paginated: bool,
}

impl ApiRequest {
    /// Create a request for `path`, which must already be escaped
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: RequestBody::new(),
            paginated: false,
        }
    }

    /// Create a GET request
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// Create a POST request
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// Create a PUT request
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    /// Create a DELETE request
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Set the operation-specific body fields
    pub fn with_body(mut self, body: RequestBody) -> Self {
        self.body = body;
        self
    }

    /// Include the filter and pagination options in the body
    pub fn paginated(mut self) -> Self {
        self.paginated = true;
        self
    }

    /// HTTP method
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Escaped request path
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Build the HTTP request against the client's host
    pub fn build(self, client: &ProcessOut, options: &Options) -> Result<reqwest::Request> {
        let mut body = self.body;
        body.insert("expand", Value::from(options.expand.clone()));
        if self.paginated {
            body.insert("filter", Value::from(options.filter.clone()));
            body.insert("limit", Value::from(options.limit));
            body.insert("end_before", Value::from(options.end_before.clone()));
            body.insert("start_after", Value::from(options.start_after.clone()));
        }
        let bytes = serde_json::to_vec(&body.fields).map_err(ProcessOutError::Serialize)?;

        let url = format!("{}{}", client.host(), self.path);
        let mut builder = client
            .http()
            .request(self.method, url)
            .header(CONTENT_TYPE, "application/json")
            .header("API-Version", client.api_version())
            .header(ACCEPT, "application/json");

        if let Some(key) = options.idempotency_key() {
            builder = builder.header("Idempotency-Key", key);
        }
        if options.disable_logging {
            builder = builder.header("Disable-Logging", "true");
        }

        builder
            .basic_auth(client.project_id(), Some(client.project_secret()))
            .body(bytes)
            .build()
            .map_err(|e| ProcessOutError::invalid_request(e.to_string()))
    }
}
