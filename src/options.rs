//! Per-call request options
//!
//! Every operation accepts an `Option<&Options>`. `None` means defaults: no
//! expanded fields, no pagination, no idempotency key.

/// Options available when making a request to the ProcessOut API
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    /// Related objects to include in the response
    pub expand: Vec<String>,
    /// Filter applied by list operations
    pub filter: String,
    /// Page size for list operations (0 lets the API decide)
    pub limit: u64,
    /// Return items created before this ID
    pub end_before: String,
    /// Return items created after this ID
    pub start_after: String,
    /// Sent as the `Idempotency-Key` header when non-empty
    pub idempotency_key: String,
    /// Sent as `Disable-Logging: true` when set
    pub disable_logging: bool,
}

impl Options {
    /// Create empty options
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the list of expanded fields
    pub fn with_expand<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expand = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Append a single expanded field
    pub fn expand_field(mut self, field: impl Into<String>) -> Self {
        self.expand.push(field.into());
        self
    }

    /// Set the list filter
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = filter.into();
        self
    }

    /// Set the page size
    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = limit;
        self
    }

    /// Set the `end_before` cursor
    pub fn with_end_before(mut self, id: impl Into<String>) -> Self {
        self.end_before = id.into();
        self
    }

    /// Set the `start_after` cursor
    pub fn with_start_after(mut self, id: impl Into<String>) -> Self {
        self.start_after = id.into();
        self
    }

    /// Set the idempotency key
    pub fn with_idempotency_key(mut self, key: impl Into<String>) -> Self {
        self.idempotency_key = key.into();
        self
    }

    /// Use a freshly generated UUID v4 as idempotency key
    pub fn with_generated_idempotency_key(self) -> Self {
        self.with_idempotency_key(uuid::Uuid::new_v4().to_string())
    }

    /// Ask the API not to log this request
    pub fn with_disable_logging(mut self) -> Self {
        self.disable_logging = true;
        self
    }

    pub(crate) fn idempotency_key(&self) -> Option<&str> {
        if self.idempotency_key.is_empty() {
            None
        } else {
            Some(&self.idempotency_key)
        }
    }
}
