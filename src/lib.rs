//! # processout - ProcessOut API client
//!
//! A Rust client for the [ProcessOut](https://www.processout.com) payments API.
//! Every call follows the same protocol: a JSON body, basic-auth credentials,
//! an `API-Version` header, and a `{ success, message, <payload> }` response
//! envelope where `success: false` becomes [`ProcessOutError::Api`].
//!
//! ```rust,no_run
//! use processout::{Invoice, Options, ProcessOut};
//!
//! # async fn run() -> processout::Result<()> {
//! let client = ProcessOut::new("proj_XXXX", "key_XXXX");
//!
//! let invoice = client
//!     .invoices()
//!     .create(&Invoice::new("Order #42", "19.90", "USD"), None)
//!     .await?;
//!
//! let options = Options::new().with_idempotency_key("order-42-capture");
//! client
//!     .invoices()
//!     .capture(&invoice, "cust_XXXX", Some(&options))
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod envelope;
pub mod error;
pub mod options;
pub mod request;
pub mod resources;
pub mod types;

// Re-exports for convenience
pub use client::{ProcessOut, ProcessOutBuilder};
pub use error::{ProcessOutError, Result};
pub use options::Options;
pub use types::*;

/// Current version of the processout crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// API version sent by default in the `API-Version` header
pub const DEFAULT_API_VERSION: &str = "1.4.0.0";

/// Default API host
pub const DEFAULT_HOST: &str = "https://api.processout.com";
