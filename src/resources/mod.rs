//! Resource operations
//!
//! Each service borrows the [`ProcessOut`](crate::ProcessOut) client and maps
//! one method to one API call: a method, an escaped path, the body fields and
//! the key the payload is returned under.

mod customers;
mod invoices;
mod subscriptions;
mod transactions;

pub use customers::Customers;
pub use invoices::Invoices;
pub use subscriptions::Subscriptions;
pub use transactions::Transactions;

use crate::request::escape_segment;
use crate::Result;

/// Path of a single resource, optionally followed by a sub-path
fn member_path(collection: &str, id: &str, suffix: &str) -> Result<String> {
    Ok(format!("/{}/{}{}", collection, escape_segment(id)?, suffix))
}
