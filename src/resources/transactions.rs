//! Transaction operations

use super::member_path;
use crate::client::ProcessOut;
use crate::options::Options;
use crate::request::ApiRequest;
use crate::types::Transaction;
use crate::Result;

/// Operations on transactions, obtained with [`ProcessOut::transactions`]
#[derive(Debug, Clone, Copy)]
pub struct Transactions<'a> {
    client: &'a ProcessOut,
}

impl<'a> Transactions<'a> {
    pub(crate) fn new(client: &'a ProcessOut) -> Self {
        Self { client }
    }

    /// List transactions
    pub async fn all(&self, options: Option<&Options>) -> Result<Vec<Transaction>> {
        let request = ApiRequest::get("/transactions").paginated();
        self.client.call_list(request, "transactions", options).await
    }

    /// Find a transaction by its ID
    pub async fn find(
        &self,
        transaction_id: &str,
        options: Option<&Options>,
    ) -> Result<Transaction> {
        let request = ApiRequest::get(member_path("transactions", transaction_id, "")?);
        self.client.call(request, "transaction", options).await
    }
}
