//! Invoice operations

use super::member_path;
use crate::client::ProcessOut;
use crate::options::Options;
use crate::request::{escape_segment, ApiRequest, RequestBody};
use crate::types::{Customer, CustomerAction, Invoice, Transaction};
use crate::Result;

/// Operations on invoices, obtained with [`ProcessOut::invoices`]
#[derive(Debug, Clone, Copy)]
pub struct Invoices<'a> {
    client: &'a ProcessOut,
}

impl<'a> Invoices<'a> {
    pub(crate) fn new(client: &'a ProcessOut) -> Self {
        Self { client }
    }

    /// List invoices. Honors the filter and pagination options.
    pub async fn all(&self, options: Option<&Options>) -> Result<Vec<Invoice>> {
        let request = ApiRequest::get("/invoices").paginated();
        self.client.call_list(request, "invoices", options).await
    }

    /// Create a new invoice
    pub async fn create(&self, invoice: &Invoice, options: Option<&Options>) -> Result<Invoice> {
        let body = RequestBody::new()
            .field("name", &invoice.name)?
            .field("amount", &invoice.amount)?
            .field("currency", &invoice.currency)?
            .field("metadata", &invoice.metadata)?
            .field("request_email", &invoice.request_email)?
            .field("request_shipping", &invoice.request_shipping)?
            .field("return_url", &invoice.return_url)?
            .field("cancel_url", &invoice.cancel_url)?;

        let request = ApiRequest::post("/invoices").with_body(body);
        self.client.call(request, "invoice", options).await
    }

    /// Find an invoice by its ID
    pub async fn find(&self, invoice_id: &str, options: Option<&Options>) -> Result<Invoice> {
        let request = ApiRequest::get(member_path("invoices", invoice_id, "")?);
        self.client.call(request, "invoice", options).await
    }

    /// Authorize the invoice using the given source (customer or token)
    pub async fn authorize(
        &self,
        invoice: &Invoice,
        source: &str,
        options: Option<&Options>,
    ) -> Result<()> {
        let body = RequestBody::new().field("source", source)?;
        let request =
            ApiRequest::post(member_path("invoices", &invoice.id, "/authorize")?).with_body(body);
        self.client.call_ack(request, options).await
    }

    /// Capture the invoice using the given source (customer or token)
    pub async fn capture(
        &self,
        invoice: &Invoice,
        source: &str,
        options: Option<&Options>,
    ) -> Result<()> {
        let body = RequestBody::new().field("source", source)?;
        let request =
            ApiRequest::post(member_path("invoices", &invoice.id, "/capture")?).with_body(body);
        self.client.call_ack(request, options).await
    }

    /// Get the customer linked to the invoice
    pub async fn customer(&self, invoice: &Invoice, options: Option<&Options>) -> Result<Customer> {
        let request = ApiRequest::get(member_path("invoices", &invoice.id, "/customers")?);
        self.client.call(request, "customer", options).await
    }

    /// Assign a customer to the invoice
    pub async fn assign_customer(
        &self,
        invoice: &Invoice,
        customer_id: &str,
        options: Option<&Options>,
    ) -> Result<Customer> {
        let body = RequestBody::new().field("customer_id", customer_id)?;
        let request =
            ApiRequest::post(member_path("invoices", &invoice.id, "/customers")?).with_body(body);
        self.client.call(request, "customer", options).await
    }

    /// Get the action the customer must take to continue the payment on
    /// the given gateway configuration
    pub async fn customer_action(
        &self,
        invoice: &Invoice,
        gateway_configuration_id: &str,
        options: Option<&Options>,
    ) -> Result<CustomerAction> {
        let suffix = format!(
            "/gateway-configurations/{}/customer-action",
            escape_segment(gateway_configuration_id)?
        );
        let request = ApiRequest::get(member_path("invoices", &invoice.id, &suffix)?);
        self.client.call(request, "customer_action", options).await
    }

    /// Get the transaction of the invoice
    pub async fn transaction(
        &self,
        invoice: &Invoice,
        options: Option<&Options>,
    ) -> Result<Transaction> {
        let request = ApiRequest::get(member_path("invoices", &invoice.id, "/transactions")?);
        self.client.call(request, "transaction", options).await
    }

    /// Void the invoice
    pub async fn void(&self, invoice: &Invoice, options: Option<&Options>) -> Result<()> {
        let request = ApiRequest::post(member_path("invoices", &invoice.id, "/void")?);
        self.client.call_ack(request, options).await
    }
}
