//! Customer operations

use super::member_path;
use crate::client::ProcessOut;
use crate::options::Options;
use crate::request::{ApiRequest, RequestBody};
use crate::types::{Customer, Subscription, Transaction};
use crate::Result;

/// Operations on customers, obtained with [`ProcessOut::customers`]
#[derive(Debug, Clone, Copy)]
pub struct Customers<'a> {
    client: &'a ProcessOut,
}

impl<'a> Customers<'a> {
    pub(crate) fn new(client: &'a ProcessOut) -> Self {
        Self { client }
    }

    /// List customers
    pub async fn all(&self, options: Option<&Options>) -> Result<Vec<Customer>> {
        let request = ApiRequest::get("/customers").paginated();
        self.client.call_list(request, "customers", options).await
    }

    /// Create a new customer
    pub async fn create(&self, customer: &Customer, options: Option<&Options>) -> Result<Customer> {
        let request = ApiRequest::post("/customers").with_body(Self::body(customer)?);
        self.client.call(request, "customer", options).await
    }

    /// Find a customer by its ID
    pub async fn find(&self, customer_id: &str, options: Option<&Options>) -> Result<Customer> {
        let request = ApiRequest::get(member_path("customers", customer_id, "")?);
        self.client.call(request, "customer", options).await
    }

    /// Save the updated customer attributes
    pub async fn save(&self, customer: &Customer, options: Option<&Options>) -> Result<Customer> {
        let request = ApiRequest::put(member_path("customers", &customer.id, "")?)
            .with_body(Self::body(customer)?);
        self.client.call(request, "customer", options).await
    }

    /// Delete the customer
    pub async fn delete(&self, customer: &Customer, options: Option<&Options>) -> Result<()> {
        let request = ApiRequest::delete(member_path("customers", &customer.id, "")?);
        self.client.call_ack(request, options).await
    }

    /// List the subscriptions belonging to the customer
    pub async fn subscriptions(
        &self,
        customer: &Customer,
        options: Option<&Options>,
    ) -> Result<Vec<Subscription>> {
        let request =
            ApiRequest::get(member_path("customers", &customer.id, "/subscriptions")?).paginated();
        self.client.call_list(request, "subscriptions", options).await
    }

    /// List the transactions belonging to the customer
    pub async fn transactions(
        &self,
        customer: &Customer,
        options: Option<&Options>,
    ) -> Result<Vec<Transaction>> {
        let request =
            ApiRequest::get(member_path("customers", &customer.id, "/transactions")?).paginated();
        self.client.call_list(request, "transactions", options).await
    }

    fn body(customer: &Customer) -> Result<RequestBody> {
        RequestBody::new()
            .field("email", &customer.email)?
            .field("first_name", &customer.first_name)?
            .field("last_name", &customer.last_name)?
            .field("address1", &customer.address1)?
            .field("address2", &customer.address2)?
            .field("city", &customer.city)?
            .field("state", &customer.state)?
            .field("zip", &customer.zip)?
            .field("country_code", &customer.country_code)?
            .field("metadata", &customer.metadata)
    }
}
