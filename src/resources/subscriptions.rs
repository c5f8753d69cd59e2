//! Subscription operations

use super::member_path;
use crate::client::ProcessOut;
use crate::options::Options;
use crate::request::{ApiRequest, RequestBody};
use crate::types::{Customer, Subscription, Transaction};
use crate::Result;

/// Operations on subscriptions, obtained with [`ProcessOut::subscriptions`]
#[derive(Debug, Clone, Copy)]
pub struct Subscriptions<'a> {
    client: &'a ProcessOut,
}

impl<'a> Subscriptions<'a> {
    pub(crate) fn new(client: &'a ProcessOut) -> Self {
        Self { client }
    }

    /// List subscriptions
    pub async fn all(&self, options: Option<&Options>) -> Result<Vec<Subscription>> {
        let request = ApiRequest::get("/subscriptions").paginated();
        self.client.call_list(request, "subscriptions", options).await
    }

    /// Create a subscription for `subscription.customer_id`
    pub async fn create(
        &self,
        subscription: &Subscription,
        options: Option<&Options>,
    ) -> Result<Subscription> {
        let body = RequestBody::new()
            .field("customer_id", &subscription.customer_id)?
            .field("name", &subscription.name)?
            .field("amount", &subscription.amount)?
            .field("currency", &subscription.currency)?
            .field("metadata", &subscription.metadata)?
            .field("interval", &subscription.interval)?
            .field("trial_end_at", &subscription.trial_end_at)?
            .field("return_url", &subscription.return_url)?
            .field("cancel_url", &subscription.cancel_url)?;

        let request = ApiRequest::post("/subscriptions").with_body(body);
        self.client.call(request, "subscription", options).await
    }

    /// Find a subscription by its ID
    pub async fn find(
        &self,
        subscription_id: &str,
        options: Option<&Options>,
    ) -> Result<Subscription> {
        let request = ApiRequest::get(member_path("subscriptions", subscription_id, "")?);
        self.client.call(request, "subscription", options).await
    }

    /// Save the updated subscription attributes
    pub async fn save(
        &self,
        subscription: &Subscription,
        options: Option<&Options>,
    ) -> Result<Subscription> {
        let body = RequestBody::new()
            .field("name", &subscription.name)?
            .field("amount", &subscription.amount)?
            .field("interval", &subscription.interval)?
            .field("trial_end_at", &subscription.trial_end_at)?
            .field("metadata", &subscription.metadata)?;

        let request =
            ApiRequest::put(member_path("subscriptions", &subscription.id, "")?).with_body(body);
        self.client.call(request, "subscription", options).await
    }

    /// Cancel the subscription
    pub async fn cancel(
        &self,
        subscription: &Subscription,
        cancellation_reason: &str,
        options: Option<&Options>,
    ) -> Result<Subscription> {
        let body = RequestBody::new().field("cancellation_reason", cancellation_reason)?;
        let request =
            ApiRequest::delete(member_path("subscriptions", &subscription.id, "")?).with_body(body);
        self.client.call(request, "subscription", options).await
    }

    /// Get the customer owning the subscription
    pub async fn customer(
        &self,
        subscription: &Subscription,
        options: Option<&Options>,
    ) -> Result<Customer> {
        let request = ApiRequest::get(member_path("subscriptions", &subscription.id, "/customers")?);
        self.client.call(request, "customer", options).await
    }

    /// List the transactions of the subscription
    pub async fn transactions(
        &self,
        subscription: &Subscription,
        options: Option<&Options>,
    ) -> Result<Vec<Transaction>> {
        let request =
            ApiRequest::get(member_path("subscriptions", &subscription.id, "/transactions")?)
                .paginated();
        self.client.call_list(request, "transactions", options).await
    }
}
