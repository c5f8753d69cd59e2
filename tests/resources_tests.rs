//! Customer, subscription and transaction operations against a stub API

use mockito::{Matcher, Server};
use processout::{Customer, Options, ProcessOut, Subscription};
use serde_json::json;

fn client_for(server: &Server) -> ProcessOut {
    ProcessOut::builder("proj_test", "key_test")
        .host(server.url())
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_create_customer() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("POST", "/customers")
        .match_body(Matcher::Json(json!({
            "email": "jane@example.com",
            "first_name": "Jane",
            "last_name": "Doe",
            "address1": "",
            "address2": "",
            "city": "",
            "state": "",
            "zip": "",
            "country_code": "",
            "metadata": {},
            "expand": []
        })))
        .with_status(200)
        .with_body(
            json!({
                "success": true,
                "customer": {"id": "cust_1", "email": "jane@example.com", "first_name": "Jane", "last_name": "Doe"}
            })
            .to_string(),
        )
        .create_async()
        .await;

    let customer = client_for(&server)
        .customers()
        .create(&Customer::new("jane@example.com").with_name("Jane", "Doe"), None)
        .await
        .unwrap();

    assert_eq!(customer.id, "cust_1");
    assert_eq!(customer.last_name, "Doe");
}

#[tokio::test]
async fn test_save_customer_uses_put() {
    let mut server = Server::new_async().await;
    let m = server
        .mock("PUT", "/customers/cust_1")
        .match_body(Matcher::PartialJson(json!({ "city": "Paris" })))
        .with_status(200)
        .with_body(json!({ "success": true, "customer": {"id": "cust_1", "city": "Paris"} }).to_string())
        .create_async()
        .await;

    let mut customer = Customer::new("jane@example.com");
    customer.id = "cust_1".to_string();
    customer.city = "Paris".to_string();

    let saved = client_for(&server)
        .customers()
        .save(&customer, None)
        .await
        .unwrap();

    m.assert_async().await;
    assert_eq!(saved.city, "Paris");
}

#[tokio::test]
async fn test_delete_customer() {
    let mut server = Server::new_async().await;
    let m = server
        .mock("DELETE", "/customers/cust_1")
        .match_body(Matcher::Json(json!({ "expand": [] })))
        .with_status(200)
        .with_body(json!({ "success": true }).to_string())
        .create_async()
        .await;

    let customer = Customer {
        id: "cust_1".to_string(),
        ..Customer::default()
    };
    client_for(&server)
        .customers()
        .delete(&customer, None)
        .await
        .unwrap();

    m.assert_async().await;
}

#[tokio::test]
async fn test_find_missing_customer() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/customers/cust_404")
        .with_status(404)
        .with_body(json!({ "success": false, "message": "customer not found" }).to_string())
        .create_async()
        .await;

    let error = client_for(&server)
        .customers()
        .find("cust_404", None)
        .await
        .unwrap_err();

    assert_eq!(error.api_message(), Some("customer not found"));
}

#[tokio::test]
async fn test_customer_transactions_are_paginated() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/customers/cust_1/transactions")
        .match_body(Matcher::Json(json!({
            "expand": [],
            "filter": "",
            "limit": 10,
            "end_before": "",
            "start_after": ""
        })))
        .with_status(200)
        .with_body(
            json!({
                "success": true,
                "transactions": [{"id": "tr_1"}, {"id": "tr_2"}, {"id": "tr_3"}]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let customer = Customer {
        id: "cust_1".to_string(),
        ..Customer::default()
    };
    let transactions = client_for(&server)
        .customers()
        .transactions(&customer, Some(&Options::new().with_limit(10)))
        .await
        .unwrap();

    let ids: Vec<_> = transactions.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["tr_1", "tr_2", "tr_3"]);
}

#[tokio::test]
async fn test_customer_subscriptions_empty_list() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/customers/cust_1/subscriptions")
        .with_status(200)
        .with_body(json!({ "success": true, "subscriptions": [] }).to_string())
        .create_async()
        .await;

    let customer = Customer {
        id: "cust_1".to_string(),
        ..Customer::default()
    };
    let subscriptions = client_for(&server)
        .customers()
        .subscriptions(&customer, None)
        .await
        .unwrap();

    assert!(subscriptions.is_empty());
}

#[tokio::test]
async fn test_customer_subscriptions_null_list() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/customers/cust_1/subscriptions")
        .with_status(200)
        .with_body(json!({ "success": true, "subscriptions": null }).to_string())
        .create_async()
        .await;

    let customer = Customer {
        id: "cust_1".to_string(),
        ..Customer::default()
    };
    let subscriptions = client_for(&server)
        .customers()
        .subscriptions(&customer, None)
        .await
        .unwrap();

    assert!(subscriptions.is_empty());
}

#[tokio::test]
async fn test_create_subscription() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("POST", "/subscriptions")
        .match_body(Matcher::PartialJson(json!({
            "customer_id": "cust_1",
            "name": "Gold plan",
            "amount": "9.99",
            "currency": "EUR",
            "interval": "1m",
            "trial_end_at": null
        })))
        .with_status(200)
        .with_body(
            json!({
                "success": true,
                "subscription": {
                    "id": "sub_1",
                    "customer_id": "cust_1",
                    "interval": "1m",
                    "amount": "9.99",
                    "iterate_at": "2026-11-01T00:00:00Z"
                }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let subscription = client_for(&server)
        .subscriptions()
        .create(
            &Subscription::new("cust_1", "Gold plan", "9.99", "EUR", "1m"),
            None,
        )
        .await
        .unwrap();

    assert_eq!(subscription.id, "sub_1");
    assert!(subscription.iterate_at.is_some());
    assert_eq!(subscription.amount_decimal().unwrap().to_string(), "9.99");
}

#[tokio::test]
async fn test_cancel_subscription() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("DELETE", "/subscriptions/sub_1")
        .match_body(Matcher::Json(json!({
            "cancellation_reason": "too expensive",
            "expand": []
        })))
        .with_status(200)
        .with_body(
            json!({
                "success": true,
                "subscription": {"id": "sub_1", "canceled": true, "cancellation_reason": "too expensive"}
            })
            .to_string(),
        )
        .create_async()
        .await;

    let subscription = Subscription {
        id: "sub_1".to_string(),
        ..Subscription::default()
    };
    let canceled = client_for(&server)
        .subscriptions()
        .cancel(&subscription, "too expensive", None)
        .await
        .unwrap();

    assert!(canceled.canceled);
    assert_eq!(canceled.cancellation_reason, "too expensive");
}

#[tokio::test]
async fn test_subscription_customer() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/subscriptions/sub_1/customers")
        .with_status(200)
        .with_body(json!({ "success": true, "customer": {"id": "cust_1"} }).to_string())
        .create_async()
        .await;

    let subscription = Subscription {
        id: "sub_1".to_string(),
        ..Subscription::default()
    };
    let customer = client_for(&server)
        .subscriptions()
        .customer(&subscription, None)
        .await
        .unwrap();

    assert_eq!(customer.id, "cust_1");
}

#[tokio::test]
async fn test_all_transactions() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/transactions")
        .match_body(Matcher::PartialJson(json!({ "filter": "status:completed" })))
        .with_status(200)
        .with_body(
            json!({
                "success": true,
                "transactions": [{"id": "tr_1", "status": "completed", "captured": true}]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let transactions = client_for(&server)
        .transactions()
        .all(Some(&Options::new().with_filter("status:completed")))
        .await
        .unwrap();

    assert_eq!(transactions.len(), 1);
    assert!(transactions[0].captured);
}

#[tokio::test]
async fn test_find_transaction_escapes_id() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/transactions/tr%201")
        .with_status(200)
        .with_body(json!({ "success": true, "transaction": {"id": "tr 1"} }).to_string())
        .create_async()
        .await;

    let transaction = client_for(&server)
        .transactions()
        .find("tr 1", None)
        .await
        .unwrap();

    assert_eq!(transaction.id, "tr 1");
}

#[tokio::test]
async fn test_all_customers_and_find() {
    let mut server = Server::new_async().await;
    let _list = server
        .mock("GET", "/customers")
        .match_body(Matcher::PartialJson(json!({ "limit": 0, "filter": "" })))
        .with_status(200)
        .with_body(
            json!({ "success": true, "customers": [{"id": "cust_1"}, {"id": "cust_2"}] })
                .to_string(),
        )
        .create_async()
        .await;
    let _find = server
        .mock("GET", "/customers/cust_2")
        .with_status(200)
        .with_body(
            json!({ "success": true, "customer": {"id": "cust_2", "balance": "0.00", "currency": "EUR"} })
                .to_string(),
        )
        .create_async()
        .await;

    let client = client_for(&server);
    let customers = client.customers().all(None).await.unwrap();
    assert_eq!(customers.len(), 2);

    let customer = client.customers().find(&customers[1].id, None).await.unwrap();
    assert_eq!(customer.balance, "0.00");
    assert_eq!(customer.currency, "EUR");
}

#[tokio::test]
async fn test_find_and_save_subscription() {
    let mut server = Server::new_async().await;
    let _find = server
        .mock("GET", "/subscriptions/sub_1")
        .with_status(200)
        .with_body(
            json!({
                "success": true,
                "subscription": {"id": "sub_1", "name": "Gold plan", "amount": "9.99", "interval": "1m", "active": true}
            })
            .to_string(),
        )
        .create_async()
        .await;
    let save = server
        .mock("PUT", "/subscriptions/sub_1")
        .match_body(Matcher::Json(json!({
            "name": "Gold plan",
            "amount": "14.99",
            "interval": "1m",
            "trial_end_at": null,
            "metadata": {},
            "expand": []
        })))
        .with_status(200)
        .with_body(json!({ "success": true, "subscription": {"id": "sub_1", "amount": "14.99"} }).to_string())
        .create_async()
        .await;

    let client = client_for(&server);
    let mut subscription = client.subscriptions().find("sub_1", None).await.unwrap();
    assert!(subscription.active);

    subscription.amount = "14.99".to_string();
    let saved = client.subscriptions().save(&subscription, None).await.unwrap();

    save.assert_async().await;
    assert_eq!(saved.amount, "14.99");
}

#[tokio::test]
async fn test_all_subscriptions_and_their_transactions() {
    let mut server = Server::new_async().await;
    let _list = server
        .mock("GET", "/subscriptions")
        .with_status(200)
        .with_body(json!({ "success": true, "subscriptions": [{"id": "sub_1"}] }).to_string())
        .create_async()
        .await;
    let _transactions = server
        .mock("GET", "/subscriptions/sub_1/transactions")
        .match_body(Matcher::PartialJson(json!({ "start_after": "tr_0" })))
        .with_status(200)
        .with_body(json!({ "success": true, "transactions": [{"id": "tr_1"}] }).to_string())
        .create_async()
        .await;

    let client = client_for(&server);
    let subscriptions = client.subscriptions().all(None).await.unwrap();
    let transactions = client
        .subscriptions()
        .transactions(
            &subscriptions[0],
            Some(&Options::new().with_start_after("tr_0")),
        )
        .await
        .unwrap();

    assert_eq!(transactions[0].id, "tr_1");
}
