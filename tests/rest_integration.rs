use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use rust_decimal::Decimal;
use wiremock::matchers::{body_string, body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use bitstamp_api_client::auth::{NonceProvider, StaticCredentials, sign};
use bitstamp_api_client::error::BitstampError;
use bitstamp_api_client::rest::private::{
    BitcoinWithdrawalRequest, RippleWithdrawalRequest, UserTransactionsRequest,
};
use bitstamp_api_client::rest::public::Ticker;
use bitstamp_api_client::rest::{BitstampClient, BitstampRestClient};
use bitstamp_api_client::types::Side;

/// Hands out 1001, 1002, ... so request bodies are predictable.
struct CountingNonce(AtomicU64);

impl NonceProvider for CountingNonce {
    fn next_nonce(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }
}

fn build_client(server: &MockServer) -> BitstampRestClient {
    let credentials = Arc::new(StaticCredentials::new("test_key", "test_secret", "123456").unwrap());
    BitstampRestClient::builder()
        .base_url(server.uri())
        .credentials(credentials)
        .nonce_provider(Arc::new(CountingNonce(AtomicU64::new(1000))))
        .build()
        .unwrap()
}

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn signed_suffix(nonce: &str) -> String {
    let signature = sign(nonce, "123456", "test_key", "test_secret");
    format!("nonce={nonce}&key=test_key&signature={signature}")
}

fn ticker_json() -> serde_json::Value {
    serde_json::json!({
        "last": "100.00",
        "high": "110.00",
        "low": "90.00",
        "volume": "5.0",
        "bid": "99.50",
        "ask": "100.50"
    })
}

#[tokio::test]
async fn test_get_info() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "btc_balance": "1.5",
        "usd_balance": "10",
        "btc_available": "1.0",
        "usd_available": "10",
        "btc_reserved": "0.5",
        "usd_reserved": "0",
        "fee": "0.25"
    });

    Mock::given(method("POST"))
        .and(path("/balance/"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string(signed_suffix("1001")))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let info = client.get_info().await.unwrap();
    let info = info.data().unwrap();

    assert_eq!(info.login, "N/A");
    assert_eq!(info.trade_fee, dec("0.25"));
    assert_eq!(info.wallets["BTC"].balance, dec("1.5"));
    assert_eq!(info.wallets["USD"].balance, dec("10"));
}

#[tokio::test]
async fn test_get_info_exchange_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/balance/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "error": "Invalid signature" })),
        )
        .mount(&server)
        .await;

    let client = build_client(&server);
    let info = client.get_info().await.unwrap();

    assert_eq!(
        info.error(),
        Some(&serde_json::Value::String("Invalid signature".to_string()))
    );
}

#[tokio::test]
async fn test_place_order_fetches_ticker_for_price() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ticker/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ticker_json()))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/buy/"))
        .and(body_string_contains("amount=0.5&price=99.50&nonce=1001"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 98765,
            "datetime": "2024-01-01 00:00:00",
            "type": 0,
            "price": "99.50",
            "amount": "0.5"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let placed = client
        .place_order(Side::Bid, dec("0.5"), None, None)
        .await
        .unwrap();

    assert_eq!(placed.data(), Some(&serde_json::json!(98765)));

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].url.path(), "/ticker/");
    assert_eq!(requests[1].url.path(), "/buy/");
}

#[tokio::test]
async fn test_place_order_uses_cached_ticker() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/sell/"))
        .and(body_string_contains("amount=2&price=100.50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "id": 7 })))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let ticker: Ticker = serde_json::from_value(ticker_json()).unwrap();
    let placed = client
        .order_sell(dec("2"), None, Some(&ticker))
        .await
        .unwrap();

    assert!(placed.is_success());
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_place_order_explicit_price_wins() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/buy/"))
        .and(body_string_contains("amount=1&price=95"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "id": 1 })))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let ticker: Ticker = serde_json::from_value(ticker_json()).unwrap();
    let placed = client
        .order_buy(dec("1"), Some(dec("95")), Some(&ticker))
        .await
        .unwrap();

    assert!(placed.is_success());
}

#[tokio::test]
async fn test_place_order_ticker_error_skips_post() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ticker/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "error": "maintenance" })),
        )
        .mount(&server)
        .await;

    let client = build_client(&server);
    let placed = client
        .place_order(Side::Ask, dec("1"), None, None)
        .await
        .unwrap();

    assert_eq!(placed.error(), Some(&serde_json::json!("maintenance")));

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.path(), "/ticker/");
}

#[tokio::test]
async fn test_place_order_rejected() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/buy/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "error": { "__all__": ["You need 100.00 USD to open that order."] }
        })))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let placed = client
        .place_order(Side::Bid, dec("1"), Some(dec("100")), None)
        .await
        .unwrap();

    assert_eq!(
        placed.error(),
        Some(&serde_json::json!({ "__all__": ["You need 100.00 USD to open that order."] }))
    );
}

#[tokio::test]
async fn test_place_order_non_positive_amount() {
    let server = MockServer::start().await;
    let client = build_client(&server);

    let err = client
        .place_order(Side::Bid, Decimal::ZERO, Some(dec("100")), None)
        .await
        .unwrap_err();

    assert!(matches!(err, BitstampError::Config(_)));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_cancel_order() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/cancel_order/"))
        .and(body_string(format!("id=42&{}", signed_suffix("1001"))))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!(true)))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let cancelled = client.cancel_order("42").await.unwrap();

    assert_eq!(cancelled.data().unwrap().oid, "42");
}

#[tokio::test]
async fn test_cancel_order_empty_id() {
    let server = MockServer::start().await;
    let client = build_client(&server);

    let err = client.cancel_order("").await.unwrap_err();

    assert!(matches!(err, BitstampError::Config(_)));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_cancel_order_exchange_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/cancel_order/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "error": "Order not found" })),
        )
        .mount(&server)
        .await;

    let client = build_client(&server);
    let cancelled = client.cancel_order("42").await.unwrap();

    assert_eq!(cancelled.error(), Some(&serde_json::json!("Order not found")));
}

#[tokio::test]
async fn test_nonce_increases_per_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/open_orders/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(2)
        .mount(&server)
        .await;

    let client = build_client(&server);
    client.get_open_orders().await.unwrap();
    client.get_open_orders().await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let bodies: Vec<String> = requests
        .iter()
        .map(|r| String::from_utf8(r.body.clone()).unwrap())
        .collect();
    assert_eq!(bodies[0], signed_suffix("1001"));
    assert_eq!(bodies[1], signed_suffix("1002"));
}

#[tokio::test]
async fn test_caller_auth_fields_are_overridden() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/user_transactions/"))
        .and(body_string(format!("offset=5&{}", signed_suffix("1001"))))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let params = [
        ("nonce", "1"),
        ("offset", "5"),
        ("key", "forged"),
        ("signature", "forged"),
    ];
    client
        .query("user_transactions", &params, "POST")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_user_transactions_default_params() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/user_transactions/"))
        .and(body_string(format!(
            "offset=0&limit=100&sort=desc&{}",
            signed_suffix("1001")
        )))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let transactions = client
        .get_user_transactions(&UserTransactionsRequest::default())
        .await
        .unwrap();

    assert_eq!(transactions, serde_json::json!([]));
}

#[tokio::test]
async fn test_bitcoin_withdrawal() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/bitcoin_withdrawal/"))
        .and(body_string_contains("amount=0.01&address=1BitcoinEaterAddressDontSendf59kuE"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!(true)))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let request = BitcoinWithdrawalRequest::new(dec("0.01"), "1BitcoinEaterAddressDontSendf59kuE");
    let raw = client.bitcoin_withdrawal(&request).await.unwrap();

    assert_eq!(raw, serde_json::json!(true));
}

#[tokio::test]
async fn test_withdrawals_validate_before_io() {
    let server = MockServer::start().await;
    let client = build_client(&server);

    let err = client
        .bitcoin_withdrawal(&BitcoinWithdrawalRequest::new(dec("0.01"), ""))
        .await
        .unwrap_err();
    assert!(matches!(err, BitstampError::Config(_)));

    let err = client
        .ripple_withdrawal(&RippleWithdrawalRequest::new(Decimal::ZERO, "rAddr", "USD"))
        .await
        .unwrap_err();
    assert!(matches!(err, BitstampError::Config(_)));

    let err = client
        .ripple_withdrawal(&RippleWithdrawalRequest::new(dec("1"), "rAddr", ""))
        .await
        .unwrap_err();
    assert!(matches!(err, BitstampError::Config(_)));

    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_ripple_withdrawal_posts_to_withdrawal_endpoint() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ripple_withdrawal/"))
        .and(body_string_contains("amount=25&address=rAddr&currency=USD"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!(true)))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let request = RippleWithdrawalRequest::new(dec("25"), "rAddr", "USD");
    client.ripple_withdrawal(&request).await.unwrap();
}

#[tokio::test]
async fn test_raw_accessor_paths() {
    let server = MockServer::start().await;

    for endpoint in [
        "/balance/",
        "/open_orders/",
        "/withdrawal_requests/",
        "/bitcoin_deposit_address/",
        "/unconfirmed_btc/",
        "/ripple_address/",
    ] {
        Mock::given(method("POST"))
            .and(path(endpoint))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "path": endpoint })),
            )
            .expect(1)
            .mount(&server)
            .await;
    }

    let client = build_client(&server);

    assert_eq!(client.get_balance().await.unwrap()["path"], "/balance/");
    assert_eq!(client.get_open_orders().await.unwrap()["path"], "/open_orders/");
    assert_eq!(
        client.get_withdrawal_requests().await.unwrap()["path"],
        "/withdrawal_requests/"
    );
    assert_eq!(
        client.get_bitcoin_deposit_address().await.unwrap()["path"],
        "/bitcoin_deposit_address/"
    );
    assert_eq!(
        client.get_unconfirmed_deposits().await.unwrap()["path"],
        "/unconfirmed_btc/"
    );
    assert_eq!(
        client.get_ripple_address().await.unwrap()["path"],
        "/ripple_address/"
    );
}

#[tokio::test]
async fn test_get_orders_normalized() {
    let server = MockServer::start().await;
    let orders = serde_json::json!([
        { "id": 1, "datetime": "2024-01-01 00:00:00", "type": 0, "price": "99.00", "amount": "1.0" }
    ]);

    Mock::given(method("POST"))
        .and(path("/open_orders/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(orders.clone()))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let envelope = BitstampClient::get_orders(&client).await.unwrap();

    assert_eq!(envelope.data(), Some(&orders));
}

#[tokio::test]
async fn test_private_call_without_credentials() {
    let server = MockServer::start().await;
    let client = BitstampRestClient::builder()
        .base_url(server.uri())
        .build()
        .unwrap();

    let err = client.get_balance().await.unwrap_err();

    assert!(matches!(err, BitstampError::MissingCredentials));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_unsupported_method() {
    let server = MockServer::start().await;
    let client = build_client(&server);

    let err = client
        .query("balance", &[("a", "1")], "PUT")
        .await
        .unwrap_err();

    assert!(matches!(err, BitstampError::UnsupportedMethod(_)));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_order_quote_not_implemented() {
    let server = MockServer::start().await;
    let client = build_client(&server);

    let err = client.order_quote(Side::Bid, dec("1")).unwrap_err();

    assert!(matches!(err, BitstampError::NotImplemented(_)));
}
