//! Integration tests for the HTTP client and stores.
//!
//! Each test starts an in-process fake of the FEX REST backend on an
//! ephemeral port, so the cookie jar, status mapping, and reply parsing run
//! over real HTTP.
//!
//! Run with:
//! ```bash
//! cargo test --test http_integration
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::sync::mpsc;

use fex_sdk::prelude::*;

const TOKEN: &str = "tok-alice";
const EMAIL: &str = "a@b.com";
const PASSWORD: &str = "hunter22";

// ── Fake backend ─────────────────────────────────────────────────────────────

#[derive(Default)]
struct Backend {
    me_calls: AtomicUsize,
    logout_calls: AtomicUsize,
    markets_fail: bool,
}

type Shared = Arc<Backend>;

fn has_session(headers: &HeaderMap) -> bool {
    headers
        .get(header::COOKIE)
        .and_then(|h| h.to_str().ok())
        .map(|c| {
            c.split(';')
                .map(str::trim)
                .any(|kv| kv == format!("cex_token={TOKEN}"))
        })
        .unwrap_or(false)
}

fn user_json(with_assets: bool) -> Value {
    let assets = if with_assets {
        json!([{"symbol": "USDC", "amount": 36.94}, {"symbol": "SOL", "amount": 2}])
    } else {
        json!([])
    };
    json!({"id": "1", "email": EMAIL, "username": "alice", "assets": assets})
}

fn with_cookie(cookie: &str, body: Value) -> Response {
    ([(header::SET_COOKIE, cookie.to_string())], Json(body)).into_response()
}

async fn me(State(backend): State<Shared>, headers: HeaderMap) -> Response {
    backend.me_calls.fetch_add(1, Ordering::SeqCst);
    if !has_session(&headers) {
        return (StatusCode::UNAUTHORIZED, "Authentication required").into_response();
    }
    Json(json!({ "user": user_json(true) })).into_response()
}

async fn login(Json(body): Json<Value>) -> Response {
    if body["email"] == EMAIL && body["password"] == PASSWORD {
        with_cookie(
            &format!("cex_token={TOKEN}; HttpOnly; SameSite=Strict; Path=/; Max-Age=86400"),
            json!({"message": "Login successful", "user": user_json(false)}),
        )
    } else {
        Json(json!({"error": "Invalid email or password"})).into_response()
    }
}

async fn register(Json(body): Json<Value>) -> Response {
    if body["email"] == EMAIL {
        return Json(json!({"error": "User with this email already exists"})).into_response();
    }
    if body["password"].as_str().map_or(true, |p| p.len() < 8) {
        return Json(json!({
            "error": "Validation failed",
            "details": {"password": ["too short"]}
        }))
        .into_response();
    }
    with_cookie(
        "cex_token=tok-new; HttpOnly; SameSite=Strict; Path=/; Max-Age=86400",
        json!({
            "message": "User registered successfully",
            "user": {"id": "2", "email": body["email"], "username": body["username"], "assets": []}
        }),
    )
}

async fn logout(State(backend): State<Shared>) -> Response {
    backend.logout_calls.fetch_add(1, Ordering::SeqCst);
    with_cookie(
        "cex_token=; HttpOnly; SameSite=Strict; Path=/; Max-Age=0",
        json!({"message": "Logged out"}),
    )
}

async fn markets(State(backend): State<Shared>) -> Response {
    if backend.markets_fail {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            "DB error while fetching markets",
        )
            .into_response();
    }
    Json(json!([
        {
            "base": "SOL", "quote": "USDC", "symbol": "SOL-USDC",
            "price_precision": 2, "quantity_precision": 3,
            "min_price": "0.01", "max_price": "100000",
            "min_order_size": "0.001", "max_order_size": "10000"
        },
        {
            "base": "BTC", "quote": "USDC", "symbol": "BTC-USDC",
            "price_precision": 1, "quantity_precision": 5,
            "min_price": 1, "max_price": 1000000,
            "min_order_size": 0.00001, "max_order_size": 100
        }
    ]))
    .into_response()
}

#[derive(Deserialize)]
struct TradesQuery {
    market: Option<String>,
    limit: Option<u32>,
}

async fn trades(Query(q): Query<TradesQuery>) -> Response {
    let market = q.market.unwrap_or_else(|| "SOL-USDC".to_string());
    let limit = q.limit.unwrap_or(100);
    let all = vec![
        json!({
            "id": "t2", "is_buyer_maker": true, "price": "150.25", "quantity": "1.5",
            "quote_quantity": "225.375", "timestamp": "2024-05-01T12:00:01", "market": market
        }),
        json!({
            "id": "t1", "is_buyer_maker": false, "price": "150.00", "quantity": "0.2",
            "quote_quantity": "30.0", "timestamp": "2024-05-01T12:00:00", "market": market
        }),
    ];
    let trades: Vec<_> = all.into_iter().take(limit as usize).collect();
    let total = trades.len();
    Json(json!({"trades": trades, "total": total, "limit_seen": limit})).into_response()
}

async fn spawn_backend(backend: Backend) -> (String, Shared) {
    let state = Arc::new(backend);
    let app = Router::new()
        .route("/api/v1/auth/me", get(me))
        .route("/api/v1/auth/login", post(login))
        .route("/api/v1/auth/register", post(register))
        .route("/api/v1/auth/logout", post(logout))
        .route("/api/v1/markets", get(markets))
        .route("/api/v1/trades", get(trades))
        .with_state(state.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}"), state)
}

fn client_for(url: &str) -> FexClient {
    FexClient::builder().base_url(url).build().unwrap()
}

// ── Sub-clients ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_me_without_cookie_is_unauthorized() {
    let (url, _) = spawn_backend(Backend::default()).await;
    let err = client_for(&url).auth().me().await.unwrap_err();
    assert!(matches!(err, SdkError::Http(HttpError::Unauthorized)), "{err:?}");
}

#[tokio::test]
async fn test_login_cookie_carries_into_me() {
    let (url, _) = spawn_backend(Backend::default()).await;
    let client = client_for(&url);

    let echoed = client.auth().login(EMAIL, PASSWORD).await.unwrap().unwrap();
    assert!(echoed.assets.is_empty());

    // A clone shares the cookie jar.
    let user = client.clone().auth().me().await.unwrap();
    assert_eq!(user.username, "alice");
    assert_eq!(user.balance("USDC"), Some("36.94".parse::<Decimal>().unwrap()));
    assert_eq!(user.balance("SOL"), Some(Decimal::from(2)));
}

#[tokio::test]
async fn test_logout_clears_cookie() {
    let (url, backend) = spawn_backend(Backend::default()).await;
    let client = client_for(&url);

    client.auth().login(EMAIL, PASSWORD).await.unwrap();
    client.auth().logout().await.unwrap();

    assert_eq!(backend.logout_calls.load(Ordering::SeqCst), 1);
    assert!(client.auth().me().await.is_err());
}

#[tokio::test]
async fn test_login_rejection_is_typed() {
    let (url, _) = spawn_backend(Backend::default()).await;
    let err = client_for(&url)
        .auth()
        .login(EMAIL, "wrong-password")
        .await
        .unwrap_err();
    assert_eq!(err.rejection(), Some(&ApiErrorKind::InvalidCredentials));
}

#[tokio::test]
async fn test_register_rejections() {
    let (url, _) = spawn_backend(Backend::default()).await;
    let client = client_for(&url);

    let taken = client.auth().register("al", EMAIL, PASSWORD).await.unwrap_err();
    assert_eq!(taken.rejection(), Some(&ApiErrorKind::EmailTaken));

    let short = client
        .auth()
        .register("bob", "bob@b.com", "short")
        .await
        .unwrap_err();
    match short {
        SdkError::Auth(AuthError::Rejected { kind, detail }) => {
            assert_eq!(kind, ApiErrorKind::Validation);
            assert!(detail.contains("password"), "{detail}");
        }
        other => panic!("unexpected: {other:?}"),
    }

    let user = client
        .auth()
        .register("bob", "bob@b.com", "long-enough")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(user.username, "bob");
}

#[tokio::test]
async fn test_markets_accept_string_and_number_decimals() {
    let (url, _) = spawn_backend(Backend::default()).await;
    let markets = client_for(&url).markets().list().await.unwrap();

    assert_eq!(markets.len(), 2);
    assert_eq!(markets[0].symbol.as_str(), "SOL-USDC");
    assert_eq!(markets[0].min_price, "0.01".parse::<Decimal>().unwrap());
    assert_eq!(markets[1].min_order_size, "0.00001".parse::<Decimal>().unwrap());
    assert!(markets[0]
        .check_order("150.25".parse().unwrap(), "1.5".parse().unwrap())
        .is_ok());
}

#[tokio::test]
async fn test_markets_server_error() {
    let (url, _) = spawn_backend(Backend {
        markets_fail: true,
        ..Default::default()
    })
    .await;
    let err = client_for(&url).markets().list().await.unwrap_err();
    assert!(matches!(
        err,
        SdkError::Http(HttpError::ServerError { status: 500, .. })
    ));
}

#[tokio::test]
async fn test_recent_trades() {
    let (url, _) = spawn_backend(Backend::default()).await;
    let client = client_for(&url);

    let trades = client.trades().recent(Some("BTC-USDC"), Some(1)).await.unwrap();
    assert_eq!(trades.len(), 1);
    assert_eq!(trades[0].id, "t2");
    assert_eq!(trades[0].market.as_str(), "BTC-USDC");
    assert_eq!(trades[0].side, Side::Sell);

    let mut history = TradeHistory::new(MarketSymbol::from("SOL-USDC"), 10);
    history.replace(client.trades().recent(None, None).await.unwrap());
    assert_eq!(history.len(), 2);
    assert_eq!(history.latest().unwrap().id, "t2");
}

// ── Stores ───────────────────────────────────────────────────────────────────

fn context_for(url: &str) -> (AppContext, mpsc::UnboundedReceiver<Route>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (AppContext::with_client(client_for(url), Arc::new(tx)), rx)
}

#[tokio::test]
async fn test_mount_signed_out_redirects_to_login() {
    let (url, backend) = spawn_backend(Backend::default()).await;
    let (ctx, mut routes) = context_for(&url);

    ctx.mount().settled().await;

    assert!(!ctx.session().is_logged_in());
    assert_eq!(ctx.session().user(), None);
    assert_eq!(routes.try_recv().ok(), Some(Route::Login));
    assert!(routes.try_recv().is_err());
    assert_eq!(backend.me_calls.load(Ordering::SeqCst), 1);
    assert_eq!(ctx.markets().markets().map(|m| m.len()), Some(2));
}

#[tokio::test]
async fn test_store_login_then_logout() {
    let (url, backend) = spawn_backend(Backend::default()).await;
    let (ctx, mut routes) = context_for(&url);
    let session = ctx.session();

    let user = session.login(EMAIL, PASSWORD).await.unwrap();
    assert_eq!(user.id, "1");
    assert!(session.is_logged_in());
    assert_eq!(session.balance("USDC"), Some("36.94".parse::<Decimal>().unwrap()));
    assert_eq!(routes.try_recv().ok(), Some(Route::Home));
    assert_eq!(backend.me_calls.load(Ordering::SeqCst), 1);

    session.logout().await;
    assert_eq!(session.snapshot(), Session::default());
    assert_eq!(routes.try_recv().ok(), Some(Route::Login));
}

#[tokio::test]
async fn test_store_rejected_login_changes_nothing() {
    let (url, backend) = spawn_backend(Backend::default()).await;
    let (ctx, mut routes) = context_for(&url);

    let err = ctx.session().login(EMAIL, "nope").await.unwrap_err();

    assert_eq!(err.rejection(), Some(&ApiErrorKind::InvalidCredentials));
    assert!(!ctx.session().is_logged_in());
    assert!(routes.try_recv().is_err());
    assert_eq!(backend.me_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_market_store_keeps_none_on_server_error() {
    let (url, _) = spawn_backend(Backend {
        markets_fail: true,
        ..Default::default()
    })
    .await;
    let (ctx, _routes) = context_for(&url);

    assert!(ctx.markets().bootstrap().await.is_err());
    assert!(!ctx.markets().is_loaded());
}
