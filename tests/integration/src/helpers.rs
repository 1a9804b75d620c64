//! Test helpers for integration tests
//!
//! [`TestBot`] wires the usecases, dispatcher, listener and webhook app onto
//! an [`InMemoryStore`]. [`pg_context`] does the same against a live
//! database when `TEST_DATABASE_URL` is set.

use std::sync::Arc;

use anyhow::Result;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde::Serialize;
use serde_json::Value;
use tower::ServiceExt;

use linkrepo_bot::{create_app, BotState, Dispatcher, InboundMessage, RepositoryListener};
use linkrepo_db::{create_pool, run_migrations, DatabaseConfig};
use linkrepo_service::ServiceContext;

use crate::fixtures::{chat_id, InMemoryStore, RecordingChannel};

/// Default trigger word
pub const TRIGGER: &str = "!repo";

/// Build a service context over the in-memory store
pub fn memory_context(store: &InMemoryStore) -> ServiceContext {
    ServiceContext::new(
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        Arc::new(store.clone()),
    )
}

/// Bot wired onto an in-memory store
pub struct TestBot {
    pub store: InMemoryStore,
    pub ctx: ServiceContext,
    pub dispatcher: Dispatcher,
    pub listener: RepositoryListener,
    pub channel: Arc<RecordingChannel>,
}

impl TestBot {
    pub fn new() -> Self {
        let store = InMemoryStore::new();
        let ctx = memory_context(&store);
        let dispatcher = Dispatcher::new(Arc::new(ctx.clone()), TRIGGER);
        let listener = RepositoryListener::new(dispatcher.clone());

        Self {
            store,
            ctx,
            dispatcher,
            listener,
            channel: Arc::new(RecordingChannel::new()),
        }
    }

    /// Run a message body through the dispatcher as `phone_number`
    pub async fn say(&self, phone_number: &str, body: &str) -> String {
        self.dispatcher.dispatch(phone_number, body).await
    }

    /// Register `phone_number` and return it
    pub async fn registered(&self, phone_number: &str) -> String {
        let reply = self.say(phone_number, "!repo register").await;
        assert_eq!(reply, "successfully registered!");
        phone_number.to_string()
    }

    /// Deliver a direct chat message through the listener
    pub async fn listen(&self, phone_number: &str, body: &str) -> Option<String> {
        let message = InboundMessage::new(chat_id(phone_number), body);
        self.listener.listen(self.channel.as_ref(), &message).await
    }

    /// Webhook application sharing this bot's store and channel
    pub fn app(&self) -> Router {
        let state = BotState::new(self.listener.clone(), self.channel.clone());
        create_app(state)
    }
}

impl Default for TestBot {
    fn default() -> Self {
        Self::new()
    }
}

/// Response captured from a oneshot request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

/// Send a JSON POST through the router without binding a socket
pub async fn post_json<T: Serialize>(app: Router, path: &str, body: &T) -> Result<TestResponse> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(body)?))?;

    send(app, request).await
}

/// Send a GET through the router without binding a socket
pub async fn get(app: Router, path: &str) -> Result<TestResponse> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(path)
        .body(Body::empty())?;

    send(app, request).await
}

async fn send(app: Router, request: Request<Body>) -> Result<TestResponse> {
    let response = app.oneshot(request).await?;
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await?;

    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };

    Ok(TestResponse { status, body })
}

/// Connection string of the live test database, if configured
pub fn test_database_url() -> Option<String> {
    dotenvy::dotenv().ok();

    match std::env::var("TEST_DATABASE_URL") {
        Ok(url) if !url.is_empty() => Some(url),
        _ => {
            eprintln!("Skipping test: TEST_DATABASE_URL not set");
            None
        }
    }
}

/// Service context over a migrated live database
pub async fn pg_context(url: String) -> Result<ServiceContext> {
    let config = DatabaseConfig {
        url,
        max_connections: 4,
        ..Default::default()
    };
    let pool = create_pool(&config).await?;
    run_migrations(&pool).await?;

    Ok(ServiceContext::postgres(pool))
}
