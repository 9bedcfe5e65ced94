//! Basic Micropub server example
//!
//! Accepts create requests on `/micropub` and keeps posts in memory.
//!
//! Run with: cargo run --example micropub_server
//!
//! Then:
//!
//! ```sh
//! curl -i -d h=entry -d content=hello http://127.0.0.1:3000/micropub
//! curl -i -H 'Content-Type: application/json' \
//!     -d '{"type":["h-entry"],"properties":{"content":["hello"]}}' \
//!     http://127.0.0.1:3000/micropub
//! ```

use axum::{
    extract::State,
    routing::{get, post},
    Router,
};
use micropub_mf::{
    server::{create_entry, EntryStore, MemoryStore, MicropubState},
    DecoderConfig,
};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    let state = MicropubState::with_config(MemoryStore::new(), DecoderConfig::default());

    let app = Router::new()
        .route("/micropub", post(create_entry::<MemoryStore>))
        .route("/entries", get(list_entries))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
    tracing::info!("Micropub endpoint on http://{}/micropub", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}

async fn list_entries(State(state): State<MicropubState<MemoryStore>>) -> String {
    let mut out = format!("{} entries\n", state.store.len());
    for (index, entry) in state.store.entries().iter().enumerate() {
        out.push_str(&format!("{index}: {}", entry.entry_type()));
        for (name, value) in entry.properties() {
            out.push_str(&format!(" {name}={:?}", value.text()));
        }
        out.push('\n');
    }
    out
}
