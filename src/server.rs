use crate::alexa::{RequestEnvelope, ResponseEnvelope};
use crate::skill::{self, Dex, Skill};

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::routing::post;
use axum::{Json, Router};
use tokio::net::TcpListener;

use std::net::SocketAddr;
use std::sync::Arc;

pub fn router<D: Dex + 'static>(skill: Skill<D>) -> Router {
    Router::new()
        .route("/dexa", post(handle::<D>).get(interaction_model))
        .with_state(Arc::new(skill))
}

pub async fn run<D: Dex + 'static>(address: SocketAddr, skill: Skill<D>) -> Result<(), anywho::Error> {
    let listener = TcpListener::bind(address).await?;

    log::info!("Listening on http://{}/dexa", listener.local_addr()?);

    axum::serve(listener, router(skill)).await?;

    Ok(())
}

async fn handle<D: Dex>(
    State(skill): State<Arc<Skill<D>>>,
    envelope: Result<Json<RequestEnvelope>, JsonRejection>,
) -> Json<ResponseEnvelope> {
    let Json(envelope) = match envelope {
        Ok(envelope) => envelope,
        Err(rejection) => {
            log::error!("Unreadable request: {rejection}");

            return Json(ResponseEnvelope::from(skill::system_failure()));
        }
    };

    log::info!(
        "{} ({})",
        envelope.request.type_,
        envelope.request.request_id.as_deref().unwrap_or("no id")
    );

    let response = skill.handle(envelope.into_request()).await;

    Json(ResponseEnvelope::from(response))
}

async fn interaction_model() -> Json<serde_json::Value> {
    Json(skill::interaction_model())
}
