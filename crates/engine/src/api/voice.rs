//! Voice skill endpoint.
//!
//! Dispatches launch and intent requests to the moon use cases and answers
//! with speech, a companion-app card and audio player directives.

use std::sync::Arc;

use axum::{extract::State, Json};
use moonfinder_domain::{Moon, DEFAULT_KINGDOM};
use moonfinder_shared::{
    AudioPlayerState, Intent, VoiceRequest, VoiceRequestEnvelope, VoiceResponse,
    VoiceResponseEnvelope,
};

use super::http::ApiError;
use crate::app::App;
use crate::repositories::MoonError;
use crate::use_cases::moons::{CardStyle, MoonUseCases};

pub const MOON_INTENT: &str = "MoonIntent";
pub const KINGDOM_MOON_INTENT: &str = "KingdomMoonIntent";
pub const KINGDOM_SLOT: &str = "Kingdom";
pub const PAUSE_INTENT: &str = "AMAZON.PauseIntent";
pub const RESUME_INTENT: &str = "AMAZON.ResumeIntent";
pub const STOP_INTENT: &str = "AMAZON.StopIntent";

pub const NOTHING_FOUND: &str =
    "I couldn't find anything. Check your Alexa app to see if I got that right.";
pub const NOT_UNDERSTOOD: &str = "Sorry, I didn't catch that.";
const PAUSED: &str = "Paused the stream.";
const RESUMING: &str = "Resuming.";
const STOPPING: &str = "stopping";

/// `POST /` handler.
pub async fn handle(
    State(app): State<Arc<App>>,
    Json(envelope): Json<VoiceRequestEnvelope>,
) -> Result<Json<VoiceResponseEnvelope>, ApiError> {
    let response = respond(&app.use_cases.moons, &envelope).await?;
    Ok(Json(response.into()))
}

async fn respond(
    moons: &MoonUseCases,
    envelope: &VoiceRequestEnvelope,
) -> Result<VoiceResponse, MoonError> {
    match &envelope.request {
        VoiceRequest::Launch {} => {
            let moon = moons.selector.pick_random().await?;
            Ok(present(moons, &moon, CardStyle::Annotated))
        }
        VoiceRequest::Intent { intent } => handle_intent(moons, intent, envelope).await,
        VoiceRequest::SessionEnded {} | VoiceRequest::Unknown => Ok(VoiceResponse::empty()),
    }
}

async fn handle_intent(
    moons: &MoonUseCases,
    intent: &Intent,
    envelope: &VoiceRequestEnvelope,
) -> Result<VoiceResponse, MoonError> {
    match intent.name.as_str() {
        MOON_INTENT => {
            let moon = moons.selector.pick_random().await?;
            Ok(present(moons, &moon, CardStyle::Plain))
        }
        KINGDOM_MOON_INTENT => {
            let query = intent
                .slot_value(KINGDOM_SLOT)
                .unwrap_or(DEFAULT_KINGDOM.as_str());
            match moons.selector.pick_by_query(query).await? {
                Some(moon) => Ok(present(moons, &moon, CardStyle::KingdomSearch)),
                None => {
                    tracing::info!(query = %query, "No moon found for kingdom query");
                    Ok(VoiceResponse::speak(NOTHING_FOUND))
                }
            }
        }
        PAUSE_INTENT => Ok(VoiceResponse::speak(PAUSED).stop()),
        RESUME_INTENT => Ok(resume(envelope.audio_player())),
        STOP_INTENT => Ok(VoiceResponse::speak(STOPPING).clear_queue().stop()),
        other => {
            tracing::debug!(intent = %other, "Unhandled intent");
            Ok(VoiceResponse::speak(NOT_UNDERSTOOD))
        }
    }
}

/// Speech, card and a play directive for the moon's cue.
///
/// The stream token is the cue URL so a later resume can restart it.
fn present(moons: &MoonUseCases, moon: &Moon, style: CardStyle) -> VoiceResponse {
    let rendered = moons.renderer.render(moon, style);
    tracing::info!(
        moon_id = %moon.id,
        kingdom = %moon.kingdom,
        cue = %rendered.cue_url,
        "Presenting moon"
    );

    VoiceResponse::speak(rendered.speech)
        .with_card(rendered.card.title, rendered.card.content)
        .play(rendered.cue_url.clone(), rendered.cue_url, 0)
}

fn resume(player: Option<&AudioPlayerState>) -> VoiceResponse {
    let response = VoiceResponse::speak(RESUMING);
    let Some(player) = player else {
        return response;
    };
    match player.token.as_deref() {
        Some(token) => response.play(token, token, player.offset_in_milliseconds.unwrap_or(0)),
        None => response,
    }
}
