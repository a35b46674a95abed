//! Voice skill request and response envelopes
//!
//! The voice platform POSTs a JSON envelope describing what the user said
//! (or what the audio player did) and expects a response envelope holding
//! speech, an optional card and audio player directives.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Response envelope version understood by the platform.
pub const RESPONSE_VERSION: &str = "1.0";

// =============================================================================
// Requests
// =============================================================================

/// Top-level request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceRequestEnvelope {
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub context: Option<VoiceContext>,
    pub request: VoiceRequest,
}

impl VoiceRequestEnvelope {
    /// Playback state reported by the device, if any.
    pub fn audio_player(&self) -> Option<&AudioPlayerState> {
        self.context.as_ref()?.audio_player.as_ref()
    }
}

/// Device context sent with every request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceContext {
    #[serde(rename = "AudioPlayer", default)]
    pub audio_player: Option<AudioPlayerState>,
}

/// Where the device's audio player currently is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioPlayerState {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub offset_in_milliseconds: Option<u64>,
    #[serde(default)]
    pub player_activity: Option<String>,
}

/// The request itself, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum VoiceRequest {
    /// The user opened the skill without asking for anything
    #[serde(rename = "LaunchRequest")]
    Launch {},
    /// The user asked for something the interaction model recognized
    #[serde(rename = "IntentRequest")]
    Intent { intent: Intent },
    /// The session closed
    #[serde(rename = "SessionEndedRequest")]
    SessionEnded {},
    /// Playback events and request types this skill has no use for
    #[serde(other)]
    Unknown,
}

/// A recognized intent with its slots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Intent {
    pub name: String,
    #[serde(default)]
    pub slots: HashMap<String, Slot>,
}

impl Intent {
    /// Value of a filled slot. Missing and blank slots are `None`.
    pub fn slot_value(&self, name: &str) -> Option<&str> {
        self.slots
            .get(name)
            .and_then(|slot| slot.value.as_deref())
            .filter(|value| !value.trim().is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    pub name: String,
    #[serde(default)]
    pub value: Option<String>,
}

// =============================================================================
// Responses
// =============================================================================

/// Top-level response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceResponseEnvelope {
    pub version: String,
    pub response: VoiceResponse,
}

impl From<VoiceResponse> for VoiceResponseEnvelope {
    fn from(response: VoiceResponse) -> Self {
        Self {
            version: RESPONSE_VERSION.to_string(),
            response,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_speech: Option<OutputSpeech>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,
    #[serde(default)]
    pub directives: Vec<Directive>,
    pub should_end_session: bool,
}

impl VoiceResponse {
    /// A response that says nothing and ends the session.
    pub fn empty() -> Self {
        Self {
            output_speech: None,
            card: None,
            directives: Vec::new(),
            should_end_session: true,
        }
    }

    /// Speak `text` and end the session.
    pub fn speak(text: impl Into<String>) -> Self {
        Self {
            output_speech: Some(OutputSpeech::PlainText { text: text.into() }),
            ..Self::empty()
        }
    }

    /// Attach a simple card.
    pub fn with_card(mut self, title: impl Into<String>, content: impl Into<String>) -> Self {
        self.card = Some(Card::Simple {
            title: title.into(),
            content: content.into(),
        });
        self
    }

    /// Replace whatever is playing with `url`, starting at `offset_ms`.
    pub fn play(
        mut self,
        url: impl Into<String>,
        token: impl Into<String>,
        offset_ms: u64,
    ) -> Self {
        self.directives.push(Directive::Play {
            play_behavior: PlayBehavior::ReplaceAll,
            audio_item: AudioItem {
                stream: AudioStream {
                    url: url.into(),
                    token: token.into(),
                    offset_in_milliseconds: offset_ms,
                },
            },
        });
        self
    }

    pub fn stop(mut self) -> Self {
        self.directives.push(Directive::Stop);
        self
    }

    /// Drop the playback queue, including the current stream.
    pub fn clear_queue(mut self) -> Self {
        self.directives.push(Directive::ClearQueue {
            clear_behavior: ClearBehavior::ClearAll,
        });
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum OutputSpeech {
    PlainText { text: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Card {
    Simple { title: String, content: String },
}

/// Audio player directives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Directive {
    #[serde(rename = "AudioPlayer.Play", rename_all = "camelCase")]
    Play {
        play_behavior: PlayBehavior,
        audio_item: AudioItem,
    },
    #[serde(rename = "AudioPlayer.Stop")]
    Stop,
    #[serde(rename = "AudioPlayer.ClearQueue", rename_all = "camelCase")]
    ClearQueue { clear_behavior: ClearBehavior },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlayBehavior {
    ReplaceAll,
    Enqueue,
    ReplaceEnqueued,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClearBehavior {
    ClearAll,
    ClearEnqueued,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioItem {
    pub stream: AudioStream,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioStream {
    pub url: String,
    pub token: String,
    pub offset_in_milliseconds: u64,
}
