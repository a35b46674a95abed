//! Moonfinder Shared - Wire types for the Engine's two consumers
//!
//! - `responses` - JSON data API envelope and record DTOs
//! - `voice` - Voice skill request and response envelopes
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde
//! 2. **No business logic** - Pure data types and serialization
//! 3. **No domain IDs** - DTOs use raw integers and strings

pub mod responses;
pub mod voice;

pub use responses::{DataEnvelope, MoonBrief, MoonRecord};
pub use voice::{
    AudioItem, AudioPlayerState, AudioStream, Card, ClearBehavior, Directive, Intent,
    OutputSpeech, PlayBehavior, Slot, VoiceContext, VoiceRequest, VoiceRequestEnvelope,
    VoiceResponse, VoiceResponseEnvelope,
};
