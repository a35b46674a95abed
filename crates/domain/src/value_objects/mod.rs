//! Value objects - Immutable objects defined by their attributes

mod audio_cue;
mod kingdom;
mod names;

pub use audio_cue::AudioCue;
pub use kingdom::{title_case, Kingdom, DEFAULT_KINGDOM};
pub use names::MoonName;
