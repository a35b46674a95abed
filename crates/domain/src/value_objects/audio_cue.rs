//! Audio cues played after a moon is announced.

use std::fmt;

/// Fanfare played for a moon, selected by the moon's type code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioCue {
    Moon,
    BigMoon,
    MultiMoon,
    Star,
    EightBitMoon,
}

impl AudioCue {
    pub const ALL: [AudioCue; 5] = [
        AudioCue::Moon,
        AudioCue::BigMoon,
        AudioCue::MultiMoon,
        AudioCue::Star,
        AudioCue::EightBitMoon,
    ];

    /// Cue played for type codes outside the known range.
    pub const DEFAULT: AudioCue = AudioCue::Moon;

    /// Pick the cue for a moon type code.
    ///
    /// Codes 1-5 map to their own cue; anything else gets [`AudioCue::DEFAULT`].
    pub fn for_moon_type(code: i64) -> AudioCue {
        match code {
            1 => AudioCue::Moon,
            2 => AudioCue::BigMoon,
            3 => AudioCue::MultiMoon,
            4 => AudioCue::Star,
            5 => AudioCue::EightBitMoon,
            _ => AudioCue::DEFAULT,
        }
    }

    /// URL path the cue is served under.
    pub fn path(&self) -> &'static str {
        match self {
            Self::Moon => "/moonget",
            Self::BigMoon => "/bigmoonget",
            Self::MultiMoon => "/multimoonget",
            Self::Star => "/starget",
            Self::EightBitMoon => "/8bitmoonget",
        }
    }

    /// Audio file backing the cue.
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Moon => "moonget.mp3",
            Self::BigMoon => "bigmoonget.mp3",
            Self::MultiMoon => "multimoonget.mp3",
            Self::Star => "starget.mp3",
            Self::EightBitMoon => "8bitmoonget.mp3",
        }
    }
}

impl fmt::Display for AudioCue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_get_their_own_cue() {
        assert_eq!(AudioCue::for_moon_type(1), AudioCue::Moon);
        assert_eq!(AudioCue::for_moon_type(2), AudioCue::BigMoon);
        assert_eq!(AudioCue::for_moon_type(3), AudioCue::MultiMoon);
        assert_eq!(AudioCue::for_moon_type(4), AudioCue::Star);
        assert_eq!(AudioCue::for_moon_type(5), AudioCue::EightBitMoon);
    }

    #[test]
    fn unmapped_codes_fall_back_to_the_type_one_cue() {
        for code in [0, 6, 99, -1, i64::MAX] {
            assert_eq!(AudioCue::for_moon_type(code), AudioCue::for_moon_type(1));
        }
    }

    #[test]
    fn every_cue_is_reachable_from_a_type_code() {
        for cue in AudioCue::ALL {
            assert!((1..=5).any(|code| AudioCue::for_moon_type(code) == cue));
        }
    }

    #[test]
    fn paths_and_files_line_up() {
        for cue in AudioCue::ALL {
            let stem = cue.path().trim_start_matches('/');
            assert_eq!(cue.file_name(), format!("{}.mp3", stem));
        }
    }
}
