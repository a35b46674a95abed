//! Turning a moon into speech, a companion-app card and an audio cue link.

use moonfinder_domain::{title_case, AudioCue, Moon};
use moonfinder_shared::MoonRecord;

/// Card title for launch and random-moon responses.
pub const CARD_TITLE: &str = "Let's Find A Moon!";

/// Which card body a response carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardStyle {
    /// Spoken text plus a location line that calls out post-game moons.
    Annotated,
    /// Spoken text plus a location line without the post-game qualifier.
    Plain,
    /// Kingdom-specific title, spoken text as the body.
    KingdomSearch,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoonCard {
    pub title: String,
    pub content: String,
}

/// Everything a voice response needs to present one moon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedMoon {
    pub speech: String,
    pub cue_url: String,
    pub card: MoonCard,
}

/// The sentence spoken for a moon.
pub fn spoken_text(moon: &Moon) -> String {
    let ending = if moon.is_postgame {
        ", after you've beaten the game."
    } else {
        "."
    };
    format!(
        "Let's find a moon! {}. Try searching for this item in the {} Kingdom{}",
        moon.name, moon.kingdom, ending
    )
}

/// Full record of a moon for the data API.
pub fn render_record(moon: &Moon) -> MoonRecord {
    MoonRecord::from(moon)
}

/// Renders moons against the publicly reachable base URL.
#[derive(Debug, Clone)]
pub struct MoonRenderer {
    public_base_url: String,
}

impl MoonRenderer {
    pub fn new(public_base_url: impl Into<String>) -> Self {
        let public_base_url: String = public_base_url.into();
        Self {
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Absolute URL of the cue for a moon type. Unknown types get the default cue.
    pub fn cue_url(&self, moon_type: i64) -> String {
        format!(
            "{}{}",
            self.public_base_url,
            AudioCue::for_moon_type(moon_type).path()
        )
    }

    pub fn card(&self, moon: &Moon, style: CardStyle) -> MoonCard {
        let spoken = spoken_text(moon);
        match style {
            CardStyle::Annotated => {
                let qualifier = if moon.is_postgame { "post-game " } else { "" };
                MoonCard {
                    title: CARD_TITLE.to_string(),
                    content: format!(
                        "{}\nThis {}moon can be found in the {} Kingdom.",
                        spoken, qualifier, moon.kingdom
                    ),
                }
            }
            CardStyle::Plain => MoonCard {
                title: CARD_TITLE.to_string(),
                content: format!(
                    "{}\nThis moon can be found in the {} Kingdom.",
                    spoken, moon.kingdom
                ),
            },
            CardStyle::KingdomSearch => MoonCard {
                title: format!(
                    "Let's Find A Moon in the {} Kingdom!",
                    title_case(&moon.kingdom)
                ),
                content: spoken,
            },
        }
    }

    pub fn render(&self, moon: &Moon, style: CardStyle) -> RenderedMoon {
        RenderedMoon {
            speech: spoken_text(moon),
            cue_url: self.cue_url(moon.moon_type),
            card: self.card(moon, style),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use moonfinder_domain::{MoonId, MoonName};

    fn peek_a_boo(is_postgame: bool) -> Moon {
        Moon::new(
            MoonId::new(1).unwrap(),
            MoonName::new("Peek-A-Boo").unwrap(),
            "Cap",
            1,
            is_postgame,
        )
    }

    #[test]
    fn spoken_text_for_regular_moon() {
        assert_eq!(
            spoken_text(&peek_a_boo(false)),
            "Let's find a moon! Peek-A-Boo. Try searching for this item in the Cap Kingdom."
        );
    }

    #[test]
    fn spoken_text_for_postgame_moon() {
        assert_eq!(
            spoken_text(&peek_a_boo(true)),
            "Let's find a moon! Peek-A-Boo. Try searching for this item in the Cap Kingdom, after you've beaten the game."
        );
    }

    #[test]
    fn cue_urls_follow_moon_type() {
        let renderer = MoonRenderer::new("https://moons.example.com/");
        assert_eq!(renderer.cue_url(1), "https://moons.example.com/moonget");
        assert_eq!(renderer.cue_url(2), "https://moons.example.com/bigmoonget");
        assert_eq!(renderer.cue_url(3), "https://moons.example.com/multimoonget");
        assert_eq!(renderer.cue_url(4), "https://moons.example.com/starget");
        assert_eq!(renderer.cue_url(5), "https://moons.example.com/8bitmoonget");
    }

    #[test]
    fn unknown_moon_type_gets_default_cue() {
        let renderer = MoonRenderer::new("http://localhost:5000");
        assert_eq!(renderer.cue_url(99), renderer.cue_url(1));
        assert_eq!(renderer.cue_url(0), renderer.cue_url(1));
        assert_eq!(renderer.cue_url(-3), renderer.cue_url(1));
    }

    #[test]
    fn annotated_card_calls_out_postgame() {
        let renderer = MoonRenderer::new("http://localhost:5000");

        let card = renderer.card(&peek_a_boo(false), CardStyle::Annotated);
        assert_eq!(card.title, "Let's Find A Moon!");
        assert!(card
            .content
            .ends_with("\nThis moon can be found in the Cap Kingdom."));

        let card = renderer.card(&peek_a_boo(true), CardStyle::Annotated);
        assert!(card
            .content
            .ends_with("\nThis post-game moon can be found in the Cap Kingdom."));
    }

    #[test]
    fn plain_card_never_mentions_postgame() {
        let renderer = MoonRenderer::new("http://localhost:5000");
        let moon = peek_a_boo(true);

        let card = renderer.card(&moon, CardStyle::Plain);
        assert_eq!(
            card.content,
            format!("{}\nThis moon can be found in the Cap Kingdom.", spoken_text(&moon))
        );
    }

    #[test]
    fn kingdom_card_titles_the_kingdom() {
        let renderer = MoonRenderer::new("http://localhost:5000");
        let moon = Moon::new(
            MoonId::new(7).unwrap(),
            MoonName::new("Arrival at Rabbit Ridge!").unwrap(),
            "Dark Side",
            3,
            true,
        );

        let card = renderer.card(&moon, CardStyle::KingdomSearch);
        assert_eq!(card.title, "Let's Find A Moon in the Dark Side Kingdom!");
        assert_eq!(card.content, spoken_text(&moon));
    }

    #[test]
    fn render_bundles_speech_cue_and_card() {
        let renderer = MoonRenderer::new("https://moons.example.com");
        let rendered = renderer.render(&peek_a_boo(false), CardStyle::Plain);

        assert_eq!(rendered.speech, spoken_text(&peek_a_boo(false)));
        assert_eq!(rendered.cue_url, "https://moons.example.com/moonget");
        assert_eq!(rendered.card.title, CARD_TITLE);
    }

    #[test]
    fn record_round_trips_to_the_stored_row() {
        let moon = peek_a_boo(true);
        let record = render_record(&moon);

        assert_eq!(record.id, 1);
        assert_eq!(record.name, "Peek-A-Boo");
        assert_eq!(record.kingdom, "Cap");
        assert_eq!(record.moon_type, 1);
        assert_eq!(record.is_postgame, "True");
        assert_eq!(Moon::try_from(record).unwrap(), moon);
    }
}
