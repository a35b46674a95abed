//! Moon use cases.

mod catalog;
mod render;
mod select;

pub use catalog::{verify_catalog, CatalogReport};
pub use render::{
    render_record, spoken_text, CardStyle, MoonCard, MoonRenderer, RenderedMoon, CARD_TITLE,
};
pub use select::MoonSelector;

use std::sync::Arc;

/// Container for moon use cases.
pub struct MoonUseCases {
    pub selector: Arc<MoonSelector>,
    pub renderer: Arc<MoonRenderer>,
}

impl MoonUseCases {
    pub fn new(selector: Arc<MoonSelector>, renderer: Arc<MoonRenderer>) -> Self {
        Self { selector, renderer }
    }
}
