//! Domain entities - Core business objects with identity

mod moon;

pub use moon::{Moon, MoonSummary};
