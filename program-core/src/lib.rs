pub mod calculations;
pub mod engine;
pub mod models;

pub use calculations::{
    BONUS_WEEKS, ProgramPreview, UPGRADE_DISCOUNTED_RATE, UPGRADE_OFFER_TEXT, UPGRADE_WINDOW_DAYS,
    parse_int, parse_int_or_default,
};
pub use engine::ProgramPreviewEngine;
pub use models::*;
