//! Pure computations over [`FormData`](crate::FormData).
//!
//! Nothing here can fail: malformed numeric text degrades to a value that
//! hides the corresponding preview line.

pub mod common;
pub mod preview;

pub use common::{parse_int, parse_int_or_default};
pub use preview::{
    BONUS_WEEKS, ProgramPreview, UPGRADE_DISCOUNTED_RATE, UPGRADE_OFFER_TEXT, UPGRADE_WINDOW_DAYS,
    bonus_weeks_text, has_subsequent_payments, remaining_payments_text, upgrade_offer_visible,
};
