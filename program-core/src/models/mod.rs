mod field_error;
mod form_data;
mod form_event;
mod form_field;
mod program_length;

pub use field_error::FieldError;
pub use form_data::FormData;
pub use form_event::{FieldUpdate, FormEvent, ToggleField};
pub use form_field::{FormField, InputKind};
pub use program_length::ProgramLength;
