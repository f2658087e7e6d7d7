//! Batch shortening form
//!
//! All state of one form session lives in [`ShortenerForm`]:
//! - draft: the editable input rows and the actions that mutate them
//! - entry: produced short links with expiry and click accounting
//! - mode: how a submit reports invalid rows
//! - state: submit / click / tick transitions

mod draft;
mod entry;
mod mode;
mod state;

pub use draft::{DraftField, DraftRow, FormAction};
pub use entry::ShortenedEntry;
pub use mode::ValidationMode;
pub use state::{FormSettings, MAX_DRAFT_ROWS, ShortenerForm, SubmitOutcome};
