//! Pipeline state threaded through the tutor's three stages.
//!
//! ```text
//! Received ──classify──▶ Classified ──answer──▶ Resolved
//!     └───────────────reject──────────────────────▲
//! ```

mod record;
mod state;

pub use record::StateRecord;
pub use state::{NOT_MATHEMATICAL, PipelineState, Stage};
