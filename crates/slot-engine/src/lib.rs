//! # slot-engine
//!
//! Timezone-aware bookable slot computation for service hosts.
//!
//! A host (expert, therapist) publishes a weekly policy: an IANA timezone, a
//! daily work window in local wall-clock time, and the weekdays they work.
//! Given a calendar date and the host's busy intervals, the engine returns the
//! fixed-length slots that are still free, as absolute UTC instants. Viewers in
//! any other zone render those instants locally.
//!
//! Everything here is a pure function of its inputs: no storage, no clock, no
//! shared state.
//!
//! ## Modules
//!
//! - [`slots`] — The slot walk: date + policy + busy intervals → free slots
//! - [`policy`] — Host working-hour policies and their string parsing
//! - [`interval`] — Busy intervals, candidate slots, half-open overlap
//! - [`dst`] — Wall-clock → instant resolution across DST gaps and folds
//! - [`query`] — The JSON request/response shape shared by CLI and WASM callers
//! - [`viewer`] — Render slots in a viewer's timezone
//! - [`error`] — Error types

pub mod dst;
pub mod error;
pub mod interval;
pub mod policy;
pub mod query;
pub mod slots;
pub mod viewer;

pub use error::SlotError;
pub use interval::{BusyInterval, CandidateSlot};
pub use policy::{AvailabilityPolicy, WorkDays};
pub use query::{run_query, run_query_json, SlotDto, SlotQuery};
pub use slots::{compute_slots, compute_slots_on, compute_slots_range, DEFAULT_SLOT_MINUTES};
pub use viewer::{localize_slots, LocalizedSlot};
