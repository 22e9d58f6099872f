//! Panel task lifecycle
//!
//! The lifecycle is explicit, finite, and strictly linear: no phase is
//! ever re-entered once left.

pub mod events;
pub mod machine;

pub use events::Event;
pub use machine::Phase;
