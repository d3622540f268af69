//! Domain types for the transit feed.
//!
//! These are the records the parser produces. Identifiers are validated at
//! construction time, so code that receives a `StopId` can trust it is six
//! digits and carries its group code.

mod line;
mod mode;
mod station;
mod stop_id;

pub use line::{StopRef, StopSequence, TransportLine, VariantKey};
pub use mode::TransitMode;
pub use station::{Station, StationGroup};
pub use stop_id::{GROUP_CODE_LEN, InvalidStopId, STOP_ID_LEN, StopId};
