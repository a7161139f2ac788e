//! QueryFacade: composes the spatial and triage branches behind the two
//! supported workflows, plus the collaborator ports they read from.

pub mod facade;
pub mod ports;
pub mod session;

pub use facade::{MapView, QueryFacade, QueryStats};
pub use ports::{FixedLocation, LocationProvider, RecordSource};
pub use session::TriageSession;
