//! Admin triage ordering: optional status/type filters, then a total
//! priority → recency → id ranking.

pub mod filter;
pub mod ranker;

pub use filter::TriageFilter;
pub use ranker::{compare, rank};
