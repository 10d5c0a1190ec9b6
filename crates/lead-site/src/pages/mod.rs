//! Site pages

mod lead;

pub use lead::LeadPage;
