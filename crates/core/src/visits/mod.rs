//! Visit storage boundary
//!
//! Ports only; adapters live in `rostering-infra`.

pub mod ports;

pub use ports::VisitRepository;
