//! DNS provider implementations.

mod conoha;

pub use conoha::ConohaProvider;
