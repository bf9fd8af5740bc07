// Resume Document Normalizer
// Implements: shape coercion, safe rendering, section presence, section ordering.
// Everything except handlers is pure and synchronous; no I/O, no shared state.

pub mod handlers;
pub mod normalize;
pub mod order;
pub mod presence;
pub mod render;
