// Contact links: header fields (email, phone, profiles, sites) to clickable URIs.
// Links are derived on every request and never persisted.

pub mod handlers;
pub mod links;
