//! Networking and data-source modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` talks to the HTTP backend (`/health`, `/test/capture`), `source`
//! supplies the digest/events/briefing lists the controller renders, and
//! `types` defines the shared wire schema.

pub mod api;
pub mod source;
pub mod types;
