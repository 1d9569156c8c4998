//! Janus browser client: past digest and future briefing view controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page toggles between two modes: "past" shows a digest of captured
//! content, "future" shows upcoming events and generated briefings. The
//! [`controller::ViewController`] owns the mode state and drives every page
//! update through a [`dom::Surface`], so the same code runs against the live
//! DOM (`hydrate` feature) and against an in-memory document in tests.
//!
//! LAYOUT
//! ======
//! - `net`: wire types, HTTP client, and the injected data source.
//! - `render`: pure projections from records to markup.
//! - `dom`: the page surface seam and its implementations.
//! - `state`: mode and toast queue state.
//! - `util`: clock and delay helpers.

pub mod config;
pub mod controller;
pub mod dom;
pub mod messages;
pub mod net;
pub mod render;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
pub mod hydrate;
