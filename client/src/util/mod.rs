//! Utility helpers shared across client modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/runtime concerns (time, timers) from the
//! controller so it runs the same natively and in the browser.

pub mod clock;
pub mod delay;
