//! Client state owned by the view controller.
//!
//! DESIGN
//! ======
//! `mode` is the two-way past/future toggle; `toast` is the notification
//! queue. Neither touches the page: the controller renders them.

pub mod mode;
pub mod toast;
