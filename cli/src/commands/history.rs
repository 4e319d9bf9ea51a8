//! Browser history navigation commands
//!
//! Commands for navigating session history:
//! - back: Go back in history
//! - forward: Go forward in history
//! - list: Show history with the current entry marked
//!
//! back/forward at either end of the history are silent no-ops.

pub mod back;
pub mod forward;
pub mod list;
