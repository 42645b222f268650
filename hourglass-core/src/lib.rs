//! Core library for time-windowed host blocking
//!
//! Provides the block list, the daily block window, the admission decision
//! that combines them, and the parser for runtime admin commands. The
//! proxy daemon in `hourglass-proxy` is a thin HTTP shell around these
//! types.

pub mod admin;
pub mod admission;
pub mod blocklist;
pub mod error;
pub mod window;

pub use admin::{AdminAction, AdminCommand};
pub use admission::AdmissionEngine;
pub use blocklist::{parse_seed_list, BlockList};
pub use error::{AdminError, EmptyBlockListInput, TimeFormatError, WindowConfigError};
pub use window::BlockWindow;
