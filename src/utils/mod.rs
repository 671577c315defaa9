//! Utility modules.
//!
//! - [`fs`] - directory creation, atomic writes and unchanged-content checks

pub mod fs;
