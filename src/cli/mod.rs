//! CLI output formatting
//!
//! Usage text and the available-profile listing printed around a sync.

pub mod display;

pub use display::print_usage;
pub use display::render_profile_list;
pub use display::render_usage;
