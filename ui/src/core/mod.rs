pub mod format;
pub mod profile;
pub mod stats;
