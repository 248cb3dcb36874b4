//! Configuration and path management

pub mod paths;
pub mod settings;

pub use paths::KakeiboPaths;
pub use settings::Settings;
