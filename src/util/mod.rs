pub mod assets;
pub mod defaults;
pub mod format;
pub mod version;
