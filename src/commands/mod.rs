pub mod config;
pub mod create;
pub mod helpers;
pub mod presets;
pub mod show;
pub mod update;
pub mod version;
