//! Agent resources managed through the agent management API.
//!
//! - **definition**: typed agent configuration, feature entries, response format
//! - **registry**: built-in presets for `agentctl create`
//! - **manifest**: desired instructions from a declarative YAML manifest
//! - **reconcile**: merge and verification for `agentctl update`

pub mod definition;
pub mod manifest;
pub mod reconcile;
pub mod registry;

pub use definition::{AgentConfig, AgentConfigBuilder, FeatureEntry, ResponseFormat};
pub use reconcile::{DesiredState, Verification};
pub use registry::PresetRegistry;
