//! Shared application state for request handlers.

use std::sync::Arc;
use tera::Tera;

use crate::config::AppConfig;
use crate::error::AppError;
use crate::templates::init_templates;

/// Shared application state, cloneable across handlers via Arc-wrapped fields.
///
/// Nothing in here is mutated after startup, so requests cannot influence
/// each other.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub tera: Arc<Tera>,
}

impl AppState {
    /// Creates a new application state from the given configuration and templates.
    pub fn new(config: AppConfig, tera: Tera) -> Self {
        Self {
            config: Arc::new(config),
            tera: Arc::new(tera),
        }
    }

    /// Builds state with the embedded templates.
    pub fn from_config(config: AppConfig) -> Result<Self, AppError> {
        Ok(Self::new(config, init_templates()?))
    }
}
