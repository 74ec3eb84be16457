//! Settings for the depth counters and keepers.
//!
//! Values are layered: built-in defaults, then an optional settings file,
//! then environment variables prefixed `FOSCIA_SHARED` (for example
//! `FOSCIA_SHARED_MAX_DEPTH=8`).

use serde::Deserialize;
use tracing::{debug, warn};

use crate::depth::{Depth, MAX_DEPTH};
use crate::error::Result;

pub const ENV_PREFIX: &str = "FOSCIA_SHARED";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Ceiling for [`Depth`] counters, at most [`MAX_DEPTH`].
    pub max_depth: usize,
    /// Expected number of identifiers per discriminator in a keeper.
    pub keeper_capacity: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_depth: MAX_DEPTH,
            keeper_capacity: 16,
        }
    }
}

impl Settings {
    /// Loads settings, reading `path` if it is given and exists.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let defaults = Settings::default();
        let mut builder = config::Config::builder()
            .set_default("max_depth", defaults.max_depth as i64)?
            .set_default("keeper_capacity", defaults.keeper_capacity as i64)?;
        if let Some(path) = path {
            builder = builder.add_source(config::File::with_name(path).required(false));
        }
        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX).try_parsing(true),
        );
        let mut settings: Settings = builder.build()?.try_deserialize()?;
        if settings.max_depth > MAX_DEPTH {
            warn!(requested = settings.max_depth, max = MAX_DEPTH, "max_depth clamped");
            settings.max_depth = MAX_DEPTH;
        }
        debug!(?settings, "settings loaded");
        Ok(settings)
    }
    pub fn depth(&self) -> Depth {
        Depth::new(self.max_depth)
    }
}
