//! Player surface startup
//!
//! Attaches the configured surface backend, falling back to the degraded
//! null surface when the embed player is unreachable. The page runs the
//! same either way; the only difference is whether video ever appears.

use std::time::Duration;

use atrium_core::surface::{EmbedSurface, NullSurface, PlayerSurface};

use crate::config::{BackendKind, PlayerConfig};

/// Attach the configured player surface
pub fn attach_surface(config: &PlayerConfig) -> Box<dyn PlayerSurface> {
    match config.backend {
        BackendKind::None => {
            log::info!("player: null surface selected by config");
            Box::new(NullSurface::new())
        }
        BackendKind::Embed => {
            let timeout = Duration::from_millis(config.connect_timeout_ms);
            match EmbedSurface::connect(&config.address, timeout) {
                Ok(surface) => Box::new(surface),
                Err(e) => {
                    eprintln!("Warning: could not reach the embed player: {}", e);
                    eprintln!("Running without video (degraded surface)");
                    eprintln!();
                    eprintln!("To enable video, start the embed player with its control");
                    eprintln!("socket on {} and restart atrium.", config.address);
                    Box::new(NullSurface::new())
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreachable_embed_falls_back_to_null() {
        let config = PlayerConfig {
            backend: BackendKind::Embed,
            // Reserved port on localhost with nothing listening
            address: "127.0.0.1:1".to_string(),
            connect_timeout_ms: 100,
        };
        let surface = attach_surface(&config);
        assert_eq!(surface.name(), "null");
    }

    #[test]
    fn test_none_backend_selects_null() {
        let config = PlayerConfig {
            backend: BackendKind::None,
            ..PlayerConfig::default()
        };
        assert_eq!(attach_surface(&config).name(), "null");
    }
}
