use std::time::Duration;

use serde::Serialize;

use crate::types::{Color, Viewport};

/// Fixed settings of the demo scene and loop.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppConfig {
    pub title: String,
    pub viewport: Viewport,
    pub background: Color,
    /// Speed applied by the movement keys, in viewport units per second.
    pub move_speed: f32,
    /// Minimum wall-clock time per frame. `None` runs unpaced.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame_interval: Option<Duration>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            title: "Shapes Demo".into(),
            viewport: Viewport::default(),
            background: Color::rgb(30, 30, 30),
            move_speed: 100.0,
            frame_interval: Some(Duration::from_millis(16)),
        }
    }
}

impl AppConfig {
    /// Same settings without frame pacing, for driving the loop in tests.
    pub fn unpaced() -> Self {
        AppConfig {
            frame_interval: None,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_demo_constants() {
        let config = AppConfig::default();
        assert_eq!(config.viewport, Viewport { width: 800.0, height: 600.0 });
        assert_eq!(config.background, Color::rgba(30, 30, 30, 255));
        assert_eq!(config.move_speed, 100.0);
    }

    #[test]
    fn serializes_without_pacing_when_unpaced() -> anyhow::Result<()> {
        let json = serde_json::to_value(AppConfig::unpaced())?;
        assert!(json.get("frame_interval").is_none());
        assert_eq!(json["viewport"]["width"], 800.0);
        Ok(())
    }
}
