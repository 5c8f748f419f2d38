use crate::browser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SpriteConfig {
    pub image: String,
    pub scale: f64,
}

/// Tunables for one game, read from `config.json` when present
/// - any missing field keeps its default
/// - speeds are per millisecond, except the ship's which is per frame
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GameConfig {
    pub spaceship: SpriteConfig,
    pub enemies: Vec<SpriteConfig>,
    pub ship_speed: f64,
    pub star_count: usize,
    pub star_speed: f64,
    pub max_star_radius: f64,
    pub laser_speed: f64,
    pub fire_cost: i32,
    pub max_health: i32,
    /// Multiplied into the ship's acceleration, together with the elapsed
    /// time, every frame
    pub drag: f64,
    /// Canvas is this much smaller than the window, avoids scrollbars
    pub surface_margin: SurfaceMargin,
    pub draw_outlines: bool,
}

#[derive(Debug, Copy, Clone, PartialEq, Deserialize, Serialize)]
pub struct SurfaceMargin {
    pub width: f64,
    pub height: f64,
}

impl GameConfig {
    pub const PATH: &'static str = "config.json";

    /// Fetch `config.json`, or fall back to the defaults
    pub async fn load() -> GameConfig {
        match browser::fetch_json::<GameConfig>(Self::PATH).await {
            Ok(config) => {
                log!("Using {}", Self::PATH);
                config
            }
            Err(err) => {
                log!("No usable {} ({:#}), using defaults", Self::PATH, err);
                GameConfig::default()
            }
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            spaceship: SpriteConfig {
                image: "spaceship.png".to_string(),
                scale: 0.3,
            },
            enemies: vec![
                SpriteConfig {
                    image: "enemy1.png".to_string(),
                    scale: 0.1,
                },
                SpriteConfig {
                    image: "enemy2.png".to_string(),
                    scale: 0.3,
                },
            ],
            ship_speed: 1.0,
            star_count: 100,
            star_speed: 1.0,
            max_star_radius: 5.0,
            laser_speed: 10.0,
            fire_cost: 5,
            max_health: 100,
            drag: 0.99,
            surface_margin: SurfaceMargin {
                width: 1.0,
                height: 4.0,
            },
            draw_outlines: true,
        }
    }
}
