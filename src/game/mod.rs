use crate::browser;
use crate::engine::{self, CanvasRenderer, Game, Size};
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use futures::future::try_join_all;
use futures::join;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::rc::Rc;
use web_sys::HtmlImageElement;

pub mod command;
pub mod config;
pub mod session;

pub use command::Command;
pub use config::GameConfig;
pub use session::{GameSession, SessionState};

/// ┌──────────────────── Starfield Shooter ────────────────────┐
/// │                                                           │
/// │   GameLoop ──initialize──► Shooter::Loading               │
/// │                               │ config.json (optional)    │
/// │                               │ ship + enemy images       │
/// │                               ▼  (loaded in parallel)     │
/// │                            Shooter::Loaded(GameSession)   │
/// │                                                           │
/// │   every frame : keys -> Command -> GameSession::handle    │
/// │                 GameSession::update / draw                │
/// └───────────────────────────────────────────────────────────┘
pub enum Shooter {
    /// Nothing to draw until every image has loaded
    Loading,

    /// Images are in, the session owns them from here on
    Loaded(GameSession<HtmlImageElement>),
}

impl Shooter {
    pub fn new() -> Self {
        Shooter::Loading
    }

    async fn load_sprite(path: &str) -> Result<Rc<HtmlImageElement>> {
        engine::load_image(path)
            .await
            .map(Rc::new)
            .with_context(|| format!("Failed to load sprite image from : {}", path))
    }
}

impl Default for Shooter {
    fn default() -> Self {
        Shooter::new()
    }
}

#[async_trait(?Send)]
impl Game for Shooter {
    async fn initialize(&self) -> Result<Box<dyn Game>> {
        match self {
            Shooter::Loading => {
                let config = GameConfig::load().await;
                // ship and enemies load side by side, total time is the
                // slowest image rather than the sum
                let (spaceship, enemies) = join!(
                    Self::load_sprite(&config.spaceship.image),
                    try_join_all(
                        config
                            .enemies
                            .iter()
                            .map(|enemy| Self::load_sprite(&enemy.image))
                    ),
                );
                let spaceship = spaceship?;
                let enemies = enemies?;
                let viewport = browser::viewport()?;

                let mut session = GameSession::new(
                    config,
                    viewport,
                    spaceship,
                    enemies,
                    StdRng::from_entropy(),
                );
                session.start();
                Ok(Box::new(Shooter::Loaded(session)))
            }
            Shooter::Loaded(_) => Err(anyhow!("Game is already initialized")),
        }
    }

    fn on_key(&mut self, key: &str) {
        if let Shooter::Loaded(session) = self {
            if let Some(command) = Command::from_key(key) {
                session.handle(command);
            }
        }
    }

    fn update(&mut self, elapsed_ms: f64, viewport: Size) {
        if let Shooter::Loaded(session) = self {
            session.update(elapsed_ms, viewport);
        }
    }

    fn draw(&mut self, renderer: &CanvasRenderer, viewport: Size) {
        if let Shooter::Loaded(session) = self {
            session.draw(renderer, viewport);
        }
    }
}
