use super::command::Command;
use super::config::GameConfig;
use crate::engine::{AxisRect, Color, ImageSize, Renderer, Size, Vector};
use crate::sprite::{Asset, Laser, Star};
use rand::rngs::StdRng;
use std::rc::Rc;

// enemies wait off screen until something sends them in
const ENEMY_PARKING: Vector = Vector::new(-100.0, -100.0);
// HUD layout, in multiples of the font size
const FONT_DIVISOR: f64 = 30.0;
const OVERLAY_OFFSET: f64 = 100.0;
const HEALTH_BAR_LINE_WIDTH: f64 = 3.0;

/// ┌─────────┐  start   ┌─────────┐  toggle   ┌────────┐
/// │ Loading ├─────────►│ Playing │◄─────────►│ Paused │
/// └─────────┘          └──┬───▲──┘           └───┬────┘
///                 health  │   │ restart          │ restart
///                  <= 0   ▼   │                  │
///                       ┌─────┴┐◄────────────────┘
///                       │ Over │
///                       └──────┘
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SessionState {
    Loading,
    Playing,
    Paused,
    Over,
}

impl SessionState {
    fn overlay(&self) -> Option<&'static str> {
        match self {
            SessionState::Over => Some("Game Over"),
            SessionState::Paused => Some("Paused"),
            SessionState::Loading => Some("Loading"),
            SessionState::Playing => None,
        }
    }
}

/// Health bar fill, from the share of health left
/// - black once health is gone, at which point the game is over
pub fn health_bar_color(health: i32, max_health: i32) -> Color {
    if health <= 0 {
        return Color::Black;
    }
    let percent = f64::from(health) * 100.0 / f64::from(max_health.max(1));
    if percent > 50.0 {
        Color::Green
    } else if percent > 25.0 {
        Color::Yellow
    } else {
        Color::Red
    }
}

/// One run of the game
/// - owns every sprite, the counters and the state machine
/// - the ship only moves horizontally, along `spaceship_fixed_y`
pub struct GameSession<I> {
    config: GameConfig,
    state: SessionState,
    spaceship: Asset<I>,
    spaceship_fixed_y: f64,
    enemies: Vec<Asset<I>>,
    lasers: Vec<Laser>,
    stars: Vec<Star>,
    score: u32,
    health: i32,
    viewport: Size,
    rng: StdRng,
}

impl<I: ImageSize> GameSession<I> {
    /// Build a session around already loaded images, still in `Loading`
    /// - enemy images pair up with `config.enemies` for their scale
    pub fn new(
        config: GameConfig,
        viewport: Size,
        spaceship_image: Rc<I>,
        enemy_images: Vec<Rc<I>>,
        mut rng: StdRng,
    ) -> Self {
        let mut spaceship = Asset::new(spaceship_image, config.spaceship.scale);
        spaceship.outline = config.draw_outlines;
        let spaceship_fixed_y = viewport.height * 0.5;

        let enemies = enemy_images
            .into_iter()
            .zip(config.enemies.iter())
            .map(|(image, enemy)| {
                let mut asset = Asset::new(image, enemy.scale);
                asset.outline = config.draw_outlines;
                asset.position.x = viewport.width / 2.0 - asset.rect().width() / 2.0;
                asset
            })
            .collect();

        let stars = (0..config.star_count)
            .map(|_| {
                Star::random(
                    viewport,
                    config.max_star_radius,
                    config.star_speed,
                    &mut rng,
                )
            })
            .collect();

        let mut session = GameSession {
            health: config.max_health,
            config,
            state: SessionState::Loading,
            spaceship,
            spaceship_fixed_y,
            enemies,
            lasers: Vec::new(),
            stars,
            score: 0,
            viewport,
            rng,
        };
        session.reset();
        session
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn spaceship(&self) -> &Asset<I> {
        &self.spaceship
    }

    pub fn enemies(&self) -> &[Asset<I>] {
        &self.enemies
    }

    pub fn lasers(&self) -> &[Laser] {
        &self.lasers
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    /// Begin play, also used to restart from any state
    /// - score, health and lasers start over
    /// - ship goes back to the middle of its line, enemies to their parking
    /// - stars keep drifting from wherever they are
    pub fn start(&mut self) {
        match self.state {
            SessionState::Loading => log!("Loaded"),
            _ => log!("Restarting"),
        }
        self.reset();
        self.state = SessionState::Playing;
    }

    pub fn toggle_pause(&mut self) {
        self.state = match self.state {
            SessionState::Playing => {
                log!("Paused");
                SessionState::Paused
            }
            SessionState::Paused => {
                log!("Resumed");
                SessionState::Playing
            }
            other => other,
        };
    }

    /// Apply a command, returns false when the current state refuses it
    pub fn handle(&mut self, command: Command) -> bool {
        if !command.allowed_in(self.state) {
            return false;
        }
        match command {
            // no key release handling, the ship keeps drifting
            Command::MoveLeft => self.spaceship.velocity.x = -self.config.ship_speed,
            Command::MoveRight => self.spaceship.velocity.x = self.config.ship_speed,
            Command::Fire => self.fire(),
            Command::TogglePause => self.toggle_pause(),
            Command::Restart => self.start(),
        }
        true
    }

    /// Spawn a laser at the ship's top center, every shot costs health
    fn fire(&mut self) {
        let rect = self.spaceship.rect();
        self.lasers.push(Laser::new(
            rect.left() + rect.width() / 2.0,
            rect.top(),
            self.config.laser_speed,
        ));
        self.health = (self.health - self.config.fire_cost)
            .max(0)
            .min(self.config.max_health);
    }

    fn reset(&mut self) {
        let ship_width = self.spaceship.rect().width();
        self.spaceship.place(Vector::new(
            (self.viewport.width - ship_width) / 2.0,
            self.spaceship_fixed_y,
        ));
        self.lasers.clear();
        self.score = 0;
        self.health = self.config.max_health;
        for enemy in &mut self.enemies {
            enemy.place(ENEMY_PARKING);
            enemy.visible = true;
        }
    }

    /// Advance the simulation, frozen while `Paused`
    pub fn update(&mut self, elapsed_ms: f64, viewport: Size) {
        self.viewport = viewport;
        if self.state == SessionState::Paused {
            return;
        }

        self.spaceship.update(elapsed_ms);
        if self.spaceship.rect().left() < 0.0 {
            self.spaceship.position.x = 0.0;
        }
        if self.spaceship.rect().right() > viewport.width {
            self.spaceship.position.x = viewport.width - self.spaceship.rect().width();
        }
        // drag acts on acceleration, scaled by the frame time
        let drag = self.config.drag * elapsed_ms;
        self.spaceship.acceleration.x *= drag;
        self.spaceship.acceleration.y *= drag;

        for star in &mut self.stars {
            star.update(elapsed_ms, viewport, &mut self.rng);
        }

        self.lasers.retain_mut(|laser| {
            laser.update(elapsed_ms);
            !laser.is_offscreen()
        });

        for enemy in &mut self.enemies {
            enemy.update(elapsed_ms);
        }
    }

    /// Paint one frame : background, ship, stars, lasers, enemies, HUD
    pub fn draw<R: Renderer<Image = I>>(&mut self, renderer: &R, viewport: Size) {
        self.viewport = viewport;
        let margin = self.config.surface_margin;
        let surface = Size {
            width: viewport.width - margin.width,
            height: viewport.height - margin.height,
        };
        renderer.resize(surface);
        renderer.fill_rect(&AxisRect::new(Vector::default(), surface), Color::Background);

        self.spaceship.draw(renderer);
        for star in &self.stars {
            star.draw(renderer);
        }
        for laser in &self.lasers {
            laser.draw(renderer);
        }
        for enemy in &self.enemies {
            enemy.draw(renderer);
        }

        self.draw_hud(renderer, viewport);
    }

    /// Score, health, state overlay and health bar
    /// - an empty health bar ends the game
    fn draw_hud<R: Renderer + ?Sized>(&mut self, renderer: &R, viewport: Size) {
        let font_size = viewport.width / FONT_DIVISOR;
        renderer.fill_text(
            &format!("Score: {}", self.score),
            Vector::new(font_size, font_size),
            font_size,
            Color::White,
        );
        renderer.fill_text(
            &format!("Health: {}", self.health),
            Vector::new(font_size, viewport.height - font_size * 2.0),
            font_size,
            Color::White,
        );
        if let Some(overlay) = self.state.overlay() {
            renderer.fill_text(
                overlay,
                Vector::new(
                    viewport.width / 2.0 - OVERLAY_OFFSET,
                    viewport.height / 2.0,
                ),
                font_size,
                Color::White,
            );
        }

        let max_health = self.config.max_health.max(1);
        let bar = AxisRect::from_xywh(
            font_size / 2.0,
            viewport.height - font_size * 1.5,
            viewport.width / 3.0,
            font_size,
        );
        renderer.stroke_rect(&bar, Color::White, HEALTH_BAR_LINE_WIDTH);

        let color = health_bar_color(self.health, max_health);
        if self.health <= 0 && self.state != SessionState::Over {
            log!("Game Over");
            self.state = SessionState::Over;
        }
        let fill = AxisRect::from_xywh(
            bar.x(),
            bar.y(),
            bar.width() * f64::from(self.health) / f64::from(max_health),
            bar.height(),
        );
        renderer.fill_rect(&fill, color);
    }
}
