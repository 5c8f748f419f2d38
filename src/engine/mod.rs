use crate::browser;
use anyhow::{anyhow, Error, Result};
// wasm is single threaded, so Rc<RefCell> rather than Arc<Mutex>
use async_trait::async_trait;
use futures::channel::oneshot::channel;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{
    // unchecked_ref casts the closure to a js Function
    // - we built the closure ourselves, so the expected type is known
    JsCast,
    JsValue,
};
use web_sys::HtmlImageElement;

pub mod geometry;
pub mod input;
pub mod renderer;

pub use geometry::{AxisRect, Size, Vector};
pub use renderer::{CanvasRenderer, Color, ImageSize, PathSegment, Renderer, SavedTransform};

/// ┌──────────────────────── Frame ─────────────────────────┐
/// │  requestAnimationFrame(perf)                           │
/// │    ├─► elapsed = perf - last_frame                     │
/// │    ├─► drain key queue     -> Game::on_key             │
/// │    ├─► read viewport                                   │
/// │    ├─► Game::update(elapsed, viewport)                 │
/// │    ├─► Game::draw(renderer, viewport)                  │
/// │    └─► requestAnimationFrame(self)                     │
/// └────────────────────────────────────────────────────────┘
#[async_trait(?Send)]
pub trait Game {
    async fn initialize(&self) -> Result<Box<dyn Game>>;
    fn on_key(&mut self, key: &str);
    fn update(&mut self, elapsed_ms: f64, viewport: Size);
    fn draw(&mut self, renderer: &CanvasRenderer, viewport: Size);
}

pub struct GameLoop {
    last_frame: f64,
}

type SharedLoopClosure = Rc<RefCell<Option<browser::LoopClosure>>>;

impl GameLoop {
    pub async fn start(game: impl Game + 'static) -> Result<()> {
        let mut keys = input::prepare_input()?;
        let mut game = game.initialize().await?;
        let mut game_loop = GameLoop {
            last_frame: browser::now()?,
        };
        let renderer = CanvasRenderer::new()?;
        let f: SharedLoopClosure = Rc::new(RefCell::new(None));
        let g = f.clone();
        *g.borrow_mut() = Some(browser::create_raf_closure(move |perf: f64| {
            let elapsed_ms = game_loop.tick(perf);
            for key in input::drain(&mut keys) {
                game.on_key(&key);
            }
            match browser::viewport() {
                Ok(viewport) => {
                    game.update(elapsed_ms, viewport);
                    game.draw(&renderer, viewport);
                }
                Err(err) => error!("[GameLoop] skipping frame : {:#?}", err),
            }
            if let Some(closure) = f.borrow().as_ref() {
                if let Err(err) = browser::request_animation_frame(closure) {
                    error!("[GameLoop] loop stopped : {:#?}", err);
                }
            }
        }));

        browser::request_animation_frame(
            g.borrow()
                .as_ref()
                .ok_or_else(|| anyhow!("GameLoop: Loop is None"))?,
        )?;

        Ok(())
    }

    /// Milliseconds since the previous frame
    /// - timestamps are only ~monotonic, a step backwards counts as zero
    fn tick(&mut self, now: f64) -> f64 {
        let elapsed = (now - self.last_frame).max(0.0);
        self.last_frame = now;
        elapsed
    }
}

/// Asynchronously load an image from a given source path
/// # Arguments
/// * `source` - string slice to path/url
/// # Returns
/// * `Ok(HtmlImageElement)` - on load success
/// * `Err` - on load fail
pub async fn load_image(source: &str) -> Result<HtmlImageElement> {
    log!("Loading {}", source);
    let image = browser::new_image()?;
    let (tx, rx) = channel::<Result<(), Error>>();
    let success_tx = Rc::new(RefCell::new(Some(tx)));
    let error_tx = success_tx.clone();

    let success_callback = browser::closure_once(move || {
        if let Some(tx) = success_tx.borrow_mut().take() {
            let _ = tx.send(Ok(()));
        }
    });

    let source_name = source.to_string();
    let error_callback = browser::closure_once(move |err: JsValue| {
        if let Some(tx) = error_tx.borrow_mut().take() {
            let _ = tx.send(Err(anyhow!(
                "[engine::load_image] Error loading image {}: {:#?}",
                source_name,
                err
            )));
        }
    });

    image.set_onload(Some(success_callback.as_ref().unchecked_ref()));
    image.set_onerror(Some(error_callback.as_ref().unchecked_ref()));
    image.set_src(source);

    // keep callbacks alive until the image loads or errors
    success_callback.forget();
    error_callback.forget();

    // Result<Result<(), Error>, oneshot::Canceled>
    // - first ? : the channel itself
    // - second ? : the load outcome
    rx.await??;

    Ok(image)
}
