//! Block Dodge entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, HtmlElement, KeyboardEvent};

    use block_dodge::platform::direction_for_key;
    use block_dodge::renderer::RenderState;
    use block_dodge::sim::Rect;
    use block_dodge::{FrameOutcome, Game, GameConfig};

    /// Game instance plus its renderer
    struct App {
        game: Game,
        render_state: Option<RenderState>,
    }

    impl App {
        /// Render the current frame
        fn render(&mut self) {
            let snapshot = self.game.snapshot();
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&snapshot) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            if let Some(el) = document.get_element_by_id("score") {
                el.set_text_content(Some(&format!("Score: {}", self.game.score())));
            }
        }
    }

    /// Show or hide an element by id
    fn set_visible(id: &str, visible: bool) {
        let el = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        if let Some(el) = el {
            let display = if visible { "block" } else { "none" };
            let _ = el.style().set_property("display", display);
        }
    }

    fn show_game_over(score: u64) {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("final-score"))
        {
            el.set_text_content(Some(&format!("Final Score: {}", score)));
        }
        set_visible("game-over", true);
        set_visible("replayButton", true);
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Block Dodge starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let config = GameConfig::load();
        let field = Rect::new(0.0, 0.0, config.field_width, config.field_height);

        // Backing store matches the field, scaled for the display
        let dpr = window.device_pixel_ratio();
        let width = (config.field_width as f64 * dpr) as u32;
        let height = (config.field_height as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let seed = js_sys::Date::now() as u64;
        let app = Rc::new(RefCell::new(App {
            game: Game::new(config, seed),
            render_state: None,
        }));

        log::info!("Game initialized with seed: {}", seed);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        match RenderState::new(surface, &adapter, width, height, field).await {
            Ok(render_state) => app.borrow_mut().render_state = Some(render_state),
            Err(e) => log::error!("Failed to create device: {}", e),
        }

        set_visible("replayButton", false);
        set_visible("game-over", false);

        setup_input_handlers(app.clone());
        setup_play_button(app.clone());
        setup_replay_button(app);

        log::info!("Block Dodge ready");
    }

    fn setup_input_handlers(app: Rc<RefCell<App>>) {
        let window = web_sys::window().expect("no window");

        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(direction) = direction_for_key(&event.key()) {
                    event.prevent_default();
                    app.borrow_mut().game.on_key_down(direction);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(direction) = direction_for_key(&event.key()) {
                    app.borrow_mut().game.on_key_up(direction);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_play_button(app: Rc<RefCell<App>>) {
        let document = web_sys::window().and_then(|w| w.document());
        let Some(btn) = document.and_then(|d| d.get_element_by_id("playButton")) else {
            log::warn!("No play button found");
            return;
        };

        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
            let schedule = app.borrow_mut().game.start();
            if schedule {
                set_visible("playButton", false);
                set_visible("gameCanvas", true);
                request_animation_frame(app.clone());
            }
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_replay_button(app: Rc<RefCell<App>>) {
        let document = web_sys::window().and_then(|w| w.document());
        let Some(btn) = document.and_then(|d| d.get_element_by_id("replayButton")) else {
            log::warn!("No replay button found");
            return;
        };

        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
            let schedule = app.borrow_mut().game.reset();
            set_visible("replayButton", false);
            set_visible("game-over", false);
            set_visible("gameCanvas", true);
            if schedule {
                request_animation_frame(app.clone());
            }
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(app);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>) {
        let outcome = {
            let mut a = app.borrow_mut();
            let outcome = a.game.frame();
            a.render();
            a.update_hud();
            outcome
        };

        match outcome {
            FrameOutcome::Continue => request_animation_frame(app),
            FrameOutcome::GameOver { score } => show_game_over(score),
            FrameOutcome::Halted => {}
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(target_arch = "wasm32")]
fn main() {}

/// Frames the headless run may take before giving up
#[cfg(not(target_arch = "wasm32"))]
const MAX_HEADLESS_FRAMES: u64 = 100_000;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use block_dodge::sim::Direction;
    use block_dodge::{FrameOutcome, Game, GameConfig};

    env_logger::init();
    log::info!("Block Dodge (native) starting...");
    log::info!("Native mode runs headless - run with `trunk serve` for the web version");

    let config = GameConfig::load();
    let mut game = Game::new(config, 0x5eed);
    game.start();

    // Sweep left and right across the field
    let mut frames = 0u64;
    let outcome = loop {
        if frames % 120 == 0 {
            game.on_key_down(Direction::Left);
        } else if frames % 120 == 60 {
            game.on_key_down(Direction::Right);
        }
        frames += 1;
        match game.frame() {
            FrameOutcome::Continue if frames < MAX_HEADLESS_FRAMES => {}
            other => break other,
        }
    };

    match outcome {
        FrameOutcome::GameOver { score } => {
            log::info!("Game over after {} frames, final score {}", frames, score);
            println!("Final Score: {}", score);
        }
        _ => {
            log::info!("Stopped after {} frames, score {}", frames, game.score());
            println!("Score: {}", game.score());
        }
    }
}
