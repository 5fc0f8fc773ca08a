//! Breakout entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use breakout::platform::{EndNotifier, InputState};
    use breakout::renderer::CanvasRenderer;
    use breakout::{Driver, Schedule, Settings};

    /// Shows the end message in a blocking alert, then reloads the page
    struct AlertNotifier;

    impl EndNotifier for AlertNotifier {
        fn notify(&mut self, message: &str) {
            log::info!("{message}");
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(message);
                let _ = window.location().reload();
            }
        }
    }

    /// Game instance holding all state
    struct Game {
        driver: Driver<CanvasRenderer, AlertNotifier>,
        input: InputState,
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Breakout starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let canvas: HtmlCanvasElement = document
            .query_selector("canvas")?
            .ok_or("no canvas element")?
            .dyn_into()?;
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("2d context unavailable")?
            .dyn_into()?;

        let settings = Settings::default()
            .with_playfield(canvas.width() as f32, canvas.height() as f32);
        if let Err(e) = settings.validate() {
            log::error!("Canvas too small: {e}");
            return Err(JsValue::from_str(&e.to_string()));
        }
        let seed = js_sys::Date::now() as u64;

        let game = Rc::new(RefCell::new(Game {
            driver: Driver::new(settings, seed, CanvasRenderer::new(ctx), AlertNotifier),
            input: InputState::new(),
        }));

        setup_input_handlers(&canvas, game.clone())?;
        request_animation_frame(game);

        log::info!("Breakout running!");
        Ok(())
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        // Key down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if game.borrow_mut().input.key_down(&event.key()) {
                    event.prevent_default();
                }
            });
            document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Key up
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().input.key_up(&event.key());
            });
            document.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Mouse move (relative to the canvas)
        {
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let rect = canvas_clone.get_bounding_client_rect();
                game.borrow_mut().input.pointer_moved(
                    event.client_x() as f32,
                    rect.left() as f32,
                    canvas_clone.width() as f32,
                );
            });
            document.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        let schedule = {
            let mut g = game.borrow_mut();
            let input = g.input.snapshot(time);
            g.driver.frame(&input)
        };

        if schedule == Schedule::Next {
            request_animation_frame(game);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use serde::Serialize;

    use breakout::consts::FRAME_MS;
    use breakout::platform::{InputState, LogNotifier};
    use breakout::renderer::AsciiRenderer;
    use breakout::sim::GamePhase;
    use breakout::{Driver, Schedule, Settings, Variant};

    /// Headless sessions stop here if nobody has won or lost (~10 minutes)
    const MAX_FRAMES: u64 = 36_000;

    #[derive(Debug, Serialize)]
    struct Summary {
        variant: &'static str,
        seed: u64,
        frames: u64,
        phase: GamePhase,
        score: u64,
        lives: u8,
        round: u32,
        message: Option<String>,
    }

    /// Usage: `breakout [VARIANT | SETTINGS.json]`
    pub fn run() -> breakout::Result<()> {
        let settings = match std::env::args().nth(1) {
            Some(arg) => match Variant::from_str(&arg) {
                Some(variant) => Settings::from_variant(variant),
                None => Settings::load_file(&arg)?,
            },
            None => Settings::default(),
        };
        let seed = settings.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or_default()
        });
        let variant = settings.variant.as_str();

        let mut driver = Driver::new(settings, seed, AsciiRenderer::default(), LogNotifier::default());
        let mut input = InputState::new();
        input.set_idle_mode(true);

        let mut frames = 0;
        while frames < MAX_FRAMES {
            let schedule = driver.frame(&input.snapshot(frames as f64 * FRAME_MS));
            frames += 1;
            if schedule == Schedule::Halt {
                break;
            }
        }
        if frames == MAX_FRAMES {
            log::warn!("Stopped after {MAX_FRAMES} frames without a result");
        }

        println!("{}", driver.renderer().frame());

        let state = driver.state();
        let summary = Summary {
            variant,
            seed,
            frames,
            phase: state.phase,
            score: state.score,
            lives: state.lives,
            round: state.round,
            message: driver.notifier().last_message.clone(),
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Breakout (native) starting in idle mode...");

    if let Err(e) = native::run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
