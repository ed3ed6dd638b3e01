//! Canvas Pong entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent};

    use canvas_pong::consts::FRAME_DT;
    use canvas_pong::render::{Color, DrawSurface, SCORE_FONT, render};
    use canvas_pong::sim::{GameEvent, GameState, tick};
    use canvas_pong::{InputState, Key, Settings};

    const CANVAS_ID: &str = "pingPongCanvas";

    /// Canvas 2D context as a drawing surface
    struct CanvasSurface {
        ctx: CanvasRenderingContext2d,
    }

    impl DrawSurface for CanvasSurface {
        fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
            self.ctx.set_fill_style_str(color.as_css());
            self.ctx
                .fill_rect(x as f64, y as f64, width as f64, height as f64);
        }

        fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Color) {
            self.ctx.set_fill_style_str(color.as_css());
            self.ctx.begin_path();
            if let Err(e) = self.ctx.arc(
                cx as f64,
                cy as f64,
                radius as f64,
                0.0,
                std::f64::consts::TAU,
            ) {
                log::warn!("arc failed: {:?}", e);
                return;
            }
            self.ctx.close_path();
            self.ctx.fill();
        }

        fn fill_text(&mut self, text: &str, x: f32, y: f32, color: Color) {
            self.ctx.set_fill_style_str(color.as_css());
            self.ctx.set_font(SCORE_FONT);
            if let Err(e) = self.ctx.fill_text(text, x as f64, y as f64) {
                log::warn!("fill_text failed: {:?}", e);
            }
        }
    }

    /// Game instance holding all state
    struct Game {
        state: GameState,
        input: InputState,
        surface: CanvasSurface,
    }

    impl Game {
        /// Run one frame: step, then draw
        fn frame(&mut self) {
            let input = self.input.tick_input();
            tick(&mut self.state, &input, FRAME_DT);

            for event in &self.state.events {
                if let GameEvent::Scored { side } = event {
                    log::info!(
                        "{:?} scores ({} - {})",
                        side,
                        self.state.score.player,
                        self.state.score.ai
                    );
                }
            }

            render(&self.state, &mut self.surface);
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&format!("logger init failed: {e}").into());
        }

        log::info!("Canvas Pong starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| JsValue::from_str("no canvas"))?
            .dyn_into()?;

        let settings = Settings::default();
        canvas.set_width(settings.surface_width as u32);
        canvas.set_height(settings.surface_height as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("no 2d context"))?
            .dyn_into()?;

        log::info!(
            "Table {}x{}, ai level {}",
            settings.surface_width,
            settings.surface_height,
            settings.ai_level
        );

        let game = Rc::new(RefCell::new(Game {
            state: GameState::new(settings),
            input: InputState::default(),
            surface: CanvasSurface { ctx },
        }));

        setup_input_handlers(&window, game.clone())?;

        // Start game loop
        request_animation_frame(game);

        log::info!("Canvas Pong running!");
        Ok(())
    }

    fn setup_input_handlers(window: &web_sys::Window, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        // Key down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(key) = Key::from_dom_key(&event.key()) {
                    event.prevent_default();
                    game.borrow_mut().input.key_down(key);
                }
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Key up
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(key) = Key::from_dom_key(&event.key()) {
                    game.borrow_mut().input.key_up(key);
                }
            });
            window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            log::error!("Window gone, stopping game loop");
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
            return;
        }
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        game.borrow_mut().frame();
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = wasm_game::run() {
        log::error!("Canvas Pong failed to start: {:?}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;

    use thiserror::Error;

    use canvas_pong::consts::FRAME_DT;
    use canvas_pong::render::{DrawList, render};
    use canvas_pong::sim::{GameEvent, GameState, TickInput, tick};
    use canvas_pong::{Settings, SettingsError};

    /// One minute of play at 60 frames per second
    const DEFAULT_FRAMES: u64 = 3600;

    #[derive(Debug, Error)]
    pub enum RunError {
        #[error("invalid frame count `{0}`")]
        BadFrameCount(String),
        #[error(transparent)]
        Settings(#[from] SettingsError),
    }

    /// Headless demo: both paddles play themselves for a number of frames.
    ///
    /// Usage: `canvas-pong [FRAMES] [SETTINGS.json]`
    pub fn run(mut args: impl Iterator<Item = String>) -> Result<(), RunError> {
        let frames = match args.next() {
            Some(arg) => arg.parse::<u64>().map_err(|_| RunError::BadFrameCount(arg))?,
            None => DEFAULT_FRAMES,
        };
        let settings = match args.next().map(PathBuf::from) {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };

        log::info!("Simulating {} frames with {:?}", frames, settings);

        let mut state = GameState::new(settings);
        let input = TickInput {
            idle_mode: true,
            ..Default::default()
        };
        let mut frame = DrawList::new();

        for _ in 0..frames {
            tick(&mut state, &input, FRAME_DT);

            for event in &state.events {
                match event {
                    GameEvent::Scored { side } => log::info!(
                        "Tick {}: {:?} scores ({} - {})",
                        state.time_ticks,
                        side,
                        state.score.player,
                        state.score.ai
                    ),
                    GameEvent::PaddleHit { side, angle } => log::debug!(
                        "Tick {}: {:?} paddle hit at {:.1} deg, speed {:.2}",
                        state.time_ticks,
                        side,
                        angle.to_degrees(),
                        state.ball.vel.length()
                    ),
                    GameEvent::WallBounce => {}
                }
            }

            frame.clear();
            render(&state, &mut frame);
        }

        log::debug!("Last frame drew {} primitives", frame.commands.len());
        println!(
            "Final score after {} frames: player {} - ai {}",
            state.time_ticks, state.score.player, state.score.ai
        );
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    use std::error::Error;

    env_logger::init();
    log::info!("Canvas Pong (native) starting...");
    log::info!("Native mode runs a headless demo - run with `trunk serve` for the web version");

    match native::run(std::env::args().skip(1)) {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            let mut source = e.source();
            while let Some(cause) = source {
                log::error!("  caused by: {cause}");
                source = cause.source();
            }
            eprintln!("error: {e}");
            std::process::ExitCode::FAILURE
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
