//! Classic Pong entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use classic_pong::Settings;
    use classic_pong::audio::AudioManager;
    use classic_pong::consts::*;
    use classic_pong::renderer::shapes::tessellate;
    use classic_pong::renderer::{Label, RenderState, compose};
    use classic_pong::sim::{GameState, InputTracker, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        input: InputTracker,
        settings: Settings,
        audio: AudioManager,
        render_state: Option<RenderState>,
        canvas: HtmlCanvasElement,
        /// Last HUD markup, to skip redundant DOM writes
        hud_html: String,
        announced_winner: bool,
    }

    impl Game {
        fn new(canvas: HtmlCanvasElement) -> Self {
            let settings = Settings::load();
            Self {
                state: GameState::new(),
                input: InputTracker::new(),
                audio: AudioManager::new(&settings),
                settings,
                render_state: None,
                canvas,
                hud_html: String::new(),
                announced_winner: false,
            }
        }

        /// One fixed-cadence step: simulate, play cues, draw
        fn step(&mut self) {
            let over = tick(&mut self.state, &self.input);
            let events = self.state.drain_events();
            self.audio.play_events(&events);

            if over && !self.announced_winner {
                self.announced_winner = true;
                log::info!(
                    "Final score {} - {}",
                    self.state.user.score,
                    self.state.ai.score
                );
            }

            let frame = compose(&self.state, &self.settings);
            self.render(&tessellate(&frame));
            self.update_hud(&frame.labels);
        }

        fn render(&mut self, vertices: &[classic_pong::renderer::Vertex]) {
            let clear = self.settings.palette().background;
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(vertices, clear) {
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

        /// Lay out text labels over the canvas
        fn update_hud(&mut self, labels: &[Label]) {
            let scale = self.canvas.client_width() as f32 / FIELD_WIDTH;
            let html: String = labels
                .iter()
                .map(|label| {
                    format!(
                        "<div class=\"label\" style=\"left:{:.3}%;top:{:.3}%;font-size:{:.1}px;color:{}\">{}</div>",
                        label.x / FIELD_WIDTH * 100.0,
                        label.y / FIELD_HEIGHT * 100.0,
                        label.font_px * scale,
                        label.color.css(),
                        label.text
                    )
                })
                .collect();

            if html == self.hud_html {
                return;
            }

            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            if let Some(hud) = document.get_element_by_id("hud") {
                hud.set_inner_html(&html);
                self.hud_html = html;
            }
        }

        fn key_down(&mut self, event: &KeyboardEvent) {
            let name = event.key();
            if self.input.press(&name, event.key_code()) {
                event.prevent_default();
                self.audio.resume();
                return;
            }

            match name.as_str() {
                "m" | "M" => {
                    self.settings.muted = !self.settings.muted;
                    self.audio.apply(&self.settings);
                    self.settings.save();
                    log::info!("Muted: {}", self.settings.muted);
                }
                "c" | "C" => {
                    self.settings.high_contrast = !self.settings.high_contrast;
                    self.settings.save();
                    log::info!("High contrast: {}", self.settings.high_contrast);
                }
                _ => {}
            }
        }

        fn key_up(&mut self, event: &KeyboardEvent) {
            self.input.release(&event.key(), event.key_code());
        }
    }

    pub async fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Classic Pong starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or("no canvas")?
            .dyn_into()?;

        // Backing store at device resolution, field aspect ratio
        let dpr = window.device_pixel_ratio();
        let width = (FIELD_WIDTH as f64 * dpr) as u32;
        let height = (FIELD_HEIGHT as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let game = Rc::new(RefCell::new(Game::new(canvas.clone())));

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas))
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let bounds = game.borrow().state.bounds;
        let render_state = RenderState::new(surface, &adapter, width, height, bounds)
            .await
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        game.borrow_mut().render_state = Some(render_state);

        setup_input_handlers(&window, game.clone())?;
        start_loop(&window, game)?;

        log::info!("Classic Pong running!");
        Ok(())
    }

    fn setup_input_handlers(window: &web_sys::Window, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().key_down(&event);
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().key_up(&event);
            });
            window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    /// Fixed-rate timer: one tick per firing, late ticks are simply late
    fn start_loop(window: &web_sys::Window, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let closure = Closure::<dyn FnMut()>::new(move || {
            game.borrow_mut().step();
        });
        window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            TICK_INTERVAL_MS,
        )?;
        closure.forget();
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    if let Err(e) = wasm_game::run().await {
        log::error!("Startup failed: {:?}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Classic Pong (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    headless_match();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Play one match with a scripted user that chases the ball
#[cfg(not(target_arch = "wasm32"))]
fn headless_match() {
    use classic_pong::consts::TICK_RATE;
    use classic_pong::sim::{GameEvent, GameState, InputTracker, tick};

    const MAX_TICKS: u64 = 60 * 60 * 30;
    // Dead zone keeps the scripted paddle from jittering around the ball
    const DEAD_ZONE: f32 = 12.0;

    let mut state = GameState::new();
    let mut input = InputTracker::new();
    let mut hits = 0u32;
    let mut frames = 0u64;

    while frames < MAX_TICKS {
        let gap = state.ball.pos.y - state.user.center_y();
        input.move_up = gap < -DEAD_ZONE;
        input.move_down = gap > DEAD_ZONE;

        let over = tick(&mut state, &input);
        frames += 1;
        hits += state
            .drain_events()
            .iter()
            .filter(|e| **e == GameEvent::PaddleHit)
            .count() as u32;

        if over {
            break;
        }
    }

    match state.winner() {
        Some(side) => log::info!(
            "{:?} won {} - {} after {:.1}s ({} paddle hits)",
            side,
            state.user.score,
            state.ai.score,
            frames as f32 / TICK_RATE as f32,
            hits
        ),
        None => log::warn!(
            "No winner after {} ticks ({} - {})",
            frames,
            state.user.score,
            state.ai.score
        ),
    }

    match serde_json::to_string_pretty(&state) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize final state: {}", e),
    }
}
