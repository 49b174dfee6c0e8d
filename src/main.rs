//! Balloon Drift entry point
//!
//! On the web this wires DOM input to the session and drives the WebGPU
//! renderer from `requestAnimationFrame`. Natively it flies a seeded demo
//! session headlessly and logs how far it got.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, HtmlElement, KeyboardEvent, MouseEvent, TouchEvent};

    use balloon_drift::consts::*;
    use balloon_drift::renderer::RenderState;
    use balloon_drift::sim::{InputEvent, Session, SessionPhase, TickOutcome, tick};
    use balloon_drift::{Hud, Viewport};

    /// Game instance holding all state
    struct Game {
        session: Session,
        render_state: Option<RenderState>,
        accumulator: f32,
        last_time: f64,
        /// An animation frame is scheduled
        loop_active: bool,
    }

    impl Game {
        fn new(seed: u64, viewport: Viewport) -> Self {
            Self {
                session: Session::new(seed, viewport),
                render_state: None,
                accumulator: 0.0,
                last_time: 0.0,
                loop_active: false,
            }
        }

        /// Run simulation ticks for the elapsed frame time
        fn update(&mut self, dt: f32) {
            let dt = dt.min(0.1);
            self.accumulator += dt;

            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                self.accumulator -= SIM_DT;
                substeps += 1;
                match tick(&mut self.session) {
                    TickOutcome::Continue => {}
                    TickOutcome::Ended(_) | TickOutcome::Halted | TickOutcome::Idle => {
                        self.accumulator = 0.0;
                        break;
                    }
                }
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&self.session) {
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
            let hud = Hud::from_session(&self.session);

            if let Some(el) = document.get_element_by_id("score") {
                el.set_text_content(Some(&hud.distance_label()));
            }
            if let Some(el) = html_element(&document, "introduction") {
                let opacity = if hud.show_introduction { "1" } else { "0" };
                let _ = el.style().set_property("opacity", opacity);
            }
            if let Some(el) = html_element(&document, "restart") {
                let display = if hud.show_restart { "block" } else { "none" };
                let _ = el.style().set_property("display", display);
            }
        }

        /// Redraw without simulating
        fn redraw(&mut self) {
            self.render();
            self.update_hud();
        }

        /// Resize the canvas and session to the current window
        fn resize(&mut self, canvas: &HtmlCanvasElement) {
            let Some((viewport, width, height)) = window_size() else {
                return;
            };
            canvas.set_width(width);
            canvas.set_height(height);
            if let Some(ref mut render_state) = self.render_state {
                render_state.resize(width, height);
            }
            self.session.set_viewport(viewport);
            log::debug!("Viewport resized to {}x{}", viewport.width, viewport.height);
            self.redraw();
        }
    }

    fn html_element(document: &web_sys::Document, id: &str) -> Option<HtmlElement> {
        document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    }

    /// Logical viewport plus the canvas size in physical pixels
    fn window_size() -> Option<(Viewport, u32, u32)> {
        let window = web_sys::window()?;
        let width = window.inner_width().ok()?.as_f64()?;
        let height = window.inner_height().ok()?.as_f64()?;
        let dpr = window.device_pixel_ratio();
        let viewport = Viewport::new(width as f32, height as f32);
        Some((viewport, (width * dpr) as u32, (height * dpr) as u32))
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Balloon Drift starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("game")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let (viewport, width, height) = window_size().expect("no window size");
        canvas.set_width(width);
        canvas.set_height(height);

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed, viewport)));
        log::info!("Session initialized with seed: {}", seed);

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        match RenderState::new(surface, &adapter, width, height).await {
            Ok(render_state) => game.borrow_mut().render_state = Some(render_state),
            Err(e) => {
                log::error!("Failed to create device: {:?}", e);
                return;
            }
        }

        setup_input_handlers(&canvas, game.clone());
        setup_restart_button(game.clone());

        // First frame shows the idle scene with the introduction
        game.borrow_mut().redraw();

        log::info!("Balloon Drift ready!");
    }

    /// Feed an input event to the session and start the frame loop if it began running
    fn dispatch(game: &Rc<RefCell<Game>>, event: InputEvent) {
        let start_loop = {
            let mut g = game.borrow_mut();
            if g.session.handle_input(event).is_some() {
                g.redraw();
            }
            let start = g.session.phase == SessionPhase::Running && !g.loop_active;
            if start {
                g.loop_active = true;
                g.last_time = 0.0;
                g.accumulator = 0.0;
            }
            start
        };

        if start_loop {
            request_animation_frame(game.clone());
        }
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");

        // Mouse
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                dispatch(&game, InputEvent::HeatStart);
            });
            let _ = window
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                dispatch(&game, InputEvent::HeatEnd);
            });
            let _ = window
                .add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                dispatch(&game, InputEvent::HeatStart);
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                dispatch(&game, InputEvent::HeatEnd);
            });
            let _ = canvas
                .add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if event.key() == " " {
                    event.prevent_default();
                    dispatch(&game, InputEvent::Restart);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Resize
        {
            let canvas = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                game.borrow_mut().resize(&canvas);
            });
            let _ = window
                .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_restart_button(game: Rc<RefCell<Game>>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        if let Some(btn) = document.get_element_by_id("restart") {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                event.prevent_default();
                dispatch(&game, InputEvent::Restart);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
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
        let running = {
            let mut g = game.borrow_mut();

            // Calculate delta time
            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            g.update(dt);
            g.redraw();

            let running = g.session.phase == SessionPhase::Running;
            if !running {
                g.loop_active = false;
            }
            running
        };

        if running {
            request_animation_frame(game);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Balloon Drift (native) starting...");
    log::info!("Native mode is a headless demo - run with `trunk serve` for the web version");

    let config = native::load_config(std::env::args().nth(1));
    let seed = config.seed.unwrap_or_else(native::clock_seed);
    let summary = native::fly_demo(seed, config.viewport).summary();

    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize run summary: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::Path;
    use std::time::{SystemTime, UNIX_EPOCH};

    use balloon_drift::Config;
    use balloon_drift::config::Viewport;
    use balloon_drift::sim::{InputEvent, Session, TickOutcome, tick};

    /// Ten minutes of flight at 60 Hz
    const MAX_DEMO_TICKS: u64 = 36_000;
    /// Altitude the autopilot holds, clear of the tallest crowns
    const CRUISE_ALTITUDE: f32 = 300.0;

    pub fn load_config(path: Option<String>) -> Config {
        let Some(path) = path else {
            return Config::default();
        };
        match Config::load(Path::new(&path)) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Using default config: {}", e);
                Config::default()
            }
        }
    }

    pub fn clock_seed() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default()
    }

    /// Fly a session with a burner autopilot until it ends or the tick cap is hit
    pub fn fly_demo(seed: u64, viewport: Viewport) -> Session {
        log::info!("Demo flight with seed {}", seed);
        let mut session = Session::new(seed, viewport);
        session.handle_input(InputEvent::HeatStart);

        while session.ticks < MAX_DEMO_TICKS {
            let event = if session.balloon.altitude() < CRUISE_ALTITUDE {
                InputEvent::HeatStart
            } else {
                InputEvent::HeatEnd
            };
            session.handle_input(event);

            match tick(&mut session) {
                TickOutcome::Continue => {}
                TickOutcome::Ended(_) | TickOutcome::Halted | TickOutcome::Idle => break,
            }
        }

        session
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use balloon_drift::hud::distance_metres;
        use balloon_drift::sim::{RunSummary, SessionPhase};

        #[test]
        fn test_demo_ends_or_hits_cap() {
            let session = fly_demo(2024, Viewport::default());
            let summary = session.summary();

            assert!(summary.ticks <= MAX_DEMO_TICKS);
            match summary.end_reason {
                Some(_) => assert_eq!(session.phase, SessionPhase::Ended),
                None => {
                    assert_eq!(summary.ticks, MAX_DEMO_TICKS);
                    assert_eq!(session.phase, SessionPhase::Running);
                }
            }
            assert_eq!(summary.seed, 2024);
            assert_eq!(summary.distance_m, distance_metres(session.balloon.x));
            assert!(summary.distance_m > 0);
            assert_eq!(summary.fuel_left, session.balloon.fuel.max(0.0));
        }

        #[test]
        fn test_demo_is_deterministic() {
            let a: RunSummary = fly_demo(7, Viewport::default()).summary();
            let b: RunSummary = fly_demo(7, Viewport::default()).summary();
            assert_eq!(a, b);
        }

        #[test]
        fn test_missing_config_falls_back_to_defaults() {
            let config = load_config(Some("/definitely/not/here.json".to_string()));
            assert_eq!(config.viewport, Viewport::default());
            assert_eq!(config.seed, None);
            assert_eq!(load_config(None).viewport, Viewport::default());
        }
    }
}
