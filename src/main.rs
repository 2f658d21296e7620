//! Tiny Cove entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use glam::Vec2;
    use tiny_cove::Settings;
    use tiny_cove::audio::AudioManager;
    use tiny_cove::consts::*;
    use tiny_cove::layout::{CHECKBOX_X, CHECKBOX_SIZE, CLIPBOARD_ROW_H, CLIPBOARD_TOP};
    use tiny_cove::renderer::{HudText, RenderState, build_scene};
    use tiny_cove::sim::{Session, TickInput};

    /// Direction keys currently held
    #[derive(Default)]
    struct HeldKeys {
        up: bool,
        down: bool,
        left: bool,
        right: bool,
    }

    impl HeldKeys {
        fn direction(&self) -> Vec2 {
            let axis = |neg: bool, pos: bool| (pos as i32 - neg as i32) as f32;
            Vec2::new(axis(self.left, self.right), axis(self.up, self.down))
        }

        /// Returns false for keys that are not movement keys
        fn set(&mut self, key: &str, down: bool) -> bool {
            match key {
                "ArrowUp" | "w" | "W" => self.up = down,
                "ArrowDown" | "s" | "S" => self.down = down,
                "ArrowLeft" | "a" | "A" => self.left = down,
                "ArrowRight" | "d" | "D" => self.right = down,
                _ => return false,
            }
            true
        }
    }

    /// Game instance holding all state
    struct Game {
        session: Session,
        render_state: Option<RenderState>,
        audio: AudioManager,
        settings: Settings,
        accumulator: f32,
        last_time: f64,
        /// Simulated clock fed to the round (seconds)
        sim_time: f64,
        input: TickInput,
        held: HeldKeys,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
    }

    impl Game {
        fn new(seed: u64) -> Self {
            let settings = Settings::load();
            let mut audio = AudioManager::new();
            audio.apply_settings(&settings);
            Self {
                session: Session::new(seed, 0.0),
                render_state: None,
                audio,
                settings,
                accumulator: 0.0,
                last_time: 0.0,
                sim_time: 0.0,
                input: TickInput::default(),
                held: HeldKeys::default(),
                frame_times: [0.0; 60],
                frame_index: 0,
                fps: 0,
            }
        }

        /// Run simulation frames at a fixed 60 Hz
        fn update(&mut self, dt: f32, time: f64) {
            let dt = dt.min(0.1);
            self.accumulator += dt;

            let mut substeps = 0;
            while self.accumulator >= FRAME_DT && substeps < MAX_SUBSTEPS {
                self.sim_time += f64::from(FRAME_DT);
                self.input.movement = self.held.direction();
                let events = self.session.frame(&self.input, self.sim_time, FRAME_DT);
                self.audio.play_events(&events);
                self.accumulator -= FRAME_DT;
                substeps += 1;

                // Clear one-shot inputs after processing
                self.input.confirm = false;
                self.input.click = None;
                self.input.restart = false;
            }

            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;

            // Calculate FPS from oldest to newest frame
            let oldest_time = self.frame_times[self.frame_index];
            if oldest_time > 0.0 {
                let elapsed = time - oldest_time;
                if elapsed > 0.0 {
                    self.fps = (60000.0 / elapsed).round() as u32;
                }
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            let vertices = build_scene(&self.session.round);
            if let Some(render_state) = self.render_state.as_mut() {
                render_state.draw(&vertices);
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let hud = HudText::from_round(&self.session.round, self.sim_time);

            set_text(&document, "hud-time", hud.time.as_deref());
            set_text(&document, "hud-load", hud.load.as_deref());
            set_text(&document, "hud-carry", hud.carrying.as_deref());
            set_text(&document, "hud-banner", hud.banner);

            if let Some(el) = document.get_element_by_id("hud-prompt") {
                match &hud.prompt {
                    Some(line) => {
                        el.set_text_content(Some(&line.text));
                        let _ = el.set_attribute("class", if line.flag { "check" } else { "dim" });
                    }
                    None => el.set_text_content(None),
                }
            }

            if let Some(el) = document.get_element_by_id("hud-required") {
                let html: String = hud
                    .required
                    .iter()
                    .map(|l| {
                        let class = if l.flag { "check" } else { "" };
                        format!("<div class=\"{class}\">{}</div>", l.text)
                    })
                    .collect();
                el.set_inner_html(&html);
            }

            if let Some(el) = document.get_element_by_id("hud-clipboard") {
                let html: String = hud
                    .clipboard
                    .iter()
                    .enumerate()
                    .map(|(i, l)| {
                        let class = if l.flag { "dim" } else { "" };
                        let top = CLIPBOARD_TOP + i as f32 * CLIPBOARD_ROW_H;
                        let left = CHECKBOX_X + CHECKBOX_SIZE + 7.0;
                        format!(
                            "<div class=\"row {class}\" style=\"top:{top}px;left:{left}px\">{}</div>",
                            l.text
                        )
                    })
                    .collect();
                el.set_inner_html(&html);
            }

            if let Some(el) = document.get_element_by_id("hud-fps") {
                if self.settings.show_fps {
                    el.set_text_content(Some(&format!("{} fps", self.fps)));
                } else {
                    el.set_text_content(None);
                }
            }

            if let Some(el) = document.get_element_by_id("end-overlay") {
                match &hud.end {
                    Some(end) => {
                        let _ = el.set_attribute("class", "");
                        set_text(&document, "end-title", Some(end.title));
                        set_text(&document, "end-required", Some(&end.required));
                        set_text(&document, "end-loaded", Some(&end.loaded));
                    }
                    None => {
                        let _ = el.set_attribute("class", "hidden");
                    }
                }
            }
        }

        fn toggle_mute(&mut self) {
            self.settings.muted = !self.settings.muted;
            self.audio.apply_settings(&self.settings);
            self.settings.save();
            log::info!("Muted: {}", self.settings.muted);
        }

        fn toggle_fps(&mut self) {
            self.settings.show_fps = !self.settings.show_fps;
            self.settings.save();
        }
    }

    fn set_text(document: &Document, id: &str, text: Option<&str>) {
        if let Some(el) = document.get_element_by_id(id) {
            el.set_text_content(text);
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Tiny Cove starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Set canvas size
        let dpr = window.device_pixel_ratio();
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed)));

        log::info!("Game initialized with seed: {}", seed);

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
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height)
            .await
            .expect("Failed to create device");
        game.borrow_mut().render_state = Some(render_state);

        setup_input_handlers(&canvas, game.clone());

        if let Some(hud) = document.get_element_by_id("hud") {
            let _ = hud.set_attribute("class", "");
        }

        // Start game loop
        request_animation_frame(game);

        log::info!("Tiny Cove running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");

        // Left click - clipboard toggles
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                if event.button() != 0 {
                    return;
                }
                let mut g = game.borrow_mut();
                g.audio.resume();
                let client_w = canvas_clone.client_width() as f32;
                let client_h = canvas_clone.client_height() as f32;
                let pos = g.render_state.as_ref().and_then(|rs| {
                    rs.viewport.from_client(
                        event.offset_x() as f32,
                        event.offset_y() as f32,
                        client_w,
                        client_h,
                    )
                });
                if pos.is_some() {
                    g.input.click = pos;
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                let key = event.key();
                if g.held.set(&key, true) {
                    event.prevent_default();
                    return;
                }
                match key.as_str() {
                    " " => {
                        event.prevent_default();
                        g.audio.resume();
                        g.input.confirm = true;
                    }
                    "r" | "R" => g.input.restart = true,
                    "i" | "I" => {
                        g.input.idle_mode = !g.input.idle_mode;
                        log::info!("Idle mode: {}", g.input.idle_mode);
                    }
                    "m" | "M" => g.toggle_mute(),
                    "f" | "F" => g.toggle_fps(),
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().held.set(&event.key(), false);
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else { return };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                FRAME_DT
            };
            g.last_time = time;

            g.update(dt, time);
            g.render();
            g.update_hud();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Headless run: the autopilot plays one round on a simulated 60 Hz clock
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use tiny_cove::Settings;
    use tiny_cove::audio::AudioManager;
    use tiny_cove::consts::{FPS, FRAME_DT};
    use tiny_cove::renderer::HudText;
    use tiny_cove::sim::{Session, TickInput};

    env_logger::init();
    log::info!("Tiny Cove (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    let settings = Settings::load();
    let mut audio = AudioManager::new();
    audio.apply_settings(&settings);

    let seed = std::env::var("TINY_COVE_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });

    let mut session = Session::new(seed, 0.0);
    let input = TickInput {
        idle_mode: true,
        ..Default::default()
    };

    let mut now = 0.0;
    for _ in 0..FPS * 120 {
        now += f64::from(FRAME_DT);
        let events = session.frame(&input, now, FRAME_DT);
        audio.play_events(&events);
        if session.round.outcome().is_some() {
            break;
        }
    }

    let hud = HudText::from_round(&session.round, now);
    match hud.end {
        Some(end) => {
            println!("{}  ({:.1}s)", end.title, now);
            println!("{}", end.required);
            println!("{}", end.loaded);
        }
        None => log::warn!("Round did not finish (phase {})", session.round.phase.name()),
    }
}
