//! Food Ninja entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{EventTarget, HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent};

    use food_ninja::assets::{AssetManifest, scaled_tile_width};
    use food_ninja::platform::{EventQueue, FrameTimer, SpawnClock, client_to_screen};
    use food_ninja::renderer::canvas::{CanvasPainter, ImageSet};
    use food_ninja::sim::InputEvent;
    use food_ninja::{Game, SettingToggle, Settings, Tuning};

    /// Game instance holding all state
    struct App {
        game: Game,
        painter: CanvasPainter,
        queue: EventQueue,
        spawn_clock: SpawnClock,
        timer: FrameTimer,
        canvas: HtmlCanvasElement,
    }

    impl App {
        /// Map a client-space position onto the logical screen
        fn to_screen(&self, client_x: f64, client_y: f64) -> Vec2 {
            let rect = self.canvas.get_bounding_client_rect();
            let tuning = &self.game.state.tuning;
            client_to_screen(
                Vec2::new(client_x as f32, client_y as f32),
                Vec2::new(rect.left() as f32, rect.top() as f32),
                Vec2::new(rect.width() as f32, rect.height() as f32),
                Vec2::new(tuning.screen_width, tuning.screen_height),
            )
        }

        /// Run one frame; returns false once the game has quit
        fn frame(&mut self, time: f64) -> bool {
            let (dt, elapsed_ms) = self.timer.tick(time);
            if self.game.state.is_playing() {
                let spawns = self.spawn_clock.advance(elapsed_ms);
                self.queue.push_spawns(spawns);
            }

            let events = self.queue.drain();
            let out = self.game.step(&events, dt);
            if out.restarted {
                self.spawn_clock.reset();
            }

            if let Err(e) = self.painter.paint(&out.frame) {
                log::warn!("Render error: {:?}", e);
            }
            self.game.is_running()
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Food Ninja starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let settings = Settings::load();
        let manifest = AssetManifest::default();
        let images = match ImageSet::load(&manifest).await {
            Ok(images) => images,
            Err(e) => {
                log::error!("Asset loading failed: {}", e);
                return;
            }
        };

        let (bg_w, bg_h) = images.background_size();
        let mut tuning = Tuning::default();
        match scaled_tile_width(bg_w, bg_h, tuning.screen_height) {
            Ok(w) => tuning = tuning.with_tile_width(w.max(tuning.screen_width)),
            Err(e) => {
                log::error!("{}", e);
                return;
            }
        }
        if let Err(e) = tuning.validate() {
            log::error!("Invalid tuning: {}", e);
            return;
        }

        canvas.set_width(tuning.screen_width as u32);
        canvas.set_height(tuning.screen_height as u32);

        let painter = match CanvasPainter::new(&canvas, images) {
            Ok(p) => p,
            Err(e) => {
                log::error!("Canvas setup failed: {:?}", e);
                return;
            }
        };

        let seed = js_sys::Date::now() as u64;
        let spawn_interval = tuning.spawn_interval_ms;
        let app = Rc::new(RefCell::new(App {
            game: Game::new(seed, tuning, settings),
            painter,
            queue: EventQueue::new(),
            spawn_clock: SpawnClock::new(spawn_interval),
            timer: FrameTimer::new(),
            canvas: canvas.clone(),
        }));

        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(&canvas, app.clone());
        request_animation_frame(app);

        log::info!("Food Ninja running!");
    }

    fn listen_mouse(target: &EventTarget, name: &str, handler: impl FnMut(MouseEvent) + 'static) {
        let closure = Closure::<dyn FnMut(MouseEvent)>::new(handler);
        let _ = target.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn listen_touch(target: &EventTarget, name: &str, handler: impl FnMut(TouchEvent) + 'static) {
        let closure = Closure::<dyn FnMut(TouchEvent)>::new(handler);
        let _ = target.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// First changed touch, in client coordinates
    fn touch_point(event: &TouchEvent) -> Option<(f64, f64)> {
        event
            .changed_touches()
            .get(0)
            .map(|t| (t.client_x() as f64, t.client_y() as f64))
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();

        {
            let app = app.clone();
            listen_mouse(canvas, "mousedown", move |e: MouseEvent| {
                let mut a = app.borrow_mut();
                let p = a.to_screen(e.client_x() as f64, e.client_y() as f64);
                a.queue.push(InputEvent::PointerDown(p));
            });
        }
        {
            let app = app.clone();
            listen_mouse(canvas, "mousemove", move |e: MouseEvent| {
                let mut a = app.borrow_mut();
                let p = a.to_screen(e.client_x() as f64, e.client_y() as f64);
                // Bit 0 is the primary button
                a.queue.push_move(p, e.buttons() & 1 != 0);
            });
        }
        // On the window so a drag released off the canvas still ends
        {
            let app = app.clone();
            listen_mouse(&window, "mouseup", move |_e: MouseEvent| {
                app.borrow_mut().queue.release();
            });
        }
        {
            let app = app.clone();
            listen_touch(canvas, "touchstart", move |e: TouchEvent| {
                e.prevent_default();
                if let Some((x, y)) = touch_point(&e) {
                    let mut a = app.borrow_mut();
                    let p = a.to_screen(x, y);
                    a.queue.push(InputEvent::PointerDown(p));
                }
            });
        }
        {
            let app = app.clone();
            listen_touch(canvas, "touchmove", move |e: TouchEvent| {
                e.prevent_default();
                if let Some((x, y)) = touch_point(&e) {
                    let mut a = app.borrow_mut();
                    let p = a.to_screen(x, y);
                    a.queue.push_move(p, true);
                }
            });
        }
        for name in ["touchend", "touchcancel"] {
            let app = app.clone();
            listen_touch(canvas, name, move |_e: TouchEvent| {
                app.borrow_mut().queue.release();
            });
        }

        // Keyboard: presentation toggles
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(which) = SettingToggle::from_key(&event.key()) {
                    app.borrow_mut().game.toggle_setting(which).save();
                }
            });
            let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>, time: f64) {
        let running = app.borrow_mut().frame(time);
        if running {
            request_animation_frame(app);
        } else {
            log::info!("Food Ninja stopped");
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

/// Virtual seconds the native demo plays for
#[cfg(not(target_arch = "wasm32"))]
const DEMO_SECONDS: u32 = 120;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use food_ninja::consts::{FRAME_MS, FRAMES_PER_SECOND};
    use food_ninja::platform::{EventQueue, SpawnClock};
    use food_ninja::sim::Autopilot;
    use food_ninja::{Game, Settings, Tuning};

    env_logger::init();
    log::info!("Food Ninja (native) starting...");
    log::info!("Native mode runs a headless autopilot session - run with `trunk serve` for the web version");

    let seed = std::env::var("FOOD_NINJA_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(0x5eed);

    let tuning = Tuning::default();
    if let Err(e) = tuning.validate() {
        log::error!("Invalid tuning: {}", e);
        std::process::exit(1);
    }

    let mut game = Game::new(seed, tuning.clone(), Settings::load());
    let mut clock = SpawnClock::new(tuning.spawn_interval_ms);
    let mut queue = EventQueue::new();
    let mut bot = Autopilot::default();

    let total_frames = DEMO_SECONDS * FRAMES_PER_SECOND as u32;
    let mut sliced = 0usize;
    let mut missed = 0u32;
    for frame in 0..total_frames {
        if game.state.is_playing() {
            queue.push_spawns(clock.advance(FRAME_MS));
        }
        for event in bot.events(&game.state, 1.0) {
            queue.push(event);
        }

        let out = game.step(&queue.drain(), 1.0);
        sliced += out.outcome.sliced.len();
        missed += out.outcome.missed;

        if frame % (10 * FRAMES_PER_SECOND as u32) == 0 {
            log::info!(
                "t={:>3}s score={} lives={} on-screen={} speed={:.1}",
                frame / FRAMES_PER_SECOND as u32,
                game.state.score,
                game.state.lives,
                game.state.items.len(),
                game.state.fall_speed()
            );
        }
        if !game.is_running() || !game.state.is_playing() {
            break;
        }
    }

    log::info!(
        "Session over: score={} lives={} sliced={} missed={}",
        game.state.score,
        game.state.lives,
        sliced,
        missed
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
