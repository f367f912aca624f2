//! Enduro Dash entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, PointerEvent};

    use enduro_dash::audio::{AudioManager, SoundEffect};
    use enduro_dash::consts::*;
    use enduro_dash::input::{self, Intent};
    use enduro_dash::prefs::AudioPrefs;
    use enduro_dash::render;
    use enduro_dash::sim::{FrameClock, GameEvent, GameState, SimConfig, TickInput, tick};
    use enduro_dash::compute_lane_positions;

    /// Game instance holding all state
    struct Game {
        state: GameState,
        clock: FrameClock,
        input: TickInput,
        audio: AudioManager,
        ctx: CanvasRenderingContext2d,
    }

    impl Game {
        fn new(seed: u32, config: SimConfig, ctx: CanvasRenderingContext2d) -> Self {
            let audio = AudioManager::new(AudioPrefs::load());
            Self {
                state: GameState::new(seed, config),
                clock: FrameClock::default(),
                input: TickInput::default(),
                audio,
                ctx,
            }
        }

        /// Run simulation ticks for this frame, then fan events out.
        fn update(&mut self, now_ms: f64) {
            let ticks = self.clock.advance(now_ms);
            for _ in 0..ticks {
                let input = self.input;
                tick(&mut self.state, &input, SIM_DT);
                // Clear one-shot inputs after processing
                self.input = TickInput::default();
            }

            for event in self.state.take_events() {
                if let Some(effect) = SoundEffect::from_event(&event) {
                    self.audio.play(effect);
                }
                match event {
                    GameEvent::Hit => vibrate(100),
                    GameEvent::GameOver => self.audio.stop_engine(),
                    _ => {}
                }
            }

            // Engine drone follows the run state and the boost buff
            self.audio.update_engine_boost(self.state.engine_boosted());
            if self.state.running && !self.state.paused && !self.audio.is_engine_muted() {
                self.audio.start_engine(self.state.engine_boosted());
            }
        }

        fn render(&self) {
            render::draw(
                &self.ctx,
                &self.state,
                self.clock.interpolation(),
                self.audio.is_sfx_muted(),
                self.audio.is_engine_muted(),
            );
        }

        /// Apply a mapped input intent between ticks.
        fn apply_intent(&mut self, intent: Intent) {
            match intent {
                Intent::MoveLeft => self.input.move_left = true,
                Intent::MoveRight => self.input.move_right = true,
                Intent::Pause => self.input.pause = true,
                Intent::Restart => self.input.restart = true,
                Intent::ToggleSfx => {
                    let muted = !self.audio.is_sfx_muted();
                    self.audio.set_sfx_muted(muted);
                    self.audio.prefs().save();
                }
                Intent::ToggleEngine => {
                    let muted = !self.audio.is_engine_muted();
                    self.audio.set_engine_muted(muted);
                    self.audio.prefs().save();
                }
            }
        }
    }

    fn vibrate(millis: u32) {
        if let Some(window) = web_sys::window() {
            let _ = window.navigator().vibrate_with_duration(millis);
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Enduro Dash starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("game")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .expect("context lookup failed")
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let width = canvas.width() as f32;
        let height = canvas.height() as f32;
        let config = SimConfig {
            view_width: width,
            view_height: height,
            lanes: compute_lane_positions(width),
            ..Default::default()
        };

        let seed = js_sys::Date::now() as u32;
        log::info!("Session seed: {seed}");
        let game = Rc::new(RefCell::new(Game::new(seed, config, ctx)));

        setup_input_handlers(&canvas, game.clone());
        request_animation_frame(game);

        log::info!("Enduro Dash running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Keyboard
        {
            let game = game.clone();
            let window = web_sys::window().unwrap();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                // Browsers gate audio behind the first gesture
                g.audio.resume();
                if let Some(intent) = input::map_key(&event.key()) {
                    g.apply_intent(intent);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Pointer: mute buttons first, then tap-to-steer zones
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
                let rect = canvas_clone.get_bounding_client_rect();
                let x = event.client_x() as f32 - rect.left() as f32;
                let y = event.client_y() as f32 - rect.top() as f32;
                let w = canvas_clone.width() as f32;

                let mut g = game.borrow_mut();
                g.audio.resume();

                // SFX button (upper right, first row), engine button below it
                if x >= w - 82.0 && x <= w - 43.0 {
                    if (40.0..=60.0).contains(&y) {
                        g.apply_intent(Intent::ToggleSfx);
                        return;
                    }
                    if (55.0..=75.0).contains(&y) {
                        g.apply_intent(Intent::ToggleEngine);
                        return;
                    }
                }

                if g.state.paused || !g.state.running {
                    return;
                }
                g.apply_intent(input::map_pointer(x, w));
            });
            let _ = canvas
                .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();
            g.update(time);
            g.render();
        }
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use enduro_dash::consts::SIM_DT;
    use enduro_dash::hud::format_hud;
    use enduro_dash::sim::{GameState, SimConfig, TickInput, tick};

    env_logger::init();
    log::info!("Enduro Dash (native) starting...");
    log::info!("Native mode is a headless smoke run - serve the wasm build for the real game");

    // Drive a short scripted session to prove the core out end to end
    let mut state = GameState::new(42, SimConfig::default());
    let seconds = 30;
    for i in 0..(seconds * 60) {
        let input = TickInput {
            move_left: i % 240 == 100,
            move_right: i % 240 == 220,
            ..Default::default()
        };
        tick(&mut state, &input, SIM_DT);
        state.take_events();
    }

    println!(
        "{}",
        format_hud(
            state.score.score(),
            state.lives.lives(),
            state.level.current_phase().id,
            state.score.time(),
        )
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
