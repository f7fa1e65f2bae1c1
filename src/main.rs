//! Typefall entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlButtonElement, HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use typefall::game::GameController;
    use typefall::highscore::LocalStore;
    use typefall::page;
    use typefall::renderer::{CanvasSurface, DrawSurface};
    use typefall::sim::{GamePhase, Key};

    /// Game instance plus its drawing surface
    struct App {
        controller: GameController,
        surface: CanvasSurface,
    }

    impl App {
        fn frame(&mut self) {
            self.controller.frame(&mut self.surface);
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("failed to init logger");

        log::info!("typefall starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        page::dom::init(&document);

        // The game refuses to start without its canvas and controls
        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .ok_or_else(|| JsValue::from_str("missing #gameCanvas"))?
            .dyn_into()
            .map_err(|_| JsValue::from_str("#gameCanvas is not a canvas"))?;
        let surface = CanvasSurface::new(&canvas)?;

        let seed = js_sys::Date::now() as u64;
        let controller = GameController::new(seed, surface.size(), Box::new(LocalStore));
        log::info!("game initialized with seed {}", seed);

        let app = Rc::new(RefCell::new(App {
            controller,
            surface,
        }));

        setup_controls(&document, app.clone())?;
        setup_keyboard(app.clone());
        update_hud(&document, &app.borrow());

        // Start the loop; ticking is gated on the phase, so the banner
        // phases just keep painting
        request_animation_frame(app);

        log::info!("typefall running!");
        Ok(())
    }

    fn button(document: &Document, id: &str) -> Result<HtmlButtonElement, JsValue> {
        document
            .get_element_by_id(id)
            .ok_or_else(|| JsValue::from_str(&format!("missing #{id}")))?
            .dyn_into::<HtmlButtonElement>()
            .map_err(|_| JsValue::from_str(&format!("#{id} is not a button")))
    }

    fn setup_controls(document: &Document, app: Rc<RefCell<App>>) -> Result<(), JsValue> {
        let start_btn = button(document, "startBtn")?;
        let pause_btn = button(document, "pauseBtn")?;

        {
            let app = app.clone();
            let document = document.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                app.borrow_mut().controller.start();
                update_hud(&document, &app.borrow());
            });
            start_btn
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        {
            let document = document.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                app.borrow_mut().controller.toggle_pause();
                update_hud(&document, &app.borrow());
            });
            pause_btn
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    /// Keyboard source: single letters and Backspace are consumed while a
    /// run is active, everything else keeps its default handling
    fn setup_keyboard(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            if app.borrow().controller.phase() != GamePhase::Running {
                return;
            }
            let Some(key) = Key::parse(&event.key()) else {
                return;
            };
            event.prevent_default();
            app.borrow_mut().controller.on_key(key);
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                update_hud(&document, &app.borrow());
            }
        });
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Push score, high score, and button states out to the page
    fn update_hud(document: &Document, app: &App) {
        if let Some(el) = document.get_element_by_id("score") {
            el.set_text_content(Some(&app.controller.score().to_string()));
        }
        if let Some(el) = document.get_element_by_id("highScore") {
            el.set_text_content(Some(&app.controller.high_score().to_string()));
        }

        let phase = app.controller.phase();
        let in_run = matches!(phase, GamePhase::Running | GamePhase::Paused);
        if let Ok(btn) = button(document, "startBtn") {
            btn.set_disabled(in_run);
            if phase != GamePhase::Idle {
                btn.set_text_content(Some("Restart"));
            }
        }
        if let Ok(btn) = button(document, "pauseBtn") {
            btn.set_disabled(!in_run);
            btn.set_text_content(Some(if phase == GamePhase::Paused {
                "Resume"
            } else {
                "Pause"
            }));
        }
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
        app.borrow_mut().frame();

        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            update_hud(&document, &app.borrow());
        }

        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_app::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use glam::Vec2;
    use typefall::game::GameController;
    use typefall::highscore::FileStore;
    use typefall::sim::{GamePhase, Key};

    env_logger::init();
    log::info!("typefall (native) starting...");

    // Headless demo: run one seeded session with a bot that types whatever
    // is falling, one letter per frame, until something slips past it.
    let mut game = GameController::new(0xC0DE, Vec2::new(800.0, 400.0), Box::new(FileStore::new()));
    game.start();

    for _ in 0..20_000 {
        game.tick();
        if game.phase() == GamePhase::GameOver {
            break;
        }
        let typed = game.state().input.len();
        if let Some(word) = game.state().asteroids.first().map(|a| a.word) {
            if let Some(c) = word.chars().nth(typed) {
                game.on_key(Key::Letter(c));
            }
        }
    }

    println!(
        "final score: {} (high score: {})",
        game.score(),
        game.high_score()
    );
}
