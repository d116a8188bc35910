//! Rectfall entry point
//!
//! Handles platform-specific initialization and runs the tick loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use rectfall::Settings;
    use rectfall::input::{Key, KeyEvent, KeyKind, PointerEvent, PointerKind};
    use rectfall::logging::{self, LogSwitches};
    use rectfall::renderer::{CanvasPainter, render_frame};
    use rectfall::sim::{SimState, tick};

    /// App instance holding all state
    struct App {
        state: SimState,
        settings: Settings,
        painter: CanvasPainter,
        canvas: HtmlCanvasElement,
    }

    impl App {
        /// Match the canvas backing store to its CSS size and rescale
        fn resize(&mut self) {
            let w = self.canvas.offset_width().max(0) as u32;
            let h = self.canvas.offset_height().max(0) as u32;
            self.canvas.set_width(w);
            self.canvas.set_height(h);
            self.painter.resize(w, h);
            self.state.viewport.resize(w as f32, h as f32);
            let _ = self.canvas.focus();
        }

        /// One host tick: maybe step, always draw
        fn tick(&mut self) {
            tick(&mut self.state);
            render_frame(&self.state, self.settings.draw_centers, &mut self.painter);
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        let settings = Settings::load();
        logging::install(
            logging::ConsoleLogger,
            LogSwitches::from(&settings),
            settings.log_level().to_level_filter(),
        )
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
        log::info!("Rectfall starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let mode = match settings.start_mode() {
            Ok(mode) => mode,
            Err(e) => {
                log::error!("{e}");
                let _ = window.alert_with_message(&e.to_string());
                return Ok(());
            }
        };

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or("no canvas")?
            .dyn_into()?;
        // Keyboard events need a focusable canvas
        canvas.set_attribute("tabindex", "0")?;

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("no 2d context")?
            .dyn_into()?;

        let width = canvas.offset_width().max(0) as u32;
        let height = canvas.offset_height().max(0) as u32;
        let app = Rc::new(RefCell::new(App {
            state: SimState::new(settings.viewport(width as f32, height as f32), mode),
            painter: CanvasPainter::new(ctx, width, height),
            canvas: canvas.clone(),
            settings,
        }));
        app.borrow_mut().resize();

        setup_resize_handler(&window, app.clone())?;
        setup_keyboard_handlers(&canvas, app.clone())?;
        setup_pointer_handlers(&document, &canvas, app.clone())?;

        let interval_ms = app.borrow().settings.tick_interval_ms();
        let closure = Closure::<dyn FnMut()>::new(move || app.borrow_mut().tick());
        window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            interval_ms,
        )?;
        closure.forget();

        log::info!("Rectfall running ({mode}, every {interval_ms} ms)");
        Ok(())
    }

    fn setup_resize_handler(window: &web_sys::Window, app: Rc<RefCell<App>>) -> Result<(), JsValue> {
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            app.borrow_mut().resize();
        });
        window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn setup_keyboard_handlers(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) -> Result<(), JsValue> {
        for (name, kind) in [("keydown", KeyKind::Down), ("keyup", KeyKind::Up)] {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let key_event = KeyEvent {
                    kind,
                    key: Key::from_dom(&event.key()),
                    repeat: event.repeat(),
                };
                app.borrow_mut().state.handle_key(&key_event);
            });
            canvas.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        Ok(())
    }

    fn setup_pointer_handlers(
        document: &web_sys::Document,
        canvas: &HtmlCanvasElement,
        app: Rc<RefCell<App>>,
    ) -> Result<(), JsValue> {
        let handler = |kind: PointerKind, app: Rc<RefCell<App>>| {
            Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                app.borrow_mut().state.handle_pointer(&PointerEvent {
                    kind,
                    x: event.x() as f32,
                    y: event.y() as f32,
                });
            })
        };

        // Movement is tracked over the whole page, buttons only on the canvas
        let moved = handler(PointerKind::Move, app.clone());
        document.add_event_listener_with_callback("mousemove", moved.as_ref().unchecked_ref())?;
        moved.forget();

        let down = handler(PointerKind::Down, app.clone());
        canvas.add_event_listener_with_callback("mousedown", down.as_ref().unchecked_ref())?;
        down.forget();

        let up = handler(PointerKind::Up, app);
        canvas.add_event_listener_with_callback("mouseup", up.as_ref().unchecked_ref())?;
        up.forget();

        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_app::run()
}

/// Ticks simulated by the native runner (10 s at 60 Hz)
#[cfg(not(target_arch = "wasm32"))]
const HEADLESS_TICKS: u32 = 600;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), rectfall::ModeError> {
    use rectfall::Settings;
    use rectfall::logging::{self, LogSwitches};
    use rectfall::sim::{SimState, tick};

    let settings = Settings::load();
    let env_logger = env_logger::Builder::from_default_env().build();
    let max_level = env_logger.filter();
    if let Err(e) = logging::install(env_logger, LogSwitches::from(&settings), max_level) {
        eprintln!("Logger already set: {e}");
    }
    log::info!("Rectfall (native) starting...");
    log::info!("Native mode runs headless - serve the wasm build for the canvas version");

    let mode = settings.start_mode()?;
    let mut state = SimState::new(settings.viewport(800.0, 600.0), mode);

    let steps = (0..HEADLESS_TICKS).filter(|_| tick(&mut state)).count();
    log::info!("Simulated {steps} steps over {HEADLESS_TICKS} ticks");

    for body in state.bodies() {
        println!(
            "[{}] {:?} pos: ({:.3}, {:.3}) vel: ({:.3}, {:.3}) resting: {} touching: {}",
            body.id,
            body.kind,
            body.center.x,
            body.center.y,
            body.velocity.x,
            body.velocity.y,
            body.resting,
            body.touching_floor
        );
    }
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
