//! Tank Shooter entry point
//!
//! On the web this wires the DOM and WebGPU to the game loop. Natively it runs
//! a scripted headless session and prints a JSON summary.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use tank_shooter::renderer::{RenderState, TextLabel, VertexPainter, overlay_html};
    use tank_shooter::sim::Key;
    use tank_shooter::{Game, ScoreDisplay, Tuning};

    /// Score line backed by the `#score` element
    struct DomScore {
        el: Option<Element>,
    }

    impl ScoreDisplay for DomScore {
        fn show(&mut self, text: &str) {
            if let Some(el) = &self.el {
                el.set_text_content(Some(text));
            }
        }
    }

    /// Everything the animation frame callback needs
    struct App {
        game: Game<DomScore>,
        painter: VertexPainter,
        render_state: Option<RenderState>,
        overlay: Option<Element>,
        last_overlay: String,
    }

    impl App {
        fn frame(&mut self) {
            self.game.frame(&mut self.painter);
            self.render();
            let labels = self.painter.take_labels();
            self.update_overlay(&labels);
        }

        fn render(&mut self) {
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(self.painter.vertices()) {
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

        /// Mirror this frame's text into the overlay, touching the DOM only on change
        fn update_overlay(&mut self, labels: &[TextLabel]) {
            let html = overlay_html(labels, self.game.state.playfield());
            if html != self.last_overlay {
                if let Some(el) = &self.overlay {
                    el.set_inner_html(&html);
                }
                self.last_overlay = html;
            }
        }
    }

    fn document() -> Result<Document, JsValue> {
        web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))
    }

    pub async fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&JsValue::from_str(&e.to_string()));
        }

        log::info!("Tank Shooter starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = document()?;

        let tuning = Tuning::load();
        let playfield = tuning.playfield();

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or_else(|| JsValue::from_str("no canvas"))?
            .dyn_into()?;

        // Backing store at device resolution, CSS size at playfield units
        let dpr = window.device_pixel_ratio();
        let width = (playfield.x as f64 * dpr) as u32;
        let height = (playfield.y as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);
        let style = format!("width:{}px;height:{}px", playfield.x, playfield.y);
        canvas.set_attribute("style", &style)?;

        let seed = js_sys::Date::now() as u64;
        let score = DomScore {
            el: document.get_element_by_id("score"),
        };
        let app = Rc::new(RefCell::new(App {
            game: Game::new(seed, tuning, score),
            painter: VertexPainter::new(),
            render_state: None,
            overlay: document.get_element_by_id("overlay"),
            last_overlay: String::new(),
        }));

        log::info!("Game initialized with seed: {}", seed);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height, playfield)
            .await
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        app.borrow_mut().render_state = Some(render_state);

        setup_input_handlers(&canvas, app.clone())?;

        request_animation_frame(app);

        log::info!("Tank Shooter running!");
        Ok(())
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

        // Key down
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let key = event.key();
                // Keep arrows and space from scrolling the page
                if Key::from_dom(&key).is_some() {
                    event.prevent_default();
                }
                app.borrow_mut().game.key_down(&key);
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Key up
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                app.borrow_mut().game.key_up(&event.key());
            });
            window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Mouse click on the canvas fires
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                app.borrow_mut().game.pointer_down();
            });
            canvas.add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Key-ups are lost while unfocused, so drop everything held
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                app.borrow_mut().game.input.clear();
                log::debug!("Window blurred, input cleared");
            });
            window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            log::error!("No window, stopping game loop");
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(app);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>) {
        app.borrow_mut().frame();
        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run().await
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;

    use anyhow::{Context, Result};
    use clap::Parser;

    use tank_shooter::Tuning;
    use tank_shooter::headless::run_headless;

    /// Run a scripted tank shooter session without a display
    #[derive(Debug, Parser)]
    #[command(name = "tank-shooter", version, about)]
    pub struct Args {
        /// RNG seed for enemy spawns and particles
        #[arg(long, default_value_t = 0)]
        pub seed: u64,

        /// Number of frames to simulate
        #[arg(long, default_value_t = 3600)]
        pub frames: u64,

        /// JSON tuning file; missing fields keep their defaults
        #[arg(long)]
        pub tuning: Option<PathBuf>,
    }

    fn load_tuning(path: Option<&PathBuf>) -> Result<Tuning> {
        let Some(path) = path else {
            return Ok(Tuning::default());
        };
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read tuning file {}", path.display()))?;
        let tuning = Tuning::from_json(&json)
            .with_context(|| format!("invalid tuning file {}", path.display()))?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    pub fn run() -> Result<()> {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

        let args = Args::parse();
        let tuning = load_tuning(args.tuning.as_ref())?;

        log::info!(
            "Tank Shooter (headless) seed={} frames={}",
            args.seed,
            args.frames
        );

        let summary = run_headless(args.seed, tuning, args.frames);
        println!(
            "{}",
            serde_json::to_string_pretty(&summary).context("failed to encode run summary")?
        );
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    native::run()
}
