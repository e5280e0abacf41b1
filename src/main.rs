//! Pixel field entry point
//!
//! Handles platform-specific initialization and owns the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, TouchEvent, Window};

    use pixel_field::background::Background;
    use pixel_field::error::BackgroundError;
    use pixel_field::renderer::CanvasSurface;
    use pixel_field::settings::Settings;

    /// Canvas element id the embedding page provides.
    const CANVAS_ID: &str = "pixel-field";

    type FrameClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

    /// Everything acquired at attach time: the shared component state, the
    /// animation handle, and the event listener closures. Teardown must go
    /// through [`PixelField::detach`] so listeners are removed and the
    /// pending frame is cancelled before the closures drop.
    pub struct PixelField {
        state: Rc<RefCell<Background>>,
        raf_id: Rc<Cell<Option<i32>>>,
        frame: FrameClosure,
        mousemove: Closure<dyn FnMut(MouseEvent)>,
        touchmove: Closure<dyn FnMut(TouchEvent)>,
        resize: Closure<dyn FnMut()>,
    }

    impl PixelField {
        /// Acquire the canvas, register listeners, and start the frame loop.
        ///
        /// Every exit path releases what was acquired before it: the only
        /// fallible step after listener registration is the first frame
        /// request, which removes the listeners again on failure.
        pub fn attach(settings: &Settings) -> Result<Self, BackgroundError> {
            let window = web_sys::window().ok_or(BackgroundError::Environment("window"))?;
            let document = window
                .document()
                .ok_or(BackgroundError::Environment("document"))?;

            let canvas: HtmlCanvasElement = document
                .get_element_by_id(CANVAS_ID)
                .ok_or(BackgroundError::Environment("canvas element"))?
                .dyn_into()
                .map_err(|_| BackgroundError::Environment("canvas element"))?;

            let ctx: CanvasRenderingContext2d = canvas
                .get_context("2d")
                .ok()
                .flatten()
                .ok_or(BackgroundError::Environment("2d context"))?
                .dyn_into()
                .map_err(|_| BackgroundError::Environment("2d context"))?;

            let (width, height) = size_canvas(&window, &canvas, &ctx);
            let state = Rc::new(RefCell::new(Background::new(
                settings.field_config(),
                width,
                height,
            )?));

            let mousemove = {
                let state = state.clone();
                Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                    state
                        .borrow_mut()
                        .pointer_moved(event.client_x() as f32, event.client_y() as f32);
                })
            };

            let touchmove = {
                let state = state.clone();
                Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                    if let Some(touch) = event.touches().get(0) {
                        state
                            .borrow_mut()
                            .pointer_moved(touch.client_x() as f32, touch.client_y() as f32);
                    }
                })
            };

            let resize = {
                let state = state.clone();
                let canvas = canvas.clone();
                let ctx = ctx.clone();
                Closure::<dyn FnMut()>::new(move || {
                    if let Some(window) = web_sys::window() {
                        let (width, height) = size_canvas(&window, &canvas, &ctx);
                        state.borrow_mut().resized(width, height);
                    }
                })
            };

            let _ = window
                .add_event_listener_with_callback("mousemove", mousemove.as_ref().unchecked_ref());
            let _ = window
                .add_event_listener_with_callback("touchmove", touchmove.as_ref().unchecked_ref());
            let _ =
                window.add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref());

            // The frame closure lives in an Option so it can reference itself
            // when rescheduling.
            let frame: FrameClosure = Rc::new(RefCell::new(None));
            let raf_id = Rc::new(Cell::new(None));
            {
                let state = state.clone();
                let raf_id = raf_id.clone();
                let handle = frame.clone();
                let mut surface = CanvasSurface::new(ctx.clone());
                *frame.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                    let bg = state.borrow();
                    if !bg.is_active() {
                        return;
                    }
                    bg.frame(&mut surface);
                    drop(bg);
                    raf_id.set(request_frame(&handle));
                }) as Box<dyn FnMut()>));
            }

            let field = Self {
                state,
                raf_id,
                frame,
                mousemove,
                touchmove,
                resize,
            };

            match request_frame(&field.frame) {
                Some(id) => {
                    field.raf_id.set(Some(id));
                    log::info!("Pixel field attached ({width}x{height})");
                    Ok(field)
                }
                None => {
                    field.remove_listeners();
                    Err(BackgroundError::Environment("requestAnimationFrame"))
                }
            }
        }

        /// Stop drawing and release every acquired resource. After this no
        /// frame fires and no listener touches the component again.
        pub fn detach(self) {
            self.state.borrow_mut().detach();

            if let Some(window) = web_sys::window() {
                if let Some(id) = self.raf_id.take() {
                    let _ = window.cancel_animation_frame(id);
                }
            }
            self.remove_listeners();
            self.frame.borrow_mut().take();

            log::info!("Pixel field detached");
        }

        fn remove_listeners(&self) {
            if let Some(window) = web_sys::window() {
                let _ = window.remove_event_listener_with_callback(
                    "mousemove",
                    self.mousemove.as_ref().unchecked_ref(),
                );
                let _ = window.remove_event_listener_with_callback(
                    "touchmove",
                    self.touchmove.as_ref().unchecked_ref(),
                );
                let _ = window.remove_event_listener_with_callback(
                    "resize",
                    self.resize.as_ref().unchecked_ref(),
                );
            }
        }
    }

    /// Size the backing store to the viewport times the device pixel ratio,
    /// keeping draw coordinates in CSS pixels. Resetting the backing store
    /// clears the context transform, so the dpr scale is reapplied.
    fn size_canvas(
        window: &Window,
        canvas: &HtmlCanvasElement,
        ctx: &CanvasRenderingContext2d,
    ) -> (f32, f32) {
        let width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let dpr = window.device_pixel_ratio();
        canvas.set_width((width * dpr) as u32);
        canvas.set_height((height * dpr) as u32);
        let _ = ctx.scale(dpr, dpr);
        (width as f32, height as f32)
    }

    /// Schedule the stored frame closure for the next repaint.
    fn request_frame(frame: &FrameClosure) -> Option<i32> {
        let window = web_sys::window()?;
        let slot = frame.borrow();
        let closure = slot.as_ref()?;
        window
            .request_animation_frame(closure.as_ref().unchecked_ref())
            .ok()
    }

    thread_local! {
        static INSTANCE: RefCell<Option<PixelField>> = const { RefCell::new(None) };
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        log::info!("Pixel field starting...");

        let settings = Settings::load();
        match PixelField::attach(&settings) {
            Ok(field) => {
                INSTANCE.with(|slot| *slot.borrow_mut() = Some(field));
                log::info!("Pixel field running!");
            }
            // Cosmetic background layer: log and leave the page alone.
            Err(e) => log::warn!("Pixel field disabled: {e}"),
        }
    }

    pub fn shutdown() {
        INSTANCE.with(|slot| {
            if let Some(field) = slot.borrow_mut().take() {
                field.detach();
            }
        });
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

/// Teardown hook for the embedding page.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn pixel_field_detach() {
    wasm_app::shutdown();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Pixel field (native) starting...");
    log::info!("Native mode is a diagnostic stub - run with `trunk serve` for the web version");

    println!("\nRunning field sampler check...");
    check_field_sampler();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn check_field_sampler() {
    use glam::Vec2;
    use pixel_field::field::{FieldConfig, sample_cell};

    let config = FieldConfig::default();
    let dot = sample_cell(Vec2::new(90.0, 90.0), Vec2::new(100.0, 100.0), &config);
    assert_eq!(dot.color, config.color_active, "near cell should be active");
    assert!(dot.radius > config.base_radius, "near cell should grow");
    println!("✓ Field sampler check passed!");
}
