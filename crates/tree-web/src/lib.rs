#![cfg(target_arch = "wasm32")]
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use tree_core::{OrbitCamera, Photo, Scene, SceneConfig};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod dom;
mod events;
mod frame;
mod overlay;
mod render;
mod storage;

/// State shared between the frame loop and the DOM event handlers.
pub struct AppState {
    pub scene: Scene,
    pub camera: OrbitCamera,
    /// Pointer position in canvas pixels, if over the canvas.
    pub pointer: Option<Vec2>,
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("tree-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id("app-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Keep the backing store at CSS size * devicePixelRatio
    dom::sync_canvas_backing_size(&canvas);
    {
        let canvas_resize = canvas.clone();
        let resize_closure = Closure::wrap(Box::new(move || {
            dom::sync_canvas_backing_size(&canvas_resize);
        }) as Box<dyn FnMut()>);
        window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref())
            .ok();
        resize_closure.forget();
    }

    let mut scene = Scene::new(SceneConfig::default());
    if let Some(snapshot) = storage::load() {
        log::info!("[storage] restoring {} photos", snapshot.photos.len());
        scene.apply_snapshot(&snapshot, Photo::from_data_url);
    }
    overlay::fill_help(&document);
    overlay::update_status(&document, &scene);

    let state = Rc::new(RefCell::new(AppState {
        scene,
        camera: OrbitCamera::new(),
        pointer: None,
    }));

    let photo_input = document
        .get_element_by_id("photo-input")
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok());
    if let Some(input) = &photo_input {
        events::wire_photo_input(state.clone(), document.clone(), input.clone());
    }
    {
        let input = photo_input.clone();
        dom::add_click_listener(&document, "add-photos", move || {
            if let Some(input) = &input {
                input.click();
            }
        });
    }
    events::wire_global_keydown(state.clone(), canvas.clone(), document.clone(), photo_input);
    events::wire_pointer(state.clone(), canvas.clone());

    // The surface borrows the canvas for the lifetime of the page
    let leaked_canvas: &'static web::HtmlCanvasElement = Box::leak(Box::new(canvas.clone()));
    let gpu = render::GpuState::new(leaked_canvas).await?;
    log::info!("[gpu] ready {}x{}", canvas.width(), canvas.height());

    let ctx = Rc::new(RefCell::new(frame::FrameContext::new(state, canvas, gpu)));
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        ctx.borrow_mut().frame();
        if let Some(w) = web::window() {
            if let Some(cb) = tick_clone.borrow().as_ref() {
                let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
            }
        }
    }) as Box<dyn FnMut()>));
    if let Some(cb) = tick.borrow().as_ref() {
        let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
    }
    Ok(())
}
