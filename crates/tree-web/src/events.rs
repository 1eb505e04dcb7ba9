use crate::dom;
use crate::overlay;
use crate::storage;
use crate::AppState;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use tree_core::{key_action, KeyAction, Photo};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(
    ev: &web::KeyboardEvent,
    state: &Rc<RefCell<AppState>>,
    canvas: &web::HtmlCanvasElement,
    document: &web::Document,
    photo_input: Option<&web::HtmlInputElement>,
) {
    let Some(action) = key_action(&ev.key()) else {
        return;
    };
    match action {
        KeyAction::ToggleMode => {
            state.borrow_mut().scene.toggle_mode();
            ev.prevent_default();
        }
        KeyAction::CycleTheme => state.borrow_mut().scene.cycle_theme(),
        KeyAction::SelectTheme(id) => state.borrow_mut().scene.set_theme(id),
        KeyAction::ToggleOverlay => overlay::toggle(document),
        KeyAction::SaveSnapshot => {
            let snapshot = state.borrow().scene.snapshot();
            if let Err(e) = storage::save(&snapshot) {
                log::warn!("[storage] {}", e);
            }
        }
        KeyAction::AddPhotos => {
            if let Some(input) = photo_input {
                input.click();
            }
        }
        KeyAction::Orbit(delta) => {
            state.borrow_mut().camera.orbit(delta);
            ev.prevent_default();
        }
        KeyAction::Zoom(delta) => {
            state.borrow_mut().camera.zoom(delta);
            ev.prevent_default();
        }
        KeyAction::Fullscreen => {
            dom::toggle_fullscreen(canvas);
            ev.prevent_default();
        }
    }
    overlay::update_status(document, &state.borrow().scene);
}

pub fn wire_global_keydown(
    state: Rc<RefCell<AppState>>,
    canvas: web::HtmlCanvasElement,
    document: web::Document,
    photo_input: Option<web::HtmlInputElement>,
) {
    let Some(window) = web::window() else {
        return;
    };
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        handle_global_keydown(&ev, &state, &canvas, &document, photo_input.as_ref());
    }) as Box<dyn FnMut(_)>);
    window
        .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
        .ok();
    closure.forget();
}

#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let sx = (x_css / rect.width().max(1.0) as f32) * canvas.width() as f32;
    let sy = (y_css / rect.height().max(1.0) as f32) * canvas.height() as f32;
    Vec2::new(sx, sy)
}

/// Track the pointer in canvas pixels; the frame loop turns it into a hover pick.
pub fn wire_pointer(state: Rc<RefCell<AppState>>, canvas: web::HtmlCanvasElement) {
    {
        let state = state.clone();
        let canvas_m = canvas.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            state.borrow_mut().pointer = Some(pointer_canvas_px(&ev, &canvas_m));
        }) as Box<dyn FnMut(_)>);
        canvas
            .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref())
            .ok();
        closure.forget();
    }
    {
        let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
            let mut s = state.borrow_mut();
            s.pointer = None;
            s.scene.set_hovered_photo(None);
        }) as Box<dyn FnMut(_)>);
        canvas
            .add_event_listener_with_callback("pointerleave", closure.as_ref().unchecked_ref())
            .ok();
        closure.forget();
    }
}

fn read_photo(state: Rc<RefCell<AppState>>, document: web::Document, file: web::File) {
    let reader = match web::FileReader::new() {
        Ok(r) => r,
        Err(e) => {
            log::error!("FileReader error: {:?}", e);
            return;
        }
    };
    let name = file.name();
    let reader_c = reader.clone();
    let onload = Closure::wrap(Box::new(move || {
        let Some(url) = reader_c.result().ok().and_then(|v| v.as_string()) else {
            log::warn!("[photo] {} produced no data", name);
            return;
        };
        match Photo::from_data_url(&url) {
            Ok(photo) => {
                let mut s = state.borrow_mut();
                s.scene.push_photo(photo);
                log::info!("[photo] added {} ({} total)", name, s.scene.photos().len());
                overlay::update_status(&document, &s.scene);
            }
            Err(e) => log::warn!("[photo] skipping {}: {}", name, e),
        }
    }) as Box<dyn FnMut()>);
    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    onload.forget();
    if let Err(e) = reader.read_as_data_url(&file) {
        log::warn!("[photo] could not read file: {:?}", e);
    }
}

pub fn wire_photo_input(
    state: Rc<RefCell<AppState>>,
    document: web::Document,
    input: web::HtmlInputElement,
) {
    let input_c = input.clone();
    let closure = Closure::wrap(Box::new(move || {
        let Some(files) = input_c.files() else {
            return;
        };
        if files.length() > 0 {
            let mut s = state.borrow_mut();
            s.scene.reveal_photos();
            overlay::update_status(&document, &s.scene);
        }
        for i in 0..files.length() {
            if let Some(file) = files.get(i) {
                read_photo(state.clone(), document.clone(), file);
            }
        }
        // Allow picking the same files again
        input_c.set_value("");
    }) as Box<dyn FnMut()>);
    input
        .add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())
        .ok();
    closure.forget();
}
