use crate::render::GpuState;
use crate::AppState;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use tree_core::picking::screen_ray;
use tree_core::{FrameClock, FrameOutput, TreeMode};
use web_sys as web;

/// Longest step fed to the animation, so a backgrounded tab does not jump.
const MAX_FRAME_DT: f32 = 0.1;

pub struct FrameContext<'a> {
    pub state: Rc<RefCell<AppState>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: GpuState<'a>,
    pub out: FrameOutput,
    pub clock: FrameClock,
    pub last_instant: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn new(state: Rc<RefCell<AppState>>, canvas: web::HtmlCanvasElement, gpu: GpuState<'a>) -> Self {
        Self {
            state,
            canvas,
            gpu,
            out: FrameOutput::new(),
            clock: FrameClock::default(),
            last_instant: Instant::now(),
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_instant).as_secs_f32().min(MAX_FRAME_DT);
        self.last_instant = now;
        self.clock.advance(dt);

        let w = self.canvas.width();
        let h = self.canvas.height();
        self.gpu.resize_if_needed(w, h);

        let mut guard = self.state.borrow_mut();
        let state = &mut *guard;
        state
            .camera
            .update(state.scene.mode() == TreeMode::TreeShape, dt);
        let camera = state.camera.camera(self.gpu.aspect());

        if let Some(px) = state.pointer {
            let (origin, dir) = screen_ray(&camera, px.x, px.y, w as f32, h as f32);
            let hit = state.scene.pick_photo(origin, dir);
            if hit != state.scene.hovered_photo() {
                state.scene.set_hovered_photo(hit);
            }
        }

        state.scene.update(self.clock, &mut self.out);
        if let Err(e) = self.gpu.render(&self.out, &camera, state.scene.theme()) {
            log::error!("render error: {:?}", e);
        }
    }
}
