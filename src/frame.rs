use crate::core::FxEngine;
use crate::scene::SceneBinding;
use crate::{dom, render};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything one animation tick needs. One instance lives for the page
/// lifetime inside the rAF closure.
pub struct FrameContext {
    pub engine: Rc<RefCell<FxEngine>>,
    pub scene: Rc<RefCell<SceneBinding>>,
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
    pub resize_dirty: Rc<Cell<bool>>,
    pub last_instant: Instant,
}

impl FrameContext {
    /// One display frame: metrics refresh when needed, rect sync, spawn +
    /// integrate, then both render passes. Everything runs synchronously;
    /// nothing here may block.
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        let scene = self.scene.borrow();
        let mut engine = self.engine.borrow_mut();

        if self.resize_dirty.replace(false) {
            dom::sync_canvas_backing_size(&self.canvas);
            let metrics = dom::surface_metrics(&scene.surface);
            engine.set_metrics(metrics);
            scene.refresh_geometry(&mut engine);
            apply_dpr_transform(&self.ctx, metrics.dpr);
        }

        // Rects track their elements every frame so fog respawn follows
        // the element if it moved or resized.
        scene.update_rects(&mut engine);

        let metrics = engine.metrics();
        self.ctx
            .clear_rect(0.0, 0.0, metrics.width as f64, metrics.height as f64);

        engine.advance(dt);

        render::draw_particles(&self.ctx, engine.particles());
        render::draw_glows(&self.ctx, engine.emitters(), metrics.scale, engine.time());
    }
}

/// Simulation works in CSS pixels; the backing store is CSS size x DPR, so
/// one transform maps between them.
pub fn apply_dpr_transform(ctx: &web::CanvasRenderingContext2d, dpr: f32) {
    let d = dpr as f64;
    _ = ctx.set_transform(d, 0.0, 0.0, d, 0.0, 0.0);
}

/// Schedule the frame loop via requestAnimationFrame, self-rescheduling
/// until page unload.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
