#![cfg(target_arch = "wasm32")]
//! Decorative particle and edge-glow overlay for the illustrated desk
//! scene. Scans the hotspot set, runs one particle/glow engine on a canvas
//! layered over the artwork, and reacts to hover and click. Purely
//! cosmetic: every failure path degrades to "no effect", never to a broken
//! page.

use crate::core::FxEngine;
use crate::scene::SceneBinding;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod render;
mod scene;

struct App {
    engine: Rc<RefCell<FxEngine>>,
    scene: Rc<RefCell<SceneBinding>>,
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("desk-fx starting");

    if let Err(e) = init() {
        // Decorative layer: log and leave the page alone.
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    if dom::prefers_reduced_motion() {
        log::info!("[fx] reduced-motion preference set; overlay disabled");
        return Ok(());
    }

    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let scene = SceneBinding::scan(&document)?;

    let canvas = dom::create_overlay_canvas(&document, &scene.surface)?;
    let ctx = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into::<web_sys::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    // Every run looks different; visual determinism is a non-goal.
    let engine = Rc::new(RefCell::new(FxEngine::new(js_sys::Date::now() as u64)));

    let metrics = dom::surface_metrics(&scene.surface);
    dom::sync_canvas_backing_size(&canvas);
    frame::apply_dpr_transform(&ctx, metrics.dpr);
    engine.borrow_mut().set_metrics(metrics);

    let specs = scene.build_specs(&engine.borrow());
    engine.borrow_mut().rebuild_emitters(specs);
    events::wire_hotspots(&scene.hotspots, &engine);

    let resize_dirty = Rc::new(Cell::new(false));
    events::wire_resize_flag(&resize_dirty);

    let scene = Rc::new(RefCell::new(scene));
    APP.with(|app| {
        *app.borrow_mut() = Some(App {
            engine: engine.clone(),
            scene: scene.clone(),
        });
    });

    log::info!(
        "[fx] engine up: {} emitters, scale={:.3} area={:.3}",
        engine.borrow().emitter_count(),
        metrics.scale,
        metrics.area_scale
    );

    frame::start_loop(Rc::new(RefCell::new(frame::FrameContext {
        engine,
        scene,
        canvas,
        ctx,
        resize_dirty,
        last_instant: Instant::now(),
    })));
    Ok(())
}

/// Re-scan entry point for the page glue (tooltips/navigation): call after
/// adding or removing hotspots so both sides see the same element set.
#[wasm_bindgen]
pub fn fx_rescan() {
    APP.with(|app| {
        if let Some(app) = app.borrow().as_ref() {
            let Some(document) = dom::window_document() else {
                return;
            };
            if let Err(e) = app
                .scene
                .borrow_mut()
                .rescan(&document, &app.engine)
            {
                log::warn!("[scene] rescan failed: {:?}", e);
            }
        }
    });
}
