use crate::constants::{FX_CANVAS_ID, REDUCED_MOTION_QUERY};
use crate::core::{EmitterRect, SceneMetrics};
use glam::Vec2;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// System-level motion-reduction preference, checked once at startup.
pub fn prefers_reduced_motion() -> bool {
    web::window()
        .and_then(|w| w.match_media(REDUCED_MOTION_QUERY).ok().flatten())
        .map(|mql| mql.matches())
        .unwrap_or(false)
}

/// Current metrics of the animation surface: CSS size plus DPR.
pub fn surface_metrics(surface: &web::Element) -> SceneMetrics {
    let dpr = web::window()
        .map(|w| w.device_pixel_ratio())
        .unwrap_or(1.0) as f32;
    let rect = surface.get_bounding_client_rect();
    SceneMetrics::new(rect.width() as f32, rect.height() as f32, dpr)
}

/// Keep the canvas backing store at CSS size times devicePixelRatio.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Create the overlay canvas inside the scene wrapper. Pointer events pass
/// through to the hotspots underneath.
pub fn create_overlay_canvas(
    document: &web::Document,
    surface: &web::Element,
) -> anyhow::Result<web::HtmlCanvasElement> {
    use wasm_bindgen::JsCast;
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    canvas.set_id(FX_CANVAS_ID);
    _ = canvas.set_attribute(
        "style",
        "position:absolute;inset:0;width:100%;height:100%;pointer-events:none;",
    );
    surface
        .append_child(&canvas)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(canvas)
}

/// Center/size rect of `el` relative to the surface origin, in CSS px.
pub fn element_rect_in(surface: &web::Element, el: &web::Element) -> EmitterRect {
    let r = el.get_bounding_client_rect();
    let host = surface.get_bounding_client_rect();
    EmitterRect {
        cx: (r.left() + r.width() * 0.5 - host.left()) as f32,
        cy: (r.top() + r.height() * 0.5 - host.top()) as f32,
        w: r.width() as f32,
        h: r.height() as f32,
    }
}

/// Surface origin in client coordinates, for mapping screen-CTM points
/// into surface-local space.
pub fn surface_origin(surface: &web::Element) -> Vec2 {
    let host = surface.get_bounding_client_rect();
    Vec2::new(host.left() as f32, host.top() as f32)
}
