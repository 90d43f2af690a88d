use crate::constants::*;
use crate::core::{
    polygon_outline, rect_outline, sample_count, Color, EmitterSpec, FxEngine, GlowSpec, Outline,
    Transform2d,
};
use crate::{dom, events};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// The engine's view of the page: the scene wrapper and the current hotspot
/// set, in emitter-index order.
pub struct SceneBinding {
    pub surface: web::Element,
    pub hotspots: Vec<web::Element>,
}

impl SceneBinding {
    pub fn scan(document: &web::Document) -> anyhow::Result<Self> {
        let surface = document
            .query_selector(SURFACE_SELECTOR)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("missing {}", SURFACE_SELECTOR))?;
        let hotspots = query_hotspots(document)?;
        log::info!("[scene] scan found {} hotspots", hotspots.len());
        Ok(Self { surface, hotspots })
    }

    /// Emitter specs for the current hotspot set: resolved style, current
    /// rect (None while detached) and glow spec where requested.
    pub fn build_specs(&self, engine: &FxEngine) -> Vec<EmitterSpec> {
        let origin = dom::surface_origin(&self.surface);
        self.hotspots
            .iter()
            .map(|el| {
                let effect = el
                    .get_attribute(EFFECT_ATTR)
                    .unwrap_or_else(|| crate::core::DEFAULT_EFFECT.to_string());
                let style = engine.styles().resolve(&effect).clone();
                let fallback = style.palette.first().copied().unwrap_or(Color::WHITE);
                EmitterSpec {
                    rect: el
                        .is_connected()
                        .then(|| dom::element_rect_in(&self.surface, el)),
                    glow: glow_spec_for(el, origin, fallback),
                    style,
                }
            })
            .collect()
    }

    /// Cheap per-frame geometry sync: emitter rects track their elements so
    /// fog respawn follows layout shifts.
    pub fn update_rects(&self, engine: &mut FxEngine) {
        for (index, el) in self.hotspots.iter().enumerate() {
            let rect = el
                .is_connected()
                .then(|| dom::element_rect_in(&self.surface, el));
            engine.set_rect(index, rect);
        }
    }

    /// Resize path: rects plus glow outlines, without touching emitter
    /// state or particle ownership.
    pub fn refresh_geometry(&self, engine: &mut FxEngine) {
        let origin = dom::surface_origin(&self.surface);
        for (index, el) in self.hotspots.iter().enumerate() {
            let rect = el
                .is_connected()
                .then(|| dom::element_rect_in(&self.surface, el));
            engine.set_rect(index, rect);
            let fallback = engine
                .emitters()
                .get(index)
                .and_then(|em| em.style.palette.first().copied())
                .unwrap_or(Color::WHITE);
            engine.set_glow(index, glow_spec_for(el, origin, fallback));
        }
    }

    /// Full rescan after the scene element set changed: re-query hotspots,
    /// rebuild the emitter registry (stale fog owners retire on expiry) and
    /// wire input listeners on the new elements.
    pub fn rescan(
        &mut self,
        document: &web::Document,
        engine: &Rc<RefCell<FxEngine>>,
    ) -> anyhow::Result<()> {
        self.hotspots = query_hotspots(document)?;
        log::info!("[scene] rescan found {} hotspots", self.hotspots.len());
        let specs = self.build_specs(&engine.borrow());
        engine.borrow_mut().rebuild_emitters(specs);
        events::wire_hotspots(&self.hotspots, engine);
        Ok(())
    }
}

fn query_hotspots(document: &web::Document) -> anyhow::Result<Vec<web::Element>> {
    let list = document
        .query_selector_all(HOTSPOT_SELECTOR)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let mut hotspots = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        if let Some(el) = list.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) {
            hotspots.push(el);
        }
    }
    Ok(hotspots)
}

/// Glow spec for one hotspot, or None when the element does not request
/// glow or no outline can be built for it.
fn glow_spec_for(el: &web::Element, origin: Vec2, fallback_color: Color) -> Option<GlowSpec> {
    if !el.has_attribute(GLOW_ATTR) && !el.has_attribute(GLOW_COLOR_ATTR) {
        return None;
    }
    let outline = build_outline(el, origin)?;
    let color = el
        .get_attribute(GLOW_COLOR_ATTR)
        .and_then(|s| Color::from_hex(&s))
        .unwrap_or(fallback_color);
    Some(GlowSpec {
        outline,
        color,
        width: attr_f32(el, GLOW_WIDTH_ATTR).unwrap_or(GLOW_DEFAULT_WIDTH),
        blur: attr_f32(el, GLOW_BLUR_ATTR).unwrap_or(GLOW_DEFAULT_BLUR),
        alpha: attr_f32(el, GLOW_ALPHA_ATTR)
            .unwrap_or(GLOW_DEFAULT_ALPHA)
            .clamp(0.0, 1.0),
        pulse: attr_f32(el, GLOW_PULSE_ATTR).unwrap_or(GLOW_DEFAULT_PULSE),
        twinkle: el.has_attribute(GLOW_TWINKLE_ATTR),
    })
}

/// Stroke-able outline of a vector shape in surface-local coordinates.
///
/// Polygons map their vertex list through the screen CTM; other SVG
/// geometry is sampled adaptively along its length, falling back to the
/// bounding box when the length is unusable. Detached elements and
/// non-geometry kinds yield None (no glow).
pub fn build_outline(el: &web::Element, origin: Vec2) -> Option<Outline> {
    if let Some(poly) = el.dyn_ref::<web::SvgPolygonElement>() {
        let ctm = screen_ctm(poly)?;
        let list = poly.points();
        let mut verts = Vec::with_capacity(list.number_of_items() as usize);
        for i in 0..list.number_of_items() {
            let p = list.get_item(i).ok()?;
            verts.push(Vec2::new(p.x(), p.y()));
        }
        return polygon_outline(&verts, &ctm, origin);
    }
    if let Some(geom) = el.dyn_ref::<web::SvgGeometryElement>() {
        let ctm = screen_ctm(geom)?;
        let total = geom.get_total_length();
        if !total.is_finite() || total <= 0.0 {
            return Some(bbox_outline(el, origin));
        }
        let n = sample_count(total);
        let mut points = Vec::with_capacity(n);
        for k in 0..n {
            let d = total * k as f32 / n as f32;
            match geom.get_point_at_length(d) {
                Ok(p) => points.push(ctm.apply(Vec2::new(p.x(), p.y())) - origin),
                Err(_) => return Some(bbox_outline(el, origin)),
            }
        }
        return Some(Outline { points });
    }
    None
}

fn bbox_outline(el: &web::Element, origin: Vec2) -> Outline {
    let r = el.get_bounding_client_rect();
    rect_outline(
        r.left() as f32 - origin.x,
        r.top() as f32 - origin.y,
        r.width() as f32,
        r.height() as f32,
    )
}

/// Screen CTM as a pure transform; None when the element has no enclosing
/// coordinate system (detached from the document).
fn screen_ctm(el: &web::SvgGraphicsElement) -> Option<Transform2d> {
    let m = el.get_screen_ctm()?;
    Some(Transform2d {
        a: m.a(),
        b: m.b(),
        c: m.c(),
        d: m.d(),
        e: m.e(),
        f: m.f(),
    })
}

fn attr_f32(el: &web::Element, name: &str) -> Option<f32> {
    el.get_attribute(name)
        .and_then(|s| s.trim().parse::<f32>().ok())
        .filter(|v| v.is_finite())
}
