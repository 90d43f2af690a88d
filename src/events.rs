use crate::core::FxEngine;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Wire hover and click listeners for every hotspot. Handlers only flip
/// per-emitter flags; the frame loop consumes them on its next tick, so no
/// intermediate state is ever observed mid-frame.
///
/// Listeners are leaked and survive rescans, and a rescan can move an
/// element to a different emitter index. Each closure therefore carries the
/// generation it was wired against; the registry drops stale-generation
/// input instead of applying it to whatever emitter now holds that index.
pub fn wire_hotspots(hotspots: &[web::Element], engine: &Rc<RefCell<FxEngine>>) {
    let generation = engine.borrow().generation();
    for (index, el) in hotspots.iter().enumerate() {
        wire_hover(el, index, generation, engine);
        wire_click(el, index, generation, engine);
    }
}

fn wire_hover(el: &web::Element, index: usize, generation: u32, engine: &Rc<RefCell<FxEngine>>) {
    let eng = engine.clone();
    let enter = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        eng.borrow_mut().set_hover_from(generation, index, true);
    }) as Box<dyn FnMut(_)>);
    _ = el.add_event_listener_with_callback("pointerenter", enter.as_ref().unchecked_ref());
    enter.forget();

    let eng = engine.clone();
    let leave = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        eng.borrow_mut().set_hover_from(generation, index, false);
    }) as Box<dyn FnMut(_)>);
    _ = el.add_event_listener_with_callback("pointerleave", leave.as_ref().unchecked_ref());
    leave.forget();
}

fn wire_click(el: &web::Element, index: usize, generation: u32, engine: &Rc<RefCell<FxEngine>>) {
    let eng = engine.clone();
    let click = Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
        eng.borrow_mut().queue_burst_from(generation, index);
    }) as Box<dyn FnMut(_)>);
    _ = el.add_event_listener_with_callback("click", click.as_ref().unchecked_ref());
    click.forget();
}

/// Window resize only sets a flag; the next frame tick re-syncs the canvas
/// and metrics, which debounces bursts of resize events for free.
pub fn wire_resize_flag(dirty: &Rc<Cell<bool>>) {
    let dirty = dirty.clone();
    let closure = Closure::wrap(Box::new(move || {
        dirty.set(true);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
