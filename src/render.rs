use crate::constants::{DOT_MIN_RADIUS, FOG_BLUR_FILTER, FOG_PUFF_ALPHA};
use crate::core::{glow_passes, Emitter, Outline, Particle, RenderMode};
use std::f64::consts::TAU;
use web_sys as web;

/// Draw every live particle. Dots are plain alpha-blended circles; fog
/// puffs are additive radial-gradient discs so overlap brightens instead
/// of occluding.
pub fn draw_particles(ctx: &web::CanvasRenderingContext2d, particles: &[Particle]) {
    for p in particles {
        match p.mode {
            RenderMode::Dot => draw_dot(ctx, p),
            RenderMode::Fog => draw_fog_puff(ctx, p),
        }
    }
    ctx.set_global_alpha(1.0);
}

fn draw_dot(ctx: &web::CanvasRenderingContext2d, p: &Particle) {
    let u = p.age_ratio();
    if u >= 1.0 {
        return;
    }
    let radius = (p.size * (1.0 - u)).max(DOT_MIN_RADIUS);
    ctx.set_global_alpha(((1.0 - u) as f64).clamp(0.0, 1.0));
    ctx.set_fill_style_str(&p.color.rgba(1.0));
    ctx.begin_path();
    if ctx
        .arc(p.x as f64, p.y as f64, radius as f64, 0.0, TAU)
        .is_ok()
    {
        ctx.fill();
    }
}

fn draw_fog_puff(ctx: &web::CanvasRenderingContext2d, p: &Particle) {
    let radius = p.size.max(1.0) as f64;
    ctx.save();
    ctx.set_global_alpha(1.0);
    _ = ctx.set_global_composite_operation("lighter");
    ctx.set_filter(FOG_BLUR_FILTER);
    if let Ok(gradient) =
        ctx.create_radial_gradient(p.x as f64, p.y as f64, 0.0, p.x as f64, p.y as f64, radius)
    {
        _ = gradient.add_color_stop(0.0, &p.color.rgba(FOG_PUFF_ALPHA));
        _ = gradient.add_color_stop(1.0, &p.color.rgba(0.0));
        ctx.set_fill_style_canvas_gradient(&gradient);
        ctx.begin_path();
        if ctx.arc(p.x as f64, p.y as f64, radius, 0.0, TAU).is_ok() {
            ctx.fill();
        }
    }
    ctx.restore();
}

/// Stroke the cached glow outlines: outer halo, inner rim, and the two
/// scrolling twinkle passes, all additive so overlapping hotspots never
/// darken each other.
pub fn draw_glows(
    ctx: &web::CanvasRenderingContext2d,
    emitters: &[Emitter],
    scale: f32,
    time: f32,
) {
    for em in emitters {
        let Some(spec) = &em.glow else {
            continue;
        };
        if spec.outline.points.len() < 2 {
            continue;
        }
        let passes = glow_passes(spec, scale, time, em.seed);

        ctx.save();
        _ = ctx.set_global_composite_operation("lighter");
        trace_outline(ctx, &spec.outline);

        ctx.set_shadow_color(&spec.color.rgba(1.0));
        ctx.set_shadow_blur(passes.halo.blur as f64);
        ctx.set_line_width(passes.halo.width as f64);
        ctx.set_stroke_style_str(&spec.color.rgba(passes.halo.alpha));
        ctx.stroke();

        ctx.set_shadow_blur(0.0);
        ctx.set_line_width(passes.rim.width as f64);
        ctx.set_stroke_style_str(&spec.color.rgba(passes.rim.alpha));
        ctx.stroke();

        if let Some(dashes) = passes.twinkle {
            for d in dashes {
                let segments = js_sys::Array::of2(
                    &(d.dash[0] as f64).into(),
                    &(d.dash[1] as f64).into(),
                );
                if ctx.set_line_dash(&segments).is_ok() {
                    ctx.set_line_dash_offset(d.offset as f64);
                    ctx.set_line_width(d.width as f64);
                    ctx.set_stroke_style_str(&spec.color.rgba(d.alpha));
                    ctx.stroke();
                }
            }
        }
        ctx.restore();
    }
}

fn trace_outline(ctx: &web::CanvasRenderingContext2d, outline: &Outline) {
    ctx.begin_path();
    let first = outline.points[0];
    ctx.move_to(first.x as f64, first.y as f64);
    for p in &outline.points[1..] {
        ctx.line_to(p.x as f64, p.y as f64);
    }
    ctx.close_path();
}
