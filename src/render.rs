use crate::constants::*;
use glam::{DVec2, DVec3};
use ruler_core::ViewportState;
use web_sys as web;

/// Draw the ruler, its minor marks and its numbered ticks for the current camera.
///
/// Coordinates are CSS pixels; `dpr` scales them onto the backing store.
pub fn draw(ctx: &web::CanvasRenderingContext2d, state: &ViewportState, dpr: f64) {
    let vp = state.viewport();
    _ = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
    ctx.set_fill_style_str(BACKGROUND_COLOR);
    ctx.fill_rect(0.0, 0.0, vp.width, vp.height);

    let object = state.object();
    let top_left = state.world_to_pixel(DVec3::new(object.min.x, object.max.y, 0.0));
    let bottom_right = state.world_to_pixel(DVec3::new(object.max.x, object.min.y, 0.0));
    ctx.set_fill_style_str(RULER_COLOR);
    ctx.fill_rect(
        top_left.x,
        top_left.y,
        bottom_right.x - top_left.x,
        bottom_right.y - top_left.y,
    );

    draw_minor_ticks(ctx, state, vp.width);
    draw_numbered_ticks(ctx, state, vp.width, top_left.y, bottom_right.y);
}

#[inline]
fn on_screen(x: f64, width: f64) -> bool {
    x >= -1.0 && x <= width + 1.0
}

fn pixel_spacing(state: &ViewportState, xs: &[f64]) -> f64 {
    match xs {
        [a, b, ..] => {
            let pa = state.world_to_pixel(DVec3::new(*a, 0.0, 0.0));
            let pb = state.world_to_pixel(DVec3::new(*b, 0.0, 0.0));
            (pb.x - pa.x).abs()
        }
        _ => f64::INFINITY,
    }
}

fn stroke_vertical(ctx: &web::CanvasRenderingContext2d, top: DVec2, bottom: DVec2) {
    ctx.move_to(top.x, top.y);
    ctx.line_to(bottom.x, bottom.y);
}

fn draw_minor_ticks(ctx: &web::CanvasRenderingContext2d, state: &ViewportState, width: f64) {
    let (xs, y0, y1) = state.minor_tick_positions();
    if pixel_spacing(state, &xs) < MIN_MINOR_SPACING_PX {
        return;
    }
    ctx.set_stroke_style_str(MINOR_TICK_COLOR);
    ctx.set_line_width(1.0);
    ctx.begin_path();
    for x in xs {
        let top = state.world_to_pixel(DVec3::new(x, y1, 0.0));
        if !on_screen(top.x, width) {
            continue;
        }
        let bottom = state.world_to_pixel(DVec3::new(x, y0, 0.0));
        stroke_vertical(ctx, top, bottom);
    }
    ctx.stroke();
}

fn draw_numbered_ticks(
    ctx: &web::CanvasRenderingContext2d,
    state: &ViewportState,
    width: f64,
    top_y: f64,
    bottom_y: f64,
) {
    let ticks = state.tick_positions();
    let xs: Vec<f64> = ticks.iter().map(|(_, x)| *x).collect();
    let spacing = pixel_spacing(state, &xs);
    // Thin out labels so neighbours never overlap.
    let label_every = if spacing >= MIN_LABEL_SPACING_PX {
        1
    } else {
        (MIN_LABEL_SPACING_PX / spacing.max(f64::MIN_POSITIVE)).ceil() as u32
    };

    ctx.set_stroke_style_str(MAJOR_TICK_COLOR);
    ctx.set_fill_style_str(MAJOR_TICK_COLOR);
    ctx.set_line_width(1.0);
    ctx.set_font(LABEL_FONT);
    ctx.set_text_align("center");
    ctx.begin_path();
    for (number, x) in ticks {
        let px = state.world_to_pixel(DVec3::new(x, 0.0, 0.0)).x;
        if !on_screen(px, width) {
            continue;
        }
        stroke_vertical(ctx, DVec2::new(px, top_y), DVec2::new(px, bottom_y));
        if (number - 1) % label_every == 0 {
            _ = ctx.fill_text(&number.to_string(), px, top_y - LABEL_OFFSET_PX);
        }
    }
    ctx.stroke();
}
