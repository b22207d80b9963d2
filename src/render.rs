use crate::constants::CANVAS_FONT_FAMILY;
use crate::fx::scene::css_rgba;
use crate::fx::DrawCmd;
use std::f64::consts::TAU;
use web_sys as web;

/// Replay a draw list. Coordinates are CSS pixels; `dpr` scales them to the
/// backing store.
pub fn draw(ctx: &web::CanvasRenderingContext2d, width_px: u32, height_px: u32, dpr: f64, cmds: &[DrawCmd]) {
    _ = ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
    ctx.clear_rect(0.0, 0.0, width_px as f64, height_px as f64);
    _ = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");

    for cmd in cmds {
        if cmd.alpha() <= 0.0 {
            continue;
        }
        match cmd {
            DrawCmd::Circle {
                center,
                radius,
                color,
                alpha,
            } => {
                ctx.set_fill_style_str(&css_rgba(*color, *alpha));
                ctx.begin_path();
                if ctx
                    .arc(center.x as f64, center.y as f64, radius.max(0.0) as f64, 0.0, TAU)
                    .is_ok()
                {
                    ctx.fill();
                }
            }
            DrawCmd::Glyph {
                at,
                text,
                size,
                color,
                alpha,
            } => {
                ctx.set_fill_style_str(&css_rgba(*color, *alpha));
                ctx.set_font(&format!("{:.0}px {}", size, CANVAS_FONT_FAMILY));
                _ = ctx.fill_text(text, at.x as f64, at.y as f64);
            }
            DrawCmd::Line {
                from,
                to,
                color,
                alpha,
            } => {
                ctx.set_stroke_style_str(&css_rgba(*color, *alpha));
                ctx.set_line_width(1.5);
                ctx.begin_path();
                ctx.move_to(from.x as f64, from.y as f64);
                ctx.line_to(to.x as f64, to.y as f64);
                ctx.stroke();
            }
        }
    }
}
