//! Canvas-2D implementation of the drawing surface
//!
//! Wraps the page's `CanvasRenderingContext2d`. Draw calls that can fail on
//! the JS side are best-effort; a lost context just stops painting.

use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::surface::{Color, DrawSurface, TextAlign, TextBaseline, TextStyle};

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    size: Vec2,
}

impl CanvasSurface {
    /// Wrap a canvas element's 2D context. Fails when the context is
    /// unavailable, which callers treat as a startup precondition
    /// violation.
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| JsValue::from_str("#gameCanvas has no 2d context"))?;
        Ok(Self {
            ctx,
            size: Vec2::new(canvas.width() as f32, canvas.height() as f32),
        })
    }

    fn trace_polygon(&self, points: &[Vec2]) {
        self.ctx.begin_path();
        let Some(first) = points.first() else { return };
        self.ctx.move_to(first.x as f64, first.y as f64);
        for p in &points[1..] {
            self.ctx.line_to(p.x as f64, p.y as f64);
        }
        self.ctx.close_path();
    }

    fn apply_text_style(&self, style: &TextStyle) {
        let weight = if style.bold { "bold " } else { "" };
        self.ctx.set_font(&format!("{}{}px Arial", weight, style.size_px));
        self.ctx.set_text_align(match style.align {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
        });
        self.ctx.set_text_baseline(match style.baseline {
            TextBaseline::Alphabetic => "alphabetic",
            TextBaseline::Middle => "middle",
        });
    }
}

impl DrawSurface for CanvasSurface {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn fill_rect(&mut self, min: Vec2, extent: Vec2, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx
            .fill_rect(min.x as f64, min.y as f64, extent.x as f64, extent.y as f64);
    }

    fn stroke_rect(&mut self, min: Vec2, extent: Vec2, color: Color, line_width: f32) {
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.set_line_width(line_width as f64);
        self.ctx
            .stroke_rect(min.x as f64, min.y as f64, extent.x as f64, extent.y as f64);
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Color) {
        if points.len() < 3 {
            return;
        }
        self.trace_polygon(points);
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill();
    }

    fn stroke_polygon(&mut self, points: &[Vec2], color: Color, line_width: f32) {
        if points.len() < 2 {
            return;
        }
        self.trace_polygon(points);
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.set_line_width(line_width as f64);
        self.ctx.stroke();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.ctx.begin_path();
        let _ = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            0.0,
            std::f64::consts::TAU,
        );
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill();
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, style: &TextStyle, color: Color) {
        self.apply_text_style(style);
        self.ctx.set_fill_style_str(&color.to_css());
        let _ = self.ctx.fill_text(text, pos.x as f64, pos.y as f64);
    }

    fn text_width(&mut self, text: &str, style: &TextStyle) -> f32 {
        self.apply_text_style(style);
        self.ctx
            .measure_text(text)
            .map(|metrics| metrics.width() as f32)
            .unwrap_or(0.0)
    }

    fn set_glow(&mut self, color: Color, blur: f32) {
        self.ctx.set_shadow_color(&color.to_css());
        self.ctx.set_shadow_blur(blur as f64);
    }

    fn clear_glow(&mut self) {
        self.ctx.set_shadow_blur(0.0);
    }
}
