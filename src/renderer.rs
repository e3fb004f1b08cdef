// Drawing surface used by both scenes. The scenes only ever clear, draw filled
// circles, outlined+filled triangles and a line of text, so that is all a
// surface has to provide. The browser implementation sits on a 2D canvas
// context; tests record the calls instead.

use crate::color::{Color, POINT_FALLBACK, POLYGON_STROKE};
use crate::geometry::Point;
use crate::overlay::Triangle;
use std::f64::consts::PI;
use vecmath::Vector2;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

pub const POINT_RADIUS: f64 = 2.0;

pub trait Surface {
    fn clear(&self, width: f64, height: f64);
    fn fill_circle(&self, center: Vector2<f64>, radius: f64, color: Color) -> Result<(), JsValue>;
    fn draw_triangle(&self, triangle: &Triangle, stroke: Color);
    fn fill_text(&self, text: &str, at: Vector2<f64>, font: &str, color: Color)
        -> Result<(), JsValue>;
}

#[allow(deprecated)]
impl Surface for CanvasRenderingContext2d {
    fn clear(&self, width: f64, height: f64) {
        self.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_circle(&self, center: Vector2<f64>, radius: f64, color: Color) -> Result<(), JsValue> {
        self.set_fill_style(&JsValue::from_str(&color.to_css()));
        self.begin_path();
        self.arc(center[0], center[1], radius, 0.0, 2.0 * PI)?;
        self.fill();
        Ok(())
    }

    fn draw_triangle(&self, triangle: &Triangle, stroke: Color) {
        let [a, b, c] = triangle.vertices;
        self.set_fill_style(&JsValue::from_str(&triangle.fill.to_css()));
        self.set_stroke_style(&JsValue::from_str(&stroke.to_css()));
        self.set_line_width(1.0);
        self.begin_path();
        self.move_to(a[0], a[1]);
        self.line_to(b[0], b[1]);
        self.line_to(c[0], c[1]);
        self.close_path();
        self.stroke();
        self.fill();
    }

    fn fill_text(
        &self,
        text: &str,
        at: Vector2<f64>,
        font: &str,
        color: Color,
    ) -> Result<(), JsValue> {
        self.set_font(font);
        self.set_fill_style(&JsValue::from_str(&color.to_css()));
        CanvasRenderingContext2d::fill_text(self, text, at[0], at[1])
    }
}

pub fn draw_point<S: Surface + ?Sized>(surface: &S, point: &Point) -> Result<(), JsValue> {
    surface.fill_circle(point.pos(), POINT_RADIUS, point.color.unwrap_or(POINT_FALLBACK))
}

pub fn draw_polygons<S: Surface + ?Sized>(surface: &S, triangles: &[Triangle]) {
    for triangle in triangles {
        surface.draw_triangle(triangle, POLYGON_STROKE);
    }
}
