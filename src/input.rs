use glam::Vec2;
use web_sys as web;

#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    css_to_backing_px(
        Vec2::new(
            ev.client_x() as f32 - rect.left() as f32,
            ev.client_y() as f32 - rect.top() as f32,
        ),
        Vec2::new(rect.width() as f32, rect.height() as f32),
        Vec2::new(canvas.width() as f32, canvas.height() as f32),
    )
}

/// Scale a CSS-pixel offset inside the canvas box to backing-store pixels.
///
/// A collapsed box (zero width or height) maps to the origin.
#[inline]
pub fn css_to_backing_px(css: Vec2, css_size: Vec2, backing_size: Vec2) -> Vec2 {
    if css_size.x > 0.0 && css_size.y > 0.0 {
        css / css_size * backing_size
    } else {
        Vec2::ZERO
    }
}
