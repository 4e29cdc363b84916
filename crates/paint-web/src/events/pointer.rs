use crate::dom;
use crate::handles::AppHandles;
use crate::input_map::client_to_canvas;
use glam::Vec2;
use web_sys as web;

#[inline]
pub fn pointer_canvas_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    client_to_canvas(
        Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
        [
            rect.left() as f32,
            rect.top() as f32,
            rect.width() as f32,
            rect.height() as f32,
        ],
        Vec2::new(canvas.width() as f32, canvas.height() as f32),
    )
}

pub fn wire_pointer(app: &AppHandles) {
    let app = app.clone();
    let canvas = app.canvas.clone();
    dom::add_listener(&canvas, "mousedown", move |ev: web::MouseEvent| {
        app.audio.resume();
        let pos = pointer_canvas_px(&ev, &app.canvas);
        let note = app.painter.borrow_mut().handle_click(pos);
        if let Some(note) = note {
            log::info!("[click] palette note {}", note.midi);
            app.audio.play_note(&note);
        }
    });
}
