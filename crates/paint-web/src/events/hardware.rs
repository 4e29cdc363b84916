use crate::dom;
use crate::handles::AppHandles;
use paint_core::InputMode;
use web_sys as web;

/// Readings from a controller board arrive as `hardware-line` custom events
/// (`detail` = one text line), dispatched on `window` by page script that
/// owns the serial connection. `hardware-mode` (`detail` = "hardware" or
/// "keyboard") switches the active input source.
pub fn wire_hardware_bridge(app: &AppHandles) {
    let Some(window) = web::window() else {
        return;
    };

    let app_line = app.clone();
    dom::add_listener(&window, "hardware-line", move |ev: web::CustomEvent| {
        let Some(line) = ev.detail().as_string() else {
            return;
        };
        if let Err(e) = app_line.painter.borrow_mut().push_hardware_line(&line) {
            log::warn!("[hardware] ignored line {:?}: {}", line, e);
        }
    });

    let app_mode = app.clone();
    dom::add_listener(&window, "hardware-mode", move |ev: web::CustomEvent| {
        let mode = match ev.detail().as_string().as_deref() {
            Some("hardware") => InputMode::Hardware,
            Some("keyboard") => InputMode::Keyboard,
            other => {
                log::warn!("[hardware] unknown input mode {:?}", other);
                return;
            }
        };
        app_mode.painter.borrow_mut().set_input_mode(mode);
    });
}
