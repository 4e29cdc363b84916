use crate::dom;
use crate::handles::AppHandles;
use crate::input_map::{key_for, on_repeat, RepeatAction};
use web_sys as web;

pub fn handle_keydown(ev: &web::KeyboardEvent, app: &AppHandles) {
    app.audio.resume();
    let Some(key) = key_for(&ev.key()) else {
        return;
    };
    if ev.repeat() {
        if on_repeat(key) == RepeatAction::Suppress {
            ev.prevent_default();
        }
        return;
    }
    let commands = app.painter.borrow_mut().handle_key_down(key);
    let event: &web::Event = ev;
    app.apply(commands, Some(event));
}

pub fn handle_keyup(ev: &web::KeyboardEvent, app: &AppHandles) {
    let Some(key) = key_for(&ev.key()) else {
        return;
    };
    let commands = app.painter.borrow_mut().handle_key_up(key);
    let event: &web::Event = ev;
    app.apply(commands, Some(event));
}

pub fn wire_keyboard(app: &AppHandles) {
    let Some(window) = web::window() else {
        return;
    };
    let app_down = app.clone();
    dom::add_listener(&window, "keydown", move |ev: web::KeyboardEvent| {
        handle_keydown(&ev, &app_down);
    });
    let app_up = app.clone();
    dom::add_listener(&window, "keyup", move |ev: web::KeyboardEvent| {
        handle_keyup(&ev, &app_up);
    });
    // A key released while the page is unfocused never sends keyup.
    let app_blur = app.clone();
    dom::add_listener(&window, "blur", move |_: web::Event| {
        app_blur.painter.borrow_mut().release_keys();
    });
}
