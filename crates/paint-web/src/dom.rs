use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn add_listener<E: JsCast + 'static>(
    target: &web::EventTarget,
    event: &str,
    mut handler: impl FnMut(E) + 'static,
) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    }) as Box<dyn FnMut(web::Event)>);
    let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Create `<tag id=...>` unless an element with that id already exists.
pub fn ensure_element(
    document: &web::Document,
    parent: &web::Element,
    tag: &str,
    id: &str,
) -> Option<web::Element> {
    if let Some(el) = document.get_element_by_id(id) {
        return Some(el);
    }
    let el = document.create_element(tag).ok()?;
    el.set_id(id);
    let _ = parent.append_child(&el);
    Some(el)
}

#[inline]
pub fn set_text(document: &web::Document, id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}

#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    let cl = el.class_list();
    if on {
        let _ = cl.add_1(class);
    } else {
        let _ = cl.remove_1(class);
    }
}
