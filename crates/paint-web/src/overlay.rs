use crate::dom;
use paint_core::{FrameReport, OutputState, Painter, BRUSH_SIZE_DEFAULT, BRUSH_SIZE_MAX, BRUSH_SIZE_MIN};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

const INSTRUCTIONS_ID: &str = "debug-instructions";
const INSTRUCTIONS_HIDDEN: &str = "hidden-instructions";
const PANEL_ID: &str = "arduino-panel";
const LED_ID: &str = "led-indicator";
const BUZZER_ID: &str = "buzzer-indicator";
const POT_ID: &str = "brush-size-pot";
const JOYSTICK_STATUS_ID: &str = "joystick-status";
const BUTTON_STATUS_ID: &str = "button-status";

const INSTRUCTIONS_HTML: &str = "DEVELOPER MODE INSTRUCTIONS:<br>\
    - Use arrow keys to simulate Arduino joystick<br>\
    - Press SPACEBAR to simulate Arduino button press<br>\
    - Press \"P\" to adjust brush size (simulates potentiometer)<br>\
    - Press \"D\" to toggle this debug panel<br>\
    - Press C to clear the canvas<br>\
    - Press S to save your artwork";

/// Create the developer instructions and the hardware panel unless the page
/// already provides them.
pub fn build(document: &web::Document) {
    let Some(body) = document.body() else {
        return;
    };
    if document.get_element_by_id(INSTRUCTIONS_ID).is_none() {
        if let Some(el) = dom::ensure_element(document, &body, "div", INSTRUCTIONS_ID) {
            el.set_inner_html(INSTRUCTIONS_HTML);
            dom::set_class(&el, INSTRUCTIONS_HIDDEN, true);
        }
    }
    if document.get_element_by_id(PANEL_ID).is_some() {
        return;
    }
    let Some(panel) = dom::ensure_element(document, &body, "div", PANEL_ID) else {
        return;
    };
    dom::set_class(&panel, "arduino-panel", true);
    let _ = panel.set_attribute("style", "display:none");

    for (label, id, class) in [("LED:", LED_ID, "led"), ("BUZZER:", BUZZER_ID, "buzzer")] {
        let Ok(row) = document.create_element("div") else {
            continue;
        };
        if let Ok(label_el) = document.create_element("div") {
            label_el.set_text_content(Some(label));
            let _ = label_el.set_attribute("style", "display:inline-block;width:50px");
            let _ = row.append_child(&label_el);
        }
        let _ = panel.append_child(&row);
        if let Some(indicator) = dom::ensure_element(document, &row, "div", id) {
            dom::set_class(&indicator, class, true);
        }
    }

    if let Ok(label) = document.create_element("div") {
        label.set_text_content(Some("Brush Size (Potentiometer)"));
        dom::set_class(&label, "pot-label", true);
        let _ = panel.append_child(&label);
    }
    if let Some(pot) = dom::ensure_element(document, &panel, "input", POT_ID) {
        dom::set_class(&pot, "pot-slider", true);
        let _ = pot.set_attribute("type", "range");
        let _ = pot.set_attribute("min", &BRUSH_SIZE_MIN.to_string());
        let _ = pot.set_attribute("max", &BRUSH_SIZE_MAX.to_string());
        let _ = pot.set_attribute("step", "1");
        let _ = pot.set_attribute("value", &BRUSH_SIZE_DEFAULT.to_string());
    }
    if let Ok(label) = document.create_element("div") {
        label.set_text_content(Some("Arduino Controls"));
        dom::set_class(&label, "controls-label", true);
        let _ = panel.append_child(&label);
    }
    if let Some(el) = dom::ensure_element(document, &panel, "div", JOYSTICK_STATUS_ID) {
        el.set_text_content(Some("Joystick: X=0, Y=0"));
    }
    if let Some(el) = dom::ensure_element(document, &panel, "div", BUTTON_STATUS_ID) {
        el.set_text_content(Some("Button: Not Pressed"));
    }
}

#[inline]
pub fn set_debug_instructions(document: &web::Document, visible: bool) {
    if let Some(el) = document.get_element_by_id(INSTRUCTIONS_ID) {
        dom::set_class(&el, INSTRUCTIONS_HIDDEN, !visible);
    }
}

#[inline]
pub fn show_hardware_panel(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(PANEL_ID) {
        let _ = el.set_attribute("style", "display:block");
    }
}

/// Bind the potentiometer slider to the brush size.
pub fn wire_brush_slider(document: &web::Document, painter: Rc<RefCell<Painter>>) {
    let Some(el) = document.get_element_by_id(POT_ID) else {
        return;
    };
    let Ok(input) = el.dyn_into::<web::HtmlInputElement>() else {
        return;
    };
    let input_for_cb = input.clone();
    dom::add_listener(&input, "input", move |_: web::Event| {
        if let Ok(size) = input_for_cb.value().parse::<f32>() {
            painter.borrow_mut().set_brush_size(size);
        }
    });
}

/// Mirrors of the simulated outputs and controls, touched only on change.
pub struct HardwarePanel {
    document: web::Document,
    led: Option<web::Element>,
    buzzer: Option<web::Element>,
    last_outputs: Option<OutputState>,
    last_button: &'static str,
}

impl HardwarePanel {
    pub fn new(document: &web::Document) -> Self {
        Self {
            document: document.clone(),
            led: document.get_element_by_id(LED_ID),
            buzzer: document.get_element_by_id(BUZZER_ID),
            last_outputs: None,
            last_button: "",
        }
    }

    pub fn update(&mut self, report: &FrameReport) {
        if self.last_outputs != Some(report.outputs) {
            if let Some(led) = &self.led {
                dom::set_class(led, "led-on", report.outputs.led_on);
            }
            if let Some(buzzer) = &self.buzzer {
                dom::set_class(buzzer, "buzzer-on", report.outputs.buzzer_on);
            }
            self.last_outputs = Some(report.outputs);
        }
        if let Some(text) = report.joystick_status() {
            dom::set_text(&self.document, JOYSTICK_STATUS_ID, &text);
        }
        let button = report.button_status();
        if button != self.last_button {
            dom::set_text(&self.document, BUTTON_STATUS_ID, button);
            self.last_button = button;
        }
    }
}
