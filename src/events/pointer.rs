use crate::dom;
use glam::Vec2;
use lumen_core::{pointer_offset, InputQueue};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Queue the pointer offset from the viewport centre on every `mousemove`.
///
/// The viewport is measured per event so the centre follows window resizes.
pub fn wire_pointer_move(document: &web::Document, queue: Rc<RefCell<InputQueue>>) {
    dom::add_listener(document, "mousemove", move |ev: web::MouseEvent| {
        let Some(window) = web::window() else {
            return;
        };
        let client = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        let sample = pointer_offset(client, dom::viewport_size(&window));
        queue.borrow_mut().push_pointer(sample);
    });
}
