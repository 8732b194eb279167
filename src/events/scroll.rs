use crate::dom;
use lumen_core::InputQueue;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Queue the vertical scroll offset on every `scroll`, plus the offset the
/// page was loaded at.
pub fn wire_scroll(window: &web::Window, queue: Rc<RefCell<InputQueue>>) {
    queue.borrow_mut().push_scroll(dom::scroll_y(window));
    dom::add_listener(window, "scroll", move |_ev: web::Event| {
        if let Some(w) = web::window() {
            queue.borrow_mut().push_scroll(dom::scroll_y(&w));
        }
    });
}
