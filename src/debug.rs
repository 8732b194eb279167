//! Optional debug panel: one range slider per tunable.
//!
//! Sliders write into the shared [`ParamOverrides`] table only; the frame
//! updaters read that table, so the panel never touches scene objects.

use crate::constants::{DEBUG_PANEL_ID, DEBUG_PANEL_STYLE};
use crate::dom;
use lumen_core::{ParamOverrides, ParamSpec, PARAM_SPECS};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

fn js_err(e: wasm_bindgen::JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

pub fn mount(
    document: &web::Document,
    overrides: Rc<RefCell<ParamOverrides>>,
) -> anyhow::Result<()> {
    if document.get_element_by_id(DEBUG_PANEL_ID).is_some() {
        return Ok(());
    }
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("no <body> for debug panel"))?;
    let panel = document.create_element("div").map_err(js_err)?;
    panel.set_id(DEBUG_PANEL_ID);
    panel.set_attribute("style", DEBUG_PANEL_STYLE).map_err(js_err)?;

    let mut current_group = "";
    for spec in PARAM_SPECS.iter() {
        if spec.group != current_group {
            current_group = spec.group;
            let heading = document.create_element("div").map_err(js_err)?;
            heading.set_text_content(Some(spec.group));
            heading
                .set_attribute("style", "margin-top:6px;font-weight:600;")
                .map_err(js_err)?;
            panel.append_child(&heading).map_err(js_err)?;
        }
        let row = slider_row(document, spec, overrides.clone())?;
        panel.append_child(&row).map_err(js_err)?;
    }

    body.append_child(&panel).map_err(js_err)?;
    log::info!("[debug] panel mounted with {} sliders", PARAM_SPECS.len());
    Ok(())
}

fn slider_row(
    document: &web::Document,
    spec: &'static ParamSpec,
    overrides: Rc<RefCell<ParamOverrides>>,
) -> anyhow::Result<web::Element> {
    let row = document.create_element("label").map_err(js_err)?;
    row.set_attribute("style", "display:flex;gap:6px;align-items:center;")
        .map_err(js_err)?;

    let name = document.create_element("span").map_err(js_err)?;
    name.set_text_content(Some(spec.label));

    let input = document
        .create_element("input")
        .map_err(js_err)?
        .dyn_into::<web::HtmlInputElement>()
        .map_err(|_| anyhow::anyhow!("<input> is not an HtmlInputElement"))?;
    input.set_type("range");
    input.set_min(&spec.min.to_string());
    input.set_max(&spec.max.to_string());
    input.set_step(&spec.step.to_string());
    let initial = overrides.borrow().get(spec.key);
    input.set_value(&initial.to_string());
    input.set_attribute("data-param", spec.id).map_err(js_err)?;

    let readout = document.create_element("span").map_err(js_err)?;
    readout.set_text_content(Some(&format!("{initial:.2}")));

    let input_for_event = input.clone();
    let readout_for_event = readout.clone();
    dom::add_listener(&input, "input", move |_ev: web::Event| {
        let raw = input_for_event.value();
        match overrides.borrow_mut().set_from_str(spec.id, &raw) {
            Ok(stored) => {
                readout_for_event.set_text_content(Some(&format!("{stored:.2}")));
                log::debug!("[debug] {} = {:.2}", spec.id, stored);
            }
            Err(e) => log::warn!("[debug] {e}"),
        }
    });

    row.append_child(&name).map_err(js_err)?;
    row.append_child(&input).map_err(js_err)?;
    row.append_child(&readout).map_err(js_err)?;
    Ok(row)
}

/// Remove the panel if present. Stored overrides stay in effect.
pub fn unmount() {
    if let Some(el) = dom::window_document().and_then(|d| d.get_element_by_id(DEBUG_PANEL_ID)) {
        el.remove();
    }
}
