use crate::core::backing_size;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn canvas_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("#{} is not a canvas: {:?}", id, e)))
}

/// Keep the canvas backing store at CSS size * devicePixelRatio. Forces a
/// layout, so call it on mount and resize only. Returns whether it changed.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> bool {
    let Some(w) = web::window() else {
        return false;
    };
    let rect = canvas.get_bounding_client_rect();
    let (w_px, h_px) = backing_size(rect.width(), rect.height(), w.device_pixel_ratio());
    let changed = canvas.width() != w_px || canvas.height() != h_px;
    if canvas.width() != w_px {
        canvas.set_width(w_px);
    }
    if canvas.height() != h_px {
        canvas.set_height(h_px);
    }
    changed
}

#[inline]
fn set_shown(el: &web::Element, shown: bool) {
    let cl = el.class_list();
    if shown {
        _ = cl.remove_1("hidden");
        _ = el.remove_attribute("hidden");
    } else {
        _ = cl.add_1("hidden");
        // the attribute works even without the page's CSS class
        _ = el.set_attribute("hidden", "");
    }
}

/// Swap the live canvas for the static placeholder.
pub fn show_fallback(document: &web::Document, canvas_id: &str, fallback_id: &str) {
    if let Some(el) = document.get_element_by_id(canvas_id) {
        set_shown(&el, false);
    }
    if let Some(el) = document.get_element_by_id(fallback_id) {
        set_shown(&el, true);
    }
}

/// Show the live canvas and hide the placeholder.
pub fn show_canvas(document: &web::Document, canvas_id: &str, fallback_id: &str) {
    if let Some(el) = document.get_element_by_id(fallback_id) {
        set_shown(&el, false);
    }
    if let Some(el) = document.get_element_by_id(canvas_id) {
        set_shown(&el, true);
    }
}
