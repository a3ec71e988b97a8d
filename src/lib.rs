#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod host;
mod input;
mod render;

use crate::core::{MountSlot, MountTicket};
use constants::{DEFAULT_CANVAS_ID, DEFAULT_FALLBACK_ID};

thread_local! {
    // At most one developer scene per page.
    static MOUNTED: RefCell<MountSlot<host::SceneHandle>> = const { RefCell::new(MountSlot::new()) };
}

fn begin_mount() -> MountTicket {
    let (ticket, prev) = MOUNTED.with(|m| m.borrow_mut().begin());
    if let Some(prev) = prev {
        prev.unmount();
    }
    ticket
}

/// Install a finished mount. Returns `false` (after tearing it down) when an
/// `unmount` or a newer `mount` happened while it was initialising.
fn finish_mount(ticket: MountTicket, handle: host::SceneHandle) -> bool {
    let finished = MOUNTED.with(|m| m.borrow_mut().finish(ticket, handle));
    match finished {
        Ok(prev) => {
            if let Some(prev) = prev {
                prev.unmount();
            }
            true
        }
        Err(stale) => {
            log::info!("[scene] mount superseded during init, discarding");
            stale.unmount();
            false
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("dev-avatar starting");

    let has_canvas = dom::window_document()
        .and_then(|d| d.get_element_by_id(DEFAULT_CANVAS_ID))
        .is_some();
    if has_canvas {
        let ticket = begin_mount();
        spawn_local(async move {
            match host::mount(DEFAULT_CANVAS_ID, DEFAULT_FALLBACK_ID).await {
                Ok(handle) => {
                    finish_mount(ticket, handle);
                }
                Err(e) => log::error!("init error: {:?}", e),
            }
        });
    }
    Ok(())
}

/// Mount (or remount) the scene on the given elements. Resolves to `true`
/// when the live scene is running and `false` when the fallback is shown or
/// the mount was cancelled by a later `mount`/`unmount`.
#[wasm_bindgen]
pub async fn mount(canvas_id: String, fallback_id: String) -> Result<bool, JsValue> {
    let ticket = begin_mount();
    let handle = host::mount(&canvas_id, &fallback_id)
        .await
        .map_err(|e| JsValue::from(js_sys::Error::new(&format!("{:#}", e))))?;
    let live = handle.is_live();
    Ok(finish_mount(ticket, handle) && live)
}

/// Tear down the mounted scene: stop the frame loop, remove listeners and
/// drop all animation state. Mounts still initialising are cancelled.
#[wasm_bindgen]
pub fn unmount() {
    let prev = MOUNTED.with(|m| m.borrow_mut().clear());
    if let Some(prev) = prev {
        prev.unmount();
    }
}
