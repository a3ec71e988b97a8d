use crate::constants::{MAX_FRAME_DELTA_SEC, MAX_RENDER_FAILURES};
use crate::core::{
    bake, build_developer, hardware_acceleration_available, inspect_context, CharacterRig,
    FrameClock, Placement, ProbeContext, ProbeReport, RenderHealth, RigConfig, FIT_EXTENT,
    FIT_Y_BIAS,
};
use crate::events::{self, PointerListeners};
use crate::frame::{self, FrameContext, FrameLoop};
use crate::{dom, input};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

const UNMASKED_RENDERER_WEBGL: u32 = 0x9246;

/// Best-effort WebGL probe on a throwaway canvas. Never throws; every
/// failure reads as "unavailable".
pub fn probe_hardware_acceleration(document: &web::Document) -> bool {
    let available = hardware_acceleration_available(probe(document));
    log::info!("[probe] hardware acceleration available: {}", available);
    available
}

/// The probe's throwaway context, WebGL2 when available.
enum ProbeGl {
    Gl2(web::WebGl2RenderingContext),
    Gl1(web::WebGlRenderingContext),
}

impl ProbeGl {
    fn extension(&self, name: &str) -> Result<Option<js_sys::Object>, JsValue> {
        match self {
            ProbeGl::Gl2(gl) => gl.get_extension(name),
            ProbeGl::Gl1(gl) => gl.get_extension(name),
        }
    }
}

impl ProbeContext for ProbeGl {
    type Error = JsValue;

    fn renderer(&self) -> Result<Option<String>, JsValue> {
        if self.extension("WEBGL_debug_renderer_info")?.is_none() {
            return Ok(None);
        }
        let value = match self {
            ProbeGl::Gl2(gl) => gl.get_parameter(UNMASKED_RENDERER_WEBGL)?,
            ProbeGl::Gl1(gl) => gl.get_parameter(UNMASKED_RENDERER_WEBGL)?,
        };
        Ok(value.as_string())
    }

    fn release(&self) {
        // Extension objects are not real classes in every browser; skip the
        // instanceof check.
        if let Ok(Some(ext)) = self.extension("WEBGL_lose_context") {
            ext.unchecked_into::<web::WebglLoseContext>().lose_context();
        }
    }
}

fn probe(document: &web::Document) -> Result<ProbeReport, JsValue> {
    let canvas = document
        .create_element("canvas")?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(JsValue::from)?;

    let context = if let Some(ctx) = canvas.get_context("webgl2")? {
        Some(ProbeGl::Gl2(ctx.dyn_into()?))
    } else if let Some(ctx) = canvas.get_context("webgl")? {
        Some(ProbeGl::Gl1(ctx.dyn_into()?))
    } else {
        None
    };
    inspect_context(context)
}

/// A mounted developer scene. Live scenes own their listeners and frame
/// loop; dropping the handle tears both down.
pub struct SceneHandle {
    canvas_id: String,
    fallback_id: String,
    live: Option<(PointerListeners, FrameLoop)>,
}

impl SceneHandle {
    pub fn is_live(&self) -> bool {
        self.live.is_some()
    }

    pub fn unmount(mut self) {
        if self.live.take().is_some() {
            log::info!("[scene] unmounted #{}", self.canvas_id);
        }
    }
}

/// Mount the scene on `canvas_id`, or show `fallback_id` when the device
/// cannot render it. Always yields a handle; only document lookup fails.
pub async fn mount(canvas_id: &str, fallback_id: &str) -> anyhow::Result<SceneHandle> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let mut handle = SceneHandle {
        canvas_id: canvas_id.to_string(),
        fallback_id: fallback_id.to_string(),
        live: None,
    };

    if !probe_hardware_acceleration(&document) {
        log::warn!("[scene] no hardware rendering, showing static fallback");
        dom::show_fallback(&document, canvas_id, fallback_id);
        return Ok(handle);
    }

    // The canvas must be laid out before its backing size is measured.
    dom::show_canvas(&document, canvas_id, fallback_id);
    match start_live(&window, &document, canvas_id, fallback_id).await {
        Ok(live) => {
            handle.live = Some(live);
            log::info!("[scene] mounted on #{}", canvas_id);
        }
        Err(e) => {
            log::warn!("[scene] init failed ({:?}), showing static fallback", e);
            dom::show_fallback(&document, &handle.canvas_id, &handle.fallback_id);
        }
    }
    Ok(handle)
}

async fn start_live(
    window: &web::Window,
    document: &web::Document,
    canvas_id: &str,
    fallback_id: &str,
) -> anyhow::Result<(PointerListeners, FrameLoop)> {
    let canvas = dom::canvas_by_id(document, canvas_id)?;
    dom::sync_canvas_backing_size(&canvas);

    let mut rig = CharacterRig::new(RigConfig::default())?;
    let model = build_developer();
    let mesh = bake(&model.graph);
    log::info!(
        "[scene] model: nodes={} vertices={} indices={}",
        model.graph.len(),
        mesh.vertices.len(),
        mesh.indices.len()
    );
    let gpu = frame::init_gpu(&canvas, &mesh).await?;

    rig.activate(Placement::fit(&model.graph.bounds(), FIT_EXTENT, FIT_Y_BIAS));

    let viewport = input::viewport_size(window);
    let pointer = Rc::new(RefCell::new(crate::core::PointerTracker::new(
        viewport.x, viewport.y,
    )));
    let listeners = events::wire_pointer_tracking(window, &canvas, pointer.clone());

    let frame_ctx = Rc::new(RefCell::new(FrameContext {
        canvas,
        canvas_id: canvas_id.to_string(),
        fallback_id: fallback_id.to_string(),
        health: RenderHealth::new(MAX_RENDER_FAILURES),
        pointer,
        clock: FrameClock::new(MAX_FRAME_DELTA_SEC),
        rig,
        model,
        gpu,
    }));
    let frame_loop = frame::start_loop(frame_ctx);
    Ok((listeners, frame_loop))
}
