use crate::core::{
    CharacterRig, DeveloperModel, FrameClock, PointerTracker, RenderFault, RenderHealth,
};
use crate::dom;
use crate::render;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub canvas: web::HtmlCanvasElement,
    pub canvas_id: String,
    pub fallback_id: String,
    pub health: RenderHealth,
    pub pointer: Rc<RefCell<PointerTracker>>,
    pub clock: FrameClock,
    pub rig: CharacterRig,
    pub model: DeveloperModel,
    pub gpu: render::GpuState,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameStatus {
    Continue,
    /// Rendering gave up; the fallback is showing and no more frames run.
    Halted,
}

impl FrameContext {
    pub fn frame(&mut self) -> FrameStatus {
        let time = self.clock.tick(Instant::now());
        // Coalesce: only the latest pointer snapshot matters this frame.
        let signal = self.pointer.borrow().signal();

        if let Some(pose) = self.rig.update(signal, time.delta) {
            self.model.apply(&pose);
        }

        // Backing size is synced by the resize listener.
        self.gpu
            .resize_if_needed(self.canvas.width(), self.canvas.height());
        let world = self.model.graph.world_matrices();
        let fault = match self.gpu.render(&world) {
            Ok(()) => {
                self.health.record_ok();
                return FrameStatus::Continue;
            }
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("[frame] surface lost, reconfiguring");
                self.gpu.reconfigure();
                RenderFault::Transient
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("render error: out of memory");
                RenderFault::Fatal
            }
            Err(e) => {
                log::warn!("[frame] render error: {:?}", e);
                RenderFault::Transient
            }
        };
        if !self.health.record_fault(fault) {
            return FrameStatus::Continue;
        }

        log::error!(
            "[frame] giving up after {} failed frame(s), showing static fallback",
            self.health.consecutive_failures()
        );
        if let Some(document) = dom::window_document() {
            dom::show_fallback(&document, &self.canvas_id, &self.fallback_id);
        }
        FrameStatus::Halted
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    mesh: &crate::core::MeshData,
) -> anyhow::Result<render::GpuState> {
    let gpu = render::GpuState::new(canvas, mesh).await?;
    log::info!("[gpu] ready: {}x{}", canvas.width(), canvas.height());
    Ok(gpu)
}

/// Handle to a running `requestAnimationFrame` loop. Dropping it cancels
/// the pending frame and releases the frame context.
pub struct FrameLoop {
    running: Rc<Cell<bool>>,
    raf_id: Rc<Cell<Option<i32>>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> FrameLoop {
    let running = Rc::new(Cell::new(true));
    let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

    let tick_clone = tick.clone();
    let running_tick = running.clone();
    let raf_tick = raf_id.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !running_tick.get() {
            return;
        }
        if frame_ctx.borrow_mut().frame() == FrameStatus::Halted {
            running_tick.set(false);
            raf_tick.set(None);
            return;
        }
        raf_tick.set(request_frame(&tick_clone));
    }) as Box<dyn FnMut()>));
    raf_id.set(request_frame(&tick));

    FrameLoop {
        running,
        raf_id,
        tick,
    }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) -> Option<i32> {
    let w = web::window()?;
    let slot = tick.borrow();
    let cb = slot.as_ref()?;
    w.request_animation_frame(cb.as_ref().unchecked_ref()).ok()
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.running.set(false);
        if let (Some(id), Some(w)) = (self.raf_id.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        // Break the closure's self-reference so the frame context is freed.
        self.tick.borrow_mut().take();
        log::debug!("[frame] loop stopped");
    }
}
