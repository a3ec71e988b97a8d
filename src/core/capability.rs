/// What the browser probe managed to learn about hardware rendering.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProbeReport {
    pub context_created: bool,
    /// Unmasked renderer string, when the debug extension exposed it.
    pub renderer: Option<String>,
}

/// Renderer names that mean the "GPU" context is a CPU rasterizer.
pub const SOFTWARE_RENDERERS: &[&str] = &["SwiftShader", "llvmpipe"];

#[inline]
pub fn is_software_renderer(renderer: &str) -> bool {
    SOFTWARE_RENDERERS.iter().any(|s| renderer.contains(s))
}

/// Reduce a probe result to the availability flag. A failed probe, a
/// missing context or a software renderer all mean "unavailable".
pub fn hardware_acceleration_available<E>(probe: Result<ProbeReport, E>) -> bool {
    match probe {
        Ok(report) => {
            report.context_created
                && !report
                    .renderer
                    .as_deref()
                    .map(is_software_renderer)
                    .unwrap_or(false)
        }
        Err(_) => false,
    }
}

/// A throwaway rendering context opened only to inspect the renderer.
pub trait ProbeContext {
    type Error;

    /// Unmasked renderer string, or `None` when the debug info is hidden.
    fn renderer(&self) -> Result<Option<String>, Self::Error>;

    /// Hand the context back to the browser now rather than at GC.
    fn release(&self);
}

/// Read the renderer from `context` (if one was created) and release it,
/// whether or not the read succeeded.
pub fn inspect_context<C: ProbeContext>(context: Option<C>) -> Result<ProbeReport, C::Error> {
    let Some(ctx) = context else {
        return Ok(ProbeReport::default());
    };
    let renderer = ctx.renderer();
    ctx.release();
    Ok(ProbeReport {
        context_created: true,
        renderer: renderer?,
    })
}
