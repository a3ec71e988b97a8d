/// Identifies one mount attempt. Only the newest ticket may install its
/// scene; anything older was superseded by a later mount or an unmount.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MountTicket(u64);

/// Holds the single mounted scene plus a generation counter so async mounts
/// that finish after an `unmount` (or a newer `mount`) are discarded.
///
/// Returned handles are for the caller to drop outside any borrow of the slot.
#[derive(Debug)]
pub struct MountSlot<H> {
    generation: u64,
    current: Option<H>,
}

impl<H> Default for MountSlot<H> {
    fn default() -> Self {
        Self {
            generation: 0,
            current: None,
        }
    }
}

impl<H> MountSlot<H> {
    pub const fn new() -> Self {
        Self {
            generation: 0,
            current: None,
        }
    }

    /// Start a mount: invalidate older attempts and hand back the scene
    /// that was mounted so far.
    pub fn begin(&mut self) -> (MountTicket, Option<H>) {
        self.generation += 1;
        (MountTicket(self.generation), self.current.take())
    }

    /// Unmount: invalidate in-flight attempts and take the mounted scene.
    pub fn clear(&mut self) -> Option<H> {
        self.generation += 1;
        self.current.take()
    }

    pub fn is_current(&self, ticket: MountTicket) -> bool {
        ticket.0 == self.generation
    }

    /// Install `handle` if `ticket` is still current. `Ok` carries any scene
    /// it replaced; `Err` hands the stale handle back for teardown.
    pub fn finish(&mut self, ticket: MountTicket, handle: H) -> Result<Option<H>, H> {
        if !self.is_current(ticket) {
            return Err(handle);
        }
        Ok(self.current.replace(handle))
    }

    pub fn is_mounted(&self) -> bool {
        self.current.is_some()
    }
}
