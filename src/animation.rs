/// Handle of one requested animation frame.
///
/// The host hands the ticket back to [`crate::Session::on_frame`] on its next redraw. Tickets of
/// cancelled or superseded requests are stale and get ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameTicket(u64);

/// Frame-driven repeating task that advances a clustering one step per redraw.
///
/// At most one frame is pending at a time. Cancelling is idempotent and invalidates the pending ticket,
/// so a frame that fires after a reset can never touch the new state.
#[derive(Debug, Default)]
pub struct AnimationLoop {
    generation: u64,
    pending: Option<FrameTicket>,
}
impl AnimationLoop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending(&self) -> Option<FrameTicket> {
        self.pending
    }

    /// Request the next frame. Any previously pending ticket becomes stale.
    pub fn request(&mut self) -> FrameTicket {
        self.generation += 1;
        let ticket = FrameTicket(self.generation);
        self.pending = Some(ticket);
        ticket
    }

    /// Consume a fired frame.
    ///
    /// ## Returns
    /// **true** if **ticket** is the pending one; the loop is idle afterwards until the next [`AnimationLoop::request`].
    pub fn accept(&mut self, ticket: FrameTicket) -> bool {
        if self.pending == Some(ticket) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    /// Stop the loop.
    ///
    /// ## Returns
    /// **true** if a frame was pending. Cancelling an idle loop does nothing.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }
}
