/// Folds everything one loop iteration asks of the terminal into at most
/// one resize and one draw.
#[derive(Debug, Default)]
pub struct FrameCoalescer {
    render_requested: bool,
    pending_resize: Option<(u16, u16)>,
    applied_size: Option<(u16, u16)>,
}

impl FrameCoalescer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request_render(&mut self) {
        self.render_requested = true;
    }

    /// Records a terminal size; only the last one per iteration is kept.
    pub fn note_resize(&mut self, width: u16, height: u16) {
        self.pending_resize = Some((width, height));
    }

    /// Size to apply this iteration, skipping a repeat of the size already
    /// applied. A resize always implies a redraw.
    pub fn take_resize(&mut self) -> Option<(u16, u16)> {
        let size = self.pending_resize.take()?;
        if self.applied_size == Some(size) {
            return None;
        }
        self.applied_size = Some(size);
        self.render_requested = true;
        Some(size)
    }

    /// Whether to draw this iteration; clears the request.
    pub fn take_render(&mut self) -> bool {
        std::mem::take(&mut self.render_requested)
    }
}
