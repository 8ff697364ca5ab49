//! Interactive guide offset
//!
//! The operator drags on a downsized preview to slide the guides sideways
//! until they match a printed sample. The session owns the offset; pointer
//! events are fed in one at a time and each accepted event yields the new
//! preview guides plus the equivalent full-resolution offset. When the
//! window closes the caller takes the last offset with [`InteractiveOffsetSession::finish`].

use crate::hexagon::hexagon_guides;
use crate::types::{DrawableArea, GuideError, Line, Margin, Result, Size};

/// Pointer button state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging,
}

/// A pointer event in preview coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Press { x: f64 },
    Drag { x: f64 },
    Release,
}

/// Result of an accepted press or drag
#[derive(Debug, Clone, PartialEq)]
pub struct OffsetUpdate {
    /// Offset in preview pixels
    pub preview_offset: f64,
    /// The same offset in full-resolution pixels
    pub offset: f64,
    /// Guides recomputed for the preview
    pub guides: [Line; 2],
}

type OffsetListener = Box<dyn FnMut(f64)>;

/// Size of a preview whose longest edge is at most `max_edge`.
///
/// Aspect ratio is kept; images already small enough are shown as is.
pub fn preview_size(full: Size, max_edge: u32) -> Size {
    let longest = full.width.max(full.height);
    if longest <= max_edge || max_edge == 0 {
        return full;
    }
    let factor = max_edge as f64 / longest as f64;
    Size::new(
        ((full.width as f64 * factor).round() as u32).max(1),
        ((full.height as f64 * factor).round() as u32).max(1),
    )
}

pub struct InteractiveOffsetSession {
    preview_area: DrawableArea,
    /// Full-resolution pixels per preview pixel
    resize_factor: f64,
    state: DragState,
    pointer_x: f64,
    offset: f64,
    listener: Option<OffsetListener>,
}

impl InteractiveOffsetSession {
    /// Start a session for an image of size `full` with cutting margin `margin`,
    /// previewed at `preview` size
    pub fn new(full: Size, margin: Margin, preview: Size) -> Result<Self> {
        full.ensure_positive("image")?;
        preview.ensure_positive("preview")?;
        // Validates the margin against the full image
        DrawableArea::new(full, margin)?;

        let resize_factor = full.width as f64 / preview.width as f64;
        let preview_area = DrawableArea::new(preview, margin.scaled_down(resize_factor))
            .map_err(|e| {
                GuideError::InvalidGeometry(format!("preview {} is too small: {}", preview, e))
            })?;

        Ok(Self {
            preview_area,
            resize_factor,
            state: DragState::Idle,
            pointer_x: preview.width as f64 / 2.0,
            offset: 0.0,
            listener: None,
        })
    }

    /// Register a callback receiving every full-resolution offset update
    pub fn on_offset(&mut self, listener: impl FnMut(f64) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    /// Last emitted offset in full-resolution pixels
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Last pointer x in preview pixels; starts at the preview center
    pub fn pointer_x(&self) -> f64 {
        self.pointer_x
    }

    pub fn resize_factor(&self) -> f64 {
        self.resize_factor
    }

    pub fn preview_area(&self) -> DrawableArea {
        self.preview_area
    }

    /// Guides for the preview at the current offset
    pub fn preview_guides(&self) -> Result<[Line; 2]> {
        hexagon_guides(&self.preview_area, self.offset / self.resize_factor)
    }

    /// Feed one pointer event.
    ///
    /// Press always starts dragging and emits an update. Drag emits only
    /// while dragging. Release returns to idle and emits nothing.
    pub fn handle(&mut self, event: PointerEvent) -> Result<Option<OffsetUpdate>> {
        match (self.state, event) {
            (_, PointerEvent::Press { x }) => {
                self.state = DragState::Dragging;
                self.move_to(x).map(Some)
            }
            (DragState::Dragging, PointerEvent::Drag { x }) => self.move_to(x).map(Some),
            (DragState::Idle, PointerEvent::Drag { .. }) => Ok(None),
            (_, PointerEvent::Release) => {
                if self.state == DragState::Dragging {
                    log::debug!("drag released at offset {:.1}", self.offset);
                }
                self.state = DragState::Idle;
                Ok(None)
            }
        }
    }

    pub fn press(&mut self, x: f64) -> Result<Option<OffsetUpdate>> {
        self.handle(PointerEvent::Press { x })
    }

    pub fn drag(&mut self, x: f64) -> Result<Option<OffsetUpdate>> {
        self.handle(PointerEvent::Drag { x })
    }

    pub fn release(&mut self) -> Result<Option<OffsetUpdate>> {
        self.handle(PointerEvent::Release)
    }

    /// End the session and return the authoritative offset
    pub fn finish(self) -> f64 {
        log::info!("offset session finished at {:.1} px", self.offset);
        self.offset
    }

    fn move_to(&mut self, x: f64) -> Result<OffsetUpdate> {
        let preview_offset = x - self.preview_area.outer().width as f64 / 2.0;
        let guides = hexagon_guides(&self.preview_area, preview_offset)?;
        let offset = preview_offset * self.resize_factor;

        self.pointer_x = x;
        self.offset = offset;
        if let Some(listener) = self.listener.as_mut() {
            listener(offset);
        }

        Ok(OffsetUpdate {
            preview_offset,
            offset,
            guides,
        })
    }
}

impl std::fmt::Debug for InteractiveOffsetSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InteractiveOffsetSession")
            .field("preview_area", &self.preview_area)
            .field("resize_factor", &self.resize_factor)
            .field("state", &self.state)
            .field("pointer_x", &self.pointer_x)
            .field("offset", &self.offset)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn session() -> InteractiveOffsetSession {
        InteractiveOffsetSession::new(Size::new(3000, 2000), Margin::uniform(40), Size::new(750, 500))
            .unwrap()
    }

    #[test]
    fn test_initial_state() {
        let s = session();
        assert_eq!(s.state(), DragState::Idle);
        assert_eq!(s.offset(), 0.0);
        assert_eq!(s.pointer_x(), 375.0);
        assert_eq!(s.resize_factor(), 4.0);
        assert_eq!(s.preview_area().margin(), Margin::uniform(10));
    }

    #[test]
    fn test_press_drag_release() {
        let mut s = session();
        assert!(s.drag(500.0).unwrap().is_none());

        let update = s.press(400.0).unwrap().unwrap();
        assert_eq!(s.state(), DragState::Dragging);
        assert_eq!(update.preview_offset, 25.0);
        assert_eq!(update.offset, 100.0);

        let update = s.drag(300.0).unwrap().unwrap();
        assert_eq!(update.offset, -300.0);

        assert!(s.release().unwrap().is_none());
        assert_eq!(s.state(), DragState::Idle);
        assert!(s.drag(700.0).unwrap().is_none());
        assert_eq!(s.finish(), -300.0);
    }

    #[test]
    fn test_update_guides_match_preview_geometry() {
        let mut s = session();
        let update = s.press(400.0).unwrap().unwrap();
        let expected = hexagon_guides(&s.preview_area(), 25.0).unwrap();
        assert_eq!(update.guides, expected);
        assert_eq!(s.preview_guides().unwrap(), expected);
    }

    #[test]
    fn test_listener_receives_full_resolution_offsets() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut s = session();
        s.on_offset(move |o| sink.borrow_mut().push(o));
        s.press(375.0).unwrap();
        s.drag(376.0).unwrap();
        s.drag(374.5).unwrap();
        s.release().unwrap();
        assert_eq!(*seen.borrow(), vec![0.0, 4.0, -2.0]);
    }

    #[test]
    fn test_preview_size() {
        assert_eq!(preview_size(Size::new(3000, 2000), 1000), Size::new(1000, 667));
        assert_eq!(preview_size(Size::new(1905, 2700), 1000), Size::new(706, 1000));
        assert_eq!(preview_size(Size::new(800, 600), 1000), Size::new(800, 600));
    }

    #[test]
    fn test_margin_must_fit() {
        assert!(
            InteractiveOffsetSession::new(Size::new(100, 100), Margin::uniform(50), Size::new(50, 50))
                .is_err()
        );
    }
}
