/// Platform-agnostic input events for one globe.
///
/// These are fed into a [`GlobeController`](crate::globe::GlobeController),
/// which turns drags into rotation updates.
///
/// # Example
///
/// ```
/// use orthoglobe::globe::GlobeController;
/// use orthoglobe::input::InputEvent;
///
/// let mut globe = GlobeController::default();
/// let _ = globe.handle_event(InputEvent::PointerDown { x: 10.0, y: 10.0 });
/// let redraw = globe.handle_event(InputEvent::PointerMoved { x: 30.0, y: 10.0 });
/// assert!(redraw);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button pressed; starts a drag gesture.
    PointerDown {
        /// Horizontal position in pixels.
        x: f64,
        /// Vertical position in pixels.
        y: f64,
    },
    /// Pointer moved to an absolute position.
    PointerMoved {
        /// Horizontal position in pixels.
        x: f64,
        /// Vertical position in pixels.
        y: f64,
    },
    /// Primary button released; ends the drag gesture.
    PointerUp,
    /// The square container around the globe changed size.
    Resized {
        /// New container width in pixels.
        width: f64,
    },
}
