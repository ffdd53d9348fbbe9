/// A scrollable element owned by the host UI (e.g. a DOM node with overflow).
///
/// The restorer reads and writes the element only through this trait, so any UI layer can back
/// it: a DOM wrapper, a TUI viewport, or an in-memory model in tests.
pub trait ScrollElement {
    /// The element's identifier, if it has one.
    ///
    /// An empty string is treated the same as `None`.
    fn id(&self) -> Option<&str>;

    fn scroll_offset(&self) -> u64;

    fn set_scroll_offset(&mut self, offset: u64);

    /// Maximum meaningful scroll offset (analogous to content height).
    ///
    /// This grows while the element's content is still loading, which is why restoration polls it.
    fn scroll_extent(&self) -> u64;
}
