use alloc::string::String;

use scroll_restore::ScrollElement;

/// An in-memory scroll container.
///
/// Useful for headless hosts and tests: the host grows `extent` as content loads and reads
/// `offset` back after restoration. Writes are clamped to the extent, like a DOM scroll container.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MemoryElement {
    pub id: Option<String>,
    pub offset: u64,
    pub extent: u64,
}

impl MemoryElement {
    pub fn new(id: Option<&str>) -> Self {
        Self {
            id: id.map(String::from),
            ..Self::default()
        }
    }

    pub fn with_extent(mut self, extent: u64) -> Self {
        self.extent = extent;
        self
    }

    /// Simulates content loading (or unloading). The offset is clamped to the new extent.
    pub fn set_extent(&mut self, extent: u64) {
        self.extent = extent;
        self.offset = self.offset.min(extent);
    }

    /// Simulates a user scroll.
    pub fn scroll_to(&mut self, offset: u64) {
        self.offset = offset.min(self.extent);
    }
}

impl ScrollElement for MemoryElement {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn scroll_offset(&self) -> u64 {
        self.offset
    }

    fn set_scroll_offset(&mut self, offset: u64) {
        self.scroll_to(offset);
    }

    fn scroll_extent(&self) -> u64 {
        self.extent
    }
}
