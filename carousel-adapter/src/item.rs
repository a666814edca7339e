use core::fmt;

use crate::Node;

/// One carousel entry: its position in the container and the host handles bound to it.
pub struct Item<N: Node> {
    index: usize,
    clickable: Option<N::Clickable>,
    displayable: Option<N::Displayable>,
}

impl<N: Node> Item<N> {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            clickable: None,
            displayable: None,
        }
    }

    /// Captures the clickable and displayable handles of `node`.
    ///
    /// Calling this again re-reads both handles. A handle the node lacks is left empty.
    pub fn initialize(&mut self, node: &N) {
        self.clickable = node.clickable();
        self.displayable = node.displayable();
        if self.clickable.is_none() || self.displayable.is_none() {
            cdebug!(
                index = self.index,
                clickable = self.clickable.is_some(),
                displayable = self.displayable.is_some(),
                "Item::initialize: node is missing a handle"
            );
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn clickable(&self) -> Option<&N::Clickable> {
        self.clickable.as_ref()
    }

    pub fn clickable_mut(&mut self) -> Option<&mut N::Clickable> {
        self.clickable.as_mut()
    }

    pub fn displayable(&self) -> Option<&N::Displayable> {
        self.displayable.as_ref()
    }

    pub fn displayable_mut(&mut self) -> Option<&mut N::Displayable> {
        self.displayable.as_mut()
    }
}

impl<N: Node> fmt::Debug for Item<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Item")
            .field("index", &self.index)
            .field("clickable", &self.clickable.is_some())
            .field("displayable", &self.displayable.is_some())
            .finish()
    }
}
