use crate::api::types::RibbonId;
use crate::components::ribbon::Ribbon;

/// Simple ribbon storage using a flat Vec.
/// Designed for small collections (a handful of beams and trails, not
/// millions of entities).
pub struct RibbonScene {
    ribbons: Vec<Ribbon>,
}

impl RibbonScene {
    pub fn new() -> Self {
        Self {
            ribbons: Vec::with_capacity(16),
        }
    }

    /// Add a ribbon to the scene.
    pub fn spawn(&mut self, ribbon: Ribbon) {
        self.ribbons.push(ribbon);
    }

    /// Remove a ribbon by ID. Returns the removed ribbon if found.
    pub fn despawn(&mut self, id: RibbonId) -> Option<Ribbon> {
        if let Some(idx) = self.ribbons.iter().position(|r| r.id == id) {
            Some(self.ribbons.swap_remove(idx))
        } else {
            None
        }
    }

    /// Get a reference to a ribbon by ID.
    pub fn get(&self, id: RibbonId) -> Option<&Ribbon> {
        self.ribbons.iter().find(|r| r.id == id)
    }

    /// Get a mutable reference to a ribbon by ID.
    pub fn get_mut(&mut self, id: RibbonId) -> Option<&mut Ribbon> {
        self.ribbons.iter_mut().find(|r| r.id == id)
    }

    /// Iterate over all ribbons in spawn order.
    pub fn iter(&self) -> impl Iterator<Item = &Ribbon> {
        self.ribbons.iter()
    }

    /// Iterate over all ribbons mutably.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Ribbon> {
        self.ribbons.iter_mut()
    }

    /// Find the first ribbon with the given tag.
    pub fn find_by_tag(&self, tag: &str) -> Option<&Ribbon> {
        self.ribbons.iter().find(|r| r.tag == tag)
    }

    /// Find the first ribbon with the given tag (mutable).
    pub fn find_by_tag_mut(&mut self, tag: &str) -> Option<&mut Ribbon> {
        self.ribbons.iter_mut().find(|r| r.tag == tag)
    }

    /// Number of ribbons in the scene.
    pub fn len(&self) -> usize {
        self.ribbons.len()
    }

    /// Whether the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.ribbons.is_empty()
    }

    /// Remove all ribbons.
    pub fn clear(&mut self) {
        self.ribbons.clear();
    }
}

impl Default for RibbonScene {
    fn default() -> Self {
        Self::new()
    }
}
