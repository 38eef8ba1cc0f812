/// Unique identifier for a ribbon in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RibbonId(pub u32);
