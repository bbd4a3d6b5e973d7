use serde::{Deserialize, Serialize};

/// Which update path an entity runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EntityType {
    /// Input-driven; checked against enemies for stomps and deaths.
    Player,
    /// AI-driven.
    Enemy,
    /// Static collision geometry. Never updated by a `Level`.
    #[default]
    Platform,
}

/// Opaque handle to a texture owned by the host's texture cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TextureId(pub u32);
