pub use crate::{ArCamera, BowlingArPlugin, BowlingArSystems, PlaneAnchorAdded};
pub use crate::{ArSession, InteractionConfig, InteractionController};
pub use crate::{CollisionCategory, PlacementKind, PlacementPhase};
pub use crate::{SceneAsset, SceneAssetSource};
