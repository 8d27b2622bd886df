// MODEL: Game state and data
pub mod bounds;
pub mod camera;
pub mod lighting;
pub mod pickup;
pub mod progression;
pub mod scene;

pub use bounds::{Aabb, RoomBounds};
pub use camera::{Camera, CameraMode, CameraSettings, Movement};
pub use lighting::{LightingMode, LightingPreset, PointLight};
pub use pickup::{Collectible, PickupVolume, PICKUP_TABLE};
pub use progression::ProgressionState;
pub use scene::Placement;
