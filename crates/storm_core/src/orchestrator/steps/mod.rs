//! Setup steps in pipeline order.

mod camera;
mod lighting;
mod origin;
mod terrain;

pub use camera::PlaceCameraStep;
pub use lighting::ApplyLightingStep;
pub use origin::SetOriginStep;
pub use terrain::LoadTerrainStep;
