pub mod camera;
pub mod gesture;
pub mod perf;

pub use camera::SceneCamera;
