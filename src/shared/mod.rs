//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Laufzeit-Optionen und die Render-Szene, die zwischen `app`
//! und dem Host-Renderer geteilt werden.
pub mod options;
mod render_scene;

pub use options::{Theme, UxOptions};
pub use render_scene::{RenderComponent, RenderNet, RenderScene, WirePreview};
