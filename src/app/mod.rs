//! Application-Layer: Sitzung, Eingabe, Hit-Test, Maus-Automat,
//! Routen-Synchronisation und Render-Szene.

pub mod editing;
pub mod input;
pub mod interaction;
pub mod render_scene;
pub mod route_sync;
/// Editier-Sitzung und Frame-Pipeline
pub mod session;

pub use hit_test::HoverHit;
pub use input::{InputSnapshot, KeyCode, KeySet, Modifiers};
pub use interaction::{InteractionState, MouseDownState, Predicates, StepOutcome};
pub use route_sync::RouteSyncStats;
pub use session::CircuitSession;
