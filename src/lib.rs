//! Interaktions-Kern eines Schaltplan-Editors.
//! Kamera, Hit-Test, Maus-Zustandsautomat und Routen-Synchronisation als Library.

pub mod app;
pub mod core;
pub mod routing;
pub mod shared;

pub use app::{
    CircuitSession, InputSnapshot, InteractionState, KeyCode, KeySet, Modifiers, MouseDownState,
    RouteSyncStats, StepOutcome,
};
pub use core::{
    Aabb, Camera2D, ComponentDesc, ComponentDescId, ComponentId, NetId, PortDirection, PortId,
    PortSide, Scene,
};
pub use routing::{OrthogonalRouter, Router};
pub use shared::{RenderScene, Theme, UxOptions};
