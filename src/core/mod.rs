//! Core-Domänentypen: Bounding-Boxen, Kamera, Schaltungs-IDs, View-Modell.

pub mod bounds;
pub mod camera;
pub mod circuit;
pub mod scene;

pub use bounds::Aabb;
pub use camera::Camera2D;
pub use circuit::{
    ComponentDesc, ComponentDescId, ComponentId, NetId, PortDesc, PortDirection, PortId, PortSide,
};
pub use scene::{ComponentView, NetView, PortView, Scene};
