//! Headless-Replay des Interaktions-Kerns.
//!
//! Spielt eine feste Eingabefolge (Platzieren, Verdrahten, Verschieben,
//! Rechteck-Selektion) Frame für Frame ab und protokolliert die Zustände.
//! Optionen werden aus `circuit_ux.toml` neben der Binary gelesen oder aus
//! dem ersten Argument.

use circuit_ux::{CircuitSession, ComponentDesc, ComponentDescId, UxOptions};
use glam::Vec2;

/// Ein Frame der Eingabefolge: Mausposition (Screen) und linke Taste.
struct ReplayFrame {
    mouse: Vec2,
    down: bool,
}

fn frame(x: f32, y: f32, down: bool) -> ReplayFrame {
    ReplayFrame {
        mouse: Vec2::new(x, y),
        down,
    }
}

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    log::info!("circuit-ux Replay v{} startet...", env!("CARGO_PKG_VERSION"));

    let config_path = std::env::args_os()
        .nth(1)
        .map(std::path::PathBuf::from)
        .unwrap_or_else(UxOptions::config_path);
    let options = UxOptions::load_from_file(&config_path);

    let mut session = CircuitSession::with_default_router(
        vec![ComponentDesc::gate("AND", 2), ComponentDesc::gate("NOT", 1)],
        options,
    );
    let and_gate = session.add_component(ComponentDescId(0), Vec2::new(100.0, 100.0));
    let not_gate = session.add_component(ComponentDescId(1), Vec2::new(250.0, 160.0));

    let and_out = session
        .scene
        .port_ids(and_gate)
        .last()
        .ok_or_else(|| anyhow::anyhow!("AND-Gatter ohne Ports"))?;
    let not_in = session
        .scene
        .port_ids(not_gate)
        .next()
        .ok_or_else(|| anyhow::anyhow!("NOT-Gatter ohne Ports"))?;
    let out_pos = session.scene.port_center(and_out);
    let in_pos = session.scene.port_center(not_in);

    let script = [
        // Klick-Verdrahtung: Port drücken, loslassen, auf Ziel-Port drücken
        frame(out_pos.x, out_pos.y, true),
        frame(out_pos.x, out_pos.y, false),
        frame(in_pos.x, in_pos.y, false),
        frame(in_pos.x, in_pos.y, true),
        frame(in_pos.x, in_pos.y, false),
        // Bauteil greifen und verschieben
        frame(100.0, 100.0, true),
        frame(100.0, 130.0, true),
        frame(100.0, 160.0, true),
        frame(100.0, 160.0, false),
        // Klick ins Leere hebt die Selektion auf
        frame(20.0, 20.0, true),
        frame(20.0, 20.0, false),
        frame(20.0, 20.0, false),
        // Rechteck-Selektion über beide Bauteile
        frame(20.0, 20.0, true),
        frame(320.0, 240.0, true),
        frame(320.0, 240.0, false),
    ];

    for (index, step) in script.iter().enumerate() {
        session.input.mouse_pos = step.mouse;
        session.input.modifiers.lmb = step.down;
        session.input.frame_duration = 1.0 / 60.0;
        let render = session.draw();
        log::info!(
            "Frame {:>2}: {:?}, {} selektiert, {} Netze",
            index,
            session.mouse_state(),
            render.selected_count(),
            render.nets.len()
        );
    }

    for net in &session.scene.nets {
        log::info!(
            "Netz {} -> {}: {} Vertices",
            net.from,
            net.to,
            net.vertices.len()
        );
    }

    if session.scene.nets.is_empty() {
        anyhow::bail!(
            "Replay hat kein Netz zwischen Port {} und Port {} erzeugt",
            and_out,
            not_in
        );
    }
    Ok(())
}
