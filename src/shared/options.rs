//! Zentrale Konfiguration für den Interaktions-Kern.
//!
//! `UxOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Dateiname der Options-Datei.
pub const CONFIG_FILE_NAME: &str = "circuit_ux.toml";

// ── Kamera ──────────────────────────────────────────────────────────

/// Betrag des maximalen Zoom-Exponenten (symmetrisch um 0).
pub const MAX_ZOOM: f32 = 20.0;
/// Basis der exponentiellen Zoom-Kurve (`zoom = ZOOM_BASE ^ zoom_exp`).
pub const ZOOM_BASE: f32 = 1.1;
/// Zoom-Exponent pro Scroll-Einheit.
pub const SCROLL_ZOOM_SENSITIVITY: f32 = 0.5;
/// Scroll-Beträge unterhalb dieser Schwelle lösen keinen Zoom aus.
pub const SCROLL_DEADZONE: f32 = 0.001;
/// Pan-Geschwindigkeit der Bewegungstasten (Einheiten pro Sekunde, vor Zoom-Skalierung).
pub const PAN_SPEED: f32 = 600.0;

// ── Maus ────────────────────────────────────────────────────────────

/// Halbgröße der Maus-Box für den Hit-Test (Welteinheiten).
pub const MOUSE_FUDGE: f32 = 1.5;
/// Mindestabstand (vor Zoom-Skalierung), ab dem ein Druck als Drag gilt.
pub const DRAG_THRESHOLD: f32 = 10.0;

// ── Theme ───────────────────────────────────────────────────────────

/// Sichtbare Breite eines Ports in Welteinheiten.
pub const PORT_WIDTH: f32 = 2.0;
/// Farbe des Selektionsrechtecks (RGBA).
pub const SELECTION_COLOR: [f32; 4] = [0.3, 0.6, 1.0, 0.35];
/// Farbe fertiger Netze (RGBA).
pub const WIRE_COLOR: [f32; 4] = [0.2, 0.9, 0.2, 1.0];
/// Farbe der Draht-Vorschau während des Verdrahtens (RGBA).
pub const WIRE_PREVIEW_COLOR: [f32; 4] = [1.0, 0.8, 0.1, 1.0];

/// Darstellungsparameter, die der Szene und dem Renderer bekannt sind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    /// Sichtbare Port-Breite (auch Hit-Test-Box der Ports)
    pub port_width: f32,
    /// Farbe des Selektionsrechtecks
    pub selection_color: [f32; 4],
    /// Farbe fertiger Netze
    pub wire_color: [f32; 4],
    /// Farbe der Draht-Vorschau
    pub wire_preview_color: [f32; 4],
}

impl Default for Theme {
    fn default() -> Self {
        UxOptions::default().theme()
    }
}

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Optionen des Interaktions-Kerns.
/// Wird als `circuit_ux.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UxOptions {
    // ── Kamera ──────────────────────────────────────────────────
    /// Betrag des maximalen Zoom-Exponenten
    pub max_zoom: f32,
    /// Basis der Zoom-Kurve
    pub zoom_base: f32,
    /// Zoom-Exponent pro Scroll-Einheit
    pub scroll_zoom_sensitivity: f32,
    /// Scroll-Totzone
    pub scroll_deadzone: f32,
    /// Pan-Geschwindigkeit der Bewegungstasten
    pub pan_speed: f32,

    // ── Maus ────────────────────────────────────────────────────
    /// Halbgröße der Maus-Box im Hit-Test
    pub mouse_fudge: f32,
    /// Drag-Schwelle (wird mit dem Zoom-Faktor skaliert)
    pub drag_threshold: f32,

    // ── Theme ───────────────────────────────────────────────────
    /// Sichtbare Port-Breite
    pub port_width: f32,
    /// Farbe des Selektionsrechtecks
    pub selection_color: [f32; 4],
    /// Farbe fertiger Netze
    pub wire_color: [f32; 4],
    /// Farbe der Draht-Vorschau
    pub wire_preview_color: [f32; 4],
}

impl Default for UxOptions {
    fn default() -> Self {
        Self {
            max_zoom: MAX_ZOOM,
            zoom_base: ZOOM_BASE,
            scroll_zoom_sensitivity: SCROLL_ZOOM_SENSITIVITY,
            scroll_deadzone: SCROLL_DEADZONE,
            pan_speed: PAN_SPEED,
            mouse_fudge: MOUSE_FUDGE,
            drag_threshold: DRAG_THRESHOLD,
            port_width: PORT_WIDTH,
            selection_color: SELECTION_COLOR,
            wire_color: WIRE_COLOR,
            wire_preview_color: WIRE_PREVIEW_COLOR,
        }
    }
}

impl UxOptions {
    /// Liest die Interaktions-Optionen aus `path`.
    ///
    /// Fehlende Felder erhalten ihren Standardwert; eine fehlende oder nicht
    /// lesbare Datei liefert komplett die Standardwerte.
    pub fn load_from_file(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                log::info!(
                    "circuit_ux: {} nicht lesbar ({}), Standard-Optionen aktiv",
                    path.display(),
                    err
                );
                return Self::default();
            }
        };

        toml::from_str(&content).unwrap_or_else(|err| {
            log::warn!(
                "circuit_ux: {} ist kein gültiges Options-TOML, Standard-Optionen aktiv: {}",
                path.display(),
                err
            );
            Self::default()
        })
    }

    /// Schreibt die Interaktions-Optionen als TOML nach `path`.
    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)
            .context("Interaktions-Optionen nicht serialisierbar")?;
        std::fs::write(path, content)
            .with_context(|| format!("{} nicht beschreibbar", path.display()))?;
        log::debug!("circuit_ux: Optionen nach {} geschrieben", path.display());
        Ok(())
    }

    /// `circuit_ux.toml` im Verzeichnis der laufenden Binary, ersatzweise im
    /// Arbeitsverzeichnis.
    pub fn config_path() -> PathBuf {
        let dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."));
        dir.join(CONFIG_FILE_NAME)
    }

    /// Leitet das Theme aus den Optionen ab.
    pub fn theme(&self) -> Theme {
        Theme {
            port_width: self.port_width,
            selection_color: self.selection_color,
            wire_color: self.wire_color,
            wire_preview_color: self.wire_preview_color,
        }
    }
}
