//! Headless host: owns an editor, feeds it commands, reports the result.

use kurbo::{Point, Rect};
use polyzone_core::{
    ConfigError, DragPhase, EditorCommand, EditorConfig, PolygonChange, PolygonEditor,
};
use std::path::Path;
use thiserror::Error;

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Host settings.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub width: f64,
    pub height: f64,
    pub editor: EditorConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            width: 300.0,
            height: 300.0,
            editor: EditorConfig {
                max_points: 5,
                ..Default::default()
            },
        }
    }
}

impl AppConfig {
    /// Load editor settings from a JSON file, keeping the default surface.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let json = std::fs::read_to_string(path)?;
        let editor = EditorConfig::from_json(&json)?;
        log::info!("Loaded editor configuration from {}", path.display());
        Ok(Self {
            editor,
            ..Default::default()
        })
    }

    pub fn surface(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }
}

/// Outcome of a replayed session.
#[derive(Debug, Clone, Default)]
pub struct SessionReport {
    /// Commands that changed the polygon.
    pub applied: usize,
    /// Commands the editor absorbed.
    pub absorbed: usize,
}

/// Main application struct.
#[derive(Debug)]
pub struct App {
    editor: PolygonEditor,
}

impl App {
    pub fn new(config: &AppConfig) -> Result<Self, AppError> {
        let mut editor = PolygonEditor::with_config(config.surface(), config.editor.clone())?;
        editor.add_listener(|change: &PolygonChange| {
            log::info!(
                "Polygon changed: {} vertices, valid = {}",
                change.vertices.len(),
                change.is_valid
            );
        });
        Ok(Self { editor })
    }

    pub fn editor(&self) -> &PolygonEditor {
        &self.editor
    }

    /// Feed commands to the editor in order.
    pub fn replay(&mut self, commands: impl IntoIterator<Item = EditorCommand>) -> SessionReport {
        let mut report = SessionReport::default();
        for command in commands {
            log::debug!("Applying {:?}", command);
            if self.editor.apply(command) {
                report.applied += 1;
            } else {
                report.absorbed += 1;
            }
        }
        report
    }

    /// Write the outline, overlay mask and grid as SVG path data.
    pub fn render(&self, out: &mut impl std::io::Write) -> std::io::Result<()> {
        let mask = self.editor.overlay_mask();
        writeln!(out, "vertices: {:?}", self.editor.vertices())?;
        writeln!(out, "valid: {}", self.editor.is_valid())?;
        writeln!(out, "outline: {}", self.editor.closed_path().to_svg())?;
        writeln!(out, "mask ({:?}): {}", mask.fill, mask.path.to_svg())?;
        if self.editor.config().grid.enabled {
            writeln!(out, "grid: {}", self.editor.grid_lines().to_svg())?;
        }
        Ok(())
    }
}

/// A short scripted session: four corners, an insertion above the top edge,
/// a snapped drag, an out-of-bounds drag and a deletion.
pub fn demo_session() -> Vec<EditorCommand> {
    let tap = |x, y| EditorCommand::Tap {
        position: Point::new(x, y),
    };
    let drag = |index, x, y, phase| EditorCommand::Drag {
        index,
        position: Point::new(x, y),
        phase,
    };
    vec![
        tap(40.0, 40.0),
        tap(240.0, 40.0),
        tap(240.0, 240.0),
        tap(40.0, 240.0),
        tap(140.0, 10.0),
        EditorCommand::SetGridEnabled(true),
        drag(3, 240.0, 240.0, DragPhase::Begin),
        drag(3, 251.0, 247.0, DragPhase::Change),
        drag(3, 251.0, 247.0, DragPhase::End),
        drag(0, 40.0, 40.0, DragPhase::Begin),
        drag(0, 5.0, 40.0, DragPhase::Change),
        drag(0, 5.0, 40.0, DragPhase::End),
        tap(10.0, 10.0),
        EditorCommand::ActivateAnchor { index: 1 },
    ]
}
