use std::fs;
use std::path::Path;

use pyramidview_renderer::{render_svg, Scene};

use crate::error::IoError;

/// Output formats for a rendered comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Svg,
    /// The recorded scene as pretty JSON.
    SceneJson,
}

impl OutputFormat {
    /// Guess from a file extension, defaulting to SVG.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => OutputFormat::SceneJson,
            _ => OutputFormat::Svg,
        }
    }
}

/// Serialize `scene` in the requested format.
pub fn encode_scene(scene: &Scene, format: OutputFormat) -> Result<String, IoError> {
    match format {
        OutputFormat::Svg => Ok(render_svg(scene)),
        OutputFormat::SceneJson => Ok(scene.to_json()?),
    }
}

pub fn write_svg(path: &Path, scene: &Scene) -> Result<(), IoError> {
    write_scene(path, scene, OutputFormat::Svg)
}

pub fn write_scene_json(path: &Path, scene: &Scene) -> Result<(), IoError> {
    write_scene(path, scene, OutputFormat::SceneJson)
}

pub fn write_scene(path: &Path, scene: &Scene, format: OutputFormat) -> Result<(), IoError> {
    let encoded = encode_scene(scene, format)?;
    fs::write(path, encoded)?;
    log::info!("wrote {:?} output to {}", format, path.display());
    Ok(())
}
