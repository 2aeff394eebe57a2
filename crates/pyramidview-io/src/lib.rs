//! # PyramidView I/O
//!
//! Reading comparisons from JSON documents or plain-text item lists, and
//! writing rendered scenes as SVG or JSON.

pub mod document;
pub mod error;
pub mod export;
pub mod item_list;

pub use document::ComparisonDocument;
pub use error::IoError;
pub use export::{encode_scene, write_scene, write_scene_json, write_svg, OutputFormat};
pub use item_list::{parse_item_entry, parse_item_list};
