use crate::render_data::{AxesConfig, RenderCollection, RenderText};

/// Anything a comparison can be drawn onto.
///
/// The comparison only needs to add polygon collections and anchored text,
/// and to configure the axes and title. [`crate::Scene`] records these calls;
/// other backends can draw them directly.
pub trait DisplaySurface {
    fn add_collection(&mut self, collection: RenderCollection);
    fn add_text(&mut self, text: RenderText);
    fn set_axes(&mut self, axes: AxesConfig);
    fn set_title(&mut self, title: &str);
}
