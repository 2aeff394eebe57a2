//! Orchestration: lay out the items, build one pyramid and label per item,
//! size the frame, and draw it all onto a [`DisplaySurface`].

use pyramidview_core::{
    annotate, build_solid, compute_placements, verify_non_overlap, Annotation, ComparisonConfig,
    Frame, Item, LayoutError, Placement, Solid,
};

use crate::render_data::{AxesConfig, RenderCollection, RenderText, Scene};
use crate::surface::DisplaySurface;

/// Style shared by every pyramid and label in one comparison.
#[derive(Debug, Clone, Copy)]
pub struct DrawStyle {
    pub face_opacity: f32,
    pub edge_color: [f32; 4],
    pub label_color: [f32; 4],
    pub label_font_size: f64,
}

impl DrawStyle {
    pub fn from_config(config: &ComparisonConfig) -> Self {
        Self {
            face_opacity: config.face_opacity,
            edge_color: config.edge_color.to_f32_array(1.0),
            label_color: config.label_color.to_f32_array(1.0),
            label_font_size: config.label_font_size,
        }
    }
}

/// Everything computed for a comparison before any drawing happens.
#[derive(Debug, Clone)]
pub struct ComparisonPlan {
    pub placements: Vec<Placement>,
    pub solids: Vec<Solid>,
    pub annotations: Vec<Annotation>,
    pub frame: Frame,
    pub title: String,
    pub style: DrawStyle,
}

/// Validate and compute the whole comparison without touching a surface.
pub fn plan_comparison(
    items: &[Item],
    config: &ComparisonConfig,
) -> Result<ComparisonPlan, LayoutError> {
    config.validate()?;
    let placements = compute_placements(items, config.spacing)?;
    debug_assert!(verify_non_overlap(&placements));

    let solids = placements
        .iter()
        .enumerate()
        .map(|(i, p)| build_solid(p, i, &config.palette))
        .collect();
    let annotations = placements
        .iter()
        .map(|p| annotate(p, config.label_lift))
        .collect();
    let frame = Frame::from_placements(&placements, config.depth_limit, config.headroom)?;

    log::info!(
        "comparison of {} items spans {:.4} x {:.4} x {:.4}",
        placements.len(),
        frame.total_width,
        frame.depth_extent,
        frame.max_height * frame.headroom
    );

    Ok(ComparisonPlan {
        placements,
        solids,
        annotations,
        frame,
        title: config.title.clone(),
        style: DrawStyle::from_config(config),
    })
}

impl ComparisonPlan {
    /// Draw solids and labels in input order, then the axes and title.
    pub fn draw<S: DisplaySurface + ?Sized>(&self, surface: &mut S) {
        for (solid, annotation) in self.solids.iter().zip(&self.annotations) {
            draw_solid(surface, solid, &self.style);
            draw_annotation(surface, annotation, &self.style);
        }
        surface.set_axes(AxesConfig::bare(
            self.frame.axis_limits(),
            self.frame.box_aspect(),
        ));
        if !self.title.is_empty() {
            surface.set_title(&self.title);
        }
    }
}

/// Add one pyramid's faces to the surface as a single polygon collection.
pub fn draw_solid<S: DisplaySurface + ?Sized>(surface: &mut S, solid: &Solid, style: &DrawStyle) {
    let faces = solid
        .face_points()
        .into_iter()
        .map(|face| face.iter().map(|p| p.to_array()).collect())
        .collect();
    surface.add_collection(RenderCollection {
        faces,
        face_color: solid.color.to_f32_array(style.face_opacity),
        edge_color: style.edge_color,
        color_name: solid.color.name.clone(),
    });
}

pub fn draw_annotation<S: DisplaySurface + ?Sized>(
    surface: &mut S,
    annotation: &Annotation,
    style: &DrawStyle,
) {
    surface.add_text(RenderText {
        position: annotation.anchor.to_array(),
        text: annotation.text.clone(),
        color: style.label_color,
        font_size: style.label_font_size,
    });
}

/// Plan the comparison and draw it onto `surface`.
///
/// Invalid input is rejected before anything is drawn.
pub fn render_comparison<S: DisplaySurface + ?Sized>(
    items: &[Item],
    config: &ComparisonConfig,
    surface: &mut S,
) -> Result<ComparisonPlan, LayoutError> {
    let plan = plan_comparison(items, config)?;
    plan.draw(surface);
    Ok(plan)
}

/// Render into a fresh [`Scene`] sized from the configured figure.
pub fn compare(items: &[Item], config: &ComparisonConfig) -> Result<Scene, LayoutError> {
    let (width, height) = config.canvas_size();
    let mut scene = Scene::new(width, height);
    render_comparison(items, config, &mut scene)?;
    Ok(scene)
}
