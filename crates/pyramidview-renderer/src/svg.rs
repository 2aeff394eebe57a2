//! SVG output for a recorded [`Scene`].
//!
//! Faces are painted back to front (painter's algorithm) under an orthographic
//! [`Camera`]. The axis box is drawn as a faint wireframe; tick labels and axis
//! titles are never emitted.

use pyramidview_core::AxisLimits;

use crate::render_data::{RenderText, Scene};
use crate::viewport::{Camera, Projected, Viewport};

/// Canvas rows reserved for the title.
const TITLE_BAND: f64 = 40.0;
const TITLE_FONT_SIZE: f64 = 16.0;
const FIT_MARGIN: f64 = 0.08;
const LINE_HEIGHT: f64 = 1.2;
/// Points to pixels at 100 dpi.
const PX_PER_PT: f64 = 100.0 / 72.0;
const FONT_FAMILY: &str = "DejaVu Sans, Helvetica, Arial, sans-serif";
const AXIS_COLOR: &str = "#B0B0B0";

/// Render with the default camera.
pub fn render_svg(scene: &Scene) -> String {
    render_svg_with(scene, &Camera::default())
}

pub fn render_svg_with(scene: &Scene, camera: &Camera) -> String {
    let [width, height] = scene.canvas_size;
    let scale = AxisScale::for_scene(scene);
    let project = |p: [f64; 3]| camera.project(scale.apply(p));

    let mut viewport = Viewport::new(width, (height - TITLE_BAND).max(1.0));
    if let Some((min_x, min_y, max_x, max_y)) = projected_bounds(scene, &project) {
        viewport.fit_bbox(min_x, min_y, max_x, max_y, FIT_MARGIN);
    }
    let to_canvas = |p: Projected| {
        let (x, y) = viewport.to_screen(p);
        (x, y + TITLE_BAND)
    };

    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width:.0}\" height=\"{height:.0}\" viewBox=\"0 0 {width:.0} {height:.0}\">\n",
    ));
    svg.push_str("<rect width=\"100%\" height=\"100%\" fill=\"white\"/>\n");

    if let Some(title) = &scene.title {
        svg.push_str(&format!(
            "<text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"middle\" font-family=\"{FONT_FAMILY}\" font-size=\"{TITLE_FONT_SIZE}\" fill=\"black\">{}</text>\n",
            width / 2.0,
            TITLE_BAND * 0.65,
            escape_xml(title)
        ));
    }

    if let Some(axes) = &scene.axes {
        for (a, b) in box_edges(&axes.limits) {
            let (x1, y1) = to_canvas(project(a));
            let (x2, y2) = to_canvas(project(b));
            svg.push_str(&format!(
                "<line x1=\"{x1:.2}\" y1=\"{y1:.2}\" x2=\"{x2:.2}\" y2=\"{y2:.2}\" stroke=\"{AXIS_COLOR}\" stroke-width=\"0.6\"/>\n",
            ));
        }
    }

    // Every face of every collection, farthest first.
    let mut faces: Vec<(f64, usize, &Vec<[f64; 3]>)> = scene
        .collections
        .iter()
        .enumerate()
        .flat_map(|(ci, c)| c.faces.iter().map(move |f| (ci, f)))
        .filter(|(_, f)| !f.is_empty())
        .map(|(ci, f)| {
            let depth = f.iter().map(|&p| project(p).depth).sum::<f64>() / f.len() as f64;
            (depth, ci, f)
        })
        .collect();
    faces.sort_by(|a, b| a.0.total_cmp(&b.0));

    for (_, ci, face) in faces {
        let collection = &scene.collections[ci];
        let points: Vec<String> = face
            .iter()
            .map(|&p| {
                let (x, y) = to_canvas(project(p));
                format!("{x:.2},{y:.2}")
            })
            .collect();
        svg.push_str(&format!(
            "<polygon points=\"{}\" fill=\"{}\" fill-opacity=\"{:.2}\" stroke=\"{}\" stroke-width=\"0.8\"/>\n",
            points.join(" "),
            rgb(&collection.face_color),
            collection.face_color[3],
            rgb(&collection.edge_color)
        ));
    }

    for text in &scene.texts {
        let (x, y) = to_canvas(project(text.position));
        render_text(&mut svg, text, x, y);
    }

    svg.push_str("</svg>\n");
    svg
}

/// Per-axis factors that stretch the axis limits to the configured box aspect.
#[derive(Debug, Clone, Copy)]
struct AxisScale {
    factors: [f64; 3],
}

impl AxisScale {
    fn for_scene(scene: &Scene) -> Self {
        let Some(axes) = &scene.axes else {
            return Self { factors: [1.0; 3] };
        };
        let spans = [
            axes.limits.x.span(),
            axes.limits.y.span(),
            axes.limits.z.span(),
        ];
        let factor = |aspect: f64, span: f64| {
            if span > 0.0 && aspect > 0.0 {
                aspect / span
            } else {
                1.0
            }
        };
        Self {
            factors: [
                factor(axes.box_aspect[0], spans[0]),
                factor(axes.box_aspect[1], spans[1]),
                factor(axes.box_aspect[2], spans[2]),
            ],
        }
    }

    fn apply(&self, p: [f64; 3]) -> [f64; 3] {
        [
            p[0] * self.factors[0],
            p[1] * self.factors[1],
            p[2] * self.factors[2],
        ]
    }
}

fn projected_bounds<F>(scene: &Scene, project: &F) -> Option<(f64, f64, f64, f64)>
where
    F: Fn([f64; 3]) -> Projected,
{
    let face_points = scene
        .collections
        .iter()
        .flat_map(|c| c.faces.iter().flatten().copied());
    let text_points = scene.texts.iter().map(|t| t.position);
    let box_points = scene
        .axes
        .iter()
        .flat_map(|a| box_edges(&a.limits).into_iter().flat_map(|(p, q)| [p, q]));

    face_points
        .chain(text_points)
        .chain(box_points)
        .map(project)
        .fold(None, |acc, p| match acc {
            None => Some((p.x, p.y, p.x, p.y)),
            Some((x0, y0, x1, y1)) => Some((x0.min(p.x), y0.min(p.y), x1.max(p.x), y1.max(p.y))),
        })
}

/// The twelve edges of the axis box.
fn box_edges(limits: &AxisLimits) -> Vec<([f64; 3], [f64; 3])> {
    let xs = [limits.x.min, limits.x.max];
    let ys = [limits.y.min, limits.y.max];
    let zs = [limits.z.min, limits.z.max];
    let mut edges = Vec::with_capacity(12);
    for &y in &ys {
        for &z in &zs {
            edges.push(([xs[0], y, z], [xs[1], y, z]));
        }
    }
    for &x in &xs {
        for &z in &zs {
            edges.push(([x, ys[0], z], [x, ys[1], z]));
        }
    }
    for &x in &xs {
        for &y in &ys {
            edges.push(([x, y, zs[0]], [x, y, zs[1]]));
        }
    }
    edges
}

/// Centered multi-line text whose last baseline sits on the anchor.
fn render_text(svg: &mut String, text: &RenderText, x: f64, y: f64) {
    let font_px = text.font_size * PX_PER_PT;
    let lines: Vec<&str> = text.text.lines().collect();
    let first_y = y - (lines.len().saturating_sub(1)) as f64 * font_px * LINE_HEIGHT;
    svg.push_str(&format!(
        "<text x=\"{x:.2}\" y=\"{first_y:.2}\" text-anchor=\"middle\" font-family=\"{FONT_FAMILY}\" font-size=\"{font_px:.2}\" fill=\"{}\">",
        rgb(&text.color)
    ));
    for (i, line) in lines.iter().enumerate() {
        let dy = if i == 0 { 0.0 } else { LINE_HEIGHT };
        svg.push_str(&format!(
            "<tspan x=\"{x:.2}\" dy=\"{dy}em\">{}</tspan>",
            escape_xml(line.trim())
        ));
    }
    svg.push_str("</text>\n");
}

fn rgb(color: &[f32; 4]) -> String {
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!(
        "#{:02X}{:02X}{:02X}",
        channel(color[0]),
        channel(color[1]),
        channel(color[2])
    )
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
