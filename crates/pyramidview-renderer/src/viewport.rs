use serde::{Deserialize, Serialize};

/// Orthographic camera looking at the scene from a fixed elevation and azimuth.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Camera {
    /// Degrees above the floor plane.
    pub elevation: f64,
    /// Degrees around the vertical axis.
    pub azimuth: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            elevation: 30.0,
            azimuth: -60.0,
        }
    }
}

/// A scene point after projection onto the view plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    pub x: f64,
    /// Grows upwards on the view plane.
    pub y: f64,
    /// Distance towards the viewer; larger is closer.
    pub depth: f64,
}

impl Camera {
    pub fn project(&self, p: [f64; 3]) -> Projected {
        let el = self.elevation.to_radians();
        let az = self.azimuth.to_radians();
        let (sin_el, cos_el) = el.sin_cos();
        let (sin_az, cos_az) = az.sin_cos();

        let right = [-sin_az, cos_az, 0.0];
        let up = [-sin_el * cos_az, -sin_el * sin_az, cos_el];
        let toward_viewer = [cos_el * cos_az, cos_el * sin_az, sin_el];
        let dot = |v: [f64; 3]| v[0] * p[0] + v[1] * p[1] + v[2] * p[2];

        Projected {
            x: dot(right),
            y: dot(up),
            depth: dot(toward_viewer),
        }
    }
}

/// Maps view-plane coordinates onto a canvas of pixels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Viewport {
    /// Center X in view-plane coordinates.
    pub center_x: f64,
    /// Center Y in view-plane coordinates.
    pub center_y: f64,
    /// Zoom level (pixels per view-plane unit).
    pub zoom: f64,
    /// Canvas width in pixels.
    pub canvas_width: f64,
    /// Canvas height in pixels.
    pub canvas_height: f64,
}

impl Viewport {
    pub fn new(canvas_width: f64, canvas_height: f64) -> Self {
        Self {
            center_x: 0.0,
            center_y: 0.0,
            zoom: 1.0,
            canvas_width,
            canvas_height,
        }
    }

    /// Zoom to fit a bounding box, leaving `margin` (a fraction) around it.
    pub fn fit_bbox(&mut self, min_x: f64, min_y: f64, max_x: f64, max_y: f64, margin: f64) {
        let width = max_x - min_x;
        let height = max_y - min_y;
        if width <= 0.0 || height <= 0.0 {
            return;
        }

        self.center_x = (min_x + max_x) / 2.0;
        self.center_y = (min_y + max_y) / 2.0;

        let zoom_x = self.canvas_width / width * (1.0 - margin);
        let zoom_y = self.canvas_height / height * (1.0 - margin);
        self.zoom = zoom_x.min(zoom_y);
    }

    /// Canvas X for a view-plane X.
    pub fn to_screen_x(&self, x: f64) -> f64 {
        (x - self.center_x) * self.zoom + self.canvas_width / 2.0
    }

    /// Canvas Y for a view-plane Y. Canvas rows grow downwards.
    pub fn to_screen_y(&self, y: f64) -> f64 {
        (self.center_y - y) * self.zoom + self.canvas_height / 2.0
    }

    pub fn to_screen(&self, p: Projected) -> (f64, f64) {
        (self.to_screen_x(p.x), self.to_screen_y(p.y))
    }
}
