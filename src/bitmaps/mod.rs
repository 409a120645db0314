use crate::color::Color;
use crate::pipeline::PointPipeline;
use crate::utils::{Size, Vertex};

/// A software RGBA surface that accepts pipeline points.
///
/// Points outside the surface are dropped. Each point is blended source-over
/// onto what is already there.
pub struct Canvas {
    data: Vec<u8>,
    size: Size,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Canvas {
        Canvas::with_background(width, height, Color::TRANSPARENT)
    }

    pub fn with_background(width: usize, height: usize, background: Color) -> Canvas {
        let (r, g, b, a) = background.as_rgba();
        let data = [r, g, b, a].repeat(width * height);
        Canvas { data, size: Size::new(width, height) }
    }

    pub fn width(&self) -> usize {
        self.size.width
    }

    pub fn height(&self) -> usize {
        self.size.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.data
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Color> {
        if x >= self.size.width || y >= self.size.height {
            return None;
        }
        let offset = (y * self.size.width + x) * 4;
        let px = &self.data[offset..offset + 4];
        Some(Color::rgba(px[0], px[1], px[2], px[3]))
    }

    fn blend(&mut self, x: usize, y: usize, color: Color) {
        let offset = (y * self.size.width + x) * 4;
        let src_a = color.alpha() as u32;
        let inv_a = 255 - src_a;
        let dst = &mut self.data[offset..offset + 4];
        for (d, s) in dst.iter_mut().zip([color.red(), color.green(), color.blue()]) {
            *d = ((s as u32 * src_a + *d as u32 * inv_a + 127) / 255) as u8;
        }
        dst[3] = (src_a + (dst[3] as u32 * inv_a + 127) / 255) as u8;
    }

    /// Renders alpha as a character ramp, one line per row.
    pub fn to_ascii(&self) -> String {
        const RAMP: &[u8] = b" .:-=+*#%@";
        let mut out = String::with_capacity((self.size.width + 1) * self.size.height);
        for row in self.data.chunks(self.size.width.max(1) * 4) {
            for px in row.chunks(4) {
                let level = px[3] as usize * (RAMP.len() - 1) / 255;
                out.push(RAMP[level] as char);
            }
            out.push('\n');
        }
        out
    }
}

impl PointPipeline for Canvas {
    fn draw_point(&mut self, position: Vertex, color: Color) {
        if position.x < 0.0 || position.y < 0.0 {
            return;
        }
        let (x, y) = (position.x as usize, position.y as usize);
        if x >= self.size.width || y >= self.size.height {
            return;
        }
        self.blend(x, y, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opaque_point_replaces_pixel() {
        let mut canvas = Canvas::with_background(2, 2, Color::rgb(0, 0, 0));
        canvas.draw_point(Vertex::new(1.0, 0.0, 0.0), Color::rgba(255, 10, 20, 255));
        assert_eq!(canvas.pixel(1, 0), Some(Color::rgba(255, 10, 20, 255)));
        assert_eq!(canvas.pixel(0, 0), Some(Color::rgb(0, 0, 0)));
    }

    #[test]
    fn transparent_point_changes_nothing() {
        let mut canvas = Canvas::with_background(1, 1, Color::rgb(9, 9, 9));
        canvas.draw_point(Vertex::new(0.0, 0.0, 0.0), Color::rgba(255, 255, 255, 0));
        assert_eq!(canvas.pixel(0, 0), Some(Color::rgb(9, 9, 9)));
    }

    #[test]
    fn half_alpha_blends() {
        let mut canvas = Canvas::with_background(1, 1, Color::rgb(0, 0, 0));
        canvas.draw_point(Vertex::new(0.0, 0.0, 0.0), Color::rgba(255, 0, 0, 128));
        let (r, g, _, a) = canvas.pixel(0, 0).unwrap().as_rgba();
        assert_eq!(r, 128);
        assert_eq!(g, 0);
        assert_eq!(a, 255);
    }

    #[test]
    fn out_of_bounds_points_are_clipped() {
        let mut canvas = Canvas::new(2, 1);
        canvas.draw_point(Vertex::new(-1.0, 0.0, 0.0), Color::WHITE);
        canvas.draw_point(Vertex::new(2.0, 0.0, 0.0), Color::WHITE);
        canvas.draw_point(Vertex::new(0.0, 1.0, 0.0), Color::WHITE);
        assert!(canvas.pixels().iter().all(|&b| b == 0));
        assert_eq!(canvas.pixel(2, 0), None);
    }

    #[test]
    fn ascii_preview_maps_alpha() {
        let mut canvas = Canvas::new(2, 1);
        canvas.draw_point(Vertex::new(1.0, 0.0, 0.0), Color::WHITE);
        assert_eq!(canvas.to_ascii(), " @\n");
    }
}
