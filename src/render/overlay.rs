//! Widget chrome: control placement, hit testing, and overlay geometry.
//!
//! Everything here is pure pixel/NDC math so the click-to-action mapping can
//! be tested without a window.

use bytemuck::{Pod, Zeroable};

use crate::carousel::SlideFrame;
use crate::events::{ControlAction, NavDirection};

const BUTTON_SIZE: f32 = 48.0;
const PLAY_BUTTON_SIZE: f32 = 40.0;
const EDGE_MARGIN: f32 = 16.0;
const INDICATOR_SIZE: f32 = 12.0;
const INDICATOR_GAP: f32 = 10.0;
const INDICATOR_BOTTOM_MARGIN: f32 = 36.0;

const BACKING_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 0.35];
const GLYPH_COLOR: [f32; 4] = [0.95, 0.95, 0.95, 0.95];
const INDICATOR_COLOR: [f32; 4] = [0.6, 0.6, 0.6, 0.7];
const INDICATOR_ACTIVE_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 0.95];

#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
pub struct OverlayVertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl OverlayVertex {
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
            wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x4];
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &ATTRIBUTES,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.w && py >= self.y && py < self.y + self.h
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    fn inset(&self, d: f32) -> Self {
        Self {
            x: self.x + d,
            y: self.y + d,
            w: (self.w - 2.0 * d).max(0.0),
            h: (self.h - 2.0 * d).max(0.0),
        }
    }
}

/// Pixel-space placement of the widget controls for one surface size.
#[derive(Debug, Clone)]
pub struct ControlLayout {
    pub prev: Rect,
    pub next: Rect,
    pub play_pause: Rect,
    pub indicators: Vec<Rect>,
    surface: (f32, f32),
}

impl ControlLayout {
    pub fn compute(width: u32, height: u32, slides: usize) -> Self {
        let (w, h) = (width.max(1) as f32, height.max(1) as f32);
        let prev = Rect {
            x: EDGE_MARGIN,
            y: (h - BUTTON_SIZE) / 2.0,
            w: BUTTON_SIZE,
            h: BUTTON_SIZE,
        };
        let next = Rect {
            x: w - EDGE_MARGIN - BUTTON_SIZE,
            y: (h - BUTTON_SIZE) / 2.0,
            w: BUTTON_SIZE,
            h: BUTTON_SIZE,
        };
        let play_pause = Rect {
            x: w - EDGE_MARGIN - PLAY_BUTTON_SIZE,
            y: h - EDGE_MARGIN - PLAY_BUTTON_SIZE,
            w: PLAY_BUTTON_SIZE,
            h: PLAY_BUTTON_SIZE,
        };
        let row_width =
            slides as f32 * INDICATOR_SIZE + slides.saturating_sub(1) as f32 * INDICATOR_GAP;
        let row_x = (w - row_width) / 2.0;
        let indicators = (0..slides)
            .map(|i| Rect {
                x: row_x + i as f32 * (INDICATOR_SIZE + INDICATOR_GAP),
                y: h - INDICATOR_BOTTOM_MARGIN,
                w: INDICATOR_SIZE,
                h: INDICATOR_SIZE,
            })
            .collect();
        Self {
            prev,
            next,
            play_pause,
            indicators,
            surface: (w, h),
        }
    }

    /// Maps a click position to the control it lands on. `None` means the
    /// click landed in the slide area (where drag gestures start).
    pub fn hit(&self, px: f32, py: f32) -> Option<ControlAction> {
        if self.play_pause.contains(px, py) {
            return Some(ControlAction::TogglePlayPause);
        }
        if self.prev.contains(px, py) {
            return Some(ControlAction::Nav(NavDirection::Prev));
        }
        if self.next.contains(px, py) {
            return Some(ControlAction::Nav(NavDirection::Next));
        }
        for (i, dot) in self.indicators.iter().enumerate() {
            if dot.contains(px, py) {
                return Some(ControlAction::GoTo(i));
            }
        }
        None
    }

    /// Builds the overlay triangle list for the current render model:
    /// chevron buttons, the play/pause glyph, and one dot per slide with
    /// exactly the active one highlighted.
    pub fn build_vertices(&self, frame: &SlideFrame) -> Vec<OverlayVertex> {
        let mut verts = Vec::new();

        self.push_quad(&mut verts, self.prev, BACKING_COLOR);
        self.push_quad(&mut verts, self.next, BACKING_COLOR);
        self.push_quad(&mut verts, self.play_pause, BACKING_COLOR);

        self.push_chevron(&mut verts, self.prev.inset(14.0), -1.0, GLYPH_COLOR);
        self.push_chevron(&mut verts, self.next.inset(14.0), 1.0, GLYPH_COLOR);

        let glyph = self.play_pause.inset(12.0);
        if frame.playing {
            // Pause bars.
            let bar_w = glyph.w * 0.3;
            self.push_quad(
                &mut verts,
                Rect {
                    x: glyph.x,
                    y: glyph.y,
                    w: bar_w,
                    h: glyph.h,
                },
                GLYPH_COLOR,
            );
            self.push_quad(
                &mut verts,
                Rect {
                    x: glyph.x + glyph.w - bar_w,
                    y: glyph.y,
                    w: bar_w,
                    h: glyph.h,
                },
                GLYPH_COLOR,
            );
        } else {
            // Play triangle pointing right.
            self.push_triangle(
                &mut verts,
                [glyph.x, glyph.y],
                [glyph.x, glyph.y + glyph.h],
                [glyph.x + glyph.w, glyph.y + glyph.h / 2.0],
                GLYPH_COLOR,
            );
        }

        for (i, dot) in self.indicators.iter().enumerate() {
            let color = if frame.active == Some(i) {
                INDICATOR_ACTIVE_COLOR
            } else {
                INDICATOR_COLOR
            };
            self.push_quad(&mut verts, *dot, color);
        }

        verts
    }

    fn to_ndc(&self, p: [f32; 2]) -> [f32; 2] {
        let (w, h) = self.surface;
        [p[0] / w * 2.0 - 1.0, 1.0 - p[1] / h * 2.0]
    }

    fn push_triangle(
        &self,
        verts: &mut Vec<OverlayVertex>,
        a: [f32; 2],
        b: [f32; 2],
        c: [f32; 2],
        color: [f32; 4],
    ) {
        for p in [a, b, c] {
            verts.push(OverlayVertex {
                position: self.to_ndc(p),
                color,
            });
        }
    }

    fn push_quad(&self, verts: &mut Vec<OverlayVertex>, r: Rect, color: [f32; 4]) {
        let tl = [r.x, r.y];
        let tr = [r.x + r.w, r.y];
        let bl = [r.x, r.y + r.h];
        let br = [r.x + r.w, r.y + r.h];
        self.push_triangle(verts, tl, bl, tr, color);
        self.push_triangle(verts, tr, bl, br, color);
    }

    fn push_segment(
        &self,
        verts: &mut Vec<OverlayVertex>,
        p: [f32; 2],
        q: [f32; 2],
        thickness: f32,
        color: [f32; 4],
    ) {
        let dx = q[0] - p[0];
        let dy = q[1] - p[1];
        let len = (dx * dx + dy * dy).sqrt().max(f32::EPSILON);
        let nx = -dy / len * thickness / 2.0;
        let ny = dx / len * thickness / 2.0;
        self.push_triangle(
            verts,
            [p[0] + nx, p[1] + ny],
            [p[0] - nx, p[1] - ny],
            [q[0] + nx, q[1] + ny],
            color,
        );
        self.push_triangle(
            verts,
            [q[0] + nx, q[1] + ny],
            [p[0] - nx, p[1] - ny],
            [q[0] - nx, q[1] - ny],
            color,
        );
    }

    // `dir` is -1.0 for a left-pointing chevron, 1.0 for right.
    fn push_chevron(&self, verts: &mut Vec<OverlayVertex>, r: Rect, dir: f32, color: [f32; 4]) {
        let (cx, cy) = r.center();
        let tip = [cx + dir * r.w / 2.0, cy];
        let top = [cx - dir * r.w / 2.0, r.y];
        let bottom = [cx - dir * r.w / 2.0, r.y + r.h];
        self.push_segment(verts, top, tip, 4.0, color);
        self.push_segment(verts, tip, bottom, 4.0, color);
    }
}
