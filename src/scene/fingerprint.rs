use crate::scene::model::{
    FontSpec, LineCap, LinearGradient, Node, Paint, Scene, Stroke, Transform2D,
};
use crate::style::color::Color;
use kurbo::Point;
use xxhash_rust::xxh3::Xxh3;

const XXH3_SEED: u64 = 0x8b5ad4a0c7d8e9f1;

/// Stable 128-bit fingerprint of a scene's visual content.
///
/// The frame number is not hashed: two frames that draw the same picture share a fingerprint,
/// which lets the render pipeline reuse pixels once every spring has settled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SceneFingerprint {
    /// High 64 bits.
    pub hi: u64,
    /// Low 64 bits.
    pub lo: u64,
}

/// Fingerprint everything in `scene` that influences its pixels.
pub fn fingerprint_scene(scene: &Scene) -> SceneFingerprint {
    let mut h = StableHasher::new();
    h.write_u32(scene.width);
    h.write_u32(scene.height);
    h.write_u32(scene.nodes.len() as u32);
    for n in &scene.nodes {
        write_node(&mut h, n);
    }
    h.finish()
}

struct StableHasher {
    inner: Xxh3,
}

impl StableHasher {
    fn new() -> Self {
        Self {
            inner: Xxh3::with_seed(XXH3_SEED),
        }
    }

    fn write_bytes(&mut self, b: &[u8]) {
        self.inner.update(b);
    }

    fn write_u8(&mut self, v: u8) {
        self.write_bytes(&[v]);
    }

    fn write_u16(&mut self, v: u16) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_u32(&mut self, v: u32) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_f64(&mut self, v: f64) {
        self.write_u64(v.to_bits());
    }

    fn write_str(&mut self, s: &str) {
        self.write_u32(s.len() as u32);
        self.write_bytes(s.as_bytes());
    }

    fn write_point(&mut self, p: Point) {
        self.write_f64(p.x);
        self.write_f64(p.y);
    }

    fn finish(self) -> SceneFingerprint {
        let v = self.inner.digest128();
        SceneFingerprint {
            hi: (v >> 64) as u64,
            lo: v as u64,
        }
    }
}

fn write_node(h: &mut StableHasher, node: &Node) {
    match node {
        Node::Group {
            key,
            transform,
            children,
        } => {
            h.write_u8(0);
            h.write_str(key);
            write_transform(h, *transform);
            h.write_u32(children.len() as u32);
            for c in children {
                write_node(h, c);
            }
        }
        Node::Ellipse {
            key,
            center,
            rx,
            ry,
            fill,
            stroke,
            transform,
        } => {
            h.write_u8(1);
            h.write_str(key);
            h.write_point(*center);
            h.write_f64(*rx);
            h.write_f64(*ry);
            write_paint(h, fill);
            match stroke {
                Some(s) => {
                    h.write_u8(1);
                    write_stroke(h, s);
                }
                None => h.write_u8(0),
            }
            write_transform(h, *transform);
        }
        Node::Circle {
            key,
            center,
            r,
            fill,
            transform,
        } => {
            h.write_u8(2);
            h.write_str(key);
            h.write_point(*center);
            h.write_f64(*r);
            write_paint(h, fill);
            write_transform(h, *transform);
        }
        Node::Text {
            key,
            text,
            anchor,
            font,
            fill,
            transform,
        } => {
            h.write_u8(3);
            h.write_str(key);
            h.write_str(text);
            h.write_point(*anchor);
            write_font(h, font);
            write_paint(h, fill);
            write_transform(h, *transform);
        }
    }
}

fn write_transform(h: &mut StableHasher, t: Transform2D) {
    h.write_point(t.origin);
    h.write_f64(t.rotation_deg);
    h.write_f64(t.scale);
}

fn write_color(h: &mut StableHasher, c: Color) {
    for v in [c.r, c.g, c.b, c.a] {
        h.write_f64(v);
    }
}

fn write_paint(h: &mut StableHasher, p: &Paint) {
    match p {
        Paint::None => h.write_u8(0),
        Paint::Solid { color } => {
            h.write_u8(1);
            write_color(h, *color);
        }
        Paint::LinearGradient(g) => {
            h.write_u8(2);
            write_gradient(h, g);
        }
    }
}

fn write_gradient(h: &mut StableHasher, g: &LinearGradient) {
    h.write_str(g.id.as_str());
    h.write_point(g.start);
    h.write_point(g.end);
    h.write_u32(g.stops.len() as u32);
    for s in &g.stops {
        h.write_f64(s.offset);
        write_color(h, s.color);
    }
}

fn write_stroke(h: &mut StableHasher, s: &Stroke) {
    write_paint(h, &s.paint);
    h.write_f64(s.width);
    match s.dash_array {
        Some(d) => {
            h.write_u8(1);
            h.write_f64(d);
        }
        None => h.write_u8(0),
    }
    h.write_f64(s.dash_offset);
    h.write_u8(match s.line_cap {
        LineCap::Butt => 0,
        LineCap::Round => 1,
        LineCap::Square => 2,
    });
}

fn write_font(h: &mut StableHasher, f: &FontSpec) {
    h.write_str(&f.family);
    h.write_f64(f.size_px);
    h.write_u16(f.weight);
}

#[cfg(test)]
#[path = "../../tests/unit/scene/fingerprint.rs"]
mod tests;
