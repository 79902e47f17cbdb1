//! Deterministic SVG encoding of a [`Scene`].
//!
//! The output is a standalone document: every gradient referenced anywhere in the tree is
//! declared once in `<defs>` under its own [`ResourceId`](crate::scene::ids::ResourceId), and
//! numbers are printed with a fixed precision so identical scenes encode to identical bytes.
//! Node keys are written as `data-key`, leaving the `id` namespace to gradients.

use crate::scene::model::{
    FontSpec, LineCap, LinearGradient, Node, Paint, Scene, Stroke, Transform2D,
};
use crate::style::color::Color;
use std::fmt::Write as _;

/// Encode `scene` as an SVG document.
pub fn to_svg(scene: &Scene) -> String {
    let mut out = String::with_capacity(2048);
    let _ = write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = scene.width,
        h = scene.height
    );

    let gradients = scene.gradients();
    if !gradients.is_empty() {
        out.push_str("<defs>");
        for g in gradients {
            write_gradient(&mut out, g);
        }
        out.push_str("</defs>");
    }

    for n in &scene.nodes {
        write_node(&mut out, n);
    }
    out.push_str("</svg>");
    out
}

/// Format a number for SVG attributes: integers plainly, everything else with at most four
/// decimals and no trailing zeros.
pub(crate) fn fmt_num(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_owned();
    }
    let mut s = format!("{v:.4}");
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    if s == "-0" {
        s = "0".to_owned();
    }
    s
}

fn write_gradient(out: &mut String, g: &LinearGradient) {
    let _ = write!(
        out,
        r#"<linearGradient id="{}" x1="{}%" y1="{}%" x2="{}%" y2="{}%">"#,
        escape(g.id.as_str()),
        fmt_num(g.start.x * 100.0),
        fmt_num(g.start.y * 100.0),
        fmt_num(g.end.x * 100.0),
        fmt_num(g.end.y * 100.0),
    );
    for s in &g.stops {
        let _ = write!(
            out,
            r#"<stop offset="{}%" stop-color="{}""#,
            fmt_num(s.offset * 100.0),
            s.color.to_hex_rgb()
        );
        if s.color.a < 1.0 {
            let _ = write!(out, r#" stop-opacity="{}""#, fmt_num(s.color.a));
        }
        out.push_str("/>");
    }
    out.push_str("</linearGradient>");
}

fn write_node(out: &mut String, node: &Node) {
    match node {
        Node::Group {
            key,
            transform,
            children,
        } => {
            let _ = write!(out, r#"<g data-key="{}""#, escape(key));
            write_transform(out, *transform);
            out.push('>');
            for c in children {
                write_node(out, c);
            }
            out.push_str("</g>");
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
            let _ = write!(
                out,
                r#"<ellipse data-key="{}" cx="{}" cy="{}" rx="{}" ry="{}""#,
                escape(key),
                fmt_num(center.x),
                fmt_num(center.y),
                fmt_num(*rx),
                fmt_num(*ry)
            );
            write_paint(out, "fill", fill);
            if let Some(s) = stroke {
                write_stroke(out, s);
            }
            write_transform(out, *transform);
            out.push_str("/>");
        }
        Node::Circle {
            key,
            center,
            r,
            fill,
            transform,
        } => {
            let _ = write!(
                out,
                r#"<circle data-key="{}" cx="{}" cy="{}" r="{}""#,
                escape(key),
                fmt_num(center.x),
                fmt_num(center.y),
                fmt_num(*r)
            );
            write_paint(out, "fill", fill);
            write_transform(out, *transform);
            out.push_str("/>");
        }
        Node::Text {
            key,
            text,
            anchor,
            font,
            fill,
            transform,
        } => {
            let _ = write!(
                out,
                r#"<text data-key="{}" x="{}" y="{}" text-anchor="middle""#,
                escape(key),
                fmt_num(anchor.x),
                fmt_num(anchor.y)
            );
            write_font(out, font);
            write_paint(out, "fill", fill);
            write_transform(out, *transform);
            out.push('>');
            out.push_str(&escape(text));
            out.push_str("</text>");
        }
    }
}

fn write_transform(out: &mut String, t: Transform2D) {
    if t.is_identity() {
        return;
    }
    let [a, b, c, d, e, f] = t.to_affine().as_coeffs();
    let _ = write!(
        out,
        r#" transform="matrix({} {} {} {} {} {})""#,
        fmt_num(a),
        fmt_num(b),
        fmt_num(c),
        fmt_num(d),
        fmt_num(e),
        fmt_num(f)
    );
}

fn write_paint(out: &mut String, attr: &str, paint: &Paint) {
    match paint {
        Paint::None => {
            let _ = write!(out, r#" {attr}="none""#);
        }
        Paint::Solid { color } => {
            let _ = write!(out, r#" {attr}="{}""#, color.to_hex_rgb());
            write_opacity(out, attr, *color);
        }
        Paint::LinearGradient(g) => {
            let _ = write!(out, r#" {attr}="url(#{})""#, escape(g.id.as_str()));
        }
    }
}

fn write_opacity(out: &mut String, attr: &str, color: Color) {
    if color.a < 1.0 {
        let _ = write!(out, r#" {attr}-opacity="{}""#, fmt_num(color.a));
    }
}

fn write_stroke(out: &mut String, s: &Stroke) {
    write_paint(out, "stroke", &s.paint);
    let _ = write!(out, r#" stroke-width="{}""#, fmt_num(s.width));
    if let Some(d) = s.dash_array {
        let _ = write!(
            out,
            r#" stroke-dasharray="{}" stroke-dashoffset="{}""#,
            fmt_num(d),
            fmt_num(s.dash_offset)
        );
    }
    let cap = match s.line_cap {
        LineCap::Butt => "butt",
        LineCap::Round => "round",
        LineCap::Square => "square",
    };
    let _ = write!(out, r#" stroke-linecap="{cap}""#);
}

fn write_font(out: &mut String, f: &FontSpec) {
    let _ = write!(
        out,
        r#" font-family="{}" font-size="{}" font-weight="{}""#,
        escape(&f.family),
        fmt_num(f.size_px),
        f.weight
    );
}

/// Whether `ch` may appear in XML 1.0 character data.
pub(crate) fn is_xml_char(ch: char) -> bool {
    matches!(ch, '\t' | '\n' | '\r') || (ch >= ' ' && !matches!(ch, '\u{FFFE}' | '\u{FFFF}'))
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            c if !is_xml_char(c) => {}
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/scene/svg.rs"]
mod tests;
