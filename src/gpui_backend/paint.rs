use gpui::{
    App, BorderStyle, Bounds, Corners, Edges, PathBuilder, Pixels, Point, TextRun, Window, font,
    point, px, quad,
};

use crate::geom::ScreenPoint;
use crate::marker::MarkerShape;
use crate::render::{RenderCommand, RenderList, TextAnchor};

use super::config::{Color, ScatterViewConfig};

/// A render list positioned inside the window.
#[derive(Debug, Clone)]
pub(crate) struct ScatterFrame {
    pub(crate) origin: ScreenPoint,
    pub(crate) render: RenderList,
}

pub(crate) fn paint_frame(
    frame: &ScatterFrame,
    config: &ScatterViewConfig,
    window: &mut Window,
    cx: &mut App,
) {
    let origin = frame.origin;
    for command in frame.render.commands() {
        match command {
            RenderCommand::Point { at, shape, size } => {
                paint_marker(window, at.offset(origin), *shape, *size, config.marker);
            }
            RenderCommand::Line { start, end } => {
                paint_stroke(
                    window,
                    &[start.offset(origin), end.offset(origin)],
                    false,
                    config.axis,
                );
            }
            RenderCommand::Text { at, text, anchor } => {
                paint_text(window, cx, at.offset(origin), text, *anchor, config);
            }
            RenderCommand::Polygon { points } => {
                let points: Vec<ScreenPoint> = points.iter().map(|p| p.offset(origin)).collect();
                paint_stroke(window, &points, true, config.axis);
            }
            RenderCommand::Ring { center, radius } => {
                paint_ring(window, center.offset(origin), *radius, config);
            }
        }
    }
}

fn paint_marker(window: &mut Window, at: ScreenPoint, shape: MarkerShape, size: f64, color: Color) {
    let half = (size.max(2.0) * 0.5) as f32;
    let (x, y) = (at.x as f32, at.y as f32);
    match shape {
        MarkerShape::Circle | MarkerShape::Square => {
            let corner = if shape == MarkerShape::Circle { half } else { 0.0 };
            let bounds = Bounds::from_corners(
                point(px(x - half), px(y - half)),
                point(px(x + half), px(y + half)),
            );
            window.paint_quad(quad(
                bounds,
                Corners::all(px(corner)),
                to_rgba(color),
                Edges::all(px(0.0)),
                to_rgba(color),
                BorderStyle::default(),
            ));
        }
        MarkerShape::Triangle => {
            let vertices = shape.vertices(at, half as f64);
            let mut builder = PathBuilder::fill();
            trace_polygon(&mut builder, &vertices, true);
            if let Ok(path) = builder.build() {
                window.paint_path(path, to_rgba(color));
            }
        }
    }
}

fn paint_stroke(window: &mut Window, points: &[ScreenPoint], closed: bool, color: Color) {
    if points.len() < 2 {
        return;
    }
    let mut builder = PathBuilder::stroke(px(1.0));
    trace_polygon(&mut builder, points, closed);
    if let Ok(path) = builder.build() {
        window.paint_path(path, to_rgba(color));
    }
}

fn trace_polygon(builder: &mut PathBuilder, points: &[ScreenPoint], closed: bool) {
    let Some((first, rest)) = points.split_first() else {
        return;
    };
    builder.move_to(to_point(*first));
    for p in rest {
        builder.line_to(to_point(*p));
    }
    if closed {
        builder.line_to(to_point(*first));
    }
}

fn paint_ring(window: &mut Window, center: ScreenPoint, radius: f64, config: &ScatterViewConfig) {
    let r = radius as f32;
    let (x, y) = (center.x as f32, center.y as f32);
    let bounds = Bounds::from_corners(point(px(x - r), px(y - r)), point(px(x + r), px(y + r)));
    window.paint_quad(quad(
        bounds,
        Corners::all(px(r)),
        to_rgba(Color::new(0.0, 0.0, 0.0, 0.0)),
        Edges::all(px(config.highlight_width)),
        to_rgba(config.highlight),
        BorderStyle::default(),
    ));
}

fn paint_text(
    window: &mut Window,
    cx: &mut App,
    at: ScreenPoint,
    text: &str,
    anchor: TextAnchor,
    config: &ScatterViewConfig,
) {
    if text.is_empty() {
        return;
    }
    let run = TextRun {
        len: text.len(),
        font: font(".SystemUIFont"),
        color: to_hsla(config.text),
        background_color: None,
        underline: None,
        strikethrough: None,
    };
    let shaped =
        window
            .text_system()
            .shape_line(text.to_string().into(), px(config.font_size), &[run], None);
    let line_height = shaped.ascent + shaped.descent;
    let width = f32::from(shaped.width);
    let height = f32::from(line_height);
    let (x, y) = (at.x as f32, at.y as f32);
    let (left, top) = match anchor {
        TextAnchor::North => (x - width * 0.5, y),
        TextAnchor::East => (x - width, y - height * 0.5),
        TextAnchor::West => (x, y - height * 0.5),
    };
    let _ = shaped.paint(point(px(left), px(top)), line_height, window, cx);
}

fn to_point(p: ScreenPoint) -> Point<Pixels> {
    point(px(p.x as f32), px(p.y as f32))
}

fn to_rgba(color: Color) -> gpui::Rgba {
    gpui::Rgba {
        r: color.r,
        g: color.g,
        b: color.b,
        a: color.a,
    }
}

pub(crate) fn to_hsla(color: Color) -> gpui::Hsla {
    gpui::Hsla::from(to_rgba(color))
}
