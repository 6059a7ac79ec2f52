//! Paint to CSS color conversion.

use draft_core::{format_number, ColorStop, Paint, PaintKind, Rgb};
use glam::DAffine2;

/// Resolve a paint into a CSS color or gradient value.
///
/// Solid paints become `#rrggbb`, or `rgba(...)` when translucent. Linear
/// gradients become `linear-gradient(...)`. Every other kind resolves to an
/// empty string; callers omit the declaration.
pub fn resolve_color(paint: &Paint) -> String {
    match &paint.kind {
        PaintKind::Solid { color } => match paint.opacity {
            Some(opacity) if opacity < 1.0 => format!(
                "rgba({}, {}, {}, {})",
                floor_channel(color.r),
                floor_channel(color.g),
                floor_channel(color.b),
                format_number(opacity)
            ),
            _ => hex(color),
        },
        PaintKind::GradientLinear {
            gradient_stops,
            gradient_transform,
        } => linear_gradient(gradient_stops, gradient_transform),
        PaintKind::Image { .. } | PaintKind::Unsupported => {
            tracing::debug!(kind = ?paint.kind, "paint has no css color");
            String::new()
        }
    }
}

fn floor_channel(value: f64) -> u8 {
    (value * 255.0).floor().clamp(0.0, 255.0) as u8
}

fn round_channel(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

fn hex(color: &Rgb) -> String {
    format!(
        "#{:02x}{:02x}{:02x}",
        floor_channel(color.r),
        floor_channel(color.g),
        floor_channel(color.b)
    )
}

/// Two decimal places is well below anything a browser distinguishes.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Angle in CSS degrees of a gradient whose handle positions are given by the
/// host's 2x3 affine transform `[[a, c, tx], [b, d, ty]]`.
///
/// CSS measures gradient angles from "to top", while the decomposed rotation
/// is measured from the positive x axis, hence the quarter-turn offset.
pub fn gradient_angle(transform: &[[f64; 3]; 2]) -> f64 {
    let [[a, c, tx], [b, d, ty]] = *transform;
    let affine = DAffine2::from_cols_array(&[a, b, c, d, tx, ty]);
    let (_scale, rotation, _translation) = affine.to_scale_angle_translation();
    round2(rotation.to_degrees() - 90.0)
}

/// Empty when there are no stops; a stop-less gradient is not valid CSS.
fn linear_gradient(stops: &[ColorStop], transform: &[[f64; 3]; 2]) -> String {
    if stops.is_empty() {
        return String::new();
    }
    let stops = stops
        .iter()
        .map(|stop| {
            format!(
                "rgba({}, {}, {}, {}) {}%",
                round_channel(stop.color.r),
                round_channel(stop.color.g),
                round_channel(stop.color.b),
                format_number(stop.color.a),
                format_number(round2(stop.position * 100.0))
            )
        })
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "linear-gradient({}deg, {})",
        format_number(gradient_angle(transform)),
        stops
    )
}
