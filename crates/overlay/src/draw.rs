use crate::classes::ClassNames;
use crate::style::{ACCENT_COLOR, GUIDE_COLOR, OverlayStyle};
use ab_glyph::PxScale;
use detection::Detection;
use image::{Rgb, RgbImage};
use imageproc::drawing::{
    draw_filled_rect_mut, draw_hollow_rect_mut, draw_line_segment_mut, draw_text_mut,
};
use imageproc::rect::Rect;

// Rough text metrics for label backgrounds, in pixels at scale 1.0
const FONT_PX_PER_SCALE: f32 = 40.0;
const CHAR_WIDTH_FACTOR: f32 = 0.55;

/// Draw detection boxes and labels onto a frame-sized RGB image.
pub fn draw_detections(
    image: &mut RgbImage,
    detections: &[Detection],
    style: &OverlayStyle,
    classes: &ClassNames,
) {
    for det in detections {
        draw_box(image, det, style.box_color, style.box_thickness);

        let mut label = String::new();
        if style.show_class_name {
            label = classes.label(det.class_id);
        }
        if style.show_confidence {
            if !label.is_empty() {
                label.push(' ');
            }
            label.push_str(&format!("{}%", (det.score * 100.0) as i32));
        }

        draw_label(image, det, &label, style);
    }
}

/// FOV view: center crosshair, frame border, detection boxes, a guide line
/// from the FOV center to each detection, and distance/angle readouts.
pub fn draw_fov_overlay(image: &mut RgbImage, detections: &[Detection], style: &OverlayStyle) {
    let (width, height) = image.dimensions();
    let center = (width as f32 / 2.0, height as f32 / 2.0);
    let accent = Rgb(ACCENT_COLOR);

    draw_line_segment_mut(
        image,
        (center.0 - 10.0, center.1),
        (center.0 + 10.0, center.1),
        accent,
    );
    draw_line_segment_mut(
        image,
        (center.0, center.1 - 10.0),
        (center.0, center.1 + 10.0),
        accent,
    );
    draw_hollow_rect_mut(image, Rect::at(0, 0).of_size(width, height), accent);

    for det in detections {
        draw_box(image, det, style.box_color, style.box_thickness);

        let target = det.bbox.center();
        draw_line_segment_mut(image, center, target, Rgb(GUIDE_COLOR));

        let info = format!(
            "D:{} A:{}",
            (det.fov_distance * 100.0) as i32,
            det.fov_angle.to_degrees() as i32
        );
        draw_text(image, det.bbox.x, det.bbox.y - 5, &info, style);
    }
}

fn draw_box(image: &mut RgbImage, det: &Detection, color: [u8; 3], thickness: u32) {
    for t in 0..thickness as i32 {
        let width = det.bbox.width - 2 * t;
        let height = det.bbox.height - 2 * t;
        if width <= 0 || height <= 0 {
            break;
        }
        draw_hollow_rect_mut(
            image,
            Rect::at(det.bbox.x + t, det.bbox.y + t).of_size(width as u32, height as u32),
            Rgb(color),
        );
    }
}

fn draw_label(image: &mut RgbImage, det: &Detection, label: &str, style: &OverlayStyle) {
    if label.is_empty() {
        return;
    }
    let Some(font) = &style.font else {
        return;
    };

    let px = FONT_PX_PER_SCALE * style.text_scale;
    let text_width = (label.len() as f32 * px * CHAR_WIDTH_FACTOR) as u32;
    let text_height = px as u32 + 4;

    let x = det.bbox.x.max(0);
    let y = (det.bbox.y - text_height as i32).max(0);
    if text_width > 0 {
        draw_filled_rect_mut(
            image,
            Rect::at(x, y).of_size(text_width, text_height),
            Rgb(style.box_color),
        );
        draw_text_mut(
            image,
            Rgb(style.text_color),
            x,
            y + 2,
            PxScale::from(px),
            font,
            label,
        );
    }
}

fn draw_text(image: &mut RgbImage, x: i32, y: i32, text: &str, style: &OverlayStyle) {
    let Some(font) = &style.font else {
        return;
    };
    draw_text_mut(
        image,
        Rgb(style.text_color),
        x.max(0),
        y.max(0),
        PxScale::from(FONT_PX_PER_SCALE * style.text_scale),
        font,
        text,
    );
}
