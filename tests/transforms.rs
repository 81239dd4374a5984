use image::{Rgb as Pixel, RgbImage};
use pretty_assertions::assert_eq;

use wallprep::core::processing::padding::paste_offsets;
use wallprep::core::processing::resize::{FitAxis, calculate_fit_dimensions};
use wallprep::{CanvasSpec, MaskParams, Rect, ResampleFilter, Rgb, compose, cover};

#[test]
fn reference_scenario_800x600_on_default_canvas() {
    let canvas = CanvasSpec::default();
    let fit = calculate_fit_dimensions(800, 600, &canvas).unwrap();
    assert_eq!(fit.axis, FitAxis::Width);
    assert_eq!((fit.width, fit.height), (1080, 810));
    assert_eq!(paste_offsets(fit.width, &canvas), (0, 640));

    let src = RgbImage::from_pixel(800, 600, Pixel([0, 0, 0]));
    let out = compose(&src, &canvas, ResampleFilter::Lanczos3).unwrap();
    assert_eq!(out.dimensions(), (1080, 1920));
    for x in 0..1080 {
        assert_eq!(out.get_pixel(x, 639).0, [255, 255, 255]);
        assert!(out.get_pixel(x, 640).0[0] <= 1);
        assert!(out.get_pixel(x, 1449).0[0] <= 1);
        assert_eq!(out.get_pixel(x, 1450).0, [255, 255, 255]);
    }
}

#[test]
fn compose_output_always_matches_canvas() {
    let sources = [(1, 1), (5, 3), (3, 5), (640, 480), (480, 640), (2000, 10)];
    let canvases = [(1080, 1920), (1920, 1080), (100, 100), (33, 101)];
    for (sw, sh) in sources {
        let src = RgbImage::from_fn(sw, sh, |x, y| Pixel([x as u8, y as u8, 128]));
        for (cw, ch) in canvases {
            let canvas = CanvasSpec {
                width: cw,
                height: ch,
                background: Rgb::new(1, 2, 3),
            };
            let out = compose(&src, &canvas, ResampleFilter::Mitchell).unwrap();
            assert_eq!(out.dimensions(), (cw, ch), "{sw}x{sh} onto {cw}x{ch}");
            // The top third is always pure background.
            for y in 0..canvas.top_offset() {
                assert_eq!(out.get_pixel(cw / 2, y).0, [1, 2, 3]);
            }
        }
    }
}

#[test]
fn aspect_ratio_survives_within_one_rounding_step() {
    let canvas = CanvasSpec::default();
    for (w, h) in [(4000, 3000), (1000, 3000), (1234, 567), (567, 1234), (1, 7)] {
        let fit = calculate_fit_dimensions(w, h, &canvas).unwrap();
        let src_ratio = w as f64 / h as f64;
        let out_ratio = fit.width as f64 / fit.height as f64;
        // The free side is off by at most half a pixel.
        let tolerance = match fit.axis {
            FitAxis::Width => src_ratio * 0.5 / fit.height as f64,
            FitAxis::Height => 0.5 / fit.height as f64,
        };
        assert!(
            (out_ratio - src_ratio).abs() <= tolerance + 1e-12,
            "{w}x{h} -> {fit:?}"
        );
    }
}

#[test]
fn default_mask_on_large_image_covers_exact_rectangle() {
    let mask = MaskParams::default();
    let src = RgbImage::from_pixel(1200, 1000, Pixel([0, 0, 0]));
    let out = cover(&src, &mask.rect, mask.fill);
    let covered = out.enumerate_pixels().filter(|(_, _, p)| p.0 == [255, 255, 255]);
    let (mut min_x, mut min_y, mut max_x, mut max_y, mut count) = (u32::MAX, u32::MAX, 0, 0, 0);
    for (x, y, _) in covered {
        min_x = min_x.min(x);
        min_y = min_y.min(y);
        max_x = max_x.max(x);
        max_y = max_y.max(y);
        count += 1;
    }
    assert_eq!((min_x, min_y, max_x, max_y), (207, 607, 437, 639));
    assert_eq!(count, 231 * 33);
}

#[test]
fn mask_outside_image_is_byte_identical() {
    let src = RgbImage::from_fn(100, 100, |x, y| Pixel([x as u8, y as u8, 3]));
    let out = cover(&src, &Rect::new(207, 607, 230, 32), Rgb::WHITE);
    assert_eq!(out.as_raw(), src.as_raw());
}
