use super::*;

#[test]
fn clear_fills_every_pixel() {
    let mut s = CpuSurface::new(8, 6).unwrap();
    s.clear(Rgba8::opaque(10, 20, 30)).unwrap();
    let frame = s.snapshot();
    assert_eq!((frame.width, frame.height), (8, 6));
    assert!(frame.premultiplied);
    assert_eq!(frame.data.len(), 8 * 6 * 4);
    for px in frame.data.chunks_exact(4) {
        assert_eq!(px, [10, 20, 30, 255]);
    }
}

#[test]
fn stroked_line_changes_pixels_along_it() {
    let mut s = CpuSurface::new(32, 32).unwrap();
    s.clear(Rgba8::BLACK).unwrap();
    s.draw_line(
        Point::new(2.0, 16.0),
        Point::new(30.0, 16.0),
        &PaintStyle::new(Rgba8::opaque(255, 255, 255), 4.0),
    )
    .unwrap();
    assert_eq!(s.draw_calls(), 1);
    let frame = s.snapshot();
    let on_line = frame.pixel(16, 16).unwrap();
    let off_line = frame.pixel(16, 2).unwrap();
    assert!(on_line[0] > 200, "{on_line:?}");
    assert_eq!(off_line, [0, 0, 0, 255]);
}

#[test]
fn transparent_paint_is_skipped() {
    let mut s = CpuSurface::new(4, 4).unwrap();
    s.clear(Rgba8::BLACK).unwrap();
    let mut path = BezPath::new();
    path.move_to((0.0, 0.0));
    path.line_to((4.0, 4.0));
    s.draw_path(&path, &PaintStyle::new(Rgba8::GRAY.with_opacity(0), 2.0))
        .unwrap();
    s.draw_path(&BezPath::new(), &PaintStyle::new(Rgba8::GRAY, 2.0))
        .unwrap();
    assert_eq!(s.draw_calls(), 0);
}

#[test]
fn oversized_or_empty_surfaces_are_rejected() {
    assert!(CpuSurface::new(70_000, 10).is_err());
    assert!(CpuSurface::new(0, 10).is_err());
}
