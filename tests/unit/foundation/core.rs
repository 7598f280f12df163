use super::*;

#[test]
fn with_opacity_scales_alpha_only() {
    let c = Rgba8::GRAY.with_opacity(128);
    assert_eq!((c.r, c.g, c.b), (0x88, 0x88, 0x88));
    assert_eq!(c.a, 128);
    assert_eq!(Rgba8::GRAY.with_opacity(0).a, 0);
    assert_eq!(Rgba8::GRAY.with_opacity(255).a, 255);
}

#[test]
fn premultiplied_scales_channels_by_alpha() {
    let c = Rgba8 {
        r: 255,
        g: 0,
        b: 100,
        a: 128,
    };
    assert_eq!(c.premultiplied(), [128, 0, 50, 128]);
    assert_eq!(Rgba8::MAGENTA.premultiplied(), [255, 0, 255, 255]);
}

#[test]
fn colors_deserialize_from_json_objects() {
    let c: Rgba8 = serde_json::from_str(r#"{"r":1,"g":2,"b":3,"a":4}"#).unwrap();
    assert_eq!(
        c,
        Rgba8 {
            r: 1,
            g: 2,
            b: 3,
            a: 4
        }
    );
}

#[test]
fn frame_pixel_is_bounds_checked() {
    let frame = FrameRGBA {
        width: 2,
        height: 1,
        data: vec![1, 2, 3, 4, 5, 6, 7, 8],
        premultiplied: true,
    };
    assert_eq!(frame.pixel(1, 0), Some([5, 6, 7, 8]));
    assert_eq!(frame.pixel(2, 0), None);
    assert_eq!(frame.pixel(0, 1), None);
}

#[test]
fn straight_conversion_only_touches_premultiplied_frames() {
    let premul = FrameRGBA {
        width: 1,
        height: 1,
        data: vec![64, 0, 0, 128],
        premultiplied: true,
    };
    assert_eq!(premul.into_straight_rgba8(), vec![128, 0, 0, 128]);

    let straight = FrameRGBA {
        width: 1,
        height: 1,
        data: vec![64, 0, 0, 128],
        premultiplied: false,
    };
    assert_eq!(straight.into_straight_rgba8(), vec![64, 0, 0, 128]);
}
