use iconline::themes::*;
use iconline::{define_style, IconlineError, StyleSpec};

#[test]
fn test_more_darkness_is_strictly_darker() {
    let transform = ColorTransform::default();
    let base = Color::parse("#da8548").unwrap();

    for (d1, d2) in [(0.0, 5.0), (5.0, 10.0), (10.0, 20.0), (20.0, 40.0)] {
        let lighter = transform.adjust(base, Some(d1), Some(30.0));
        let darker = transform.adjust(base, Some(d2), Some(30.0));
        assert!(
            darker.lightness() < lighter.lightness(),
            "darkness {} should be darker than {}",
            d2,
            d1
        );
    }
}

#[test]
fn test_omitted_parameters_use_defaults() {
    let transform = ColorTransform::default();
    let base = Color::parse("#98be65").unwrap();

    assert_eq!(
        transform.adjust(base, None, None),
        transform.adjust(base, Some(DEFAULT_DARKNESS), Some(DEFAULT_DESATURATION))
    );
    assert_eq!(
        transform.adjust(base, Some(10.0), None),
        transform.adjust(base, Some(10.0), Some(DEFAULT_DESATURATION))
    );
}

#[test]
fn test_adjust_darkens_then_desaturates() {
    let transform = ColorTransform::new(15.0, 25.0);
    let base = Color::parse("#51afef").unwrap();

    let expected = base.darken(15.0).desaturate(25.0);
    assert_eq!(transform.adjust(base, None, None), expected);

    let adjusted = transform.adjust(base, None, None);
    assert!(adjusted.saturation() < base.saturation());
    assert!(adjusted.lightness() < base.lightness());
}

#[test]
fn test_darken_clamps_at_black() {
    let black = Color::parse("#202020").unwrap().darken(100.0);
    assert_eq!(black.to_hex(), "#000000");
}

#[test]
fn test_invalid_color_is_an_error() {
    let transform = ColorTransform::default();

    assert!(matches!(
        transform.adjust_name("definitely-not-a-color", None, None),
        Err(IconlineError::InvalidColor(_))
    ));
    assert!(Color::parse("#12345").is_err());
    assert!(Color::parse("#gggggg").is_err());
    assert!(Color::parse("#+f+f+f").is_err());
    assert!(Color::parse("#+ff").is_err());

    let mut faces = FaceRegistry::default();
    let err = define_style(&mut faces, "warm", &StyleSpec::new("#zzz")).unwrap_err();
    assert!(matches!(err, IconlineError::InvalidColor(ref spec) if spec == "#zzz"));
    assert!(faces.is_empty());
}

#[test]
fn test_make_pair_names_follow_element_name() {
    let mut faces = FaceRegistry::default();
    let color = Color::parse("#da8548").unwrap();

    let pair = faces.make_pair("warm", color, None, None, None);

    assert_eq!(pair.active.as_str(), "warm-active");
    assert_eq!(pair.inactive.as_str(), "warm-inactive");
    assert_ne!(pair.active, pair.inactive);
    assert_eq!(faces.len(), 2);
}

#[test]
fn test_inactive_face_uses_adjusted_foreground() {
    let transform = ColorTransform::new(30.0, 10.0);
    let mut faces = FaceRegistry::new(transform);
    let color = Color::parse("#bbc2cf").unwrap();
    let extra = FaceAttributes::default().with_height(1.2).with_weight(Weight::Bold);

    let pair = faces.make_pair("plain", color, None, None, Some(&extra));

    let active = faces.get(&pair.active).unwrap();
    assert_eq!(active.foreground, Some(color));
    assert_eq!(active.height, Some(1.2));
    assert_eq!(active.weight, Some(Weight::Bold));

    let inactive = faces.get(&pair.inactive).unwrap();
    assert_eq!(inactive.foreground, Some(transform.adjust(color, None, None)));
    assert_eq!(inactive.height, Some(1.2));
}

#[test]
fn test_explicit_color_wins_over_extra_foreground() {
    let mut faces = FaceRegistry::default();
    let color = Color::parse("red").unwrap();
    let extra = FaceAttributes::foreground(Color::parse("blue").unwrap());

    let id = faces.make_active_face("alert", color, Some(&extra));

    assert_eq!(faces.get(&id).unwrap().foreground, Some(color));
}

#[test]
fn test_reregistering_a_face_is_idempotent() {
    let mut faces = FaceRegistry::default();
    let color = Color::parse("#98be65").unwrap();

    let first = faces.make_pair("cool", color, Some(10.0), None, None);
    let snapshot = faces.get(&first.inactive).cloned();
    let second = faces.make_pair("cool", color, Some(10.0), None, None);

    assert_eq!(first, second);
    assert_eq!(faces.len(), 2);
    assert_eq!(faces.get(&second.inactive).cloned(), snapshot);
}
