use super::*;

#[test]
fn css_table_is_sorted_for_binary_search() {
    for pair in CSS_COLORS.windows(2) {
        assert!(pair[0].0 < pair[1].0, "{} >= {}", pair[0].0, pair[1].0);
    }
}

#[test]
fn named_colors_resolve_case_insensitively() {
    assert_eq!(Color::from("black").to_rgba8().unwrap(), [0, 0, 0, 255]);
    assert_eq!(Color::from("White").to_rgba8().unwrap(), [255, 255, 255, 255]);
    assert_eq!(
        Color::from(" RebeccaPurple ").to_rgba8().unwrap(),
        [102, 51, 153, 255]
    );
    assert_eq!(Color::from("transparent").to_rgba8().unwrap(), [0, 0, 0, 0]);
}

#[test]
fn hex_forms_resolve() {
    assert_eq!(Color::from("#f00").to_rgba8().unwrap(), [255, 0, 0, 255]);
    assert_eq!(Color::from("#f008").to_rgba8().unwrap(), [255, 0, 0, 136]);
    assert_eq!(
        Color::from("#123456").to_rgba8().unwrap(),
        [0x12, 0x34, 0x56, 255]
    );
    assert_eq!(
        Color::from("#12345678").to_rgba8().unwrap(),
        [0x12, 0x34, 0x56, 0x78]
    );
    assert!(Color::from("#12345").to_rgba8().is_err());
    assert!(Color::from("#zzzzzz").to_rgba8().is_err());
}

#[test]
fn unknown_name_is_invalid_argument() {
    let err = Color::from("blurple").to_rgba8().unwrap_err();
    assert!(matches!(err, EaselError::InvalidArgument(_)));
}

#[test]
fn numeric_forms_resolve() {
    assert_eq!(Color::from(40u8).to_rgba8().unwrap(), [40, 40, 40, 255]);
    assert_eq!(Color::from((1, 2, 3)).to_rgba8().unwrap(), [1, 2, 3, 255]);
    assert_eq!(Color::from((1, 2, 3, 4)).to_rgba8().unwrap(), [1, 2, 3, 4]);
}

#[test]
fn deserializes_every_union_arm() {
    let c: Color = serde_json::from_str("\"navy\"").unwrap();
    assert_eq!(c, Color::Named("navy".to_owned()));
    let c: Color = serde_json::from_str("128").unwrap();
    assert_eq!(c, Color::Gray(128));
    let c: Color = serde_json::from_str("[1,2,3]").unwrap();
    assert_eq!(c, Color::Rgb([1, 2, 3]));
    let c: Color = serde_json::from_str("[1,2,3,4]").unwrap();
    assert_eq!(c, Color::Rgba([1, 2, 3, 4]));
    assert!(serde_json::from_str::<Color>("[1,2]").is_err());
}
