use super::*;

#[test]
fn kind_names_roundtrip() {
    for kind in OpKind::ALL {
        assert_eq!(kind.as_str().parse::<OpKind>().unwrap(), kind);
        assert_eq!(kind.to_string(), kind.as_str());
    }
}

#[test]
fn unknown_name_is_unknown_operation() {
    let err = Op::from_name("sparkle", []).unwrap_err();
    assert!(matches!(err, EaselError::UnknownOperation(ref n) if n == "sparkle"));
}

#[test]
fn defaults_fill_in_optional_parameters() {
    let op = Op::from_params(OpKind::RoundedCorners, []).unwrap();
    assert_eq!(op, Op::RoundedCorners(RoundedCornersArgs::default()));

    let op = Op::from_params(OpKind::Blur, [Param::Amount(3.0)]).unwrap();
    assert_eq!(
        op,
        Op::Blur(BlurArgs {
            mode: BlurMode::Gaussian,
            amount: 3.0
        })
    );
}

#[test]
fn missing_required_parameter_is_named() {
    let err = Op::from_params(OpKind::Rectangle, [Param::Position((1.0, 2.0).into())]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid argument: operation 'rectangle' requires parameter 'width'"
    );
}

#[test]
fn foreign_parameter_is_rejected() {
    let err = Op::from_params(OpKind::CircleImage, [Param::Radius(3.0)]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid argument: operation 'circle_image' takes no parameter 'radius'"
    );
}

#[test]
fn last_value_wins() {
    let op = Op::from_params(
        OpKind::Resize,
        [Param::Size(1, 1), Param::Crop(true), Param::Size(30, 40)],
    )
    .unwrap();
    assert_eq!(op, Op::Resize(ResizeArgs::new((30, 40)).crop(true)));
}

#[test]
fn merge_overwrites_only_provided_fields() {
    let mut op: Op = RectangleArgs::new((0.0, 0.0), 10.0, 5.0)
        .fill("red")
        .radius(2.0)
        .into();
    op.merge([Param::Width(20.0), Param::Outline(Color::BLACK)])
        .unwrap();
    assert_eq!(
        op,
        Op::Rectangle(
            RectangleArgs::new((0.0, 0.0), 20.0, 5.0)
                .fill("red")
                .radius(2.0)
                .outline(Color::BLACK)
        )
    );
}

#[test]
fn built_by_name_equals_built_by_type() {
    let typed: Op = BarArgs::new((5.0, 6.0), 200.0, 10.0)
        .percentage(42.0)
        .fill("#00ff00")
        .into();
    let named = Op::from_name(
        "bar",
        [
            Param::Position(Point::new(5.0, 6.0)),
            Param::MaxWidth(200.0),
            Param::Height(10.0),
            Param::Percentage(42.0),
            Param::Fill("#00ff00".into()),
        ],
    )
    .unwrap();
    assert_eq!(typed, named);
}

#[test]
fn polygon_and_paste_by_name() {
    let op = Op::from_name(
        "polygon",
        [Param::Points(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(0.0, 1.0),
        ])],
    )
    .unwrap();
    assert_eq!(op.kind(), OpKind::Polygon);

    let img = Arc::new(Surface::new(2, 2).unwrap());
    let op = Op::from_name(
        "paste",
        [
            Param::Image(Arc::clone(&img)),
            Param::Position(Point::new(-1.0, 3.0)),
        ],
    )
    .unwrap();
    assert_eq!(op, Op::Paste(PasteArgs::new(img, (-1.0, 3.0))));
}

#[test]
fn param_names_are_snake_case() {
    assert_eq!(Param::OnTop(true).name(), "on_top");
    assert_eq!(Param::StrokeFill(Color::BLACK).name(), "stroke_fill");
    assert_eq!(Param::SpaceSeparated(false).name(), "space_separated");
}
