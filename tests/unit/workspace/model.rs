use super::*;
use crate::editor::ops::RectangleArgs;

fn rect_op() -> Op {
    RectangleArgs::new((0.0, 0.0), 4.0, 4.0).fill("red").into()
}

fn workspace_with(layers: &[&str]) -> Workspace {
    let mut ws = Workspace::new(32, 16).unwrap();
    for name in layers {
        ws.create_layer(*name, Color::TRANSPARENT).unwrap();
    }
    ws
}

#[test]
fn zero_size_workspace_is_rejected() {
    assert!(matches!(
        Workspace::new(0, 10),
        Err(EaselError::InvalidGeometry(_))
    ));
}

#[test]
fn duplicate_layer_is_rejected() {
    let mut ws = workspace_with(&["base"]);
    let err = ws.create_layer("base", "white").unwrap_err();
    assert!(matches!(err, EaselError::DuplicateLayer(name) if name == "base"));
    assert_eq!(ws.layer_names(), vec!["base"]);
}

#[test]
fn rename_moves_layer_to_top_and_follows_working_layer() {
    let mut ws = workspace_with(&["a", "b", "c"]);
    ws.set_working_layer("a").unwrap();
    ws.rename_layer("a", "z").unwrap();
    assert_eq!(ws.layer_names(), vec!["b", "c", "z"]);
    assert_eq!(ws.working_layer(), Some("z"));

    let err = ws.rename_layer("b", "c").unwrap_err();
    assert!(matches!(err, EaselError::DuplicateLayer(_)));
    assert!(matches!(
        ws.rename_layer("missing", "x"),
        Err(EaselError::UnknownLayer(_))
    ));
}

#[test]
fn removing_working_layer_clears_it() {
    let mut ws = workspace_with(&["a", "b"]);
    ws.set_working_layer("b").unwrap();
    let removed = ws.remove_layer("b").unwrap();
    assert_eq!(removed.name(), "b");
    assert_eq!(ws.working_layer(), None);
    assert!(matches!(
        ws.add_component(None, None, rect_op()),
        Err(EaselError::NoLayerSelected)
    ));
}

#[test]
fn set_background_and_working_layer_need_existing_layer() {
    let mut ws = workspace_with(&["a"]);
    ws.set_background("a", "navy").unwrap();
    assert_eq!(ws.layer("a").unwrap().background(), &Color::from("navy"));
    assert!(matches!(
        ws.set_background("b", "navy"),
        Err(EaselError::UnknownLayer(_))
    ));
    assert!(matches!(
        ws.set_working_layer("b"),
        Err(EaselError::UnknownLayer(_))
    ));
}

#[test]
fn generated_identifiers_are_five_letters_and_unique() {
    let mut ws = workspace_with(&["a"]);
    let mut seen = std::collections::HashSet::new();
    for _ in 0..200 {
        let id = ws.add_component(Some("a"), None, rect_op()).unwrap();
        assert_eq!(id.len(), 5);
        assert!(id.chars().all(|c| c.is_ascii_alphabetic()));
        assert!(seen.insert(id));
    }
    assert_eq!(ws.layer("a").unwrap().components().len(), 200);
}

#[test]
fn add_component_uses_working_layer() {
    let mut ws = workspace_with(&["a", "b"]);
    ws.set_working_layer("b").unwrap();
    let id = ws.add_component(None, Some("box"), rect_op()).unwrap();
    assert_eq!(id, "box");
    assert!(ws.layer("b").unwrap().component("box").is_some());
    assert!(ws.layer("a").unwrap().components().is_empty());

    assert!(matches!(
        ws.add_component(Some("nope"), None, rect_op()),
        Err(EaselError::UnknownLayer(_))
    ));
}

#[test]
fn existing_identifier_is_replaced_in_place() {
    let mut ws = workspace_with(&["a"]);
    ws.add_component(Some("a"), Some("first"), rect_op()).unwrap();
    ws.add_component(Some("a"), Some("second"), rect_op()).unwrap();
    ws.add_component(Some("a"), Some("first"), Op::CircleImage).unwrap();

    let layer = ws.layer("a").unwrap();
    let ids: Vec<_> = layer.components().iter().map(|c| c.identifier()).collect();
    assert_eq!(ids, vec!["first", "second"]);
    assert_eq!(
        layer.components()[0].operation(),
        &ComponentOp::Resolved(Op::CircleImage)
    );
}

#[test]
fn unknown_names_are_accepted_until_generate() {
    let mut ws = workspace_with(&["a"]);
    let id = ws
        .add_component(Some("a"), None, ComponentOp::call("sparkle", []))
        .unwrap();
    assert_eq!(ws.layer("a").unwrap().component(&id).unwrap().operation().name(), "sparkle");
}

#[test]
fn update_merges_shallowly() {
    let mut ws = workspace_with(&["a"]);
    let id = ws.add_component(Some("a"), None, rect_op()).unwrap();
    ws.update_component(Some("a"), &id, [Param::Fill("blue".into()), Param::Radius(3.0)])
        .unwrap();

    let Some(ComponentOp::Resolved(Op::Rectangle(args))) =
        ws.layer("a").unwrap().component(&id).map(Component::operation)
    else {
        panic!("expected a rectangle component");
    };
    assert_eq!(args.fill, Some(Color::from("blue")));
    assert_eq!(args.radius, 3.0);
    assert_eq!(args.width, 4.0);
}

#[test]
fn rejected_update_leaves_component_untouched() {
    let mut ws = workspace_with(&["a"]);
    let id = ws.add_component(Some("a"), None, rect_op()).unwrap();
    let before = ws.clone();
    let err = ws
        .update_component(Some("a"), &id, [Param::Radius(2.0), Param::Degrees(90.0)])
        .unwrap_err();
    assert!(matches!(err, EaselError::InvalidArgument(_)));
    assert_eq!(ws, before);
}

#[test]
fn pending_update_appends_params() {
    let mut ws = workspace_with(&["a"]);
    let id = ws
        .add_component(
            Some("a"),
            None,
            ComponentOp::pending(OpKind::Blur, [Param::Amount(1.0)]),
        )
        .unwrap();
    ws.update_component(Some("a"), &id, [Param::Amount(4.0)]).unwrap();
    let Some(ComponentOp::Pending { name, params }) =
        ws.layer("a").unwrap().component(&id).map(Component::operation)
    else {
        panic!("expected a pending component");
    };
    assert_eq!(name, "blur");
    assert_eq!(params, &vec![Param::Amount(1.0), Param::Amount(4.0)]);
}

#[test]
fn missing_components_are_reported() {
    let mut ws = workspace_with(&["a"]);
    let err = ws.remove_component(Some("a"), "ghost").unwrap_err();
    assert!(matches!(
        err,
        EaselError::UnknownComponent { ref layer, ref identifier } if layer == "a" && identifier == "ghost"
    ));
    assert!(matches!(
        ws.update_component(Some("a"), "ghost", []),
        Err(EaselError::UnknownComponent { .. })
    ));

    let id = ws.add_component(Some("a"), None, rect_op()).unwrap();
    let removed = ws.remove_component(Some("a"), &id).unwrap();
    assert_eq!(removed.identifier(), id);
    assert!(ws.layer("a").unwrap().components().is_empty());
}
