use super::*;
use crate::foundation::core::Canvas;

fn source() -> Canvas {
    Canvas::new(60, 40, "white").unwrap()
}

#[test]
fn recording_does_not_touch_pixels() {
    let queue = InstructionQueue::new(source())
        .resize((20, 20), true)
        .call("sparkle", [])
        .circle_image();
    assert_eq!(queue.len(), 3);
    let names: Vec<_> = queue.instructions().iter().map(Instruction::name).collect();
    assert_eq!(names, vec!["resize", "sparkle", "circle_image"]);
    assert!(InstructionQueue::new(source()).is_empty());
}

#[test]
fn execute_matches_direct_application() {
    let queue = InstructionQueue::new(source())
        .resize((32, 32), true)
        .circle_image()
        .rectangle(RectangleArgs::new((0.0, 14.0), 32.0, 4.0).fill("red"));
    let replayed = pollster::block_on(queue.execute()).unwrap();

    let mut direct = Editor::new(source()).unwrap();
    direct
        .resize((32, 32), true)
        .unwrap()
        .circle_image()
        .unwrap()
        .rectangle(RectangleArgs::new((0.0, 14.0), 32.0, 4.0).fill("red"))
        .unwrap();

    assert_eq!(replayed, direct);
}

#[test]
fn order_matters() {
    let mark = RectangleArgs::new((0.0, 0.0), 10.0, 10.0).fill("red");
    let a = InstructionQueue::new(source())
        .rectangle(mark.clone())
        .resize((20, 20), false)
        .execute_blocking()
        .unwrap();
    let b = InstructionQueue::new(source())
        .resize((20, 20), false)
        .rectangle(mark)
        .execute_blocking()
        .unwrap();
    assert_ne!(a.surface().fingerprint(), b.surface().fingerprint());
    assert_eq!(b.surface().pixel(9, 9), [255, 0, 0, 255]);
}

#[test]
fn unknown_call_fails_only_at_execute() {
    let queue = InstructionQueue::new(source()).blur(BlurMode::Box, 1.0).call("sparkle", []);
    let err = pollster::block_on(queue.execute()).unwrap_err();
    assert!(matches!(err, EaselError::UnknownOperation(name) if name == "sparkle"));
}

#[test]
fn first_error_stops_replay() {
    let queue = InstructionQueue::new(source())
        .blend(Surface::filled(2, 2, [0, 0, 0, 255]).unwrap(), 2.0, false)
        .call("sparkle", []);
    let err = queue.execute_blocking().unwrap_err();
    assert!(matches!(err, EaselError::InvalidArgument(_)));
}

#[test]
fn bad_source_fails_at_execute() {
    let queue = InstructionQueue::new(vec![0u8; 4]).circle_image();
    let err = pollster::block_on(queue.execute()).unwrap_err();
    assert!(matches!(err, EaselError::Construction(_)));
}

#[test]
fn dedicated_pool_replays() {
    let queue = InstructionQueue::with_opts(source(), QueueOpts::default().with_threads(1))
        .unwrap()
        .rotate(90.0, true)
        .paste(Surface::filled(4, 4, [0, 0, 255, 255]).unwrap(), (0.0, 0.0));
    let editor = pollster::block_on(queue.execute()).unwrap();
    assert_eq!(editor.size(), (40, 60));
    assert_eq!(editor.surface().pixel(1, 1), [0, 0, 255, 255]);
}

#[test]
fn empty_queue_yields_source() {
    let editor = pollster::block_on(InstructionQueue::new(source()).execute()).unwrap();
    assert_eq!(editor, Editor::new(source()).unwrap());
}
