use egui::pos2;
use sketchpad::{Command, PointerEvent, SketchPad, ToolConfig};

#[test]
fn down_commits_a_command_and_starts_drawing() {
    let tools = ToolConfig::default();
    let mut pad = SketchPad::new();

    pad.handle_pointer(PointerEvent::Down(pos2(10.0, 10.0)), &tools);
    assert!(pad.is_drawing());
    assert_eq!(pad.history().commands().len(), 1);
    assert!(pad.preview().is_none());
}

#[test]
fn move_while_drawing_extends_the_current_command() {
    let tools = ToolConfig::default();
    let mut pad = SketchPad::new();

    pad.handle_pointer(PointerEvent::Down(pos2(0.0, 0.0)), &tools);
    pad.handle_pointer(PointerEvent::Move(pos2(10.0, 10.0)), &tools);
    pad.handle_pointer(PointerEvent::Move(pos2(20.0, 5.0)), &tools);

    match &pad.history().commands()[0] {
        Command::Stroke { points, .. } => {
            assert_eq!(
                points.as_slice(),
                &[pos2(0.0, 0.0), pos2(10.0, 10.0), pos2(20.0, 5.0)]
            );
        }
        other => panic!("expected stroke, got {other:?}"),
    }
}

#[test]
fn up_returns_to_idle_and_recreates_the_preview() {
    let tools = ToolConfig::default();
    let mut pad = SketchPad::new();

    pad.handle_pointer(PointerEvent::Down(pos2(0.0, 0.0)), &tools);
    pad.handle_pointer(PointerEvent::Up(pos2(30.0, 40.0)), &tools);

    assert!(!pad.is_drawing());
    match pad.preview() {
        Some(Command::BrushPreview { at, .. }) => assert_eq!(*at, pos2(30.0, 40.0)),
        other => panic!("expected brush preview, got {other:?}"),
    }
}

#[test]
fn preview_is_hidden_while_drawing() {
    let tools = ToolConfig::default();
    let mut pad = SketchPad::new();

    pad.handle_pointer(PointerEvent::Enter(pos2(5.0, 5.0)), &tools);
    assert!(pad.visible_preview().is_some());

    pad.handle_pointer(PointerEvent::Down(pos2(5.0, 5.0)), &tools);
    assert!(pad.visible_preview().is_none());
}

#[test]
fn idle_move_repositions_the_preview() {
    let tools = ToolConfig::default();
    let mut pad = SketchPad::new();

    pad.handle_pointer(PointerEvent::Enter(pos2(5.0, 5.0)), &tools);
    pad.handle_pointer(PointerEvent::Move(pos2(8.0, 9.0)), &tools);

    match pad.visible_preview() {
        Some(Command::BrushPreview { at, .. }) => assert_eq!(*at, pos2(8.0, 9.0)),
        other => panic!("expected brush preview, got {other:?}"),
    }
}

#[test]
fn leave_clears_the_preview_but_not_an_active_draw() {
    let tools = ToolConfig::default();
    let mut pad = SketchPad::new();

    pad.handle_pointer(PointerEvent::Down(pos2(1.0, 1.0)), &tools);
    pad.handle_pointer(PointerEvent::Leave, &tools);

    assert!(pad.preview().is_none());
    assert!(pad.is_drawing());
}

#[test]
fn reentering_with_a_draw_armed_starts_a_new_command() {
    let tools = ToolConfig::default();
    let mut pad = SketchPad::new();

    pad.handle_pointer(PointerEvent::Down(pos2(1.0, 1.0)), &tools);
    pad.handle_pointer(PointerEvent::Move(pos2(2.0, 2.0)), &tools);
    pad.handle_pointer(PointerEvent::Leave, &tools);
    pad.handle_pointer(PointerEvent::Enter(pos2(50.0, 50.0)), &tools);

    assert!(pad.is_drawing());
    assert_eq!(pad.history().commands().len(), 2);
    match &pad.history().commands()[1] {
        Command::Stroke { points, .. } => assert_eq!(points.as_slice(), &[pos2(50.0, 50.0)]),
        other => panic!("expected stroke, got {other:?}"),
    }
}

#[test]
fn style_is_captured_at_creation_time() {
    let mut tools = ToolConfig::default();
    let mut pad = SketchPad::new();

    pad.handle_pointer(PointerEvent::Down(pos2(0.0, 0.0)), &tools);
    let (width_before, color_before) = match &pad.history().commands()[0] {
        Command::Stroke { width, color, .. } => (*width, *color),
        other => panic!("expected stroke, got {other:?}"),
    };

    // Changing tools mid-draw must not touch the stored style.
    tools.select_thick();
    pad.handle_pointer(PointerEvent::Move(pos2(5.0, 5.0)), &tools);

    match &pad.history().commands()[0] {
        Command::Stroke {
            width,
            color,
            points,
        } => {
            assert_eq!(*width, width_before);
            assert_eq!(*color, color_before);
            assert_eq!(points.len(), 2);
        }
        other => panic!("expected stroke, got {other:?}"),
    }
}

#[test]
fn preview_keeps_its_style_until_recreated() {
    let mut tools = ToolConfig::default();
    let mut pad = SketchPad::new();

    pad.handle_pointer(PointerEvent::Enter(pos2(5.0, 5.0)), &tools);
    tools.select_sticker("🐶");
    pad.handle_pointer(PointerEvent::Move(pos2(6.0, 6.0)), &tools);

    // Still the brush preview; only a recreate (up/enter) re-reads the tool.
    assert!(matches!(
        pad.visible_preview(),
        Some(Command::BrushPreview { .. })
    ));

    pad.handle_pointer(PointerEvent::Down(pos2(6.0, 6.0)), &tools);
    pad.handle_pointer(PointerEvent::Up(pos2(7.0, 7.0)), &tools);
    assert!(matches!(
        pad.visible_preview(),
        Some(Command::StickerPreview { .. })
    ));
}

#[test]
fn sticker_tool_commits_sticker_commands() {
    let mut tools = ToolConfig::default();
    tools.select_sticker("🥞");
    let mut pad = SketchPad::new();

    pad.handle_pointer(PointerEvent::Down(pos2(12.0, 34.0)), &tools);
    pad.handle_pointer(PointerEvent::Move(pos2(56.0, 78.0)), &tools);

    // Dragging a sticker repositions it rather than growing a path.
    assert_eq!(
        pad.history().commands(),
        &[Command::sticker(pos2(56.0, 78.0), "🥞")]
    );
}

#[test]
fn undo_redo_and_clear_delegate_to_the_history() {
    let tools = ToolConfig::default();
    let mut pad = SketchPad::new();

    pad.handle_pointer(PointerEvent::Down(pos2(0.0, 0.0)), &tools);
    pad.handle_pointer(PointerEvent::Up(pos2(0.0, 0.0)), &tools);
    pad.handle_pointer(PointerEvent::Down(pos2(9.0, 9.0)), &tools);
    pad.handle_pointer(PointerEvent::Up(pos2(9.0, 9.0)), &tools);

    assert!(pad.undo());
    assert_eq!(pad.history().commands().len(), 1);
    assert!(pad.redo());
    assert_eq!(pad.history().commands().len(), 2);

    pad.clear();
    assert!(pad.history().commands().is_empty());
    assert!(!pad.undo());
}
