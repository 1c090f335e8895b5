use pixelart::util::time::ManualClock;
use pixelart::{Action, Color, EditorSession, EditorState, PixelEdit, Raster, ToolKind};

const PAPER: Color = Color::rgb(0xf0, 0xf0, 0xf0);
const RED: Color = Color::rgb(0xff, 0x00, 0x00);

fn session() -> (EditorSession, ManualClock) {
    let clock = ManualClock::new(10_000);
    let state = EditorState {
        raster: Raster::empty(4, 4, PAPER).unwrap(),
        tool: ToolKind::Draw,
        color: RED,
    };
    let session = EditorSession::with_state(state).with_clock(Box::new(clock.clone()));
    (session, clock)
}

/// A picture with pixel (0, `mark`) recolored, to tell edits apart.
fn marked(base: &Raster, mark: i32) -> Raster {
    base.draw(&[PixelEdit::new(0, mark, RED)])
}

#[test]
fn rapid_edits_coalesce_into_one_checkpoint() {
    let (mut session, clock) = session();
    let base = session.raster().clone();

    for mark in 0..3 {
        session.dispatch(Action::Picture(marked(&base, mark)));
        clock.advance(300);
    }

    assert_eq!(session.history().len(), 1);
    session.dispatch(Action::Undo);
    assert_eq!(session.raster(), &base);
}

#[test]
fn a_pause_beyond_the_window_opens_a_new_checkpoint() {
    let (mut session, clock) = session();
    let base = session.raster().clone();

    for mark in 0..3 {
        session.dispatch(Action::Picture(marked(&base, mark)));
        clock.advance(300);
    }
    let third = session.raster().clone();

    clock.advance(1200);
    session.dispatch(Action::Picture(marked(&base, 3)));
    assert_eq!(session.history().len(), 2);

    // Undo restores the picture as of the second checkpoint.
    session.dispatch(Action::Undo);
    assert_eq!(session.raster(), &third);
}

#[test]
fn coalescing_is_time_windowed_not_gesture_windowed() {
    // Two edits 1001 ms apart always split, pause or no pause.
    let (mut session, clock) = session();
    let base = session.raster().clone();

    session.dispatch(Action::Picture(marked(&base, 0)));
    clock.advance(1001);
    session.dispatch(Action::Picture(marked(&base, 1)));

    assert_eq!(session.history().len(), 2);
}

#[test]
fn undo_on_empty_history_is_a_noop() {
    let (mut session, _clock) = session();
    let before = session.raster().clone();

    session.dispatch(Action::Undo);
    session.dispatch(Action::Undo);
    assert_eq!(session.raster(), &before);
    assert!(!session.can_undo());
}

#[test]
fn undo_forces_the_next_edit_to_checkpoint() {
    let (mut session, _clock) = session();
    let base = session.raster().clone();

    // Edit and undo without ever advancing the clock.
    session.dispatch(Action::Picture(marked(&base, 0)));
    session.dispatch(Action::Undo);
    assert_eq!(session.history().len(), 0);

    // The next edit lands inside the old window but must still checkpoint.
    session.dispatch(Action::Picture(marked(&base, 1)));
    assert_eq!(session.history().len(), 1);

    session.dispatch(Action::Undo);
    assert_eq!(session.raster(), &base);
}

#[test]
fn color_and_tool_changes_do_not_touch_history() {
    let (mut session, _clock) = session();

    session.dispatch(Action::Color(Color::rgb(0x00, 0xff, 0x00)));
    session.dispatch(Action::Tool(ToolKind::Fill));

    assert_eq!(session.history().len(), 0);
    assert_eq!(session.state().color, Color::rgb(0x00, 0xff, 0x00));
    assert_eq!(session.state().tool, ToolKind::Fill);
}

#[test]
fn repeated_undo_walks_back_through_checkpoints() {
    let (mut session, clock) = session();
    let base = session.raster().clone();

    session.dispatch(Action::Picture(marked(&base, 0)));
    clock.advance(1500);
    let first = session.raster().clone();
    session.dispatch(Action::Picture(marked(&base, 1)));

    session.dispatch(Action::Undo);
    assert_eq!(session.raster(), &first);
    session.dispatch(Action::Undo);
    assert_eq!(session.raster(), &base);
    assert!(!session.can_undo());
}
