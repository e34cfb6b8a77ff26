use wasm_bindgen::JsValue;

/// Which gesture binding the grid uses. Picked once when the game view
/// mounts and never re-evaluated; the session state machine is agnostic to
/// it and sees only swap and selection requests either way.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum InputMode {
    /// Fine pointer: HTML5 drag-and-drop between tiles.
    Drag,
    /// Coarse pointer: tap to arm a tile, tap again to swap.
    Tap,
}

pub(crate) fn detect_input_mode() -> InputMode {
    let Some(window) = web_sys::window() else {
        return InputMode::Drag;
    };
    let has_touch_event =
        js_sys::Reflect::has(&window, &JsValue::from_str("ontouchstart")).unwrap_or(false);
    let touch_points = window.navigator().max_touch_points();
    if has_touch_event || touch_points > 0 {
        InputMode::Tap
    } else {
        InputMode::Drag
    }
}
