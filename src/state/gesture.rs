// Gesture synthesis and the DOM custom-event bridge.
//
// In the real packaging, the native shell recognizes touch gestures and
// posts them into the WebView via `window.wallpaperGesture(...)`. Here a
// timer in the implementation view fakes that stream; both sides meet at
// the `wallpaper-gesture` custom event on `window`.

use crate::model::{GestureEvent, GestureKind};
use wasm_bindgen::JsValue;
use web_sys::{CustomEvent, CustomEventInit};

pub const GESTURE_EVENT_NAME: &str = "wallpaper-gesture";

/// Build a gesture from five uniform rolls in [0, 1).
/// Deltas land in (-5, 5), scale in [0.95, 1.05), rotation in (-0.25, 0.25).
pub fn from_rolls(kind: f64, dx: f64, dy: f64, scale: f64, rotation: f64) -> GestureEvent {
    let kind = match (kind * 3.0).floor() as u32 {
        0 => GestureKind::Pan,
        1 => GestureKind::Zoom,
        _ => GestureKind::Rotate,
    };
    GestureEvent {
        kind,
        delta_x: (dx - 0.5) * 10.0,
        delta_y: (dy - 0.5) * 10.0,
        scale: 0.95 + scale * 0.1,
        rotation: (rotation - 0.5) * 0.5,
    }
}

pub fn random() -> GestureEvent {
    from_rolls(
        js_sys::Math::random(),
        js_sys::Math::random(),
        js_sys::Math::random(),
        js_sys::Math::random(),
        js_sys::Math::random(),
    )
}

/// Broadcast a gesture on `window` as a `wallpaper-gesture` custom event,
/// detail = JSON payload. Dropped silently if the event cannot be built.
pub fn dispatch(g: &GestureEvent) {
    let Some(win) = web_sys::window() else { return };
    let Ok(raw) = serde_json::to_string(g) else { return };
    let init = CustomEventInit::new();
    init.set_detail(&JsValue::from_str(&raw));
    if let Ok(ev) = CustomEvent::new_with_event_init_dict(GESTURE_EVENT_NAME, &init) {
        let _ = win.dispatch_event(&ev);
    }
}

/// Decode the detail payload of a received `wallpaper-gesture` event.
pub fn from_custom_event(ev: &CustomEvent) -> Option<GestureEvent> {
    let raw = ev.detail().as_string()?;
    serde_json::from_str(&raw).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_roll_covers_all_gestures() {
        assert_eq!(from_rolls(0.0, 0.5, 0.5, 0.5, 0.5).kind, GestureKind::Pan);
        assert_eq!(from_rolls(0.34, 0.5, 0.5, 0.5, 0.5).kind, GestureKind::Zoom);
        assert_eq!(from_rolls(0.67, 0.5, 0.5, 0.5, 0.5).kind, GestureKind::Rotate);
        assert_eq!(from_rolls(0.999, 0.5, 0.5, 0.5, 0.5).kind, GestureKind::Rotate);
    }

    #[test]
    fn magnitudes_stay_in_documented_ranges() {
        for r in [0.0, 0.1, 0.5, 0.9, 0.999_999] {
            let g = from_rolls(r, r, r, r, r);
            assert!(g.delta_x > -5.0 && g.delta_x < 5.0);
            assert!(g.delta_y > -5.0 && g.delta_y < 5.0);
            assert!(g.scale >= 0.95 && g.scale < 1.05);
            assert!(g.rotation > -0.25 && g.rotation < 0.25);
        }
    }
}
