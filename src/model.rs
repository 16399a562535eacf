//! Core data model for the wallpaper studio.
//! Gesture payloads, persisted scene defaults, simulated performance
//! samples, and the top-level reducer the components dispatch into.

use serde::{Deserialize, Serialize};
use std::rc::Rc;
use yew::Reducible;

/// localStorage key holding the scene defaults as a JSON blob.
pub const SCENE_CONFIG_KEY: &str = "wallpaper_scene_config";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GestureKind {
    Pan,
    Zoom,
    Rotate,
}

impl GestureKind {
    pub fn label(self) -> &'static str {
        match self {
            GestureKind::Pan => "pan",
            GestureKind::Zoom => "zoom",
            GestureKind::Rotate => "rotate",
        }
    }
}

/// Synthetic touch-gesture payload. Serialized form matches the JSON the
/// native shell would post over the WebView bridge:
/// `{ "type": "pan", "deltaX": .., "deltaY": .., "scale": .., "rotation": .. }`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GestureEvent {
    #[serde(rename = "type")]
    pub kind: GestureKind,
    pub delta_x: f64,
    pub delta_y: f64,
    pub scale: f64,
    pub rotation: f64,
}

/// Persisted defaults for the decorative 3D preview. Loaded once when the
/// scene mounts; the mounted scene never re-reads the key.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SceneConfig {
    pub mesh_count: u32,
    pub animation_speed: f64,
    pub background_color: String,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            mesh_count: 5,
            animation_speed: 1.0,
            background_color: "#0a0a0f".to_string(),
        }
    }
}

impl SceneConfig {
    /// Parse the persisted blob, falling back to defaults when it is
    /// missing fields or not valid JSON at all.
    pub fn from_json(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_default()
    }

    pub fn load() -> Self {
        if let Some(win) = web_sys::window() {
            if let Ok(Some(store)) = win.local_storage() {
                if let Ok(Some(raw)) = store.get_item(SCENE_CONFIG_KEY) {
                    return Self::from_json(&raw);
                }
            }
        }
        Self::default()
    }

    pub fn store(&self) {
        if let Some(win) = web_sys::window() {
            if let Ok(Some(store)) = win.local_storage() {
                if let Ok(raw) = serde_json::to_string(self) {
                    let _ = store.set_item(SCENE_CONFIG_KEY, &raw);
                }
            }
        }
    }
}

/// Simulated wallpaper-engine telemetry. Values are presentational only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceSample {
    pub fps: u32,
    /// Percent of the (fictional) memory budget in use.
    pub memory: u32,
    pub cpu: u32,
    pub battery: u32,
}

impl Default for PerformanceSample {
    fn default() -> Self {
        Self {
            fps: 60,
            memory: 45,
            cpu: 23,
            battery: 78,
        }
    }
}

/// Top-level UI state shared across views.
#[derive(Clone, Debug, PartialEq)]
pub struct StudioState {
    /// Validated preview URL; None until the intake accepts one.
    pub url: Option<String>,
    /// Whether the simulated wallpaper service is running.
    pub wallpaper_active: bool,
    /// Last gesture the simulator broadcast (for the badge).
    pub last_gesture: Option<GestureEvent>,
    pub perf: PerformanceSample,
}

impl StudioState {
    pub fn new() -> Self {
        Self {
            url: None,
            wallpaper_active: false,
            last_gesture: None,
            perf: PerformanceSample::default(),
        }
    }
}

#[derive(Clone, Debug)]
pub enum StudioAction {
    /// Store an already-validated URL.
    SubmitUrl(String),
    ClearUrl,
    SetWallpaperActive(bool),
    GestureObserved(GestureEvent),
    PerfSampled(PerformanceSample),
}

impl Reducible for StudioState {
    type Action = StudioAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use StudioAction::*;
        let mut new = (*self).clone();
        match action {
            SubmitUrl(url) => {
                new.url = Some(url);
            }
            ClearUrl => {
                new.url = None;
                new.wallpaper_active = false;
                new.last_gesture = None;
            }
            SetWallpaperActive(active) => {
                new.wallpaper_active = active;
                if !active {
                    new.last_gesture = None;
                }
            }
            GestureObserved(g) => {
                new.last_gesture = Some(g);
            }
            PerfSampled(p) => {
                new.perf = p;
            }
        }
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scene_config_defaults() {
        let cfg = SceneConfig::default();
        assert_eq!(cfg.mesh_count, 5);
        assert_eq!(cfg.animation_speed, 1.0);
        assert_eq!(cfg.background_color, "#0a0a0f");
    }

    #[test]
    fn scene_config_parses_camel_case_blob() {
        let raw = r##"{"meshCount":8,"animationSpeed":1.5,"backgroundColor":"#101018"}"##;
        let cfg = SceneConfig::from_json(raw);
        assert_eq!(cfg.mesh_count, 8);
        assert_eq!(cfg.animation_speed, 1.5);
        assert_eq!(cfg.background_color, "#101018");
    }

    #[test]
    fn scene_config_partial_blob_fills_defaults() {
        let cfg = SceneConfig::from_json(r#"{"meshCount":3}"#);
        assert_eq!(cfg.mesh_count, 3);
        assert_eq!(cfg.animation_speed, 1.0);
        assert_eq!(cfg.background_color, "#0a0a0f");
    }

    #[test]
    fn scene_config_malformed_blob_falls_back() {
        assert_eq!(SceneConfig::from_json("not json"), SceneConfig::default());
        assert_eq!(SceneConfig::from_json(""), SceneConfig::default());
    }

    #[test]
    fn gesture_event_json_shape() {
        let g = GestureEvent {
            kind: GestureKind::Zoom,
            delta_x: 0.0,
            delta_y: 0.0,
            scale: 1.02,
            rotation: 0.0,
        };
        let raw = serde_json::to_string(&g).unwrap();
        assert!(raw.contains("\"type\":\"zoom\""));
        assert!(raw.contains("\"deltaX\""));
        let back: GestureEvent = serde_json::from_str(&raw).unwrap();
        assert_eq!(back, g);
    }

    #[test]
    fn reducer_submit_and_clear_url() {
        let s = Rc::new(StudioState::new());
        let s = s.reduce(StudioAction::SubmitUrl("https://example.com".into()));
        assert_eq!(s.url.as_deref(), Some("https://example.com"));
        let s = s.reduce(StudioAction::SetWallpaperActive(true));
        assert!(s.wallpaper_active);
        let s = s.reduce(StudioAction::ClearUrl);
        assert!(s.url.is_none());
        assert!(!s.wallpaper_active);
    }

    #[test]
    fn reducer_deactivate_drops_last_gesture() {
        let g = GestureEvent {
            kind: GestureKind::Pan,
            delta_x: 1.0,
            delta_y: -1.0,
            scale: 1.0,
            rotation: 0.0,
        };
        let s = Rc::new(StudioState::new());
        let s = s.reduce(StudioAction::SetWallpaperActive(true));
        let s = s.reduce(StudioAction::GestureObserved(g));
        assert!(s.last_gesture.is_some());
        let s = s.reduce(StudioAction::SetWallpaperActive(false));
        assert!(s.last_gesture.is_none());
    }
}
