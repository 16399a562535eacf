use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;

use super::code_block::CodeBlock;
use super::wallpaper_scene::WallpaperScene;
use crate::model::{StudioAction, StudioState};
use crate::state::gesture;
use crate::util::clog;

/// The JS the native engine injects so gesture recognizers can reach the
/// page; the simulator below calls the same entry point's event.
const BRIDGE_JS: &str = r#"window.isAndroidWallpaper = true;
window.wallpaperGesture = function(type, data) {
  const event = new CustomEvent('wallpaper-gesture', {
    detail: { type: type, ...data }
  });
  window.dispatchEvent(event);
};"#;

#[derive(Properties, PartialEq, Clone)]
pub struct ImplementationViewProps {
    pub studio: UseReducerHandle<StudioState>,
    pub notify: Callback<String>,
}

/// Live wallpaper demo: the canvas scene plus a timer that stands in for
/// the native gesture recognizers, broadcasting a synthetic gesture every
/// 2 s while the wallpaper runs.
#[function_component(ImplementationView)]
pub fn implementation_view(props: &ImplementationViewProps) -> Html {
    let active = props.studio.wallpaper_active;

    {
        let studio = props.studio.clone();
        use_effect_with(active, move |active| {
            if !*active {
                return Box::new(|| ()) as Box<dyn FnOnce()>;
            }
            let Some(window) = web_sys::window() else {
                return Box::new(|| ()) as Box<dyn FnOnce()>;
            };
            let tick = Closure::wrap(Box::new(move || {
                let g = gesture::random();
                clog(&format!("simulated {} gesture", g.kind.label()));
                gesture::dispatch(&g);
                studio.dispatch(StudioAction::GestureObserved(g));
            }) as Box<dyn FnMut()>);
            let id = window
                .set_interval_with_callback_and_timeout_and_arguments_0(
                    tick.as_ref().unchecked_ref(),
                    2000,
                )
                .ok();
            let window_clone = window.clone();
            Box::new(move || {
                if let Some(id) = id {
                    window_clone.clear_interval_with_handle(id);
                }
                drop(tick);
            }) as Box<dyn FnOnce()>
        });
    }

    let toggle = {
        let studio = props.studio.clone();
        Callback::from(move |_: MouseEvent| {
            studio.dispatch(StudioAction::SetWallpaperActive(!studio.wallpaper_active));
        })
    };

    let native_files = [
        ("LiveWallpaperService.java", "Main wallpaper service implementation", "Android Service"),
        ("WallpaperRenderer.java", "WebView rendering with hardware acceleration", "Renderer"),
        ("GestureController.java", "Touch gesture recognition and handling", "Gesture Handler"),
        ("wallpaper_service.xml", "Wallpaper service configuration", "Manifest"),
    ];
    let gesture_rows = [
        ("Single Tap", "Toggle animation pause/play"),
        ("Double Tap", "Reset camera position"),
        ("Pan (1 finger)", "Move camera position"),
        ("Pinch to Zoom", "Zoom in/out of scene"),
        ("Two-finger Rotate", "Rotate entire scene"),
        ("Long Press", "Open wallpaper settings"),
    ];

    html! {
        <div style="max-width:760px; margin:24px auto; display:flex; flex-direction:column; gap:14px; padding:0 12px;">
            <div style="background:#161b22; border:1px solid #30363d; border-radius:10px; padding:14px; display:flex; align-items:center; justify-content:space-between;">
                <div>
                    <div style="font-size:16px; font-weight:600;">{"Android Live Wallpaper Implementation"}</div>
                    <div style="font-size:12px; opacity:0.7;">{"Real-time 3D rendering with native gesture control"}</div>
                </div>
                <div style="display:flex; align-items:center; gap:10px;">
                    <span style={format!("font-size:11px; padding:2px 8px; border-radius:10px; border:1px solid {};", if active { "#2ea043" } else { "#30363d" })}>
                        { if active { "Running" } else { "Stopped" } }
                    </span>
                    <button onclick={toggle} style="padding:6px 12px;">
                        { if active { "Stop Wallpaper" } else { "Start Wallpaper" } }
                    </button>
                </div>
            </div>

            <div style="background:#161b22; border:1px solid #30363d; border-radius:12px; overflow:hidden;">
                <div style="padding:10px 14px; border-bottom:1px solid #30363d; display:flex; align-items:center; justify-content:space-between;">
                    <span style="font-size:14px; font-weight:600;">{"Live 3D Wallpaper"}</span>
                    { if let Some(g) = &props.studio.last_gesture {
                        html! { <span style="font-size:11px; padding:2px 8px; border-radius:10px; border:1px solid #30363d;">{ format!("{} gesture detected", g.kind.label()) }</span> }
                    } else { html! {} } }
                </div>
                <div style="aspect-ratio:9/16; max-width:360px; margin:0 auto; width:100%;">
                    <WallpaperScene {active} />
                </div>
                { if active {
                    html! {
                        <div style="padding:10px; text-align:center; border-top:1px solid #30363d;">
                            <span style="font-size:11px; opacity:0.7;">{"Hardware Accelerated • Touch Enabled • Real-time Rendering"}</span>
                        </div>
                    }
                } else { html! {} } }
            </div>

            <div style="display:grid; grid-template-columns:1fr 1fr; gap:14px;">
                <div style="background:rgba(13,17,23,0.6); border:1px solid #30363d; border-radius:10px; padding:14px;">
                    <div style="font-size:13px; font-weight:600; margin-bottom:10px;">{"Android Native Files"}</div>
                    <div style="display:flex; flex-direction:column; gap:8px;">
                        { for native_files.iter().map(|(name, desc, tag)| html! {
                            <div style="display:flex; align-items:center; gap:10px; background:rgba(22,27,34,0.8); border:1px solid #30363d; border-radius:8px; padding:8px 10px;">
                                <div style="flex:1; min-width:0;">
                                    <div style="font-size:12px; font-weight:500;">{ *name }</div>
                                    <div style="font-size:11px; opacity:0.6;">{ *desc }</div>
                                </div>
                                <span style="font-size:10px; padding:2px 6px; border:1px solid #30363d; border-radius:8px; opacity:0.7; flex-shrink:0;">{ *tag }</span>
                            </div>
                        }) }
                    </div>
                </div>
                <div style="background:rgba(88,166,255,0.05); border:1px solid rgba(88,166,255,0.2); border-radius:10px; padding:14px;">
                    <div style="font-size:13px; font-weight:600; margin-bottom:10px;">{"Gesture Controls"}</div>
                    <div style="display:flex; flex-direction:column; gap:6px;">
                        { for gesture_rows.iter().map(|(name, action)| html! {
                            <div style="display:flex; justify-content:space-between; gap:10px; font-size:12px;">
                                <span style="font-weight:500;">{ *name }</span>
                                <span style="opacity:0.6; text-align:right;">{ *action }</span>
                            </div>
                        }) }
                    </div>
                </div>
            </div>

            <div style="background:rgba(13,17,23,0.6); border:1px solid #30363d; border-radius:10px; padding:14px; display:flex; flex-direction:column; gap:10px;">
                <div style="font-size:13px; font-weight:600;">{"WebView Bridge"}</div>
                <div style="font-size:12px; opacity:0.75; line-height:1.5;">
                    {"The engine injects a small bridge after page load. Gesture recognizers call it with recognized gestures, and the page's camera controller listens for the resulting custom event — the same event the simulator above dispatches."}
                </div>
                <CodeBlock code={BRIDGE_JS} label="Bridge snippet" notify={props.notify.clone()} />
            </div>
        </div>
    }
}
