use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;

use super::perf_panel::PerfPanel;
use crate::model::PerformanceSample;
use crate::state::perf;

#[derive(Properties, PartialEq, Clone)]
pub struct WallpaperServiceProps {
    pub url: AttrValue,
    pub active: bool,
    pub on_toggle: Callback<bool>,
    pub perf: PerformanceSample,
    pub on_sample: Callback<PerformanceSample>,
}

/// Mock of the native wallpaper engine control surface: start/stop, the
/// service configuration, and a telemetry monitor sampled every 2 s while
/// the service runs. Stopping clears the sampling interval.
#[function_component(WallpaperService)]
pub fn wallpaper_service(props: &WallpaperServiceProps) -> Html {
    {
        let on_sample = props.on_sample.clone();
        use_effect_with(props.active, move |active| {
            if !*active {
                return Box::new(|| ()) as Box<dyn FnOnce()>;
            }
            let Some(window) = web_sys::window() else {
                return Box::new(|| ()) as Box<dyn FnOnce()>;
            };
            let tick = Closure::wrap(Box::new(move || {
                on_sample.emit(perf::random());
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
        let active = props.active;
        let cb = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| cb.emit(!active))
    };

    let cell_label = "font-size:11px; opacity:0.6;";
    let cell_value = "font-size:13px; margin-top:2px;";
    html! {
        <div style="display:flex; flex-direction:column; gap:14px;">
            <div style="background:#161b22; border:1px solid #30363d; border-radius:10px; padding:14px; display:flex; align-items:center; justify-content:space-between;">
                <div>
                    <div style="font-size:16px; font-weight:600;">{"Android Wallpaper Service"}</div>
                    <div style="font-size:12px; opacity:0.7;">{"Native live wallpaper engine"}</div>
                </div>
                <div style="display:flex; align-items:center; gap:10px;">
                    <span style={format!("font-size:11px; padding:2px 8px; border-radius:10px; border:1px solid {};", if props.active { "#2ea043" } else { "#30363d" })}>
                        { if props.active { "Active" } else { "Inactive" } }
                    </span>
                    <button onclick={toggle} style="min-width:70px; padding:6px 12px;">
                        { if props.active { "Stop" } else { "Start" } }
                    </button>
                </div>
            </div>
            <div style="background:rgba(13,17,23,0.6); border:1px solid #30363d; border-radius:10px; padding:14px;">
                <div style="font-size:13px; font-weight:600; margin-bottom:10px;">{"Service Configuration"}</div>
                <div style="display:grid; grid-template-columns:1fr 1fr; gap:12px;">
                    <div>
                        <div style={cell_label}>{"URL"}</div>
                        <div style={format!("{} font-family:monospace; font-size:11px; word-break:break-all;", cell_value)}>{ props.url.clone() }</div>
                    </div>
                    <div>
                        <div style={cell_label}>{"Render Mode"}</div>
                        <div style={cell_value}>{"Hardware Accelerated"}</div>
                    </div>
                    <div>
                        <div style={cell_label}>{"Touch Events"}</div>
                        <div style={cell_value}>{"Enabled"}</div>
                    </div>
                    <div>
                        <div style={cell_label}>{"Auto-restart"}</div>
                        <div style={cell_value}>{"On Boot"}</div>
                    </div>
                </div>
            </div>
            { if props.active {
                html! {
                    <div style="background:rgba(88,166,255,0.06); border:1px solid rgba(88,166,255,0.25); border-radius:10px; padding:14px;">
                        <div style="font-size:13px; font-weight:600; margin-bottom:10px;">{"Real-time Performance"}</div>
                        <PerfPanel perf={props.perf} />
                    </div>
                }
            } else { html! {} } }
            <div style="background:rgba(46,160,67,0.05); border:1px solid rgba(46,160,67,0.2); border-radius:10px; padding:12px 14px; font-size:12px; line-height:1.5; opacity:0.85;">
                <div style="font-weight:600; margin-bottom:4px;">{"Native Android Live Wallpaper"}</div>
                <div>{"• Implements Android WallpaperService with OpenGL ES rendering"}</div>
                <div>{"• Hardware-accelerated 3D graphics via WebView integration"}</div>
                <div>{"• Touch event propagation to WebGL scenes"}</div>
                <div>{"• Automatic performance optimization and battery management"}</div>
                <div>{"• Background service with proper lifecycle management"}</div>
            </div>
        </div>
    }
}
