use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{HtmlIFrameElement, TouchEvent};
use yew::prelude::*;

#[derive(Clone, PartialEq)]
struct DeviceInfo {
    platform: String,
    user_agent: String,
    cores: u32,
    touch_points: i32,
}

/// Best-effort device query; any failure leaves the panel in its
/// "web preview" fallback state.
fn query_device_info() -> Option<DeviceInfo> {
    let nav = web_sys::window()?.navigator();
    let user_agent = nav.user_agent().ok()?;
    let platform = nav.platform().ok()?;
    Some(DeviceInfo {
        cores: nav.hardware_concurrency() as u32,
        touch_points: nav.max_touch_points(),
        platform,
        user_agent,
    })
}

#[derive(Clone, Copy, PartialEq)]
struct TouchMarker {
    x: f64,
    y: f64,
}

#[derive(Properties, PartialEq, Clone)]
pub struct NativeWebViewProps {
    pub url: AttrValue,
}

/// Phone-framed iframe standing in for the hardware-accelerated WebView
/// the wallpaper engine would host, with a touch ripple overlay showing
/// the gesture stream the native layer would forward.
#[function_component(NativeWebView)]
pub fn native_webview(props: &NativeWebViewProps) -> Html {
    let iframe_ref = use_node_ref();
    let device = use_state(query_device_info);
    let touches = use_state(Vec::<TouchMarker>::new);
    let fullscreen = use_state(|| false);

    // Track recent touches for the overlay (last 10 kept, last 3 drawn).
    {
        let touches = touches.clone();
        use_effect_with((), move |_| {
            let document = web_sys::window().and_then(|w| w.document());
            let Some(document) = document else {
                return Box::new(|| ()) as Box<dyn FnOnce()>;
            };
            let touch_cb = {
                let touches = touches.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    if let Some(t0) = e.touches().item(0) {
                        let mut list = (*touches).clone();
                        list.push(TouchMarker {
                            x: t0.client_x() as f64,
                            y: t0.client_y() as f64,
                        });
                        let overflow = list.len().saturating_sub(10);
                        list.drain(..overflow);
                        touches.set(list);
                    }
                }) as Box<dyn FnMut(_)>)
            };
            for kind in ["touchstart", "touchmove", "touchend"] {
                let _ = document
                    .add_event_listener_with_callback(kind, touch_cb.as_ref().unchecked_ref());
            }
            let document_clone = document.clone();
            Box::new(move || {
                for kind in ["touchstart", "touchmove", "touchend"] {
                    let _ = document_clone.remove_event_listener_with_callback(
                        kind,
                        touch_cb.as_ref().unchecked_ref(),
                    );
                }
            }) as Box<dyn FnOnce()>
        });
    }

    let is_mobile = device
        .as_ref()
        .map(|d| d.user_agent.contains("Android") || d.user_agent.contains("iPhone"))
        .unwrap_or(false);

    let toggle_fullscreen = {
        let iframe_ref = iframe_ref.clone();
        let fullscreen = fullscreen.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            if document.fullscreen_element().is_some() {
                document.exit_fullscreen();
                fullscreen.set(false);
            } else if let Some(frame) = iframe_ref.cast::<HtmlIFrameElement>() {
                let _ = frame.request_fullscreen();
                fullscreen.set(true);
            }
        })
    };
    let reload = {
        let iframe_ref = iframe_ref.clone();
        let url = props.url.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(frame) = iframe_ref.cast::<HtmlIFrameElement>() {
                frame.set_src(&url);
            }
        })
    };

    html! {
        <div style="display:flex; flex-direction:column; gap:14px;">
            <div style="background:#161b22; border:1px solid #30363d; border-radius:10px; padding:10px 14px; display:flex; align-items:center; justify-content:space-between;">
                <div style="display:flex; align-items:center; gap:10px;">
                    <span style={format!("font-size:11px; padding:2px 8px; border-radius:10px; border:1px solid {};", if is_mobile { "#2ea043" } else { "#30363d" })}>
                        { if is_mobile { "Native Android" } else { "Web Preview" } }
                    </span>
                    { if let Some(d) = device.as_ref() {
                        html! { <span style="font-size:11px; opacity:0.6;">{ format!("{} • {} cores • {} touch points", d.platform, d.cores, d.touch_points) }</span> }
                    } else {
                        html! { <span style="font-size:11px; opacity:0.6;">{"Device info unavailable"}</span> }
                    } }
                </div>
                <div style="display:flex; gap:6px;">
                    <button onclick={toggle_fullscreen} style="padding:4px 10px; font-size:12px;">
                        { if *fullscreen { "Exit Fullscreen" } else { "Fullscreen" } }
                    </button>
                    <button onclick={reload} style="padding:4px 10px; font-size:12px;">{"Reload"}</button>
                </div>
            </div>
            <div style="position:relative; aspect-ratio:9/16; max-width:360px; margin:0 auto; width:100%; background:#0d1117; border:1px solid #30363d; border-radius:12px; overflow:hidden;">
                <iframe
                    ref={iframe_ref}
                    src={props.url.clone()}
                    title="Native 3D Wallpaper WebView"
                    style="width:100%; height:100%; border:0;"
                    sandbox="allow-scripts allow-same-origin allow-forms allow-orientation-lock allow-pointer-lock"
                    loading="lazy"
                />
                <div style="position:absolute; inset:0; pointer-events:none;">
                    { for touches.iter().rev().take(3).map(|t| html! {
                        <div style={format!("position:absolute; left:{}px; top:{}px; width:32px; height:32px; margin:-16px 0 0 -16px; border-radius:50%; background:rgba(88,166,255,0.3);", t.x, t.y)}></div>
                    }) }
                </div>
                <div style="position:absolute; bottom:10px; left:50%; transform:translateX(-50%); background:rgba(13,17,23,0.85); border:1px solid #30363d; border-radius:16px; padding:4px 14px; font-size:11px; white-space:nowrap;">
                    {"Live Wallpaper"}
                </div>
            </div>
            { if is_mobile {
                html! {
                    <div style="background:rgba(88,166,255,0.06); border:1px solid rgba(88,166,255,0.25); border-radius:10px; padding:12px 14px; font-size:12px;">
                        <div style="font-weight:600; margin-bottom:6px;">{"Native Android Features Active"}</div>
                        <div style="display:grid; grid-template-columns:1fr 1fr; gap:6px; opacity:0.75;">
                            <span>{"Hardware Acceleration"}</span>
                            <span>{"Haptic Feedback"}</span>
                            <span>{"Gesture Recognition"}</span>
                            <span>{"Background Processing"}</span>
                        </div>
                    </div>
                }
            } else {
                html! {
                    <div style="background:rgba(240,136,62,0.06); border:1px solid rgba(240,136,62,0.25); border-radius:10px; padding:12px 14px; font-size:12px; opacity:0.85;">
                        {"Web preview mode. Build and run on an Android device for full native features."}
                    </div>
                }
            } }
        </div>
    }
}
