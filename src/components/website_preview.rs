use web_sys::HtmlIFrameElement;
use yew::prelude::*;

use super::native_webview::NativeWebView;
use super::wallpaper_service::WallpaperService;
use crate::model::{StudioAction, StudioState};

#[derive(PartialEq, Clone, Copy)]
enum PreviewMode {
    Native,
    Mobile,
    Desktop,
}

impl PreviewMode {
    fn next(self) -> Self {
        match self {
            PreviewMode::Native => PreviewMode::Mobile,
            PreviewMode::Mobile => PreviewMode::Desktop,
            PreviewMode::Desktop => PreviewMode::Native,
        }
    }

    fn label(self) -> &'static str {
        match self {
            PreviewMode::Native => "Native",
            PreviewMode::Mobile => "Mobile",
            PreviewMode::Desktop => "Desktop",
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct WebsitePreviewProps {
    pub studio: UseReducerHandle<StudioState>,
}

#[function_component(WebsitePreview)]
pub fn website_preview(props: &WebsitePreviewProps) -> Html {
    let mode = use_state(|| PreviewMode::Native);
    let loading = use_state(|| true);
    let has_error = use_state(|| false);
    let iframe_ref = use_node_ref();

    let url: AttrValue = match &props.studio.url {
        Some(u) => AttrValue::from(u.clone()),
        None => return html! {},
    };

    let cycle_mode = {
        let mode = mode.clone();
        let loading = loading.clone();
        let has_error = has_error.clone();
        Callback::from(move |_: MouseEvent| {
            loading.set(true);
            has_error.set(false);
            mode.set(mode.next());
        })
    };
    let reload = {
        let iframe_ref = iframe_ref.clone();
        let loading = loading.clone();
        let has_error = has_error.clone();
        let url = url.clone();
        Callback::from(move |_: MouseEvent| {
            loading.set(true);
            has_error.set(false);
            if let Some(frame) = iframe_ref.cast::<HtmlIFrameElement>() {
                frame.set_src(&url);
            }
        })
    };
    let close = {
        let studio = props.studio.clone();
        Callback::from(move |_: MouseEvent| studio.dispatch(StudioAction::ClearUrl))
    };
    let on_load = {
        let loading = loading.clone();
        Callback::from(move |_: Event| loading.set(false))
    };
    let on_error = {
        let loading = loading.clone();
        let has_error = has_error.clone();
        Callback::from(move |_: Event| {
            loading.set(false);
            has_error.set(true);
        })
    };

    let on_toggle_wallpaper = {
        let studio = props.studio.clone();
        Callback::from(move |active: bool| studio.dispatch(StudioAction::SetWallpaperActive(active)))
    };
    let on_sample = {
        let studio = props.studio.clone();
        Callback::from(move |s| studio.dispatch(StudioAction::PerfSampled(s)))
    };

    let frame_style = match *mode {
        PreviewMode::Mobile => {
            "position:relative; aspect-ratio:9/16; max-width:360px; margin:0 auto; width:100%; background:#0d1117; border-radius:12px; overflow:hidden;"
        }
        _ => "position:relative; aspect-ratio:16/9; width:100%; background:#0d1117; border-radius:12px; overflow:hidden;",
    };

    html! {
        <div style="max-width:760px; margin:24px auto; display:flex; flex-direction:column; gap:14px; padding:0 12px;">
            <div style="background:#161b22; border:1px solid #30363d; border-radius:10px; padding:10px 14px; display:flex; align-items:center; justify-content:space-between;">
                <div style="display:flex; align-items:center; gap:10px; min-width:0;">
                    <span style="font-size:11px; padding:2px 8px; border-radius:10px; border:1px solid rgba(88,166,255,0.4); color:#58a6ff; flex-shrink:0;">{"Live Preview"}</span>
                    <span style="font-size:12px; opacity:0.6; overflow:hidden; text-overflow:ellipsis; white-space:nowrap;">{ url.clone() }</span>
                </div>
                <div style="display:flex; gap:6px; flex-shrink:0;">
                    <button onclick={cycle_mode} style="padding:4px 10px; font-size:12px;">{ mode.label() }</button>
                    <button onclick={reload} style="padding:4px 10px; font-size:12px;">{"Reload"}</button>
                    <button onclick={close} style="padding:4px 10px; font-size:12px;">{"Change URL"}</button>
                </div>
            </div>

            { if *mode == PreviewMode::Native {
                html! {
                    <>
                        <NativeWebView url={url.clone()} />
                        <WallpaperService
                            url={url.clone()}
                            active={props.studio.wallpaper_active}
                            on_toggle={on_toggle_wallpaper}
                            perf={props.studio.perf}
                            on_sample={on_sample}
                        />
                    </>
                }
            } else {
                html! {
                    <div style="background:#161b22; border:1px solid #30363d; border-radius:12px; padding:14px;">
                        { if *mode == PreviewMode::Mobile {
                            html! { <div style="text-align:center; font-size:12px; opacity:0.7; margin-bottom:10px;">{"Android 15 Wallpaper Preview"}</div> }
                        } else { html! {} } }
                        <div style={frame_style}>
                            { if *loading {
                                html! {
                                    <div style="position:absolute; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(13,17,23,0.9); z-index:1;">
                                        <span style="font-size:12px; opacity:0.7;">{"Loading 3D website..."}</span>
                                    </div>
                                }
                            } else { html! {} } }
                            { if *has_error {
                                html! {
                                    <div style="position:absolute; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(13,17,23,0.95); z-index:2; text-align:center; padding:20px;">
                                        <div>
                                            <div style="font-size:15px; font-weight:600; margin-bottom:6px;">{"Preview Not Available"}</div>
                                            <div style="font-size:12px; opacity:0.7;">{"The website cannot be previewed due to security restrictions. This is normal for many 3D websites."}</div>
                                        </div>
                                    </div>
                                }
                            } else {
                                html! {
                                    <iframe
                                        ref={iframe_ref.clone()}
                                        src={url.clone()}
                                        title="Website Preview"
                                        style="width:100%; height:100%; border:0;"
                                        sandbox="allow-scripts allow-same-origin allow-forms"
                                        loading="lazy"
                                        onload={on_load}
                                        onerror={on_error}
                                    />
                                }
                            } }
                        </div>
                        { if *mode == PreviewMode::Mobile {
                            html! {
                                <div style="display:flex; justify-content:center; margin-top:10px;">
                                    <span style="font-size:11px; background:rgba(13,17,23,0.85); border:1px solid #30363d; border-radius:16px; padding:4px 14px;">{"Live Wallpaper Active"}</span>
                                </div>
                            }
                        } else { html! {} } }
                    </div>
                }
            } }

            <div style="background:rgba(88,166,255,0.05); border:1px solid rgba(88,166,255,0.2); border-radius:10px; padding:12px 14px; font-size:12px; opacity:0.85;">
                <div style="font-weight:600; margin-bottom:4px;">{"Live Wallpaper Concept"}</div>
                {"This preview shows how the 3D website would appear as an interactive wallpaper on an Android home screen. The actual implementation requires native Android development."}
            </div>
        </div>
    }
}
