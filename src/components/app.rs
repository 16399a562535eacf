use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;

use super::build_view::BuildView;
use super::guide_view::GuideView;
use super::implementation_view::ImplementationView;
use super::instructions_modal::InstructionsModal;
use super::scene_settings_modal::SceneSettingsModal;
use super::toast::Toast;
use super::url_input::UrlInput;
use super::website_preview::WebsitePreview;
use crate::model::{StudioAction, StudioState};

#[derive(PartialEq, Clone, Copy)]
enum View {
    Preview,
    Wallpaper,
    Guide,
    Build,
}

const TABS: [(View, &str); 4] = [
    (View::Preview, "Preview"),
    (View::Wallpaper, "Live Wallpaper"),
    (View::Guide, "Native Guide"),
    (View::Build, "Build"),
];

#[function_component(App)]
pub fn app() -> Html {
    let view = use_state(|| View::Preview);
    let studio = use_reducer(StudioState::new);
    let toast = use_state(|| None::<String>);
    let show_help = use_state(|| false);
    let show_scene_settings = use_state(|| false);

    // Auto-dismiss the toast a moment after it appears.
    {
        let toast = toast.clone();
        use_effect_with((*toast).clone(), move |msg| {
            if msg.is_none() {
                return Box::new(|| ()) as Box<dyn FnOnce()>;
            }
            let Some(window) = web_sys::window() else {
                return Box::new(|| ()) as Box<dyn FnOnce()>;
            };
            let clear = Closure::wrap(Box::new(move || {
                toast.set(None);
            }) as Box<dyn FnMut()>);
            let id = window
                .set_timeout_with_callback_and_timeout_and_arguments_0(
                    clear.as_ref().unchecked_ref(),
                    2500,
                )
                .ok();
            let window_clone = window.clone();
            Box::new(move || {
                if let Some(id) = id {
                    window_clone.clear_timeout_with_handle(id);
                }
                drop(clear);
            }) as Box<dyn FnOnce()>
        });
    }

    let notify = {
        let toast = toast.clone();
        Callback::from(move |msg: String| toast.set(Some(msg)))
    };
    let on_submit_url = {
        let studio = studio.clone();
        Callback::from(move |url: String| studio.dispatch(StudioAction::SubmitUrl(url)))
    };
    let open_help = {
        let show_help = show_help.clone();
        Callback::from(move |_: MouseEvent| show_help.set(true))
    };
    let close_help = {
        let show_help = show_help.clone();
        Callback::from(move |_| show_help.set(false))
    };
    let open_scene_settings = {
        let show_scene_settings = show_scene_settings.clone();
        Callback::from(move |_: MouseEvent| show_scene_settings.set(true))
    };
    let close_scene_settings = {
        let show_scene_settings = show_scene_settings.clone();
        Callback::from(move |_| show_scene_settings.set(false))
    };

    let content = match *view {
        View::Preview => {
            if studio.url.is_some() {
                html! { <WebsitePreview studio={studio.clone()} /> }
            } else {
                html! { <UrlInput on_submit={on_submit_url} /> }
            }
        }
        View::Wallpaper => {
            html! { <ImplementationView studio={studio.clone()} notify={notify.clone()} /> }
        }
        View::Guide => html! { <GuideView notify={notify.clone()} /> },
        View::Build => html! { <BuildView notify={notify.clone()} /> },
    };

    html! {
        <div style="min-height:100vh; background:#0e1116; color:#e6edf3; font-family:system-ui, sans-serif;">
            <div id="top-bar" style="display:flex; align-items:center; justify-content:space-between; gap:12px; padding:10px 16px; background:#161b22; border-bottom:1px solid #30363d;">
                <div style="display:flex; align-items:center; gap:10px;">
                    <span style="width:22px; height:22px; border-radius:6px; background:linear-gradient(135deg, #6366f1, #22d3ee);"></span>
                    <span style="font-size:15px; font-weight:600;">{"3D Wallpaper Lab"}</span>
                </div>
                <div style="display:flex; gap:6px;">
                    { for TABS.iter().map(|(tab, label)| {
                        let view = view.clone();
                        let tab = *tab;
                        let active = *view == tab;
                        let onclick = Callback::from(move |_: MouseEvent| view.set(tab));
                        html! {
                            <button {onclick} style={format!("padding:5px 12px; font-size:12px; border-radius:6px; border:1px solid {};", if active { "#58a6ff" } else { "#30363d" })}>
                                { *label }
                            </button>
                        }
                    }) }
                </div>
                <div style="display:flex; gap:6px;">
                    <button onclick={open_scene_settings} style="padding:5px 12px; font-size:12px;">{"Scene"}</button>
                    <button onclick={open_help} style="padding:5px 12px; font-size:12px;">{"Help"}</button>
                </div>
            </div>
            { content }
            <Toast message={(*toast).clone()} />
            <InstructionsModal show={*show_help} on_close={close_help} />
            <SceneSettingsModal show={*show_scene_settings} on_close={close_scene_settings} notify={notify.clone()} />
        </div>
    }
}
