use crate::model::SceneConfig;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SceneSettingsModalProps {
    pub show: bool,
    pub on_close: Callback<()>,
    pub notify: Callback<String>,
}

/// Edits the persisted scene defaults. The mounted scene reads the key
/// once at mount, so saved changes apply the next time a preview starts.
#[function_component(SceneSettingsModal)]
pub fn scene_settings_modal(props: &SceneSettingsModalProps) -> Html {
    let mesh_count = use_state(|| SceneConfig::load().mesh_count.to_string());
    let speed = use_state(|| SceneConfig::load().animation_speed.to_string());
    let color = use_state(|| SceneConfig::load().background_color);

    if !props.show {
        return html! {};
    }

    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let on_mesh_count = {
        let mesh_count = mesh_count.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                mesh_count.set(input.value());
            }
        })
    };
    let on_speed = {
        let speed = speed.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                speed.set(input.value());
            }
        })
    };
    let on_color = {
        let color = color.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                color.set(input.value());
            }
        })
    };
    let save_cb = {
        let mesh_count = mesh_count.clone();
        let speed = speed.clone();
        let color = color.clone();
        let notify = props.notify.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            let defaults = SceneConfig::default();
            let cfg = SceneConfig {
                mesh_count: mesh_count.parse().unwrap_or(defaults.mesh_count).min(12),
                animation_speed: speed
                    .parse()
                    .unwrap_or(defaults.animation_speed)
                    .clamp(0.1, 3.0),
                background_color: if color.is_empty() {
                    defaults.background_color
                } else {
                    (*color).clone()
                },
            };
            cfg.store();
            notify.emit("Scene defaults saved — applied on the next preview".to_string());
            on_close.emit(());
        })
    };

    let row_style = "display:flex; align-items:center; gap:10px;";
    let label_style = "flex:1;";
    let input_style = "width:120px; background:#0d1117; border:1px solid #30363d; border-radius:6px; color:inherit; padding:4px 8px;";
    html! {<div style="position:fixed; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.55); z-index:50;">
        <div style="background:#161b22; border:1px solid #30363d; border-radius:12px; padding:16px 20px; min-width:340px; display:flex; flex-direction:column; gap:14px; font-size:14px;">
            <div style="display:flex; justify-content:space-between; align-items:center;">
                <h3 style="margin:0; font-size:18px;">{"Scene defaults"}</h3>
                <button onclick={close_cb.clone()} style="padding:4px 8px;">{"Close"}</button>
            </div>
            <div style="display:flex; flex-direction:column; gap:10px;">
                <label style={row_style}>
                    <span style={label_style}>{"Mesh count (max 12)"}</span>
                    <input style={input_style} type="number" min="0" max="12" value={(*mesh_count).clone()} oninput={on_mesh_count} />
                </label>
                <label style={row_style}>
                    <span style={label_style}>{"Animation speed"}</span>
                    <input style={input_style} type="number" step="0.1" min="0.1" max="3" value={(*speed).clone()} oninput={on_speed} />
                </label>
                <label style={row_style}>
                    <span style={label_style}>{"Background color"}</span>
                    <input style={input_style} type="text" value={(*color).clone()} oninput={on_color} />
                </label>
            </div>
            <div style="display:flex; gap:8px;">
                <button onclick={save_cb} style="flex:1;">{"Save"}</button>
                <button onclick={close_cb} style="flex:0 0 auto;">{"Cancel"}</button>
            </div>
            <div style="font-size:11px; opacity:0.6;">{"Stored under the wallpaper_scene_config key; the running preview keeps its current settings."}</div>
        </div>
    </div>}
}
