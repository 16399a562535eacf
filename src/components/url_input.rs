use crate::util::validate_url;
use web_sys::HtmlInputElement;
use yew::prelude::*;

struct SampleSite {
    name: &'static str,
    url: &'static str,
    description: &'static str,
}

const SAMPLE_SITES: [SampleSite; 3] = [
    SampleSite {
        name: "Three.js Examples",
        url: "https://threejs.org/examples/webgl_animation_cloth.html",
        description: "Realistic cloth simulation",
    },
    SampleSite {
        name: "Babylon.js Playground",
        url: "https://playground.babylonjs.com/#9WUJN#1",
        description: "Interactive 3D playground",
    },
    SampleSite {
        name: "WebGL Fluid",
        url: "https://paveldogreat.github.io/WebGL-Fluid-Simulation/",
        description: "Fluid dynamics simulation",
    },
];

#[derive(Properties, PartialEq, Clone)]
pub struct UrlInputProps {
    pub on_submit: Callback<String>,
}

#[function_component(UrlInput)]
pub fn url_input(props: &UrlInputProps) -> Html {
    let url = use_state(String::new);
    let error = use_state(|| None::<&'static str>);

    let submit = {
        let url = url.clone();
        let error = error.clone();
        let on_submit = props.on_submit.clone();
        move || match validate_url(&url) {
            Ok(()) => {
                error.set(None);
                on_submit.emit(url.trim().to_string());
            }
            Err(msg) => error.set(Some(msg)),
        }
    };

    let oninput = {
        let url = url.clone();
        let error = error.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                url.set(input.value());
                if error.is_some() {
                    error.set(None);
                }
            }
        })
    };
    let onkeydown = {
        let submit = submit.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                submit();
            }
        })
    };
    let onclick = {
        let submit = submit.clone();
        Callback::from(move |_: MouseEvent| submit())
    };

    html! {
        <div style="max-width:560px; margin:40px auto; background:#161b22; border:1px solid #30363d; border-radius:12px; padding:20px; display:flex; flex-direction:column; gap:14px;">
            <div>
                <h3 style="margin:0 0 4px 0; font-size:18px;">{"Enter 3D Website URL"}</h3>
                <p style="margin:0; font-size:13px; opacity:0.7;">{"Paste the URL of a 3D website to preview as wallpaper"}</p>
            </div>
            <div style="display:flex; flex-direction:column; gap:6px;">
                <input
                    type="url"
                    placeholder="https://example.com/3d-website"
                    value={(*url).clone()}
                    {oninput}
                    {onkeydown}
                    style="background:#0d1117; border:1px solid #30363d; border-radius:8px; color:inherit; padding:8px 12px; font-size:14px;"
                />
                { if let Some(msg) = *error {
                    html! { <div style="font-size:12px; color:#f85149;">{ msg }</div> }
                } else { html! {} } }
            </div>
            <button {onclick} disabled={url.trim().is_empty()} style="padding:8px;">{"Preview Wallpaper"}</button>
            <div style="display:flex; align-items:center; gap:8px;">
                <div style="flex:1; height:1px; background:#30363d;"></div>
                <span style="font-size:11px; opacity:0.6;">{"Or try these examples"}</span>
                <div style="flex:1; height:1px; background:#30363d;"></div>
            </div>
            <div style="display:flex; flex-direction:column; gap:6px;">
                { for SAMPLE_SITES.iter().map(|site| {
                    let on_submit = props.on_submit.clone();
                    let error = error.clone();
                    let url_state = url.clone();
                    let sample = site.url;
                    let pick = Callback::from(move |_: MouseEvent| {
                        url_state.set(sample.to_string());
                        error.set(None);
                        on_submit.emit(sample.to_string());
                    });
                    html! {
                        <button onclick={pick} style="text-align:left; padding:8px 12px; background:rgba(13,17,23,0.6); border:1px solid #30363d; border-radius:8px;">
                            <div style="font-size:13px; font-weight:500;">{ site.name }</div>
                            <div style="font-size:11px; opacity:0.6;">{ site.description }</div>
                        </button>
                    }
                }) }
            </div>
        </div>
    }
}
