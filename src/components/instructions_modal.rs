use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct InstructionsModalProps {
    pub show: bool,
    pub on_close: Callback<()>,
}

#[function_component(InstructionsModal)]
pub fn instructions_modal(props: &InstructionsModalProps) -> Html {
    if !props.show {
        return html! {};
    }
    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {<div style="position:fixed; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.55); z-index:50;">
        <div style="background:#161b22; border:1px solid #30363d; border-radius:12px; padding:16px 20px; min-width:340px; max-width:520px; display:flex; flex-direction:column; gap:14px; font-size:14px; line-height:1.4;">
            <div style="display:flex; justify-content:space-between; align-items:center;">
                <h3 style="margin:0; font-size:18px;">{"How this demo works"}</h3>
                <button onclick={close_cb.clone()} style="padding:4px 8px;">{"Close"}</button>
            </div>
            <ul style="margin:0 0 0 18px; padding:0; list-style:disc; display:flex; flex-direction:column; gap:4px;">
                <li>{"Paste the URL of a 3D website on the Preview tab to see it framed as a phone wallpaper."}</li>
                <li>{"The Live Wallpaper tab runs a canvas scene standing in for the real WebGL content."}</li>
                <li>{"While the service is running, touch gestures and engine telemetry are simulated on a timer — nothing is measured for real."}</li>
                <li>{"Simulated gestures reach the scene the same way native ones would: a 'wallpaper-gesture' event on the page."}</li>
                <li>{"The Native Guide and Build tabs describe the Android side you would actually ship."}</li>
            </ul>
            <div style="font-size:11px; opacity:0.6;">{"Everything on this page runs in the browser; no native code is involved."}</div>
        </div>
    </div>}
}
