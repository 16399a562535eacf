use yew::prelude::*;

use crate::util::copy_to_clipboard;

const COMMANDS: [(&str, &str); 6] = [
    ("git clone your-repo-url", "Clone from GitHub"),
    ("cd wallpaper-lab && npm install", "Install web dependencies"),
    ("npx cap add android", "Add Android platform"),
    ("trunk build --release", "Build the web app"),
    ("npx cap sync android", "Sync to native Android"),
    ("npx cap run android", "Build and run on device"),
];

#[derive(Properties, PartialEq, Clone)]
pub struct BuildViewProps {
    pub notify: Callback<String>,
}

#[function_component(BuildView)]
pub fn build_view(props: &BuildViewProps) -> Html {
    html! {
        <div style="max-width:760px; margin:24px auto; display:flex; flex-direction:column; gap:14px; padding:0 12px;">
            <div style="background:#161b22; border:1px solid #30363d; border-radius:10px; padding:14px;">
                <div style="font-size:16px; font-weight:600;">{"Build Native Android App"}</div>
                <div style="font-size:12px; opacity:0.7; margin-top:4px;">{"Complete instructions to build and deploy the 3D wallpaper app"}</div>
            </div>

            <div style="background:rgba(13,17,23,0.6); border:1px solid #30363d; border-radius:10px; padding:14px;">
                <div style="font-size:13px; font-weight:600; margin-bottom:10px;">{"Prerequisites"}</div>
                <div style="display:grid; grid-template-columns:1fr 1fr; gap:14px; font-size:12px;">
                    <div>
                        <div style="font-weight:500; margin-bottom:4px;">{"Required Software"}</div>
                        <div style="opacity:0.7; line-height:1.6;">
                            {"• Rust toolchain with the wasm32 target and trunk"}<br />
                            {"• Node.js 18+ and npm (Capacitor tooling)"}<br />
                            {"• Android Studio with SDK"}<br />
                            {"• Java 17+ (JDK)"}
                        </div>
                    </div>
                    <div>
                        <div style="font-weight:500; margin-bottom:4px;">{"Android Setup"}</div>
                        <div style="opacity:0.7; line-height:1.6;">
                            {"• Android SDK Platform 34+"}<br />
                            {"• Android SDK Build-Tools"}<br />
                            {"• Emulator or physical device"}<br />
                            {"• USB debugging enabled"}
                        </div>
                    </div>
                </div>
            </div>

            <div style="background:rgba(13,17,23,0.6); border:1px solid #30363d; border-radius:10px; padding:14px;">
                <div style="font-size:13px; font-weight:600; margin-bottom:10px;">{"Build Commands"}</div>
                <div style="display:flex; flex-direction:column; gap:8px;">
                    { for COMMANDS.iter().enumerate().map(|(i, (cmd, desc))| {
                        let notify = props.notify.clone();
                        let command = *cmd;
                        let copy = Callback::from(move |_: MouseEvent| {
                            let notify = notify.clone();
                            let done = Callback::from(move |ok: bool| {
                                notify.emit(if ok {
                                    "Command copied to clipboard".to_string()
                                } else {
                                    "Copy failed — please copy manually".to_string()
                                });
                            });
                            copy_to_clipboard(command, done);
                        });
                        html! {
                            <div style="display:flex; align-items:center; gap:10px; background:rgba(22,27,34,0.8); border:1px solid #30363d; border-radius:8px; padding:8px 10px;">
                                <span style="width:22px; height:22px; border-radius:50%; background:rgba(88,166,255,0.15); color:#58a6ff; display:flex; align-items:center; justify-content:center; font-size:11px; font-weight:600; flex-shrink:0;">{ i + 1 }</span>
                                <div style="flex:1; min-width:0;">
                                    <code style="font-size:12px;">{ *cmd }</code>
                                    <div style="font-size:11px; opacity:0.6;">{ *desc }</div>
                                </div>
                                <button onclick={copy} style="padding:2px 8px; font-size:11px; flex-shrink:0;">{"Copy"}</button>
                            </div>
                        }
                    }) }
                </div>
            </div>

            <div style="background:rgba(46,160,67,0.05); border:1px solid rgba(46,160,67,0.2); border-radius:10px; padding:14px;">
                <div style="font-size:13px; font-weight:600; margin-bottom:8px;">{"Expected Result"}</div>
                <div style="font-size:12px; opacity:0.8; line-height:1.7;">
                    {"✓ Native Android APK installed on your device"}<br />
                    {"✓ 3D websites running as interactive wallpapers"}<br />
                    {"✓ Hardware-accelerated WebView with touch support"}<br />
                    {"✓ Full native Android integration capabilities"}
                </div>
            </div>
        </div>
    }
}
