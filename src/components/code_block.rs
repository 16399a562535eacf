use crate::util::copy_to_clipboard;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CodeBlockProps {
    pub code: AttrValue,
    /// Short name shown in the toast ("command", "LiveWallpaperService.java", ...).
    pub label: AttrValue,
    pub notify: Callback<String>,
}

/// Monospace snippet with a copy-to-clipboard button. Copy failures fall
/// back to a toast asking the user to copy manually.
#[function_component(CodeBlock)]
pub fn code_block(props: &CodeBlockProps) -> Html {
    let copy = {
        let code = props.code.clone();
        let label = props.label.clone();
        let notify = props.notify.clone();
        Callback::from(move |_: MouseEvent| {
            let label = label.clone();
            let notify = notify.clone();
            let done = Callback::from(move |ok: bool| {
                if ok {
                    notify.emit(format!("{} copied to clipboard", label));
                } else {
                    notify.emit("Copy failed — please copy manually".to_string());
                }
            });
            copy_to_clipboard(&code, done);
        })
    };
    html! {
        <div style="position:relative; background:#0d1117; border:1px solid #30363d; border-radius:8px;">
            <button onclick={copy} style="position:absolute; top:6px; right:6px; padding:2px 8px; font-size:11px;">{"Copy"}</button>
            <pre style="margin:0; padding:12px; overflow-x:auto; font-size:12px; line-height:1.45;"><code>{ props.code.clone() }</code></pre>
        </div>
    }
}
