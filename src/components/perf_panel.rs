use crate::model::PerformanceSample;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct PerfPanelProps {
    pub perf: PerformanceSample,
}

#[function_component(PerfPanel)]
pub fn perf_panel(props: &PerfPanelProps) -> Html {
    let p = props.perf;
    html! {
        <div style="display:grid; grid-template-columns:repeat(4, 1fr); gap:10px;">
            <PerfCell label="FPS" value={p.fps.to_string()} />
            <PerfCell label="Memory" value={format!("{}%", p.memory)} />
            <PerfCell label="CPU" value={format!("{}%", p.cpu)} />
            <PerfCell label="Battery" value={format!("{}%", p.battery)} />
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
struct PerfCellProps {
    pub label: &'static str,
    pub value: String,
}

#[function_component(PerfCell)]
fn perf_cell(props: &PerfCellProps) -> Html {
    html! {
        <div style="background:rgba(13,17,23,0.6); border:1px solid #30363d; border-radius:8px; padding:10px;">
            <div style="font-size:11px; opacity:0.7;">{ props.label }</div>
            <div style="font-size:15px; font-weight:600; font-variant-numeric:tabular-nums;">{ props.value.clone() }</div>
        </div>
    }
}
