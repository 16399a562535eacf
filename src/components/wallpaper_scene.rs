use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{CanvasRenderingContext2d, CustomEvent, HtmlCanvasElement};
use yew::prelude::*;

use crate::model::SceneConfig;
use crate::scene::{self, Vec3};
use crate::state::gesture::{self, GESTURE_EVENT_NAME};
use crate::state::SceneCamera;

#[derive(Properties, PartialEq, Clone)]
pub struct WallpaperSceneProps {
    pub active: bool,
}

/// Decorative 3D preview. Loads the persisted scene defaults once at
/// mount, renders wireframe meshes plus a particle field on a 2d canvas,
/// and lets `wallpaper-gesture` events drive the camera.
#[function_component(WallpaperScene)]
pub fn wallpaper_scene(props: &WallpaperSceneProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with(props.active, move |active| {
            if !*active {
                return Box::new(|| ()) as Box<dyn FnOnce()>;
            }
            let Some(window) = web_sys::window() else {
                return Box::new(|| ()) as Box<dyn FnOnce()>;
            };
            let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() else {
                return Box::new(|| ()) as Box<dyn FnOnce()>;
            };

            // Read once; the running scene never re-reads the key.
            let config = SceneConfig::load();
            let meshes = scene::mesh_set(config.mesh_count);
            let particles = {
                let mut rolls = Vec::with_capacity(300);
                for _ in 0..300 {
                    rolls.push(js_sys::Math::random());
                }
                scene::particle_field(&rolls)
            };

            let camera = Rc::new(RefCell::new(SceneCamera::default()));

            let apply_canvas_size = {
                let canvas = canvas.clone();
                move || {
                    let rect = canvas.get_bounding_client_rect();
                    canvas.set_width(rect.width().max(1.0) as u32);
                    canvas.set_height(rect.height().max(1.0) as u32);
                }
            };
            apply_canvas_size();

            let resize_cb = {
                let apply_canvas_size = apply_canvas_size.clone();
                Closure::wrap(Box::new(move |_e: web_sys::Event| {
                    apply_canvas_size();
                }) as Box<dyn FnMut(_)>)
            };
            let _ = window
                .add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref());

            // Camera controller: consume gesture events broadcast on window.
            let gesture_cb = {
                let camera = camera.clone();
                Closure::wrap(Box::new(move |e: web_sys::Event| {
                    if let Ok(ce) = e.dyn_into::<CustomEvent>() {
                        if let Some(g) = gesture::from_custom_event(&ce) {
                            camera.borrow_mut().apply(&g);
                        }
                    }
                }) as Box<dyn FnMut(_)>)
            };
            let _ = window.add_event_listener_with_callback(
                GESTURE_EVENT_NAME,
                gesture_cb.as_ref().unchecked_ref(),
            );

            // Render loop.
            let raf_id = Rc::new(RefCell::new(None));
            {
                let raf_id_loop = raf_id.clone();
                let window_loop = window.clone();
                let canvas_loop = canvas.clone();
                let camera_loop = camera.clone();
                let speed = config.animation_speed;
                let background = config.background_color.clone();
                let closure_cell: Rc<RefCell<Option<Closure<dyn FnMut()>>>> =
                    Rc::new(RefCell::new(None));
                let closure_cell_clone = closure_cell.clone();
                let mut t: f64 = 0.0;
                *closure_cell.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                    t += speed / 60.0;
                    draw_frame(&canvas_loop, &camera_loop.borrow(), &background, &meshes, &particles, t);
                    if let Ok(id) = window_loop.request_animation_frame(
                        closure_cell_clone
                            .borrow()
                            .as_ref()
                            .unwrap()
                            .as_ref()
                            .unchecked_ref(),
                    ) {
                        *raf_id_loop.borrow_mut() = Some(id);
                    }
                }) as Box<dyn FnMut()>));
                if let Ok(id) = window.request_animation_frame(
                    closure_cell
                        .borrow()
                        .as_ref()
                        .unwrap()
                        .as_ref()
                        .unchecked_ref(),
                ) {
                    *raf_id.borrow_mut() = Some(id);
                }
                // closure_cell stays captured by the frame closure itself;
                // cancelling the pending frame below is enough to stop it.
            }

            let window_clone = window.clone();
            Box::new(move || {
                let _ = window_clone.remove_event_listener_with_callback(
                    "resize",
                    resize_cb.as_ref().unchecked_ref(),
                );
                let _ = window_clone.remove_event_listener_with_callback(
                    GESTURE_EVENT_NAME,
                    gesture_cb.as_ref().unchecked_ref(),
                );
                if let Some(id) = *raf_id.borrow() {
                    let _ = window_clone.cancel_animation_frame(id);
                }
                drop(resize_cb);
                drop(gesture_cb);
            }) as Box<dyn FnOnce()>
        });
    }

    if !props.active {
        return html! {
            <div style="width:100%; height:100%; display:flex; align-items:center; justify-content:center; background:#0d1117;">
                <span style="font-size:13px; opacity:0.6;">{"Wallpaper paused"}</span>
            </div>
        };
    }
    html! {
        <canvas ref={canvas_ref} style="display:block; width:100%; height:100%;"></canvas>
    }
}

fn draw_frame(
    canvas: &HtmlCanvasElement,
    camera: &SceneCamera,
    background: &str,
    meshes: &[scene::Mesh],
    particles: &[Vec3],
    t: f64,
) {
    if !canvas.is_connected() {
        return;
    }
    let ctx = match canvas.get_context("2d").ok().flatten() {
        Some(c) => match c.dyn_into::<CanvasRenderingContext2d>() {
            Ok(c) => c,
            Err(_) => return,
        },
        None => return,
    };
    let w = canvas.width() as f64;
    let h = canvas.height() as f64;

    ctx.set_fill_style_str(background);
    ctx.fill_rect(0.0, 0.0, w, h);

    // Slow auto-rotate on top of whatever the gestures have done.
    let auto_yaw = t * 0.05;

    ctx.set_fill_style_str("rgba(99,102,241,0.6)");
    for p in particles {
        let q = p.rotate_y(t * 0.06).rotate_x(t * 0.03).rotate_y(auto_yaw);
        if let Some((sx, sy)) = scene::project(q, camera, w, h) {
            ctx.fill_rect(sx - 1.0, sy - 1.0, 2.0, 2.0);
        }
    }

    ctx.set_line_width(1.5);
    for mesh in meshes {
        ctx.set_stroke_style_str(mesh.color);
        for [a, b] in scene::wireframe(mesh.kind) {
            let pa = transform_point(a, mesh.position, t, auto_yaw);
            let pb = transform_point(b, mesh.position, t, auto_yaw);
            if let (Some((ax, ay)), Some((bx, by))) =
                (scene::project(pa, camera, w, h), scene::project(pb, camera, w, h))
            {
                ctx.begin_path();
                ctx.move_to(ax, ay);
                ctx.line_to(bx, by);
                ctx.stroke();
            }
        }
    }
}

fn transform_point(p: Vec3, position: Vec3, t: f64, auto_yaw: f64) -> Vec3 {
    p.rotate_x(t * 0.5)
        .rotate_y(t * 0.3)
        .add(position)
        .rotate_y(auto_yaw)
}
