//! Browser tests for mounting the background on a real `<canvas>`.
//!
//! Run with `wasm-pack test --headless --chrome` (or `--firefox`).

#![cfg(target_arch = "wasm32")]

use js_sys::{Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{Event, HtmlCanvasElement, MouseEvent, MouseEventInit};

use particle_field::constants::ATTR_PARTICLE_CONFIG;
use particle_field::{FieldConfig, ParticleBackground};

wasm_bindgen_test_configure!(run_in_browser);

fn fresh_canvas(id: &str) -> HtmlCanvasElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<HtmlCanvasElement>()
        .unwrap();
    canvas.set_id(id);
    document.body().unwrap().append_child(&canvas).unwrap();
    canvas
}

fn press_window(x: i32, y: i32) {
    let init = MouseEventInit::new();
    init.set_client_x(x);
    init.set_client_y(y);
    let event = MouseEvent::new_with_mouse_event_init_dict("mousedown", &init).unwrap();
    web_sys::window().unwrap().dispatch_event(&event).unwrap();
}

fn move_window(x: i32, y: i32) {
    let init = MouseEventInit::new();
    init.set_client_x(x);
    init.set_client_y(y);
    let event = MouseEvent::new_with_mouse_event_init_dict("mousemove", &init).unwrap();
    web_sys::window().unwrap().dispatch_event(&event).unwrap();
}

fn interactive(count: usize) -> FieldConfig {
    FieldConfig {
        particle_count: count,
        spawn_on_press: true,
        seed: Some(9),
        ..FieldConfig::default()
    }
}

#[wasm_bindgen_test]
fn mount_by_id_seeds_default_population() {
    let canvas = fresh_canvas("particles-default");
    let mut bg = ParticleBackground::mount_by_id("particles-default", JsValue::UNDEFINED).unwrap();

    assert!(bg.is_running());
    assert_eq!(bg.particle_count(), 200);
    assert!(canvas.width() > 0);

    bg.unmount();
    canvas.remove();
}

#[wasm_bindgen_test]
fn mount_reads_dataset_config() {
    let canvas = fresh_canvas("particles-dataset");
    canvas
        .set_attribute(ATTR_PARTICLE_CONFIG, r#"{"particleCount": 17}"#)
        .unwrap();

    let mut bg = ParticleBackground::mount(canvas.clone(), JsValue::NULL).unwrap();
    assert_eq!(bg.particle_count(), 17);

    bg.unmount();
    canvas.remove();
}

fn js_config(entries: &[(&str, JsValue)]) -> JsValue {
    let object = Object::new();
    for (key, value) in entries {
        Reflect::set(&object, &JsValue::from_str(key), value).unwrap();
    }
    object.into()
}

#[wasm_bindgen_test]
fn mount_accepts_js_object_config() {
    let canvas = fresh_canvas("particles-js-config");
    let config = js_config(&[
        ("variant", JsValue::from_str("interactive")),
        ("particleCount", JsValue::from(7)),
    ]);

    let mut bg = ParticleBackground::mount(canvas.clone(), config).unwrap();
    assert_eq!(bg.particle_count(), 7);

    // The interactive preset spawns on press.
    press_window(15, 15);
    assert_eq!(bg.particle_count(), 8);

    bg.unmount();
    canvas.remove();
}

#[wasm_bindgen_test]
fn mount_rejects_unknown_js_config_key() {
    let canvas = fresh_canvas("particles-js-typo");
    let config = js_config(&[("partcleCount", JsValue::from(7))]);

    assert!(ParticleBackground::mount(canvas.clone(), config).is_err());
    canvas.remove();
}

#[wasm_bindgen_test]
fn mount_rejects_invalid_js_config_value() {
    let canvas = fresh_canvas("particles-js-damping");
    let config = js_config(&[("damping", JsValue::from(0.5))]);

    assert!(ParticleBackground::mount(canvas.clone(), config).is_err());
    canvas.remove();
}

#[wasm_bindgen_test]
fn missing_canvas_fails_fast() {
    let err = ParticleBackground::mount_by_id("no-such-canvas", JsValue::UNDEFINED).err();
    assert!(err.is_some());
}

#[wasm_bindgen_test]
fn press_spawns_until_unmount() {
    let canvas = fresh_canvas("particles-press");
    let mut bg = ParticleBackground::try_mount(canvas.clone(), interactive(5)).unwrap();
    assert_eq!(bg.listener_count(), 4);

    press_window(10, 10);
    assert_eq!(bg.particle_count(), 6);

    bg.unmount();
    assert!(!bg.is_running());
    assert_eq!(bg.listener_count(), 0);

    // Stale press after teardown must not reach the field.
    press_window(20, 20);
    assert_eq!(bg.particle_count(), 6);

    canvas.remove();
}

#[wasm_bindgen_test]
fn leaving_the_page_clears_the_pointer() {
    let canvas = fresh_canvas("particles-leave");
    let mut bg = ParticleBackground::try_mount(canvas.clone(), interactive(4)).unwrap();

    move_window(30, 40);
    assert!(bg.pointer().is_some());

    // Fired at the root element; it does not bubble.
    let root = web_sys::window().unwrap().document().unwrap().document_element().unwrap();
    root.dispatch_event(&Event::new("mouseleave").unwrap()).unwrap();
    assert_eq!(bg.pointer(), None);

    bg.unmount();
    canvas.remove();
}

#[wasm_bindgen_test]
fn independent_instances_do_not_share_state() {
    let a = fresh_canvas("particles-a");
    let b = fresh_canvas("particles-b");
    let mut first = ParticleBackground::try_mount(a.clone(), interactive(3)).unwrap();
    let mut second = ParticleBackground::try_mount(b.clone(), interactive(8)).unwrap();

    first.unmount();
    press_window(1, 1);

    assert_eq!(first.particle_count(), 3);
    assert_eq!(second.particle_count(), 9);
    assert!(second.is_running());

    second.unmount();
    a.remove();
    b.remove();
}
