use crate::input;
use playground_core::{CharacterParams, Gender, Playground, PointerOutcome};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub playground: Rc<RefCell<Playground>>,
}

fn add_window_listener<E: JsCast + 'static>(kind: &str, handler: impl FnMut(E) + 'static) {
    let mut handler = handler;
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        let _ = wnd.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Keep the playground's viewport in step with the canvas' CSS box so pointer
/// positions and pick rays agree.
fn sync_viewport(pg: &mut Playground, canvas: &web::HtmlCanvasElement) {
    let size = input::canvas_css_size(canvas);
    let vp = pg.viewport();
    if size.x > 0.0 && size.y > 0.0 && (vp.width != size.x || vp.height != size.y) {
        pg.resize(size.x, size.y);
    }
}

pub fn wire_input_handlers(w: InputWiring) {
    // pointerdown
    {
        let pg = w.playground.clone();
        let canvas_target = w.canvas.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let pos = input::pointer_canvas_css(&ev, &canvas_target);
            let outcome = {
                let mut pg = pg.borrow_mut();
                sync_viewport(&mut pg, &canvas_target);
                pg.pointer_down(pos)
            };
            match outcome {
                PointerOutcome::DragStarted(id) => {
                    log::info!("[mouse] begin drag on {:?}", id);
                    let _ = canvas_target.set_pointer_capture(ev.pointer_id());
                    ev.prevent_default();
                }
                PointerOutcome::SwingPushed { .. } => ev.prevent_default(),
                _ => {}
            }
        }) as Box<dyn FnMut(_)>);
        let _ = w
            .canvas
            .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // pointermove
    {
        let pg = w.playground.clone();
        let canvas_mouse = w.canvas.clone();
        add_window_listener("pointermove", move |ev: web::PointerEvent| {
            let pos = input::pointer_canvas_css(&ev, &canvas_mouse);
            pg.borrow_mut().pointer_move(pos);
        });
    }

    // pointerup
    {
        let pg = w.playground.clone();
        let canvas_up = w.canvas.clone();
        add_window_listener("pointerup", move |ev: web::PointerEvent| {
            let pos = input::pointer_canvas_css(&ev, &canvas_up);
            let outcome = pg.borrow_mut().pointer_up(Some(pos));
            if let PointerOutcome::Dropped { character, ride } = outcome {
                log::info!("[mouse] dropped {:?} onto {:?}", character, ride);
            }
        });
    }

    // pointercancel and focus loss end the drag where it is
    {
        let pg = w.playground.clone();
        add_window_listener("pointercancel", move |_ev: web::PointerEvent| {
            pg.borrow_mut().cancel_drag();
        });
    }
    {
        let pg = w.playground.clone();
        add_window_listener("blur", move |_ev: web::Event| {
            pg.borrow_mut().cancel_drag();
        });
    }
}

fn form_field(data: &web::FormData, name: &str) -> String {
    data.get(name).as_string().unwrap_or_default()
}

pub fn read_character_form(form: &web::HtmlFormElement) -> anyhow::Result<CharacterParams> {
    let data = web::FormData::new_with_form(form)
        .map_err(|e| anyhow::anyhow!(format!("FormData error: {:?}", e)))?;
    let raw_gender = form_field(&data, "gender");
    let gender = raw_gender.parse::<Gender>().unwrap_or_else(|e| {
        log::warn!("[form] {e}, using male");
        Gender::Male
    });
    Ok(CharacterParams {
        height_cm: input::parse_measurement(&form_field(&data, "height")),
        weight_kg: input::parse_measurement(&form_field(&data, "weight")),
        gender,
    })
}

pub fn wire_character_form(document: &web::Document, playground: Rc<RefCell<Playground>>) {
    let Some(form) = document
        .get_element_by_id("person-form")
        .and_then(|el| el.dyn_into::<web::HtmlFormElement>().ok())
    else {
        log::warn!("missing #person-form; character creation disabled");
        return;
    };
    let form_submit = form.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        ev.prevent_default();
        match read_character_form(&form_submit) {
            Ok(params) => {
                playground.borrow_mut().spawn_character(params);
            }
            Err(e) => log::error!("[form] {:?}", e),
        }
    }) as Box<dyn FnMut(_)>);
    let _ = form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref());
    closure.forget();
}
