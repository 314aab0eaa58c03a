use crate::dom;
use crate::render;
use crate::scene::{build_instances, InstanceRaw};
use playground_core::Playground;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub playground: Rc<RefCell<Playground>>,
    pub canvas: web::HtmlCanvasElement,
    pub document: web::Document,
    pub gpu: Option<render::GpuState>,
    pub instances: Vec<InstanceRaw>,
    last_torque_text: String,
}

impl FrameContext {
    pub fn new(
        playground: Rc<RefCell<Playground>>,
        canvas: web::HtmlCanvasElement,
        document: web::Document,
        gpu: Option<render::GpuState>,
    ) -> Self {
        Self {
            playground,
            canvas,
            document,
            gpu,
            instances: Vec::new(),
            last_torque_text: String::new(),
        }
    }

    pub fn frame(&mut self) {
        let css = crate::input::canvas_css_size(&self.canvas);

        let mut pg = self.playground.borrow_mut();
        if css.x > 0.0 && css.y > 0.0 {
            let vp = pg.viewport();
            if vp.width != css.x || vp.height != css.y {
                pg.resize(css.x, css.y);
            }
        }

        let readout = pg.tick(instant::now());
        let locale = pg.locale();
        let torque_text = readout.torque_text();
        if torque_text != self.last_torque_text {
            dom::set_text(&self.document, "torque", &torque_text);
            self.last_torque_text = torque_text;
        }
        dom::set_text(&self.document, "balance", readout.balance_text(locale));
        if let Some(hint) = pg.take_hint() {
            dom::set_text(&self.document, "hint", hint.text(locale));
        }

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            build_instances(&pg, &mut self.instances);
            let view_proj = pg.camera().view_projection();
            if let Err(e) = g.render(view_proj, &self.instances) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState> {
    match render::GpuState::new(canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
