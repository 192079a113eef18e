//! WASM bindings for the graphwalk-core library.
//!
//! All functions exposed to JavaScript via wasm-bindgen are defined here.
//! The page wires its buttons to a [`GraphApp`]; drawing goes straight to
//! the canvas and log lines to the log element.

use std::cell::RefCell;
use std::f64::consts::PI;
use std::rc::{Rc, Weak};

use gloo_timers::callback::{Interval, Timeout};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement};

use crate::config::SessionConfig;
use crate::layout::{Point, Viewport};
use crate::render::Surface;
use crate::session::{LogSink, Scheduler, Session, TaskHandle};
use crate::traversal::Algorithm;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = log)]
    pub fn console_log(s: &str);

    #[wasm_bindgen(js_namespace = console, js_name = error)]
    pub fn console_error(s: &str);
}

type WebSession = Session<CanvasSurface, ElementLog, IntervalScheduler>;

/// Canvas 2D context as a drawing surface.
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f64, height: f64) {
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn line(&mut self, from: Point, to: Point, color: &str) {
        self.ctx.begin_path();
        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(to.x, to.y);
        self.ctx.set_stroke_style_str(color);
        self.ctx.stroke();
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: &str) {
        self.ctx.begin_path();
        if let Err(e) = self.ctx.arc(center.x, center.y, radius, 0.0, 2.0 * PI) {
            console_error(&format!("arc failed: {:?}", e));
            return;
        }
        self.ctx.set_fill_style_str(color);
        self.ctx.fill();
    }

    fn text(&mut self, text: &str, at: Point, color: &str) {
        self.ctx.set_fill_style_str(color);
        if let Err(e) = self.ctx.fill_text(text, at.x, at.y) {
            console_error(&format!("fill_text failed: {:?}", e));
        }
    }
}

/// Log box backed by a DOM element's text content.
pub struct ElementLog {
    el: Element,
}

impl LogSink for ElementLog {
    fn append(&mut self, line: &str) {
        let mut text = self.el.text_content().unwrap_or_default();
        text.push_str(line);
        text.push('\n');
        self.el.set_text_content(Some(&text));
        self.el.set_scroll_top(self.el.scroll_height());
        console_log(line);
    }

    fn clear(&mut self) {
        self.el.set_text_content(Some(""));
    }
}

/// Arms `setInterval` ticks that call back into the owning session.
pub struct IntervalScheduler {
    session: Weak<RefCell<WebSession>>,
}

impl Scheduler for IntervalScheduler {
    fn every(&mut self, interval_ms: u32) -> Box<dyn TaskHandle> {
        let session = self.session.clone();
        let interval = Interval::new(interval_ms, move || {
            let Some(session) = session.upgrade() else {
                return;
            };
            // A tick that lands while the session is borrowed is dropped.
            if let Ok(mut session) = session.try_borrow_mut() {
                session.tick();
            }
        });
        Box::new(IntervalHandle(Some(interval)))
    }
}

struct IntervalHandle(Option<Interval>);

impl TaskHandle for IntervalHandle {
    fn cancel(&mut self) {
        if let Some(interval) = self.0.take() {
            // The run may be cancelled from inside this interval's own
            // callback, so its closure is freed on a later task.
            let closure = interval.cancel();
            let _ = Timeout::new(0, move || drop(closure)).forget();
        }
    }
}

impl Drop for IntervalHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[wasm_bindgen]
pub struct GraphApp {
    session: Rc<RefCell<WebSession>>,
}

impl GraphApp {
    fn with_session<R>(&self, f: impl FnOnce(&mut WebSession) -> R) -> Option<R> {
        match self.session.try_borrow_mut() {
            Ok(mut session) => Some(f(&mut session)),
            Err(_) => {
                console_error("session is busy");
                None
            }
        }
    }
}

#[wasm_bindgen]
impl GraphApp {
    /// Bind to the canvas and log elements with the given ids. `config_json`
    /// may be empty; the viewport always follows the canvas size.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str, log_id: &str, config_json: &str) -> Result<GraphApp, JsValue> {
        console_error_panic_hook::set_once();

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("document is not available"))?;

        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| JsValue::from_str(&format!("canvas '{}' not found", canvas_id)))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| JsValue::from_str(&format!("'{}' is not a canvas", canvas_id)))?;
        let log_el = document
            .get_element_by_id(log_id)
            .ok_or_else(|| JsValue::from_str(&format!("log element '{}' not found", log_id)))?;

        canvas.set_width(canvas.offset_width().max(0) as u32);
        canvas.set_height(canvas.offset_height().max(0) as u32);

        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas context creation returned None"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| JsValue::from_str("failed to cast context to CanvasRenderingContext2d"))?;

        let mut config = SessionConfig::from_json(config_json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        config.viewport = Viewport {
            width: f64::from(canvas.width()),
            height: f64::from(canvas.height()),
        };

        let session = Rc::new_cyclic(|weak| {
            RefCell::new(Session::new(
                config,
                CanvasSurface { ctx },
                ElementLog { el: log_el },
                IntervalScheduler { session: weak.clone() },
            ))
        });
        Ok(GraphApp { session })
    }

    /// Build the graph from the vertex and edge fields. Returns false if the
    /// input was rejected (the reason is in the log).
    pub fn build_graph(&self, vertices: &str, edges: &str) -> bool {
        self.with_session(|s| match s.build(vertices, edges) {
            Ok(()) => true,
            Err(e) => {
                console_error(&format!("Error building graph: {}", e));
                false
            }
        })
        .unwrap_or(false)
    }

    pub fn reset_graph(&self) {
        self.with_session(|s| s.reset());
    }

    /// Start an animation. `kind` is "bfs", "dfs" or anything else for the
    /// demo walk.
    pub fn select_algo(&self, kind: &str, start: &str) -> bool {
        let algorithm = Algorithm::from_name(kind);
        self.with_session(|s| match s.select(algorithm, start) {
            Ok(()) => true,
            Err(e) => {
                console_error(&format!("Error starting {}: {}", algorithm, e));
                false
            }
        })
        .unwrap_or(false)
    }

    pub fn stop(&self) {
        self.with_session(|s| s.stop());
    }

    pub fn is_running(&self) -> bool {
        self.session.try_borrow().map(|s| s.is_running()).unwrap_or(false)
    }

    /// Visited nodes so far as a JSON array of strings.
    pub fn visited_json(&self) -> String {
        self.session
            .try_borrow()
            .ok()
            .and_then(|s| serde_json::to_string(s.visited()).ok())
            .unwrap_or_else(|| "[]".to_string())
    }

    /// The current frame as JSON draw commands.
    pub fn frame_json(&self) -> String {
        self.session
            .try_borrow()
            .ok()
            .and_then(|s| serde_json::to_string(&s.frame()).ok())
            .unwrap_or_else(|| "{}".to_string())
    }
}
