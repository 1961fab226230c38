//! Browser entry point (WASM only).
//!
//! Builds the page once, mounts it into `<body>`, and wires the browser to
//! the [`PortfolioApp`] controller: window events become [`Message`]s, and a
//! requestAnimationFrame loop steps the cursor spring and writes the derived
//! styles back into the DOM.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_time::Instant;

use folio_dom::{Dispatcher, DomError, EventListener, Mount, document, window};

use crate::app::PortfolioApp;
use crate::message::Message;
use crate::storage::LocalStorage;
use crate::style;
use crate::tracker::{RegionBounds, SectionId};

/// Everything that must stay alive for the lifetime of the page.
struct Shell {
    _mount: Mount,
    _listeners: Vec<EventListener>,
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    match run() {
        Ok(shell) => {
            // The page lives until the tab closes; keep the DOM wiring with it.
            Box::leak(Box::new(shell));
        }
        Err(e) => log::error!("failed to start page: {e}"),
    }
}

fn run() -> Result<Shell, DomError> {
    let win = window()?;
    let doc = document()?;
    let body = doc.body().ok_or(DomError::NoBody)?;

    inject_stylesheet(&doc)?;

    let prefers_dark = win
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()
        .map(|query| query.matches());

    let app = Rc::new(RefCell::new(PortfolioApp::new(
        Box::new(LocalStorage::new()),
        prefers_dark,
    )));

    doc.set_title(&app.borrow().profile().page_title());

    let dispatch: Dispatcher<Message> = {
        let app = Rc::clone(&app);
        Rc::new(move |message: Message| {
            app.borrow_mut().update(message);
            if let Err(e) = apply_view_state(&app.borrow()) {
                log::warn!("failed to apply view state: {e}");
            }
        })
    };

    let view = app.borrow().view();
    let mount = folio_dom::mount(&view, &body, &dispatch)?;

    register_sections(&mut app.borrow_mut(), &doc);

    // Seed viewport metrics and paint the initial theme and nav state.
    dispatch(viewport_message(&win, &doc));

    let listeners = attach_window_listeners(&win, &doc, &dispatch)?;
    start_frame_loop(Rc::clone(&dispatch))?;

    log::info!("page mounted, {} event listeners", mount.listener_count());
    Ok(Shell {
        _mount: mount,
        _listeners: listeners,
    })
}

/// Put the generated stylesheet into the document head.
fn inject_stylesheet(doc: &web_sys::Document) -> Result<(), DomError> {
    let head = doc.head().ok_or(DomError::NoDocument)?;
    let style = doc.create_element("style").map_err(js_err)?;
    style.set_text_content(Some(&style::stylesheet()));
    head.append_child(&style).map_err(js_err)?;
    Ok(())
}

/// Give every section a bounds provider backed by its live DOM element.
fn register_sections(app: &mut PortfolioApp, doc: &web_sys::Document) {
    for id in SectionId::ALL {
        let doc = doc.clone();
        app.register_section(
            id,
            Box::new(move || {
                doc.get_element_by_id(id.as_str()).map(|element| {
                    let rect = element.get_bounding_client_rect();
                    RegionBounds::new(rect.top() as f32, rect.bottom() as f32)
                })
            }),
        );
    }
}

fn viewport_message(win: &web_sys::Window, doc: &web_sys::Document) -> Message {
    let width = win
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as f32;
    let height = win
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as f32;
    let content_height = doc
        .document_element()
        .map(|root| root.scroll_height() as f32)
        .unwrap_or(height);
    Message::ViewportResized {
        width,
        height,
        content_height,
    }
}

fn attach_window_listeners(
    win: &web_sys::Window,
    doc: &web_sys::Document,
    dispatch: &Dispatcher<Message>,
) -> Result<Vec<EventListener>, DomError> {
    let mut listeners = Vec::new();

    let scroll = {
        let scroll_win = win.clone();
        let dispatch = Rc::clone(dispatch);
        EventListener::attach(win.as_ref(), "scroll", move |_| {
            let y = scroll_win.scroll_y().unwrap_or(0.0) as f32;
            dispatch(Message::Scrolled { y });
        })?
    };
    listeners.push(scroll);

    let resize = {
        let resize_win = win.clone();
        let doc = doc.clone();
        let dispatch = Rc::clone(dispatch);
        EventListener::attach(win.as_ref(), "resize", move |_| {
            dispatch(viewport_message(&resize_win, &doc));
        })?
    };
    listeners.push(resize);

    let mousemove = {
        let dispatch = Rc::clone(dispatch);
        EventListener::attach(win.as_ref(), "mousemove", move |event| {
            if let Some(mouse) = event.dyn_ref::<web_sys::MouseEvent>() {
                dispatch(Message::MouseMoved {
                    x: mouse.client_x() as f32,
                    y: mouse.client_y() as f32,
                });
            }
        })?
    };
    listeners.push(mousemove);

    Ok(listeners)
}

/// Run the animation loop forever, feeding frame deltas to the controller.
fn start_frame_loop(dispatch: Dispatcher<Message>) -> Result<(), DomError> {
    let handle: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let starter = Rc::clone(&handle);
    let mut last = Instant::now();

    *starter.borrow_mut() = Some(Closure::new(move || {
        let now = Instant::now();
        let dt = now.duration_since(last).as_secs_f32();
        last = now;
        dispatch(Message::Tick { dt });
        if let Some(callback) = handle.borrow().as_ref() {
            if let Err(e) = request_frame(callback) {
                log::warn!("frame loop stopped: {e}");
            }
        }
    }));

    if let Some(callback) = starter.borrow().as_ref() {
        request_frame(callback)?;
    }
    Ok(())
}

fn request_frame(callback: &Closure<dyn FnMut()>) -> Result<(), DomError> {
    window()?
        .request_animation_frame(callback.as_ref().unchecked_ref())
        .map_err(js_err)?;
    Ok(())
}

/// Write the controller's derived state back into the live page.
fn apply_view_state(app: &PortfolioApp) -> Result<(), DomError> {
    let doc = document()?;
    let state = app.snapshot();

    // Theme flag on the root element; the stylesheet does the rest.
    if let Some(root) = doc.document_element() {
        let classes = root.class_list();
        if state.theme.is_dark() {
            classes.add_1("dark").map_err(js_err)?;
        } else {
            classes.remove_1("dark").map_err(js_err)?;
        }
    }

    // Navigation highlight follows the active section.
    let links = doc.get_elements_by_class_name("nav-link");
    for index in 0..links.length() {
        if let Some(link) = links.item(index) {
            let is_active = link.get_attribute("data-section").as_deref()
                == Some(state.active_section.as_str());
            link.class_list()
                .toggle_with_force("active", is_active)
                .map_err(js_err)?;
        }
    }

    // Hero fade-out.
    if let Some(hero) = html_by_id(&doc, "hero-motion") {
        let css = hero.style();
        css.set_property("opacity", &format!("{:.3}", state.hero.opacity))
            .map_err(js_err)?;
        css.set_property("transform", &format!("scale({:.4})", state.hero.scale))
            .map_err(js_err)?;
    }

    // Cursor dot position and size.
    if let Some(dot) = html_by_id(&doc, "cursor-dot") {
        let (x, y) = state.cursor_origin;
        let css = dot.style();
        css.set_property("transform", &format!("translate({x:.1}px, {y:.1}px)"))
            .map_err(js_err)?;
        css.set_property("width", &format!("{:.0}px", state.cursor_size))
            .map_err(js_err)?;
        css.set_property("height", &format!("{:.0}px", state.cursor_size))
            .map_err(js_err)?;
    }

    Ok(())
}

fn html_by_id(doc: &web_sys::Document, id: &str) -> Option<web_sys::HtmlElement> {
    doc.get_element_by_id(id)
        .and_then(|e| e.dyn_into::<web_sys::HtmlElement>().ok())
}

fn js_err(e: wasm_bindgen::JsValue) -> DomError {
    DomError::Js(format!("{e:?}"))
}
