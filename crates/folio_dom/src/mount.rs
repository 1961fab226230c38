//! Mounting an element tree into the live DOM (WASM only).

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::error::DomError;
use crate::node::{ElementNode, EventKind, Node};

/// Shared message sink. Event closures forward their message here; the
/// application decides what a message means.
pub type Dispatcher<M> = Rc<dyn Fn(M)>;

/// Get the global window object.
pub fn window() -> Result<web_sys::Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

/// Get the document of the global window.
pub fn document() -> Result<web_sys::Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

/// An attached event listener.
///
/// Owns the closure backing the JS callback; dropping it detaches the
/// listener, so observers stop firing after teardown.
pub struct EventListener {
    target: web_sys::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web_sys::Event)>,
}

impl EventListener {
    /// Attach `callback` for `event` on `target`.
    pub fn attach(
        target: &web_sys::EventTarget,
        event: &'static str,
        callback: impl FnMut(web_sys::Event) + 'static,
    ) -> Result<Self, DomError> {
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(callback);
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(js_err)?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        if let Err(e) = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref())
        {
            log::warn!("failed to detach {} listener: {:?}", self.event, e);
        }
    }
}

/// A mounted subtree.
///
/// Keeps the event listeners created for the subtree alive; dropping the
/// mount detaches them all. The DOM elements themselves stay in the page.
pub struct Mount {
    listeners: Vec<EventListener>,
}

impl Mount {
    /// Number of live event listeners owned by this mount.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

/// Build `node` into real DOM elements appended to `parent`.
///
/// Event subscriptions are wired to `dispatch`; each fired event clones the
/// subscribed message and hands it to the dispatcher synchronously.
pub fn mount<M: Clone + 'static>(
    node: &Node<M>,
    parent: &web_sys::Element,
    dispatch: &Dispatcher<M>,
) -> Result<Mount, DomError> {
    let doc = document()?;
    let mut listeners = Vec::new();
    append_node(&doc, node, parent, dispatch, &mut listeners)?;
    Ok(Mount { listeners })
}

fn append_node<M: Clone + 'static>(
    doc: &web_sys::Document,
    node: &Node<M>,
    parent: &web_sys::Element,
    dispatch: &Dispatcher<M>,
    listeners: &mut Vec<EventListener>,
) -> Result<(), DomError> {
    match node {
        Node::Text(content) => {
            let text = doc.create_text_node(content);
            parent.append_child(&text).map_err(js_err)?;
        }
        Node::Raw(markup) => {
            parent
                .insert_adjacent_html("beforeend", markup)
                .map_err(js_err)?;
        }
        Node::Element(e) => {
            let element = build_element(doc, e, dispatch, listeners)?;
            parent.append_child(&element).map_err(js_err)?;
        }
    }
    Ok(())
}

fn build_element<M: Clone + 'static>(
    doc: &web_sys::Document,
    e: &ElementNode<M>,
    dispatch: &Dispatcher<M>,
    listeners: &mut Vec<EventListener>,
) -> Result<web_sys::Element, DomError> {
    let element = doc.create_element(e.tag).map_err(js_err)?;

    if let Some(ref id) = e.id {
        element.set_id(id);
    }
    if !e.classes.is_empty() {
        element.set_class_name(&e.classes.join(" "));
    }
    for (name, value) in &e.attrs {
        element.set_attribute(name, value).map_err(js_err)?;
    }
    if !e.styles.is_empty() {
        if let Some(html) = element.dyn_ref::<web_sys::HtmlElement>() {
            for (property, value) in &e.styles {
                html.style().set_property(property, value).map_err(js_err)?;
            }
        }
    }

    for (kind, message) in &e.handlers {
        listeners.push(attach_handler(&element, *kind, message.clone(), dispatch)?);
    }

    for child in &e.children {
        append_node(doc, child, &element, dispatch, listeners)?;
    }

    Ok(element)
}

fn attach_handler<M: Clone + 'static>(
    element: &web_sys::Element,
    kind: EventKind,
    message: M,
    dispatch: &Dispatcher<M>,
) -> Result<EventListener, DomError> {
    let dispatch = Rc::clone(dispatch);
    EventListener::attach(element.as_ref(), kind.name(), move |_event| {
        dispatch(message.clone());
    })
}

fn js_err(e: wasm_bindgen::JsValue) -> DomError {
    DomError::Js(format!("{:?}", e))
}
