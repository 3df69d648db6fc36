//! Monaco editor handle.
//!
//! The host page loads Monaco and exposes it as `window.monaco`. The editor
//! instance is created lazily inside the [`EDITOR_ELEMENT_ID`] container the
//! first time a model is attached, since that container only exists once the
//! preview pane has mounted. User edits are reported through a single
//! `onDidChangeModelContent` listener registered on that instance.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Array, Function, Object, Reflect};
use repoview_core::{EditorWidget, LanguageDescriptor};
use tracing::{debug, warn};
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};

use crate::config::EDITOR_ELEMENT_ID;
use crate::utils::dom;

/// Read `target[key]`.
fn get(target: &JsValue, key: &str) -> Option<JsValue> {
    Reflect::get(target, &JsValue::from_str(key))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

/// Call `target[method](...args)`.
fn call(target: &JsValue, method: &str, args: &[JsValue]) -> Option<JsValue> {
    let function: Function = get(target, method)?.dyn_into().ok()?;
    let args: Array = args.iter().collect();
    function.apply(target, &args).ok()
}

fn to_descriptor(lang: JsValue) -> Option<LanguageDescriptor> {
    let id = get(&lang, "id")?.as_string()?;
    let extensions = get(&lang, "extensions")
        .map(|exts| {
            Array::from(&exts)
                .iter()
                .filter_map(|e| e.as_string())
                .collect()
        })
        .unwrap_or_default();
    Some(LanguageDescriptor { id, extensions })
}

type ChangeHandler = Rc<RefCell<Option<Box<dyn Fn(String)>>>>;

/// [`EditorWidget`] over the page's Monaco global.
pub struct MonacoEditor {
    monaco: Option<JsValue>,
    instance: RefCell<Option<JsValue>>,
    on_change: ChangeHandler,
    listener: RefCell<Option<Closure<dyn Fn()>>>,
}

impl MonacoEditor {
    /// Find `window.monaco`. Without it every operation is a no-op.
    pub fn from_window() -> Self {
        let monaco = dom::window().and_then(|w| get(&JsValue::from(w), "monaco"));
        if monaco.is_none() {
            warn!("window.monaco not found, editor disabled");
        }
        Self {
            monaco,
            instance: RefCell::new(None),
            on_change: Rc::new(RefCell::new(None)),
            listener: RefCell::new(None),
        }
    }

    /// Forward content changes of `instance` to the registered handler.
    fn attach_listener(&self, instance: &JsValue) {
        let handler = Rc::clone(&self.on_change);
        let editor = instance.clone();
        let closure = Closure::wrap(Box::new(move || {
            let Some(text) = call(&editor, "getValue", &[]).and_then(|v| v.as_string()) else {
                return;
            };
            if let Some(handler) = handler.borrow().as_ref() {
                handler(text);
            }
        }) as Box<dyn Fn()>);

        if call(instance, "onDidChangeModelContent", &[closure.as_ref().clone()]).is_none() {
            warn!("could not subscribe to editor changes");
        }
        *self.listener.borrow_mut() = Some(closure);
    }

    fn instance(&self) -> Option<JsValue> {
        if let Some(instance) = self.instance.borrow().as_ref() {
            return Some(instance.clone());
        }

        let editor_ns = get(self.monaco.as_ref()?, "editor")?;
        let container = dom::html_element_by_id(EDITOR_ELEMENT_ID)?;
        let options = Object::new();
        let _ = Reflect::set(
            &options,
            &JsValue::from_str("automaticLayout"),
            &JsValue::TRUE,
        );

        let instance = call(&editor_ns, "create", &[container.into(), options.into()])?;
        debug!("monaco instance created");
        self.attach_listener(&instance);
        *self.instance.borrow_mut() = Some(instance.clone());
        Some(instance)
    }
}

impl EditorWidget for MonacoEditor {
    type Model = JsValue;

    fn languages(&self) -> Vec<LanguageDescriptor> {
        self.monaco
            .as_ref()
            .and_then(|monaco| get(monaco, "languages"))
            .and_then(|languages| call(&languages, "getLanguages", &[]))
            .map(|list| Array::from(&list).iter().filter_map(to_descriptor).collect())
            .unwrap_or_default()
    }

    fn create_model(&self, text: &str, language_id: &str) -> Self::Model {
        self.monaco
            .as_ref()
            .and_then(|monaco| get(monaco, "editor"))
            .and_then(|editor_ns| {
                call(
                    &editor_ns,
                    "createModel",
                    &[JsValue::from_str(text), JsValue::from_str(language_id)],
                )
            })
            .unwrap_or(JsValue::NULL)
    }

    fn set_model(&self, model: Option<Self::Model>) {
        let Some(instance) = self.instance() else {
            return;
        };
        let previous = call(&instance, "getModel", &[]);
        call(&instance, "setModel", &[model.unwrap_or(JsValue::NULL)]);

        // Detached models are not reused
        if let Some(previous) = previous {
            call(&previous, "dispose", &[]);
        }
    }

    fn on_content_change(&self, handler: Box<dyn Fn(String)>) {
        *self.on_change.borrow_mut() = Some(handler);
    }
}
