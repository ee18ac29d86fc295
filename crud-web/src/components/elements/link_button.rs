use std::rc::Rc;

use leptos::ev::MouseEvent;
use leptos::*;
use log::debug;
use serde_json::Value;

use crate::base::MainController;
use crate::components::{ComponentBase, ComponentValue, FormComponent};
use crate::helpers::label_translation_key;
use crate::vars::{
    ACTIVE_BUTTON_CLASS, BUTTON_DIV_SUFFIX, BUTTON_LINK_SUFFIX,
    LABEL_DIV_SUFFIX, LINK_BUTTON_CLASS,
};

/// Button that sends the page to a url pushed in by the host form.
///
/// The url is only followed while the button carries the active marker.
pub struct LinkButton {
    base: ComponentBase,
    controller: Rc<dyn MainController>,
    label: String,
    page_url: Option<String>,
    is_active: bool,
}

impl LinkButton {
    pub fn new(
        base: ComponentBase,
        controller: Rc<dyn MainController>,
    ) -> Self {
        let label_key = label_translation_key(
            &controller.plugin_identifier(),
            &controller.view_name(),
            base.element_path(),
        );
        let label = controller.translation(&label_key);
        debug!("Link button {} labelled by {}", base.element_id(), label_key);

        Self {
            base,
            controller,
            label,
            page_url: None,
            is_active: false,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn page_url(&self) -> Option<&str> {
        self.page_url.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn button_class(&self) -> String {
        if self.is_active {
            format!("{} {}", LINK_BUTTON_CLASS, ACTIVE_BUTTON_CLASS)
        } else {
            LINK_BUTTON_CLASS.to_string()
        }
    }

    pub fn on_button_click(&self) {
        if !self.is_active {
            return;
        }
        self.controller.go_to_page(self.page_url.as_deref());
    }

    fn insert_value(&mut self, value: ComponentValue) {
        self.page_url = match value {
            Value::Null => None,
            Value::String(url) => Some(url),
            other => Some(other.to_string()),
        };
    }
}

// value and state are the same thing for this component
impl FormComponent for LinkButton {
    fn base(&self) -> &ComponentBase {
        &self.base
    }

    fn component_value(&self) -> Option<ComponentValue> {
        None
    }

    fn set_component_value(&mut self, value: ComponentValue) {
        self.insert_value(value);
    }

    fn set_component_state(&mut self, state: ComponentValue) {
        self.insert_value(state);
    }

    fn set_component_enabled(&mut self, is_enabled: bool) {
        self.is_active = is_enabled;
    }

    fn set_component_loading(&mut self, _is_loading_visible: bool) {}
}

#[component]
pub fn LinkButtonView(button: RwSignal<LinkButton>) -> impl IntoView {
    let link_ref = create_node_ref::<html::A>();

    let (button_div_id, label_div_id, button_link_id, label) =
        button.with_untracked(|button| {
            let base = button.base();
            (
                base.child_id(BUTTON_DIV_SUFFIX),
                base.child_id(LABEL_DIV_SUFFIX),
                base.child_id(BUTTON_LINK_SUFFIX),
                button.label().to_string(),
            )
        });

    let on_click = move |ev: MouseEvent| {
        ev.prevent_default();
        if let Some(link) = link_ref.get_untracked() {
            _ = link.blur();
        }
        button.with_untracked(|button| button.on_button_click());
    };

    view! {
        <div
            id=button_div_id
            class={move || button.with(|button| button.button_class())}
        >
            <a id=button_link_id href="#" node_ref=link_ref on:click=on_click>
                <div id=label_div_id inner_html=label></div>
            </a>
        </div>
    }
}
