use serde_json::Value;

use crate::base::CrudError;
use crate::vars::ELEMENT_PATH_SEPARATOR;

/// Value exchanged between the host form and its components.
pub type ComponentValue = Value;

/// Identity of a component within its parent form, derived from the id of
/// the DOM element the component is bound to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentBase {
    element_id: String,
    element_name: String,
}

impl ComponentBase {
    pub fn new(element_id: &str) -> Result<Self, CrudError> {
        if element_id.is_empty() {
            return Err(CrudError::ElementInvalid(
                "element id is empty".to_string(),
            ));
        }
        let element_name = element_id
            .rsplit(ELEMENT_PATH_SEPARATOR)
            .next()
            .unwrap_or_default()
            .to_string();

        Ok(Self {
            element_id: element_id.to_string(),
            element_name,
        })
    }

    pub fn element_id(&self) -> &str {
        &self.element_id
    }

    pub fn element_path(&self) -> &str {
        &self.element_id
    }

    pub fn element_name(&self) -> &str {
        &self.element_name
    }

    pub fn child_id(&self, suffix: &str) -> String {
        format!("{}{}", self.element_id, suffix)
    }
}

/// Hooks a host form invokes on each of its components.
pub trait FormComponent {
    fn base(&self) -> &ComponentBase;

    fn element_path(&self) -> &str {
        self.base().element_path()
    }

    fn element_name(&self) -> &str {
        self.base().element_name()
    }

    fn component_value(&self) -> Option<ComponentValue>;
    fn set_component_value(&mut self, value: ComponentValue);
    fn set_component_state(&mut self, state: ComponentValue);
    fn set_component_enabled(&mut self, is_enabled: bool);
    fn set_component_loading(&mut self, is_loading_visible: bool);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vars::{BUTTON_LINK_SUFFIX, LABEL_DIV_SUFFIX};

    #[test]
    fn test_component_base_new() {
        let base = ComponentBase::new("window-form-order-link").unwrap();
        assert_eq!(base.element_id(), "window-form-order-link");
        assert_eq!(base.element_path(), "window-form-order-link");
        assert_eq!(base.element_name(), "link");

        let base = ComponentBase::new("orderLink").unwrap();
        assert_eq!(base.element_name(), "orderLink");
    }

    #[test]
    fn test_child_id() {
        let base = ComponentBase::new("order-link").unwrap();
        assert_eq!(base.child_id(LABEL_DIV_SUFFIX), "order-link_labelDiv");
        assert_eq!(base.child_id(BUTTON_LINK_SUFFIX), "order-link_buttonLink");
    }

    #[test]
    fn test_invalid_element_id() {
        assert!(matches!(
            ComponentBase::new(""),
            Err(CrudError::ElementInvalid(_))
        ));
    }

    #[test]
    fn test_empty_path_segments_are_kept() {
        let base = ComponentBase::new("order--link").unwrap();
        assert_eq!(base.element_path(), "order--link");
        assert_eq!(base.element_name(), "link");

        let base = ComponentBase::new("order-").unwrap();
        assert_eq!(base.element_name(), "");
    }
}
