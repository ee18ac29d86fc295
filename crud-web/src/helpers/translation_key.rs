use crate::vars::{ELEMENT_PATH_SEPARATOR, TRANSLATION_KEY_SEPARATOR};

/// Builds the translation key of a component label:
/// `{plugin}.{view}.{element path, dot separated}.label`.
pub fn label_translation_key(
    plugin_identifier: &str,
    view_name: &str,
    element_path: &str,
) -> String {
    let path = element_path
        .replace(ELEMENT_PATH_SEPARATOR, TRANSLATION_KEY_SEPARATOR);
    [plugin_identifier, view_name, &path, "label"]
        .join(TRANSLATION_KEY_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_translation_key() {
        assert_eq!(
            label_translation_key("crud", "orders", "order-link"),
            "crud.orders.order.link.label"
        );
    }

    #[test]
    fn test_label_translation_key_replaces_every_hyphen() {
        assert_eq!(
            label_translation_key("basic", "products", "window-form-back-link"),
            "basic.products.window.form.back.link.label"
        );
        assert_eq!(
            label_translation_key("basic", "products", "link"),
            "basic.products.link.label"
        );
    }

    #[test]
    fn test_label_translation_key_keeps_empty_segments() {
        assert_eq!(
            label_translation_key("crud", "orders", "order--link"),
            "crud.orders.order..link.label"
        );
    }
}
