use std::rc::Rc;

use leptos::logging::error;
use leptos::*;
use serde_json::Value;

use crate::base::{CrudError, MainController, PageConfig, PageController};
use crate::components::elements::{LinkButton, LinkButtonView};
use crate::components::{ComponentBase, FormComponent};

const PAGE_CONFIG: &str = include_str!("../assets/orders.yaml");
const ORDER_LINK_ID: &str = "order-link";
const ORDER_URL: &str = "/orders/5";

#[component]
pub fn App() -> impl IntoView {
    match order_link() {
        Ok(button) => view! { <LinkButtonView button=button /> }.into_view(),
        Err(err) => {
            error!("Failed to build page: {}", err);
            view! {
                <div>
                    {"Failed to build page: "}
                    {err.to_string()}
                </div>
            }
            .into_view()
        }
    }
}

fn order_link() -> Result<RwSignal<LinkButton>, CrudError> {
    let config = PageConfig::from_yaml(PAGE_CONFIG)?;
    let controller: Rc<dyn MainController> =
        Rc::new(PageController::for_browser(config));

    let mut button =
        LinkButton::new(ComponentBase::new(ORDER_LINK_ID)?, controller);
    button.set_component_value(Value::String(ORDER_URL.to_string()));
    button.set_component_enabled(true);

    Ok(create_rw_signal(button))
}
