//! Связывает ViewModel калькулятора с серверной разметкой формы продажи.

use super::model::fetch_quote;
use super::view_model::{
    CalculatorCommand, CalculatorEvent, CalculatorLayout, CalculatorSettings, CalculatorState,
    Generation, QuoteView,
};
use crate::shared::alerts::AlertService;
use crate::shared::api_utils::product_url;
use crate::shared::config::PageConfig;
use crate::shared::dom_utils::{element_value, listen, set_text, toggle_class};
use crate::shared::form_validation::INVALID_CLASS;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{AbortController, Document, Element, HtmlInputElement};

pub struct CalculatorBinding {
    state: RefCell<CalculatorState>,
    product_select: Element,
    quantity_input: HtmlInputElement,
    price_display: Option<Element>,
    stock_display: Option<Element>,
    total_display: Option<Element>,
    in_flight: RefCell<Option<AbortController>>,
    alerts: AlertService,
    config: PageConfig,
}

/// Attach the calculator when both the product selector and the quantity
/// input are on the page. Returns `None` otherwise.
pub fn bind_calculator(
    document: &Document,
    config: &PageConfig,
    alerts: AlertService,
) -> Option<Rc<CalculatorBinding>> {
    let ids = &config.ids;
    let product_select = document.get_element_by_id(&ids.product_select)?;
    let quantity_input = document
        .get_element_by_id(&ids.quantity_input)?
        .dyn_into::<HtmlInputElement>()
        .ok()?;
    let price_display = document.get_element_by_id(&ids.price_display);
    let stock_display = document.get_element_by_id(&ids.stock_display);
    let total_display = document.get_element_by_id(&ids.total_display);

    let layout = CalculatorLayout {
        quantity_input: true,
        price_display: price_display.is_some(),
        stock_display: stock_display.is_some(),
        total_display: total_display.is_some(),
    };
    let settings = CalculatorSettings {
        currency_symbol: config.currency_symbol.clone(),
        stock: config.stock,
    };
    let state = CalculatorState::new(layout, settings).with_quantity_text(&quantity_input.value());

    let binding = Rc::new(CalculatorBinding {
        state: RefCell::new(state),
        product_select,
        quantity_input,
        price_display,
        stock_display,
        total_display,
        in_flight: RefCell::new(None),
        alerts,
        config: config.clone(),
    });

    let on_change = Rc::clone(&binding);
    listen(&binding.product_select, "change", move |_| {
        let product_id = element_value(&on_change.product_select);
        on_change.dispatch(CalculatorEvent::ProductSelected(product_id));
    });

    let on_input = Rc::clone(&binding);
    listen(&binding.quantity_input, "input", move |_| {
        let text = on_input.quantity_input.value();
        on_input.dispatch(CalculatorEvent::QuantityInput(text));
    });

    log::debug!("line-item calculator bound ({:?})", layout);
    Some(binding)
}

impl CalculatorBinding {
    pub fn dispatch(self: &Rc<Self>, event: CalculatorEvent) {
        // Borrow ends before any command runs; commands may dispatch again.
        let commands = self.state.borrow_mut().update(event);
        for command in commands {
            self.execute(command);
        }
    }

    fn execute(self: &Rc<Self>, command: CalculatorCommand) {
        match command {
            CalculatorCommand::FetchQuote {
                product_id,
                generation,
            } => self.start_fetch(product_id, generation),
            CalculatorCommand::CancelFetch => {
                if let Some(controller) = self.in_flight.borrow_mut().take() {
                    controller.abort();
                }
            }
            CalculatorCommand::ShowQuote(view) => self.show_quote(&view),
            CalculatorCommand::ShowTotal(text) => {
                if let Some(el) = &self.total_display {
                    set_text(el, &text);
                }
            }
            CalculatorCommand::ClearDisplays {
                price_text,
                stock_text,
                total_text,
            } => {
                if let Some(el) = &self.price_display {
                    set_text(el, &price_text);
                }
                if let Some(el) = &self.stock_display {
                    set_text(el, &stock_text);
                }
                if let Some(el) = &self.total_display {
                    set_text(el, &total_text);
                }
            }
            CalculatorCommand::MarkQuantityInvalid(on) => {
                toggle_class(&self.quantity_input, INVALID_CLASS, on);
            }
            CalculatorCommand::RaiseAlert { message, severity } => {
                self.alerts.raise(message, severity);
            }
            CalculatorCommand::LogError(detail) => {
                log::error!("Failed to load product info: {}", detail);
            }
        }
    }

    fn show_quote(&self, view: &QuoteView) {
        if let Some(el) = &self.price_display {
            set_text(el, &view.price_text);
        }
        if let Some(el) = &self.stock_display {
            set_text(el, &view.stock_text);
            el.set_class_name(view.stock_class);
        }
        self.quantity_input.set_max(&view.max_quantity);
    }

    fn start_fetch(self: &Rc<Self>, product_id: String, generation: Generation) {
        let controller = AbortController::new().ok();
        let signal = controller.as_ref().map(|c| c.signal());
        *self.in_flight.borrow_mut() = controller;

        let url = product_url(&self.config, &product_id);
        let this = Rc::clone(self);
        spawn_local(async move {
            let result = fetch_quote(&url, signal.as_ref()).await;
            if this.state.borrow().generation() == generation {
                this.in_flight.borrow_mut().take();
            }
            this.dispatch(CalculatorEvent::QuoteLoaded { generation, result });
        });
    }
}
