//! ViewModel калькулятора строки продажи (товар × количество).
//!
//! Всё состояние живёт здесь; DOM только отображает его. Каждое действие
//! пользователя превращается в [`CalculatorEvent`], а [`CalculatorState::update`]
//! возвращает список [`CalculatorCommand`], которые выполняет `binding.rs`.

use super::model::QuoteFetchError;
use crate::shared::alerts::Severity;
use crate::shared::number_parse::parse_int_prefix;
use contracts::domain::a001_product::aggregate::ProductQuote;
use contracts::shared::money::Money;
use contracts::shared::stock::StockThresholds;

pub type Generation = u64;

pub const PRODUCT_ERROR_MESSAGE: &str = "Could not load product information";
pub const CONNECTION_ERROR_MESSAGE: &str = "Connection error";

/// Which of the bound elements are actually present on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalculatorLayout {
    pub quantity_input: bool,
    pub price_display: bool,
    pub stock_display: bool,
    pub total_display: bool,
}

impl CalculatorLayout {
    pub fn complete() -> Self {
        Self {
            quantity_input: true,
            price_display: true,
            stock_display: true,
            total_display: true,
        }
    }

    fn can_compute_total(&self) -> bool {
        self.quantity_input && self.price_display && self.total_display
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorSettings {
    pub currency_symbol: String,
    pub stock: StockThresholds,
}

impl Default for CalculatorSettings {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            stock: StockThresholds::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CalculatorEvent {
    /// `change` on the product selector; empty string means "nothing selected".
    ProductSelected(String),
    QuoteLoaded {
        generation: Generation,
        result: Result<ProductQuote, QuoteFetchError>,
    },
    /// `input` on the quantity field.
    QuantityInput(String),
}

/// Rendered quote, ready to be written into the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteView {
    pub price_text: String,
    pub stock_text: String,
    pub stock_class: &'static str,
    pub max_quantity: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CalculatorCommand {
    FetchQuote {
        product_id: String,
        generation: Generation,
    },
    CancelFetch,
    ShowQuote(QuoteView),
    ShowTotal(String),
    ClearDisplays {
        price_text: String,
        stock_text: String,
        total_text: String,
    },
    MarkQuantityInvalid(bool),
    RaiseAlert {
        message: String,
        severity: Severity,
    },
    LogError(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorState {
    layout: CalculatorLayout,
    settings: CalculatorSettings,
    /// Incremented on every selection change; older responses are dropped.
    generation: Generation,
    pending: bool,
    product_id: Option<String>,
    quote: Option<ProductQuote>,
    price: Money,
    quantity: i64,
    total: Money,
    quantity_invalid: bool,
}

impl CalculatorState {
    pub fn new(layout: CalculatorLayout, settings: CalculatorSettings) -> Self {
        Self {
            layout,
            settings,
            generation: 0,
            pending: false,
            product_id: None,
            quote: None,
            price: Money::ZERO,
            quantity: 0,
            total: Money::ZERO,
            quantity_invalid: false,
        }
    }

    /// Seed the quantity from a pre-filled input without emitting commands.
    pub fn with_quantity_text(mut self, text: &str) -> Self {
        self.quantity = parse_quantity(text);
        self
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn product_id(&self) -> Option<&str> {
        self.product_id.as_deref()
    }

    pub fn quote(&self) -> Option<&ProductQuote> {
        self.quote.as_ref()
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn total(&self) -> Money {
        self.total
    }

    pub fn is_quantity_invalid(&self) -> bool {
        self.quantity_invalid
    }

    pub fn update(&mut self, event: CalculatorEvent) -> Vec<CalculatorCommand> {
        match event {
            CalculatorEvent::ProductSelected(product_id) => self.select_product(product_id),
            CalculatorEvent::QuoteLoaded { generation, result } => {
                self.quote_loaded(generation, result)
            }
            CalculatorEvent::QuantityInput(text) => {
                self.quantity = parse_quantity(&text);
                self.recompute()
            }
        }
    }

    fn select_product(&mut self, product_id: String) -> Vec<CalculatorCommand> {
        let mut commands = Vec::new();
        self.generation += 1;
        if self.pending {
            commands.push(CalculatorCommand::CancelFetch);
        }

        if product_id.trim().is_empty() {
            self.pending = false;
            self.product_id = None;
            self.quote = None;
            self.price = Money::ZERO;
            self.total = Money::ZERO;
            commands.push(CalculatorCommand::ClearDisplays {
                price_text: self.format_money(Money::ZERO),
                stock_text: format_stock(0),
                total_text: self.format_total(Money::ZERO),
            });
            return commands;
        }

        self.pending = true;
        self.product_id = Some(product_id.clone());
        commands.push(CalculatorCommand::FetchQuote {
            product_id,
            generation: self.generation,
        });
        commands
    }

    fn quote_loaded(
        &mut self,
        generation: Generation,
        result: Result<ProductQuote, QuoteFetchError>,
    ) -> Vec<CalculatorCommand> {
        if generation != self.generation || !self.pending {
            log::debug!(
                "dropping stale product response (generation {}, current {})",
                generation,
                self.generation
            );
            return Vec::new();
        }
        self.pending = false;

        match result {
            Ok(quote) => {
                self.price = Money::from_f64(quote.price);
                let view = QuoteView {
                    price_text: self.format_money(self.price),
                    stock_text: format_stock(quote.stock),
                    stock_class: self.settings.stock.quote_badge_class(quote.stock),
                    max_quantity: quote.stock.to_string(),
                };
                self.quote = Some(quote);
                let mut commands = vec![CalculatorCommand::ShowQuote(view)];
                commands.extend(self.recompute());
                commands
            }
            Err(QuoteFetchError::Application(reason)) => {
                log::warn!("product lookup rejected: {}", reason);
                vec![CalculatorCommand::RaiseAlert {
                    message: PRODUCT_ERROR_MESSAGE.to_string(),
                    severity: Severity::Error,
                }]
            }
            Err(QuoteFetchError::Transport(detail)) => vec![
                CalculatorCommand::LogError(detail),
                CalculatorCommand::RaiseAlert {
                    message: CONNECTION_ERROR_MESSAGE.to_string(),
                    severity: Severity::Error,
                },
            ],
            Err(QuoteFetchError::Aborted) => Vec::new(),
        }
    }

    fn recompute(&mut self) -> Vec<CalculatorCommand> {
        if !self.layout.can_compute_total() {
            return Vec::new();
        }

        self.total = self.price.times(self.quantity);
        let mut commands = vec![CalculatorCommand::ShowTotal(self.format_total(self.total))];

        let stock = self
            .quote
            .as_ref()
            .filter(|_| self.layout.stock_display)
            .map(|q| q.stock);

        match stock {
            Some(stock) if self.quantity > stock => {
                self.quantity_invalid = true;
                commands.push(CalculatorCommand::MarkQuantityInvalid(true));
                commands.push(CalculatorCommand::RaiseAlert {
                    message: format!("Quantity exceeds available stock ({})", stock),
                    severity: Severity::Warning,
                });
            }
            Some(_) => {
                self.quantity_invalid = false;
                commands.push(CalculatorCommand::MarkQuantityInvalid(false));
            }
            // No stock to check against.
            None if self.quantity_invalid => {
                self.quantity_invalid = false;
                commands.push(CalculatorCommand::MarkQuantityInvalid(false));
            }
            None => {}
        }
        commands
    }

    fn format_money(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.settings.currency_symbol)
    }

    fn format_total(&self, amount: Money) -> String {
        format!("Total: {}", self.format_money(amount))
    }
}

/// Non-numeric input counts as zero.
pub fn parse_quantity(text: &str) -> i64 {
    parse_int_prefix(text).unwrap_or(0)
}

pub fn format_stock(stock: i64) -> String {
    format!("Stock: {}", stock)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> CalculatorState {
        CalculatorState::new(CalculatorLayout::complete(), CalculatorSettings::default())
    }

    fn quote(price: f64, stock: i64) -> ProductQuote {
        ProductQuote {
            price,
            stock,
            name: None,
        }
    }

    fn fetch_generation(commands: &[CalculatorCommand]) -> Generation {
        commands
            .iter()
            .find_map(|c| match c {
                CalculatorCommand::FetchQuote { generation, .. } => Some(*generation),
                _ => None,
            })
            .expect("no FetchQuote command")
    }

    fn alerts(commands: &[CalculatorCommand]) -> Vec<(String, Severity)> {
        commands
            .iter()
            .filter_map(|c| match c {
                CalculatorCommand::RaiseAlert { message, severity } => {
                    Some((message.clone(), *severity))
                }
                _ => None,
            })
            .collect()
    }

    fn loaded(state: &mut CalculatorState, product: &str, q: ProductQuote) -> Vec<CalculatorCommand> {
        let generation = fetch_generation(&state.update(CalculatorEvent::ProductSelected(
            product.to_string(),
        )));
        state.update(CalculatorEvent::QuoteLoaded {
            generation,
            result: Ok(q),
        })
    }

    #[test]
    fn test_selecting_product_fetches_quote() {
        let mut s = state();
        let commands = s.update(CalculatorEvent::ProductSelected("7".to_string()));
        assert_eq!(
            commands,
            vec![CalculatorCommand::FetchQuote {
                product_id: "7".to_string(),
                generation: 1,
            }]
        );
        assert!(s.is_pending());
        assert_eq!(s.product_id(), Some("7"));
    }

    #[test]
    fn test_quote_renders_price_stock_and_total() {
        let mut s = state();
        let commands = loaded(&mut s, "7", quote(19.99, 3));
        assert_eq!(
            commands[0],
            CalculatorCommand::ShowQuote(QuoteView {
                price_text: "$19.99".to_string(),
                stock_text: "Stock: 3".to_string(),
                stock_class: "badge badge-warning",
                max_quantity: "3".to_string(),
            })
        );
        assert_eq!(commands[1], CalculatorCommand::ShowTotal("Total: $0.00".to_string()));
        assert_eq!(commands[2], CalculatorCommand::MarkQuantityInvalid(false));
    }

    #[test]
    fn test_quantity_within_stock() {
        let mut s = state();
        loaded(&mut s, "7", quote(19.99, 3));
        let commands = s.update(CalculatorEvent::QuantityInput("2".to_string()));
        assert_eq!(
            commands,
            vec![
                CalculatorCommand::ShowTotal("Total: $39.98".to_string()),
                CalculatorCommand::MarkQuantityInvalid(false),
            ]
        );
        assert_eq!(s.total(), Money::from_cents(3998));
    }

    #[test]
    fn test_quantity_over_stock_warns() {
        let mut s = state();
        loaded(&mut s, "7", quote(19.99, 3));
        let commands = s.update(CalculatorEvent::QuantityInput("5".to_string()));
        assert!(commands.contains(&CalculatorCommand::MarkQuantityInvalid(true)));
        let raised = alerts(&commands);
        assert_eq!(raised.len(), 1);
        assert_eq!(raised[0].1, Severity::Warning);
        assert!(raised[0].0.contains('3'));
        assert!(s.is_quantity_invalid());
    }

    #[test]
    fn test_non_numeric_quantity_is_zero() {
        let mut s = state();
        loaded(&mut s, "7", quote(19.99, 3));
        let commands = s.update(CalculatorEvent::QuantityInput("abc".to_string()));
        assert_eq!(commands[0], CalculatorCommand::ShowTotal("Total: $0.00".to_string()));
        assert_eq!(s.quantity(), 0);
    }

    #[test]
    fn test_negative_quantity_renders_sign_after_symbol() {
        let mut s = state();
        loaded(&mut s, "7", quote(19.99, 3));
        let commands = s.update(CalculatorEvent::QuantityInput("-3".to_string()));
        assert_eq!(
            commands,
            vec![
                CalculatorCommand::ShowTotal("Total: $-59.97".to_string()),
                CalculatorCommand::MarkQuantityInvalid(false),
            ]
        );
        assert_eq!(s.quantity(), -3);
    }

    #[test]
    fn test_high_stock_uses_success_badge() {
        let mut s = state();
        let commands = loaded(&mut s, "7", quote(2.0, 40));
        match &commands[0] {
            CalculatorCommand::ShowQuote(view) => assert_eq!(view.stock_class, "badge badge-success"),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_empty_selection_clears_without_fetch() {
        let mut s = state();
        loaded(&mut s, "7", quote(19.99, 3));
        let commands = s.update(CalculatorEvent::ProductSelected(String::new()));
        assert_eq!(
            commands,
            vec![CalculatorCommand::ClearDisplays {
                price_text: "$0.00".to_string(),
                stock_text: "Stock: 0".to_string(),
                total_text: "Total: $0.00".to_string(),
            }]
        );
        assert!(s.quote().is_none());
        assert!(!s.is_pending());
    }

    #[test]
    fn test_clearing_cancels_in_flight_fetch() {
        let mut s = state();
        s.update(CalculatorEvent::ProductSelected("7".to_string()));
        let commands = s.update(CalculatorEvent::ProductSelected(String::new()));
        assert_eq!(commands[0], CalculatorCommand::CancelFetch);
        assert!(!commands
            .iter()
            .any(|c| matches!(c, CalculatorCommand::FetchQuote { .. })));
    }

    #[test]
    fn test_out_of_order_responses_keep_latest_selection() {
        let mut s = state();
        let gen_a = fetch_generation(&s.update(CalculatorEvent::ProductSelected("A".to_string())));
        let commands_b = s.update(CalculatorEvent::ProductSelected("B".to_string()));
        assert_eq!(commands_b[0], CalculatorCommand::CancelFetch);
        let gen_b = fetch_generation(&commands_b);

        let shown = s.update(CalculatorEvent::QuoteLoaded {
            generation: gen_b,
            result: Ok(quote(5.0, 50)),
        });
        assert!(!shown.is_empty());

        let stale = s.update(CalculatorEvent::QuoteLoaded {
            generation: gen_a,
            result: Ok(quote(99.0, 1)),
        });
        assert!(stale.is_empty());
        assert_eq!(s.quote(), Some(&quote(5.0, 50)));
        assert_eq!(s.product_id(), Some("B"));
    }

    #[test]
    fn test_stale_error_is_ignored() {
        let mut s = state();
        let gen_a = fetch_generation(&s.update(CalculatorEvent::ProductSelected("A".to_string())));
        s.update(CalculatorEvent::ProductSelected("B".to_string()));
        let commands = s.update(CalculatorEvent::QuoteLoaded {
            generation: gen_a,
            result: Err(QuoteFetchError::Transport("timeout".to_string())),
        });
        assert!(commands.is_empty());
        assert!(s.is_pending());
    }

    #[test]
    fn test_application_error_keeps_previous_quote() {
        let mut s = state();
        loaded(&mut s, "7", quote(19.99, 3));
        let generation =
            fetch_generation(&s.update(CalculatorEvent::ProductSelected("8".to_string())));
        let commands = s.update(CalculatorEvent::QuoteLoaded {
            generation,
            result: Err(QuoteFetchError::Application("Producto no encontrado".to_string())),
        });
        assert_eq!(
            alerts(&commands),
            vec![(PRODUCT_ERROR_MESSAGE.to_string(), Severity::Error)]
        );
        assert_eq!(commands.len(), 1);
        assert_eq!(s.quote(), Some(&quote(19.99, 3)));
    }

    #[test]
    fn test_transport_error_logs_and_alerts() {
        let mut s = state();
        let generation =
            fetch_generation(&s.update(CalculatorEvent::ProductSelected("7".to_string())));
        let commands = s.update(CalculatorEvent::QuoteLoaded {
            generation,
            result: Err(QuoteFetchError::Transport("HTTP 500".to_string())),
        });
        assert_eq!(commands[0], CalculatorCommand::LogError("HTTP 500".to_string()));
        assert_eq!(
            alerts(&commands),
            vec![(CONNECTION_ERROR_MESSAGE.to_string(), Severity::Error)]
        );
    }

    #[test]
    fn test_missing_displays_do_nothing() {
        let layout = CalculatorLayout {
            total_display: false,
            ..CalculatorLayout::complete()
        };
        let mut s = CalculatorState::new(layout, CalculatorSettings::default());
        let generation =
            fetch_generation(&s.update(CalculatorEvent::ProductSelected("7".to_string())));
        let commands = s.update(CalculatorEvent::QuoteLoaded {
            generation,
            result: Ok(quote(19.99, 3)),
        });
        assert_eq!(commands.len(), 1);
        assert!(s
            .update(CalculatorEvent::QuantityInput("5".to_string()))
            .is_empty());
    }

    #[test]
    fn test_without_stock_display_no_warning() {
        let layout = CalculatorLayout {
            stock_display: false,
            ..CalculatorLayout::complete()
        };
        let mut s = CalculatorState::new(layout, CalculatorSettings::default());
        loaded(&mut s, "7", quote(1.0, 3));
        let commands = s.update(CalculatorEvent::QuantityInput("5".to_string()));
        assert_eq!(commands, vec![CalculatorCommand::ShowTotal("Total: $5.00".to_string())]);
    }

    #[test]
    fn test_prefilled_quantity_is_used_for_first_total() {
        let mut s = state().with_quantity_text("2");
        let commands = loaded(&mut s, "7", quote(19.99, 3));
        assert_eq!(commands[1], CalculatorCommand::ShowTotal("Total: $39.98".to_string()));
    }
}
