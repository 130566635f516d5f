//! Text rendering of the swap form and the price list.
use swap_common::{FeedStatus, FormPhase, FormState, PriceSet, SwapForm};

/// Formats a converted amount the way the form displays it.
pub fn format_amount(amount: f64) -> String {
    format!("{:.6}", amount)
}

/// Renders the form fields, the result, and any error.
pub fn render_form(form: &SwapForm) -> String {
    let FormState {
        from_symbol,
        to_symbol,
        from_amount,
        to_amount,
        error_message,
    } = form.state();

    let mut out = format!(
        "From: {:<10} Amount: {}\nTo:   {:<10} Amount: {}",
        from_symbol.as_deref().unwrap_or("-"),
        from_amount.map(|a| a.to_string()).unwrap_or_default(),
        to_symbol.as_deref().unwrap_or("-"),
        format_amount(*to_amount),
    );
    if form.phase() == FormPhase::Submitted {
        out.push_str("  (submitted)");
    }
    if let Some(message) = error_message {
        out.push_str(&format!("\n! {}", message));
    }
    out
}

/// Renders the known currencies in feed order.
pub fn render_prices(prices: &PriceSet) -> String {
    if prices.is_empty() {
        return "No currency found.".to_string();
    }
    prices
        .iter()
        .map(|(symbol, price)| format!("{:<10} {}", symbol, price))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders the feed status line.
pub fn render_status(status: &FeedStatus) -> String {
    match status {
        FeedStatus::Idle => "Prices not loaded".to_string(),
        FeedStatus::Loading => "Loading prices...".to_string(),
        FeedStatus::Ready => "Prices loaded".to_string(),
        FeedStatus::Failed(message) => format!("Error: {}", message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts_have_six_decimals() {
        assert_eq!(format_amount(50.0), "50.000000");
        assert_eq!(format_amount(0.1234567), "0.123457");
    }

    #[test]
    fn empty_form_renders_placeholders() {
        let rendered = render_form(&SwapForm::new());
        assert_eq!(
            rendered,
            "From: -          Amount: \nTo:   -          Amount: 0.000000"
        );
    }

    #[test]
    fn error_is_shown_below_fields() {
        let mut form = SwapForm::new();
        form.submit(&PriceSet::default());
        assert!(render_form(&form).ends_with("\n! Please select currencies and fill in all fields"));
    }

    #[test]
    fn empty_price_list() {
        assert_eq!(render_prices(&PriceSet::default()), "No currency found.");
    }

    #[test]
    fn failed_status_shows_message() {
        let status = FeedStatus::Failed("Failed to fetch prices".to_string());
        assert_eq!(render_status(&status), "Error: Failed to fetch prices");
    }
}
