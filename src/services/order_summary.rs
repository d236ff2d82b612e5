//! Order summary text for the WhatsApp hand-off

use crate::services::cart::Cart;

const WHATSAPP_BASE: &str = "https://wa.me";

/// Render the cart as a numbered order message.
///
/// Returns `None` for an empty cart; no message is produced for zero items.
pub fn render_order_summary(cart: &Cart) -> Option<String> {
    if cart.is_empty() {
        return None;
    }

    let blocks: Vec<String> = cart
        .items()
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let code = match item.design_code.as_deref() {
                Some(code) if !code.is_empty() => format!(" [*{}*]", code),
                _ => String::new(),
            };
            let sizes: Vec<String> = item
                .sizes
                .iter()
                .map(|sz| {
                    format!(
                        "   ▸ {} × {} = ₹{}",
                        sz.size,
                        sz.qty,
                        format_inr(sz.line_total())
                    )
                })
                .collect();
            format!(
                "*{}. {}*{} ({})\n{}\n   _Subtotal: ₹{}_",
                i + 1,
                item.product_name,
                code,
                item.color_name,
                sizes.join("\n"),
                format_inr(item.subtotal())
            )
        })
        .collect();

    Some(format!(
        "*Hello! I'm interested in ordering:*\n\n{}\n\n*🛒 Grand Total: ₹{}*\n\nPlease confirm availability. Thank you!",
        blocks.join("\n\n"),
        format_inr(cart.grand_total())
    ))
}

/// Deep link opening a WhatsApp chat with the summary pre-filled
pub fn whatsapp_link(number: &str, cart: &Cart) -> Option<String> {
    let message = render_order_summary(cart)?;
    Some(format!(
        "{}/{}?text={}",
        WHATSAPP_BASE,
        number,
        urlencoding::encode(&message)
    ))
}

/// Format an amount with Indian digit grouping (12,34,567.5).
/// At most two decimals are shown and trailing zeros are dropped.
pub fn format_inr(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let fraction = cents % 100;

    let grouped = if whole.len() <= 3 {
        whole
    } else {
        let (head, tail) = whole.split_at(whole.len() - 3);
        let mut groups: Vec<&str> = Vec::new();
        let mut end = head.len();
        while end > 0 {
            let start = end.saturating_sub(2);
            groups.push(&head[start..end]);
            end = start;
        }
        groups.reverse();
        format!("{},{}", groups.join(","), tail)
    };

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    match fraction {
        0 => format!("{}{}", sign, grouped),
        f if f % 10 == 0 => format!("{}{}.{}", sign, grouped, f / 10),
        f => format!("{}{}.{:02}", sign, grouped, f),
    }
}
