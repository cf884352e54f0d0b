use super::*;

#[derive(Clone, Debug)]
pub(crate) struct StatCard {
    pub(crate) label: &'static str,
    pub(crate) value: String,
    pub(crate) hint: Option<String>,
}

pub(crate) fn stat_cards(cards: &[StatCard]) -> String {
    let mut out = String::from("<section class=\"cards\">");
    for card in cards {
        out.push_str(&format!(
            "<div class=\"card\"><div class=\"label\">{}</div><div class=\"value\">{}</div>{}</div>",
            escape(card.label),
            escape(&card.value),
            card.hint
                .as_deref()
                .map(|h| format!("<div class=\"hint\">{}</div>", escape(h)))
                .unwrap_or_default()
        ));
    }
    out.push_str("</section>");
    out
}
