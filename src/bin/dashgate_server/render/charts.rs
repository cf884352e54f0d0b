use super::*;

const BAR_HEIGHT: u64 = 22;
const BAR_GAP: u64 = 8;
const LABEL_WIDTH: u64 = 140;
const PLOT_WIDTH: u64 = 360;

/// Horizontal bar chart as inline SVG. Bars scale to the largest value.
pub(crate) fn bar_chart(title: &str, series: &[(String, u64)]) -> String {
    if series.is_empty() {
        return format!(
            "<figure class=\"chart\"><figcaption>{}</figcaption><p class=\"empty\">No data.</p></figure>",
            escape(title)
        );
    }

    let max = series.iter().map(|(_, v)| *v).max().unwrap_or(0).max(1);
    let height = series.len() as u64 * (BAR_HEIGHT + BAR_GAP);
    let width = LABEL_WIDTH + PLOT_WIDTH + 60;

    let mut out = format!(
        "<figure class=\"chart\"><figcaption>{}</figcaption>\
<svg role=\"img\" aria-label=\"{}\" viewBox=\"0 0 {} {}\" width=\"{}\" height=\"{}\">",
        escape(title),
        escape(title),
        width,
        height,
        width,
        height
    );
    for (i, (label, value)) in series.iter().enumerate() {
        let y = i as u64 * (BAR_HEIGHT + BAR_GAP);
        let bar = (value * PLOT_WIDTH / max).max(1);
        out.push_str(&format!(
            "<g><text x=\"0\" y=\"{ty}\" font-size=\"12\">{label}</text>\
<rect x=\"{x}\" y=\"{y}\" width=\"{bar}\" height=\"{h}\" fill=\"#3e7bfa\"></rect>\
<text x=\"{vx}\" y=\"{ty}\" font-size=\"12\">{value}</text></g>",
            ty = y + BAR_HEIGHT - 6,
            label = escape(label),
            x = LABEL_WIDTH,
            y = y,
            bar = bar,
            h = BAR_HEIGHT,
            vx = LABEL_WIDTH + bar + 6,
            value = format_number(*value),
        ));
    }
    out.push_str("</svg></figure>");
    out
}

#[cfg(test)]
#[path = "../../../tests/bin/dashgate_server/render/charts_tests.rs"]
mod tests;
