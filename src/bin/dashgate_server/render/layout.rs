use super::*;
use dashgate::auth_store::AuthState;

const STYLE: &str = "body{font-family:system-ui,sans-serif;margin:0;color:#1f2933;background:#f5f7fa}\
header{display:flex;align-items:center;gap:1.5rem;padding:.75rem 1.5rem;background:#1f2933;color:#fff}\
header a{color:#cbd2d9;text-decoration:none}header a.active{color:#fff;font-weight:600}\
main{padding:1.5rem;max-width:72rem;margin:0 auto}\
table{width:100%;border-collapse:collapse;background:#fff}th,td{padding:.5rem;border-bottom:1px solid #e4e7eb;text-align:left}\
.cards{display:grid;grid-template-columns:repeat(auto-fit,minmax(12rem,1fr));gap:1rem}\
.card{background:#fff;padding:1rem;border-radius:.5rem}.card .value{font-size:1.75rem;font-weight:600}\
.alert{background:#fde8e8;color:#9b1c1c;padding:.75rem;border-radius:.375rem}\
.field-error{color:#9b1c1c;font-size:.875rem}.low-stock{color:#9b1c1c}";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum NavItem {
    Dashboard,
    Users,
    Products,
}

impl NavItem {
    fn entries() -> [(NavItem, &'static str, &'static str); 3] {
        [
            (NavItem::Dashboard, "/dashboard", "Dashboard"),
            (NavItem::Users, "/users", "Users"),
            (NavItem::Products, "/products", "Products"),
        ]
    }
}

/// Bare HTML document; used directly by the login and error pages.
pub(crate) fn document(title: &str, body: &str) -> String {
    format!(
        "<!doctype html>\n<html lang=\"en\"><head><meta charset=\"utf-8\">\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
<title>{} · dashgate</title><style>{}</style></head><body>{}</body></html>\n",
        escape(title),
        STYLE,
        body
    )
}

/// Signed-in page: navigation, the viewer's badge and the hydration payload.
pub(crate) fn page(
    title: &str,
    active: NavItem,
    viewer: Option<&User>,
    body: &str,
) -> Result<String, serde_json::Error> {
    let state = auth_state_script(&AuthState::for_identity(viewer))?;

    let mut nav = String::new();
    for (item, path, label) in NavItem::entries() {
        let class = if item == active { " class=\"active\"" } else { "" };
        nav.push_str(&format!("<a href=\"{}\"{}>{}</a>", path, class, label));
    }

    let badge = match viewer {
        Some(user) => format!(
            "<span class=\"viewer\" title=\"{}\"><strong>{}</strong> {} ({})</span>\
<form method=\"post\" action=\"/logout\"><button type=\"submit\">Sign out</button></form>",
            escape(&user.email),
            escape(&user.initials()),
            escape(&user.name),
            escape(&user.role)
        ),
        None => String::new(),
    };

    let body = format!(
        "<header><strong>dashgate</strong><nav>{}</nav><div style=\"margin-left:auto;display:flex;gap:1rem\">{}</div></header>\
<main><h1>{}</h1>{}</main>{}",
        nav,
        badge,
        escape(title),
        body,
        state
    );
    Ok(document(title, &body))
}

/// The token-free store projection as a JSON island for client hydration.
pub(crate) fn auth_state_script(state: &AuthState) -> Result<String, serde_json::Error> {
    let json = serde_json::to_string(&state.projection())?;
    Ok(format!(
        "<script type=\"application/json\" id=\"auth-state\">{}</script>",
        json.replace("</", "<\\/")
    ))
}
