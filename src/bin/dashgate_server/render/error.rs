use super::*;

/// Full-page fallback used by the error boundary.
pub(crate) fn error_page(message: &str, retry: &str) -> String {
    let body = format!(
        "<main><h1>{}</h1><p>The page could not be displayed.</p>\
<p><a class=\"retry\" href=\"{}\">Try again</a></p></main>",
        escape(message),
        escape(retry)
    );
    document(message, &body)
}

/// Data-fetch failure shown in place of a table or chart.
pub(crate) fn inline_error(what: &str, message: &str, retry: &str) -> String {
    format!(
        "<div class=\"alert\" role=\"alert\">Could not load {}: {} \
<a class=\"retry\" href=\"{}\">Retry</a></div>",
        escape(what),
        escape(message),
        escape(retry)
    )
}
