//! Minimal HTML rendering for browsers that ask for `text/html`.

use std::fmt::{self, Write};

use axum::http::header::ACCEPT;
use axum::http::HeaderMap;
use screener_core::{Field, Stock};

/// True when the `Accept` header mentions `text/html` anywhere.
pub fn wants_html(headers: &HeaderMap) -> bool {
    headers
        .get_all(ACCEPT)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .any(|value| value.contains("text/html"))
}

/// Render `stocks` as a standalone table page, echoing `query` when present.
pub fn render_stocks(stocks: &[&Stock], query: Option<&str>) -> Result<String, fmt::Error> {
    let mut page = String::new();
    write_page(&mut page, stocks, query)?;
    Ok(page)
}

fn write_page(page: &mut String, stocks: &[&Stock], query: Option<&str>) -> fmt::Result {
    page.push_str(concat!(
        "<!DOCTYPE html>\n<html>\n<head>\n",
        "<meta charset=\"utf-8\">\n<title>Stocks</title>\n",
        "</head>\n<body>\n",
    ));

    if let Some(query) = query {
        writeln!(page, "<p>Query: <code>{}</code></p>", escape(query))?;
    }
    writeln!(page, "<p>{} stocks</p>", stocks.len())?;

    page.push_str("<table>\n<thead>\n<tr><th>Stock Name</th>");
    for field in Field::ALL {
        write!(page, "<th>{}</th>", escape(field.as_str()))?;
    }
    page.push_str("</tr>\n</thead>\n<tbody>\n");

    for stock in stocks {
        write!(page, "<tr><td>{}</td>", escape(stock.name()))?;
        for (_, value) in stock.metrics() {
            write!(page, "<td>{value}</td>")?;
        }
        page.push_str("</tr>\n");
    }

    page.push_str("</tbody>\n</table>\n</body>\n</html>\n");
    Ok(())
}

fn escape(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
