//! HTML rendering of the page layout
//!
//! Charts are drawn client-side by Plotly.js from the chart descriptions the
//! update endpoints return.

use std::fmt::Write;

use crate::layout::{Dropdown, PageLayout, Panel};

const PLOTLY_JS: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

const PAGE_STYLE: &str = "font-family: Arial, sans-serif; background-color: #f9f9f9; padding: 20px;";
const TITLE_STYLE: &str = "text-align: center; color: #444; margin-bottom: 20px;";
const ROW_STYLE: &str = "display: flex; justify-content: space-between;";
const PANEL_STYLE: &str = "width: 48%; display: inline-block; padding: 10px;";
const GRAPH_STYLE: &str = "box-shadow: 0 2px 4px rgba(0,0,0,0.1); border-radius: 5px;";

const CLIENT_SCRIPT: &str = r#"
function render(response) {
  for (const update of response.updates) {
    Plotly.react(update.output, update.figure.data, update.figure.layout);
  }
}
function checked(response) {
  if (!response.ok) {
    return response.json().then(body => { throw new Error(body.message); });
  }
  return response.json();
}
fetch('/api/initial').then(checked).then(render).catch(console.error);
document.querySelectorAll('select[data-source]').forEach(select => {
  select.addEventListener('change', () => {
    fetch('/api/update', {
      method: 'POST',
      headers: {'Content-Type': 'application/json'},
      body: JSON.stringify({source: select.id, value: select.value}),
    }).then(checked).then(render).catch(console.error);
  });
});
"#;

/// Render the full dashboard page
pub fn render(layout: &PageLayout) -> String {
    let mut html = String::new();
    let title = escape(&layout.title);

    let _ = write!(
        html,
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n\
         <script src=\"{PLOTLY_JS}\"></script>\n</head>\n<body style=\"{PAGE_STYLE}\">\n\
         <h1 style=\"{TITLE_STYLE}\">{title}</h1>\n"
    );

    for row in &layout.rows {
        let _ = writeln!(html, "<div style=\"{ROW_STYLE}\">");
        for panel in &row.panels {
            render_panel(&mut html, panel);
        }
        html.push_str("</div>\n");
    }

    let _ = write!(html, "<script>{CLIENT_SCRIPT}</script>\n</body>\n</html>\n");
    html
}

fn render_panel(html: &mut String, panel: &Panel) {
    let _ = writeln!(html, "<div style=\"{PANEL_STYLE}\">");
    if let Some(heading) = &panel.heading {
        let _ = writeln!(html, "<h2 style=\"margin-bottom: 10px;\">{}</h2>", escape(heading));
    }
    if let Some(dropdown) = &panel.dropdown {
        render_dropdown(html, dropdown);
    }
    let _ = writeln!(
        html,
        "<div id=\"{}\" style=\"{GRAPH_STYLE}\"></div>",
        panel.graph_id
    );
    html.push_str("</div>\n");
}

fn render_dropdown(html: &mut String, dropdown: &Dropdown) {
    let _ = writeln!(
        html,
        "<label for=\"{id}\" style=\"font-weight: bold;\">{label}</label>\n\
         <select id=\"{id}\" data-source=\"{id}\" style=\"display: block; width: 100%; margin-bottom: 10px;\">",
        id = dropdown.id,
        label = escape(&dropdown.label)
    );
    for option in &dropdown.options {
        let selected = if option.value == dropdown.default {
            " selected"
        } else {
            ""
        };
        let _ = writeln!(
            html,
            "<option value=\"{}\"{selected}>{}</option>",
            escape(&option.value),
            escape(&option.label)
        );
    }
    html.push_str("</select>\n");
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_has_every_control_and_placeholder() {
        let layout = PageLayout::loan_dashboard();
        let html = render(&layout);

        assert!(html.contains("<h1 style=\"text-align: center; color: #444; margin-bottom: 20px;\">Loan Data Dashboard</h1>"));
        for id in layout.graph_ids() {
            assert!(html.contains(&format!("<div id=\"{}\"", id)), "{}", id);
        }
        for dropdown in layout.dropdowns() {
            assert!(html.contains(&format!("<select id=\"{}\"", dropdown.id)));
        }
        assert!(html.contains("<option value=\"age\" selected>age</option>"));
        assert!(html.contains("<option value=\"age_credit_length\">Age vs Credit Length</option>"));
        assert!(html.contains("Correlation Matrix:"));
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("a < b & \"c\""), "a &lt; b &amp; &quot;c&quot;");
    }
}
