use super::handlers::MapPageQuery;
use crate::domain::models::GeneratedMap;

use treasure_core::{MapRequest, draw_grid, draw_list};

const STYLE: &str = r#"
body { font-family: sans-serif; margin: 2em; background: #fbf6ea; }
form { display: flex; flex-wrap: wrap; gap: 1em; align-items: end; margin-bottom: 1.5em; }
label { display: flex; flex-direction: column; font-size: 0.9em; }
input { width: 6em; }
.grid-cell:hover rect { fill: #ffe08a; }
.error { color: #b00020; }
pre { background: #fff; padding: 1em; border: 1px solid #ddd; }
"#;

/// Values echoed back into the form inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(super) struct FormValues {
    rows: String,
    cols: String,
    chests: String,
    hints: String,
    search_again: String,
    novelty: String,
}

impl FormValues {
    pub(super) fn from_request(request: &MapRequest) -> Self {
        FormValues {
            rows: request.rows.to_string(),
            cols: request.cols.to_string(),
            chests: request.chests.to_string(),
            hints: request.hints.to_string(),
            search_again: request.search_again.to_string(),
            novelty: request
                .novelty
                .map(|novelty| novelty.to_string())
                .unwrap_or_default(),
        }
    }

    pub(super) fn from_query(query: &MapPageQuery) -> Self {
        let fields = query.raw_fields();

        FormValues {
            rows: fields[0].to_string(),
            cols: fields[1].to_string(),
            chests: fields[2].to_string(),
            hints: fields[3].to_string(),
            search_again: fields[4].to_string(),
            novelty: fields[5].to_string(),
        }
    }

    fn inputs(&self) -> [(&'static str, &'static str, &str); 6] {
        [
            ("rows", "Rows", self.rows.as_str()),
            ("cols", "Columns", self.cols.as_str()),
            ("chests", "Chests", self.chests.as_str()),
            ("hints", "Hints", self.hints.as_str()),
            ("search_again", "Search again", self.search_again.as_str()),
            ("novelty", "Novelty fillers", self.novelty.as_str()),
        ]
    }
}

/// The whole page: the form, then either the map or the error message.
pub(super) fn render(form: &FormValues, outcome: Result<&GeneratedMap, &str>) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<title>Treasure map</title>\n");
    html.push_str(&format!("<style>{}</style>\n</head>\n<body>\n", STYLE));
    html.push_str("<h1>Treasure map</h1>\n<form method=\"get\" action=\"/\">\n");

    for (name, label, value) in form.inputs() {
        html.push_str(&format!(
            "<label>{} <input type=\"number\" name=\"{}\" value=\"{}\"></label>\n",
            label,
            name,
            escape(value)
        ));
    }
    html.push_str("<button type=\"submit\">Generate</button>\n</form>\n");

    match outcome {
        Ok(generated) => {
            let grid = generated.grid();
            html.push_str(&format!("<div id=\"grid\">{}</div>\n", draw_grid(&grid)));

            let shortfall = generated.map().shortfall();
            if !shortfall.is_empty() {
                html.push_str(&format!(
                    "<p class=\"notice\">Not enough free fields, skipped {}.</p>\n",
                    shortfall
                ));
            }

            html.push_str(&format!(
                "<pre id=\"list\">{}</pre>\n",
                escape(&draw_list(&grid))
            ));
        }
        Err(message) => {
            html.push_str(&format!("<p class=\"error\">{}</p>\n", escape(message)));
        }
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}
