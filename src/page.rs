use crate::{config::DatabaseKind, probe::ProbeResult};
use maud::{DOCTYPE, Markup, PreEscaped, html};

pub const TITLE: &str = "Connection Status";
pub const POSITIVE_CLASS: &str = "status positive";
pub const NEGATIVE_CLASS: &str = "status negative";

const STYLE: &str = r"
body {
  font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
  background: linear-gradient(135deg, #6da3ff, #91c8ff);
  min-height: 100vh;
  margin: 0;
  display: flex;
  flex-direction: column;
  justify-content: center;
  align-items: center;
  text-align: center;
}
h1 {
  color: #ffffff;
  margin-bottom: 30px;
  font-size: 36px;
}
.card {
  background: #fff;
  padding: 30px 40px;
  border-radius: 15px;
  box-shadow: 0px 8px 20px rgba(0,0,0,0.15);
  max-width: 500px;
  width: 90%;
}
.db-status {
  margin: 20px 0;
  font-size: 18px;
}
.positive {
  color: #2ecc71;
  font-weight: bold;
}
.negative {
  color: #e74c3c;
  font-weight: bold;
}
.result {
  font-size: 14px;
  color: #666;
  margin-top: 8px;
}
";

/// Render the status page for both probe results
///
/// Pure: the same results always produce the same bytes. Messages and
/// timestamps are escaped.
#[must_use]
pub fn render(mysql: &ProbeResult, postgres: &ProbeResult) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (TITLE) }
                style { (PreEscaped(STYLE)) }
            }
            body {
                h1 { (TITLE) }
                div class="card" {
                    (db_status(DatabaseKind::MySql, mysql))
                    (db_status(DatabaseKind::Postgres, postgres))
                }
            }
        }
    }
}

/// Sentence shown under the status line of a connected probe
#[must_use]
pub fn timestamp_sentence(kind: DatabaseKind, timestamp: &str) -> String {
    format!("Current time from {}: {timestamp}", kind.label())
}

const fn status_class(result: &ProbeResult) -> &'static str {
    if result.is_connected() {
        POSITIVE_CLASS
    } else {
        NEGATIVE_CLASS
    }
}

fn db_status(kind: DatabaseKind, result: &ProbeResult) -> Markup {
    html! {
        div class="db-status" {
            strong { (kind.label()) ":" }
            " "
            span class=(status_class(result)) { (result.message()) }
            div class="result" {
                @if let Some(timestamp) = result.observed_timestamp() {
                    (timestamp_sentence(kind, timestamp))
                }
            }
        }
    }
}
