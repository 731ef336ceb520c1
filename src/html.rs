//! Shared page layout, error pages and display formatting.

use std::sync::OnceLock;

use maud::{DOCTYPE, Markup, html};
use numfmt::{Formatter, Precision};
use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use time::{Date, OffsetDateTime, UtcOffset, macros::format_description};

use crate::endpoints;

const BOOTSTRAP_CSS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";
const HTMX_JS: &str = "https://cdn.jsdelivr.net/npm/htmx.org@2.0.8/dist/htmx.min.js";

pub fn base(title: &str, content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta name="description" content="Personal finance tracker with database integration";
                title { (title) " - Finance Tracker" }
                link href=(BOOTSTRAP_CSS) rel="stylesheet";
                script src=(HTMX_JS) {}

                style
                {
                    r#"
                    .htmx-indicator {
                        display: none;
                    }

                    .htmx-request .htmx-indicator,
                    .htmx-request.htmx-indicator {
                        display: inline-block;
                    }
                    "#
                }
            }

            body
            {
                nav class="navbar navbar-expand-lg navbar-dark bg-primary"
                {
                    div class="container"
                    {
                        a class="navbar-brand fw-bold" href=(endpoints::DASHBOARD_VIEW)
                        {
                            "💰 FinanceTracker"
                        }

                        div class="navbar-nav"
                        {
                            a class="nav-link" href=(endpoints::DASHBOARD_VIEW) { "Dashboard" }
                        }
                    }
                }

                main class="container-fluid bg-light min-vh-100 py-4"
                {
                    (content)
                }
            }
        }
    }
}

pub fn error_view(title: &str, header: &str, description: &str, fix: &str) -> Markup {
    let content = html!(
        div class="container py-4"
        {
            div class="row justify-content-center"
            {
                div class="col-lg-6"
                {
                    div class="card border-danger"
                    {
                        div class="card-body text-center py-5"
                        {
                            h1 class="text-danger display-4 mb-3" { (header) }
                            h3 class="text-danger" { (description) }
                            p class="text-muted mb-4" { (fix) }

                            a href=(endpoints::DASHBOARD_VIEW) class="btn btn-primary"
                            {
                                "Back to Dashboard"
                            }
                        }
                    }
                }
            }
        }
    );

    base(title, &content)
}

/// A small spinner shown on a button while its HTMX request is in flight.
pub fn loading_spinner() -> Markup {
    html! {
        span
            class="spinner-border spinner-border-sm me-2 htmx-indicator"
            role="status"
            aria-hidden="true"
        {}
    }
}

/// Format `amount` as Indonesian Rupiah rounded to the nearest rupiah, e.g.
/// "Rp 50.000" or "-Rp 1.250".
pub fn format_currency(amount: Decimal) -> String {
    static POSITIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let positive_fmt = POSITIVE_FMT.get_or_init(|| {
        Formatter::currency("Rp ")
            .expect("currency prefix should be valid")
            .precision(Precision::Decimals(0))
    });

    static NEGATIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let negative_fmt = NEGATIVE_FMT.get_or_init(|| {
        Formatter::currency("-Rp ")
            .expect("currency prefix should be valid")
            .precision(Precision::Decimals(0))
    });

    let rounded = amount
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default();

    let formatted_string = if rounded < 0.0 {
        negative_fmt.fmt_string(rounded.abs())
    } else if rounded > 0.0 {
        positive_fmt.fmt_string(rounded)
    } else {
        // Zero is hardcoded as "0", so we must specify the formatted string for zero
        "Rp 0".to_owned()
    };

    // Rupiah amounts group thousands with a period, e.g. "Rp 1.000.000".
    formatted_string.replace(',', ".")
}

/// Format a date the way the dashboard list shows it, e.g. "10/1/2024".
pub fn format_short_date(date: Date) -> String {
    date.format(format_description!(
        "[day padding:none]/[month padding:none]/[year]"
    ))
    .unwrap_or_else(|_| date.to_string())
}

/// Format a date in full, e.g. "Wednesday, January 10, 2024".
pub fn format_long_date(date: Date) -> String {
    date.format(format_description!(
        "[weekday], [month repr:long] [day padding:none], [year]"
    ))
    .unwrap_or_else(|_| date.to_string())
}

/// Format a timestamp in the local timezone, e.g. "January 10, 2024 at 02:30 PM".
pub fn format_timestamp(timestamp: OffsetDateTime, local_offset: UtcOffset) -> String {
    let local = timestamp.to_offset(local_offset);

    local
        .format(format_description!(
            "[month repr:long] [day padding:none], [year] at [hour repr:12]:[minute] [period]"
        ))
        .unwrap_or_else(|_| local.to_string())
}
