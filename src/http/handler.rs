//! Echo handler: time, transport security and request headers as plain text.

use std::fmt::Write;

use axum::{
    extract::State,
    http::HeaderMap,
    Extension,
};
use chrono::NaiveDateTime;

use crate::http::request::{RequestView, TransportSecurity};
use crate::http::server::AppState;

/// ISO-8601 local date-time; fraction omitted when zero, else 3/6/9 digits.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

pub fn format_timestamp(at: NaiveDateTime) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Render the response body for one request.
///
/// Every line, including the last header line, ends with `\n`.
pub fn render(view: &RequestView) -> String {
    let mut body = String::with_capacity(64 + view.headers().len() * 32);

    // Writing into a String cannot fail.
    let _ = writeln!(body, "Hello time is: {}", format_timestamp(view.timestamp()));
    let _ = writeln!(body, "Connection is secure: {}", view.is_secure());
    body.push_str("HTTP Headers:\n");
    for (name, value) in view.headers() {
        let _ = writeln!(body, "{}: {}", name, value);
    }

    body
}

/// `GET /` handler.
pub async fn echo_handler(
    State(state): State<AppState>,
    Extension(transport): Extension<TransportSecurity>,
    headers: HeaderMap,
) -> String {
    let security = transport.resolve(&headers, state.trust_forwarded_proto);
    let view = RequestView::from_headers(state.clock.now(), security.is_secure(), &headers);

    tracing::debug!(
        secure = view.is_secure(),
        header_count = view.headers().len(),
        "Echoing request"
    );

    render(&view)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(nanos: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 17)
            .unwrap()
            .and_hms_nano_opt(14, 3, 9, nanos)
            .unwrap()
    }

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(n, v)| (n.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_render_plain_example() {
        let view = RequestView::new(
            at(0),
            false,
            pairs(&[("Host", "example.com"), ("Accept", "*/*")]),
        );

        assert_eq!(
            render(&view),
            "Hello time is: 2024-05-17T14:03:09\n\
             Connection is secure: false\n\
             HTTP Headers:\n\
             Host: example.com\n\
             Accept: */*\n"
        );
    }

    #[test]
    fn test_render_secure_flag() {
        let view = RequestView::new(at(0), true, Vec::new());
        assert!(render(&view).contains("Connection is secure: true\n"));

        let view = RequestView::new(at(0), false, Vec::new());
        assert!(render(&view).contains("Connection is secure: false\n"));
    }

    #[test]
    fn test_render_zero_headers_ends_with_label() {
        let body = render(&RequestView::new(at(0), false, Vec::new()));
        assert!(body.ends_with("HTTP Headers:\n"));
        assert_eq!(body.lines().count(), 3);
    }

    #[test]
    fn test_render_duplicate_names_are_separate_lines() {
        let view = RequestView::new(
            at(0),
            false,
            pairs(&[("Accept", "text/html"), ("Accept", "*/*")]),
        );
        let body = render(&view);
        let header_lines: Vec<&str> = body.lines().skip(3).collect();
        assert_eq!(header_lines, vec!["Accept: text/html", "Accept: */*"]);
    }

    #[test]
    fn test_render_header_lines_match_input_order() {
        let headers = pairs(&[("b", "2"), ("a", "1"), ("c", "3"), ("a", "4")]);
        let body = render(&RequestView::new(at(0), false, headers.clone()));
        let header_lines: Vec<&str> = body.lines().skip(3).collect();
        let expected: Vec<String> = headers.iter().map(|(n, v)| format!("{}: {}", n, v)).collect();
        assert_eq!(header_lines, expected);
    }

    #[test]
    fn test_render_differs_only_in_timestamp() {
        let headers = pairs(&[("Host", "example.com")]);
        let first = render(&RequestView::new(at(0), false, headers.clone()));
        let second = render(&RequestView::new(at(500_000_000), false, headers));

        let first_lines: Vec<&str> = first.lines().collect();
        let second_lines: Vec<&str> = second.lines().collect();
        assert_ne!(first_lines[0], second_lines[0]);
        assert_eq!(first_lines[1..], second_lines[1..]);
    }

    #[test]
    fn test_format_timestamp_fraction_width() {
        assert_eq!(format_timestamp(at(0)), "2024-05-17T14:03:09");
        assert_eq!(format_timestamp(at(120_000_000)), "2024-05-17T14:03:09.120");
        assert_eq!(format_timestamp(at(120_500_000)), "2024-05-17T14:03:09.120500");
        assert_eq!(format_timestamp(at(1)), "2024-05-17T14:03:09.000000001");
    }
}
