//! Spreadsheet-backed data service support.

mod decode;

pub use decode::decode_rows;

/// Join the service base URL and a sheet name.
///
/// The sheet name is one path segment, percent-encoded.
pub fn sheet_url(base_url: &str, sheet: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        urlencoding::encode(sheet.trim_matches('/'))
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sheet_url_joins_with_single_slash() {
        assert_eq!(
            sheet_url("https://opensheet.example.com/abc123/", "FAQ"),
            "https://opensheet.example.com/abc123/FAQ"
        );
        assert_eq!(
            sheet_url("https://opensheet.example.com/abc123", "/Eventos"),
            "https://opensheet.example.com/abc123/Eventos"
        );
    }

    #[test]
    fn test_sheet_url_encodes_spaces() {
        assert_eq!(
            sheet_url("http://localhost:8080", "Ensalamento 2025"),
            "http://localhost:8080/Ensalamento%202025"
        );
    }

    #[test]
    fn test_sheet_url_encodes_reserved_characters() {
        assert_eq!(
            sheet_url("http://localhost:8080", "FAQ #2?"),
            "http://localhost:8080/FAQ%20%232%3F"
        );
        assert_eq!(
            sheet_url("http://localhost:8080", "100% Eventos/2025"),
            "http://localhost:8080/100%25%20Eventos%2F2025"
        );
        assert_eq!(
            sheet_url("http://localhost:8080", "Período"),
            "http://localhost:8080/Per%C3%ADodo"
        );
    }
}
