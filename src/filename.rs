//! Deterministic URL → output filename derivation

/// Derive a safe on-disk filename from a URL.
///
/// Strips one leading `https://` or `http://`, turns `/`, `?` and `&` into
/// `_`, drops every remaining character outside alphanumerics, `.`, `_` and
/// `-`, keeps at most the first 100 characters and appends `.pdf`.
///
/// Total over any input and deterministic. Distinct URLs can collide on the
/// same name; the later write wins.
pub fn pdf_filename(url: &str) -> String {
    let stripped = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);

    let mut name: String = stripped
        .chars()
        .map(|c| match c {
            '/' | '?' | '&' => '_',
            c => c,
        })
        .filter(|c| c.is_alphanumeric() || matches!(c, '.' | '_' | '-'))
        .take(100)
        .collect();

    name.push_str(".pdf");
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_host() {
        assert_eq!(pdf_filename("https://example.com"), "example.com.pdf");
    }

    #[test]
    fn path_and_query_become_underscores() {
        // `=` is outside the permitted set and disappears entirely.
        assert_eq!(
            pdf_filename("https://example.com/a/b?x=1&y=2"),
            "example.com_a_b_x1_y2.pdf"
        );
    }

    #[test]
    fn strips_only_one_scheme_prefix() {
        // The inner scheme keeps its text; the colon is dropped and the
        // slashes become underscores.
        assert_eq!(
            pdf_filename("https://example.com/http://other"),
            "example.com_http__other.pdf"
        );
    }

    #[test]
    fn truncates_to_100_chars_before_suffix() {
        let url = format!("https://example.com/{}", "a".repeat(200));
        let name = pdf_filename(&url);
        assert!(name.ends_with(".pdf"));
        assert_eq!(name.chars().count(), 104);
    }

    #[test]
    fn output_charset_is_restricted() {
        let name = pdf_filename("https://example.com/päge?q=a b%20c");
        let stem = name.strip_suffix(".pdf").unwrap();
        assert!(stem
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '.' | '_' | '-')));
    }

    #[test]
    fn unicode_alphanumerics_survive() {
        assert_eq!(pdf_filename("https://例え.jp/ページ"), "例え.jp_ページ.pdf");
    }

    #[test]
    fn total_over_non_urls() {
        assert_eq!(pdf_filename(""), ".pdf");
        assert_eq!(pdf_filename("not a url"), "notaurl.pdf");
    }

    #[test]
    fn deterministic() {
        let url = "https://example.com/some/path";
        assert_eq!(pdf_filename(url), pdf_filename(url));
    }
}
