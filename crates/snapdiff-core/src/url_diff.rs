//! Highlighting where a target URL departs from the original.

use crate::report::html::escape;

/// A target URL split around the part that differs from the original.
///
/// `prefix + middle + suffix` always equals the target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlDiff {
    pub original: String,
    pub prefix: String,
    pub middle: String,
    pub suffix: String,
}

/// Splits `target` into common prefix, differing middle and common suffix relative to `original`.
///
/// Comparison is char-exact and case-sensitive. The suffix scan never reaches
/// into the prefix of either string, so for `original = "ab"`, `target = "abab"`
/// the middle is `"ab"` rather than overlapping.
pub fn highlight(original: &str, target: &str) -> UrlDiff {
    let a: Vec<char> = original.chars().collect();
    let b: Vec<char> = target.chars().collect();

    let prefix = a.iter().zip(&b).take_while(|(x, y)| x == y).count();

    let mut suffix = 0;
    while suffix < a.len() - prefix
        && suffix < b.len() - prefix
        && a[a.len() - 1 - suffix] == b[b.len() - 1 - suffix]
    {
        suffix += 1;
    }

    let middle_end = b.len() - suffix;
    UrlDiff {
        original: original.to_string(),
        prefix: b[..prefix].iter().collect(),
        middle: b[prefix..middle_end].iter().collect(),
        suffix: b[middle_end..].iter().collect(),
    }
}

impl UrlDiff {
    pub fn target(&self) -> String {
        format!("{}{}{}", self.prefix, self.middle, self.suffix)
    }

    /// True when both URLs are equal.
    pub fn is_unchanged(&self) -> bool {
        self.middle.is_empty() && self.original == self.target()
    }

    /// Target URL as HTML with the differing middle wrapped in an emphasis span.
    pub fn marked_target(&self) -> String {
        format!(
            "{}<span class=\"url-diff\">{}</span>{}",
            escape(&self.prefix),
            escape(&self.middle),
            escape(&self.suffix)
        )
    }

    /// Both redirect URLs as a report cell fragment; only the target is marked.
    /// An unchanged target is labelled instead of marked.
    pub fn to_html(&self) -> String {
        let target = if self.is_unchanged() {
            format!("{} <i>(same URL)</i>", escape(&self.original))
        } else {
            self.marked_target()
        };
        format!(
            "<div class=\"url-pair\"><b>bef_redirect_url:</b> {}<br><b>aft_redirect_url:</b> {}</div>",
            escape(&self.original),
            target
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_urls_mark_nothing() {
        let d = highlight("http://x.com/a?b=1", "http://x.com/a?b=1");
        assert_eq!(d.middle, "");
        assert_eq!(d.prefix, "http://x.com/a?b=1");
        assert_eq!(d.suffix, "");
        assert!(d.is_unchanged());
    }

    #[test]
    fn appended_char_is_the_middle() {
        let d = highlight("http://x.com/page", "http://x.com/page2");
        assert_eq!(d.middle, "2");
        assert_eq!(d.prefix, "http://x.com/page");
        assert_eq!(d.suffix, "");
    }

    #[test]
    fn not_symmetric() {
        let d = highlight("http://x.com/page2", "http://x.com/page");
        assert_eq!(d.middle, "");
        assert_eq!(d.target(), "http://x.com/page");
        assert!(!d.is_unchanged());

        let d = highlight("https://a.com/x/1", "https://a.com/yy/1");
        assert_eq!(d.middle, "yy");
        let d = highlight("https://a.com/yy/1", "https://a.com/x/1");
        assert_eq!(d.middle, "x");
    }

    #[test]
    fn nothing_shared_marks_everything() {
        let d = highlight("abc", "xyz");
        assert_eq!(d.prefix, "");
        assert_eq!(d.middle, "xyz");
        assert_eq!(d.suffix, "");
    }

    #[test]
    fn suffix_does_not_overlap_prefix() {
        let d = highlight("ab", "abab");
        assert_eq!(d.prefix, "ab");
        assert_eq!(d.middle, "ab");
        assert_eq!(d.suffix, "");
        assert_eq!(d.target(), "abab");
    }

    #[test]
    fn middle_change_with_shared_suffix() {
        let d = highlight(
            "http://example.com/redirect&abc",
            "http://example.com/redirect?bcd",
        );
        assert_eq!(d.prefix, "http://example.com/redirect");
        assert_eq!(d.middle, "?bcd");
        assert_eq!(d.suffix, "");

        let d = highlight("http://a.com/v1/index.html", "http://a.com/v2/index.html");
        assert_eq!(d.middle, "2");
        assert_eq!(d.suffix, "/index.html");
    }

    #[test]
    fn case_sensitive_and_multibyte() {
        let d = highlight("http://a.com/Page", "http://a.com/page");
        assert_eq!(d.middle, "p");
        let d = highlight("http://a.com/café", "http://a.com/cafè");
        assert_eq!(d.middle, "è");
    }

    #[test]
    fn html_fragment_marks_only_target() {
        let d = highlight("http://x.com/?a=1&b", "http://x.com/?a=2&b");
        assert_eq!(
            d.marked_target(),
            "http://x.com/?a=<span class=\"url-diff\">2</span>&amp;b"
        );
        let html = d.to_html();
        assert!(html.contains("<b>bef_redirect_url:</b> http://x.com/?a=1&amp;b<br>"));
        assert_eq!(html.matches("url-diff").count(), 1);
        assert!(!html.contains("same URL"));
    }

    #[test]
    fn unchanged_url_is_labelled_not_marked() {
        let html = highlight("http://x.com/a&b", "http://x.com/a&b").to_html();
        assert!(html.ends_with("<b>aft_redirect_url:</b> http://x.com/a&amp;b <i>(same URL)</i></div>"));
        assert!(!html.contains("url-diff"));
    }
}
