//! Display formatting for sentiment replies.
//!
//! Message text is escaped first and then run through four fixed
//! substitutions. The order matters: later rules must not re-match markup
//! produced by earlier ones.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static SENTIMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\*\*Sentiment:\*\*) (positive|negative|neutral)")
        .expect("sentiment pattern is valid")
});

static CONFIDENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\*\*Confidence:\*\*) (\d+)%").expect("confidence pattern is valid")
});

static BOLD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("bold pattern is valid"));

/// Escape the characters that are structurally significant in HTML.
pub fn escape_html(text: &str) -> String {
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

/// Render message text as markup for the message log.
///
/// 1. `**Sentiment:** Positive|Negative|Neutral` wraps the polarity word in a
///    span classed by the lowercase polarity, keeping the word's casing.
/// 2. `**Confidence:** NN%` wraps the percentage in a `confidence` span.
/// 3. Remaining `**...**` spans become `<strong>`.
/// 4. Newlines become `<br>`.
///
/// # Example
///
/// ```rust
/// use sentiment_chat::chat::format_message;
///
/// assert_eq!(
///     format_message("**Confidence:** 87%"),
///     r#"<strong>Confidence:</strong> <span class="confidence">87%</span>"#
/// );
/// ```
pub fn format_message(text: &str) -> String {
    let escaped = escape_html(text);

    let tagged = SENTIMENT_RE.replace_all(&escaped, |caps: &Captures<'_>| {
        let polarity = &caps[2];
        format!(
            r#"{} <span class="{}">{polarity}</span>"#,
            &caps[1],
            polarity.to_ascii_lowercase()
        )
    });

    let tagged = CONFIDENCE_RE.replace_all(&tagged, r#"${1} <span class="confidence">${2}%</span>"#);
    let bolded = BOLD_RE.replace_all(&tagged, "<strong>${1}</strong>");

    bolded.replace('\n', "<br>")
}
