//! Markup stripping and excerpt generation.

use std::sync::LazyLock;

use regex::Regex;

/// Default excerpt length in characters.
pub const DEFAULT_EXCERPT_LEN: usize = 200;

/// Marker appended to truncated excerpts.
pub const ELLIPSIS: &str = "...";

// Entity names without the closing `;`, which triggers decoding.
const ENTITIES: [(&str, &str); 4] = [
    ("&nbsp", " "),
    ("&amp", "&"),
    ("&lt", "<"),
    ("&gt", ">"),
];

#[expect(
    clippy::expect_used,
    reason = "the pattern is a literal and cannot fail to compile"
)]
static TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+|[<>;]|[^<>;\s]+").expect("token pattern"));

/// Strip markup, decode the common entities and normalise whitespace.
///
/// The input is read once, token by token. Decoded characters are fed back
/// through the same rules, so `&amp;lt;b&amp;gt;` and markup split by tags
/// (`&am<i>p;`) are resolved in the same pass. The result is always a fixed
/// point: `sanitise(&sanitise(x)) == sanitise(x)`.
///
/// # Examples
/// ```
/// use ryv_content::sanitise;
///
/// assert_eq!(sanitise("<p>A &amp; B</p>"), "A & B");
/// assert_eq!(sanitise("  one \n\t two  "), "one two");
/// assert_eq!(sanitise(""), "");
/// ```
#[must_use]
pub fn sanitise(raw: &str) -> String {
    let mut cleaned = Cleaned::with_capacity(raw.len());
    for token in TOKEN.find_iter(raw) {
        cleaned.push(token.as_str());
    }
    cleaned.finish()
}

/// Output buffer holding no complete tag, no entity and no whitespace run.
struct Cleaned {
    text: String,
    // Byte offset of the first `<` not yet closed by a `>`.
    open_tag: Option<usize>,
}

impl Cleaned {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            text: String::with_capacity(capacity),
            open_tag: None,
        }
    }

    fn push(&mut self, token: &str) {
        match token {
            "<" => self.open(),
            ">" => self.close(),
            ";" => self.semicolon(),
            _ if token.starts_with(char::is_whitespace) => self.space(),
            _ => self.text.push_str(token),
        }
    }

    fn open(&mut self) {
        if self.open_tag.is_none() {
            self.open_tag = Some(self.text.len());
        }
        self.text.push('<');
    }

    fn close(&mut self) {
        let Some(start) = self.open_tag.take() else {
            self.text.push('>');
            return;
        };
        self.text.truncate(start);
    }

    fn semicolon(&mut self) {
        let decoded = ENTITIES.iter().find_map(|&(name, replacement)| {
            self.text
                .strip_suffix(name)
                .map(|head| (head.len(), replacement))
        });
        let Some((head_len, replacement)) = decoded else {
            self.text.push(';');
            return;
        };
        self.text.truncate(head_len);
        self.push(replacement);
    }

    fn space(&mut self) {
        if !self.text.is_empty() && !self.text.ends_with(' ') {
            self.text.push(' ');
        }
    }

    fn finish(mut self) -> String {
        if self.text.ends_with(' ') {
            self.text.pop();
        }
        self.text
    }
}

/// Return the first `max_len` characters of `content`, followed by
/// [`ELLIPSIS`] when anything was cut.
///
/// # Examples
/// ```
/// use ryv_content::excerpt;
///
/// assert_eq!(excerpt("curto", 200), "curto");
/// assert_eq!(excerpt("visão", 3), "vis...");
/// ```
#[must_use]
pub fn excerpt(content: &str, max_len: usize) -> String {
    match content.char_indices().nth(max_len) {
        Some((cut, _)) => {
            let head = content.get(..cut).unwrap_or(content);
            format!("{head}{ELLIPSIS}")
        }
        None => content.to_owned(),
    }
}
