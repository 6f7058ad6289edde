use regex::Regex;

#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub text: String,
    pub matched: bool,
}

impl Segment {
    fn plain(text: &str) -> Self {
        Segment { text: text.to_string(), matched: false }
    }
}

/// Split `text` into matched/unmatched segments under `query` so the
/// consumer can render the matches in an accent style. Concatenating the
/// segment texts reproduces `text` exactly. A blank query yields one
/// unmatched segment.
pub fn highlight_segments(text: &str, query: &str) -> Vec<Segment> {
    if query.trim().is_empty() {
        return vec![Segment::plain(text)];
    }

    // The query is escaped, so it is matched literally
    let pattern = match Regex::new(&format!("(?i){}", regex::escape(query))) {
        Ok(pattern) => pattern,
        Err(_) => return vec![Segment::plain(text)],
    };

    let mut segments = Vec::new();
    let mut last = 0;

    for found in pattern.find_iter(text) {
        if found.start() > last {
            segments.push(Segment::plain(&text[last..found.start()]));
        }
        segments.push(Segment { text: found.as_str().to_string(), matched: true });
        last = found.end();
    }

    if last < text.len() || segments.is_empty() {
        segments.push(Segment::plain(&text[last..]));
    }

    segments
}
