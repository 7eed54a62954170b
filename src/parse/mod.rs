pub mod time;

pub use time::{TimeParseError, parse_time};

/// Split a string into title and tags. Tags are `#word` tokens at the end.
pub fn parse_title_and_tags(s: &str) -> (String, Vec<String>) {
    let mut tags = Vec::new();
    let mut remaining = s.trim_end();

    loop {
        let (rest, last_word) = match remaining.rfind(' ') {
            Some(last_space) => (&remaining[..last_space], &remaining[last_space + 1..]),
            None => ("", remaining),
        };
        match last_word.strip_prefix('#') {
            Some(tag) if !tag.is_empty() && !tag.contains('#') => {
                tags.push(tag.to_string());
                remaining = rest.trim_end();
            }
            _ => break,
        }
    }

    tags.reverse();
    (remaining.to_string(), tags)
}
