/// Compact counter label: `999`, `1.2K`, `3.4M`.
pub fn format_count(count: u64) -> String {
    if count < 1_000 {
        count.to_string()
    } else if count < 1_000_000 {
        format!("{:.1}K", count as f64 / 1_000.0)
    } else {
        format!("{:.1}M", count as f64 / 1_000_000.0)
    }
}

/// Thousands-separated label used on the profile page (`15,678`).
pub fn format_grouped(count: u64) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Text(String),
    /// Includes the leading `#`.
    Hashtag(String),
    /// Includes the leading `@`.
    Mention(String),
}

/// Split a caption into plain text, `#tags` and `@mentions`.
///
/// A tag or mention is the sigil followed by one or more ASCII word
/// characters; a lone sigil stays plain text.
pub fn description_segments(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut plain = String::new();
    let mut chars = text.char_indices().peekable();

    while let Some((start, ch)) = chars.next() {
        if ch == '#' || ch == '@' {
            let mut end = start + ch.len_utf8();
            while let Some(&(i, next)) = chars.peek() {
                if next.is_ascii_alphanumeric() || next == '_' {
                    end = i + next.len_utf8();
                    chars.next();
                } else {
                    break;
                }
            }
            if end > start + 1 {
                if !plain.is_empty() {
                    segments.push(Segment::Text(std::mem::take(&mut plain)));
                }
                let token = text[start..end].to_string();
                segments.push(if ch == '#' {
                    Segment::Hashtag(token)
                } else {
                    Segment::Mention(token)
                });
                continue;
            }
        }
        plain.push(ch);
    }

    if !plain.is_empty() {
        segments.push(Segment::Text(plain));
    }
    segments
}

/// Hashtags in a caption, without the `#`, lowercased.
pub fn hashtags(text: &str) -> Vec<String> {
    description_segments(text)
        .into_iter()
        .filter_map(|s| match s {
            Segment::Hashtag(tag) => Some(tag[1..].to_ascii_lowercase()),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_below_a_thousand_are_plain() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
    }

    #[test]
    fn counts_use_k_and_m_suffixes() {
        assert_eq!(format_count(1_000), "1.0K");
        assert_eq!(format_count(125_400), "125.4K");
        assert_eq!(format_count(2_341), "2.3K");
        assert_eq!(format_count(1_000_000), "1.0M");
        assert_eq!(format_count(12_500_000), "12.5M");
    }

    #[test]
    fn grouped_inserts_separators() {
        assert_eq!(format_grouped(0), "0");
        assert_eq!(format_grouped(892), "892");
        assert_eq!(format_grouped(1245), "1,245");
        assert_eq!(format_grouped(1234567), "1,234,567");
    }

    #[test]
    fn caption_is_split_into_tags_and_mentions() {
        let segments = description_segments("Hi @chef_mike! #cooking rocks #");
        assert_eq!(
            segments,
            vec![
                Segment::Text("Hi ".into()),
                Segment::Mention("@chef_mike".into()),
                Segment::Text("! ".into()),
                Segment::Hashtag("#cooking".into()),
                Segment::Text(" rocks #".into()),
            ]
        );
    }

    #[test]
    fn emoji_stay_in_plain_text() {
        let segments = description_segments("Save this 🍝 #food");
        assert_eq!(
            segments,
            vec![
                Segment::Text("Save this 🍝 ".into()),
                Segment::Hashtag("#food".into()),
            ]
        );
    }

    #[test]
    fn hashtags_are_extracted_lowercase() {
        assert_eq!(hashtags("#Dance and #fyp @x"), vec!["dance", "fyp"]);
    }
}
