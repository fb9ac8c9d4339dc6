//! 檔名樣板模組
//!
//! 將 `face_{index}.jpg`、`{index:06}.png` 這類樣板套用編號產生檔名

use anyhow::{Context, Result, bail};
use regex::Regex;
use std::path::MAIN_SEPARATOR;
use std::sync::LazyLock;

static REGEX_PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{index(?::([0-9]+))?\}").expect("Invalid regex"));

/// 補零寬度上限
pub const MAX_PAD_WIDTH: usize = 255;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    /// 編號，`width` 為補零後的最小寬度（0 表示不補零）
    Index { width: usize },
}

/// 已解析的檔名樣板
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameTemplate {
    source: String,
    segments: Vec<Segment>,
}

impl NameTemplate {
    /// 解析樣板
    ///
    /// `{index}` 直接輸出編號，`{index:06}` 或 `{index:6}` 補零至 6 位。
    /// 樣板必須至少包含一個編號欄位，且不可包含路徑分隔字元。
    pub fn parse(template: &str) -> Result<Self> {
        if template.contains(['/', MAIN_SEPARATOR]) {
            bail!("Template must be a file name, not a path: {template}");
        }

        let mut segments = Vec::new();
        let mut last_end = 0;

        for captures in REGEX_PLACEHOLDER.captures_iter(template) {
            let Some(whole) = captures.get(0) else {
                continue;
            };

            if whole.start() > last_end {
                segments.push(Segment::Literal(
                    template[last_end..whole.start()].to_string(),
                ));
            }

            let width = match captures.get(1) {
                Some(digits) => digits
                    .as_str()
                    .parse::<usize>()
                    .with_context(|| format!("Invalid padding width in template: {template}"))?,
                None => 0,
            };
            if width > MAX_PAD_WIDTH {
                bail!(
                    "Padding width {width} exceeds {MAX_PAD_WIDTH} in template: {template}"
                );
            }
            segments.push(Segment::Index { width });
            last_end = whole.end();
        }

        if !segments.iter().any(|s| matches!(s, Segment::Index { .. })) {
            bail!("Template has no {{index}} placeholder: {template}");
        }

        if last_end < template.len() {
            segments.push(Segment::Literal(template[last_end..].to_string()));
        }

        Ok(Self {
            source: template.to_string(),
            segments,
        })
    }

    pub fn render(&self, index: u32) -> String {
        let mut name = String::with_capacity(self.source.len() + 8);
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => name.push_str(text),
                Segment::Index { width } => {
                    name.push_str(&format!("{index:0width$}", width = *width));
                }
            }
        }
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unpadded_source_name() {
        let template = NameTemplate::parse("face_{index}.jpg").unwrap();
        assert_eq!(template.render(1), "face_1.jpg");
        assert_eq!(template.render(24), "face_24.jpg");
    }

    #[test]
    fn test_zero_padded_destination_name() {
        let template = NameTemplate::parse("{index:06}.png").unwrap();
        assert_eq!(template.render(1), "000001.png");
        assert_eq!(template.render(24), "000024.png");
    }

    #[test]
    fn test_width_without_leading_zero_still_pads() {
        let template = NameTemplate::parse("img{index:3}").unwrap();
        assert_eq!(template.render(7), "img007");
    }

    #[test]
    fn test_number_wider_than_padding_is_not_truncated() {
        let template = NameTemplate::parse("{index:02}.png").unwrap();
        assert_eq!(template.render(1234), "1234.png");
    }

    #[test]
    fn test_multiple_placeholders() {
        let template = NameTemplate::parse("{index}_{index:03}").unwrap();
        assert_eq!(template.render(5), "5_005");
    }

    #[test]
    fn test_missing_placeholder_is_rejected() {
        assert!(NameTemplate::parse("face.jpg").is_err());
        assert!(NameTemplate::parse("face_{idx}.jpg").is_err());
    }

    #[test]
    fn test_path_separator_is_rejected() {
        assert!(NameTemplate::parse("out/{index}.png").is_err());
    }

    #[test]
    fn test_oversized_width_is_rejected() {
        let err = NameTemplate::parse("{index:70000}.png").unwrap_err();
        assert!(err.to_string().contains("{index:70000}.png"));

        let err = NameTemplate::parse("{index:99999999999999999999999}.png").unwrap_err();
        assert!(err.to_string().contains("{index:99999999999999999999999}.png"));
    }

    #[test]
    fn test_max_width_is_accepted() {
        let template = NameTemplate::parse("{index:255}").unwrap();
        assert_eq!(template.render(1).len(), MAX_PAD_WIDTH);
    }

    #[test]
    fn test_non_ascii_digits_are_not_a_width() {
        // 非 ASCII 數字不視為寬度，整段當作一般文字
        assert!(NameTemplate::parse("{index:٠٦}.png").is_err());
        let template = NameTemplate::parse("{index}{index:٠٦}").unwrap();
        assert_eq!(template.render(4), "4{index:٠٦}");
    }
}
