//! Outline of a markdown discussion document.
//!
//! Only the structure the viewer navigates by is recognised: ATX headings,
//! fenced code, bullet/numbered lists and paragraphs. Inline markup is left
//! untouched.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Paragraph { text: String },
    /// Fenced code; whitespace is preserved verbatim.
    Code {
        language: Option<String>,
        text: String,
    },
    List { items: Vec<String> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    /// Heading level, 1 to 6.
    pub level: u8,
    pub heading: String,
    pub blocks: Vec<Block>,
    pub children: Vec<Section>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DocumentOutline {
    /// Blocks before the first heading.
    pub preamble: Vec<Block>,
    pub sections: Vec<Section>,
}

impl DocumentOutline {
    /// Headings of every section in document order, with their levels.
    pub fn headings(&self) -> Vec<(u8, &str)> {
        let mut out = Vec::new();
        let mut stack: Vec<&Section> = self.sections.iter().rev().collect();
        while let Some(section) = stack.pop() {
            out.push((section.level, section.heading.as_str()));
            stack.extend(section.children.iter().rev());
        }
        out
    }
}

/// Builds the outline of a markdown document.
pub fn outline(text: &str) -> DocumentOutline {
    let mut builder = OutlineBuilder::default();
    for line in text.lines() {
        builder.line(line);
    }
    builder.finish()
}

struct CodeFence {
    marker: String,
    language: Option<String>,
    lines: Vec<String>,
}

#[derive(Default)]
struct OutlineBuilder {
    outline: DocumentOutline,
    open: Vec<Section>,
    paragraph: Vec<String>,
    list: Vec<String>,
    code: Option<CodeFence>,
}

impl OutlineBuilder {
    fn line(&mut self, line: &str) {
        if let Some(fence) = self.code.as_mut() {
            if is_closing_fence(line, &fence.marker) {
                self.close_code();
            } else {
                fence.lines.push(line.to_string());
            }
            return;
        }

        let trimmed = line.trim_start();

        if let Some((marker, language)) = opening_fence(trimmed) {
            self.close_text();
            self.code = Some(CodeFence {
                marker,
                language,
                lines: Vec::new(),
            });
        } else if let Some((level, heading)) = parse_heading(trimmed) {
            self.close_text();
            self.open_section(level, heading);
        } else if trimmed.is_empty() {
            self.close_text();
        } else if let Some(item) = list_item(trimmed) {
            self.close_paragraph();
            self.list.push(item.to_string());
        } else if !self.list.is_empty() && line.starts_with(char::is_whitespace) {
            // Indented continuation of the previous list item.
            if let Some(last) = self.list.last_mut() {
                last.push(' ');
                last.push_str(trimmed);
            }
        } else {
            self.close_list();
            self.paragraph.push(line.trim_end().to_string());
        }
    }

    fn blocks(&mut self) -> &mut Vec<Block> {
        match self.open.last_mut() {
            Some(section) => &mut section.blocks,
            None => &mut self.outline.preamble,
        }
    }

    fn close_paragraph(&mut self) {
        if self.paragraph.is_empty() {
            return;
        }
        let text = std::mem::take(&mut self.paragraph).join("\n");
        self.blocks().push(Block::Paragraph { text });
    }

    fn close_list(&mut self) {
        if self.list.is_empty() {
            return;
        }
        let items = std::mem::take(&mut self.list);
        self.blocks().push(Block::List { items });
    }

    fn close_text(&mut self) {
        self.close_paragraph();
        self.close_list();
    }

    fn close_code(&mut self) {
        if let Some(fence) = self.code.take() {
            self.blocks().push(Block::Code {
                language: fence.language,
                text: fence.lines.join("\n"),
            });
        }
    }

    fn open_section(&mut self, level: u8, heading: String) {
        while self.open.last().is_some_and(|s| s.level >= level) {
            self.close_section();
        }
        self.open.push(Section {
            level,
            heading,
            blocks: Vec::new(),
            children: Vec::new(),
        });
    }

    fn close_section(&mut self) {
        let Some(done) = self.open.pop() else {
            return;
        };
        match self.open.last_mut() {
            Some(parent) => parent.children.push(done),
            None => self.outline.sections.push(done),
        }
    }

    fn finish(mut self) -> DocumentOutline {
        // An unterminated fence runs to the end of the document.
        self.close_code();
        self.close_text();
        while !self.open.is_empty() {
            self.close_section();
        }
        self.outline
    }
}

fn opening_fence(trimmed: &str) -> Option<(String, Option<String>)> {
    let fence_char = trimmed.chars().next().filter(|c| *c == '`' || *c == '~')?;
    let run = trimmed.chars().take_while(|c| *c == fence_char).count();
    if run < 3 {
        return None;
    }
    let marker: String = std::iter::repeat_n(fence_char, run).collect();
    let info = trimmed[run..].trim();
    let language = info
        .split_whitespace()
        .next()
        .map(str::to_string);
    Some((marker, language))
}

fn is_closing_fence(line: &str, marker: &str) -> bool {
    let trimmed = line.trim();
    trimmed.starts_with(marker)
        && trimmed
            .chars()
            .all(|c| Some(c) == marker.chars().next())
}

fn parse_heading(trimmed: &str) -> Option<(u8, String)> {
    let level = trimmed.chars().take_while(|c| *c == '#').count();
    if !(1..=6).contains(&level) {
        return None;
    }
    let rest = &trimmed[level..];
    if !rest.is_empty() && !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let heading = rest.trim().trim_end_matches('#').trim_end().to_string();
    Some((level as u8, heading))
}

fn list_item(trimmed: &str) -> Option<&str> {
    for bullet in ["- ", "* ", "+ "] {
        if let Some(item) = trimmed.strip_prefix(bullet) {
            return Some(item.trim());
        }
    }

    let digits = trimmed.chars().take_while(char::is_ascii_digit).count();
    if digits == 0 || digits > 9 {
        return None;
    }
    let rest = &trimmed[digits..];
    rest.strip_prefix(". ")
        .or_else(|| rest.strip_prefix(") "))
        .map(str::trim)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DISCUSSION: &str = "\
Intro line one
intro line two

# Caching review

Context paragraph.

## Findings

- hit rate is low
- eviction is
  too aggressive
1. second list

## Code

```rust
fn main() {
    println!(\"hi\");
}
```

# Next steps ##

Done.
";

    #[test]
    fn test_preamble_and_nesting() {
        let doc = outline(DISCUSSION);

        assert_eq!(
            doc.preamble,
            vec![Block::Paragraph {
                text: "Intro line one\nintro line two".to_string()
            }]
        );
        assert_eq!(
            doc.headings(),
            vec![
                (1, "Caching review"),
                (2, "Findings"),
                (2, "Code"),
                (1, "Next steps"),
            ]
        );
        assert_eq!(doc.sections.len(), 2);
        assert_eq!(doc.sections[0].children.len(), 2);
    }

    #[test]
    fn test_lists_and_continuations() {
        let doc = outline(DISCUSSION);
        let findings = &doc.sections[0].children[0];

        assert_eq!(
            findings.blocks,
            vec![Block::List {
                items: vec![
                    "hit rate is low".to_string(),
                    "eviction is too aggressive".to_string(),
                    "second list".to_string(),
                ]
            }]
        );
    }

    #[test]
    fn test_code_fence_preserves_whitespace() {
        let doc = outline(DISCUSSION);
        let code = &doc.sections[0].children[1];

        assert_eq!(
            code.blocks,
            vec![Block::Code {
                language: Some("rust".to_string()),
                text: "fn main() {\n    println!(\"hi\");\n}".to_string(),
            }]
        );
    }

    #[test]
    fn test_headings_inside_code_are_not_sections() {
        let doc = outline("# Top\n```\n# not a heading\n```\n");
        assert_eq!(doc.headings(), vec![(1, "Top")]);
    }

    #[test]
    fn test_unterminated_fence_runs_to_end() {
        let doc = outline("~~~\nline\n  indented");
        assert_eq!(
            doc.preamble,
            vec![Block::Code {
                language: None,
                text: "line\n  indented".to_string()
            }]
        );
    }

    #[test]
    fn test_skipped_levels_nest_under_nearest_parent() {
        let doc = outline("# A\n### C\n## B\n");
        assert_eq!(doc.sections.len(), 1);
        let a = &doc.sections[0];
        assert_eq!(a.children.len(), 2);
        assert_eq!(a.children[0].heading, "C");
        assert_eq!(a.children[1].heading, "B");
    }

    #[test]
    fn test_hash_without_space_is_text() {
        let doc = outline("#hashtag\n####### seven");
        assert!(doc.sections.is_empty());
        assert_eq!(doc.preamble.len(), 1);
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(outline(""), DocumentOutline::default());
    }
}
