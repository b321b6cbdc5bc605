//! Block content: the structured rich-text shape used for project summaries.
//!
//! Only the subset the CMS schema allows is modeled: `normal`/`h2`/`h3`
//! block styles, bullet and numbered lists, and `strong`/`em`/`code` span
//! marks. Anything else falls back to paragraph rendering.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Block {
    #[serde(rename = "_key")]
    pub key: String,
    pub style: String,
    pub list_item: Option<String>,
    pub children: Vec<Span>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Span {
    #[serde(rename = "_key")]
    pub key: String,
    pub text: String,
    pub marks: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Bullet,
    Number,
}

impl ListKind {
    fn from_item(list_item: &str) -> Self {
        match list_item {
            "number" => Self::Number,
            // the schema only allows "bullet" and "number"
            _ => Self::Bullet,
        }
    }
}

/// A run of blocks ready for markup: either one standalone block or a list of
/// consecutive items sharing a kind.
#[derive(Debug, Clone, PartialEq)]
pub enum BlockGroup {
    Single(Block),
    List { kind: ListKind, items: Vec<Block> },
}

/// Group a flat block sequence so consecutive list items of the same kind
/// render as one `<ul>`/`<ol>`. A change of kind, or any non-list block,
/// closes the open list.
pub fn group_blocks(blocks: Vec<Block>) -> Vec<BlockGroup> {
    let mut groups = Vec::new();
    for block in blocks {
        match &block.list_item {
            Some(item) => {
                let kind = ListKind::from_item(item);
                match groups.last_mut() {
                    Some(BlockGroup::List { kind: open, items }) if *open == kind => {
                        items.push(block);
                    }
                    _ => groups.push(BlockGroup::List {
                        kind,
                        items: vec![block],
                    }),
                }
            }
            None => groups.push(BlockGroup::Single(block)),
        }
    }
    groups
}

/// Flatten block content to plain text, for alt text and previews.
pub fn plain_text(blocks: &[Block]) -> String {
    blocks
        .iter()
        .map(|b| {
            b.children
                .iter()
                .map(|s| s.text.as_str())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_block(text: &str) -> Block {
        Block {
            style: "normal".to_string(),
            children: vec![Span {
                text: text.to_string(),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    fn list_block(text: &str, item: &str) -> Block {
        Block {
            list_item: Some(item.to_string()),
            ..text_block(text)
        }
    }

    #[test]
    fn consecutive_bullets_group_into_one_list() {
        let groups = group_blocks(vec![
            text_block("intro"),
            list_block("one", "bullet"),
            list_block("two", "bullet"),
            text_block("outro"),
        ]);
        assert_eq!(groups.len(), 3);
        match &groups[1] {
            BlockGroup::List { kind, items } => {
                assert_eq!(*kind, ListKind::Bullet);
                assert_eq!(items.len(), 2);
            }
            other => panic!("expected list group, got {other:?}"),
        }
    }

    #[test]
    fn changing_list_kind_starts_a_new_list() {
        let groups = group_blocks(vec![
            list_block("a", "bullet"),
            list_block("b", "number"),
            list_block("c", "number"),
        ]);
        assert_eq!(groups.len(), 2);
        assert!(matches!(
            groups[0],
            BlockGroup::List {
                kind: ListKind::Bullet,
                ..
            }
        ));
        assert!(matches!(
            &groups[1],
            BlockGroup::List {
                kind: ListKind::Number,
                items
            } if items.len() == 2
        ));
    }

    #[test]
    fn plain_text_joins_spans_and_blocks() {
        let blocks = vec![
            Block {
                children: vec![
                    Span {
                        text: "Built with ".to_string(),
                        ..Default::default()
                    },
                    Span {
                        text: "Rust".to_string(),
                        marks: vec!["strong".to_string()],
                        ..Default::default()
                    },
                ],
                ..Default::default()
            },
            text_block("and Leptos"),
        ];
        assert_eq!(plain_text(&blocks), "Built with Rust\nand Leptos");
    }

    #[test]
    fn block_deserializes_from_cms_shape() {
        let raw = serde_json::json!({
            "_key": "b1",
            "_type": "block",
            "style": "h2",
            "level": 1,
            "children": [
                { "_key": "s1", "_type": "span", "text": "Overview", "marks": [] }
            ],
            "markDefs": []
        });
        let block: Block = serde_json::from_value(raw).unwrap();
        assert_eq!(block.style, "h2");
        assert_eq!(block.list_item, None);
        assert_eq!(block.children[0].text, "Overview");
    }
}
