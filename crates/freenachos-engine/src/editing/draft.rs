use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::editing::{Cmd, EditError, MoveDirection, Patch};
use crate::models::{BlockKind, ContentBlock};
use crate::parsing::{PasteFormat, parse_as};

pub const DEFAULT_CATEGORY: &str = "Strategy";
pub const DEFAULT_READ_TIME: &str = "5 min";
pub const DEFAULT_EXCERPT_CHARS: usize = 200;

/// Options controlling how a paste is merged into a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportOptions {
    /// Promote a leading level-1 header to the article title.
    pub extract_title: bool,
    /// Maximum excerpt length in characters before `...` is appended.
    pub excerpt_chars: usize,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            extract_title: true,
            excerpt_chars: DEFAULT_EXCERPT_CHARS,
        }
    }
}

/// What [`ArticleDraft::import_paste`] did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub appended: usize,
}

/// An article being edited: metadata plus its ordered block sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDraft {
    pub title: String,
    pub slug: String,
    pub category: String,
    pub excerpt: String,
    pub read_time: String,
    pub blocks: Vec<ContentBlock>,
    #[serde(skip)]
    version: u64,
}

impl Default for ArticleDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            slug: String::new(),
            category: DEFAULT_CATEGORY.to_string(),
            excerpt: String::new(),
            read_time: DEFAULT_READ_TIME.to_string(),
            blocks: vec![],
            version: 0,
        }
    }
}

impl ArticleDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// The explicit slug, or one derived from the title.
    pub fn slug_or_generated(&self) -> String {
        if self.slug.is_empty() {
            generate_slug(&self.title)
        } else {
            self.slug.clone()
        }
    }

    pub fn block_mut(&mut self, index: usize) -> Result<&mut ContentBlock, EditError> {
        let len = self.blocks.len();
        self.blocks
            .get_mut(index)
            .ok_or(EditError::IndexOutOfBounds { index, len })
    }

    pub fn add_block(&mut self, kind: BlockKind) -> Patch {
        let len = self.blocks.len();
        self.blocks.push(ContentBlock::default_for(kind));
        self.bump_version(len..len + 1)
    }

    pub fn remove_block(&mut self, index: usize) -> Result<Patch, EditError> {
        self.apply(Cmd::RemoveBlock { index })
    }

    pub fn move_block(
        &mut self,
        index: usize,
        direction: MoveDirection,
    ) -> Result<Patch, EditError> {
        self.apply(Cmd::MoveBlock { index, direction })
    }

    fn bump_version(&mut self, changed: Range<usize>) -> Patch {
        if !changed.is_empty() {
            self.version += 1;
        }
        Patch {
            changed,
            version: self.version,
        }
    }

    /// Applies an edit to the block sequence.
    pub fn apply(&mut self, cmd: Cmd) -> Result<Patch, EditError> {
        let len = self.blocks.len();
        let check = |index: usize| {
            if index < len {
                Ok(index)
            } else {
                Err(EditError::IndexOutOfBounds { index, len })
            }
        };

        let changed = match cmd {
            Cmd::AddBlock { kind } => return Ok(self.add_block(kind)),
            Cmd::AppendBlocks { blocks } => {
                self.blocks.extend(blocks);
                len..self.blocks.len()
            }
            Cmd::UpdateBlock { index, block } => {
                let index = check(index)?;
                self.blocks[index] = block;
                index..index + 1
            }
            Cmd::RemoveBlock { index } => {
                let index = check(index)?;
                self.blocks.remove(index);
                index..index + 1
            }
            Cmd::MoveBlock { index, direction } => {
                let index = check(index)?;
                let target = match direction {
                    MoveDirection::Up => index.checked_sub(1),
                    MoveDirection::Down => Some(index + 1).filter(|&t| t < len),
                };
                match target {
                    Some(target) => {
                        self.blocks.swap(index, target);
                        index.min(target)..index.max(target) + 1
                    }
                    None => index..index,
                }
            }
        };

        Ok(self.bump_version(changed))
    }

    /// Parses a paste and merges it into the draft.
    ///
    /// A leading level-1 header becomes the title (when enabled) and is not
    /// appended. If the draft has no excerpt, a leading paragraph seeds one.
    /// Whitespace-only pastes change nothing.
    pub fn import_paste(
        &mut self,
        paste: &str,
        options: &ImportOptions,
    ) -> Result<ImportSummary, EditError> {
        self.import_paste_as(paste, PasteFormat::detect(paste), options)
    }

    /// [`import_paste`](Self::import_paste) with an explicit paste format.
    pub fn import_paste_as(
        &mut self,
        paste: &str,
        format: PasteFormat,
        options: &ImportOptions,
    ) -> Result<ImportSummary, EditError> {
        if paste.trim().is_empty() {
            return Ok(ImportSummary::default());
        }

        let mut blocks = parse_as(paste, format)?;
        let mut summary = ImportSummary::default();

        if options.extract_title
            && let Some(ContentBlock::Header { level: 1, content }) = blocks.first()
        {
            let title = content.clone();
            blocks.remove(0);
            if !title.is_empty() {
                self.title = title.clone();
                summary.title = Some(title);
            }
        }

        if self.excerpt.is_empty()
            && let Some(ContentBlock::Paragraph { content }) = blocks.first()
        {
            let excerpt = make_excerpt(content, options.excerpt_chars);
            self.excerpt = excerpt.clone();
            summary.excerpt = Some(excerpt);
        }

        summary.appended = blocks.len();
        log::debug!(
            "importing paste: {} blocks, title extracted: {}",
            summary.appended,
            summary.title.is_some()
        );
        self.apply(Cmd::AppendBlocks { blocks })?;
        Ok(summary)
    }
}

/// Truncates to `max_chars` characters, appending `...` when cut.
fn make_excerpt(content: &str, max_chars: usize) -> String {
    let mut excerpt: String = content.chars().take(max_chars).collect();
    if content.chars().count() > max_chars {
        excerpt.push_str("...");
    }
    excerpt
}

/// Lowercases `title` and joins its alphanumeric runs with `-`.
pub fn generate_slug(title: &str) -> String {
    let lower = title.to_lowercase();
    let mut slug = String::with_capacity(lower.len());
    let mut pending_dash = false;
    for c in lower.chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else {
            pending_dash = true;
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn draft_with(n: usize) -> ArticleDraft {
        let mut draft = ArticleDraft::new();
        draft.blocks = (0..n)
            .map(|i| ContentBlock::paragraph(format!("p{i}")))
            .collect();
        draft
    }

    fn contents(draft: &ArticleDraft) -> Vec<&str> {
        draft
            .blocks
            .iter()
            .filter_map(ContentBlock::inline_content)
            .collect()
    }

    #[rstest]
    #[case("Pot Odds 101", "pot-odds-101")]
    #[case("  --Why I fold AA?!  ", "why-i-fold-aa")]
    #[case("Café & Chips", "caf-chips")]
    #[case("", "")]
    fn slugs(#[case] title: &str, #[case] slug: &str) {
        assert_eq!(generate_slug(title), slug);
    }

    #[test]
    fn new_draft_defaults() {
        let draft = ArticleDraft::new();
        assert_eq!(draft.category, "Strategy");
        assert_eq!(draft.read_time, "5 min");
        assert!(draft.blocks.is_empty());
    }

    #[test]
    fn slug_falls_back_to_title() {
        let mut draft = ArticleDraft::new();
        draft.title = "River Play".to_string();
        assert_eq!(draft.slug_or_generated(), "river-play");
        draft.slug = "custom".to_string();
        assert_eq!(draft.slug_or_generated(), "custom");
    }

    #[test]
    fn add_block_uses_editor_defaults() {
        let mut draft = ArticleDraft::new();
        let patch = draft
            .apply(Cmd::AddBlock {
                kind: BlockKind::Callout,
            })
            .unwrap();
        assert_eq!(patch.changed, 0..1);
        assert_eq!(patch.version, 1);
        assert_eq!(draft.blocks[0].kind(), BlockKind::Callout);
    }

    #[test]
    fn move_swaps_neighbours() {
        let mut draft = draft_with(3);
        let patch = draft.move_block(2, MoveDirection::Up).unwrap();
        assert_eq!(patch.changed, 1..3);
        assert_eq!(contents(&draft), vec!["p0", "p2", "p1"]);
    }

    #[test]
    fn move_past_ends_is_noop() {
        let mut draft = draft_with(2);
        let up = draft
            .apply(Cmd::MoveBlock {
                index: 0,
                direction: MoveDirection::Up,
            })
            .unwrap();
        let down = draft
            .apply(Cmd::MoveBlock {
                index: 1,
                direction: MoveDirection::Down,
            })
            .unwrap();
        assert!(up.is_noop() && down.is_noop());
        assert_eq!(draft.version(), 0);
        assert_eq!(contents(&draft), vec!["p0", "p1"]);
    }

    #[test]
    fn remove_and_update() {
        let mut draft = draft_with(3);
        draft.remove_block(1).unwrap();
        draft
            .apply(Cmd::UpdateBlock {
                index: 1,
                block: ContentBlock::paragraph("edited"),
            })
            .unwrap();
        assert_eq!(contents(&draft), vec!["p0", "edited"]);
    }

    #[test]
    fn out_of_range_index_is_an_error() {
        let mut draft = draft_with(1);
        let err = draft.apply(Cmd::RemoveBlock { index: 5 }).unwrap_err();
        assert!(matches!(
            err,
            EditError::IndexOutOfBounds { index: 5, len: 1 }
        ));
        assert!(draft.block_mut(1).is_err());
        assert!(draft.move_block(1, MoveDirection::Down).is_err());
    }

    #[test]
    fn add_block_appends_at_end() {
        let mut draft = draft_with(1);
        let patch = draft.add_block(BlockKind::List);
        assert_eq!(patch.changed, 1..2);
        assert_eq!(
            draft.blocks[1],
            ContentBlock::List {
                items: vec![String::new()]
            }
        );
    }

    #[test]
    fn block_mut_edits_in_place() {
        let mut draft = draft_with(1);
        if let ContentBlock::Paragraph { content } = draft.block_mut(0).unwrap() {
            content.push_str(" more");
        }
        assert_eq!(contents(&draft), vec!["p0 more"]);
    }

    #[test]
    fn import_extracts_title_and_excerpt() {
        let mut draft = ArticleDraft::new();
        let summary = draft
            .import_paste(
                "# Three-Bet Basics\n\nWhy three-bet light.\n\n- Position",
                &ImportOptions::default(),
            )
            .unwrap();
        assert_eq!(summary.title.as_deref(), Some("Three-Bet Basics"));
        assert_eq!(summary.excerpt.as_deref(), Some("Why three-bet light."));
        assert_eq!(summary.appended, 2);
        assert_eq!(draft.title, "Three-Bet Basics");
        assert_eq!(draft.blocks[0], ContentBlock::paragraph("Why three-bet light."));
    }

    #[test]
    fn import_keeps_header_when_title_extraction_off() {
        let mut draft = ArticleDraft::new();
        let options = ImportOptions {
            extract_title: false,
            ..ImportOptions::default()
        };
        draft.import_paste("# Heading\nText", &options).unwrap();
        assert_eq!(draft.title, "");
        assert_eq!(draft.blocks[0], ContentBlock::header(1, "Heading"));
    }

    #[test]
    fn import_keeps_existing_excerpt_and_appends() {
        let mut draft = draft_with(1);
        draft.excerpt = "Hand-written".to_string();
        draft
            .import_paste("New paragraph", &ImportOptions::default())
            .unwrap();
        assert_eq!(draft.excerpt, "Hand-written");
        assert_eq!(contents(&draft), vec!["p0", "New paragraph"]);
    }

    #[test]
    fn long_excerpt_is_truncated() {
        let mut draft = ArticleDraft::new();
        let options = ImportOptions {
            excerpt_chars: 5,
            ..ImportOptions::default()
        };
        draft.import_paste("Abcdefgh", &options).unwrap();
        assert_eq!(draft.excerpt, "Abcde...");
    }

    #[test]
    fn whitespace_paste_changes_nothing() {
        let mut draft = ArticleDraft::new();
        let summary = draft
            .import_paste(" \n ", &ImportOptions::default())
            .unwrap();
        assert_eq!(summary, ImportSummary::default());
        assert_eq!(draft.version(), 0);
    }
}
