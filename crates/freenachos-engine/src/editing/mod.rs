/*!
 * # Draft Editing
 *
 * An [`ArticleDraft`] is the article being assembled in the editor: its
 * metadata (title, slug, category, excerpt, read time) and the ordered
 * block sequence produced by paste imports and manual edits.
 *
 * ## Command-Based Editing
 *
 * Every change to the block sequence goes through [`Cmd`] and
 * [`ArticleDraft::apply`], which returns a [`Patch`] naming the touched
 * positions and the draft's new version. Out-of-range indices are errors;
 * moving the first block up or the last block down is a no-op.
 *
 * ## Paste Import
 *
 * [`ArticleDraft::import_paste`] parses a paste and appends its blocks,
 * optionally promoting a leading level-1 header to the title and seeding
 * the excerpt from a leading paragraph.
 *
 * ## Module Structure
 *
 * - [`commands`] - Edit commands (`Cmd`, `MoveDirection`)
 * - [`draft`] - `ArticleDraft`, paste import and slug generation
 * - [`patch`] - Result of applying a command
 */

pub mod commands;
pub mod draft;
pub mod patch;

pub use commands::{Cmd, MoveDirection};
pub use draft::{ArticleDraft, ImportOptions, ImportSummary, generate_slug};
pub use patch::Patch;

use crate::parsing::ParseError;

#[derive(Debug, thiserror::Error)]
pub enum EditError {
    #[error("Block index {index} out of bounds (draft has {len} blocks)")]
    IndexOutOfBounds { index: usize, len: usize },
    #[error(transparent)]
    Parse(#[from] ParseError),
}
