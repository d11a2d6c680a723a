use crate::models::{BlockKind, ContentBlock};

/// Direction for [`Cmd::MoveBlock`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}

/// An edit to an article draft's block sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum Cmd {
    /// Append a fresh block with the editor defaults for `kind`.
    AddBlock { kind: BlockKind },
    /// Append already-built blocks (e.g. from a paste) in order.
    AppendBlocks { blocks: Vec<ContentBlock> },
    /// Replace the block at `index` with an edited version.
    UpdateBlock { index: usize, block: ContentBlock },
    RemoveBlock { index: usize },
    /// Swap with the neighbour; a no-op at either end of the sequence.
    MoveBlock {
        index: usize,
        direction: MoveDirection,
    },
}
