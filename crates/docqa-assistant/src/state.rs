use docqa_vector::Index;

/// Whether an assistant currently holds an index.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum IndexState {
    #[default]
    Empty,
    Indexed(Index),
}

impl IndexState {
    pub fn index(&self) -> Option<&Index> {
        match self {
            Self::Empty => None,
            Self::Indexed(index) => Some(index),
        }
    }

    pub fn is_indexed(&self) -> bool { matches!(self, Self::Indexed(_)) }

    /// Number of indexed chunks; `0` when empty.
    pub fn chunk_count(&self) -> usize { self.index().map_or(0, Index::len) }
}
