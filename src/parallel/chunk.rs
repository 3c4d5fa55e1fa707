/// Maximum number of characters carried by a single chunk
pub const MAX_CHUNK_SIZE: usize = 1024;

/// Indexed, immutable fragment of the input text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    index: usize,
    payload: String,
}

impl Chunk {
    pub fn new(index: usize, payload: impl Into<String>) -> Self {
        Self {
            index,
            payload: payload.into(),
        }
    }

    /// Position of this chunk in the original sequence
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn payload(&self) -> &str {
        &self.payload
    }

    pub fn into_parts(self) -> (usize, String) {
        (self.index, self.payload)
    }
}

/// Ordered chunks derived from one input text
///
/// Splitting counts characters, not bytes, so a chunk boundary never lands
/// inside a multi-byte UTF-8 sequence.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChunkSequence {
    chunks: Vec<Chunk>,
}

impl ChunkSequence {
    /// Split `text` into consecutive fragments of `MAX_CHUNK_SIZE` characters
    pub fn split(text: &str) -> Self {
        Self::split_with(text, MAX_CHUNK_SIZE)
    }

    pub(crate) fn split_with(text: &str, max_size: usize) -> Self {
        let max_size = max_size.max(1);
        let mut chunks = Vec::new();
        let mut start = 0;
        let mut count = 0;

        for (offset, _) in text.char_indices() {
            if count == max_size {
                chunks.push(Chunk::new(chunks.len(), &text[start..offset]));
                start = offset;
                count = 0;
            }
            count += 1;
        }

        // Empty text yields no chunks at all
        if count > 0 {
            chunks.push(Chunk::new(chunks.len(), &text[start..]));
        }

        Self { chunks }
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Chunk> {
        self.chunks.iter()
    }
}

impl IntoIterator for ChunkSequence {
    type Item = Chunk;
    type IntoIter = std::vec::IntoIter<Chunk>;

    fn into_iter(self) -> Self::IntoIter {
        self.chunks.into_iter()
    }
}
