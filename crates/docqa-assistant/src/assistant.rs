use std::path::{Path, PathBuf};

use anyhow::anyhow;
use tracing::{debug, info, warn};

use docqa_core::chunker::Chunker;
use docqa_core::config::{expand_path, AssistantSettings, Config};
use docqa_core::error::{Error, Result};
use docqa_core::prompt::PromptTemplate;
use docqa_core::traits::{Embedder, Generator, TextExtractor};
use docqa_core::types::{Chunk, RetrievalResult};
use docqa_loader::ExtractorRegistry;
use docqa_vector::{Index, Retriever};

use crate::state::IndexState;

/// Owns the capabilities and the current [`IndexState`].
///
/// `index*` methods take `&mut self` and `answer`/`retrieve` take `&self`, so a
/// single owner can never answer against a half-replaced index. Share an
/// assistant across threads behind your own lock.
pub struct DocumentAssistant {
    chunker: Chunker,
    retriever: Retriever,
    top_k: usize,
    template: PromptTemplate,
    extractor: Box<dyn TextExtractor>,
    embedder: Box<dyn Embedder>,
    generator: Box<dyn Generator>,
    state: IndexState,
}

impl std::fmt::Debug for DocumentAssistant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentAssistant")
            .field("chunker", &self.chunker)
            .field("retriever", &self.retriever)
            .field("top_k", &self.top_k)
            .field("embedding_dim", &self.embedder.dim())
            .field("chunks", &self.state.chunk_count())
            .finish_non_exhaustive()
    }
}

impl DocumentAssistant {
    pub fn new(
        settings: AssistantSettings,
        extractor: Box<dyn TextExtractor>,
        embedder: Box<dyn Embedder>,
        generator: Box<dyn Generator>,
    ) -> Result<Self> {
        settings.validate()?;
        let chunker = Chunker::from_config(settings.chunking())?;
        Ok(Self {
            chunker,
            retriever: Retriever::with_min_score(settings.min_score),
            top_k: settings.top_k,
            template: settings.prompt,
            extractor,
            embedder,
            generator,
            state: IndexState::Empty,
        })
    }

    /// Uses the txt/pdf/docx [`ExtractorRegistry`] for loading documents.
    pub fn with_default_loader(
        settings: AssistantSettings,
        embedder: Box<dyn Embedder>,
        generator: Box<dyn Generator>,
    ) -> Result<Self> {
        Self::new(settings, Box::new(ExtractorRegistry::with_defaults()), embedder, generator)
    }

    /// Reads the `assistant` section of `config` (defaults when absent).
    pub fn from_config(
        config: &Config,
        extractor: Box<dyn TextExtractor>,
        embedder: Box<dyn Embedder>,
        generator: Box<dyn Generator>,
    ) -> Result<Self> {
        Self::new(AssistantSettings::from_config(config)?, extractor, embedder, generator)
    }

    pub fn state(&self) -> &IndexState { &self.state }

    pub fn is_indexed(&self) -> bool { self.state.is_indexed() }

    pub fn chunk_count(&self) -> usize { self.state.chunk_count() }

    pub fn top_k(&self) -> usize { self.top_k }

    /// Drops the current index.
    pub fn clear(&mut self) { self.state = IndexState::Empty; }

    /// Loads, chunks and embeds `documents` in order and replaces the index.
    /// `~` and `$VAR` in paths are expanded first.
    ///
    /// Returns the number of chunks indexed. On any error the previous index
    /// (or the empty state) is kept.
    pub fn index<P: AsRef<Path>>(&mut self, documents: &[P]) -> Result<usize> {
        let paths: Vec<PathBuf> = documents.iter().map(|p| expand_path(p.as_ref())).collect();
        self.load_all(&paths)
    }

    /// Same as [`index`](Self::index) for text that is already extracted.
    pub fn index_texts<S: AsRef<str>>(&mut self, texts: &[S]) -> Result<usize> {
        self.install(texts.iter().map(|t| (String::new(), t.as_ref().to_string())).collect())
    }

    /// Indexes every file under `dir` the extractor supports, in path order.
    /// `dir` is expanded like the paths given to [`index`](Self::index).
    pub fn index_directory(&mut self, dir: &Path) -> Result<usize> {
        let dir = expand_path(dir);
        let files = docqa_loader::discover(&dir, self.extractor.as_ref()).map_err(|e| Error::Upstream(e.into()))?;
        self.load_all(&files)
    }

    fn load_all(&mut self, paths: &[PathBuf]) -> Result<usize> {
        let mut texts = Vec::with_capacity(paths.len());
        for (i, path) in paths.iter().enumerate() {
            info!(document = i + 1, total = paths.len(), path = %path.display(), "loading document");
            let text = self.extractor.extract(path)?;
            texts.push((path.display().to_string(), text));
        }
        self.install(texts)
    }

    fn install(&mut self, documents: Vec<(String, String)>) -> Result<usize> {
        let mut chunks: Vec<Chunk> = Vec::new();
        for (source, text) in &documents {
            let before = chunks.len();
            for piece in self.chunker.split(text) {
                let position = chunks.len();
                chunks.push(Chunk::with_source(piece, position, source.as_str()));
            }
            debug!(source = %source, chunks = chunks.len() - before, "chunked document");
        }
        if chunks.is_empty() {
            warn!(documents = documents.len(), "no text chunks were created, keeping previous index");
            return Err(Error::EmptyCorpus);
        }

        let index = Index::build(chunks, self.embedder.as_ref())?;
        let count = index.len();
        let replaced = self.state.chunk_count();
        self.state = IndexState::Indexed(index);
        info!(documents = documents.len(), chunks = count, replaced, "index replaced");
        Ok(count)
    }

    /// Ranks the indexed chunks against `query`, best first, at most `top_k`.
    pub fn retrieve(&self, query: &str) -> Result<Vec<RetrievalResult>> {
        let index = self.state.index().ok_or(Error::NotIndexed)?;
        let query_vector = self
            .embedder
            .embed_batch(&[query.to_string()])?
            .into_iter()
            .next()
            .ok_or_else(|| Error::Upstream(anyhow!("embedder returned no vector for the query")))?;
        self.retriever.search(&query_vector, index, self.top_k)
    }

    /// The prompt `answer` would send for `query`.
    pub fn prompt_for(&self, query: &str) -> Result<String> {
        let retrieved = self.retrieve(query)?;
        if retrieved.is_empty() {
            warn!("no chunk passed the similarity threshold, prompting without context");
        }
        let context: Vec<&str> = retrieved.iter().map(|r| r.chunk.text.as_str()).collect();
        Ok(self.template.render(query, &context))
    }

    /// Retrieves context for `query` and returns the generator's text unchanged.
    pub fn answer(&self, query: &str) -> Result<String> {
        let prompt = self.prompt_for(query)?;
        debug!(prompt_chars = prompt.chars().count(), "calling generator");
        Ok(self.generator.generate(&prompt)?)
    }
}
