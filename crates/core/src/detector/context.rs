use std::path::{Path, PathBuf};

use crate::finding::SourceLocation;

/// Provides detectors with access to raw contract source text.
///
/// Detection is purely lexical: the context owns no parse tree, only the
/// text itself plus an optional compiled-bytecode slot that is accepted for
/// forward compatibility and currently unused by every built-in detector.
pub struct AnalysisContext<'a> {
    file: &'a Path,
    source: &'a str,
    bytecode: Option<&'a [u8]>,
}

impl<'a> AnalysisContext<'a> {
    pub fn new(file: &'a Path, source: &'a str) -> Self {
        Self {
            file,
            source,
            bytecode: None,
        }
    }

    pub fn with_bytecode(mut self, bytecode: &'a [u8]) -> Self {
        self.bytecode = Some(bytecode);
        self
    }

    pub fn file(&self) -> &Path {
        self.file
    }

    pub fn source(&self) -> &str {
        self.source
    }

    pub fn bytecode(&self) -> Option<&[u8]> {
        self.bytecode
    }

    /// 1-based line number of a byte offset into the source.
    pub fn line_of(&self, offset: usize) -> usize {
        let offset = offset.min(self.source.len());
        self.source[..offset].bytes().filter(|b| *b == b'\n').count() + 1
    }

    /// Source line containing `offset`, trimmed, for use as a snippet.
    pub fn line_text(&self, offset: usize) -> Option<String> {
        let line = self.line_of(offset);
        self.source
            .lines()
            .nth(line.saturating_sub(1))
            .map(|l| l.trim().to_string())
    }

    /// Build a location for the match at `offset`.
    pub fn location(&self, offset: usize) -> SourceLocation {
        SourceLocation {
            file: self.file.to_path_buf(),
            line: self.line_of(offset),
            snippet: self.line_text(offset),
        }
    }
}
