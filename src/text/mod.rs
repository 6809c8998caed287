// Copyright (c) 2025 SemSplit
//
// Licensed under MIT License
// See LICENSE file in the project root for full license information.

pub mod semantic;
pub mod splitter;

pub use semantic::{ChunkerConfig, SemanticChunker};
pub use splitter::{split_sentences, Sentence};
