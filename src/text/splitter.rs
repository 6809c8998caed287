// Copyright (c) 2025 SemSplit
//
// Licensed under MIT License
// See LICENSE file in the project root for full license information.

//! Punctuation-based sentence segmentation.

/// One sentence unit with byte offsets into the original input.
///
/// `text` is whitespace-normalized (internal runs collapsed to single
/// spaces); `start..end` covers the raw span it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Sentence {
    pub text: String,
    pub start: usize,
    pub end: usize,
}

/// Characters that terminate a sentence.
fn is_terminator(ch: char) -> bool {
    matches!(ch, '.' | '?' | '!')
}

/// Closing marks that stay attached to the sentence they end.
fn is_trailing_close(ch: char) -> bool {
    matches!(ch, '"' | '\'' | ')' | ']' | '\u{201D}' | '\u{2019}')
}

/// Splits `text` into ordered sentence units.
///
/// A run of terminators (`.`, `?`, `!`), plus any closing quotes or brackets
/// right after it, ends a sentence. Text without any terminator yields one
/// sentence; empty or whitespace-only input yields none.
pub fn split_sentences(text: &str) -> Vec<Sentence> {
    let mut sentences = Vec::new();
    let mut start: Option<usize> = None;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        if start.is_none() {
            if ch.is_whitespace() {
                continue;
            }
            start = Some(idx);
        }

        if is_terminator(ch) {
            let mut end = idx + ch.len_utf8();
            while let Some(&(next_idx, next_ch)) = chars.peek() {
                if is_terminator(next_ch) || is_trailing_close(next_ch) {
                    end = next_idx + next_ch.len_utf8();
                    chars.next();
                } else {
                    break;
                }
            }

            let begin = start.take().unwrap_or(idx);
            push_sentence(&mut sentences, text, begin, end);
        }
    }

    if let Some(begin) = start {
        push_sentence(&mut sentences, text, begin, text.len());
    }

    sentences
}

fn push_sentence(sentences: &mut Vec<Sentence>, text: &str, start: usize, end: usize) {
    let normalized = text[start..end]
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    if !normalized.is_empty() {
        sentences.push(Sentence {
            text: normalized,
            start,
            end,
        });
    }
}
