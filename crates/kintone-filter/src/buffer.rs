//! Ordered clause storage.
//!
//! A [`ClauseBuffer`] holds finished clause text as a flat list of
//! [`Fragment`]s. Each fragment records the conjunction joining it to what
//! came before; the first fragment's conjunction is only read when the whole
//! buffer is spliced into another one.
//!
//! Splicing keeps the fragments flat. Grouping is tracked with per-fragment
//! parenthesis counters so that a merged sub-expression can be rendered as
//! `A and (B or C)` while fragment count and conjunctions stay unchanged.

use std::fmt;

use tracing::trace;

/// Boolean connective between two fragments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Conjunction {
    And,
    Or,
}

impl Conjunction {
    /// Returns the grammar token.
    pub fn as_str(self) -> &'static str {
        match self {
            Conjunction::And => "and",
            Conjunction::Or => "or",
        }
    }
}

impl fmt::Display for Conjunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How spliced sub-expressions are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Grouping {
    /// Multi-clause sub-expressions are wrapped in parentheses.
    #[default]
    Parenthesized,
    /// Sub-expressions are rendered inline with no parentheses, so
    /// `A and (B or C)` comes out as `A and B or C`.
    Flat,
}

/// One finished clause in a buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    text: String,
    conjunction: Option<Conjunction>,
    opens: usize,
    closes: usize,
}

impl Fragment {
    fn new(text: String, conjunction: Option<Conjunction>) -> Self {
        Fragment {
            text,
            conjunction,
            opens: 0,
            closes: 0,
        }
    }

    /// The clause text, without grouping parentheses.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The conjunction joining this fragment to the previous one.
    pub fn conjunction(&self) -> Option<Conjunction> {
        self.conjunction
    }

    /// Number of groups opening at this fragment.
    pub fn opens(&self) -> usize {
        self.opens
    }

    /// Number of groups closing after this fragment.
    pub fn closes(&self) -> usize {
        self.closes
    }
}

/// Ordered, append-only sequence of clause fragments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClauseBuffer {
    fragments: Vec<Fragment>,
    pending: Option<Conjunction>,
}

impl ClauseBuffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        ClauseBuffer::default()
    }

    /// Appends pre-validated clause text.
    ///
    /// The text is trusted as-is.
    pub fn append(&mut self, text: impl Into<String>, conjunction: Option<Conjunction>) {
        let text = text.into();
        trace!(fragment = %text, ?conjunction, "append fragment");
        self.fragments.push(Fragment::new(text, conjunction));
    }

    /// Splices every fragment of `other` onto the end of this buffer.
    ///
    /// The first spliced fragment takes `other`'s pending conjunction; the
    /// rest keep their own. A buffer of two or more clauses is marked as a
    /// group unless it already is one. An empty `other` is a no-op.
    pub fn append_buffer(&mut self, other: ClauseBuffer) {
        let ClauseBuffer {
            mut fragments,
            pending,
        } = other;
        if fragments.is_empty() {
            return;
        }

        let needs_group = fragments.len() > 1 && !is_single_group(&fragments);
        if let Some(first) = fragments.first_mut() {
            first.conjunction = pending;
            if needs_group {
                first.opens += 1;
            }
        }
        if needs_group {
            if let Some(last) = fragments.last_mut() {
                last.closes += 1;
            }
        }

        trace!(count = fragments.len(), ?pending, grouped = needs_group, "splice buffer");
        self.fragments.extend(fragments);
    }

    /// Sets the conjunction stamped on the first fragment when this buffer
    /// is later spliced into another one.
    pub fn set_pending_conjunction(&mut self, conjunction: Conjunction) {
        self.pending = Some(conjunction);
    }

    /// Returns the pending conjunction, if one was set.
    pub fn pending_conjunction(&self) -> Option<Conjunction> {
        self.pending
    }

    /// Returns `true` if the buffer holds no fragments.
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Number of fragments.
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// The fragments in insertion order.
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Renders the buffer with sub-expressions parenthesized.
    pub fn serialize(&self) -> String {
        self.serialize_with(Grouping::Parenthesized)
    }

    /// Renders the buffer as `text [conj text]*`.
    ///
    /// The first fragment's conjunction is never written.
    pub fn serialize_with(&self, grouping: Grouping) -> String {
        let mut out = String::new();
        for (i, fragment) in self.fragments.iter().enumerate() {
            if i > 0 {
                out.push(' ');
                if let Some(conj) = fragment.conjunction {
                    out.push_str(conj.as_str());
                    out.push(' ');
                }
            }
            if grouping == Grouping::Parenthesized {
                out.extend(std::iter::repeat('(').take(fragment.opens));
                out.push_str(&fragment.text);
                out.extend(std::iter::repeat(')').take(fragment.closes));
            } else {
                out.push_str(&fragment.text);
            }
        }
        out
    }
}

impl fmt::Display for ClauseBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}

// A run of fragments is a single group when the outermost parenthesis
// opened on the first fragment only closes on the last one.
fn is_single_group(fragments: &[Fragment]) -> bool {
    let Some(first) = fragments.first() else {
        return false;
    };
    if first.opens == 0 {
        return false;
    }
    let last = fragments.len() - 1;
    let mut depth = 0usize;
    for (i, fragment) in fragments.iter().enumerate() {
        depth += fragment.opens;
        depth = depth.saturating_sub(fragment.closes);
        if depth == 0 && i < last {
            return false;
        }
    }
    true
}
