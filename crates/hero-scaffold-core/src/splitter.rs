//! Anchor-based text splitting.
//!
//! A matcher describes how to cut an existing file into named segments as a
//! [`SplitPlan`]: an ordered list of [`SplitStep`]s, each searching the text left
//! over by the step before it. The splitter knows nothing about the syntax of the
//! file; anchors are plain literals and only their first occurrence counts.
//!
//! ```text
//! text ──split(a1)──▶ seg1 | rest1 ──split(a2)──▶ seg2 | rest2 ─▶ tail
//! ```

use tracing::debug;

use crate::error::{Result, ScaffoldError};
use crate::segments::SegmentMap;

/// One cut in a [`SplitPlan`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitStep {
    /// Segment name bound to the text before the anchor.
    pub name: &'static str,
    /// Literal searched for in the remaining text.
    pub anchor: &'static str,
    /// If true the anchor ends the named segment; otherwise it starts the remainder.
    pub include_anchor: bool,
}

impl SplitStep {
    /// The anchor stays with the text that follows it.
    pub const fn before(name: &'static str, anchor: &'static str) -> Self {
        Self {
            name,
            anchor,
            include_anchor: false,
        }
    }

    /// The anchor is kept at the end of the named segment.
    pub const fn through(name: &'static str, anchor: &'static str) -> Self {
        Self {
            name,
            anchor,
            include_anchor: true,
        }
    }
}

/// Ordered split steps plus the name of the final remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitPlan {
    pub steps: &'static [SplitStep],
    pub tail: &'static str,
}

impl SplitPlan {
    /// Segment names this plan produces, in order.
    pub fn segment_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.steps
            .iter()
            .map(|s| s.name)
            .chain(std::iter::once(self.tail))
    }
}

/// Split `text` at the first occurrence of `anchor`.
pub fn split<'a>(text: &'a str, anchor: &str, include_anchor: bool) -> Result<(&'a str, &'a str)> {
    if anchor.is_empty() {
        return Err(ScaffoldError::EmptyAnchor);
    }
    let index = text
        .find(anchor)
        .ok_or_else(|| ScaffoldError::AnchorNotFound {
            anchor: anchor.to_string(),
        })?;
    let index = if include_anchor {
        index + anchor.len()
    } else {
        index
    };
    Ok(text.split_at(index))
}

/// Run every step of `plan` over `text` and collect the named segments.
pub fn gather_variables(text: &str, plan: &SplitPlan) -> Result<SegmentMap> {
    let (mut segments, tail) = plan.steps.iter().try_fold(
        (SegmentMap::new(), text),
        |(mut segments, remaining), step| {
            let (before, after) = split(remaining, step.anchor, step.include_anchor)?;
            debug!(segment = step.name, len = before.len(), "split");
            segments.insert(step.name, before)?;
            Ok::<_, ScaffoldError>((segments, after))
        },
    )?;
    segments.insert(plan.tail, tail)?;
    Ok(segments)
}
