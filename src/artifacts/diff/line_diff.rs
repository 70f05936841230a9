//! Line-level diff
//!
//! Texts are split into lines that keep their `\n` terminator and compared
//! with Myers' algorithm (via `similar`). The resulting changes are grouped
//! into segments: maximal runs of unchanged, removed or added lines. Inside a
//! changed region the removed segment always comes before the added one.

use derive_new::new;
use similar::{Algorithm, ChangeTag, TextDiff};

/// A run of lines sharing the same change kind
///
/// `added` and `removed` are never both set; neither set means unchanged.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Segment {
    pub value: String,
    pub added: bool,
    pub removed: bool,
}

impl Segment {
    pub fn unchanged(value: String) -> Self {
        Segment::new(value, false, false)
    }

    pub fn added(value: String) -> Self {
        Segment::new(value, true, false)
    }

    pub fn removed(value: String) -> Self {
        Segment::new(value, false, true)
    }

    pub fn is_unchanged(&self) -> bool {
        !self.added && !self.removed
    }
}

/// Anything that can compare two texts line by line
pub trait LineDiff {
    fn diff_lines(&self, before: &str, after: &str) -> Vec<Segment>;
}

/// Default line differ, Myers' algorithm in linear space
#[derive(Debug, Clone, Copy, Default)]
pub struct MyersLineDiff;

impl LineDiff for MyersLineDiff {
    fn diff_lines(&self, before: &str, after: &str) -> Vec<Segment> {
        let diff = TextDiff::configure()
            .algorithm(Algorithm::Myers)
            .diff_lines(before, after);

        group_changes(
            diff.iter_all_changes()
                .map(|change| (change.tag(), change.value())),
        )
    }
}

fn group_changes<'t>(changes: impl Iterator<Item = (ChangeTag, &'t str)>) -> Vec<Segment> {
    let mut segments = Vec::new();
    let (mut equal, mut removed, mut added) = (String::new(), String::new(), String::new());

    for (tag, value) in changes {
        match tag {
            ChangeTag::Equal => {
                flush_changes(&mut segments, &mut removed, &mut added);
                equal.push_str(value);
            }
            ChangeTag::Delete => {
                flush_equal(&mut segments, &mut equal);
                removed.push_str(value);
            }
            ChangeTag::Insert => {
                flush_equal(&mut segments, &mut equal);
                added.push_str(value);
            }
        }
    }

    flush_equal(&mut segments, &mut equal);
    flush_changes(&mut segments, &mut removed, &mut added);

    segments
}

fn flush_equal(segments: &mut Vec<Segment>, equal: &mut String) {
    if !equal.is_empty() {
        segments.push(Segment::unchanged(std::mem::take(equal)));
    }
}

fn flush_changes(segments: &mut Vec<Segment>, removed: &mut String, added: &mut String) {
    if !removed.is_empty() {
        segments.push(Segment::removed(std::mem::take(removed)));
    }
    if !added.is_empty() {
        segments.push(Segment::added(std::mem::take(added)));
    }
}
