//! Pivot merge: deriving XX↔YY alignments from EN↔XX and EN↔YY.
//!
//! Both inputs put English on side A. Sentence splitting and merging across
//! translations means the two lists rarely group the same English span the
//! same way, so the merge buffers English indices on both sides until the
//! buffers cover the identical set of English sentences, at which point one
//! cross-lingual block can be emitted.
//!
//! English indices that cannot be matched on the other side are dropped
//! silently. That loss is a deliberate policy of the corpus analysis, not a
//! defect; [Composition::dropped_blocks] counts how often it happened.
use log::debug;

use super::block::{AlignmentBlock, AlignmentList, IndexSet};

/// Result of composing two English-pivot alignment lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composition {
    /// The derived XX↔YY list, ordered by English span.
    pub alignments: AlignmentList,
    /// Number of EN↔XX blocks the merge scanned without finding any
    /// comparable EN↔YY block. Blocks removed up front by the
    /// common-start truncation are not counted here.
    pub dropped_blocks: usize,
}

/// Outcome of scanning the EN↔YY list for a block comparable to the
/// accumulated English buffer of the XX side.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Scan {
    /// Candidate English set equals the buffer: a stable span is complete.
    Matched,
    /// Candidate strictly contains the buffer: keep accumulating XX blocks.
    CandidateSuperset,
    /// Candidate sits inside the buffer: fold it into the YY-side buffer and
    /// resume the scan after it.
    CandidateSubset { at: usize },
    /// YY list exhausted without a comparable block.
    Gap,
}

/// Walks `en_to_yy` from `from`, classifying the first block whose English
/// set is comparable (by containment) to `buffer`. Blocks before the first
/// comparable one are skipped without side effects.
fn scan_candidates(buffer: &IndexSet, en_to_yy: &[AlignmentBlock], from: usize) -> Scan {
    for (at, candidate) in en_to_yy.iter().enumerate().skip(from) {
        let ens = candidate.side_a();
        if buffer == ens {
            return Scan::Matched;
        }
        if buffer.is_subset(ens) {
            return Scan::CandidateSuperset;
        }
        if ens.is_subset(buffer) {
            return Scan::CandidateSubset { at };
        }
    }
    Scan::Gap
}

/// Drops leading blocks so both lists start at the same English position.
///
/// One language's pivot coverage may begin later than the other's; leading
/// uncovered English sentences are excluded from all derived alignments.
fn common_start<'a>(
    en_to_xx: &'a [AlignmentBlock],
    en_to_yy: &'a [AlignmentBlock],
) -> (&'a [AlignmentBlock], &'a [AlignmentBlock]) {
    let first_xx = en_to_xx.first().and_then(AlignmentBlock::min_a);
    let first_yy = en_to_yy.first().and_then(AlignmentBlock::min_a);
    let start = match (first_xx, first_yy) {
        (Some(x), Some(y)) => x.max(y),
        _ => return (&[], &[]),
    };

    let skip_before = |blocks: &'a [AlignmentBlock]| {
        let keep = blocks
            .iter()
            .position(|b| b.min_a().map_or(false, |m| m >= start));
        &blocks[keep.unwrap_or(blocks.len())..]
    };
    (skip_before(en_to_xx), skip_before(en_to_yy))
}

/// Composes the XX↔YY alignment list from the two English-pivot lists.
///
/// Preconditions (caller's responsibility): both lists ordered by increasing
/// minimum English index, English sets pairwise disjoint within each list.
pub fn compose(en_to_xx: &AlignmentList, en_to_yy: &AlignmentList) -> Composition {
    let (en_to_xx, en_to_yy) = common_start(en_to_xx.blocks(), en_to_yy.blocks());

    let mut ex_buffer = IndexSet::new();
    let mut ey_buffer = IndexSet::new();
    let mut ex_index = 0;
    let mut ey_index = 0;
    let mut matched_ens: Vec<IndexSet> = Vec::new();
    let mut dropped_blocks = 0;

    while ex_index < en_to_xx.len() {
        let ex_ens = en_to_xx[ex_index].side_a();
        ex_buffer.extend(ex_ens.iter().copied());

        // accumulated YY-side subsets may already cover the buffer; checked
        // before searching, so a gap further down cannot shadow it
        if ex_buffer == ey_buffer {
            matched_ens.push(std::mem::take(&mut ex_buffer));
            ey_buffer.clear();
            ex_index += 1;
            continue;
        }

        match scan_candidates(&ex_buffer, en_to_yy, ey_index) {
            Scan::Matched => {
                matched_ens.push(std::mem::take(&mut ex_buffer));
                ey_buffer.clear();
                ex_index += 1;
            }
            Scan::CandidateSuperset => {
                // buffer not complete yet, pull in the next XX block
                ex_index += 1;
            }
            Scan::CandidateSubset { at } => {
                ey_buffer.extend(en_to_yy[at].side_a().iter().copied());
                ey_index = at + 1;
            }
            Scan::Gap => {
                // current block's English indices are unrecoverable
                for en in ex_ens {
                    ex_buffer.remove(en);
                }
                dropped_blocks += 1;
                ex_index += 1;
            }
        }
    }

    if dropped_blocks > 0 {
        debug!("pivot merge dropped {dropped_blocks} unmatched block(s)");
    }

    Composition {
        alignments: project(en_to_xx, en_to_yy, &matched_ens),
        dropped_blocks,
    }
}

/// Span-to-pair projection: for each matched English span, unions the XX
/// (resp. YY) indices of every input block whose English set lies inside the
/// span. The merge only tracked English indices; this step recovers the two
/// language sides. Output keeps match emission order, which is monotonic in
/// English index.
fn project(
    en_to_xx: &[AlignmentBlock],
    en_to_yy: &[AlignmentBlock],
    matched_ens: &[IndexSet],
) -> AlignmentList {
    let mut seen: Vec<&IndexSet> = Vec::new();
    let mut list = AlignmentList::new();
    for ens in matched_ens {
        if seen.contains(&ens) {
            continue;
        }
        seen.push(ens);

        let collect_side = |blocks: &[AlignmentBlock]| -> IndexSet {
            blocks
                .iter()
                .filter(|b| b.side_a().is_subset(ens))
                .flat_map(|b| b.side_b().iter().copied())
                .collect()
        };
        list.push(AlignmentBlock::new(
            collect_side(en_to_xx),
            collect_side(en_to_yy),
        ));
    }
    list
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gen_list(pairs: &[(&[usize], &[usize])]) -> AlignmentList {
        pairs
            .iter()
            .map(|(a, b)| AlignmentBlock::from_indices(a, b))
            .collect()
    }

    fn blocks(pairs: &[(&[usize], &[usize])]) -> Vec<AlignmentBlock> {
        gen_list(pairs).blocks().to_vec()
    }

    #[test]
    fn test_one_to_one() {
        let en_xx = gen_list(&[(&[0], &[0]), (&[1], &[1, 2])]);
        let en_yy = gen_list(&[(&[0], &[0, 1]), (&[1], &[2])]);
        let composed = compose(&en_xx, &en_yy);
        assert_eq!(
            composed.alignments.blocks(),
            blocks(&[(&[0], &[0, 1]), (&[1, 2], &[2])])
        );
        assert_eq!(composed.dropped_blocks, 0);
    }

    #[test]
    fn test_interleaved_groupings_merge() {
        // XX merges English 0 and 1 where YY keeps them apart: the YY side
        // accumulates subsets until both buffers cover {0, 1}.
        let en_xx = gen_list(&[(&[0, 1], &[0]), (&[2], &[1])]);
        let en_yy = gen_list(&[(&[0], &[0]), (&[1], &[1]), (&[2], &[2])]);
        let composed = compose(&en_xx, &en_yy);
        assert_eq!(
            composed.alignments.blocks(),
            blocks(&[(&[0], &[0, 1]), (&[1], &[2])])
        );
        assert_eq!(composed.dropped_blocks, 0);
    }

    #[test]
    fn test_both_sides_accumulate() {
        // groupings interleave on both sides; the merge subdivides nothing
        // but joins the whole {0, 1, 2} English span into one block
        let en_xx = gen_list(&[(&[0], &[0]), (&[1, 2], &[1])]);
        let en_yy = gen_list(&[(&[0, 1], &[0]), (&[2], &[1])]);
        let composed = compose(&en_xx, &en_yy);
        assert_eq!(
            composed.alignments.blocks(),
            blocks(&[(&[0, 1], &[0, 1])])
        );
        assert_eq!(composed.dropped_blocks, 0);
    }

    #[test]
    fn test_gap_drop() {
        // English index 1 is unknown to the YY side: the scan exhausts the
        // YY list without a comparable block, the XX block is dropped and
        // counted, and the alignment emitted before it survives
        let en_xx = gen_list(&[(&[0], &[0]), (&[1], &[1])]);
        let en_yy = gen_list(&[(&[0], &[0]), (&[2], &[1])]);
        let composed = compose(&en_xx, &en_yy);
        assert_eq!(composed.alignments.blocks(), blocks(&[(&[0], &[0])]));
        assert_eq!(composed.dropped_blocks, 1);
    }

    #[test]
    fn test_leading_blocks_truncated() {
        // YY coverage starts at English 2; earlier XX blocks are excluded
        let en_xx = gen_list(&[(&[0], &[0]), (&[1], &[1]), (&[2], &[2])]);
        let en_yy = gen_list(&[(&[2], &[0]), (&[3], &[1])]);
        let composed = compose(&en_xx, &en_yy);
        assert_eq!(composed.alignments.blocks(), blocks(&[(&[2], &[0])]));
    }

    #[test]
    fn test_trailing_partial_dropped() {
        // the final XX block only ever sees a superset candidate, so its
        // buffer never resolves and is not emitted
        let en_xx = gen_list(&[(&[0], &[0]), (&[1], &[1])]);
        let en_yy = gen_list(&[(&[0], &[0]), (&[1, 2], &[1])]);
        let composed = compose(&en_xx, &en_yy);
        assert_eq!(composed.alignments.blocks(), blocks(&[(&[0], &[0])]));
        assert_eq!(composed.dropped_blocks, 0);
    }

    #[test]
    fn test_empty_inputs() {
        let empty = AlignmentList::new();
        let some = gen_list(&[(&[0], &[0])]);
        assert!(compose(&empty, &some).alignments.is_empty());
        assert!(compose(&some, &empty).alignments.is_empty());
        assert!(compose(&empty, &empty).alignments.is_empty());
    }

    #[test]
    fn test_projection_unions_whole_span() {
        // once {1, 2} is matched, both XX blocks inside the span contribute
        // their language-side indices
        let en_xx = gen_list(&[(&[0], &[0]), (&[1], &[1]), (&[2], &[2, 3])]);
        let en_yy = gen_list(&[(&[0], &[0]), (&[1, 2], &[1])]);
        let composed = compose(&en_xx, &en_yy);
        assert_eq!(
            composed.alignments.blocks(),
            blocks(&[(&[0], &[0]), (&[1, 2, 3], &[1])])
        );
    }
}
