//! Footnote map building

use crate::normalize::footnote_id;
use crate::source_model::FootnoteRecord;
use crate::unified_document::{FootnoteMap, OutParagraph};

/// Build the footnote lookup keyed by decimal id
///
/// Records whose id is not a whole number above zero are skipped. A later
/// record with the same id replaces the earlier one.
pub fn build_footnote_map(records: &[FootnoteRecord]) -> FootnoteMap {
    let mut map = FootnoteMap::new();

    for record in records {
        let Some(id) = footnote_id(record.id) else {
            log::debug!("Skipping footnote record with invalid id {}", record.id);
            continue;
        };
        if map
            .insert(id.to_string(), footnote_paragraphs(&record.text))
            .is_some()
        {
            log::debug!("Footnote {} defined more than once; keeping the last", id);
        }
    }

    map
}

/// One unstyled paragraph per line of footnote text
///
/// Carriage returns are dropped; empty text still gives one empty paragraph.
pub fn footnote_paragraphs(text: &str) -> Vec<OutParagraph> {
    text.replace('\r', "")
        .split('\n')
        .map(OutParagraph::plain)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_ids_are_dropped() {
        let map = build_footnote_map(&[
            FootnoteRecord::new(0.0, "zero"),
            FootnoteRecord::new(-1.0, "negative"),
            FootnoteRecord::new(f64::NAN, "abc"),
            FootnoteRecord::new(1.0, "kept"),
        ]);
        assert_eq!(map.len(), 1);
        assert_eq!(map["1"], vec![OutParagraph::plain("kept")]);
    }

    #[test]
    fn test_last_duplicate_wins() {
        let map = build_footnote_map(&[
            FootnoteRecord::new(3.0, "first"),
            FootnoteRecord::new(3.0, "second\nline"),
        ]);
        assert_eq!(map.len(), 1);
        assert_eq!(
            map["3"],
            vec![OutParagraph::plain("second"), OutParagraph::plain("line")]
        );
    }

    #[test]
    fn test_footnote_paragraphs() {
        assert_eq!(footnote_paragraphs(""), vec![OutParagraph::empty()]);
        assert_eq!(
            footnote_paragraphs("a\r\n\r\nb"),
            vec![
                OutParagraph::plain("a"),
                OutParagraph::empty(),
                OutParagraph::plain("b")
            ]
        );
    }

    #[test]
    fn test_no_records_gives_empty_map() {
        assert!(build_footnote_map(&[]).is_empty());
    }
}
