use tapgraph_core::EdgeRecord;

/// Flattens records into `(source, target, bit)` triples for comparison with
/// the reference fixtures.
#[must_use]
pub fn triples(records: &[EdgeRecord]) -> Vec<(usize, usize, u8)> {
    records
        .iter()
        .map(|edge| (edge.source(), edge.target(), edge.bit()))
        .collect()
}
