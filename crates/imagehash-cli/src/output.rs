//! Tab-separated renderings of fingerprints and distances

use imagehash_core::{Distance, Fingerprint};

/// `<path1>\t<hex1>\t<path2>\t<hex2>\t<distance>`
pub fn format_comparison(
    first_label: &str,
    first: &Fingerprint,
    second_label: &str,
    second: &Fingerprint,
    distance: Distance,
) -> String {
    format!(
        "{}\t{}\t{}\t{}\t{}",
        first_label, first, second_label, second, distance
    )
}

/// `<path>\t<hex>`
pub fn format_hash(label: &str, fingerprint: &Fingerprint) -> String {
    format!("{}\t{}", label, fingerprint)
}

/// Header row of labels, then one row per image with its distances
pub fn format_matrix(labels: &[String], matrix: &[Vec<Distance>]) -> String {
    let mut lines = Vec::with_capacity(labels.len() + 1);
    lines.push(format!("\t{}", labels.join("\t")));

    for (label, row) in labels.iter().zip(matrix) {
        let cells: Vec<String> = row.iter().map(|d| d.to_string()).collect();
        lines.push(format!("{}\t{}", label, cells.join("\t")));
    }

    lines.join("\n")
}
