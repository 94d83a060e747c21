//! Relational inner join over string tables.

use std::collections::HashMap;

use invrec_model::{Table, field};

/// Inner join of `left` and `right` on equal values of the `keys` columns.
///
/// Result columns are the left columns in order (keys once) followed by the
/// right non-key columns. A non-key column present on both sides gets the
/// matching suffix from `suffixes` on each side. Rows come out in left order,
/// then right order among the matches of one left row; repeated keys on
/// either side produce every pairing. A key column missing from either table
/// yields an empty result.
pub fn inner_join(left: &Table, right: &Table, keys: &[&str], suffixes: (&str, &str)) -> Table {
    let is_key = |name: &str| keys.iter().any(|key| *key == name);
    let shared = |name: &str| {
        !is_key(name)
            && left.headers.iter().any(|h| h == name)
            && right.headers.iter().any(|h| h == name)
    };

    let mut headers: Vec<String> = left
        .headers
        .iter()
        .map(|name| {
            if shared(name.as_str()) {
                format!("{name}{}", suffixes.0)
            } else {
                name.clone()
            }
        })
        .collect();
    let right_extra: Vec<usize> = right
        .headers
        .iter()
        .enumerate()
        .filter(|(_, name)| !is_key(name.as_str()))
        .map(|(idx, _)| idx)
        .collect();
    for &idx in &right_extra {
        let name = &right.headers[idx];
        if shared(name.as_str()) {
            headers.push(format!("{name}{}", suffixes.1));
        } else {
            headers.push(name.clone());
        }
    }
    let mut joined = Table::new(headers);

    let left_keys: Vec<usize> = keys.iter().filter_map(|k| left.column_index(k)).collect();
    let right_keys: Vec<usize> = keys.iter().filter_map(|k| right.column_index(k)).collect();
    if left_keys.len() != keys.len() || right_keys.len() != keys.len() {
        return joined;
    }

    let mut index: HashMap<Vec<&str>, Vec<usize>> = HashMap::new();
    for (idx, row) in right.rows.iter().enumerate() {
        let key: Vec<&str> = right_keys.iter().map(|&col| field(row, col)).collect();
        index.entry(key).or_default().push(idx);
    }

    for row in &left.rows {
        let key: Vec<&str> = left_keys.iter().map(|&col| field(row, col)).collect();
        let Some(matches) = index.get(&key) else {
            continue;
        };
        for &right_idx in matches {
            let right_row = &right.rows[right_idx];
            let mut out = row.clone();
            out.resize(left.width(), String::new());
            out.extend(right_extra.iter().map(|&col| field(right_row, col).to_string()));
            joined.rows.push(out);
        }
    }
    joined
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUFFIXES: (&str, &str) = ("_shopify", "_supplier");

    #[test]
    fn overlapping_columns_are_suffixed() {
        let left = Table::new(["SKU", "Size", "Qty"]).with_rows([["A1", "OS", "8"]]);
        let right = Table::new(["SKU", "Size", "Qty"]).with_rows([["A1", "OS", "10"]]);
        let joined = inner_join(&left, &right, &["SKU", "Size"], SUFFIXES);
        assert_eq!(
            joined.headers,
            vec!["SKU", "Size", "Qty_shopify", "Qty_supplier"]
        );
        assert_eq!(joined.rows, vec![vec!["A1", "OS", "8", "10"]]);
    }

    #[test]
    fn unmatched_keys_are_dropped() {
        let left = Table::new(["SKU", "Qty"]).with_rows([["A1", "1"], ["B2", "2"]]);
        let right = Table::new(["SKU", "Qty"]).with_rows([["B2", "3"], ["C3", "4"]]);
        let joined = inner_join(&left, &right, &["SKU"], SUFFIXES);
        assert_eq!(joined.rows, vec![vec!["B2", "2", "3"]]);
    }

    #[test]
    fn repeated_keys_produce_cross_product_in_left_order() {
        let left = Table::new(["SKU", "Cost"]).with_rows([["A1", "1"], ["A1", "2"]]);
        let right = Table::new(["SKU", "Cost"]).with_rows([["A1", "x"], ["A1", "y"]]);
        let joined = inner_join(&left, &right, &["SKU"], SUFFIXES);
        assert_eq!(
            joined.rows,
            vec![
                vec!["A1", "1", "x"],
                vec!["A1", "1", "y"],
                vec!["A1", "2", "x"],
                vec!["A1", "2", "y"],
            ]
        );
    }

    #[test]
    fn non_overlapping_columns_keep_their_names() {
        let left = Table::new(["SKU", "Title"]).with_rows([["A1", "Tee"]]);
        let right = Table::new(["Vendor", "SKU"]).with_rows([["Acme", "A1"]]);
        let joined = inner_join(&left, &right, &["SKU"], SUFFIXES);
        assert_eq!(joined.headers, vec!["SKU", "Title", "Vendor"]);
        assert_eq!(joined.rows, vec![vec!["A1", "Tee", "Acme"]]);
    }

    #[test]
    fn missing_key_column_yields_empty_join() {
        let left = Table::new(["SKU"]).with_rows([["A1"]]);
        let right = Table::new(["Code"]).with_rows([["A1"]]);
        assert!(inner_join(&left, &right, &["SKU"], SUFFIXES).is_empty());
    }
}
