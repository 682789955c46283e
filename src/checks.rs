//! Ordering, length, and element-type checks.
//!
//! The scan primitives (`first_unsorted`, `first_unsorted_by_index`,
//! `first_non_float`) report the first offending position and the
//! values involved; the `check_*` wrappers turn those findings into
//! `CheckResult`s for the report. A check failure is a finding, not an
//! error — only an index entry that cannot address the depth array at
//! all aborts the audit.

use crate::parser::Scalar;
use crate::{AuditError, Check, CheckCategory, CheckResult};
use std::time::Instant;

/// The first adjacent pair that breaks non-decreasing order.
///
/// `position` is the 1-based scan position of the second element of
/// the pair, matching how the upstream sorter's own diagnostics count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderViolation {
    pub position: usize,
    pub prev: Scalar,
    pub next: Scalar,
}

/// The first element that is not float-spelled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TypeViolation {
    pub position: usize,
    pub value: Scalar,
}

/// Scan for the first descending adjacent pair. `None` means the
/// sequence is non-decreasing (vacuously so below two elements).
pub fn first_unsorted(values: &[Scalar]) -> Option<OrderViolation> {
    for i in 1..values.len() {
        if values[i - 1].value() > values[i].value() {
            return Some(OrderViolation {
                position: i,
                prev: values[i - 1],
                next: values[i],
            });
        }
    }
    None
}

/// Scan `values` in the order given by `indices` for the first
/// descending adjacent pair of the permuted view.
///
/// Every index entry must address `values`; a float-spelled, negative,
/// or out-of-range entry aborts with `IndexOutOfRange` rather than
/// being skipped.
pub fn first_unsorted_by_index(
    values: &[Scalar],
    indices: &[Scalar],
) -> Result<Option<OrderViolation>, AuditError> {
    let lookup = |position: usize| -> Result<Scalar, AuditError> {
        let entry = indices[position];
        entry
            .as_index()
            .filter(|&idx| idx < values.len())
            .map(|idx| values[idx])
            .ok_or(AuditError::IndexOutOfRange {
                position,
                entry,
                len: values.len(),
            })
    };

    if indices.is_empty() {
        return Ok(None);
    }

    let mut prev = lookup(0)?;
    for i in 1..indices.len() {
        let next = lookup(i)?;
        if prev.value() > next.value() {
            return Ok(Some(OrderViolation {
                position: i,
                prev,
                next,
            }));
        }
        prev = next;
    }
    Ok(None)
}

/// Scan for the first element that is not float-spelled. An integer
/// element fails even when numerically equal to a float.
pub fn first_non_float(values: &[Scalar]) -> Option<TypeViolation> {
    values
        .iter()
        .enumerate()
        .find(|(_, v)| !v.is_float())
        .map(|(position, value)| TypeViolation {
            position,
            value: *value,
        })
}

/// Run ORD-001: the index array itself is sorted.
pub fn check_index_order(indices: &[Scalar]) -> Check {
    let start = Instant::now();
    let result = match first_unsorted(indices) {
        None => CheckResult::Pass {
            message: format!("{} index entries in non-decreasing order", indices.len()),
            duration_ms: elapsed_ms(start),
        },
        Some(v) => CheckResult::Fail {
            message: format!("index array is not sorted at position {}", v.position),
            details: format!("{} > {}", v.prev, v.next),
            duration_ms: elapsed_ms(start),
        },
    };
    make_check("ORD-001", "Index Array Ordering", CheckCategory::Order, result)
}

/// Run ORD-002: depths permuted by the index array are non-decreasing.
pub fn check_depths_ordered_by_index(
    depths: &[Scalar],
    indices: &[Scalar],
) -> Result<Check, AuditError> {
    let start = Instant::now();
    let result = match first_unsorted_by_index(depths, indices)? {
        None => CheckResult::Pass {
            message: format!("{} depth values sorted under index order", indices.len()),
            duration_ms: elapsed_ms(start),
        },
        Some(v) => CheckResult::Fail {
            message: format!("indexed depths are not sorted at position {}", v.position),
            details: format!("{} > {}", v.prev, v.next),
            duration_ms: elapsed_ms(start),
        },
    };
    Ok(make_check(
        "ORD-002",
        "Depths Ordered By Index",
        CheckCategory::Order,
        result,
    ))
}

/// Run LEN-001 / LEN-002: an array has the expected element count.
pub fn check_length(id: &str, name: &str, values: &[Scalar], expected: usize) -> Check {
    let start = Instant::now();
    let result = if values.len() == expected {
        CheckResult::Pass {
            message: format!("{} elements", values.len()),
            duration_ms: elapsed_ms(start),
        }
    } else {
        CheckResult::Fail {
            message: format!("expected {} elements, found {}", expected, values.len()),
            details: format!("difference of {}", values.len().abs_diff(expected)),
            duration_ms: elapsed_ms(start),
        }
    };
    make_check(id, name, CheckCategory::Shape, result)
}

/// Run TYP-001: every depth element is float-spelled.
pub fn check_depth_element_types(depths: &[Scalar]) -> Check {
    let start = Instant::now();
    let result = match first_non_float(depths) {
        None => CheckResult::Pass {
            message: format!("all {} elements are floating-point", depths.len()),
            duration_ms: elapsed_ms(start),
        },
        Some(v) => CheckResult::Fail {
            message: format!("non-float element at position {}", v.position),
            details: format!("value {} is integer-typed", v.value),
            duration_ms: elapsed_ms(start),
        },
    };
    make_check("TYP-001", "Depth Element Types", CheckCategory::Type, result)
}

fn make_check(id: &str, name: &str, category: CheckCategory, result: CheckResult) -> Check {
    Check {
        id: id.to_string(),
        name: name.to_string(),
        category,
        result,
    }
}

fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floats(values: &[f64]) -> Vec<Scalar> {
        values.iter().map(|&f| Scalar::Float(f)).collect()
    }

    fn ints(values: &[i64]) -> Vec<Scalar> {
        values.iter().map(|&i| Scalar::Int(i)).collect()
    }

    #[test]
    fn sorted_sequence_has_no_violation() {
        assert_eq!(first_unsorted(&ints(&[0, 1, 1, 5])), None);
        assert_eq!(first_unsorted(&ints(&[])), None);
        assert_eq!(first_unsorted(&ints(&[42])), None);
    }

    #[test]
    fn first_descending_pair_is_reported() {
        let v = first_unsorted(&ints(&[0, 3, 2, 1])).unwrap();
        assert_eq!(v.position, 2);
        assert_eq!(v.prev, Scalar::Int(3));
        assert_eq!(v.next, Scalar::Int(2));
    }

    #[test]
    fn permuted_view_sorted_passes() {
        // values[indices] = [1.0, 2.0, 3.0]
        let values = floats(&[3.0, 1.0, 2.0]);
        let indices = ints(&[1, 2, 0]);
        assert_eq!(first_unsorted_by_index(&values, &indices).unwrap(), None);
    }

    #[test]
    fn identity_order_over_unsorted_values_fails_at_first_pair() {
        // values[indices] = [3.0, 1.0, 2.0], descending at position 1
        let values = floats(&[3.0, 1.0, 2.0]);
        let indices = ints(&[0, 1, 2]);
        let v = first_unsorted_by_index(&values, &indices).unwrap().unwrap();
        assert_eq!(v.position, 1);
        assert_eq!(v.prev, Scalar::Float(3.0));
        assert_eq!(v.next, Scalar::Float(1.0));
    }

    #[test]
    fn out_of_range_index_aborts() {
        let values = floats(&[1.0, 2.0]);
        let err = first_unsorted_by_index(&values, &ints(&[0, 5])).unwrap_err();
        match err {
            AuditError::IndexOutOfRange { position, entry, len } => {
                assert_eq!(position, 1);
                assert_eq!(entry, Scalar::Int(5));
                assert_eq!(len, 2);
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn negative_index_aborts() {
        let values = floats(&[1.0, 2.0]);
        assert!(first_unsorted_by_index(&values, &ints(&[-1, 0])).is_err());
    }

    #[test]
    fn float_spelled_index_aborts() {
        let values = floats(&[1.0, 2.0]);
        let indices = vec![Scalar::Float(0.0), Scalar::Int(1)];
        assert!(first_unsorted_by_index(&values, &indices).is_err());
    }

    #[test]
    fn empty_index_array_is_trivially_ordered() {
        assert_eq!(first_unsorted_by_index(&floats(&[1.0]), &[]).unwrap(), None);
    }

    #[test]
    fn integer_element_is_not_floating_point() {
        let mut values = floats(&[1.0, 2.0, 3.0]);
        values[1] = Scalar::Int(2);
        let v = first_non_float(&values).unwrap();
        assert_eq!(v.position, 1);
        assert_eq!(v.value, Scalar::Int(2));
    }

    #[test]
    fn all_float_sequence_passes_type_check() {
        assert_eq!(first_non_float(&floats(&[1.0, 2.0])), None);
        assert_eq!(first_non_float(&[]), None);
    }

    #[test]
    fn length_check_reports_shortfall() {
        let check = check_length("LEN-001", "Index Array Length", &ints(&[0; 3]), 4);
        match check.result {
            CheckResult::Fail { ref message, .. } => {
                assert!(message.contains("expected 4"));
                assert!(message.contains("found 3"));
            }
            ref other => panic!("expected Fail, got {}", other),
        }
    }
}
