//! Algorithm catalog
//!
//! Fixed, enumerable mapping from user-facing menu indices (1-based) to
//! canonical provider identifiers. Pure lookups, no side effects.

use crate::error::{HarnessError, Result};
use crate::types::{AlgorithmParameter, Family};
use pqc_primitives::SLH_DSA_SHA2_128F_SIMPLE;

/// ML-KEM parameter sets, in menu order
pub const KEM_ENTRIES: [AlgorithmParameter; 3] = [
    AlgorithmParameter::new(Family::Kem, "ML-KEM-512"),
    AlgorithmParameter::new(Family::Kem, "ML-KEM-768"),
    AlgorithmParameter::new(Family::Kem, "ML-KEM-1024"),
];

/// ML-DSA parameter sets, in menu order
pub const SIGNATURE_ENTRIES: [AlgorithmParameter; 3] = [
    AlgorithmParameter::new(Family::Signature, "ML-DSA-44"),
    AlgorithmParameter::new(Family::Signature, "ML-DSA-65"),
    AlgorithmParameter::new(Family::Signature, "ML-DSA-87"),
];

/// The fixed SLH-DSA entry (no sub-menu)
pub const SLH_DSA: AlgorithmParameter =
    AlgorithmParameter::new(Family::Signature, SLH_DSA_SHA2_128F_SIMPLE);

/// Enumerated entries of a family's sub-menu
pub fn entries(family: Family) -> &'static [AlgorithmParameter] {
    match family {
        Family::Kem => &KEM_ENTRIES,
        Family::Signature => &SIGNATURE_ENTRIES,
    }
}

/// Resolve a 1-based menu index within a family
///
/// # Errors
/// - `UnresolvedParameter` when `index` is outside the family's table
pub fn resolve(family: Family, index: usize) -> Result<AlgorithmParameter> {
    index
        .checked_sub(1)
        .and_then(|i| entries(family).get(i))
        .copied()
        .ok_or(HarnessError::UnresolvedParameter {
            family: family.label(),
            index,
        })
}

/// The stateless hash-based signature parameter
pub fn fixed_slh_dsa() -> AlgorithmParameter {
    SLH_DSA
}

/// Parse a raw menu line into a positive index
///
/// Surrounding whitespace is ignored; anything else that is not a positive
/// decimal integer is an `InvalidSelection`.
pub fn parse_selection(menu: &'static str, input: &str) -> Result<usize> {
    let trimmed = input.trim();

    match trimmed.parse::<usize>() {
        Ok(index) if index > 0 => Ok(index),
        _ => Err(HarnessError::InvalidSelection {
            menu,
            input: trimmed.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kem_entries() {
        let expected = ["ML-KEM-512", "ML-KEM-768", "ML-KEM-1024"];
        for (i, name) in expected.iter().enumerate() {
            let param = resolve(Family::Kem, i + 1).unwrap();
            assert_eq!(param.name(), *name);
            assert_eq!(param.family(), Family::Kem);
        }
    }

    #[test]
    fn test_signature_entries() {
        let expected = ["ML-DSA-44", "ML-DSA-65", "ML-DSA-87"];
        for (i, name) in expected.iter().enumerate() {
            let param = resolve(Family::Signature, i + 1).unwrap();
            assert_eq!(param.name(), *name);
            assert_eq!(param.family(), Family::Signature);
        }
    }

    #[test]
    fn test_out_of_range_is_rejected() {
        for family in [Family::Kem, Family::Signature] {
            for index in [0, 4, usize::MAX] {
                match resolve(family, index) {
                    Err(HarnessError::UnresolvedParameter { index: got, .. }) => {
                        assert_eq!(got, index)
                    }
                    other => panic!("index {} should not resolve, got {:?}", index, other),
                }
            }
        }
    }

    #[test]
    fn test_fixed_slh_dsa() {
        let param = fixed_slh_dsa();
        assert_eq!(param.name(), "SPHINCS+-SHA2-128f-simple");
        assert_eq!(param.family(), Family::Signature);
    }

    #[test]
    fn test_parse_selection() {
        assert_eq!(parse_selection("main menu", "2").unwrap(), 2);
        assert_eq!(parse_selection("main menu", "  3 \n").unwrap(), 3);

        for input in ["", "0", "-1", "one", "1.5", "2 3"] {
            let err = parse_selection("main menu", input).unwrap_err();
            assert!(err.is_selection_error(), "{:?} should be a selection error", input);
        }
    }
}
