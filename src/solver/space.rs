//! Enumeration of every code a tier can produce

use crate::core::{CODE_LENGTH, Code, Difficulty, Symbol};

/// All codes admissible as a secret on the given tier
///
/// - Easy: ordered selections of 5 distinct symbols from 6 (720 codes)
/// - Medium: 7^5 = 16,807 codes
/// - Hard: 8^5 = 32,768 codes
///
/// Codes are listed in lexicographic order of symbol index.
#[must_use]
pub fn candidate_space(difficulty: Difficulty) -> Vec<Code> {
    let base = difficulty.palette_size();
    let palette = difficulty.palette();
    let total = base.pow(CODE_LENGTH as u32);

    (0..total)
        .map(|n| {
            let mut rest = n;
            let mut symbols = [Symbol::Red; CODE_LENGTH];
            for slot in symbols.iter_mut().rev() {
                *slot = palette[rest % base];
                rest /= base;
            }
            Code::new(symbols)
        })
        .filter(|code| difficulty.allows_repeats() || !code.has_repeats())
        .collect()
}

/// Size of [`candidate_space`] without building it
#[must_use]
pub const fn space_size(difficulty: Difficulty) -> usize {
    let n = difficulty.palette_size();
    if difficulty.allows_repeats() {
        n.pow(CODE_LENGTH as u32)
    } else {
        // n! / (n - k)!
        let mut size = 1;
        let mut i = 0;
        while i < CODE_LENGTH {
            size *= n - i;
            i += 1;
        }
        size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn space_sizes() {
        assert_eq!(space_size(Difficulty::Easy), 720);
        assert_eq!(space_size(Difficulty::Medium), 16_807);
        assert_eq!(space_size(Difficulty::Hard), 32_768);

        for difficulty in Difficulty::ALL {
            assert_eq!(candidate_space(difficulty).len(), space_size(difficulty));
        }
    }

    #[test]
    fn space_respects_tier_rules() {
        for difficulty in Difficulty::ALL {
            for code in candidate_space(difficulty) {
                assert!(code.validate_for(difficulty).is_ok());
                if !difficulty.allows_repeats() {
                    assert!(!code.has_repeats());
                }
            }
        }
    }

    #[test]
    fn space_is_ordered_and_unique() {
        let space = candidate_space(Difficulty::Medium);
        assert_eq!(space[0].to_string(), "RRRRR");
        assert_eq!(space[1].to_string(), "RRRRG");
        assert_eq!(space[space.len() - 1].to_string(), "OOOOO");

        let unique: std::collections::HashSet<_> = space.iter().collect();
        assert_eq!(unique.len(), space.len());
    }

    #[test]
    fn easy_space_starts_with_first_distinct_code() {
        let space = candidate_space(Difficulty::Easy);
        assert_eq!(space[0].to_string(), "RGBYW");
        assert_eq!(space[space.len() - 1].to_string(), "PWYBG");
    }
}
