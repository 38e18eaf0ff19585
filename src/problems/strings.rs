//! String problems over byte-level character sets.
//!
//! Character sets are indexed by byte, so multi-byte UTF-8 characters are
//! treated as their individual bytes.

use crate::error::{Error, Result};

/// True when no byte occurs twice.
pub fn is_unique(s: &str) -> bool {
    let mut seen = [false; 256];
    for &b in s.as_bytes() {
        if seen[b as usize] {
            return false;
        }
        seen[b as usize] = true;
    }
    true
}

/// True when `a` and `b` hold the same bytes with the same multiplicities.
pub fn is_permutation(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut counts = [0usize; 256];
    for &c in a.as_bytes() {
        counts[c as usize] += 1;
    }
    for &c in b.as_bytes() {
        let slot = &mut counts[c as usize];
        if *slot == 0 {
            return false;
        }
        *slot -= 1;
    }
    true
}

/// Replaces each space in the first `true_len` bytes of `input` with `%20`,
/// using the trailing padding of `input` as room. Fills from the back so no
/// byte is overwritten before it has been moved. Anything past the encoded
/// length is dropped.
pub fn urlify(input: &str, true_len: usize) -> Result<String> {
    if true_len > input.len() || !input.is_char_boundary(true_len) {
        return Err(Error::invalid(format!(
            "true length {true_len} is not a char boundary of a {}-byte input",
            input.len()
        )));
    }
    let spaces = input.as_bytes()[..true_len]
        .iter()
        .filter(|&&b| b == b' ')
        .count();
    let total = true_len + 2 * spaces;
    if total > input.len() {
        return Err(Error::invalid(format!(
            "need {total} bytes to encode, input only has {}",
            input.len()
        )));
    }

    let mut buf = input.as_bytes().to_vec();
    let mut fill = total;
    for i in (0..true_len).rev() {
        let b = buf[i];
        if b == b' ' {
            fill -= 3;
            buf[fill..fill + 3].copy_from_slice(b"%20");
        } else {
            fill -= 1;
            buf[fill] = b;
        }
    }
    buf.truncate(total);
    String::from_utf8(buf).map_err(|e| Error::invalid(e.to_string()))
}

/// True when some arrangement of `s` reads the same both ways, ignoring
/// spaces and ASCII case.
pub fn is_palindrome_permutation(s: &str) -> bool {
    let mut odd = [false; 256];
    let mut odd_count = 0usize;
    for &b in s.as_bytes() {
        if b == b' ' {
            continue;
        }
        let slot = &mut odd[b.to_ascii_lowercase() as usize];
        *slot = !*slot;
        if *slot {
            odd_count += 1;
        } else {
            odd_count -= 1;
        }
    }
    odd_count <= 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniqueness() {
        assert!(is_unique(""));
        assert!(is_unique("abcDEF123"));
        assert!(!is_unique("hello"));
        assert!(!is_unique("a a"));
    }

    #[test]
    fn permutations() {
        assert!(is_permutation("listen", "silent"));
        assert!(is_permutation("", ""));
        assert!(!is_permutation("abc", "abcc"));
        assert!(!is_permutation("aab", "abb"));
        assert!(!is_permutation("Abc", "abc"));
    }

    #[test]
    fn urlify_fills_from_the_back() {
        assert_eq!(urlify("A bad day.    ", 10).unwrap(), "A%20bad%20day.");
        assert_eq!(urlify("Mr John Smith    ", 13).unwrap(), "Mr%20John%20Smith");
        assert_eq!(urlify("            ", 4).unwrap(), "%20%20%20%20");
        assert_eq!(urlify("              ", 4).unwrap(), "%20%20%20%20");
        assert_eq!(urlify("nospace", 7).unwrap(), "nospace");
        assert_eq!(urlify("", 0).unwrap(), "");
    }

    #[test]
    fn urlify_rejects_bad_lengths() {
        assert!(matches!(urlify("a b", 3), Err(Error::InvalidArgument(_))));
        assert!(matches!(urlify("ab", 5), Err(Error::InvalidArgument(_))));
        // 'é' is two bytes; 1 splits it.
        assert!(matches!(urlify("é  ", 1), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn palindrome_permutations() {
        assert!(is_palindrome_permutation("Tact Coa"));
        assert!(is_palindrome_permutation("taco cat"));
        assert!(is_palindrome_permutation(""));
        assert!(is_palindrome_permutation("aA"));
        assert!(!is_palindrome_permutation("abc"));
        assert!(!is_palindrome_permutation("ab  cd"));
    }
}
