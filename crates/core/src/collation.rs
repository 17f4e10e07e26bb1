//! Natural string collation for ORDER BY.
//!
//! Strings are split into runs of ASCII digits and runs of other characters.
//! Digit runs compare by numeric magnitude, so `"item2"` sorts before `"item10"`.
//! Other characters compare case-insensitively. When two strings are equal at
//! that level, the first case or leading-zero difference decides, with
//! lowercase sorting before uppercase.
//!
//! ```
//! use core::cmp::Ordering;
//! use tabula_core::collation::natural_cmp;
//! assert_eq!(natural_cmp("item2", "item10"), Ordering::Less);
//! assert_eq!(natural_cmp("apple", "Banana"), Ordering::Less);
//! assert_eq!(natural_cmp("a", "A"), Ordering::Less);
//! ```

use core::cmp::Ordering;

/// Compares two strings in natural order.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let (mut i, mut j) = (0, 0);
    let mut tie = Ordering::Equal;

    loop {
        let (l, r) = match (a[i..].chars().next(), b[j..].chars().next()) {
            (None, None) => return tie,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) => (l, r),
        };

        if l.is_ascii_digit() && r.is_ascii_digit() {
            let l_run = digit_run(&a[i..]);
            let r_run = digit_run(&b[j..]);
            match compare_digit_runs(l_run, r_run) {
                Ordering::Equal => {
                    if tie == Ordering::Equal {
                        tie = l_run.len().cmp(&r_run.len());
                    }
                }
                other => return other,
            }
            i += l_run.len();
            j += r_run.len();
            continue;
        }

        i += l.len_utf8();
        j += r.len_utf8();
        match l.to_lowercase().cmp(r.to_lowercase()) {
            Ordering::Equal => {
                if tie == Ordering::Equal && l != r {
                    tie = case_tie(l, r);
                }
            }
            other => return other,
        }
    }
}

/// Returns the leading run of ASCII digits of `s`.
fn digit_run(s: &str) -> &str {
    let end = s.bytes().take_while(u8::is_ascii_digit).count();
    &s[..end]
}

/// Compares two digit runs by numeric magnitude, ignoring leading zeros.
fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn case_tie(l: char, r: char) -> Ordering {
    match (l.is_lowercase(), r.is_lowercase()) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => l.cmp(&r),
    }
}
