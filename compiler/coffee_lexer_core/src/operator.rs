//! Multi-character operators.

/// Length of the multi-character operator at the start of `chunk`, or 0.
///
/// Alternatives are tried in a fixed order and the first match wins:
///
/// 1. `->` `=>`
/// 2. one of `-+*/%<>&|^!?=` followed by `=`
/// 3. `>>>` and `>>>=`
/// 4. doubled `-` `+` `:`
/// 5. doubled `&` `|` `<` `>` `*` `/` `%`, optionally followed by `=`
/// 6. `?.` `?::`
/// 7. `...` then `..`
///
/// Single characters are left to the caller.
pub fn operator(chunk: &str) -> usize {
    let b = chunk.as_bytes();
    let at = |i: usize| b.get(i).copied().unwrap_or(0);
    let (c0, c1, c2) = (at(0), at(1), at(2));

    if matches!(c0, b'-' | b'=') && c1 == b'>' {
        return 2;
    }
    if matches!(
        c0,
        b'-' | b'+' | b'*' | b'/' | b'%' | b'<' | b'>' | b'&' | b'|' | b'^' | b'!' | b'?' | b'='
    ) && c1 == b'='
    {
        return 2;
    }
    if c0 == b'>' && c1 == b'>' && c2 == b'>' {
        return if at(3) == b'=' { 4 } else { 3 };
    }
    if matches!(c0, b'-' | b'+' | b':') && c1 == c0 {
        return 2;
    }
    if matches!(c0, b'&' | b'|' | b'<' | b'>' | b'*' | b'/' | b'%') && c1 == c0 {
        return if c2 == b'=' { 3 } else { 2 };
    }
    if c0 == b'?' {
        if c1 == b'.' {
            return 2;
        }
        if c1 == b':' && c2 == b':' {
            return 3;
        }
    }
    if c0 == b'.' && c1 == b'.' {
        return if c2 == b'.' { 3 } else { 2 };
    }
    0
}
