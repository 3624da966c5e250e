//! The obfuscated-name predicate the matcher seeds and trusts decisions on.

/// Names of this shape are almost certainly compiler-generated, not handwritten:
/// length at most two characters, length three starting with `aa` (the prefixes
/// an obfuscator's counter produces before it needs a fourth character), or one
/// of the deobfuscator's own generated placeholder prefixes (`class`/`method`/
/// `field`) for symbols it could not otherwise name.
///
/// Used to seed the first matching pass from names an obfuscator left alone
/// (§4.6) and to decide whether a `members-full` classifier may trust a name at
/// all.
#[must_use]
pub fn is_obfuscated_name(name: &str) -> bool {
    match name.len() {
        0..=2 => true,
        3 => name.starts_with("aa"),
        _ => name.starts_with("class") || name.starts_with("method") || name.starts_with("field"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn obfuscated_name_predicate() {
        assert!(is_obfuscated_name(""));
        assert!(is_obfuscated_name("a"));
        assert!(is_obfuscated_name("ab"));
        assert!(is_obfuscated_name("aab"));
        assert!(!is_obfuscated_name("abc"));
        assert!(!is_obfuscated_name("abcd"));
        assert!(!is_obfuscated_name("getPlayer"));
        assert!(is_obfuscated_name("class123"));
        assert!(is_obfuscated_name("method42"));
        assert!(is_obfuscated_name("field7"));
        assert!(!is_obfuscated_name("getPlayerClass"));
    }
}
