/// Uppercase the first character of `s`, leaving the rest untouched.
///
/// Used for variant case names, which are declared in any case but always
/// displayed capitalized.
///
/// # Examples
/// ```
/// use typerep_core::utils::capitalize;
/// assert_eq!(capitalize("circle"), "Circle");
/// assert_eq!(capitalize("Square"), "Square");  // idempotent
/// assert_eq!(capitalize("some_case"), "Some_case");
/// ```
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut result = String::with_capacity(s.len());
    result.extend(first.to_uppercase());
    result.push_str(chars.as_str());
    result
}

/// Whether `candidate` names `declared`, either verbatim or capitalized.
pub fn matches_case_name(declared: &str, candidate: &str) -> bool {
    declared == candidate || capitalize(declared) == candidate
}
