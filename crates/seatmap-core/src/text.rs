// Text normalization shared by the matcher and its callers.

/// Normalize a name or query for comparison: trim surrounding whitespace,
/// then lowercase.
///
/// Lowercasing is full Unicode, so Vietnamese capitals with diacritics
/// ("Nguyễn", "Đức") compare equal to their lowercase forms.
pub fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Length in Unicode scalar values, the unit edit distances are counted in.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize("  Anna Tran \t"), "anna tran");
    }

    #[test]
    fn normalize_handles_vietnamese_capitals() {
        assert_eq!(normalize("NGUYỄN ĐỨC"), "nguyễn đức");
    }

    #[test]
    fn normalize_keeps_inner_whitespace() {
        assert_eq!(normalize("Van  An"), "van  an");
    }

    #[test]
    fn char_len_counts_scalars_not_bytes() {
        assert_eq!(char_len("đức"), 3);
        assert_eq!("đức".len(), 6);
    }
}
