/// Number of chapters placed on every scheduled day.
/// Floor division, never less than one chapter per day.
pub fn chapters_per_day(total_chapters: usize, total_days: i64) -> usize {
    if total_days <= 0 {
        return 1;
    }
    let per_day = total_chapters as i64 / total_days;
    per_day.max(1) as usize
}

/// Hours allotted to each chapter, rounded to one decimal
pub fn hours_per_chapter(study_hours_per_day: i64, chapters_per_day: usize) -> f64 {
    round_to_tenth(study_hours_per_day as f64 / chapters_per_day as f64)
}

/// Rounds to one decimal place from the exact binary value, ties to even.
/// Formatting with a fixed precision is correctly rounded, so 0.25 becomes 0.2
/// and 0.35 (stored just below) becomes 0.3.
pub fn round_to_tenth(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{:.1}", value).parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quota_uses_floor_division() {
        assert_eq!(chapters_per_day(5, 2), 2);
        assert_eq!(chapters_per_day(7, 3), 2);
        assert_eq!(chapters_per_day(9, 3), 3);
    }

    #[test]
    fn quota_is_at_least_one() {
        assert_eq!(chapters_per_day(2, 10), 1);
        assert_eq!(chapters_per_day(1, 1), 1);
    }

    #[test]
    fn hours_split_evenly_across_quota() {
        assert_eq!(hours_per_chapter(4, 1), 4.0);
        assert_eq!(hours_per_chapter(5, 2), 2.5);
        assert_eq!(hours_per_chapter(5, 3), 1.7);
        assert_eq!(hours_per_chapter(0, 3), 0.0);
    }

    #[test]
    fn rounding_follows_exact_decimal_value() {
        assert_eq!(round_to_tenth(0.75), 0.8);
        assert_eq!(round_to_tenth(2.0 / 3.0), 0.7);
        assert_eq!(round_to_tenth(10.0 / 7.0), 1.4);
    }
}
