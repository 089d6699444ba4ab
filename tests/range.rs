#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use timeplot::libs::range::{ChartRange, DEFAULT_LOOKBACK_DAYS};

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_default_range_ends_today_and_looks_back_ten_days() {
        let today = date("2024-06-15");
        let range = ChartRange::default_for(today);

        assert_eq!(range.end, today);
        assert_eq!(range.start, date("2024-06-05"));
        assert_eq!((range.end - range.start).num_days(), DEFAULT_LOOKBACK_DAYS);
    }

    #[test]
    fn test_resolve_without_overrides_uses_defaults() {
        let today = date("2024-06-15");
        let range = ChartRange::resolve(None, None, today).unwrap();

        assert_eq!(range, ChartRange::default_for(today));
    }

    #[test]
    fn test_resolve_bounds_fall_back_independently() {
        let today = date("2024-06-15");

        let range = ChartRange::resolve(Some("2024-06-01"), None, today).unwrap();
        assert_eq!(range.start, date("2024-06-01"));
        assert_eq!(range.end, today);

        let range = ChartRange::resolve(None, Some("2024-06-10"), today).unwrap();
        assert_eq!(range.start, date("2024-06-05"));
        assert_eq!(range.end, date("2024-06-10"));
    }

    #[test]
    fn test_resolve_accepts_single_day_range() {
        let today = date("2024-06-15");
        let range = ChartRange::resolve(Some("2024-06-10"), Some("2024-06-10"), today).unwrap();

        assert_eq!(range.start, range.end);
    }

    #[test]
    fn test_resolve_rejects_inverted_range() {
        let today = date("2024-06-15");
        let result = ChartRange::resolve(Some("2024-06-10"), Some("2024-06-01"), today);

        assert!(result.is_err());
    }

    #[test]
    fn test_resolve_rejects_unparseable_dates() {
        let today = date("2024-06-15");

        assert!(ChartRange::resolve(Some("06/01/2024"), None, today).is_err());
        assert!(ChartRange::resolve(None, Some("yesterday"), today).is_err());
    }
}
