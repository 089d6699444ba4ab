#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use std::fs;
    use tempfile::TempDir;
    use timeplot::libs::chart;
    use timeplot::libs::record::Record;
    use timeplot::libs::reshape::reshape;

    fn record(day: &str, user: &str, seconds: u64) -> Record {
        Record {
            date: NaiveDate::parse_from_str(day, "%Y-%m-%d").unwrap(),
            user: user.to_string(),
            seconds,
        }
    }

    #[test]
    fn test_render_writes_svg_with_user_series() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("chart.svg");

        let records = vec![
            record("2024-01-01", "alice", 30),
            record("2024-01-02", "bob", 45),
            record("2024-01-03", "alice", 60),
        ];
        let matrix = reshape(&records).matrix;

        chart::render(&matrix, &output, "Time per user, 2024-01-01 to 2024-01-03").unwrap();

        let svg = fs::read_to_string(&output).unwrap();
        assert!(svg.contains("<svg"));
        // Legend entries carry the user names into the output.
        assert!(svg.contains("alice"));
        assert!(svg.contains("bob"));
    }

    #[test]
    fn test_render_empty_matrix_produces_blank_chart() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("empty.svg");

        let matrix = reshape(&[]).matrix;
        chart::render(&matrix, &output, "Time per user").unwrap();

        let svg = fs::read_to_string(&output).unwrap();
        assert!(svg.contains("<svg"));
    }

    #[test]
    fn test_render_single_day_matrix() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("single.svg");

        let matrix = reshape(&[record("2024-01-01", "alice", 30)]).matrix;
        chart::render(&matrix, &output, "Time per user, 2024-01-01").unwrap();

        assert!(output.exists());
    }

    #[test]
    fn test_render_all_zero_values() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("zeros.svg");

        let matrix = reshape(&[record("2024-01-01", "alice", 0), record("2024-01-02", "alice", 0)]).matrix;
        chart::render(&matrix, &output, "Time per user").unwrap();

        assert!(output.exists());
    }
}
