use crate::engines::search::permutation::min_window_sum;
use crate::error::Result;
use crate::types::Arrangement;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// One output line: the values, four spaces, then the minimum window sum
/// recomputed from the values themselves.
pub fn format_arrangement(sequence: &[i32]) -> String {
    let values = sequence
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(" ");

    match min_window_sum(sequence) {
        Some(min) => format!("{}    {}", values, min),
        None => values,
    }
}

pub fn render(arrangements: &[Arrangement], format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Text => Ok(arrangements
            .iter()
            .map(|a| format_arrangement(&a.sequence))
            .collect::<Vec<_>>()
            .join("\n")),
        ReportFormat::Json => Ok(serde_json::to_string_pretty(arrangements)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::search::hall_of_fame::HallOfFame;

    #[test]
    fn test_text_line() {
        assert_eq!(format_arrangement(&[1, 3, 4, 6, 7, 2, 5]), "1 3 4 6 7 2 5    8");
    }

    #[test]
    fn test_render_text_one_line_per_arrangement() {
        let arrangements = vec![
            HallOfFame::arrangement(vec![1, 3, 4, 6, 7, 2, 5], 8),
            HallOfFame::arrangement(vec![4, 3, 2, 1], 6),
        ];
        let text = render(&arrangements, ReportFormat::Text).unwrap();
        assert_eq!(text, "1 3 4 6 7 2 5    8\n4 3 2 1    6");
    }

    #[test]
    fn test_render_json_omits_canonical_form() {
        let arrangements = vec![HallOfFame::arrangement(vec![4, 3, 2, 1], 6)];
        let json = render(&arrangements, ReportFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value[0]["sequence"], serde_json::json!([4, 3, 2, 1]));
        assert_eq!(value[0]["min_sum"], 6);
        assert!(value[0].get("canonical").is_none());
    }

    #[test]
    fn test_empty_text_report() {
        assert_eq!(render(&[], ReportFormat::Text).unwrap(), "");
    }
}
