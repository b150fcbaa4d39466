//! 报告展示
//!
//! 表格行顺序与存储顺序一致，不做任何排序。

use crate::models::MatchRecord;
use crate::state::ProgressLevel;

const HEADERS: [&str; 3] = ["Candidate", "Email", "Match %"];

/// 表格的每一行：候选人、邮箱、匹配度
pub fn report_rows(report: &[MatchRecord]) -> Vec<[String; 3]> {
    report
        .iter()
        .map(|r| {
            [
                r.candidate_name.clone(),
                r.email.clone(),
                r.display_percentage(),
            ]
        })
        .collect()
}

/// 渲染匹配报告，空报告不渲染
pub fn render_report(report: &[MatchRecord]) -> Option<String> {
    if report.is_empty() {
        return None;
    }

    let rows = report_rows(report);
    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_row = |cells: [&str; 3]| -> String {
        cells
            .iter()
            .zip(widths.iter())
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let mut lines = vec![
        "📊 Match Report".to_string(),
        format_row(HEADERS),
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    ];
    for row in &rows {
        lines.push(format_row([row[0].as_str(), row[1].as_str(), row[2].as_str()]));
    }

    Some(lines.join("\n"))
}

/// 渲染进度条，进度为 0 时不显示
pub fn render_progress(progress: ProgressLevel, width: usize) -> Option<String> {
    if !progress.is_visible() {
        return None;
    }
    let filled = width * progress.percent() as usize / 100;
    Some(format!(
        "[{}{}] {}",
        "#".repeat(filled),
        " ".repeat(width - filled),
        progress
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_row_report() {
        let report = vec![MatchRecord::new("Ada", "ada@x.com", 87.5)];
        assert_eq!(
            report_rows(&report),
            vec![["Ada".to_string(), "ada@x.com".to_string(), "87.50%".to_string()]]
        );

        let table = render_report(&report).unwrap();
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1], "Candidate | Email     | Match %");
        assert_eq!(lines[3], "Ada       | ada@x.com | 87.50%");
    }

    #[test]
    fn test_rows_keep_service_order() {
        let report = vec![
            MatchRecord::new("Low", "low@x.com", 10.0),
            MatchRecord::new("High", "high@x.com", 95.0),
        ];
        let names: Vec<String> = report_rows(&report).into_iter().map(|r| r[0].clone()).collect();
        assert_eq!(names, vec!["Low", "High"]);
    }

    #[test]
    fn test_empty_report_renders_nothing() {
        assert!(render_report(&[]).is_none());
    }

    #[test]
    fn test_progress_bar() {
        assert!(render_progress(ProgressLevel::Zero, 10).is_none());
        assert_eq!(
            render_progress(ProgressLevel::Uploading, 10).unwrap(),
            "[###       ] 30%"
        );
        assert_eq!(
            render_progress(ProgressLevel::Complete, 10).unwrap(),
            "[##########] 100%"
        );
    }
}
