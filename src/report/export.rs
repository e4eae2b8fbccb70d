//! Render report tables as CSV, JSON and formatted text

use super::{AnalysisReport, YearlyRow};
use std::io::Write;

/// Write the yearly table (flows and cumulative flows) as CSV
pub fn write_yearly_csv<W: Write>(report: &AnalysisReport, writer: W) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in report.yearly_rows() {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Serialize the full report as pretty-printed JSON
pub fn to_json(report: &AnalysisReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

/// Format a dollar amount with thousands separators and no cents, e.g. `$-13,500,000`
pub fn format_currency(amount: f64) -> String {
    let rounded = amount.round();
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded < 0.0 {
        format!("$-{}", grouped)
    } else {
        format!("${}", grouped)
    }
}

/// Plain-text yearly table with currency formatting
pub fn format_yearly_table(rows: &[YearlyRow], cumulative: bool) -> String {
    let (left, right) = if cumulative {
        ("Cumulative Owning", "Cumulative Leasing")
    } else {
        ("Owning Cash Flow", "Leasing Cash Flow")
    };

    let mut out = format!("{:>5} {:>20} {:>20}\n", "Year", left, right);
    out.push_str(&"-".repeat(47));
    out.push('\n');

    for row in rows {
        let (own, lease) = if cumulative {
            (row.cumulative_owning, row.cumulative_leasing)
        } else {
            (row.owning, row.leasing)
        };
        out.push_str(&format!(
            "{:>5} {:>20} {:>20}\n",
            row.year,
            format_currency(own),
            format_currency(lease)
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ParameterSet;
    use crate::projection::CashflowSequence;
    use crate::report::analyze;

    fn small_report() -> AnalysisReport {
        AnalysisReport::from_cashflows(
            CashflowSequence::from(vec![-120e6, -10.5e6]),
            CashflowSequence::from(vec![0.0, -13.5e6]),
            0.06,
        )
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(999.4), "$999");
        assert_eq!(format_currency(1_000.0), "$1,000");
        assert_eq!(format_currency(-13_500_000.0), "$-13,500,000");
        assert_eq!(format_currency(-999.6), "$-1,000");
        assert_eq!(format_currency(1_234_567.89), "$1,234,568");
        assert_eq!(format_currency(-0.2), "$0");
    }

    #[test]
    fn test_yearly_csv() {
        let mut buf = Vec::new();
        write_yearly_csv(&small_report(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines[0],
            "Year,Owning Cash Flow,Leasing Cash Flow,Cumulative Owning,Cumulative Leasing"
        );
        assert_eq!(lines.len(), 3);
        assert!(lines[2].starts_with("1,"));
    }

    #[test]
    fn test_json_contains_npvs() {
        let report = analyze(&ParameterSet::default_scenario());
        let json = to_json(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert!(value["own_npv"].is_number());
        assert!(value["lease_npv"].is_number());
        assert_eq!(value["own_cashflows"].as_array().unwrap().len(), 21);

        let back: AnalysisReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.own_cashflows.len(), report.own_cashflows.len());
    }

    #[test]
    fn test_yearly_table_text() {
        let rows = small_report().yearly_rows();
        let table = format_yearly_table(&rows, true);
        assert!(table.contains("Cumulative Owning"));
        assert!(table.contains("$-130,500,000"));
    }
}
