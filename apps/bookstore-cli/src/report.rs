//! # Report Rendering
//!
//! Text blocks for the sales report and the numbered sale listing.
//!
//! ## Column Alignment
//! ```text
//! 單價        數量        折扣        小計
//! 600         2           100         1100
//! └─ 12 cells ┘
//! ```
//! A CJK glyph takes two terminal cells, so each header label is padded to
//! `12 - count_cjk(label)` characters. Values are padded to 12 characters.

use std::fmt;

use bookstore_core::{SaleListing, SaleReportRow};

/// Terminal cells per report column.
pub const REPORT_CELL_WIDTH: usize = 12;

const REPORT_RULE: &str = "==================== 銷售報表 ====================";
const REPORT_DIVIDER: &str = "--------------------------------------------------";
const REPORT_LABELS: [&str; 4] = ["單價", "數量", "折扣", "小計"];
const LISTING_HEADER: &str = "======== 銷售記錄列表 ========";
const LISTING_FOOTER: &str = "================================";

/// Characters in the CJK Unified Ideographs block (`U+4E00..=U+9FFF`).
pub fn count_cjk(text: &str) -> usize {
    text.chars()
        .filter(|c| ('\u{4e00}'..='\u{9fff}').contains(c))
        .count()
}

/// Left-aligns `label` in a report cell, narrowing by one per CJK glyph.
pub fn pad_label(label: &str) -> String {
    let width = REPORT_CELL_WIDTH.saturating_sub(count_cjk(label));
    format!("{:<width$}", label, width = width)
}

/// The sales report: one block per sale, in the order given.
pub struct ReportView<'a>(pub &'a [SaleReportRow]);

impl fmt::Display for ReportView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header: String = REPORT_LABELS.iter().map(|label| pad_label(label)).collect();

        writeln!(f)?;
        writeln!(f, "{}", REPORT_RULE)?;
        for row in self.0 {
            writeln!(f, "銷售 #{}", row.sid)?;
            writeln!(f, "銷售編號: {}", row.sid)?;
            writeln!(f, "銷售日期: {}", row.sdate)?;
            writeln!(f, "會員姓名: {}", row.mname)?;
            writeln!(f, "書籍標題: {}", row.btitle)?;
            writeln!(f, "{}", REPORT_DIVIDER)?;
            writeln!(f, "{}", header)?;
            writeln!(f, "{}", REPORT_DIVIDER)?;
            writeln!(
                f,
                "{:<w$}{:<w$}{:<w$}{:<w$}",
                row.bprice,
                row.sqty,
                row.sdiscount,
                row.stotal,
                w = REPORT_CELL_WIDTH
            )?;
            writeln!(f, "{}", REPORT_RULE)?;
            writeln!(f)?;
        }

        Ok(())
    }
}

/// Numbered listing shown before update and delete. Numbers are for the
/// operator; the sale id is what they type.
pub struct ListingView<'a>(pub &'a [SaleListing]);

impl fmt::Display for ListingView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "{}", LISTING_HEADER)?;
        for (index, row) in self.0.iter().enumerate() {
            writeln!(
                f,
                "{}. 銷售編號: {} - 會員: {} - 日期: {}",
                index + 1,
                row.sid,
                row.mname,
                row.sdate
            )?;
        }
        writeln!(f, "{}", LISTING_FOOTER)
    }
}

/// Renders [`ReportView`] to a string.
pub fn render_report(rows: &[SaleReportRow]) -> String {
    ReportView(rows).to_string()
}

/// Renders [`ListingView`] to a string.
pub fn render_listing(listing: &[SaleListing]) -> String {
    ListingView(listing).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report_row() -> SaleReportRow {
        SaleReportRow {
            sid: 1,
            sdate: "2024-01-15".to_string(),
            mname: "Alice".to_string(),
            btitle: "Python Programming".to_string(),
            bprice: 600,
            sqty: 2,
            sdiscount: 100,
            stotal: 1100,
        }
    }

    #[test]
    fn test_count_cjk() {
        assert_eq!(count_cjk("單價"), 2);
        assert_eq!(count_cjk("Price"), 0);
        assert_eq!(count_cjk("書A籍"), 2);
        assert_eq!(count_cjk("（）"), 0);
    }

    #[test]
    fn test_pad_label() {
        assert_eq!(pad_label("單價"), format!("單價{}", " ".repeat(8)));
        assert_eq!(pad_label("Qty"), format!("Qty{}", " ".repeat(9)));
        assert_eq!(pad_label("一二三四五六七八九十"), "一二三四五六七八九十");
    }

    #[test]
    fn test_render_report_block() {
        let text = render_report(&[report_row()]);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "");
        assert_eq!(lines[1], REPORT_RULE);
        assert_eq!(lines[2], "銷售 #1");
        assert_eq!(lines[5], "會員姓名: Alice");
        assert_eq!(lines[6], "書籍標題: Python Programming");
        assert_eq!(
            lines[8],
            format!("單價{0}數量{0}折扣{0}小計{0}", " ".repeat(8))
        );
        assert_eq!(
            lines[10],
            "600         2           100         1100        "
        );
        assert_eq!(lines[11], REPORT_RULE);
    }

    #[test]
    fn test_render_empty_report() {
        assert_eq!(render_report(&[]), format!("\n{}\n", REPORT_RULE));
    }

    #[test]
    fn test_render_listing_numbers_from_one() {
        let listing = vec![
            SaleListing {
                sid: 2,
                mname: "Bob".to_string(),
                sdate: "2024-01-16".to_string(),
            },
            SaleListing {
                sid: 4,
                mname: "Cathy".to_string(),
                sdate: "2024-01-18".to_string(),
            },
        ];

        let text = render_listing(&listing);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[1], LISTING_HEADER);
        assert_eq!(lines[2], "1. 銷售編號: 2 - 會員: Bob - 日期: 2024-01-16");
        assert_eq!(lines[3], "2. 銷售編號: 4 - 會員: Cathy - 日期: 2024-01-18");
        assert_eq!(lines[4], LISTING_FOOTER);
    }
}
