use crate::errors::{OseError, Result};

/// Render the latest session as a two-row table: the raw header line and
/// the newest record line, split into columns and aligned. No filtering
/// and no reshape; the console shows the data exactly as served.
pub fn format_current(raw_lines: &[String]) -> Result<String> {
    if raw_lines.len() < 2 {
        return Err(OseError::DataError(
            "history contains no data rows".to_string(),
        ));
    }

    let header: Vec<&str> = raw_lines[0].split(',').collect();
    let newest: Vec<&str> = raw_lines[1].split(',').collect();

    let columns = header.len().max(newest.len());
    let mut widths = vec![0usize; columns];
    for (i, field) in header.iter().enumerate() {
        widths[i] = widths[i].max(field.chars().count());
    }
    for (i, field) in newest.iter().enumerate() {
        widths[i] = widths[i].max(field.chars().count());
    }

    let mut out = String::new();
    for row in [&header, &newest] {
        for (i, field) in row.iter().enumerate() {
            if i > 0 {
                out.push_str("  ");
            }
            out.push_str(field);
            // Manual padding, char-count based: column values may hold
            // non-ASCII exchange names.
            for _ in field.chars().count()..widths[i] {
                out.push(' ');
            }
        }
        out.push('\n');
    }

    Ok(out)
}

pub fn render_current(raw_lines: &[String]) -> Result<()> {
    print!("{}", format_current(raw_lines)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_header_and_newest_row_aligned() {
        let lines = vec![
            "quote_date,paper,exch,open,high,low,close,volume,value".to_string(),
            "20181008,TRVX,Oslo Børs,11.28,11.50,11.06,11.44,114880,1299423".to_string(),
            "20181005,TRVX,Oslo Børs,11.10,11.30,11.00,11.28,90000,1000000".to_string(),
        ];

        let table = format_current(&lines).unwrap();
        let rows: Vec<&str> = table.lines().collect();

        assert_eq!(rows.len(), 2);
        assert!(rows[0].starts_with("quote_date"));
        assert!(rows[1].starts_with("20181008"));
        // Older rows never appear in the snapshot.
        assert!(!table.contains("20181005"));
        // Columns line up: the second column starts at the same offset
        // in both rows.
        let header_col = rows[0].find("paper").unwrap();
        let data_col = rows[1].find("TRVX").unwrap();
        assert_eq!(header_col, data_col);
    }

    #[test]
    fn headerless_history_is_an_error() {
        let lines = vec!["quote_date,paper".to_string()];
        assert!(format_current(&lines).is_err());
    }
}
