//! Rendering of the adapter name table.

use std::io::Write;

use crate::domain::NameTable;
use crate::error::Result;

/// How the name table is written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ReportFormat {
    /// One name per line, nothing else.
    #[default]
    Lines,
    /// A single JSON array of names.
    Json,
}

/// Write every name in `table`, in table order.
pub fn report<W: Write>(table: &NameTable, format: ReportFormat, out: &mut W) -> Result<()> {
    match format {
        ReportFormat::Lines => {
            for name in table {
                writeln!(out, "{}", name)?;
            }
        }
        ReportFormat::Json => {
            serde_json::to_writer(&mut *out, table)?;
            writeln!(out)?;
        }
    }

    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AdapterName;

    fn table(names: &[&str]) -> NameTable {
        let mut table = NameTable::new();
        for name in names {
            table.push(AdapterName::new(name).unwrap()).unwrap();
        }
        table
    }

    fn render(table: &NameTable, format: ReportFormat) -> String {
        let mut out = Vec::new();
        report(table, format, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_lines_in_table_order() {
        let table = table(&["mlx5_1", "mlx5_0", "hfi1_0"]);
        assert_eq!(render(&table, ReportFormat::Lines), "mlx5_1\nmlx5_0\nhfi1_0\n");
    }

    #[test]
    fn test_empty_table_prints_nothing() {
        assert_eq!(render(&NameTable::new(), ReportFormat::Lines), "");
    }

    #[test]
    fn test_json_array() {
        let table = table(&["mlx5_0", "mlx5_1"]);
        assert_eq!(
            render(&table, ReportFormat::Json),
            "[\"mlx5_0\",\"mlx5_1\"]\n"
        );
        assert_eq!(render(&NameTable::new(), ReportFormat::Json), "[]\n");
    }
}
