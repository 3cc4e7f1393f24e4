//! Bulk import of component tables pasted as text.

use pk_core::units::{bar, k};

use crate::component::{Component, FunctionalGroups};
use crate::error::ModelError;
use crate::matrix::{Delimiter, parse_number};

/// Column layout expected by a bulk import, chosen by the selected model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnLayout {
    /// `Name, Tc, Pc, ω`
    #[default]
    Basic,
    /// `Name, Tc, Pc, ω, Zc`
    WithZc,
    /// `Name, Tc, Pc, ω, c1, c2, c3, Groups`
    Psrk,
}

impl ColumnLayout {
    pub fn columns(self) -> &'static [&'static str] {
        match self {
            ColumnLayout::Basic => &["Name", "Tc", "Pc", "ω"],
            ColumnLayout::WithZc => &["Name", "Tc", "Pc", "ω", "Zc"],
            ColumnLayout::Psrk => &["Name", "Tc", "Pc", "ω", "c1", "c2", "c3", "Groups"],
        }
    }

    /// Sample input shown next to the paste area.
    pub fn example(self) -> &'static str {
        match self {
            ColumnLayout::Basic => {
                "Name\tTc\tPc\tω\nMethane\t190.6\t46.0\t0.011\nEthane\t305.3\t48.7\t0.099"
            }
            ColumnLayout::WithZc => {
                "Name\tTc\tPc\tω\tZc\nMethane\t190.6\t46.0\t0.011\t0.286\nEthane\t305.3\t48.7\t0.099\t0.279"
            }
            ColumnLayout::Psrk => {
                "Name\tTc\tPc\tω\tc1\tc2\tc3\tGroups\nMethane\t190.6\t46.0\t0.011\t0.49258\t0\t0\t1:1\nEthane\t305.3\t48.7\t0.099\t0.7\t0\t0\t1:2"
            }
        }
    }

    fn column_error(self, got: usize) -> String {
        let list = self.columns().join(", ");
        let count = self.columns().len();
        match self {
            ColumnLayout::Basic => format!("Requires {count} columns ({list}), got {got}"),
            ColumnLayout::WithZc => format!("RKPR requires {count} columns ({list}), got {got}"),
            ColumnLayout::Psrk => format!("PSRK requires {count} columns ({list}), got {got}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BulkImportOptions {
    pub has_header: bool,
    pub delimiter: Delimiter,
}

impl Default for BulkImportOptions {
    fn default() -> Self {
        Self {
            has_header: true,
            delimiter: Delimiter::Whitespace,
        }
    }
}

/// Outcome of a bulk import: the valid rows and one error per rejected line.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BulkImport {
    pub components: Vec<Component>,
    pub errors: Vec<ModelError>,
}

impl BulkImport {
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

/// Parses a pasted component table.
///
/// Line numbers in errors count from the first non-blank line of `text`,
/// header included.
/// Blank lines are skipped.
pub fn parse_components(text: &str, layout: ColumnLayout, options: BulkImportOptions) -> BulkImport {
    let mut report = BulkImport::default();
    let skip = usize::from(options.has_header);

    for (idx, line) in text.trim().lines().enumerate().skip(skip) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match parse_line(line, layout, options.delimiter) {
            Ok(component) => report.components.push(component),
            Err(message) => report.errors.push(ModelError::Line {
                line: idx + 1,
                message,
            }),
        }
    }

    report
}

fn parse_line(line: &str, layout: ColumnLayout, delimiter: Delimiter) -> Result<Component, String> {
    let parts = delimiter.split(line);
    let expected = layout.columns().len();
    if parts.len() < expected {
        return Err(layout.column_error(parts.len()));
    }

    let number = |token: &str| {
        parse_number(token).map_err(|e| format!("Could not convert values to numbers - {e}"))
    };

    let name = parts[0];
    let tc = number(parts[1])?;
    let pc = number(parts[2])?;
    let w = number(parts[3])?;

    if tc <= 0.0 || pc <= 0.0 {
        return Err("Tc and Pc must be positive".to_string());
    }

    let mut component = Component::new(name, k(tc), bar(pc), w);

    match layout {
        ColumnLayout::Basic => {}
        ColumnLayout::WithZc => {
            let zc = number(parts[4])?;
            if zc <= 0.0 || zc >= 1.0 {
                return Err("Zc must be between 0 and 1".to_string());
            }
            component = component.with_zc(zc);
        }
        ColumnLayout::Psrk => {
            let c = [number(parts[4])?, number(parts[5])?, number(parts[6])?];
            // Group lists such as `1:1, 2:1` span every trailing cell.
            let groups = parts[expected - 1..]
                .join(",")
                .parse::<FunctionalGroups>()
                .map_err(|e| e.to_string())?;
            component = component.with_mathias_copeman(c).with_groups(groups);
        }
    }

    Ok(component)
}
