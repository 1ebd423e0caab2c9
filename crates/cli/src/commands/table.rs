//! Table rendering shared by the commands

use std::ops::Range;

use tabled::{
    builder::Builder,
    grid::config::HorizontalLine,
    settings::{
        Alignment, Color, Style, Theme,
        object::{Columns, Rows},
    },
};

/// Render rows with a bold header and right-aligned numeric columns.
pub(crate) fn render(builder: Builder, numeric: Columns<Range<usize>>) -> String {
    let mut table = builder.build();
    let mut theme = Theme::from(Style::modern_rounded());

    theme.remove_horizontal_lines();
    theme.insert_horizontal_line(
        1,
        HorizontalLine::new(Some('─'), Some('┼'), Some('├'), Some('┤')),
    );

    table.with(theme);
    table.modify(Rows::first(), Color::BOLD);
    table.modify(numeric, Alignment::right());

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_header_and_right_aligned_numbers() {
        let mut builder = Builder::default();

        builder.push_record(["Plan", "Price"]);
        builder.push_record(["Basic", "$29.00"]);
        builder.push_record(["Growth", "$79"]);

        let output = render(builder, Columns::new(1..2));

        assert!(output.contains("Plan"));
        assert!(output.contains("├"));
        assert!(output.contains("    $79 │"));
    }
}
