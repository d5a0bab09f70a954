use crate::domain::donor::Donor;

const NAME_WIDTH: usize = 50;
const TOTAL_WIDTH: usize = 12;
const NUM_HEADER_WIDTH: usize = 10;
const NUM_WIDTH: usize = 12;
const AVG_HEADER_WIDTH: usize = 12;
const AVG_WIDTH: usize = 14;
const SEPARATOR_WIDTH: usize = 90;

/// Right-aligns `value` in `width` columns, reserving a blank sign position
/// for non-negative numbers.
fn space_signed(value: String, width: usize) -> String {
    let signed = if value.starts_with('-') {
        value
    } else {
        format!(" {value}")
    };
    format!("{signed:>width$}")
}

fn header() -> String {
    format!(
        "{:<NAME_WIDTH$}| {:<TOTAL_WIDTH$}| {:<NUM_HEADER_WIDTH$}| {:<AVG_HEADER_WIDTH$}",
        "Donor Name", "Total Given", "Num Gifts", "Average Gift"
    )
}

fn row(donor: &Donor) -> String {
    format!(
        "{:<NAME_WIDTH$} ${}{}{}",
        donor.name(),
        space_signed(donor.total_donations().to_string_2dp(), TOTAL_WIDTH),
        space_signed(donor.num_donations().to_string(), NUM_WIDTH),
        space_signed(donor.avg_donations().to_string_2dp(), AVG_WIDTH),
    )
}

/// Renders the donor table for donors already in report order.
///
/// Layout: a leading blank line, the column header, a 90-dash separator,
/// one row per donor, then two trailing newlines.
pub fn render_report<'a, I>(donors: I) -> String
where
    I: IntoIterator<Item = &'a Donor>,
{
    let mut report = String::from("\n");
    report.push_str(&header());
    report.push('\n');
    report.push_str(&"-".repeat(SEPARATOR_WIDTH));
    report.push('\n');

    for donor in donors {
        report.push_str(&row(donor));
        report.push('\n');
    }

    report.push_str("\n\n");
    report
}
