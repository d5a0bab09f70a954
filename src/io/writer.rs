use std::io::Write;

use crate::domain::donor::Donor;

#[derive(serde::Serialize)]
/// Internal CSV output row for the donor summary.
///
/// Headers written (in this order): `name,total,num_gifts,average`.
/// Monetary fields are formatted to 2 decimal places as strings.
struct SummaryRow<'a> {
    name: &'a str,
    total: String,
    num_gifts: usize,
    average: String,
}

/// Writes one summary row per donor, in the order given.
///
/// # Errors
///
/// Returns a `csv::Error` if writing/serializing any row fails.
///
/// # Examples
///
/// ```
/// use mailroom::domain::donor::Donor;
/// use mailroom::io::writer::write_summary;
///
/// let donors = vec![Donor::with_donations("Alice", vec!["12.5".parse().unwrap()]).unwrap()];
///
/// let mut out = Vec::new();
/// write_summary(&mut out, &donors).unwrap();
///
/// let s = String::from_utf8(out).unwrap();
/// assert_eq!(s, "name,total,num_gifts,average\nAlice,12.50,1,12.50\n");
/// ```
pub fn write_summary<'a, W, I>(writer: W, donors: I) -> Result<(), csv::Error>
where
    W: Write,
    I: IntoIterator<Item = &'a Donor>,
{
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(writer);

    let mut wrote_any = false;
    for donor in donors {
        let row = SummaryRow {
            name: donor.name(),
            total: donor.total_donations().to_string_2dp(),
            num_gifts: donor.num_donations(),
            average: donor.avg_donations().to_string_2dp(),
        };
        wtr.serialize(row)?;
        wrote_any = true;
    }

    // serialize() emits the header with the first row; an empty summary still gets one.
    if !wrote_any {
        wtr.write_record(["name", "total", "num_gifts", "average"])?;
    }

    wtr.flush()?;
    Ok(())
}
