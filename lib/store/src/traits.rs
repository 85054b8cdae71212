use serde::Serialize;
use serde::de::DeserializeOwned;

/// TableSpec binds a record type to its CSV table form.
///
/// Each table is one file under the data directory, named `<FILE_STEM>.csv`,
/// with a fixed header row. `Row` is the serde-facing shape whose field
/// declaration order MUST match `HEADERS`, since rows are written without
/// a serde-generated header.
pub trait TableSpec: Sized + Clone {
    /// File stem under the data directory, e.g. "products" → products.csv.
    const FILE_STEM: &'static str;

    /// Header row, written verbatim on every export.
    const HEADERS: &'static [&'static str];

    /// CSV-facing row type. Header names are bound via serde renames.
    type Row: Serialize + DeserializeOwned;

    /// Convert the record into its CSV row form.
    fn to_row(&self) -> Self::Row;

    /// Build a record from a decoded CSV row.
    fn from_row(row: Self::Row) -> Self;

    /// Built-in default rows, used when the table file is missing or unreadable.
    fn seed() -> Vec<Self>;
}
