use crate::error::StoreError;
use crate::traits::TableSpec;

/// Decode CSV text into records.
///
/// Strict: the first row that does not decode aborts the whole table with
/// its 1-based line number (the header is line 1). Fields and headers are
/// whitespace-trimmed before matching.
pub fn from_csv_str<S: TableSpec>(text: &str) -> Result<Vec<S>, StoreError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let mut records = Vec::new();
    for (idx, row) in reader.deserialize::<S::Row>().enumerate() {
        let row = row.map_err(|e| StoreError::Decode {
            table: S::FILE_STEM,
            line: idx + 2,
            message: e.to_string(),
        })?;
        records.push(S::from_row(row));
    }
    Ok(records)
}

/// Encode records as CSV text. The header row is written even when the
/// table is empty.
pub fn to_csv_string<S: TableSpec>(records: &[S]) -> Result<String, StoreError> {
    let rows: Vec<S::Row> = records.iter().map(|r| r.to_row()).collect();
    rows_to_csv_string(S::HEADERS, &rows)
}

/// Encode pre-shaped rows under an explicit header row. Used directly by
/// download responses whose columns include derived figures and so match
/// no stored table.
pub fn rows_to_csv_string<R: serde::Serialize>(
    headers: &[&str],
    rows: &[R],
) -> Result<String, StoreError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer
        .write_record(headers)
        .map_err(|e| StoreError::Encode(e.to_string()))?;
    for row in rows {
        writer
            .serialize(row)
            .map_err(|e| StoreError::Encode(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| StoreError::Encode(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| StoreError::Encode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, PartialEq)]
    struct Jam {
        label: String,
        kilos: f64,
    }

    #[derive(Debug, Serialize, Deserialize)]
    struct JamRow {
        #[serde(rename = "Parfum")]
        label: String,
        #[serde(rename = "Kilos")]
        kilos: f64,
    }

    impl TableSpec for Jam {
        const FILE_STEM: &'static str = "jams";
        const HEADERS: &'static [&'static str] = &["Parfum", "Kilos"];
        type Row = JamRow;

        fn to_row(&self) -> JamRow {
            JamRow { label: self.label.clone(), kilos: self.kilos }
        }

        fn from_row(row: JamRow) -> Self {
            Self { label: row.label, kilos: row.kilos }
        }

        fn seed() -> Vec<Self> {
            vec![Jam { label: "fraise".into(), kilos: 1.5 }]
        }
    }

    #[test]
    fn decode_trims_fields() {
        let rows: Vec<Jam> =
            from_csv_str("Parfum,Kilos\n abricot , 2.25 \n").unwrap();
        assert_eq!(rows, vec![Jam { label: "abricot".into(), kilos: 2.25 }]);
    }

    #[test]
    fn decode_reports_the_failing_line() {
        let err = from_csv_str::<Jam>("Parfum,Kilos\nfraise,1.5\nmyrtille,beaucoup\n")
            .unwrap_err();
        match err {
            StoreError::Decode { table, line, .. } => {
                assert_eq!(table, "jams");
                assert_eq!(line, 3);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn encode_writes_header_for_empty_table() {
        let text = to_csv_string::<Jam>(&[]).unwrap();
        assert_eq!(text, "Parfum,Kilos\n");
    }

    #[test]
    fn encode_uses_declared_headers() {
        let text =
            to_csv_string(&[Jam { label: "fraise".into(), kilos: 1.5 }]).unwrap();
        assert_eq!(text, "Parfum,Kilos\nfraise,1.5\n");
    }
}
