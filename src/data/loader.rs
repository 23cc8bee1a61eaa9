use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use arrow::array::{Array, AsArray, BooleanArray, Float32Array, Float64Array, Int32Array, Int64Array, StringArray};
use arrow::datatypes::DataType;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;

use super::error::DataError;
use super::model::{Mission, MissionDataset, Outcome};

// ---------------------------------------------------------------------------
// Column-name mapping
// ---------------------------------------------------------------------------

// Header aliases accepted for each semantic column. The original export uses
// the camel-cased spellings; snake_case and spaced variants come from other
// export paths of the same data.
const SITE_HEADERS: &[&str] = &["LaunchSite", "Launch Site", "launch_site"];
const PAYLOAD_HEADERS: &[&str] = &[
    "PayloadMassKG",
    "Payload Mass (kg)",
    "payload_mass_kg",
    "PayloadMass",
];
const BOOSTER_HEADERS: &[&str] = &[
    "BoosterVersionCategory",
    "Booster Version Category",
    "booster_version_category",
];
const OUTCOME_HEADERS: &[&str] = &["Class", "Outcome", "class", "outcome"];

fn find_header(headers: &[String], candidates: &[&str]) -> Result<usize> {
    headers
        .iter()
        .position(|h| candidates.contains(&h.as_str()))
        .with_context(|| format!("missing required column (one of {candidates:?})"))
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a mission dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row naming the four mission columns
/// * `.json`    – records-oriented array of objects (`df.to_json(orient='records')`)
/// * `.parquet` – flat columns, as written by Pandas or Polars
///
/// Any read or parse failure surfaces as [`DataError::Unavailable`]; a table
/// with zero data rows surfaces as [`DataError::EmptyDataset`].
pub fn load_file(path: &Path) -> Result<MissionDataset, DataError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let missions = match ext.as_str() {
        "parquet" | "pq" => load_parquet(path),
        "json" => load_json(path),
        "csv" => load_csv(path),
        other => Err(anyhow::anyhow!("unsupported file extension: .{other}")),
    }
    .map_err(|e| DataError::Unavailable(format!("{e:#}")))?;

    MissionDataset::from_missions(missions)
}

// ---------------------------------------------------------------------------
// Shared cell parsing
// ---------------------------------------------------------------------------

fn validate_payload(kg: f64, row: usize) -> Result<f64> {
    if !kg.is_finite() || kg < 0.0 {
        bail!("row {row}: payload mass {kg} is not a non-negative finite number");
    }
    Ok(kg)
}

fn parse_outcome_str(s: &str, row: usize) -> Result<Outcome> {
    match s.trim() {
        "0" | "false" => Ok(Outcome::Failure),
        "1" | "true" => Ok(Outcome::Success),
        other => bail!("row {row}: outcome '{other}' is not a 0/1 indicator"),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names, one mission per data row.
fn load_csv(path: &Path) -> Result<Vec<Mission>> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let site_idx = find_header(&headers, SITE_HEADERS)?;
    let payload_idx = find_header(&headers, PAYLOAD_HEADERS)?;
    let booster_idx = find_header(&headers, BOOSTER_HEADERS)?;
    let outcome_idx = find_header(&headers, OUTCOME_HEADERS)?;

    let mut missions = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;

        let payload_raw = record.get(payload_idx).unwrap_or("");
        let payload_mass_kg = payload_raw
            .trim()
            .parse::<f64>()
            .with_context(|| format!("row {row_no}: payload mass '{payload_raw}' is not a number"))
            .and_then(|kg| validate_payload(kg, row_no))?;

        missions.push(Mission {
            launch_site: record.get(site_idx).unwrap_or("").to_string(),
            payload_mass_kg,
            booster_version_category: record.get(booster_idx).unwrap_or("").to_string(),
            outcome: parse_outcome_str(record.get(outcome_idx).unwrap_or(""), row_no)?,
        });
    }

    Ok(missions)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, the default `df.to_json(orient='records')`):
///
/// ```json
/// [
///   {
///     "LaunchSite": "KSC LC-39A",
///     "PayloadMassKG": 4500.0,
///     "BoosterVersionCategory": "FT",
///     "Class": 1
///   },
///   ...
/// ]
/// ```
///
/// The outcome value may be a 0/1 number or a boolean.
fn load_json(path: &Path) -> Result<Vec<Mission>> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let root: JsonValue = serde_json::from_str(&text).context("parsing JSON")?;

    let records = root.as_array().context("Expected top-level JSON array")?;

    let mut missions = Vec::with_capacity(records.len());

    for (row, rec) in records.iter().enumerate() {
        let obj = rec
            .as_object()
            .with_context(|| format!("Row {row} is not a JSON object"))?;

        let field = |candidates: &[&str]| -> Option<&JsonValue> {
            candidates.iter().find_map(|key| obj.get(*key))
        };

        let launch_site = field(SITE_HEADERS)
            .and_then(|v| v.as_str())
            .with_context(|| format!("row {row}: missing launch site"))?
            .to_string();

        let payload_mass_kg = field(PAYLOAD_HEADERS)
            .and_then(|v| v.as_f64())
            .with_context(|| format!("row {row}: missing or non-numeric payload mass"))
            .and_then(|kg| validate_payload(kg, row))?;

        let booster_version_category = field(BOOSTER_HEADERS)
            .and_then(|v| v.as_str())
            .with_context(|| format!("row {row}: missing booster version category"))?
            .to_string();

        let outcome = match field(OUTCOME_HEADERS) {
            Some(JsonValue::Bool(b)) => Outcome::from(*b),
            Some(JsonValue::Number(n)) => n
                .as_i64()
                .and_then(Outcome::from_indicator)
                .with_context(|| format!("row {row}: outcome {n} is not a 0/1 indicator"))?,
            _ => bail!("row {row}: missing outcome column"),
        };

        missions.push(Mission {
            launch_site,
            payload_mass_kg,
            booster_version_category,
            outcome,
        });
    }

    Ok(missions)
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load missions from a Parquet file with flat columns.
///
/// Expected schema:
/// - launch site and booster category: Utf8 or LargeUtf8
/// - payload mass: Float64 or Float32
/// - outcome: Int64, Int32, or Boolean
///
/// Works with files written by both **Pandas** (`df.to_parquet()`) and
/// **Polars** (`df.write_parquet()`).
fn load_parquet(path: &Path) -> Result<Vec<Mission>> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut missions = Vec::new();

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        let names: Vec<String> = batch
            .schema()
            .fields()
            .iter()
            .map(|f| f.name().clone())
            .collect();

        let site_col = batch.column(find_header(&names, SITE_HEADERS)?);
        let payload_col = batch.column(find_header(&names, PAYLOAD_HEADERS)?);
        let booster_col = batch.column(find_header(&names, BOOSTER_HEADERS)?);
        let outcome_col = batch.column(find_header(&names, OUTCOME_HEADERS)?);

        for row in 0..batch.num_rows() {
            let payload_mass_kg = extract_f64(payload_col, row)
                .with_context(|| format!("row {row}: failed to read payload mass"))
                .and_then(|kg| validate_payload(kg, row))?;

            missions.push(Mission {
                launch_site: extract_string(site_col, row)
                    .with_context(|| format!("row {row}: failed to read launch site"))?,
                payload_mass_kg,
                booster_version_category: extract_string(booster_col, row)
                    .with_context(|| format!("row {row}: failed to read booster category"))?,
                outcome: extract_outcome(outcome_col, row)
                    .with_context(|| format!("row {row}: failed to read outcome"))?,
            });
        }
    }

    Ok(missions)
}

// -- Parquet / Arrow helpers --

fn extract_string(col: &Arc<dyn Array>, row: usize) -> Result<String> {
    if col.is_null(row) {
        bail!("null value in string column");
    }
    match col.data_type() {
        DataType::Utf8 => {
            let arr = col
                .as_any()
                .downcast_ref::<StringArray>()
                .context("expected StringArray")?;
            Ok(arr.value(row).to_string())
        }
        DataType::LargeUtf8 => {
            let arr = col.as_string::<i64>();
            Ok(arr.value(row).to_string())
        }
        other => bail!("Expected Utf8 column, got {other:?}"),
    }
}

fn extract_f64(col: &Arc<dyn Array>, row: usize) -> Result<f64> {
    if col.is_null(row) {
        bail!("null value in numeric column");
    }
    if let Some(arr) = col.as_any().downcast_ref::<Float64Array>() {
        Ok(arr.value(row))
    } else if let Some(arr) = col.as_any().downcast_ref::<Float32Array>() {
        Ok(arr.value(row) as f64)
    } else {
        bail!(
            "Expected Float64 or Float32 column, got {:?}",
            col.data_type()
        )
    }
}

fn extract_outcome(col: &Arc<dyn Array>, row: usize) -> Result<Outcome> {
    if col.is_null(row) {
        bail!("null value in outcome column");
    }
    let indicator = if let Some(arr) = col.as_any().downcast_ref::<Int64Array>() {
        arr.value(row)
    } else if let Some(arr) = col.as_any().downcast_ref::<Int32Array>() {
        arr.value(row) as i64
    } else if let Some(arr) = col.as_any().downcast_ref::<BooleanArray>() {
        return Ok(Outcome::from(arr.value(row)));
    } else {
        bail!(
            "Expected Int64, Int32, or Boolean column, got {:?}",
            col.data_type()
        )
    };
    Outcome::from_indicator(indicator)
        .with_context(|| format!("outcome {indicator} is not a 0/1 indicator"))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use arrow::array::{Float64Array, Int64Array, StringArray};
    use arrow::datatypes::{DataType, Field, Schema};
    use arrow::record_batch::RecordBatch;
    use parquet::arrow::ArrowWriter;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn load_csv_with_original_headers() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("launches.csv");

        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "FlightNumber,LaunchSite,PayloadMassKG,BoosterVersionCategory,Class").unwrap();
        writeln!(file, "1,CCAFS LC-40,500.0,v1.0,0").unwrap();
        writeln!(file, "2,KSC LC-39A,4500.0,FT,1").unwrap();
        drop(file);

        let ds = load_file(&path).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.payload_min, 500.0);
        assert_eq!(ds.payload_max, 4500.0);
        assert_eq!(ds.missions[0].launch_site, "CCAFS LC-40");
        assert_eq!(ds.missions[0].outcome, Outcome::Failure);
        assert_eq!(ds.missions[1].booster_version_category, "FT");
        assert_eq!(ds.missions[1].outcome, Outcome::Success);
    }

    #[test]
    fn load_csv_with_snake_case_headers() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("launches.csv");

        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "launch_site,payload_mass_kg,booster_version_category,outcome").unwrap();
        writeln!(file, "VAFB SLC-4E,3200.5,v1.1,1").unwrap();
        drop(file);

        let ds = load_file(&path).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.missions[0].payload_mass_kg, 3200.5);
        assert!(ds.missions[0].outcome.is_success());
    }

    #[test]
    fn missing_column_is_unavailable() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("launches.csv");

        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "LaunchSite,BoosterVersionCategory,Class").unwrap();
        writeln!(file, "CCAFS LC-40,v1.0,0").unwrap();
        drop(file);

        let err = load_file(&path).unwrap_err();
        assert!(matches!(err, DataError::Unavailable(_)));
        assert!(err.to_string().contains("PayloadMassKG"));
    }

    #[test]
    fn zero_rows_is_empty_dataset() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("launches.csv");

        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "LaunchSite,PayloadMassKG,BoosterVersionCategory,Class").unwrap();
        drop(file);

        let err = load_file(&path).unwrap_err();
        assert!(matches!(err, DataError::EmptyDataset));
    }

    #[test]
    fn negative_payload_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("launches.csv");

        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "LaunchSite,PayloadMassKG,BoosterVersionCategory,Class").unwrap();
        writeln!(file, "CCAFS LC-40,-10.0,v1.0,1").unwrap();
        drop(file);

        let err = load_file(&path).unwrap_err();
        assert!(matches!(err, DataError::Unavailable(_)));
    }

    #[test]
    fn missing_file_is_unavailable() {
        let err = load_file(Path::new("/nonexistent/launches.csv")).unwrap_err();
        assert!(matches!(err, DataError::Unavailable(_)));
    }

    #[test]
    fn unsupported_extension_is_unavailable() {
        let err = load_file(Path::new("launches.xlsx")).unwrap_err();
        assert!(matches!(err, DataError::Unavailable(_)));
    }

    #[test]
    fn load_json_records() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("launches.json");

        std::fs::write(
            &path,
            r#"[
                {"LaunchSite":"CCAFS SLC-40","PayloadMassKG":2500.0,"BoosterVersionCategory":"FT","Class":1},
                {"LaunchSite":"CCAFS SLC-40","PayloadMassKG":600.0,"BoosterVersionCategory":"v1.0","Class":false}
            ]"#,
        )
        .unwrap();

        let ds = load_file(&path).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.sites, vec!["CCAFS SLC-40"]);
        assert_eq!(ds.missions[1].outcome, Outcome::Failure);
    }

    #[test]
    fn load_parquet_flat_columns() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("launches.parquet");

        let schema = Arc::new(Schema::new(vec![
            Field::new("LaunchSite", DataType::Utf8, false),
            Field::new("PayloadMassKG", DataType::Float64, false),
            Field::new("BoosterVersionCategory", DataType::Utf8, false),
            Field::new("Class", DataType::Int64, false),
        ]));
        let batch = RecordBatch::try_new(
            schema.clone(),
            vec![
                Arc::new(StringArray::from(vec!["KSC LC-39A", "VAFB SLC-4E"])),
                Arc::new(Float64Array::from(vec![9600.0, 500.0])),
                Arc::new(StringArray::from(vec!["B5", "v1.1"])),
                Arc::new(Int64Array::from(vec![1i64, 0])),
            ],
        )
        .unwrap();

        let file = std::fs::File::create(&path).unwrap();
        let mut writer = ArrowWriter::try_new(file, schema, None).unwrap();
        writer.write(&batch).unwrap();
        writer.close().unwrap();

        let ds = load_file(&path).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.payload_max, 9600.0);
        assert_eq!(ds.missions[0].outcome, Outcome::Success);
        assert_eq!(ds.missions[1].launch_site, "VAFB SLC-4E");
    }
}
