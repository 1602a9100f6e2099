use super::FrequencyTable;
use crate::candidates::Pin;
use crate::consts::PIN_SPACE;
use crate::error::{PinsightError, PsResult};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Loads a `PIN,COUNT` table from disk. See [`load_frequency_table_from_reader`].
pub fn load_frequency_table<P: AsRef<Path>>(path: P) -> PsResult<FrequencyTable> {
    let path = path.as_ref();
    info!("📂 Loading PIN frequencies from: {}", path.display());
    let file = File::open(path)?;
    load_frequency_table_from_reader(file)
}

/// Parses and validates a `PIN,COUNT` table.
///
/// Rows without exactly two fields, with a PIN that is not four ASCII digits,
/// or with a count that is not a positive integer are skipped. A repeated PIN
/// fails the whole load, as does ending up with anything other than all
/// 10,000 PINs. Nothing partial is ever returned.
pub fn load_frequency_table_from_reader<R: Read>(reader: R) -> PsResult<FrequencyTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut counts = vec![0u64; PIN_SPACE];
    let mut accepted = 0usize;
    let mut skipped = 0usize;

    for (row_idx, result) in rdr.records().enumerate() {
        let rec = match result {
            Ok(rec) => rec,
            Err(e) => {
                debug!("[Row {}] CSV parse error: {}", row_idx + 1, e);
                skipped += 1;
                continue;
            }
        };

        if rec.len() != 2 {
            skipped += 1;
            continue;
        }

        let pin: Pin = match rec[0].parse() {
            Ok(p) => p,
            Err(_) => {
                skipped += 1;
                continue;
            }
        };

        // The PIN field is matched as-is; only the count tolerates padding.
        let count: u64 = match rec[1].trim().parse() {
            Ok(c) if c >= 1 => c,
            _ => {
                skipped += 1;
                continue;
            }
        };

        let slot = &mut counts[pin.index()];
        if *slot != 0 {
            return Err(PinsightError::DuplicatePin {
                pin: pin.to_string(),
            });
        }
        *slot = count;
        accepted += 1;
    }

    if skipped > 0 {
        debug!("Skipped {} invalid rows in frequency table", skipped);
    }

    if accepted != PIN_SPACE {
        return Err(PinsightError::IncompleteTable {
            expected: PIN_SPACE,
            actual: accepted,
        });
    }

    info!("✅ Frequency table validated: {} PINs", accepted);
    FrequencyTable::from_counts(counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt::Write as _;

    fn full_csv() -> String {
        let mut s = String::new();
        for i in 0..PIN_SPACE {
            writeln!(s, "{:04},{}", i, i + 1).unwrap();
        }
        s
    }

    #[test]
    fn loads_a_complete_table() {
        let table = load_frequency_table_from_reader(full_csv().as_bytes()).unwrap();
        assert_eq!(table.len(), PIN_SPACE);
        assert_eq!(table.get(&"0000".parse().unwrap()), 1);
        assert_eq!(table.get(&"9999".parse().unwrap()), 10_000);
    }

    #[test]
    fn header_and_junk_rows_are_skipped() {
        let data = format!("pin,count\n\n12345,3\n12a4,3\n0001,0\n0002,x\n0003,1,2\n{}", full_csv());
        assert!(load_frequency_table_from_reader(data.as_bytes()).is_ok());
    }

    #[test]
    fn padded_pin_is_skipped() {
        let data = full_csv().replacen("0042,43", " 0042 ,43", 1);
        let err = load_frequency_table_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            PinsightError::IncompleteTable { actual: 9_999, .. }
        ));
    }

    #[test]
    fn duplicate_pin_fails_with_its_name() {
        let data = format!("1234,100\n1234,50\n{}", full_csv());
        let err = load_frequency_table_from_reader(data.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("1234"), "{}", err);
    }
}
