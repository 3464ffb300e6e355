// 📤 Account Export - flat, write-once snapshot of every account
//
// Format (no header, one account per line, UTF-8):
//   NUMBER|AMOUNT|CURRENCY
//
// Fields are never quoted. An account number containing the delimiter, a
// quote or a line break cannot be written and fails the export.
//
// The file handle lives inside the csv writer, so it is released when the
// writer drops: after a successful flush, or on any early return.

use crate::entities::{Account, Currency};
use crate::error::{ReportError, Result};
use rust_decimal::Decimal;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;

pub const FIELD_DELIMITER: u8 = b'|';

/// One parsed line of an export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedAccount {
    pub number: String,
    pub amount: Decimal,
    pub currency: Currency,
}

impl From<&Account> for ExportedAccount {
    fn from(account: &Account) -> Self {
        ExportedAccount {
            number: account.number.clone(),
            amount: account.amount,
            currency: account.currency,
        }
    }
}

fn writer_builder() -> csv::WriterBuilder {
    let mut builder = csv::WriterBuilder::new();
    builder
        .delimiter(FIELD_DELIMITER)
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Never)
        .terminator(csv::Terminator::Any(b'\n'));
    builder
}

fn check_number(number: &str) -> Result<()> {
    if number.contains(|c| matches!(c, '|' | '"' | '\n' | '\r')) {
        return Err(ReportError::InvalidState(format!(
            "account number {:?} cannot be exported unquoted",
            number
        )));
    }
    Ok(())
}

/// Write one line per account to `sink`. Returns the number of lines written.
pub fn write_accounts<'a, W, I>(sink: W, accounts: I) -> Result<usize>
where
    W: Write,
    I: IntoIterator<Item = &'a Account>,
{
    let mut writer = writer_builder().from_writer(sink);
    let mut written = 0;

    for account in accounts {
        check_number(&account.number)?;
        let amount = account.amount.to_string();
        writer.write_record([account.number.as_str(), amount.as_str(), account.currency.as_str()])?;
        written += 1;
    }

    writer.flush()?;
    Ok(written)
}

/// Export accounts to a file at `path`, truncating anything already there
pub fn export_accounts<'a, I>(path: &Path, accounts: I) -> Result<usize>
where
    I: IntoIterator<Item = &'a Account>,
{
    let to_export_error = |source: csv::Error| ReportError::Export {
        path: path.to_path_buf(),
        source,
    };

    let file = std::fs::File::create(path)
        .map_err(|e| to_export_error(csv::Error::from(e)))?;
    let written = write_accounts(file, accounts).map_err(|e| match e {
        ReportError::Csv(source) => to_export_error(source),
        other => other,
    })?;

    tracing::info!(path = %path.display(), accounts = written, "exported accounts");
    Ok(written)
}

/// Read an export back into its records
pub fn read_accounts(path: &Path) -> Result<Vec<ExportedAccount>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(FIELD_DELIMITER)
        .has_headers(false)
        .quoting(false)
        .from_path(path)
        .map_err(|source| ReportError::Export {
            path: path.to_path_buf(),
            source,
        })?;

    let mut records = Vec::new();

    for (index, result) in reader.records().enumerate() {
        let record = result.map_err(|source| ReportError::Export {
            path: path.to_path_buf(),
            source,
        })?;
        records.push(parse_record(&record, index + 1)?);
    }

    Ok(records)
}

fn parse_record(record: &csv::StringRecord, line: usize) -> Result<ExportedAccount> {
    let malformed = |reason: String| ReportError::MalformedExport { line, reason };

    if record.len() != 3 {
        return Err(malformed(format!("expected 3 fields, found {}", record.len())));
    }

    let amount = Decimal::from_str(&record[1])
        .map_err(|e| malformed(format!("bad amount '{}': {}", &record[1], e)))?;
    let currency = Currency::from_code(&record[2])
        .ok_or_else(|| malformed(format!("unknown currency '{}'", &record[2])))?;

    Ok(ExportedAccount {
        number: record[0].to_string(),
        amount,
        currency,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::AccountType;
    use std::io;

    fn accounts() -> Vec<Account> {
        vec![
            Account::new("PL01", Decimal::new(100050, 2), Currency::Pln, AccountType::Checking),
            Account::new("PL02", Decimal::new(-25, 1), Currency::Usd, AccountType::Credit),
            Account::new("PL03", Decimal::ZERO, Currency::Eur, AccountType::Savings),
        ]
    }

    #[test]
    fn test_write_format() {
        let mut buffer = Vec::new();
        let written = write_accounts(&mut buffer, &accounts()).unwrap();

        assert_eq!(written, 3);
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "PL01|1000.50|PLN\nPL02|-2.5|USD\nPL03|0|EUR\n"
        );
    }

    #[test]
    fn test_write_nothing() {
        let mut buffer = Vec::new();
        let none: Vec<Account> = vec![];
        assert_eq!(write_accounts(&mut buffer, &none).unwrap(), 0);
        assert!(buffer.is_empty());
    }

    struct BrokenSink;

    impl Write for BrokenSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::Other, "disk full"))
        }
    }

    #[test]
    fn test_write_failure_is_reported() {
        let err = write_accounts(BrokenSink, &accounts()).unwrap_err();
        assert!(matches!(err, ReportError::Csv(_)));
    }

    #[test]
    fn test_write_rejects_numbers_needing_quotes() {
        for number in ["AB|12", "AB\"12", "AB\n12", "AB\r12"] {
            let mut buffer = Vec::new();
            let bad = vec![Account::new(number, Decimal::ONE, Currency::Pln, AccountType::Checking)];

            let err = write_accounts(&mut buffer, &bad).unwrap_err();
            assert!(err.is_invalid_state());
            assert!(buffer.is_empty());
        }
    }

    #[test]
    fn test_write_never_quotes() {
        let mut buffer = Vec::new();
        let spaced = vec![Account::new("PL 01,x", Decimal::ONE, Currency::Gbp, AccountType::Deposit)];

        write_accounts(&mut buffer, &spaced).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "PL 01,x|1|GBP\n");
    }

    #[test]
    fn test_parse_rejects_bad_lines() {
        let record = csv::StringRecord::from(vec!["PL01", "abc", "PLN"]);
        assert!(matches!(
            parse_record(&record, 1),
            Err(ReportError::MalformedExport { line: 1, .. })
        ));

        let record = csv::StringRecord::from(vec!["PL01", "1.00", "XYZ"]);
        assert!(parse_record(&record, 2).is_err());

        let record = csv::StringRecord::from(vec!["PL01", "1.00"]);
        assert!(parse_record(&record, 3).is_err());
    }
}
