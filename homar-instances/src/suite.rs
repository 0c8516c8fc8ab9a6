use crate::TestCase;
use anyhow::{anyhow, Result};
use std::io::{BufRead, Write};

/// Writes a suite in the line-oriented text format: a case count line, then
/// per case one `capacity item_count max_value_range` header followed by
/// `item_count` lines of `size value`.
pub fn write_suite<W: Write>(writer: &mut W, cases: &[TestCase]) -> Result<()> {
    writeln!(writer, "{}", cases.len())?;
    for (t, case) in cases.iter().enumerate() {
        if case.sizes.len() != case.values.len() {
            return Err(anyhow!(
                "Test case {} has {} sizes but {} values",
                t + 1,
                case.sizes.len(),
                case.values.len()
            ));
        }
        writeln!(
            writer,
            "{} {} {}",
            case.capacity,
            case.sizes.len(),
            case.max_value
        )?;
        for (size, value) in case.sizes.iter().zip(&case.values) {
            writeln!(writer, "{} {}", size, value)?;
        }
    }
    Ok(())
}

pub fn read_suite<R: BufRead>(mut reader: R) -> Result<Vec<TestCase>> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;

    // The format is whitespace-delimited throughout, so parse a token stream
    // rather than individual lines.
    let mut tokens = text.split_whitespace();
    let mut next_u64 = |what: &str| -> Result<u64> {
        tokens
            .next()
            .ok_or_else(|| anyhow!("Unexpected end of suite while reading {}", what))?
            .parse::<u64>()
            .map_err(|e| anyhow!("Invalid {}: {}", what, e))
    };

    let num_cases = next_u64("test case count")?;
    let mut cases = Vec::new();
    for t in 0..num_cases {
        let capacity = next_u64(&format!("capacity of test case {}", t + 1))?;
        let num_items = usize::try_from(next_u64(&format!(
            "item count of test case {}",
            t + 1
        ))?)?;
        let max_value = next_u64(&format!("max value range of test case {}", t + 1))?;

        let mut sizes = Vec::new();
        let mut values = Vec::new();
        for i in 0..num_items {
            sizes.push(next_u64(&format!(
                "size of item {} in test case {}",
                i + 1,
                t + 1
            ))?);
            values.push(next_u64(&format!(
                "value of item {} in test case {}",
                i + 1,
                t + 1
            ))?);
        }

        cases.push(TestCase {
            capacity,
            max_value,
            sizes,
            values,
        });
    }

    if tokens.next().is_some() {
        return Err(anyhow!(
            "Trailing data after {} test cases",
            num_cases
        ));
    }
    Ok(cases)
}
