use std::io::{self, BufRead, Write};

/// Inclusive bounds accepted by [`read_valid_id`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdRange {
    pub min: u64,
    pub max: u64,
}

impl Default for IdRange {
    fn default() -> Self {
        Self { min: 1, max: 10 }
    }
}

impl IdRange {
    pub fn contains(&self, value: u64) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Print `prompt` without a newline and read one line.
///
/// Returns the trimmed line, or `None` once the input is exhausted.
pub fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(out, "{prompt}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Prompt until the user enters a decimal number inside `range`.
///
/// The accepted value comes back in canonical form (`"007"` becomes `"7"`), ready to be
/// placed in a URL. End of input stops the loop with `None`.
pub fn read_valid_id<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
    range: IdRange,
) -> io::Result<Option<String>> {
    loop {
        let Some(entered) = read_line(input, out, prompt)? else {
            tracing::debug!("input closed while waiting for an id");
            return Ok(None);
        };

        if entered.is_empty() || !entered.bytes().all(|b| b.is_ascii_digit()) {
            writeln!(out, "Error: '{entered}' is not a number. Please enter a digit.")?;
            continue;
        }

        // Digit strings beyond u64 are necessarily out of range.
        match entered.parse::<u64>() {
            Ok(value) if range.contains(value) => return Ok(Some(value.to_string())),
            _ => writeln!(
                out,
                "Error: Please enter a number between {} and {}.",
                range.min, range.max
            )?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(script: &str, range: IdRange) -> (Option<String>, String) {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();
        let got = read_valid_id(&mut input, &mut out, "ID: ", range).expect("io");
        (got, String::from_utf8(out).expect("utf8"))
    }

    #[test]
    fn accepts_every_value_in_range_on_first_try() {
        for v in 1..=10 {
            let (got, out) = run(&format!("{v}\n"), IdRange::default());
            assert_eq!(got, Some(v.to_string()));
            assert_eq!(out, "ID: ");
        }
    }

    #[test]
    fn rejects_non_digits_naming_the_input() {
        let (got, out) = run("abc\n-3\n 4 \n", IdRange::default());

        assert_eq!(got.as_deref(), Some("4"));
        assert!(out.contains("Error: 'abc' is not a number. Please enter a digit."));
        assert!(out.contains("Error: '-3' is not a number. Please enter a digit."));
        assert_eq!(out.matches("ID: ").count(), 3);
    }

    #[test]
    fn rejects_out_of_range_numbers() {
        let (got, out) = run("0\n11\n99999999999999999999999\n10\n", IdRange::default());

        assert_eq!(got.as_deref(), Some("10"));
        assert_eq!(out.matches("Error: Please enter a number between 1 and 10.").count(), 3);
    }

    #[test]
    fn empty_line_is_not_a_number() {
        let (got, out) = run("\n2\n", IdRange::default());

        assert_eq!(got.as_deref(), Some("2"));
        assert!(out.contains("Error: '' is not a number."));
    }

    #[test]
    fn leading_zeros_are_normalized() {
        let (got, _) = run("007\n", IdRange::default());
        assert_eq!(got.as_deref(), Some("7"));
    }

    #[test]
    fn custom_range_is_honoured() {
        let range = IdRange { min: 50, max: 60 };
        let (got, out) = run("10\n55\n", range);

        assert_eq!(got.as_deref(), Some("55"));
        assert!(out.contains("between 50 and 60"));
    }

    #[test]
    fn end_of_input_stops_the_loop() {
        let (got, out) = run("x\n", IdRange::default());

        assert_eq!(got, None);
        assert!(out.contains("'x' is not a number"));
    }
}
