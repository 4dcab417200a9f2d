//! Writing runs of fixtures.

use crate::fixture::Fixture;

use std::io::{self, Write};

use rand::Rng;

//-----------------------------------------------------------------------------

/// Default number of fixtures in a run.
pub const DEFAULT_COUNT: usize = 256;

/// Writes `count` random fixtures to `out`, one per line, and flushes the output.
///
/// Each line is the textual form of a [`Fixture`] followed by `\n`.
/// The fixtures are generated and written in order.
///
/// # Errors
///
/// Any I/O error from `out` is passed through.
/// Lines written before the error should not be considered a valid run.
///
/// # Examples
///
/// ```
/// use bitwidth_fixtures::emit;
/// use bitwidth_fixtures::fixture::Fixture;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(1);
/// let mut buf: Vec<u8> = Vec::new();
/// emit::write_fixtures(&mut buf, &mut rng, 3).unwrap();
///
/// let text = String::from_utf8(buf).unwrap();
/// assert_eq!(text.lines().count(), 3);
/// for line in text.lines() {
///     assert!(line.parse::<Fixture>().is_ok());
/// }
/// ```
pub fn write_fixtures<W: Write + ?Sized, R: Rng + ?Sized>(out: &mut W, rng: &mut R, count: usize) -> io::Result<()> {
    for _ in 0..count {
        let fixture = Fixture::random(rng);
        writeln!(out, "{}", fixture)?;
    }
    out.flush()
}

//-----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    use crate::fixture::MAX_WIDTH;

    use std::io::ErrorKind;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn generate(seed: u64, count: usize) -> String {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut buf: Vec<u8> = Vec::new();
        write_fixtures(&mut buf, &mut rng, count).unwrap();
        String::from_utf8(buf).unwrap()
    }

    // Checks the literal layout without going through the parser.
    fn check_layout(line: &str) {
        let rest = line.strip_prefix("{ ").unwrap_or_else(|| panic!("Invalid start: {:?}", line));
        let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
        assert!(!digits.is_empty(), "Missing width: {:?}", line);
        let width: usize = digits.parse().unwrap();
        assert!(width <= MAX_WIDTH, "Width {} is too large: {:?}", width, line);

        let mut rest = rest[digits.len()..].strip_prefix(", { ").unwrap_or_else(|| panic!("Invalid separator: {:?}", line));
        for i in 0..4 {
            rest = rest.strip_prefix("0x").unwrap_or_else(|| panic!("Missing hex prefix for word {}: {:?}", i, line));
            let hex = &rest[..16];
            assert!(hex.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)), "Invalid hex digits in word {}: {:?}", i, line);
            rest = rest[16..].strip_prefix(", ").unwrap_or_else(|| panic!("Missing comma after word {}: {:?}", i, line));
        }
        assert_eq!(rest, " } },", "Invalid end: {:?}", line);
    }

    #[test]
    fn default_run() {
        let text = generate(0xDEFA, DEFAULT_COUNT);
        assert!(text.ends_with('\n'), "Missing final newline");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), DEFAULT_COUNT, "Invalid number of fixtures");
        for line in lines.iter() {
            check_layout(line);
            let fixture: Fixture = line.parse().unwrap();
            assert!(fixture.is_valid(), "Invalid fixture: {:?}", line);
        }
    }

    #[test]
    fn empty_run() {
        assert!(generate(1, 0).is_empty(), "Output from an empty run");
    }

    #[test]
    fn reproducible() {
        assert_eq!(generate(12345, 32), generate(12345, 32), "Same seed produced different output");
        assert_ne!(generate(12345, 32), generate(54321, 32), "Different seeds produced the same output");
    }

    #[test]
    fn matches_fixture_sequence() {
        let text = generate(99, 16);
        let mut rng = StdRng::seed_from_u64(99);
        for (i, line) in text.lines().enumerate() {
            assert_eq!(line, Fixture::random(&mut rng).to_string(), "Line {} does not match the generated fixture", i);
        }
    }

    struct FailingWriter {
        remaining: usize,
    }

    impl Write for FailingWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.remaining == 0 {
                return Err(io::Error::new(ErrorKind::BrokenPipe, "Output closed"));
            }
            let len = buf.len().min(self.remaining);
            self.remaining -= len;
            Ok(len)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failure() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut out = FailingWriter { remaining: 200 };
        let result = write_fixtures(&mut out, &mut rng, DEFAULT_COUNT);
        assert_eq!(result.map_err(|e| e.kind()), Err(ErrorKind::BrokenPipe), "Expected the write error to be passed through");
    }
}

//-----------------------------------------------------------------------------
