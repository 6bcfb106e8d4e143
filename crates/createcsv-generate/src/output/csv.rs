use std::fmt::Write as _;

use rand::RngCore;

pub const DELIMITER: char = ',';

/// Build the `col1,col2,...,colN` header line, newline included.
pub fn header_record(columns: usize) -> String {
    let mut line = String::with_capacity(columns * 6);
    for idx in 1..=columns {
        if idx > 1 {
            line.push(DELIMITER);
        }
        // Writing into a String is infallible.
        let _ = write!(line, "col{idx}");
    }
    line.push('\n');
    line
}

/// Append one data line of `columns` random values in `[0, 2^31 - 1]` to `line`.
pub fn data_record<R: RngCore + ?Sized>(rng: &mut R, columns: usize, line: &mut String) {
    for idx in 0..columns {
        if idx > 0 {
            line.push(DELIMITER);
        }
        let value = rng.next_u32() >> 1;
        let _ = write!(line, "{value}");
    }
    line.push('\n');
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn header_names_every_column() {
        assert_eq!(header_record(1), "col1\n");
        assert_eq!(header_record(3), "col1,col2,col3\n");

        let wide = header_record(12);
        let fields: Vec<&str> = wide.trim_end().split(DELIMITER).collect();
        assert_eq!(fields.len(), 12);
        assert_eq!(fields[11], "col12");
    }

    #[test]
    fn data_record_has_non_negative_fields() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut line = String::new();
        data_record(&mut rng, 5, &mut line);

        assert!(line.ends_with('\n'));
        let fields: Vec<&str> = line.trim_end().split(DELIMITER).collect();
        assert_eq!(fields.len(), 5);
        for field in fields {
            let value: u32 = field.parse().expect("integer field");
            assert!(value <= i32::MAX as u32);
        }
    }

    #[test]
    fn data_record_appends() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut line = String::from("x");
        data_record(&mut rng, 1, &mut line);
        assert!(line.starts_with('x'));
        assert_eq!(line.matches('\n').count(), 1);
    }
}
