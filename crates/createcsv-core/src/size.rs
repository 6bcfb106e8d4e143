use crate::error::{SizeError, SizeResult};

const KIB: u64 = 1024;

/// Unit suffix accepted by [`parse_size`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeUnit {
    Bytes,
    Kilobytes,
    Megabytes,
    Gigabytes,
}

impl SizeUnit {
    /// Suffixed units in matching order.
    const SUFFIXED: [SizeUnit; 3] = [SizeUnit::Gigabytes, SizeUnit::Megabytes, SizeUnit::Kilobytes];

    pub fn multiplier(self) -> u64 {
        match self {
            SizeUnit::Bytes => 1,
            SizeUnit::Kilobytes => KIB,
            SizeUnit::Megabytes => KIB * KIB,
            SizeUnit::Gigabytes => KIB * KIB * KIB,
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            SizeUnit::Bytes => "",
            SizeUnit::Kilobytes => "KB",
            SizeUnit::Megabytes => "MB",
            SizeUnit::Gigabytes => "GB",
        }
    }

    /// Split `upper` into its numeric part and unit.
    fn split(upper: &str) -> (&str, SizeUnit) {
        Self::SUFFIXED
            .iter()
            .find_map(|unit| {
                upper
                    .strip_suffix(unit.suffix())
                    .map(|number| (number, *unit))
            })
            .unwrap_or((upper, SizeUnit::Bytes))
    }
}

/// Parse a size expression such as `512`, `10kb` or `1GB` into bytes.
///
/// Suffixes are case-insensitive binary multiples. An empty string means
/// "no size limit" and yields `0`.
pub fn parse_size(input: &str) -> SizeResult<u64> {
    if input.is_empty() {
        return Ok(0);
    }

    let upper = input.to_ascii_uppercase();
    let (number, unit) = SizeUnit::split(&upper);

    let value: i64 = number.parse().map_err(|_| SizeError::InvalidNumber {
        input: input.to_string(),
        number: number.to_string(),
    })?;
    let value = u64::try_from(value).map_err(|_| SizeError::Negative {
        input: input.to_string(),
    })?;

    value
        .checked_mul(unit.multiplier())
        .filter(|bytes| *bytes <= i64::MAX as u64)
        .ok_or_else(|| SizeError::Overflow {
            input: input.to_string(),
        })
}
