//! Decimal rendering of real numbers for content streams.
//!
//! Content streams have no exponential notation, so every value is written as
//! a plain decimal. Values are narrowed to single precision first and then
//! printed with just enough significant digits that reading the text back as
//! an `f32` yields the same value. Very small and very large magnitudes are
//! spelled out in full (`.00000000000000000000099999997`,
//! `200000000000000000000`).

use std::fmt::Display;

use crate::writer::Writer;

/// Length of the longest rendering, `-FLT_MIN` written out in full.
pub const MAX_REAL_LEN: usize = 48;

/// Numbers above this need one digit less for 24 bit precision.
const NINE_DIGIT_LIMIT: i64 = 167_772_159;

const LOG10_2: f64 = 0.301_029_995_663_981_2;

/// A real number rendered into a fixed size buffer.
#[derive(Clone, Copy)]
pub struct Real {
    buf: [u8; MAX_REAL_LEN],
    len: usize,
}

impl Real {
    pub fn new(value: f64) -> Self {
        let mut real = Self {
            buf: [0; MAX_REAL_LEN],
            len: 0,
        };
        real.encode(value as f32);
        real
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    fn push(&mut self, byte: u8) {
        if self.len < MAX_REAL_LEN {
            self.buf[self.len] = byte;
            self.len += 1;
        }
    }

    fn encode(&mut self, value: f32) {
        let value = if value == f32::INFINITY {
            f32::MAX
        } else if value == f32::NEG_INFINITY {
            f32::MIN
        } else {
            value
        };

        // NaN has no representation, always produce a valid number. Negative
        // zero ends up here as well.
        if !value.is_finite() || value == 0.0 {
            self.push(b'0');
            return;
        }

        let value = if value < 0.0 {
            self.push(b'-');
            -value
        } else {
            value
        };

        let decimal_exponent = (LOG10_2 * f64::from(binary_exponent(value))).floor() as i32;
        let mut decimal_shift = decimal_exponent - 8;
        let power = pow10(-decimal_shift);
        let wide = f64::from(value);
        let mut digits = (wide * power + 0.5) as i64;
        if digits > NINE_DIGIT_LIMIT {
            decimal_shift = decimal_exponent - 7;
            // recalculate instead of dividing to get the rounding right
            digits = (wide * (power * 0.1) + 0.5) as i64;
        }
        while digits != 0 && digits % 10 == 0 {
            digits /= 10;
            decimal_shift += 1;
        }

        // decimal digits, least significant first
        let mut buffer = [0u8; 10];
        let mut count = 0;
        loop {
            buffer[count] = (digits % 10) as u8;
            count += 1;
            digits /= 10;
            if digits == 0 || count == buffer.len() {
                break;
            }
        }

        if decimal_shift >= 0 {
            while count > 0 {
                count -= 1;
                self.push(b'0' + buffer[count]);
            }
            for _ in 0..decimal_shift {
                self.push(b'0');
            }
            return;
        }

        let places_before_point = count as i32 + decimal_shift;
        if places_before_point > 0 {
            for _ in 0..places_before_point {
                count -= 1;
                self.push(b'0' + buffer[count]);
            }
            self.push(b'.');
        } else {
            self.push(b'.');
            for _ in 0..-places_before_point {
                self.push(b'0');
            }
        }
        while count > 0 {
            count -= 1;
            self.push(b'0' + buffer[count]);
            // subnormals don't need the full precision to round-trip
            if self.len == MAX_REAL_LEN {
                break;
            }
        }
    }
}

impl Display for Real {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // only ASCII digits, '-' and '.' are ever pushed
        write!(f, "{}", String::from_utf8_lossy(self.as_bytes()))
    }
}

impl std::fmt::Debug for Real {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Real").field(&self.to_string()).finish()
    }
}

/// Format `value` as content stream number text.
pub fn format_real(value: f64) -> String {
    Real::new(value).to_string()
}

pub fn write_real(writer: &mut dyn Writer, value: f32) {
    writer.write(Real::new(f64::from(value)).as_bytes());
}

/// Write an 8 bit colour component as `byte / 255` with six significant
/// digits, trailing zeros removed (`0.501961`, `1`, `0`).
pub fn write_color_component(writer: &mut dyn Writer, byte: u8) {
    writer.write(format_significant(f32::from(byte) / 255.0).as_bytes());
}

fn format_significant(value: f32) -> String {
    if value == 0.0 || !value.is_finite() {
        return "0".to_string();
    }
    let wide = f64::from(value);
    let magnitude = wide.abs().log10().floor() as i32;
    let decimals = usize::try_from(5 - magnitude).unwrap_or(0);
    let mut text = format!("{:.*}", decimals, wide);
    if text.contains('.') {
        let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed);
    }
    text
}

/// Exponent of `value` as returned by C's `frexp`, `value = m * 2^e` with
/// `0.5 <= m < 1`.
fn binary_exponent(value: f32) -> i32 {
    let bits = value.to_bits();
    let exponent = ((bits >> 23) & 0xff) as i32;
    if exponent == 0 {
        let mantissa = bits & 0x007f_ffff;
        (32 - mantissa.leading_zeros() as i32) - 149
    } else {
        exponent - 126
    }
}

fn pow10(exponent: i32) -> f64 {
    const EXACT: [f64; 16] = [
        1e0, 1e1, 1e2, 1e3, 1e4, 1e5, 1e6, 1e7, 1e8, 1e9, 1e10, 1e11, 1e12, 1e13, 1e14, 1e15,
    ];
    match usize::try_from(exponent) {
        Ok(e) if e < EXACT.len() => EXACT[e],
        _ => 10f64.powf(f64::from(exponent)),
    }
}
