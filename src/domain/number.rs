// ============================================================
// Layer 3 — Number Rendering
// ============================================================
// Run identifiers embed float hyperparameters as text, and the
// resulting strings name directories that already exist on disk
// (logs/<id>, checkpoints/<id>). The rendering must therefore be
// stable and match the historical form exactly:
//
//   1e-5   → "1e-05"      0.5   → "0.5"
//   1e-4   → "0.0001"     1.0   → "1.0"
//   50.0   → "50.0"       1e16  → "1e+16"
//
// Rules:
//   - shortest digits that round-trip back to the same f64
//   - fixed notation when the decimal exponent is in [-4, 16)
//   - scientific otherwise, with a signed, two-digit-minimum exponent
//   - integral values in fixed notation keep a trailing ".0"
//
// Rust's `{:e}` formatter already yields the shortest round-trip
// digits, so we only have to re-layout them.

/// Render an `f64` in the repr style used by run identifiers.
pub fn repr_f64(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf".to_string() } else { "-inf".to_string() };
    }

    // e.g. "-1.25e-7" → sign "-", mantissa "1.25", exponent -7
    let sci = format!("{value:e}");
    let (mantissa, exponent) = match sci.split_once('e') {
        Some(parts) => parts,
        None        => return sci,
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    let (sign, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None       => ("", mantissa),
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    let body = if (-4..16).contains(&exponent) {
        fixed_layout(&digits, exponent)
    } else {
        scientific_layout(&digits, exponent)
    };
    format!("{sign}{body}")
}

/// Lay out significant digits in positional notation.
fn fixed_layout(digits: &str, exponent: i32) -> String {
    if exponent < 0 {
        let zeros = "0".repeat((-exponent - 1) as usize);
        return format!("0.{zeros}{digits}");
    }

    let int_len = exponent as usize + 1;
    if digits.len() <= int_len {
        let pad = "0".repeat(int_len - digits.len());
        format!("{digits}{pad}.0")
    } else {
        let (int_part, frac_part) = digits.split_at(int_len);
        format!("{int_part}.{frac_part}")
    }
}

/// Lay out significant digits as `d[.ddd]e±XX`.
fn scientific_layout(digits: &str, exponent: i32) -> String {
    let (lead, rest) = digits.split_at(1);
    let mantissa = if rest.is_empty() {
        lead.to_string()
    } else {
        format!("{lead}.{rest}")
    };
    let exp_sign = if exponent < 0 { '-' } else { '+' };
    format!("{mantissa}e{exp_sign}{:02}", exponent.abs())
}
