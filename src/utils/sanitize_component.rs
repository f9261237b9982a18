// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Safe names for uploaded files.

/// Turn a client-supplied file name into a portable, filesystem-safe one.
///
/// # Steps
/// - Transliterate Unicode to ASCII with `deunicode` (e.g., "Å" → "A").
/// - Allow ASCII alphanumerics plus `-`, `_`, and `.`; treat other characters as `_`.
/// - Collapse runs of `_` and `.`; trim trailing dots.
/// - Replace empty results with `upload` and suffix reserved device names.
///
/// Multi-part extensions survive (`data.v1.2.tar.gz` stays as is), so the
/// recap still shows a recognizable name.
pub fn sanitize_component(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in deunicode::deunicode(value).chars() {
        let ch = if ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_' | '.') {
            ch
        } else {
            '_'
        };
        if matches!(ch, '_' | '.') && out.ends_with(ch) {
            continue;
        }
        out.push(ch);
    }

    // No underscore right before a dot.
    while let Some(pos) = out.find("_.") {
        out.remove(pos);
    }
    let kept = out.trim_end_matches('.').len();
    out.truncate(kept);

    if out.is_empty() {
        return FALLBACK_NAME.to_string();
    }

    let (base, ext) = match out.rsplit_once('.') {
        Some((base, ext)) if !base.is_empty() => (base, Some(ext)),
        _ => (out.as_str(), None),
    };
    if is_reserved_device(base) {
        return match ext {
            Some(ext) => format!("{base}_.{ext}"),
            None => format!("{base}_"),
        };
    }
    out
}

const FALLBACK_NAME: &str = "upload";

/// `CON`, `PRN`, `AUX`, `NUL`, `COM1`-`COM9` and `LPT1`-`LPT9`, in any case.
fn is_reserved_device(base: &str) -> bool {
    let upper = base.to_ascii_uppercase();
    match upper.as_str() {
        "CON" | "PRN" | "AUX" | "NUL" => true,
        other => {
            let numbered = other.strip_prefix("COM").or_else(|| other.strip_prefix("LPT"));
            matches!(numbered, Some(n) if n.len() == 1 && matches!(n.as_bytes()[0], b'1'..=b'9'))
        }
    }
}
