use crate::error::AppError;
use num_traits::PrimInt;

/// 符号を外した絶対値をu128で取り出す
fn magnitude<T: PrimInt>(n: T) -> u128 {
    let abs = if n < T::zero() {
        n.to_i128().map(i128::unsigned_abs)
    } else {
        n.to_u128()
    };
    // 全てのプリミティブ整数はここで表現できる
    abs.unwrap_or_default()
}

/// 序数の接尾辞 ("st" / "nd" / "rd" / "th") を返す。
/// 下2桁が11〜13なら常に "th"。
pub fn ordinal_suffix<T: PrimInt>(n: T) -> &'static str {
    let x = magnitude(n);
    if (11..=13).contains(&(x % 100)) {
        return "th";
    }
    match x % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// 整数を序数文字列に変換する。ordinal(3) は "3rd"。
/// 任意のプリミティブ整数型を受け付け、負数は絶対値で扱う (ordinal(-1) は "1st")。
pub fn ordinal<T: PrimInt>(n: T) -> String {
    format!("{}{}", magnitude(n), ordinal_suffix(n))
}

/// 序数文字列の先頭の整数を返す。from_ordinal("11th") は 11。
///
/// 接尾辞の中身は検証しない ("11st" も 11 になる)。
/// 先頭に整数が無い場合は `ParseError`。
pub fn from_ordinal(s: &str) -> Result<i64, AppError> {
    let trimmed = s.trim_start();
    let sign_len = match trimmed.as_bytes().first() {
        Some(b'+') | Some(b'-') => 1,
        _ => 0,
    };
    let digits_len = trimmed[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits_len == 0 {
        return Err(AppError::ParseError(format!(
            "no leading integer in ordinal {s:?}"
        )));
    }

    let number = &trimmed[..sign_len + digits_len];
    number
        .parse::<i64>()
        .map_err(|e| AppError::ParseError(format!("invalid ordinal {s:?}: {e}")))
}
