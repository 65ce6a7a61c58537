/// xsの要素をdelimで区切った文字列にする。
/// conjunctionがtrueなら最後の要素の直前に "and " を入れる。
///
/// 区切りは常に `"<delim> "`。delimの後ろに空白を足すだけで、
/// 既存の空白を詰めたりはしない。
pub fn delimited_list<S: AsRef<str>>(xs: &[S], delim: char, conjunction: bool) -> String {
    let mut out = String::new();
    for (i, s) in xs.iter().enumerate() {
        out.push_str(s.as_ref());
        if i + 1 < xs.len() {
            out.push(delim);
            out.push(' ');
        }
        if conjunction && i + 2 == xs.len() {
            out.push_str("and ");
        }
    }
    out
}

/// カンマ区切りのリスト
pub fn list<S: AsRef<str>>(xs: &[S], conjunction: bool) -> String {
    delimited_list(xs, ',', conjunction)
}
