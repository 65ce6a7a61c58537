use crate::common::{IpFamily, OutputFormat};
use crate::error::AppError;
use crate::ip_count::{host_bits, nips};
use ipnet::IpNet;
use serde::Serialize;
use std::fmt;

/// 1つのCIDRについての集計結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubnetReport {
    pub cidr: String,
    pub family: IpFamily,
    pub prefix_len: u8,
    pub host_bits: u8,
    /// u64/u128に収まらない値もあるので10進文字列で持つ
    pub addresses: String,
}

impl SubnetReport {
    pub fn from_net(net: &IpNet) -> Result<Self, AppError> {
        Ok(Self {
            cidr: net.to_string(),
            family: IpFamily::of(net),
            prefix_len: net.prefix_len(),
            host_bits: host_bits(net),
            addresses: nips(net)?.to_string(),
        })
    }
}

impl fmt::Display for SubnetReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}",
            self.cidr,
            self.family.as_str(),
            self.addresses
        )
    }
}

/// 入力と変換結果の組 (ordinal / roundup / list など)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conversion {
    pub input: String,
    pub output: String,
}

impl Conversion {
    pub fn new(input: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.output)
    }
}

/// 結果を出力形式に合わせて1つの文字列にまとめる。
/// TXTは1行1件、JSONは配列。
pub fn render_lines<T: Serialize + fmt::Display>(
    items: &[T],
    format: OutputFormat,
) -> Result<String, AppError> {
    match format {
        OutputFormat::Txt => {
            let body = items
                .iter()
                .map(|item| item.to_string())
                .collect::<Vec<_>>()
                .join("\n");
            Ok(format!("{}\n", body))
        }
        OutputFormat::Json => {
            let body = serde_json::to_string_pretty(items)?;
            Ok(format!("{}\n", body))
        }
    }
}
