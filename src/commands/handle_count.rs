use crate::common::OutputFormat;
use crate::error::AppError;
use crate::output::{SubnetReport, render_lines};
use ipnet::IpNet;
use std::str::FromStr;

/// CIDRごとのアドレス数を集計して出力文字列を返す
pub fn run_count(cidrs: &[String], output_format: OutputFormat) -> Result<String, AppError> {
    let mut reports = Vec::with_capacity(cidrs.len());
    for cidr in cidrs {
        let net = IpNet::from_str(cidr.trim())?;
        let report = SubnetReport::from_net(&net)?;
        tracing::debug!(
            cidr = %report.cidr,
            family = report.family.as_str(),
            host_bits = report.host_bits,
            "counted addresses"
        );
        reports.push(report);
    }
    render_lines(&reports, output_format)
}
