use crate::common::IpFamily;
use crate::error::AppError;
use crate::float::{big_float_to_big_int, exact_power2};
use ipnet::IpNet;
use num_bigint::BigInt;

/// ホスト部のビット数 (アドレス長 - プレフィックス長)
pub fn host_bits(net: &IpNet) -> u8 {
    IpFamily::of(net).bits() - net.prefix_len()
}

fn require_family(net: Option<&IpNet>, family: IpFamily) -> Result<&IpNet, AppError> {
    let net = net.ok_or_else(|| AppError::InvalidArgument("undefined IpNet".into()))?;
    if IpFamily::of(net) != family {
        return Err(AppError::TypeMismatch(format!(
            "{} is not an {} address",
            net.addr(),
            family.as_str()
        )));
    }
    Ok(net)
}

/// IPv4 CIDRに含まれるアドレス数を返す。
/// 最大でも 2^32 なのでu64に収まり、任意精度の経路は通らない。
pub fn nips_v4(net: Option<&IpNet>) -> Result<u64, AppError> {
    let net = require_family(net, IpFamily::V4)?;
    Ok(1u64 << host_bits(net))
}

/// IPv6 CIDRに含まれるアドレス数を返す。
///
/// /64より短いプレフィックスでは2^64を超えるため、
/// 2^hostbits をBigFloatで作ってからBigIntへ変換する。
pub fn nips_v6(net: Option<&IpNet>) -> Result<BigInt, AppError> {
    let net = require_family(net, IpFamily::V6)?;
    let capacity = exact_power2(u32::from(host_bits(net)));
    big_float_to_big_int(Some(&capacity))
}

/// アドレスファミリーに応じてnips_v4 / nips_v6を呼び分ける
pub fn nips(net: &IpNet) -> Result<BigInt, AppError> {
    match net {
        IpNet::V4(_) => nips_v4(Some(net)).map(BigInt::from),
        IpNet::V6(_) => nips_v6(Some(net)),
    }
}
