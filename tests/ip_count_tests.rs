use ipnet::IpNet;
use num_bigint::BigInt;
use std::str::FromStr;
use ykit::common::IpFamily;
use ykit::error::AppError;
use ykit::ip_count::{host_bits, nips, nips_v4, nips_v6};

const IPV4_ADDR: &str = "1.2.3.4";
const IPV6_ADDR: &str = "2402:9400:0000:0000:0000:0000:0000:0001";

fn ipnet(s: &str) -> IpNet {
    match IpNet::from_str(s) {
        Ok(n) => n,
        Err(e) => panic!("failed to parse {s}: {e}"),
    }
}

#[test]
fn counts_ipv4_subnets() -> Result<(), AppError> {
    assert_eq!(nips_v4(Some(&ipnet("1.2.3.4/24")))?, 256);
    assert_eq!(nips_v4(Some(&ipnet("1.2.3.4/32")))?, 1);
    assert_eq!(nips_v4(Some(&ipnet("1.2.3.4/8")))?, 16_777_216);
    // /0 は 2^32 (u32には収まらない)
    assert_eq!(nips_v4(Some(&ipnet("1.2.3.4/0")))?, 4_294_967_296);
    Ok(())
}

#[test]
fn ipv4_counts_halve_per_prefix_bit() -> Result<(), AppError> {
    for prefix in 0..=32u32 {
        let net = ipnet(&format!("{IPV4_ADDR}/{prefix}"));
        assert_eq!(nips_v4(Some(&net))?, 1u64 << (32 - prefix), "/{prefix}");
    }
    Ok(())
}

#[test]
fn counts_ipv6_subnets() -> Result<(), AppError> {
    let n = nips_v6(Some(&ipnet("2402:9400::1/64")))?;
    assert_eq!(n.to_string(), "18446744073709551616");

    let n = nips_v6(Some(&ipnet(&format!("{IPV6_ADDR}/8"))))?;
    assert_eq!(n.to_string(), "1329227995784915872903807060280344576");

    let n = nips_v6(Some(&ipnet(&format!("{IPV6_ADDR}/65"))))?;
    assert_eq!(n.to_string(), "9223372036854775808");

    let n = nips_v6(Some(&ipnet(&format!("{IPV6_ADDR}/128"))))?;
    assert_eq!(n, BigInt::from(1));
    Ok(())
}

#[test]
fn ipv6_counts_match_exact_powers_of_two() -> Result<(), AppError> {
    for prefix in 0..=128u32 {
        let net = ipnet(&format!("{IPV6_ADDR}/{prefix}"));
        let expected = BigInt::from(1) << (128 - prefix);
        assert_eq!(nips_v6(Some(&net))?, expected, "/{prefix}");
    }
    Ok(())
}

#[test]
fn undefined_network_is_invalid_argument() {
    assert!(matches!(nips_v4(None), Err(AppError::InvalidArgument(_))));
    assert!(matches!(nips_v6(None), Err(AppError::InvalidArgument(_))));
}

#[test]
fn wrong_family_is_type_mismatch() {
    let v6 = ipnet(&format!("{IPV6_ADDR}/64"));
    assert!(matches!(nips_v4(Some(&v6)), Err(AppError::TypeMismatch(_))));

    let v4 = ipnet(&format!("{IPV4_ADDR}/24"));
    assert!(matches!(nips_v6(Some(&v4)), Err(AppError::TypeMismatch(_))));
}

#[test]
fn nips_dispatches_on_family() -> Result<(), AppError> {
    assert_eq!(nips(&ipnet("10.0.0.0/16"))?, BigInt::from(65_536));
    assert_eq!(
        nips(&ipnet("2001:db8::/32"))?.to_string(),
        "79228162514264337593543950336"
    );
    assert_eq!(host_bits(&ipnet("10.0.0.0/16")), 16);
    assert_eq!(host_bits(&ipnet("2001:db8::/32")), 96);
    Ok(())
}

#[test]
fn ipv4_mapped_ipv6_network_counts_as_ipv6() -> Result<(), AppError> {
    // ファミリーはIpNetの種別で決まる。::ffff:0:0/96 の中でもIPv6扱い
    let mapped = ipnet("::ffff:1.2.3.4/120");
    assert_eq!(IpFamily::of(&mapped), IpFamily::V6);
    assert_eq!(host_bits(&mapped), 8);
    assert_eq!(nips_v6(Some(&mapped))?, BigInt::from(256));
    assert!(matches!(nips_v4(Some(&mapped)), Err(AppError::TypeMismatch(_))));
    Ok(())
}

#[test]
fn host_bits_follow_family_width() {
    for (s, family) in [("1.2.3.4/0", IpFamily::V4), ("::/0", IpFamily::V6)] {
        let net = ipnet(s);
        assert_eq!(host_bits(&net), family.bits(), "{s}");
    }
}
