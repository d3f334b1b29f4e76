//! 摘要提供者：对任意字节序列计算固定长度摘要
use md2::Md2;
use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha224, Sha256, Sha384, Sha512};

use crate::algorithm::Algorithm;
use crate::error::ScanError;

/// 扫描器依赖的摘要能力
/// - 无状态：每次调用都从头计算，不在调用之间保留任何中间状态
/// - 输出长度固定，等于 `output_len()`
pub trait DigestProvider {
    fn name(&self) -> String;
    fn output_len(&self) -> usize;
    fn digest(&self, data: &[u8]) -> Result<Vec<u8>, ScanError>;
}

impl DigestProvider for Algorithm {
    fn name(&self) -> String {
        Algorithm::name(*self).to_string()
    }

    fn output_len(&self) -> usize {
        Algorithm::output_len(*self)
    }

    fn digest(&self, data: &[u8]) -> Result<Vec<u8>, ScanError> {
        let out = match self {
            Algorithm::Md2 => Md2::digest(data).to_vec(),
            Algorithm::Md5 => Md5::digest(data).to_vec(),
            Algorithm::Sha1 => Sha1::digest(data).to_vec(),
            Algorithm::Sha224 => Sha224::digest(data).to_vec(),
            Algorithm::Sha256 => Sha256::digest(data).to_vec(),
            Algorithm::Sha384 => Sha384::digest(data).to_vec(),
            Algorithm::Sha512 => Sha512::digest(data).to_vec(),
        };
        Ok(out)
    }
}

/// 按算法名称计算摘要（名称不区分大小写）
pub fn digest_by_name(name: &str, data: &[u8]) -> Result<Vec<u8>, ScanError> {
    let algorithm: Algorithm = name.parse()?;
    algorithm.digest(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hexcodec::encode_hex_upper;

    fn hex_of(alg: Algorithm, data: &[u8]) -> String {
        encode_hex_upper(&alg.digest(data).unwrap())
    }

    #[test]
    fn known_vectors_for_abc() {
        assert_eq!(hex_of(Algorithm::Md2, b"abc"), "DA853B0D3F88D99B30283A69E6DED6BB");
        assert_eq!(hex_of(Algorithm::Md5, b"abc"), "900150983CD24FB0D6963F7D28E17F72");
        assert_eq!(hex_of(Algorithm::Sha1, b"abc"), "A9993E364706816ABA3E25717850C26C9CD0D89D");
        assert_eq!(
            hex_of(Algorithm::Sha256, b"abc"),
            "BA7816BF8F01CFEA414140DE5DAE2223B00361A396177A9CB410FF61F20015AD"
        );
    }

    #[test]
    fn output_len_matches_actual_digest() {
        for alg in Algorithm::ALL {
            let out = alg.digest(&[0u8]).unwrap();
            assert_eq!(out.len(), DigestProvider::output_len(&alg), "{alg}");
        }
    }

    #[test]
    fn repeated_calls_do_not_share_state() {
        let a = Algorithm::Sha512.digest(b"window").unwrap();
        let _ = Algorithm::Sha512.digest(b"something else").unwrap();
        let b = Algorithm::Sha512.digest(b"window").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn digest_by_name_rejects_unknown() {
        assert!(digest_by_name("sha-384", b"x").is_ok());
        let err = digest_by_name("SHA-999", b"x").unwrap_err();
        assert!(matches!(err, ScanError::UnsupportedAlgorithm(_)));
    }
}
