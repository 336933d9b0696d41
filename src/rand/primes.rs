/// 64-bit primes the state transition multiplies by.
pub const PRIMES: [u64; 8] = [
    18_446_744_073_709_551_557, // 2^64 - 59
    2_305_843_009_213_693_951,  // 2^61 - 1
    1_099_511_628_211,
    4_294_967_291,
    2_147_483_647,
    1_000_000_007,
    998_244_353,
    4_294_967_311,
];
