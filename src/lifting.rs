//! The fixed lifting decomposition of the CDF 9/7 biorthogonal filter.

/// The lifting step multipliers.
///
/// The first four entries are the analysis steps in application order
/// (predict, update, predict, update). The last four are their negations,
/// paired so that synthesis consumes indices 7, 6, 5 and 4 in that order.
pub const STEPS: [f32; 8] = [
    -1.586_134_3,
    -0.052_980_117,
    0.882_911_1,
    0.443_506_87,
    1.586_134_3,
    0.052_980_117,
    -0.882_911_1,
    -0.443_506_87,
];

/// The subband normalization gain.
pub const K: f32 = 1.230_174_1;

/// `1 / K`.
///
/// Applied to the low-pass subband during analysis and to the high-pass
/// subband during synthesis; `K` covers the complementary cases.
pub const K_INV: f32 = 1.0 / K;
