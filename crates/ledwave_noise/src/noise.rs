//! # Fixed-Point Simplex Noise
//!
//! Integer-only simplex noise in one to four dimensions.
//!
//! ## Why Simplex over Perlin?
//!
//! - Fewer directional artifacts
//! - `d + 1` corners per sample instead of `2^d`
//! - Each corner has compact support, so the cost is bounded
//!
//! ## Compatibility
//!
//! The output divided by `2^15` tracks the classic floating-point
//! simplex noise (Gustavson's reference) closely, but not bit-exactly.
//! Over millions of random inputs the average absolute difference stays
//! below 0.00006 (1D), 0.0008 (2D), 0.0006 (3D) and 0.0004 (4D).
//!
//! ## Notation
//!
//! Line comments give the number of fractional bits of the value, e.g.
//! `// .14` means `value / (1 << 14)` is the real number.
//!
//! ## Overflow
//!
//! Cell coordinates, squared distances and the final scaling are computed
//! in `i64`, and the result saturates into `i16`. Inside the sampled input
//! envelope this matches the 32-bit computation exactly; outside it the
//! output stays bounded instead of wrapping.

use crate::fixed::{FixedCoord, NoiseSample};
use crate::gradient::{grad1, grad2, grad3, grad4};
use crate::tables::{hash2, hash3, hash4, permutation_at, simplex4_corners};

/// Bias that centers the asymmetric 1D output (about 0.076, `.15`).
const NOISE1_BIAS: i64 = 2503;
/// Maps the biased 1D sum (`.15 << 14`) onto the `i16` range.
const NOISE1_DIVISOR: i64 = 40225;

/// Skew factor `(sqrt(3) - 1) / 2`, `.32`.
const F2: i64 = 1_572_067_135;
/// Unskew factor `(3 - sqrt(3)) / 6`, `.32`.
const G2: i64 = 907_633_384;
/// Maps the 2D sum (`.30 << 6`) onto the `i16` range.
const NOISE2_DIVISOR: i64 = 46_360;

/// Skew factor 1/3, `.32`.
const F3: i64 = 1_431_655_764;
/// Unskew factor 1/6, `.32`.
const G3: i64 = 715_827_884;
/// Maps the 3D sum (`.30 << 6`) onto the `i16` range.
const NOISE3_DIVISOR: i64 = 64_120;

/// Skew factor `(sqrt(5) - 1) / 4`, `.30`.
const F4: i64 = 331_804_471;
/// Unskew factor `(5 - sqrt(5)) / 20`, `.32`.
const G4: i64 = 593_549_882;
/// Maps the 4D sum (`.30`) onto the `i16` range.
const NOISE4_DIVISOR: i64 = 1213;

/// One lattice step in `.14`.
const ONE_14: i32 = 1 << 14;

/// Squared falloff radius 0.6 for 3D and 4D, `.16`.
const FALLOFF_0_6: i32 = 39_322;

/// Unskew offset of corner `n` in 3D, `.14`.
const G3_STEPS: [i32; 4] = [0, (G3 >> 18) as i32, ((2 * G3) >> 18) as i32, ((3 * G3) >> 18) as i32];

/// Unskew offset of corner `n` in 4D, `.14`.
const G4_STEPS: [i32; 5] = [
    0,
    (G4 >> 18) as i32,
    ((2 * G4) >> 18) as i32,
    ((3 * G4) >> 18) as i32,
    ((4 * G4) >> 18) as i32,
];

// =============================================================================
// 1D
// =============================================================================

/// 1D simplex noise.
///
/// # Example
///
/// ```rust
/// use ledwave_noise::{noise1, FixedCoord};
///
/// let a = noise1(FixedCoord::from_raw(0x1234));
/// let b = noise1(FixedCoord::from_raw(0x1234));
/// assert_eq!(a, b);
/// ```
#[must_use]
pub fn noise1(x: FixedCoord) -> NoiseSample {
    let i0 = x.whole();
    let x0 = x.fraction(); // .12
    let x1 = x0 - 0x1000; // .12

    let n0 = corner1(x0, permutation_at(i0));
    let n1 = corner1(x1, permutation_at(i0 + 1));

    let n = i64::from(n0 + n1) + NOISE1_BIAS; // .15
    NoiseSample::saturating_from((n << 14) / NOISE1_DIVISOR)
}

/// Contribution of one 1D corner, `.15`.
#[inline]
fn corner1(x: i32, hash: u8) -> i32 {
    let t = 0x8000 - ((x * x) >> 9); // .15
    let t = (t * t) >> 15; // .15
    let t = (t * t) >> 15; // .15
    (t * grad1(hash, x)) >> 12 // .15 * .12 >> 12 = .15
}

// =============================================================================
// 2D
// =============================================================================

/// 2D simplex noise.
///
/// The simplex is an equilateral triangle; each sample sums three corners.
#[must_use]
pub fn noise2(x: FixedCoord, y: FixedCoord) -> NoiseSample {
    let (x, y) = (i64::from(x.raw()), i64::from(y.raw()));

    // Skew the input space to find the cell.
    let s = ((x + y) * F2) >> 32; // .12
    let i = (((x >> 1) + (s >> 1)) >> 11) as i32;
    let j = (((y >> 1) + (s >> 1)) >> 11) as i32;

    // Unskew the cell origin and take the offset from it.
    let t = (i64::from(i) + i64::from(j)) * G2; // .32
    let x0 = (x << 20) - ((i64::from(i) << 32) - t); // .32
    let y0 = (y << 20) - ((i64::from(j) << 32) - t); // .32

    // Lower triangle steps x first, upper triangle steps y first.
    let (i1, j1) = if x0 > y0 { (1, 0) } else { (0, 1) };

    let x1 = x0 - (i64::from(i1) << 32) + G2; // .32
    let y1 = y0 - (i64::from(j1) << 32) + G2;
    let x2 = x0 - (1 << 32) + 2 * G2;
    let y2 = y0 - (1 << 32) + 2 * G2;

    let n = corner2(x0, y0, hash2(i, j))
        + corner2(x1, y1, hash2(i + i1, j + j1))
        + corner2(x2, y2, hash2(i + 1, j + 1)); // .30

    let scaled = i64::from(n) << 6;
    debug_assert!(i32::try_from(scaled).is_ok(), "2D sum {n} left the 32-bit budget");
    NoiseSample::saturating_from(scaled / NOISE2_DIVISOR)
}

/// Contribution of one 2D corner, `.30`.
#[inline]
fn corner2(x: i64, y: i64, hash: u8) -> i32 {
    let t = ((1 << 31) - (x >> 16) * (x >> 16) - (y >> 16) * (y >> 16)) >> 16; // .16
    if t <= 0 {
        return 0;
    }
    let t = t as i32;
    let t = (t * t) >> 16; // .16
    let t = (t * t) >> 16; // .16
    (t >> 1) * grad2(hash, (x >> 17) as i32, (y >> 17) as i32) // .15 * .15 = .30
}

// =============================================================================
// 3D
// =============================================================================

/// 3D simplex noise.
///
/// The simplex is a slightly irregular tetrahedron; each sample sums four
/// corners. A typical animation passes time as one of the axes.
#[must_use]
pub fn noise3(x: FixedCoord, y: FixedCoord, z: FixedCoord) -> NoiseSample {
    let (x, y, z) = (x.raw(), y.raw(), z.raw());

    // Skew the input space to find the cell.
    let s = ((i64::from(x) + i64::from(y) + i64::from(z)) * F3) >> 32; // .12
    let cell = |v: i32| ((i64::from(v >> 1) + (s >> 1)) >> 11) as i32;
    let (i, j, k) = (cell(x), cell(y), cell(z));

    // Unskew the cell origin and take the offset from it.
    let t = (i64::from(i) + i64::from(j) + i64::from(k)) * G3; // .32
    let offset = |v: i32, c: i32| ((i64::from(v) << 2) - (((i64::from(c) << 32) - t) >> 18)) as i32;
    let p0 = [offset(x, i), offset(y, j), offset(z, k)]; // .14
    let [x0, y0, z0] = p0;

    // Corner steps in (i, j, k), ordered by offset magnitude.
    let (second, third) = if x0 >= y0 {
        if y0 >= z0 {
            ([1, 0, 0], [1, 1, 0]) // X Y Z
        } else if x0 >= z0 {
            ([1, 0, 0], [1, 0, 1]) // X Z Y
        } else {
            ([0, 0, 1], [1, 0, 1]) // Z X Y
        }
    } else if y0 < z0 {
        ([0, 0, 1], [0, 1, 1]) // Z Y X
    } else if x0 < z0 {
        ([0, 1, 0], [0, 1, 1]) // Y Z X
    } else {
        ([0, 1, 0], [1, 1, 0]) // Y X Z
    };

    let mut n: i64 = 0; // .30
    for (step, unskew) in [[0, 0, 0], second, third, [1, 1, 1]].into_iter().zip(G3_STEPS) {
        let p = [
            p0[0] - step[0] * ONE_14 + unskew,
            p0[1] - step[1] * ONE_14 + unskew,
            p0[2] - step[2] * ONE_14 + unskew,
        ];
        let hash = hash3(i + step[0], j + step[1], k + step[2]);
        n += i64::from(corner3(p, hash));
    }

    let scaled = n << 6;
    debug_assert!(i32::try_from(scaled).is_ok(), "3D sum {n} left the 32-bit budget");
    NoiseSample::saturating_from(scaled / NOISE3_DIVISOR)
}

/// Contribution of one 3D corner, `.30`.
#[inline]
fn corner3([x, y, z]: [i32; 3], hash: u8) -> i32 {
    let t = FALLOFF_0_6 - ((x * x + y * y + z * z) >> 12); // .16
    if t <= 0 {
        return 0;
    }
    let t = (t * t) >> 16; // .16
    let t = (t * t) >> 16; // .16
    t * grad3(hash, x, y, z) // .16 * .14 = .30
}

// =============================================================================
// 4D
// =============================================================================

/// 4D simplex noise.
///
/// Each sample sums five corners. The traversal order comes from
/// [`crate::tables::SIMPLEX4`], indexed by six pairwise comparisons.
#[must_use]
pub fn noise4(x: FixedCoord, y: FixedCoord, z: FixedCoord, w: FixedCoord) -> NoiseSample {
    let (x, y, z, w) = (x.raw(), y.raw(), z.raw(), w.raw());

    // Skew the input space to find the cell (one of 24 simplices).
    let sum = i64::from(x) + i64::from(y) + i64::from(z) + i64::from(w);
    let s = (sum * F4) >> 32; // .12 * .30 >> 32 = .10
    let cell = |v: i32| ((i64::from(v >> 2) + s) >> 10) as i32;
    let (i, j, k, l) = (cell(x), cell(y), cell(z), cell(w));

    // Unskew the cell origin and take the offset from it.
    let t = ((i64::from(i) + i64::from(j) + i64::from(k) + i64::from(l)) * G4) >> 18; // .14
    let offset = |v: i32, c: i32| ((i64::from(v) << 2) - ((i64::from(c) << 14) - t)) as i32;
    let p0 = [offset(x, i), offset(y, j), offset(z, k), offset(w, l)]; // .14
    let [x0, y0, z0, w0] = p0;

    let rank = (usize::from(x0 > y0) << 5)
        | (usize::from(x0 > z0) << 4)
        | (usize::from(y0 > z0) << 3)
        | (usize::from(x0 > w0) << 2)
        | (usize::from(y0 > w0) << 1)
        | usize::from(z0 > w0);
    let [second, third, fourth] = simplex4_corners(rank);

    let mut n: i64 = 0; // .30
    for (step, unskew) in [[0; 4], second, third, fourth, [1; 4]].into_iter().zip(G4_STEPS) {
        let p = [
            p0[0] - step[0] * ONE_14 + unskew,
            p0[1] - step[1] * ONE_14 + unskew,
            p0[2] - step[2] * ONE_14 + unskew,
            p0[3] - step[3] * ONE_14 + unskew,
        ];
        let hash = hash4(i + step[0], j + step[1], k + step[2], l + step[3]);
        n += i64::from(corner4(p, hash));
    }

    debug_assert!(i32::try_from(n).is_ok(), "4D sum {n} left the 32-bit budget");
    NoiseSample::saturating_from(n / NOISE4_DIVISOR)
}

/// Contribution of one 4D corner, `.30`.
#[inline]
fn corner4([x, y, z, w]: [i32; 4], hash: u8) -> i32 {
    let t = FALLOFF_0_6 - ((x * x + y * y + z * z + w * w) >> 12); // .16
    if t <= 0 {
        return 0;
    }
    let t = (t * t) >> 16; // .16
    let t = (t * t) >> 16; // .16
    t * grad4(hash, x, y, z, w) // .16 * .14 = .30
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(raw: i32) -> FixedCoord {
        FixedCoord::from_raw(raw)
    }

    #[test]
    fn test_unskew_steps() {
        assert_eq!(G3_STEPS, [0, 2730, 5461, 8192]);
        assert_eq!(G4_STEPS, [0, 2264, 4528, 6792, 9056]);
    }

    #[test]
    fn test_regression_values() {
        assert_eq!(noise1(c(0)).raw(), 1019);
        assert_eq!(noise1(c(0x800)).raw(), 15799);
        assert_eq!(noise1(c(12345)).raw(), 276);
        assert_eq!(noise1(c(-7000)).raw(), -15505);

        assert_eq!(noise2(c(0), c(0)).raw(), 0);
        assert_eq!(noise2(c(0x1800), c(0x2400)).raw(), -11361);
        assert_eq!(noise2(c(-100_000), c(77_777)).raw(), -10670);

        assert_eq!(noise3(c(0), c(0), c(0)).raw(), 0);
        assert_eq!(noise3(c(0x1800), c(0x2400), c(-0x3000)).raw(), 4264);

        assert_eq!(noise4(c(0), c(0), c(0), c(0)).raw(), 0);
        assert_eq!(noise4(c(0x1800), c(0x2400), c(-0x3000), c(0x500)).raw(), -4880);
    }

    #[test]
    fn test_determinism() {
        for n in 0..1000 {
            let x = c(n * 7919 - 3_000_000);
            let y = c(n * 104_729);
            assert_eq!(noise1(x), noise1(x));
            assert_eq!(noise2(x, y), noise2(x, y));
            assert_eq!(noise3(x, y, x), noise3(x, y, x));
            assert_eq!(noise4(x, y, y, x), noise4(x, y, y, x));
        }
    }

    #[test]
    fn test_1d_lattice_points_are_bias_only() {
        // Both corner contributions vanish on integer coordinates.
        for cell in -50..50 {
            assert_eq!(noise1(FixedCoord::from_int(cell)).raw(), 1019);
        }
    }

    #[test]
    fn test_continuity() {
        // One raw step (1/4096) never moves the output far.
        let mut prev2 = noise2(c(-20_000), c(5_000));
        let mut prev3 = noise3(c(-20_000), c(5_000), c(777));
        for step in -19_999..20_000 {
            let cur2 = noise2(c(step), c(5_000));
            let cur3 = noise3(c(step), c(5_000), c(777));
            assert!((i32::from(cur2.raw()) - i32::from(prev2.raw())).abs() < 200);
            assert!((i32::from(cur3.raw()) - i32::from(prev3.raw())).abs() < 200);
            prev2 = cur2;
            prev3 = cur3;
        }
    }

    #[test]
    fn test_extreme_inputs_are_total() {
        let extremes = [i32::MIN, i32::MIN + 1, -1, 0, 1, i32::MAX - 1, i32::MAX];
        for &a in &extremes {
            let _ = noise1(c(a));
            for &b in &extremes {
                let _ = noise2(c(a), c(b));
                for &d in &extremes {
                    let _ = noise3(c(a), c(b), c(d));
                    let _ = noise4(c(a), c(b), c(d), c(a));
                }
            }
        }
    }

    #[test]
    fn test_output_uses_most_of_the_range() {
        let mut lo = 0i16;
        let mut hi = 0i16;
        for n in 0..200_000 {
            let v = noise2(c(n * 37), c(n * 101 + 11)).raw();
            lo = lo.min(v);
            hi = hi.max(v);
        }
        assert!(lo < -16_000 && hi > 16_000, "range [{lo}, {hi}]");
    }
}
