//! # Noise Lookup Tables
//!
//! Constant data shared by every noise dimension.
//!
//! Both tables are part of the output format: changing a single byte
//! changes every animation built on top of this crate, so they are kept
//! as literal data instead of being derived from a seed.

/// Fixed pseudorandom permutation of `0..=255`.
///
/// Identical on every platform and every run.
pub const PERM: [u8; 256] = [
    151, 160, 137, 91, 90, 15, 131, 13, 201, 95, 96, 53, 194, 233, 7, 225, 140, 36, 103, 30, 69,
    142, 8, 99, 37, 240, 21, 10, 23, 190, 6, 148, 247, 120, 234, 75, 0, 26, 197, 62, 94, 252,
    219, 203, 117, 35, 11, 32, 57, 177, 33, 88, 237, 149, 56, 87, 174, 20, 125, 136, 171, 168,
    68, 175, 74, 165, 71, 134, 139, 48, 27, 166, 77, 146, 158, 231, 83, 111, 229, 122, 60, 211,
    133, 230, 220, 105, 92, 41, 55, 46, 245, 40, 244, 102, 143, 54, 65, 25, 63, 161, 1, 216, 80,
    73, 209, 76, 132, 187, 208, 89, 18, 169, 200, 196, 135, 130, 116, 188, 159, 86, 164, 100,
    109, 198, 173, 186, 3, 64, 52, 217, 226, 250, 124, 123, 5, 202, 38, 147, 118, 126, 255, 82,
    85, 212, 207, 206, 59, 227, 47, 16, 58, 17, 182, 189, 28, 42, 223, 183, 170, 213, 119, 248,
    152, 2, 44, 154, 163, 70, 221, 153, 101, 155, 167, 43, 172, 9, 129, 22, 39, 253, 19, 98, 108,
    110, 79, 113, 224, 232, 178, 185, 112, 104, 218, 246, 97, 228, 251, 34, 242, 193, 238, 210,
    144, 12, 191, 179, 162, 241, 81, 51, 145, 235, 249, 14, 239, 107, 49, 192, 214, 31, 181, 199,
    106, 157, 184, 84, 204, 176, 115, 121, 50, 45, 127, 4, 150, 254, 138, 236, 205, 93, 222, 114,
    67, 29, 24, 72, 243, 141, 128, 195, 78, 66, 215, 61, 156, 180,
];

/// Traversal order through the corners of a 4D simplex.
///
/// Indexed by the 6-bit result of the pairwise offset comparisons in
/// [`crate::noise::noise4`]. Each reachable row holds `0..=3` in some
/// order; the value 3 sits at the axis with the largest offset. The 40
/// unreachable rows are `[0, 0, 0, 0]`.
pub const SIMPLEX4: [[u8; 4]; 64] = [
    [0, 1, 2, 3], [0, 1, 3, 2], [0, 0, 0, 0], [0, 2, 3, 1],
    [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [1, 2, 3, 0],
    [0, 2, 1, 3], [0, 0, 0, 0], [0, 3, 1, 2], [0, 3, 2, 1],
    [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [1, 3, 2, 0],
    [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0],
    [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0],
    [1, 2, 0, 3], [0, 0, 0, 0], [1, 3, 0, 2], [0, 0, 0, 0],
    [0, 0, 0, 0], [0, 0, 0, 0], [2, 3, 0, 1], [2, 3, 1, 0],
    [1, 0, 2, 3], [1, 0, 3, 2], [0, 0, 0, 0], [0, 0, 0, 0],
    [0, 0, 0, 0], [2, 0, 3, 1], [0, 0, 0, 0], [2, 1, 3, 0],
    [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0],
    [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0],
    [2, 0, 1, 3], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0],
    [3, 0, 1, 2], [3, 0, 2, 1], [0, 0, 0, 0], [3, 1, 2, 0],
    [2, 1, 0, 3], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0],
    [3, 1, 0, 2], [0, 0, 0, 0], [3, 2, 0, 1], [3, 2, 1, 0],
];

/// Looks up the permutation table with period 256.
///
/// Defined for every `i32`; only the low 8 bits are used.
#[inline]
#[must_use]
pub const fn permutation_at(i: i32) -> u8 {
    PERM[(i & 0xFF) as usize]
}

/// Chains two lattice coordinates through the permutation table.
#[inline]
#[must_use]
pub const fn hash2(i: i32, j: i32) -> u8 {
    permutation_at(i.wrapping_add(permutation_at(j) as i32))
}

/// Chains three lattice coordinates through the permutation table.
#[inline]
#[must_use]
pub const fn hash3(i: i32, j: i32, k: i32) -> u8 {
    permutation_at(i.wrapping_add(hash2(j, k) as i32))
}

/// Chains four lattice coordinates through the permutation table.
#[inline]
#[must_use]
pub const fn hash4(i: i32, j: i32, k: i32, l: i32) -> u8 {
    permutation_at(i.wrapping_add(hash3(j, k, l) as i32))
}

/// Corner offsets `(second, third, fourth)` for a 4D traversal row.
///
/// Corner `n` steps along every axis whose rank is at least `3 - n`, so
/// the axis with the largest offset is stepped first.
#[inline]
#[must_use]
pub(crate) const fn simplex4_corners(index: usize) -> [[i32; 4]; 3] {
    let row = SIMPLEX4[index & 63];
    let mut corners = [[0i32; 4]; 3];
    let mut n = 0;
    while n < 3 {
        let threshold = 3 - n as u8;
        let mut axis = 0;
        while axis < 4 {
            corners[n][axis] = (row[axis] >= threshold) as i32;
            axis += 1;
        }
        n += 1;
    }
    corners
}

#[cfg(test)]
mod tests {
    use super::*;

    /// FNV-1a over a byte stream, used to pin the tables.
    fn fnv1a(bytes: impl IntoIterator<Item = u8>) -> u32 {
        bytes.into_iter().fold(0x811c_9dc5, |hash, byte| {
            (hash ^ u32::from(byte)).wrapping_mul(0x0100_0193)
        })
    }

    #[test]
    fn test_perm_is_a_permutation() {
        let mut seen = [false; 256];
        for &value in &PERM {
            assert!(!seen[value as usize], "value {value} appears twice");
            seen[value as usize] = true;
        }
    }

    #[test]
    fn test_perm_regression() {
        assert_eq!(PERM[0], 151);
        assert_eq!(PERM[1], 160);
        assert_eq!(PERM[128], 52);
        assert_eq!(PERM[255], 180);
        assert_eq!(fnv1a(PERM), 0xfba1_a2b5);
    }

    #[test]
    fn test_simplex4_regression() {
        assert_eq!(fnv1a(SIMPLEX4.iter().flatten().copied()), 0xb08c_0ad5);

        let reachable = SIMPLEX4
            .iter()
            .filter(|row| {
                let mut sorted = **row;
                sorted.sort_unstable();
                sorted == [0, 1, 2, 3]
            })
            .count();
        assert_eq!(reachable, 24, "one row per ordering of four axes");

        for row in &SIMPLEX4 {
            let mut sorted = *row;
            sorted.sort_unstable();
            assert!(sorted == [0, 1, 2, 3] || *row == [0, 0, 0, 0]);
        }
    }

    #[test]
    fn test_permutation_at_is_periodic() {
        for i in -600..600 {
            assert_eq!(permutation_at(i), permutation_at(i + 256));
        }
        assert_eq!(permutation_at(-1), PERM[255]);
        assert_eq!(permutation_at(i32::MIN), PERM[0]);
        assert_eq!(permutation_at(i32::MAX), PERM[255]);
    }

    #[test]
    fn test_hash_chaining() {
        assert_eq!(hash2(0, 0), PERM[PERM[0] as usize]);
        assert_eq!(hash3(1, 2, 3), PERM[(1 + PERM[(2 + PERM[3] as usize) & 255] as usize) & 255]);
        assert_eq!(hash4(0, 0, 0, 0), permutation_at(i32::from(hash3(0, 0, 0))));
    }

    #[test]
    fn test_simplex4_corners_step_largest_axis_first() {
        // Row 0 is x < y < z < w: w is stepped first, then z, then y.
        let corners = simplex4_corners(0);
        assert_eq!(corners[0], [0, 0, 0, 1]);
        assert_eq!(corners[1], [0, 0, 1, 1]);
        assert_eq!(corners[2], [0, 1, 1, 1]);

        // Row 63 is x > y > z > w.
        let corners = simplex4_corners(63);
        assert_eq!(corners[0], [1, 0, 0, 0]);
        assert_eq!(corners[1], [1, 1, 0, 0]);
        assert_eq!(corners[2], [1, 1, 1, 0]);
    }
}
