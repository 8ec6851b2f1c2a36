//! Conversions between square masks, (row, col) coordinates, square indices
//! and algebraic names.
//!
//! Bit `i` of a mask is row `i / 8`, column `i % 8`. Row 0 is the eighth
//! rank (the first rank string of a FEN record) and column 0 is the a-file,
//! so `a8` is bit 0 and `h1` is bit 63.

/// A (row, col) pair. Valid squares have both parts in `0..=7`.
pub type Coordinate = (i32, i32);

/// Single-bit mask for a coordinate, or `None` off the board.
#[inline]
pub fn coordinate_to_mask(row: i32, col: i32) -> Option<u64> {
    if !(0..8).contains(&row) || !(0..8).contains(&col) {
        return None;
    }
    Some(1u64 << (row * 8 + col))
}

/// Coordinate of a single-square mask. Empty and multi-square masks fail.
#[inline]
pub fn mask_to_coordinate(mask: u64) -> Option<Coordinate> {
    let idx = square_index(mask)? as i32;
    Some((idx / 8, idx % 8))
}

/// Bit index of a single-square mask.
#[inline]
pub fn square_index(mask: u64) -> Option<u8> {
    if mask.count_ones() != 1 {
        return None;
    }
    Some(mask.trailing_zeros() as u8)
}

#[inline]
pub fn index_to_mask(idx: u8) -> Option<u64> {
    (idx < 64).then(|| 1u64 << idx)
}

/// Iterator over the single-square masks of a board mask, lowest bit first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Squares(u64);

impl Iterator for Squares {
    type Item = u64;

    #[inline]
    fn next(&mut self) -> Option<u64> {
        if self.0 == 0 {
            return None;
        }
        let lsb = self.0 & self.0.wrapping_neg();
        self.0 ^= lsb;
        Some(lsb)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Squares {}

#[inline]
pub fn squares(mask: u64) -> Squares {
    Squares(mask)
}

/// Coordinates of every square in `mask`, in increasing bit order.
pub fn mask_to_coordinates(mask: u64) -> impl Iterator<Item = Coordinate> + Clone {
    squares(mask).map(|sq| {
        let idx = sq.trailing_zeros() as i32;
        (idx / 8, idx % 8)
    })
}

/// `"e4"` style name to mask.
pub fn algebraic_to_mask(name: &str) -> Option<u64> {
    let bytes = name.as_bytes();
    if bytes.len() != 2 {
        return None;
    }
    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return None;
    }
    let col = (file - b'a') as i32;
    let row = 7 - (rank - b'1') as i32;
    coordinate_to_mask(row, col)
}

pub fn mask_to_algebraic(mask: u64) -> Option<String> {
    let (row, col) = mask_to_coordinate(mask)?;
    let file = (b'a' + col as u8) as char;
    let rank = (b'1' + (7 - row) as u8) as char;
    Some(format!("{file}{rank}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_bounds() {
        assert_eq!(coordinate_to_mask(0, 0), Some(1));
        assert_eq!(coordinate_to_mask(7, 7), Some(1u64 << 63));
        assert_eq!(coordinate_to_mask(-1, 0), None);
        assert_eq!(coordinate_to_mask(0, 8), None);
        assert_eq!(coordinate_to_mask(8, 3), None);
    }

    #[test]
    fn test_mask_to_coordinate_rejects_non_squares() {
        assert_eq!(mask_to_coordinate(0), None);
        assert_eq!(mask_to_coordinate(0b11), None);
        assert_eq!(mask_to_coordinate(1u64 << 27), Some((3, 3)));
    }

    #[test]
    fn test_mask_to_coordinates_order() {
        let mask = (1u64 << 63) | (1u64 << 9) | 1;
        let coords: Vec<_> = mask_to_coordinates(mask).collect();
        assert_eq!(coords, vec![(0, 0), (1, 1), (7, 7)]);

        // restartable
        let iter = mask_to_coordinates(mask);
        assert_eq!(iter.clone().count(), 3);
        assert_eq!(iter.count(), 3);

        assert_eq!(mask_to_coordinates(0).count(), 0);
    }

    #[test]
    fn test_squares_iterator() {
        let mask = 0x8100_0000_0000_0081u64;
        let sqs: Vec<u64> = squares(mask).collect();
        assert_eq!(sqs, vec![1, 1 << 7, 1 << 56, 1 << 63]);
        assert_eq!(squares(mask).len(), 4);
    }

    #[test]
    fn test_algebraic_corners() {
        assert_eq!(algebraic_to_mask("a8"), Some(1));
        assert_eq!(algebraic_to_mask("h8"), Some(1 << 7));
        assert_eq!(algebraic_to_mask("a1"), Some(1 << 56));
        assert_eq!(algebraic_to_mask("h1"), Some(1 << 63));
        assert_eq!(algebraic_to_mask("E2"), algebraic_to_mask("e2"));
    }

    #[test]
    fn test_algebraic_round_trip() {
        for idx in 0..64u8 {
            let mask = index_to_mask(idx).unwrap();
            let name = mask_to_algebraic(mask).unwrap();
            assert_eq!(algebraic_to_mask(&name), Some(mask), "round trip failed for {name}");
        }
    }

    #[test]
    fn test_algebraic_invalid() {
        for bad in ["", "e", "e9", "i1", "e0", "e22", "4e", "--"] {
            assert_eq!(algebraic_to_mask(bad), None, "{bad:?} should not parse");
        }
        assert_eq!(mask_to_algebraic(0), None);
        assert_eq!(mask_to_algebraic(0b101), None);
    }

    #[test]
    fn test_index_to_mask() {
        assert_eq!(index_to_mask(0), Some(1));
        assert_eq!(index_to_mask(63), Some(1 << 63));
        assert_eq!(index_to_mask(64), None);
    }
}
