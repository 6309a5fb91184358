// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Out-range resolution.
//!
//! A candidate reveal that lands inside an out-range is moved onto one of the
//! range's bounds. Ranges are visited once, in the order given: a position
//! moved by one range is tested against the remaining ranges only, never
//! against the ones already visited.

use crate::interval::{Direction, OutRange};

/// Moves `position` out of every out-range it falls inside.
///
/// Walking toward lower indexes (exterior), a position inside `[lo, hi]` is
/// moved to `hi`; walking toward higher indexes (interior) it is moved to
/// `lo`. Either way the reveal is pulled back toward the edge the walk
/// started from, so the panel before the opening gets shorter rather than
/// the reveal landing next to the opening. A position sitting exactly on
/// that bound is left where it is.
pub fn resolve(position: f64, out_ranges: &[OutRange], direction: Direction) -> f64 {
    let mut position = position;
    for range in out_ranges {
        let (lo, hi) = range.bounds();
        if !(lo <= position && position <= hi) {
            continue;
        }
        match direction {
            Direction::Exterior => {
                if lo > position {
                    position = lo;
                } else if hi > position {
                    position = hi;
                }
            }
            Direction::Interior => {
                if lo < position {
                    position = lo;
                } else if hi < position {
                    position = hi;
                }
            }
        }
    }
    position
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outside_every_range_is_unchanged() {
        let ranges = [OutRange::new(7.5, 8.5), OutRange::new(11.5, 12.5)];
        assert_eq!(resolve(10.0, &ranges, Direction::Exterior), 10.0);
        assert_eq!(resolve(10.0, &ranges, Direction::Interior), 10.0);
        assert_eq!(resolve(3.0, &[], Direction::Exterior), 3.0);
    }

    #[test]
    fn exterior_moves_to_high_bound() {
        let ranges = [OutRange::new(11.5, 12.5)];
        assert_eq!(resolve(12.0, &ranges, Direction::Exterior), 12.5);
        assert_eq!(resolve(11.5, &ranges, Direction::Exterior), 12.5);
        assert_eq!(resolve(12.5, &ranges, Direction::Exterior), 12.5);
    }

    #[test]
    fn interior_moves_to_low_bound() {
        let ranges = [OutRange::new(11.5, 12.5)];
        assert_eq!(resolve(12.0, &ranges, Direction::Interior), 11.5);
        assert_eq!(resolve(12.5, &ranges, Direction::Interior), 11.5);
        assert_eq!(resolve(11.5, &ranges, Direction::Interior), 11.5);
    }

    #[test]
    fn unordered_bounds_are_sorted() {
        let ranges = [OutRange::new(12.5, 11.5)];
        assert_eq!(resolve(12.0, &ranges, Direction::Exterior), 12.5);
        assert_eq!(resolve(12.0, &ranges, Direction::Interior), 11.5);
    }

    #[test]
    fn ranges_are_visited_once_in_order() {
        // The second range catches the position moved by the first one...
        let chained = [OutRange::new(1.0, 2.0), OutRange::new(1.8, 3.0)];
        assert_eq!(resolve(1.5, &chained, Direction::Exterior), 3.0);

        // ...but a range that was already visited is not revisited.
        let reversed = [OutRange::new(1.8, 3.0), OutRange::new(1.0, 2.0)];
        assert_eq!(resolve(1.5, &reversed, Direction::Exterior), 2.0);
    }

    #[test]
    fn directions_mirror_each_other() {
        let ranges = [OutRange::new(3.0, 4.0), OutRange::new(9.0, 10.5)];
        let mirrored: Vec<OutRange> = ranges.iter().map(|r| r.mirrored(0.0)).collect();
        for position in [3.2, 4.0, 9.0, 10.0, 6.0] {
            let exterior = resolve(position, &ranges, Direction::Exterior);
            let interior = resolve(-position, &mirrored, Direction::Interior);
            assert_eq!(exterior, -interior);
        }
    }
}
