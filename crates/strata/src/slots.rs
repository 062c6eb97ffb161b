//! One-dimensional slot occupancy.
//!
//! Horizontal space is cut into slots of `slot_width` pixels, numbered from slot 0 at x = 0 and
//! extending without bound in both directions. Placement packs each node into a run of free slots
//! and keeps slots under live edge lines reserved so later nodes do not sit on top of them.

use crate::error::{Error, Result};

/// Widest run `find_space` will look for. Anything wider cannot be packed in reasonable time.
const MAX_RUN_SLOTS: f64 = (1u64 << 32) as f64;

/// Which side of the desired position a placement may grow towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Grow leftwards: the run ends just left of the desired slot.
    #[default]
    Left,
    /// Grow in both directions around the desired slot.
    Center,
    /// Grow rightwards: the run starts at the desired slot.
    Right,
}

impl Direction {
    fn takes_left(self) -> bool {
        self != Self::Right
    }

    fn takes_right(self) -> bool {
        self != Self::Left
    }
}

#[derive(Debug, Clone)]
pub struct SlotTracker {
    slot_width: f64,
    /// Extra probes allowed beyond the touched extent before a scan gives up.
    scan_slack: i64,
    probe_limit: Option<i64>,
    /// Slots `0, 1, 2, ...`.
    right: Vec<bool>,
    /// Slots `-1, -2, -3, ...`.
    left: Vec<bool>,
    min_slot: i64,
    max_slot: i64,
}

impl SlotTracker {
    pub fn new(slot_width: f64, scan_slack: usize) -> Self {
        Self {
            slot_width,
            scan_slack: scan_slack as i64,
            probe_limit: None,
            right: Vec::new(),
            left: Vec::new(),
            min_slot: 0,
            max_slot: 0,
        }
    }

    /// Caps the number of probes a single [`SlotTracker::find_space`] may make.
    pub fn with_probe_limit(mut self, limit: i64) -> Self {
        self.probe_limit = Some(limit);
        self
    }

    pub fn slot_width(&self) -> f64 {
        self.slot_width
    }

    /// Leftmost and rightmost slot ever occupied or cleared.
    pub fn extent(&self) -> (i64, i64) {
        (self.min_slot, self.max_slot)
    }

    pub fn position_to_slot(&self, pos: f64) -> i64 {
        (pos / self.slot_width).floor() as i64
    }

    pub fn slot_left(&self, slot: i64) -> f64 {
        slot as f64 * self.slot_width
    }

    pub fn is_occupied(&self, slot: i64) -> bool {
        let (cells, at) = if slot >= 0 {
            (&self.right, slot as usize)
        } else {
            (&self.left, (-(slot + 1)) as usize)
        };
        cells.get(at).copied().unwrap_or(false)
    }

    /// Marks slots `from..=to` as filled.
    pub fn occupy(&mut self, from: i64, to: i64) -> Result<()> {
        tracing::trace!(
            from = self.slot_left(from),
            to = self.slot_left(to + 1),
            "occupied"
        );
        self.set_range(from, to, true)
    }

    /// Marks slots `from..=to` as free.
    pub fn clear(&mut self, from: i64, to: i64) -> Result<()> {
        tracing::trace!(
            from = self.slot_left(from),
            to = self.slot_left(to + 1),
            "cleared"
        );
        self.set_range(from, to, false)
    }

    /// Occupies the slots covering `[from, to)`.
    pub fn occupy_positions(&mut self, from: f64, to: f64) -> Result<()> {
        let (from, to) = self.position_range(from, to);
        self.occupy(from, to)
    }

    /// Frees the slots covering `[from, to)`.
    pub fn clear_positions(&mut self, from: f64, to: f64) -> Result<()> {
        let (from, to) = self.position_range(from, to);
        self.clear(from, to)
    }

    /// Reserves half a slot on either side of each anchor.
    pub fn occupy_under_edges(&mut self, anchors: impl IntoIterator<Item = f64>) -> Result<()> {
        for anchor in anchors {
            let (from, to) = self.under_edge(anchor);
            self.occupy(from, to)?;
        }
        Ok(())
    }

    /// Releases what [`SlotTracker::occupy_under_edges`] reserved for the same anchors.
    pub fn clear_under_edges(&mut self, anchors: impl IntoIterator<Item = f64>) -> Result<()> {
        for anchor in anchors {
            let (from, to) = self.under_edge(anchor);
            self.clear(from, to)?;
        }
        Ok(())
    }

    /// Finds a run of free slots wide enough for `width` pixels near `pos + width / 2`.
    ///
    /// The scan alternates right and left of the starting slot, counting consecutive free slots
    /// on each side that `direction` allows, and returns `(first_slot, slot_count)` for the first
    /// run that fits. Every slot beyond the touched extent is free, so a run always exists within
    /// the extent plus the requested width; the scan gives up with
    /// [`Error::UnresolvedPlacement`] once it has probed that far plus `scan_slack`, and
    /// immediately when `width` is not finite or needs more than 2^32 slots.
    pub fn find_space(&self, pos: f64, width: f64, direction: Direction) -> Result<(i64, i64)> {
        let start = self.position_to_slot(pos + width / 2.0);
        let width_slots = (width / self.slot_width).ceil();
        if !width_slots.is_finite() || width_slots > MAX_RUN_SLOTS {
            return Err(Error::UnresolvedPlacement {
                start_slot: start,
                width_slots: width_slots as i64,
                probes: 0,
            });
        }
        let width_slots = (width_slots as i64).max(1);
        let reach = start
            .saturating_sub(self.min_slot)
            .saturating_abs()
            .max(self.max_slot.saturating_sub(start).saturating_abs())
            .saturating_add(width_slots)
            .saturating_add(self.scan_slack)
            .saturating_add(1);
        let bound = reach.saturating_mul(2).saturating_add(2);
        let max_probes = self.probe_limit.map_or(bound, |limit| limit.min(bound));

        let mut left_needed = width_slots;
        let mut right_needed = width_slots;
        let mut probes: i64 = 0;
        while probes < max_probes {
            let on_left = probes % 2 == 1;
            probes += 1;
            let offset = probes >> 1;
            let slot = if on_left {
                start.saturating_sub(offset)
            } else {
                start.saturating_add(offset)
            };

            if self.is_occupied(slot) {
                if on_left {
                    left_needed = width_slots;
                } else {
                    right_needed = width_slots;
                }
                continue;
            }

            if on_left {
                if direction.takes_left() {
                    left_needed -= 1;
                }
            } else if direction.takes_right() {
                right_needed -= 1;
            }

            // Every probe so far was free: the slots probed on both sides form one run.
            let fits = left_needed == 0
                || right_needed == 0
                || (left_needed + right_needed == width_slots && probes == width_slots);
            if fits {
                let first = if on_left {
                    slot
                } else {
                    slot.saturating_sub(width_slots - 1)
                };
                return Ok((first, width_slots));
            }
        }

        Err(Error::UnresolvedPlacement {
            start_slot: start,
            width_slots,
            probes,
        })
    }

    fn position_range(&self, from: f64, to: f64) -> (i64, i64) {
        (self.position_to_slot(from), self.position_to_slot(to - 1.0))
    }

    fn under_edge(&self, anchor: f64) -> (i64, i64) {
        let margin = (self.slot_width / 2.0).floor();
        let (from, to) = self.position_range(anchor - margin, anchor + margin);
        (from, to.max(from))
    }

    fn set_range(&mut self, from: i64, to: i64, value: bool) -> Result<()> {
        if to < from {
            return Err(Error::InvalidRange { from, to });
        }
        self.min_slot = self.min_slot.min(from);
        self.max_slot = self.max_slot.max(to);
        for slot in from..=to {
            let (cells, at) = if slot >= 0 {
                (&mut self.right, slot as usize)
            } else {
                (&mut self.left, (-(slot + 1)) as usize)
            };
            if at >= cells.len() {
                if !value {
                    continue;
                }
                cells.resize(at + 1, false);
            }
            cells[at] = value;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_cover_negative_positions() {
        let t = SlotTracker::new(50.0, 0);
        assert_eq!(t.position_to_slot(0.0), 0);
        assert_eq!(t.position_to_slot(49.9), 0);
        assert_eq!(t.position_to_slot(-0.1), -1);
        assert_eq!(t.position_to_slot(-50.0), -1);
        assert_eq!(t.position_to_slot(-50.1), -2);
        assert_eq!(t.slot_left(-2), -100.0);
    }

    #[test]
    fn occupy_and_clear_update_extent() {
        let mut t = SlotTracker::new(50.0, 0);
        t.occupy(-3, 2).unwrap();
        assert!(t.is_occupied(-3));
        assert!(t.is_occupied(0));
        assert!(t.is_occupied(2));
        assert!(!t.is_occupied(3));
        assert!(!t.is_occupied(-4));
        assert_eq!(t.extent(), (-3, 2));

        t.clear(-1, 5).unwrap();
        assert!(t.is_occupied(-2));
        assert!(!t.is_occupied(-1));
        assert!(!t.is_occupied(2));
        assert_eq!(t.extent(), (-3, 5));
    }
}
