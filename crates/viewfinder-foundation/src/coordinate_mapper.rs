//! Bidirectional mapping between content offset and handle position.
//!
//! The relationship is inverted like a camera viewfinder: dragging the handle
//! right reveals the right part of the content, which means moving the
//! content left. Offset `+max_offset` maps to handle position `0` and
//! offset `-max_offset` to the far end of the track.

/// Handle position for `offset`.
///
/// `(1 - (offset + max_offset) / (2 * max_offset)) * movable_width`. With no
/// room to pan, or no room to move the handle, the handle sits centered.
pub fn offset_to_handle(offset: f32, max_offset: f32, movable_width: f32) -> f32 {
    if !(max_offset > 0.0) || !(movable_width > 0.0) {
        return centered_handle(movable_width);
    }
    (1.0 - (offset + max_offset) / (2.0 * max_offset)) * movable_width
}

/// Content offset for `handle_position`, the exact inverse of
/// [`offset_to_handle`].
///
/// `((1 - handle_position / movable_width) * 2 * max_offset) - max_offset`.
/// Degenerate inputs map to the centered offset `0`.
pub fn handle_to_offset(handle_position: f32, max_offset: f32, movable_width: f32) -> f32 {
    if !(max_offset > 0.0) || !(movable_width > 0.0) {
        return 0.0;
    }
    ((1.0 - handle_position / movable_width) * 2.0 * max_offset) - max_offset
}

fn centered_handle(movable_width: f32) -> f32 {
    movable_width.max(0.0) / 2.0
}

/// The two parameters of the mapping captured together.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HandleMapping {
    pub max_offset: f32,
    pub movable_width: f32,
}

impl HandleMapping {
    pub fn new(max_offset: f32, movable_width: f32) -> Self {
        Self {
            max_offset,
            movable_width,
        }
    }

    /// True when the handle can actually drive the content.
    pub fn is_active(&self) -> bool {
        self.max_offset > 0.0 && self.movable_width > 0.0
    }

    pub fn offset_to_handle(&self, offset: f32) -> f32 {
        offset_to_handle(offset, self.max_offset, self.movable_width)
    }

    pub fn handle_to_offset(&self, handle_position: f32) -> f32 {
        handle_to_offset(handle_position, self.max_offset, self.movable_width)
    }

    pub fn clamp_handle(&self, handle_position: f32) -> f32 {
        handle_position.clamp(0.0, self.movable_width.max(0.0))
    }

    pub fn centered_handle(&self) -> f32 {
        centered_handle(self.movable_width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-3;

    #[test]
    fn extremes_map_inverted() {
        let mapping = HandleMapping::new(500.0, 700.0);
        assert_eq!(mapping.offset_to_handle(500.0), 0.0);
        assert_eq!(mapping.offset_to_handle(-500.0), 700.0);
        assert_eq!(mapping.offset_to_handle(0.0), 350.0);
        assert_eq!(mapping.handle_to_offset(0.0), 500.0);
        assert_eq!(mapping.handle_to_offset(700.0), -500.0);
        assert_eq!(mapping.handle_to_offset(350.0), 0.0);
    }

    #[test]
    fn moving_handle_right_moves_content_left() {
        let mapping = HandleMapping::new(200.0, 100.0);
        assert!(mapping.handle_to_offset(60.0) < mapping.handle_to_offset(40.0));
    }

    #[test]
    fn offset_round_trips() {
        let mapping = HandleMapping::new(500.0, 700.0);
        let mut offset = -500.0;
        while offset <= 500.0 {
            let back = mapping.handle_to_offset(mapping.offset_to_handle(offset));
            assert!((back - offset).abs() < EPSILON, "{offset} came back as {back}");
            offset += 12.5;
        }
    }

    #[test]
    fn handle_round_trips() {
        let mapping = HandleMapping::new(137.5, 212.0);
        for step in 0..=40 {
            let handle = 212.0 * step as f32 / 40.0;
            let back = mapping.offset_to_handle(mapping.handle_to_offset(handle));
            assert!((back - handle).abs() < EPSILON, "{handle} came back as {back}");
        }
    }

    #[test]
    fn scenario_offset_minus_300() {
        // 2000 wide content in a 1000 wide viewport, 700 px of handle travel.
        let mapping = HandleMapping::new(500.0, 700.0);
        // (1 - (-300 + 500) / 1000) * 700 = 0.8 * 700
        assert!((mapping.offset_to_handle(-300.0) - 560.0).abs() < EPSILON);
    }

    #[test]
    fn degenerate_mapping_is_centered() {
        let no_pan = HandleMapping::new(0.0, 300.0);
        assert!(!no_pan.is_active());
        assert_eq!(no_pan.offset_to_handle(123.0), 150.0);
        assert_eq!(no_pan.handle_to_offset(10.0), 0.0);

        let no_track = HandleMapping::new(250.0, 0.0);
        assert!(!no_track.is_active());
        assert_eq!(no_track.offset_to_handle(100.0), 0.0);
        assert_eq!(no_track.handle_to_offset(0.0), 0.0);
        assert_eq!(offset_to_handle(1.0, f32::NAN, 10.0), 5.0);
    }

    #[test]
    fn clamp_handle_stays_on_track() {
        let mapping = HandleMapping::new(100.0, 80.0);
        assert_eq!(mapping.clamp_handle(-4.0), 0.0);
        assert_eq!(mapping.clamp_handle(95.0), 80.0);
        assert_eq!(mapping.centered_handle(), 40.0);
    }
}
