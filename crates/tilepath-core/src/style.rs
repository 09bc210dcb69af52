//! Display colours for tile states.

use crate::tiles::TileState;

/// A linear RGB colour with components in `0.0..=1.0`.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    /// Construct from individual components.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Components as an array, in `[r, g, b]` order.
    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// Quantize to 8-bit channels.
    #[inline]
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        (q(self.r), q(self.g), q(self.b))
    }
}

pub const EMPTY_COLOR: Rgb = Rgb::new(0.95, 0.95, 0.95);
pub const START_COLOR: Rgb = Rgb::new(0.2, 0.8, 0.2);
pub const GOAL_COLOR: Rgb = Rgb::new(0.8, 0.2, 0.2);
pub const OBSTACLE_COLOR: Rgb = Rgb::new(0.15, 0.15, 0.15);
pub const VISITED_COLOR: Rgb = Rgb::new(0.4, 0.6, 0.9);
pub const PATH_COLOR: Rgb = Rgb::new(1.0, 0.8, 0.2);

/// The colour a presentation layer paints a tile in the given state.
pub const fn tile_color(state: TileState) -> Rgb {
    match state {
        TileState::Empty => EMPTY_COLOR,
        TileState::Start => START_COLOR,
        TileState::Goal => GOAL_COLOR,
        TileState::Obstacle => OBSTACLE_COLOR,
        TileState::Visited => VISITED_COLOR,
        TileState::Path => PATH_COLOR,
    }
}
