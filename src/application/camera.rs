use macroquad::prelude::{Rect, Vec2, vec2};

use super::Config;
use super::numeric::round_to_tenth;

/// Camera is the affine view transform: a zoom factor and a pixel offset
/// mapping world space to screen space and, for editing, screen pixels back
/// to tile ids. Both fields are re-clamped inside every mutation, so the
/// camera is never observably out of range.
pub struct Camera {
    zoom: f32,
    offset: Vec2,
    config: Config,
}

impl Camera {
    pub fn new(config: Config) -> Self {
        Self {
            zoom: 1.0_f32.clamp(config.zoom_min, config.zoom_max),
            offset: Vec2::ZERO,
            config,
        }
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// World position to screen position. Pure.
    pub fn translate(&self, world: Vec2) -> Vec2 {
        (world - self.offset) * self.zoom
    }

    /// World rect to screen rect: the origin moves with the full transform,
    /// the extent only scales.
    pub fn translate_rect(&self, world: Rect) -> Rect {
        let origin = self.translate(world.point());
        Rect::new(origin.x, origin.y, world.w * self.zoom, world.h * self.zoom)
    }

    /// Inverse mapping: which tile is under this screen position.
    ///
    /// Positions are taken relative to the world position of the screen
    /// center, floor-divided by the on-screen tile size, then re-centered so
    /// the middle of the map is tile (width/2, height/2). The division must
    /// floor toward negative infinity: truncation would fold the two tiles
    /// around the map center onto each other.
    ///
    /// The result may lie outside the map for positions past the edge; the
    /// grid's bounds policy rejects those, not the camera.
    pub fn tile_id_for_screen_pos(&self, pos: Vec2) -> (i32, i32) {
        let world_center = self.translate(self.config.screen_center());
        let relative = pos * self.zoom - world_center;
        let step = self.config.tile_size * self.zoom;
        (
            (relative.x / step).floor() as i32 + self.config.grid_width as i32 / 2,
            (relative.y / step).floor() as i32 + self.config.grid_height as i32 / 2,
        )
    }

    /// Forward mapping: screen position of a tile's top-left corner.
    ///
    /// Kept as the mirror of `tile_id_for_screen_pos` including its trailing
    /// zoom multiply; the pair is only an approximate inverse (floor division
    /// loses sub-tile position), so callers tolerate a one-tile discrepancy.
    pub fn screen_pos_for_tile_id(&self, x: i32, y: i32) -> Vec2 {
        let world_center = self.translate(self.config.screen_center());
        let step = self.config.tile_size * self.zoom;
        vec2(
            ((x - self.config.grid_width as i32 / 2) as f32 * step + world_center.x) * self.zoom,
            ((y - self.config.grid_height as i32 / 2) as f32 * step + world_center.y) * self.zoom,
        )
    }

    /// Apply a wheel increment. The new factor is clamped to the configured
    /// range and quantized to one decimal in the same step.
    pub fn set_zoom(&mut self, delta: f32) {
        self.zoom = round_to_tenth(
            (self.zoom + delta).clamp(self.config.zoom_min, self.config.zoom_max),
        );
    }

    /// Drag the view. The offset moves against the pointer motion and is
    /// clamped per axis to half the map's pixel extent.
    pub fn pan(&mut self, delta: Vec2) {
        let half_extent = self.config.map_pixel_extent() / 2.0;
        self.offset = (self.offset - delta).clamp(-half_extent, half_extent);
    }

    /// Back to identity view
    pub fn reset(&mut self) {
        self.zoom = 1.0_f32.clamp(self.config.zoom_min, self.config.zoom_max);
        self.offset = Vec2::ZERO;
    }
}
