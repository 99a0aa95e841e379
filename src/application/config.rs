use macroquad::prelude::{Vec2, vec2};

/// Immutable startup configuration, built once in `main` and passed down.
/// Screen size, tile pixel size and map dimensions are fixed for the life
/// of the process; the grid is never resized.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    pub screen_width: f32,
    pub screen_height: f32,
    /// Edge length of one tile in pixels at zoom 1.0
    pub tile_size: f32,
    /// Map dimensions in tiles
    pub grid_width: usize,
    pub grid_height: usize,
    /// Zoom clamp range. The reference setup pins both ends to 1.0,
    /// which disables zooming without touching the transform math.
    pub zoom_min: f32,
    pub zoom_max: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_width: 800.0,
            screen_height: 600.0,
            tile_size: 10.0,
            grid_width: 1250,
            grid_height: 1250,
            zoom_min: 1.0,
            zoom_max: 1.0,
        }
    }
}

impl Config {
    pub fn screen_center(&self) -> Vec2 {
        vec2(self.screen_width / 2.0, self.screen_height / 2.0)
    }

    /// Full map extent in pixels at zoom 1.0; the pan clamp keeps the
    /// offset within half of this per axis.
    pub fn map_pixel_extent(&self) -> Vec2 {
        vec2(
            self.tile_size * self.grid_width as f32,
            self.tile_size * self.grid_height as f32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_extent() {
        let config = Config::default();
        assert_eq!(config.map_pixel_extent(), vec2(12500.0, 12500.0));
        assert_eq!(config.screen_center(), vec2(400.0, 300.0));
    }
}
