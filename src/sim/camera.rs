//! Side scrolling
//!
//! The player never moves horizontally on screen. Forward motion is faked by
//! sliding every obstacle left by the player's horizontal speed.

use glam::Vec2;

use super::obstacle::Obstacle;

/// Shift all obstacles left by `delta` pixels
pub fn scroll(obstacles: &mut [Obstacle], delta: f32) {
    let shift = Vec2::new(-delta, 0.0);
    for obstacle in obstacles {
        obstacle.rect.translate(shift);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::obstacle::ObstacleKind;
    use crate::sim::rect::Rect;

    #[test]
    fn test_scroll_moves_every_obstacle() {
        let mut obstacles = vec![
            Obstacle::new(ObstacleKind::Block, Rect::new(64.0, 0.0, 32.0, 32.0)),
            Obstacle::new(
                ObstacleKind::Collectible { consumed: true },
                Rect::new(96.0, 32.0, 32.0, 32.0),
            ),
        ];
        scroll(&mut obstacles, 6.0);
        assert_eq!(obstacles[0].rect.x, 58.0);
        assert_eq!(obstacles[1].rect.x, 90.0);
        assert_eq!(obstacles[1].rect.y, 32.0);

        scroll(&mut obstacles, 0.0);
        assert_eq!(obstacles[0].rect.x, 58.0);
    }
}
