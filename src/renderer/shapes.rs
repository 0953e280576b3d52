//! Shape generation for 2D primitives
//!
//! Everything is emitted in field coordinates (top-left origin, y down);
//! `RenderState` maps to NDC at upload time.

use super::vertex::{Vertex, colors};
use crate::game::{Phase, Snapshot};
use crate::sim::Rect;

/// Two triangles covering a rectangle
pub fn rect(r: &Rect, color: [f32; 4]) -> [Vertex; 6] {
    let (l, t, rt, b) = (r.left(), r.top(), r.right(), r.bottom());
    [
        Vertex::new(l, t, color),
        Vertex::new(l, b, color),
        Vertex::new(rt, t, color),
        Vertex::new(rt, t, color),
        Vertex::new(l, b, color),
        Vertex::new(rt, b, color),
    ]
}

/// Build the whole frame: obstacles, then the player on top, then the
/// game-over shade over everything
pub fn scene_vertices(snapshot: &Snapshot, field: &Rect) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((snapshot.obstacles.len() + 2) * 6);

    for obstacle in &snapshot.obstacles {
        vertices.extend_from_slice(&rect(obstacle, colors::OBSTACLE));
    }
    vertices.extend_from_slice(&rect(&snapshot.player, colors::PLAYER));

    if snapshot.phase == Phase::GameOver {
        vertices.extend_from_slice(&rect(field, colors::GAME_OVER_SHADE));
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(phase: Phase, obstacles: usize) -> Snapshot {
        Snapshot {
            player: Rect::new(175.0, 540.0, 50.0, 50.0),
            obstacles: (0..obstacles)
                .map(|i| Rect::new(i as f32 * 60.0, 0.0, 50.0, 50.0))
                .collect(),
            score: 0,
            phase,
        }
    }

    #[test]
    fn test_rect_corners() {
        let verts = rect(&Rect::new(10.0, 20.0, 30.0, 40.0), colors::PLAYER);
        let xs: Vec<f32> = verts.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = verts.iter().map(|v| v.position[1]).collect();
        assert!(xs.iter().all(|&x| x == 10.0 || x == 40.0));
        assert!(ys.iter().all(|&y| y == 20.0 || y == 60.0));
    }

    #[test]
    fn test_scene_player_drawn_last_while_running() {
        let field = Rect::new(0.0, 0.0, 400.0, 600.0);
        let verts = scene_vertices(&snapshot(Phase::Running, 3), &field);
        assert_eq!(verts.len(), 4 * 6);
        assert!(verts[..18].iter().all(|v| v.color == colors::OBSTACLE));
        assert!(verts[18..].iter().all(|v| v.color == colors::PLAYER));
    }

    #[test]
    fn test_scene_shaded_on_game_over() {
        let field = Rect::new(0.0, 0.0, 400.0, 600.0);
        let verts = scene_vertices(&snapshot(Phase::GameOver, 1), &field);
        assert_eq!(verts.len(), 3 * 6);
        assert!(verts[12..].iter().all(|v| v.color == colors::GAME_OVER_SHADE));
    }
}
