//! Frame painting
//!
//! Pure read-only consumer of the game state: particles first, then
//! asteroids, then the input readout, with banners over the top in the
//! terminal phases. Never mutates game state.

use glam::Vec2;
use std::f32::consts::TAU;

use super::surface::{Color, DrawSurface, TextAlign, TextBaseline, TextStyle};
use crate::hsl_to_rgb;
use crate::sim::{Asteroid, GamePhase, GameState, Particle};

/// Translucent per-frame fill; old frames bleed through as motion trails
const BACKGROUND: Color = Color::rgba8(10, 1, 26, 0.3);
const IDLE_BACKGROUND: Color = Color::rgba8(10, 1, 26, 0.9);
const BACKDROP: Color = Color::rgba8(0, 0, 0, 0.7);
const ACCENT: Color = Color::rgb8(199, 112, 240);
const ASTEROID_OUTLINE: Color = Color::rgb8(166, 74, 201);
const ASTEROID_FILL: Color = Color::rgba8(166, 74, 201, 0.3);
const TARGET_OUTLINE: Color = Color::rgb8(255, 221, 0);
const TARGET_FILL: Color = Color::rgba8(255, 221, 0, 0.2);
const TYPED_COLOR: Color = Color::rgb8(0, 255, 0);

const WORD_SIZE_PX: f32 = 18.0;
const TARGET_GLOW_BLUR: f32 = 15.0;

/// Outline points of an asteroid: an eight-sided polygon whose radius is
/// modulated around the circle, then spun by the current rotation.
pub fn asteroid_points(center: Vec2, size: f32, rotation: f32) -> [Vec2; 8] {
    let mut points = [Vec2::ZERO; 8];
    for (i, point) in points.iter_mut().enumerate() {
        let angle = i as f32 / 8.0 * TAU;
        let radius = size / 2.0 * (0.8 + (angle * 3.0).sin() * 0.2);
        let theta = angle + rotation;
        *point = center + Vec2::new(theta.cos(), theta.sin()) * radius;
    }
    points
}

/// Paint one frame of the current state. `high_score` rides along for the
/// game-over summary.
pub fn draw_frame(surface: &mut dyn DrawSurface, state: &GameState, high_score: u64) {
    let size = surface.size();

    if state.phase == GamePhase::Idle {
        surface.fill_rect(Vec2::ZERO, size, IDLE_BACKGROUND);
        draw_idle_banner(surface, size);
        return;
    }

    surface.fill_rect(Vec2::ZERO, size, BACKGROUND);
    for particle in &state.particles {
        draw_particle(surface, particle);
    }
    for asteroid in &state.asteroids {
        draw_asteroid(surface, asteroid);
    }
    draw_input(surface, size, &state.input);

    if state.phase == GamePhase::GameOver {
        draw_game_over(surface, size, state.score, high_score);
    }
}

fn draw_particle(surface: &mut dyn DrawSurface, particle: &Particle) {
    let (r, g, b) = hsl_to_rgb(particle.hue, 1.0, particle.lightness / 100.0);
    let color = Color {
        r,
        g,
        b,
        a: particle.life.clamp(0.0, 1.0),
    };
    surface.fill_circle(particle.pos, particle.size, color);
}

fn draw_asteroid(surface: &mut dyn DrawSurface, asteroid: &Asteroid) {
    let center = asteroid.center();
    let points = asteroid_points(center, asteroid.size, asteroid.rotation);
    let (fill, outline, width) = if asteroid.is_target {
        (TARGET_FILL, TARGET_OUTLINE, 3.0)
    } else {
        (ASTEROID_FILL, ASTEROID_OUTLINE, 2.0)
    };
    surface.fill_polygon(&points, fill);
    surface.stroke_polygon(&points, outline, width);

    draw_word(surface, asteroid, center);

    if asteroid.is_target {
        surface.set_glow(TARGET_OUTLINE, TARGET_GLOW_BLUR);
        surface.stroke_rect(asteroid.pos, Vec2::splat(asteroid.size), TARGET_OUTLINE, 2.0);
        surface.clear_glow();
    }
}

/// The word sits at the asteroid's center, the typed prefix in green and
/// the remainder in white. Both halves are measured so the whole word
/// stays centered as the split point moves.
fn draw_word(surface: &mut dyn DrawSurface, asteroid: &Asteroid, center: Vec2) {
    let typed_len = asteroid.typed.min(asteroid.word.len());
    if typed_len == 0 {
        let style = TextStyle::new(WORD_SIZE_PX, true, TextAlign::Center, TextBaseline::Middle);
        surface.fill_text(asteroid.word, center, &style, Color::WHITE);
        return;
    }

    let style = TextStyle::new(WORD_SIZE_PX, true, TextAlign::Left, TextBaseline::Middle);
    let typed = &asteroid.word[..typed_len];
    let rest = &asteroid.word[typed_len..];
    let total_width = surface.text_width(asteroid.word, &style);
    let typed_width = surface.text_width(typed, &style);
    let left = center.x - total_width / 2.0;

    surface.fill_text(typed, Vec2::new(left, center.y), &style, TYPED_COLOR);
    surface.fill_text(rest, Vec2::new(left + typed_width, center.y), &style, Color::WHITE);
}

fn draw_input(surface: &mut dyn DrawSurface, size: Vec2, input: &str) {
    if input.is_empty() {
        return;
    }
    let min = Vec2::new(size.x / 2.0 - 150.0, size.y - 60.0);
    let extent = Vec2::new(300.0, 50.0);
    surface.fill_rect(min, extent, BACKDROP);
    surface.stroke_rect(min, extent, ACCENT, 2.0);

    let style = TextStyle::new(24.0, true, TextAlign::Center, TextBaseline::Alphabetic);
    surface.fill_text(
        input,
        Vec2::new(size.x / 2.0, size.y - 28.0),
        &style,
        Color::WHITE,
    );
}

fn draw_idle_banner(surface: &mut dyn DrawSurface, size: Vec2) {
    let center_x = size.x / 2.0;
    let title = TextStyle::new(36.0, true, TextAlign::Center, TextBaseline::Alphabetic);
    let body = TextStyle::new(18.0, false, TextAlign::Center, TextBaseline::Alphabetic);
    surface.fill_text(
        "TYPEFALL",
        Vec2::new(center_x, size.y / 2.0 - 30.0),
        &title,
        ACCENT,
    );
    surface.fill_text(
        "Press START to begin",
        Vec2::new(center_x, size.y / 2.0 + 20.0),
        &body,
        Color::WHITE,
    );
    surface.fill_text(
        "Type the words on the asteroids to destroy them!",
        Vec2::new(center_x, size.y / 2.0 + 50.0),
        &body,
        Color::WHITE,
    );
}

fn draw_game_over(surface: &mut dyn DrawSurface, size: Vec2, score: u64, high_score: u64) {
    surface.fill_rect(Vec2::ZERO, size, BACKDROP);
    let center_x = size.x / 2.0;

    let title = TextStyle::new(48.0, true, TextAlign::Center, TextBaseline::Alphabetic);
    surface.fill_text(
        "GAME OVER",
        Vec2::new(center_x, size.y / 2.0 - 50.0),
        &title,
        ACCENT,
    );

    let body = TextStyle::new(24.0, false, TextAlign::Center, TextBaseline::Alphabetic);
    surface.fill_text(
        &format!("Final Score: {}", score),
        Vec2::new(center_x, size.y / 2.0 + 10.0),
        &body,
        Color::WHITE,
    );

    if score == high_score && score > 0 {
        let flag = TextStyle::new(20.0, true, TextAlign::Center, TextBaseline::Alphabetic);
        surface.fill_text(
            "NEW HIGH SCORE!",
            Vec2::new(center_x, size.y / 2.0 + 50.0),
            &flag,
            TARGET_OUTLINE,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    const SURFACE: Vec2 = Vec2::new(800.0, 400.0);

    #[derive(Debug, PartialEq)]
    enum Op {
        FillRect(Vec2, Vec2),
        StrokeRect(Vec2, Vec2),
        FillPolygon(usize),
        StrokePolygon(usize),
        Circle(Vec2, f32, f32),
        Text(String, Vec2),
        Glow,
        ClearGlow,
    }

    /// Records primitives instead of painting them; text is 10px per char
    #[derive(Default)]
    struct RecordingSurface {
        ops: Vec<Op>,
    }

    impl RecordingSurface {
        fn texts(&self) -> Vec<&str> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    Op::Text(s, _) => Some(s.as_str()),
                    _ => None,
                })
                .collect()
        }
    }

    impl DrawSurface for RecordingSurface {
        fn size(&self) -> Vec2 {
            SURFACE
        }
        fn fill_rect(&mut self, min: Vec2, extent: Vec2, _color: Color) {
            self.ops.push(Op::FillRect(min, extent));
        }
        fn stroke_rect(&mut self, min: Vec2, extent: Vec2, _color: Color, _line_width: f32) {
            self.ops.push(Op::StrokeRect(min, extent));
        }
        fn fill_polygon(&mut self, points: &[Vec2], _color: Color) {
            self.ops.push(Op::FillPolygon(points.len()));
        }
        fn stroke_polygon(&mut self, points: &[Vec2], _color: Color, _line_width: f32) {
            self.ops.push(Op::StrokePolygon(points.len()));
        }
        fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
            self.ops.push(Op::Circle(center, radius, color.a));
        }
        fn fill_text(&mut self, text: &str, pos: Vec2, _style: &TextStyle, _color: Color) {
            self.ops.push(Op::Text(text.to_string(), pos));
        }
        fn text_width(&mut self, text: &str, _style: &TextStyle) -> f32 {
            text.len() as f32 * 10.0
        }
        fn set_glow(&mut self, _color: Color, _blur: f32) {
            self.ops.push(Op::Glow);
        }
        fn clear_glow(&mut self) {
            self.ops.push(Op::ClearGlow);
        }
    }

    fn asteroid(word: &'static str, typed: usize, is_target: bool) -> Asteroid {
        Asteroid {
            id: 1,
            pos: Vec2::new(100.0, 50.0),
            size: 100.0,
            fall_speed: 1.0,
            rotation: 0.0,
            angular_speed: 0.0,
            word,
            typed,
            is_target,
        }
    }

    #[test]
    fn test_polygon_radius_modulation() {
        let points = asteroid_points(Vec2::ZERO, 100.0, 0.0);
        for (i, p) in points.iter().enumerate() {
            let angle = i as f32 / 8.0 * TAU;
            let expected = 50.0 * (0.8 + (angle * 3.0).sin() * 0.2);
            assert!((p.length() - expected).abs() < 1e-3, "point {i}");
        }
    }

    #[test]
    fn test_polygon_rotation_spins_points() {
        let still = asteroid_points(Vec2::ZERO, 100.0, 0.0);
        let spun = asteroid_points(Vec2::ZERO, 100.0, 0.5);
        for (a, b) in still.iter().zip(&spun) {
            // Same radius, rotated in place
            assert!((a.length() - b.length()).abs() < 1e-3);
        }
        assert_ne!(still[0], spun[0]);
    }

    #[test]
    fn test_idle_frame_is_banner_only() {
        let state = GameState::new(1, SURFACE);
        let mut surface = RecordingSurface::default();
        draw_frame(&mut surface, &state, 0);
        assert!(surface.texts().contains(&"TYPEFALL"));
        assert!(surface.texts().contains(&"Press START to begin"));
    }

    #[test]
    fn test_split_word_halves_line_up() {
        let mut state = GameState::new(1, SURFACE);
        state.phase = GamePhase::Running;
        state.asteroids.push(asteroid("code", 2, true));

        let mut surface = RecordingSurface::default();
        draw_frame(&mut surface, &state, 0);

        // 10px per fake char: "code" is 40 wide, split after "co"
        let center = state.asteroids[0].center();
        let left = center.x - 20.0;
        assert!(surface.ops.contains(&Op::Text("co".into(), Vec2::new(left, center.y))));
        assert!(surface.ops.contains(&Op::Text("de".into(), Vec2::new(left + 20.0, center.y))));
    }

    #[test]
    fn test_target_gets_glowing_outline() {
        let mut state = GameState::new(1, SURFACE);
        state.phase = GamePhase::Running;
        state.asteroids.push(asteroid("star", 0, true));

        let mut surface = RecordingSurface::default();
        draw_frame(&mut surface, &state, 0);

        let glow = surface.ops.iter().position(|op| *op == Op::Glow).unwrap();
        assert_eq!(surface.ops[glow + 1], Op::StrokeRect(Vec2::new(100.0, 50.0), Vec2::splat(100.0)));
        assert_eq!(surface.ops[glow + 2], Op::ClearGlow);
    }

    #[test]
    fn test_particle_alpha_tracks_life() {
        let mut state = GameState::new(1, SURFACE);
        state.phase = GamePhase::Running;
        state.spawn_explosion(Vec2::new(50.0, 50.0));
        for p in &mut state.particles {
            p.life = 0.4;
        }

        let mut surface = RecordingSurface::default();
        draw_frame(&mut surface, &state, 0);
        let circles: Vec<_> = surface
            .ops
            .iter()
            .filter(|op| matches!(op, Op::Circle(_, _, _)))
            .collect();
        assert_eq!(circles.len(), crate::consts::EXPLOSION_PARTICLES);
        for c in circles {
            let Op::Circle(_, _, alpha) = c else { unreachable!() };
            assert!((alpha - 0.4).abs() < 1e-6);
        }
    }

    #[test]
    fn test_game_over_banner_and_flag() {
        let mut state = GameState::new(1, SURFACE);
        state.phase = GamePhase::GameOver;
        state.score = 120;

        let mut surface = RecordingSurface::default();
        draw_frame(&mut surface, &state, 120);
        assert!(surface.texts().contains(&"GAME OVER"));
        assert!(surface.texts().contains(&"Final Score: 120"));
        assert!(surface.texts().contains(&"NEW HIGH SCORE!"));

        // Not a record: no flag
        let mut surface = RecordingSurface::default();
        draw_frame(&mut surface, &state, 500);
        assert!(!surface.texts().contains(&"NEW HIGH SCORE!"));
    }

    #[test]
    fn test_input_overlay_only_when_typing() {
        let mut state = GameState::new(1, SURFACE);
        state.phase = GamePhase::Running;

        let mut surface = RecordingSurface::default();
        draw_frame(&mut surface, &state, 0);
        assert!(surface.texts().is_empty());

        state.input.push_str("cod");
        let mut surface = RecordingSurface::default();
        draw_frame(&mut surface, &state, 0);
        assert!(surface.texts().contains(&"cod"));
    }
}
