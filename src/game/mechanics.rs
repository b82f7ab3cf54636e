use egui::{Pos2, Vec2};
use itertools::Itertools;

use crate::game::algebra_2d::{circle_intersects_aabb, AaBB, Circle};
use crate::game::input::{InputSource, Key};

/// TOP / LEFT corner is 0/0
pub const SCREEN_WIDTH: f32 = 800.0;
pub const SCREEN_HEIGHT: f32 = 450.0;

/// all speeds are measured in model units per tick
pub const TICKS_PER_SECOND: u32 = 60;

pub const PLAYER_LIVES: i32 = 5;
const PLAYER_SPEED: Vec2 = Vec2::new(8.0, 0.0);
const PLAYER_SIZE: Vec2 = Vec2::new(100.0, 24.0);

const BALL_RADIUS: f32 = 10.0;
const BALL_INITIAL_SPEED: Vec2 = Vec2::new(4.0, 4.0);
const BALL_LAUNCH_SPEED: Vec2 = Vec2::new(0.0, -5.0);
/// horizontal ball speed after a paddle hit at the very paddle edge
const PADDLE_SPIN_FACTOR: f32 = 5.0;

pub const BRICK_ROWS: usize = 5;
pub const BRICK_COLUMNS: usize = 20;
const BRICK_COUNT: usize = BRICK_ROWS * BRICK_COLUMNS;
const BRICK_HEIGHT: f32 = 20.0;
const BRICKS_POSITION_Y: f32 = 50.0;

/// Outcome of a gameplay tick, as far as the screen flow is concerned
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RoundStatus {
    InPlay,
    /// lives dropped below zero
    LivesExhausted,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub position: Pos2,
    pub speed: Vec2,
    pub size: Vec2,
    pub bounds: AaBB,
    pub lives: i32,
}

impl Player {
    pub fn new() -> Self {
        let position = Pos2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT * 7.0 / 8.0);
        Self {
            position,
            speed: PLAYER_SPEED,
            size: PLAYER_SIZE,
            bounds: AaBB::from_pos_size(position, PLAYER_SIZE),
            lives: PLAYER_LIVES,
        }
    }

    pub fn center_x(&self) -> f32 {
        self.position.x + self.size.x / 2.0
    }

    /// Move horizontally by the held arrow keys. Both keys held cancel each other out.
    fn process_input(&mut self, input: &impl InputSource) {
        if input.is_key_down(Key::Left) {
            self.position.x -= self.speed.x;
        }
        if input.is_key_down(Key::Right) {
            self.position.x += self.speed.x;
        }
        self.position.x = self.position.x.max(0.0);
        if self.position.x + self.size.x >= SCREEN_WIDTH {
            self.position.x = SCREEN_WIDTH - self.size.x;
        }
        self.update_bounds();
    }

    pub fn update_bounds(&mut self) {
        self.bounds = AaBB::from_pos_size(self.position, self.size);
    }

    pub fn reset_lives(&mut self) {
        self.lives = PLAYER_LIVES;
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// A ball is a perfect round 2D structure
#[derive(Clone, Debug, PartialEq)]
pub struct Ball {
    pub position: Pos2,
    pub speed: Vec2,
    pub radius: f32,
    /// false: resting on the paddle, waiting for launch
    pub active: bool,
}

impl Ball {
    pub fn new(player: &Player) -> Self {
        Self {
            position: Pos2::new(player.center_x(), player.position.y - BALL_RADIUS * 2.0),
            speed: BALL_INITIAL_SPEED,
            radius: BALL_RADIUS,
            active: false,
        }
    }

    pub fn shape(&self) -> Circle {
        Circle {
            center: self.position,
            radius: self.radius,
        }
    }

    /// Speed components flip independently; a corner hit flips both.
    fn bounce_off_walls(&mut self) {
        if self.position.x + self.radius >= SCREEN_WIDTH || self.position.x - self.radius <= 0.0 {
            self.speed.x = -self.speed.x;
        }
        if self.position.y - self.radius <= 0.0 {
            self.speed.y = -self.speed.y;
        }
    }

    /// The horizontal speed is replaced by the hit offset from the paddle center.
    fn bounce_off_paddle(&mut self, player: &Player) {
        self.speed.y = -self.speed.y;
        self.speed.x = (self.position.x - player.center_x()) / player.size.x * PADDLE_SPIN_FACTOR;
    }

    fn rest_on(&mut self, player: &Player) {
        self.position = Pos2::new(player.center_x(), player.position.y - self.radius - 1.0);
        self.speed = Vec2::ZERO;
        self.active = false;
    }

    fn launch(&mut self) {
        self.active = true;
        self.speed = BALL_LAUNCH_SPEED;
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Brick {
    pub position: Pos2,
    pub size: Vec2,
    pub bounds: AaBB,
    /// carried along, but every brick breaks with the first hit
    pub resistance: u32,
    pub active: bool,
}

impl Brick {
    fn new(row: usize, col: usize) -> Self {
        let size = Vec2::new(SCREEN_WIDTH / BRICK_COLUMNS as f32, BRICK_HEIGHT);
        let position = Pos2::new(
            col as f32 * size.x,
            row as f32 * size.y + BRICKS_POSITION_Y,
        );
        Self {
            position,
            size,
            bounds: AaBB::from_pos_size(position, size),
            resistance: 0,
            active: true,
        }
    }
}

/// Fixed grid of bricks, stored row-major
#[derive(Clone, Debug, PartialEq)]
pub struct BrickGrid {
    bricks: [Brick; BRICK_COUNT],
}

impl BrickGrid {
    pub fn new() -> Self {
        Self {
            bricks: std::array::from_fn(|idx| Brick::new(idx / BRICK_COLUMNS, idx % BRICK_COLUMNS)),
        }
    }

    pub fn get(&self, row: usize, col: usize) -> &Brick {
        &self.bricks[row * BRICK_COLUMNS + col]
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> &mut Brick {
        &mut self.bricks[row * BRICK_COLUMNS + col]
    }

    /// all bricks with their (row, col), in row-major order
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), &Brick)> {
        (0..BRICK_ROWS).cartesian_product(0..BRICK_COLUMNS).zip(self.bricks.iter())
    }

    pub fn active_count(&self) -> usize {
        self.bricks.iter().filter(|b| b.active).count()
    }

    /// Deactivates the first active brick (row-major) the ball touches, if any.
    /// At most one brick breaks per call.
    fn break_first_hit(&mut self, ball: &Circle) -> Option<(usize, usize)> {
        let idx = self.bricks.iter()
            .position(|b| b.active && circle_intersects_aabb(ball, &b.bounds))?;
        self.bricks[idx].active = false;
        Some((idx / BRICK_COLUMNS, idx % BRICK_COLUMNS))
    }
}

impl Default for BrickGrid {
    fn default() -> Self {
        Self::new()
    }
}

/// Entity model and per-tick gameplay rules
#[derive(Clone, Debug, PartialEq)]
pub struct BlocksMechanics {
    pub player: Player,
    pub ball: Ball,
    pub bricks: BrickGrid,
    pub paused: bool,
}

impl BlocksMechanics {
    pub fn new() -> Self {
        let player = Player::new();
        let ball = Ball::new(&player);
        Self {
            player,
            ball,
            bricks: BrickGrid::new(),
            paused: false,
        }
    }

    /// advance the gameplay by one tick
    pub fn time_step(&mut self, input: &impl InputSource) -> RoundStatus {
        if input.is_key_pressed(Key::Pause) {
            self.paused = !self.paused;
            log::debug!("paused: {}", self.paused);
        }
        if self.paused {
            return RoundStatus::InPlay;
        }

        self.player.process_input(input);

        if self.ball.active {
            self.proceed_ball()
        } else {
            self.ball.position.x = self.player.center_x();
            if input.is_key_pressed(Key::Launch) {
                self.ball.launch();
                log::debug!("ball launched from x={}", self.ball.position.x);
            }
            RoundStatus::InPlay
        }
    }

    fn proceed_ball(&mut self) -> RoundStatus {
        let ball = &mut self.ball;
        ball.position += ball.speed;
        ball.bounce_off_walls();

        if circle_intersects_aabb(&ball.shape(), &self.player.bounds) {
            ball.bounce_off_paddle(&self.player);
        }

        if let Some((row, col)) = self.bricks.break_first_hit(&ball.shape()) {
            ball.speed.y = -ball.speed.y;
            log::debug!("brick ({row}, {col}) destroyed, {} left", self.bricks.active_count());
        }

        if ball.position.y + ball.radius >= SCREEN_HEIGHT {
            ball.rest_on(&self.player);
            self.player.lives -= 1;
            log::debug!("ball lost, lives: {}", self.player.lives);
        }

        if self.player.lives < 0 {
            RoundStatus::LivesExhausted
        } else {
            RoundStatus::InPlay
        }
    }
}

impl Default for BlocksMechanics {
    fn default() -> Self {
        Self::new()
    }
}
