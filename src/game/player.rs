use macroquad::prelude::*;

use crate::game::command::{Command, CommandQueue, Direction};
use crate::game::grid::Cell;

/// One body unit: where it sits, where it heads, and the sequence of the last
/// command it adopted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment {
    pub point: Cell,
    pub direction: Direction,
    pub cmd: Option<u64>,
}

impl Segment {
    pub fn new(point: Cell, direction: Direction) -> Self {
        Self {
            point,
            direction,
            cmd: None,
        }
    }
}

/// The cell directly behind `segment`, inheriting its heading and command
/// ref. New tail segments spawn there on growth.
pub fn segment_behind(segment: Segment) -> Segment {
    Segment {
        point: segment.direction.opposite().advance(segment.point),
        ..segment
    }
}

/// A snake body (head first, never empty) plus its pending turns.
pub struct Player {
    pub snake: Vec<Segment>,
    pub commands: CommandQueue,
    original: Segment,
}

impl Player {
    pub fn new(start: Segment) -> Self {
        Self {
            snake: vec![start],
            commands: CommandQueue::new(),
            original: Segment::new(start.point, start.direction),
        }
    }

    pub fn head(&self) -> Segment {
        self.snake[0]
    }

    /// Back to the construction pose; pending commands are dropped.
    pub fn reset(&mut self) {
        self.snake.clear();
        self.snake.push(self.original);
        self.commands.clear();
    }

    /// Appends one segment behind the current tail.
    pub fn grow(&mut self) {
        debug_assert!(!self.snake.is_empty(), "player without segments");
        let tail = self.snake[self.snake.len() - 1];
        self.snake.push(segment_behind(tail));
    }

    /// A turn is refused when it would fold the head straight back into the
    /// second segment.
    fn reverses(&self, direction: Direction) -> bool {
        if self.snake.len() < 2 {
            return false;
        }
        let head = self.snake[0].point;
        let second = self.snake[1].point;
        if second.x == head.x {
            (head.y > second.y && direction == Direction::Up)
                || (head.y < second.y && direction == Direction::Down)
        } else {
            (head.x > second.x && direction == Direction::Left)
                || (head.x < second.x && direction == Direction::Right)
        }
    }

    /// Validates a requested heading and queues the turn. `sequence` is the
    /// engine's command counter. Returns whether the input changed anything.
    pub fn steer(&mut self, direction: Direction, sequence: &mut u64) -> bool {
        if self.snake[0].direction == direction {
            return false;
        }
        if self.reverses(direction) {
            return false;
        }

        // The head turns right away; trailing segments pick the turn up from
        // the queue as they reach its cell.
        self.snake[0].direction = direction;
        if self.snake.len() < 2 {
            return true;
        }

        let head_point = self.snake[0].point;
        let corrected = match self.commands.last_mut() {
            Some(last) if last.point == head_point => {
                // Changed their mind before the turn cell was passed: fix the
                // pending command and every segment that already took it.
                if last.direction != direction {
                    last.direction = direction;
                    let seq = last.sequence;
                    for segment in &mut self.snake {
                        match segment.cmd {
                            Some(c) if c == seq => segment.direction = direction,
                            Some(c) if c > seq => {}
                            _ => break,
                        }
                    }
                }
                true
            }
            _ => false,
        };
        if !corrected {
            let command = Command::new(sequence, head_point, direction);
            debug!("cmd: {:?}", command);
            self.commands.push(command);
        }

        if let Some(last) = self.commands.last() {
            self.snake[0].cmd = Some(last.sequence);
        }
        true
    }
}
