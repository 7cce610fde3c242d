use crate::game::grid::Cell;
use crate::game::player::Segment;

/// Heading on the lattice. The y axis points down, matching the pixel grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// The cell one step along `self` from `cell`.
    pub fn advance(self, cell: Cell) -> Cell {
        let (dx, dy) = self.delta();
        Cell::new(cell.x + dx, cell.y + dy)
    }
}

/// A queued turn: the heading to adopt once a segment reaches `point`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Command {
    pub sequence: u64,
    pub point: Cell,
    pub direction: Direction,
}

impl Command {
    /// Allocates the next id from the engine-owned counter.
    pub fn new(sequence: &mut u64, point: Cell, direction: Direction) -> Self {
        let id = *sequence;
        *sequence += 1;
        Self {
            sequence: id,
            point,
            direction,
        }
    }
}

/// Pending turns for one player, oldest first, strictly increasing sequence.
#[derive(Debug, Default)]
pub struct CommandQueue {
    commands: Vec<Command>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn last(&self) -> Option<&Command> {
        self.commands.last()
    }

    pub fn last_mut(&mut self) -> Option<&mut Command> {
        self.commands.last_mut()
    }

    #[allow(dead_code)]
    pub fn sequences(&self) -> impl Iterator<Item = u64> + '_ {
        self.commands.iter().map(|c| c.sequence)
    }

    pub fn push(&mut self, command: Command) {
        debug_assert!(
            self.commands
                .last()
                .map_or(true, |c| c.sequence < command.sequence),
            "command queue out of order"
        );
        self.commands.push(command);
    }

    /// Lets `segment` (sitting at its post-move point) adopt the oldest
    /// command at that point it has not seen yet. The newest sequence acts as
    /// an early-out: a segment that already holds it can have nothing left to
    /// adopt. The tail removes what it adopts, nothing behind it needs it.
    pub fn apply_to(&mut self, segment: &mut Segment, is_tail: bool) {
        let newest = match self.commands.last() {
            Some(command) => command.sequence,
            None => return,
        };
        if segment.cmd.map_or(false, |seen| seen >= newest) {
            return;
        }
        for i in 0..self.commands.len() {
            let command = self.commands[i];
            if segment.cmd.map_or(true, |seen| seen < command.sequence)
                && command.point == segment.point
            {
                segment.cmd = Some(command.sequence);
                segment.direction = command.direction;
                if is_tail {
                    self.commands.remove(i);
                }
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cmd(seq: &mut u64, x: i32, y: i32, direction: Direction) -> Command {
        Command::new(seq, Cell::new(x, y), direction)
    }

    #[test]
    fn deltas_follow_screen_axes() {
        assert_eq!(Direction::Up.delta(), (0, -1));
        assert_eq!(Direction::Down.delta(), (0, 1));
        assert_eq!(Direction::Left.delta(), (-1, 0));
        assert_eq!(Direction::Right.delta(), (1, 0));
    }

    #[test]
    fn opposites() {
        for (dir, opp) in [
            (Direction::Up, Direction::Down),
            (Direction::Down, Direction::Up),
            (Direction::Left, Direction::Right),
            (Direction::Right, Direction::Left),
        ] {
            assert_eq!(dir.opposite(), opp);
        }
    }

    #[test]
    fn advance_moves_one_cell() {
        let cell = Cell::new(3, 3);
        assert_eq!(Direction::Right.advance(cell), Cell::new(4, 3));
        assert_eq!(Direction::Down.advance(cell), Cell::new(3, 4));
    }

    #[test]
    fn sequences_are_monotonic() {
        let mut seq = 0;
        let a = cmd(&mut seq, 1, 0, Direction::Down);
        let b = cmd(&mut seq, 2, 0, Direction::Up);
        assert_eq!(a.sequence, 0);
        assert_eq!(b.sequence, 1);
    }

    #[test]
    fn segment_adopts_command_at_its_point() {
        let mut seq = 0;
        let mut queue = CommandQueue::new();
        queue.push(cmd(&mut seq, 3, 0, Direction::Down));

        let mut segment = Segment::new(Cell::new(3, 0), Direction::Right);
        queue.apply_to(&mut segment, false);
        assert_eq!(segment.direction, Direction::Down);
        assert_eq!(segment.cmd, Some(0));
        // not the tail: the command stays queued for trailing segments
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn tail_pops_the_adopted_command() {
        let mut seq = 0;
        let mut queue = CommandQueue::new();
        queue.push(cmd(&mut seq, 3, 0, Direction::Down));

        let mut tail = Segment::new(Cell::new(3, 0), Direction::Right);
        queue.apply_to(&mut tail, true);
        assert_eq!(tail.direction, Direction::Down);
        assert!(queue.is_empty());
    }

    #[test]
    fn segment_elsewhere_is_untouched() {
        let mut seq = 0;
        let mut queue = CommandQueue::new();
        queue.push(cmd(&mut seq, 3, 0, Direction::Down));

        let mut segment = Segment::new(Cell::new(1, 0), Direction::Right);
        queue.apply_to(&mut segment, false);
        assert_eq!(segment.direction, Direction::Right);
        assert_eq!(segment.cmd, None);
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn adoption_order_is_oldest_first() {
        let mut seq = 0;
        let mut queue = CommandQueue::new();
        queue.push(cmd(&mut seq, 3, 0, Direction::Down));
        queue.push(cmd(&mut seq, 3, 2, Direction::Right));

        let mut segment = Segment::new(Cell::new(3, 0), Direction::Right);
        queue.apply_to(&mut segment, false);
        assert_eq!(segment.cmd, Some(0));

        segment.point = Cell::new(3, 2);
        queue.apply_to(&mut segment, false);
        assert_eq!(segment.cmd, Some(1));
        assert_eq!(segment.direction, Direction::Right);
    }

    #[test]
    fn one_adoption_per_call() {
        // Two commands bound to the same point: only the older one applies,
        // even though the newer one also matches.
        let mut seq = 0;
        let mut queue = CommandQueue::new();
        queue.push(cmd(&mut seq, 3, 0, Direction::Down));
        queue.push(cmd(&mut seq, 3, 0, Direction::Up));

        let mut segment = Segment::new(Cell::new(3, 0), Direction::Right);
        queue.apply_to(&mut segment, false);
        assert_eq!(segment.direction, Direction::Down);
        assert_eq!(segment.cmd, Some(0));
    }

    #[test]
    fn never_readopts_lower_sequences() {
        let mut seq = 0;
        let mut queue = CommandQueue::new();
        queue.push(cmd(&mut seq, 5, 5, Direction::Down));
        queue.push(cmd(&mut seq, 6, 5, Direction::Up));

        let mut segment = Segment::new(Cell::new(5, 5), Direction::Right);
        segment.cmd = Some(1);
        queue.apply_to(&mut segment, false);
        assert_eq!(segment.direction, Direction::Right);
        assert_eq!(segment.cmd, Some(1));
    }
}
