use crate::data::{Dir, Square, DIRECTIONS};
use crate::level::Level;
use crate::square_set::SquareSet;

use super::state::State;

// Terminology:
// move = changing player position by one cell
// push = a move that changes a box position
// step = a move that doesn't change a box position

/// All states reachable by exactly one move.
///
/// `level` only provides walls and goals, its player and boxes are ignored.
pub(crate) fn expand(level: &Level, dead_squares: &SquareSet, state: &State) -> Vec<State> {
    let mut new_states = Vec::new();

    for &dir in &DIRECTIONS {
        let new_player = state.player + dir;
        if is_wall(level, new_player) {
            continue;
        }

        if !state.boxes.contains(new_player) {
            // step
            new_states.push(State::new(state.boxes.clone(), new_player));
            continue;
        }

        // push
        let push_dest = new_player + dir;
        if is_wall(level, push_dest)
            || state.boxes.contains(push_dest)
            || dead_squares.contains(push_dest)
            || creates_corner_deadlock(level, &state.boxes, push_dest, dir)
        {
            continue;
        }

        let mut new_boxes = state.boxes.clone();
        new_boxes.replace(new_player, push_dest);
        new_states.push(State::new(new_boxes, new_player));
    }

    new_states
}

fn is_wall(level: &Level, square: Square) -> bool {
    !level.floors.contains(square)
}

/// Would a box pushed in `dir` onto `dest` end up frozen?
///
/// On each side of the push there's a 2x2 block made of `dest`, the square ahead of it,
/// the square to the side and the diagonal. If those three are all walls or boxes,
/// no box in the block can ever move again. That's only fine if all of them are already done -
/// `dest` is a goal and every box in the block sits on a goal.
fn creates_corner_deadlock(level: &Level, boxes: &SquareSet, dest: Square, dir: Dir) -> bool {
    dir.sides().iter().any(|&side| {
        let wing = [dest + dir, dest + side, dest + dir + side];

        let blocked = wing
            .iter()
            .all(|&sq| is_wall(level, sq) || boxes.contains(sq));
        if !blocked {
            return false;
        }

        !level.goals.contains(dest)
            || wing
                .iter()
                .any(|&sq| boxes.contains(sq) && !level.goals.contains(sq))
    })
}
