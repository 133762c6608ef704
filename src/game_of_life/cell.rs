//! A single grid location and its life state

use serde::{Deserialize, Serialize};

/// Binary life state of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum State {
    Alive,
    Dead,
}

impl State {
    /// Character shown for this state in rendered output
    pub fn rep(self) -> char {
        match self {
            State::Dead => '.',
            State::Alive => 'X',
        }
    }

    /// Inverse of [`State::rep`]; any other character is unknown
    pub fn from_rep(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(State::Dead),
            'X' => Some(State::Alive),
            _ => None,
        }
    }
}

impl From<bool> for State {
    fn from(alive: bool) -> Self {
        if alive {
            State::Alive
        } else {
            State::Dead
        }
    }
}

/// One cell of the world. The next state is never stored on the cell:
/// it is computed as a value and handed back through [`Cell::advance_state`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    state: State,
}

impl Cell {
    pub fn new(initial: State) -> Self {
        Self { state: initial }
    }

    pub fn alive() -> Self {
        Self::new(State::Alive)
    }

    pub fn dead() -> Self {
        Self::new(State::Dead)
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn is_alive(&self) -> bool {
        self.state == State::Alive
    }

    /// Any live cell with fewer than two or more than three live neighbors dies.
    /// Any live cell with two or three live neighbors lives on.
    /// Any dead cell with exactly three live neighbors becomes alive.
    pub fn determine_next_state(&self, live_neighbors: u8) -> State {
        match (self.state, live_neighbors) {
            (State::Alive, 2) | (State::Alive, 3) => State::Alive,
            (State::Alive, _) => State::Dead,
            (State::Dead, 3) => State::Alive,
            (State::Dead, _) => State::Dead,
        }
    }

    /// Commit a next state computed by [`Cell::determine_next_state`]
    pub fn advance_state(&mut self, next: State) {
        self.state = next;
    }

    pub fn state_rep(&self) -> char {
        self.state.rep()
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::dead()
    }
}
