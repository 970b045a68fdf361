use crate::{
    bitgrid::ShotGrid,
    coord::{Coord, Dimensions},
    game::Game,
    random::RandomSource,
};

/// Every cell a computer player has fired at.
#[derive(Debug, Clone)]
pub(crate) struct ShotMemory {
    shots: ShotGrid,
}

impl ShotMemory {
    pub(crate) fn new(game: &Game) -> Self {
        // see the MAX_ROWS * MAX_COLS assertion in config.rs
        let shots = ShotGrid::try_new(game.dims())
            .expect("board area is bounded by MAX_ROWS * MAX_COLS");
        Self { shots }
    }

    pub(crate) fn dims(&self) -> Dimensions {
        self.shots.dims()
    }

    pub(crate) fn contains(&self, p: Coord) -> bool {
        self.shots.contains(p)
    }

    pub(crate) fn record(&mut self, p: Coord) {
        self.shots.insert(p);
    }

    pub(crate) fn len(&self) -> usize {
        self.shots.len()
    }

    /// Uniformly random cell not fired at yet.
    ///
    /// Draws until a fresh cell turns up. After `16 * area` fruitless draws
    /// (only reachable with a degenerate scripted source) the first fresh cell
    /// in row-major order is used instead. On an exhausted board any cell is
    /// returned, and the board will reject it.
    pub(crate) fn random_novel<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Coord {
        let dims = self.dims();
        if self.shots.is_full() {
            return dims.random_point(rng);
        }
        for _ in 0..dims.area() * 16 {
            let p = dims.random_point(rng);
            if !self.shots.contains(p) {
                return p;
            }
        }
        self.shots.first_vacant().unwrap_or_default()
    }
}
