use arena_shared::{Lane, MatchSnapshot, Side, Tower, Unit, ELIXIR_MAX, LANE_COUNT, LANE_LENGTH};

/// Display-ready quantities derived from one snapshot
#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
    pub elixir: ElixirGauge,
    /// Elapsed match time in seconds, as reported by the server
    pub elapsed: f64,
    pub towers: Vec<TowerView>,
    pub units: Vec<UnitView>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElixirGauge {
    /// Fill of the gauge, always within `[0, 1]`
    pub fraction: f64,
    /// Clamped elixir rounded to one decimal, for the numeric readout
    pub display: f64,
}

/// Vertical extent of a lane as fractions of the arena height, top at 0
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LaneBand {
    pub top: f64,
    pub center: f64,
    pub bottom: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TowerView {
    pub side: Side,
    pub lane: Lane,
    pub band: LaneBand,
    /// Horizontal position as a fraction of the arena width, left at 0
    pub x: f64,
    pub hp: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UnitView {
    pub owner: Side,
    pub lane: Lane,
    pub band: LaneBand,
    /// Horizontal position as a fraction of the arena width, left at 0
    pub x: f64,
}

/// Projects a snapshot for the render layer. Pure and deterministic.
pub fn project(snapshot: &MatchSnapshot) -> ViewState {
    ViewState {
        elixir: elixir_gauge(snapshot.elixir),
        elapsed: snapshot.time,
        towers: snapshot.towers.iter().map(project_tower).collect(),
        units: snapshot.units.iter().map(project_unit).collect(),
    }
}

pub fn elixir_fraction(elixir: f64) -> f64 {
    clamp_elixir(elixir) / ELIXIR_MAX
}

pub fn elixir_gauge(elixir: f64) -> ElixirGauge {
    let clamped = clamp_elixir(elixir);
    ElixirGauge {
        fraction: clamped / ELIXIR_MAX,
        display: (clamped * 10.0).round() / 10.0,
    }
}

pub fn lane_band(lane: Lane) -> LaneBand {
    let height = 1.0 / LANE_COUNT as f64;
    let top = f64::from(lane.index()) * height;
    LaneBand {
        top,
        center: top + height / 2.0,
        bottom: top + height,
    }
}

/// Maps lane progress (0 at `side`'s origin, `LANE_LENGTH` at the opposing
/// tower) to a horizontal screen fraction. The player advances left to
/// right, the opponent right to left.
pub fn screen_x(side: Side, progress: f64) -> f64 {
    let travelled = if progress.is_nan() {
        0.0
    } else {
        (progress / LANE_LENGTH).clamp(0.0, 1.0)
    };
    match side {
        Side::Player => travelled,
        Side::Opponent => 1.0 - travelled,
    }
}

fn clamp_elixir(elixir: f64) -> f64 {
    if elixir.is_nan() {
        return 0.0;
    }
    elixir.clamp(0.0, ELIXIR_MAX)
}

fn project_tower(tower: &Tower) -> TowerView {
    TowerView {
        side: tower.side,
        lane: tower.lane,
        band: lane_band(tower.lane),
        // towers stand on their own base line
        x: screen_x(tower.side, 0.0),
        hp: tower.hp,
    }
}

fn project_unit(unit: &Unit) -> UnitView {
    UnitView {
        owner: unit.owner,
        lane: unit.lane,
        band: lane_band(unit.lane),
        x: screen_x(unit.owner, unit.x),
    }
}
