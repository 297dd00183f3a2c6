mod projector;

pub use projector::{
    elixir_fraction, elixir_gauge, lane_band, project, screen_x, ElixirGauge, LaneBand, TowerView,
    UnitView, ViewState,
};
