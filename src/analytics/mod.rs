pub mod duration;
pub mod progress;
pub mod scurve;

pub use duration::{duration_days, planned_duration};
pub use progress::{weighted_progress, Weighting};
pub use scurve::{
    daily_series, daily_series_today, weekly_series, weekly_series_today, CurvePoint,
};
