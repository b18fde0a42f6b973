pub(crate) mod clock_duration;
pub(crate) mod duration_millis;
