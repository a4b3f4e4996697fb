//! Constants shared across the Patientor core crate.

use crate::entry::HealthCheckRating;

/// Message attached to every missing required field.
pub const REQUIRED_FIELD_MESSAGE: &str = "Field is required";

/// Message attached to both sick-leave dates when only one of them is filled in.
pub const SICK_LEAVE_MESSAGE: &str = "Start and end date are required";

/// Rating preset on a freshly opened add-entry form.
pub const INITIAL_HEALTH_CHECK_RATING: HealthCheckRating = HealthCheckRating::CriticalRisk;
