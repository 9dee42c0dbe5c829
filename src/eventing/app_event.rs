//! AppEvent - Application Event Enum
//!
//! All events that background tasks send back to the owner of the
//! controller.

use crate::domain::forecast::ForecastSeries;
use crate::error::ForecastResult;

/// Application events for background -> owner communication
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// A dispatched forecast request finished
    ForecastCompleted {
        generation: u64,
        result: ForecastResult<ForecastSeries>,
    },
}
