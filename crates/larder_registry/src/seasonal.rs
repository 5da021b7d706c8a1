//! Seasonal scheduling: seasons, preservation schedules, and events.
//!
//! Seasons and schedules are registered by any caller. Events hang off a
//! schedule, which must exist; the schedule's own technique and season
//! references are stored as given.

use std::sync::Arc;

use larder_foundation::{Height, MonthDay, Principal, RecordId, Result};
use larder_storage::{Owned, Status};
use serde::{Deserialize, Serialize};

use crate::context::CallContext;
use crate::ledger::Ledger;

/// A regional season.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Season {
    /// Name, e.g. `"Summer"`.
    pub name: String,
    /// First day of the season.
    pub start: MonthDay,
    /// Last day of the season.
    pub end: MonthDay,
    /// Region the season applies to.
    pub region: String,
    /// Free-form climate notes.
    pub climate_notes: String,
    /// The principal that added the season.
    pub added_by: Principal,
    /// Height when added.
    pub added_at: Height,
}

impl Owned for Season {
    fn owner(&self) -> &Principal {
        &self.added_by
    }
}

/// Fields supplied to [`Ledger::register_season`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSeason {
    /// Name.
    pub name: String,
    /// First day.
    pub start: MonthDay,
    /// Last day.
    pub end: MonthDay,
    /// Region.
    pub region: String,
    /// Climate notes.
    pub climate_notes: String,
}

/// Fields replaced by [`Ledger::update_season`].
///
/// Name and region are fixed at registration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonUpdate {
    /// First day.
    pub start: MonthDay,
    /// Last day.
    pub end: MonthDay,
    /// Climate notes.
    pub climate_notes: String,
}

/// The optimal window for applying a technique to a food item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreservationSchedule {
    /// The technique applied. Not checked for existence.
    pub technique_id: RecordId,
    /// The season the window falls in. Not checked for existence.
    pub season_id: RecordId,
    /// The food being preserved.
    pub food_item: String,
    /// Start of the optimal window.
    pub optimal_start: MonthDay,
    /// End of the optimal window.
    pub optimal_end: MonthDay,
    /// Free-form notes.
    pub notes: String,
    /// The principal that created the schedule.
    pub created_by: Principal,
    /// Height at creation.
    pub created_at: Height,
}

/// Fields supplied to [`Ledger::create_schedule`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSchedule {
    /// The technique applied.
    pub technique_id: RecordId,
    /// The season.
    pub season_id: RecordId,
    /// The food being preserved.
    pub food_item: String,
    /// Start of the window.
    pub optimal_start: MonthDay,
    /// End of the window.
    pub optimal_end: MonthDay,
    /// Notes.
    pub notes: String,
}

/// A calendared occurrence instantiating a schedule.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledEvent {
    /// The schedule this event instantiates.
    pub schedule_id: RecordId,
    /// Name.
    pub event_name: String,
    /// When, as an opaque timestamp.
    pub event_date: u64,
    /// Where.
    pub location: String,
    /// Who may attend, as free text.
    pub participants: String,
    /// Free-form status; `"scheduled"` at creation.
    pub status: Status,
    /// The principal that created the event.
    pub created_by: Principal,
    /// Height at creation.
    pub created_at: Height,
}

impl Owned for ScheduledEvent {
    fn owner(&self) -> &Principal {
        &self.created_by
    }
}

/// Fields supplied to [`Ledger::create_event`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEvent {
    /// The schedule; must exist.
    pub schedule_id: RecordId,
    /// Name.
    pub event_name: String,
    /// When.
    pub event_date: u64,
    /// Where.
    pub location: String,
    /// Who may attend.
    pub participants: String,
}

impl Ledger {
    // --- Seasons ---

    /// Registers a season added by the caller.
    ///
    /// # Errors
    ///
    /// Never fails; returns `Result` like every other write.
    pub fn register_season(&self, ctx: &CallContext, new: NewSeason) -> Result<(Ledger, RecordId)> {
        let mut seasons = (*self.seasons).clone();
        let id = seasons.insert_next(Season {
            name: new.name,
            start: new.start,
            end: new.end,
            region: new.region,
            climate_notes: new.climate_notes,
            added_by: ctx.caller.clone(),
            added_at: ctx.height,
        });
        tracing::debug!(%id, caller = %ctx.caller, "registered season");

        Ok((
            Ledger {
                seasons: Arc::new(seasons),
                ..self.clone()
            },
            id,
        ))
    }

    /// Replaces a season's dates and climate notes.
    ///
    /// # Errors
    ///
    /// Returns not found if the season does not exist, or permission
    /// denied if the caller did not add it.
    pub fn update_season(
        &self,
        ctx: &CallContext,
        id: RecordId,
        update: SeasonUpdate,
    ) -> Result<(Ledger, RecordId)> {
        let current = self.seasons.require_owned(id, &ctx.caller)?;
        let updated = Season {
            start: update.start,
            end: update.end,
            climate_notes: update.climate_notes,
            ..current.clone()
        };

        let mut seasons = (*self.seasons).clone();
        seasons.put(id, updated);
        tracing::debug!(%id, caller = %ctx.caller, "updated season");

        Ok((
            Ledger {
                seasons: Arc::new(seasons),
                ..self.clone()
            },
            id,
        ))
    }

    /// Gets a season by id.
    #[must_use]
    pub fn season(&self, id: RecordId) -> Option<&Season> {
        self.seasons.get(id)
    }

    /// Returns the number of registered seasons.
    #[must_use]
    pub fn season_count(&self) -> usize {
        self.seasons.len()
    }

    // --- Schedules ---

    /// Creates a preservation schedule owned by the caller.
    ///
    /// The technique and season ids are stored as given. Either one that
    /// names no record is noted at debug level.
    ///
    /// # Errors
    ///
    /// Never fails; returns `Result` like every other write.
    pub fn create_schedule(
        &self,
        ctx: &CallContext,
        new: NewSchedule,
    ) -> Result<(Ledger, RecordId)> {
        if !self.techniques.contains(new.technique_id) {
            tracing::debug!(
                technique_id = %new.technique_id,
                "schedule references unregistered technique"
            );
        }
        if !self.seasons.contains(new.season_id) {
            tracing::debug!(season_id = %new.season_id, "schedule references unregistered season");
        }

        let mut schedules = (*self.schedules).clone();
        let id = schedules.insert_next(PreservationSchedule {
            technique_id: new.technique_id,
            season_id: new.season_id,
            food_item: new.food_item,
            optimal_start: new.optimal_start,
            optimal_end: new.optimal_end,
            notes: new.notes,
            created_by: ctx.caller.clone(),
            created_at: ctx.height,
        });
        tracing::debug!(%id, caller = %ctx.caller, "created schedule");

        Ok((
            Ledger {
                schedules: Arc::new(schedules),
                ..self.clone()
            },
            id,
        ))
    }

    /// Gets a schedule by id.
    #[must_use]
    pub fn schedule(&self, id: RecordId) -> Option<&PreservationSchedule> {
        self.schedules.get(id)
    }

    /// Returns the number of created schedules.
    #[must_use]
    pub fn schedule_count(&self) -> usize {
        self.schedules.len()
    }

    // --- Events ---

    /// Creates a scheduled event for an existing schedule.
    ///
    /// Any caller may create an event; the caller becomes its creator. No
    /// event id is consumed unless the call succeeds.
    ///
    /// # Errors
    ///
    /// Returns not found if the schedule does not exist.
    pub fn create_event(&self, ctx: &CallContext, new: NewEvent) -> Result<(Ledger, RecordId)> {
        self.schedules.require(new.schedule_id)?;

        let mut events = (*self.events).clone();
        let id = events.insert_next(ScheduledEvent {
            schedule_id: new.schedule_id,
            event_name: new.event_name,
            event_date: new.event_date,
            location: new.location,
            participants: new.participants,
            status: Status::scheduled(),
            created_by: ctx.caller.clone(),
            created_at: ctx.height,
        });
        tracing::debug!(%id, schedule_id = %new.schedule_id, caller = %ctx.caller, "created event");

        Ok((
            Ledger {
                events: Arc::new(events),
                ..self.clone()
            },
            id,
        ))
    }

    /// Sets an event's status to any label.
    ///
    /// # Errors
    ///
    /// Returns not found if the event does not exist, or permission denied
    /// if the caller did not create it.
    pub fn update_event_status(
        &self,
        ctx: &CallContext,
        id: RecordId,
        status: impl Into<Status>,
    ) -> Result<(Ledger, RecordId)> {
        let current = self.events.require_owned(id, &ctx.caller)?;

        let status = status.into();
        tracing::debug!(%id, from = %current.status, to = %status, "event status changed");
        let updated = ScheduledEvent {
            status,
            ..current.clone()
        };

        let mut events = (*self.events).clone();
        events.put(id, updated);

        Ok((
            Ledger {
                events: Arc::new(events),
                ..self.clone()
            },
            id,
        ))
    }

    /// Gets an event by id.
    #[must_use]
    pub fn event(&self, id: RecordId) -> Option<&ScheduledEvent> {
        self.events.get(id)
    }

    /// Returns the number of created events.
    #[must_use]
    pub fn event_count(&self) -> usize {
        self.events.len()
    }
}
