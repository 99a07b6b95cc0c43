//! [`StoreEntity`] implementation for [`BakingTask`].

use super::error::ScheduleError;
use crate::model::{BakingTask, TaskCreate, TaskId};
use std::convert::Infallible;
use store_framework::StoreEntity;

impl StoreEntity for BakingTask {
    type Id = TaskId;
    type Create = TaskCreate;
    type Action = Infallible;
    type ActionResult = Infallible;
    type Error = ScheduleError;

    fn id(&self) -> &TaskId {
        &self.id
    }

    /// New tasks always start out pending.
    fn from_create_params(id: TaskId, params: TaskCreate) -> Result<Self, ScheduleError> {
        Ok(BakingTask::new(
            id,
            params.product_name,
            params.quantity,
            params.scheduled_time,
            params.day,
        ))
    }

    fn handle_action(&mut self, action: Infallible) -> Result<Infallible, ScheduleError> {
        match action {}
    }
}
