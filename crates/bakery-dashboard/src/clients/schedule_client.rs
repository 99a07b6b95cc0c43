//! # Schedule Client
//!
//! High-level API for the weekly baking board.
use crate::model::{BakingTask, TaskCreate, TaskId, Weekday};
use crate::schedule_store::{self, DayLane, ProductTotal, ScheduleError, TaskForm};
use async_trait::async_trait;
use store_framework::{DomainClient, StoreClient, StoreError};
use tracing::{debug, info, instrument};

#[derive(Clone)]
pub struct ScheduleClient {
    inner: StoreClient<BakingTask>,
}

impl ScheduleClient {
    pub fn new(inner: StoreClient<BakingTask>) -> Self {
        Self { inner }
    }

    /// Parses the submitted form and appends a pending task.
    #[instrument(skip(self))]
    pub async fn add_task(&self, form: &TaskForm) -> Result<TaskId, ScheduleError> {
        let params = form.parse()?;
        self.create_task(params).await
    }

    #[instrument(skip(self))]
    pub async fn create_task(&self, params: TaskCreate) -> Result<TaskId, ScheduleError> {
        debug!("Sending request");
        let id = self.inner.create(params).await?;
        info!(%id, "Task scheduled");
        Ok(id)
    }

    /// Tasks for one lane, in insertion order.
    #[instrument(skip(self))]
    pub async fn tasks_by_day(&self, day: Weekday) -> Result<Vec<BakingTask>, ScheduleError> {
        let tasks = self.list().await?;
        Ok(schedule_store::tasks_by_day(&tasks, day).cloned().collect())
    }

    #[instrument(skip(self))]
    pub async fn week_lanes(&self) -> Result<Vec<DayLane>, ScheduleError> {
        let tasks = self.list().await?;
        Ok(schedule_store::week_lanes(&tasks))
    }

    #[instrument(skip(self))]
    pub async fn most_scheduled_product(&self) -> Result<Option<ProductTotal>, ScheduleError> {
        let tasks = self.list().await?;
        Ok(schedule_store::most_scheduled_product(&tasks))
    }
}

#[async_trait]
impl DomainClient<BakingTask> for ScheduleClient {
    type Error = ScheduleError;

    fn inner(&self) -> &StoreClient<BakingTask> {
        &self.inner
    }

    fn map_error(e: StoreError) -> ScheduleError {
        ScheduleError::from(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store_framework::mock::{create_mock_client, expect_create, MockStore};

    #[tokio::test]
    async fn test_add_task_sends_parsed_form() {
        let (client, mut receiver) = create_mock_client::<BakingTask>(10);
        let schedule = ScheduleClient::new(client);

        let add = tokio::spawn(async move {
            let form = TaskForm {
                recipe: "Cinnamon Buns".to_string(),
                day: "Sunday".to_string(),
                ..TaskForm::default()
            };
            schedule.add_task(&form).await
        });

        let (params, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(params.product_name, "Cinnamon Buns");
        assert_eq!(params.quantity, 12);
        assert_eq!(params.scheduled_time, "08:00");
        assert_eq!(params.day, Weekday::Sunday);
        responder.send(Ok(TaskId(7))).unwrap();

        assert_eq!(add.await.unwrap(), Ok(TaskId(7)));
    }

    #[tokio::test]
    async fn test_invalid_day_never_reaches_store() {
        let mock = MockStore::<BakingTask>::new();
        let schedule = ScheduleClient::new(mock.client());

        let form = TaskForm {
            recipe: "Baguette".to_string(),
            day: "Someday".to_string(),
            ..TaskForm::default()
        };
        let result = schedule.add_task(&form).await;

        assert_eq!(result, Err(ScheduleError::InvalidDay("Someday".to_string())));
        mock.verify();
    }

    #[tokio::test]
    async fn test_tasks_by_day_filters_snapshot() {
        let mut mock = MockStore::<BakingTask>::new();
        mock.expect_list().return_ok(vec![
            BakingTask::new(TaskId(1), "Sourdough Loaf", 20, "06:00 AM", Weekday::Monday),
            BakingTask::new(TaskId(2), "Rye Bread", 10, "10:00 AM", Weekday::Friday),
        ]);
        let schedule = ScheduleClient::new(mock.client());

        let friday = schedule.tasks_by_day(Weekday::Friday).await.unwrap();
        assert_eq!(friday.len(), 1);
        assert_eq!(friday[0].product_name, "Rye Bread");
        mock.verify();
    }

    #[tokio::test]
    async fn test_closed_store_maps_to_unavailable() {
        let mut mock = MockStore::<BakingTask>::new();
        mock.expect_list().return_err(StoreError::StoreClosed);
        let schedule = ScheduleClient::new(mock.client());

        let result = schedule.week_lanes().await;
        assert!(matches!(result, Err(ScheduleError::StoreUnavailable(_))));
    }
}
