//! Derived views over a snapshot of the schedule.
//!
//! Everything here is a pure function of `&[BakingTask]`; the client fetches one snapshot and
//! hands it in.

use super::error::ScheduleError;
use crate::model::{BakingTask, TaskCreate, Weekday};
use serde::Serialize;

/// Products offered by the "Create New Baking Task" form.
pub const RECIPE_CHOICES: [&str; 6] = [
    "Sourdough Loaf",
    "Croissants",
    "Baguette",
    "Whole Wheat",
    "Rye Bread",
    "Cinnamon Buns",
];

pub const DEFAULT_QUANTITY: u32 = 12;
pub const DEFAULT_TIME: &str = "08:00";

/// Raw fields of the task form. `Default` carries the form's prefilled values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskForm {
    pub recipe: String,
    pub quantity: u32,
    pub time: String,
    pub day: String,
}

impl Default for TaskForm {
    fn default() -> Self {
        Self {
            recipe: String::new(),
            quantity: DEFAULT_QUANTITY,
            time: DEFAULT_TIME.to_string(),
            day: String::new(),
        }
    }
}

impl TaskForm {
    /// Recipe and time are required and must not be blank; `day` must be one of the seven day
    /// names. Quantity is not range checked.
    pub fn parse(&self) -> Result<TaskCreate, ScheduleError> {
        if self.recipe.trim().is_empty() {
            return Err(ScheduleError::MissingField("recipe"));
        }
        if self.time.trim().is_empty() {
            return Err(ScheduleError::MissingField("time"));
        }
        Ok(TaskCreate {
            product_name: self.recipe.clone(),
            quantity: self.quantity,
            scheduled_time: self.time.clone(),
            day: self.day.parse()?,
        })
    }
}

/// Tasks scheduled on `day`, in insertion order.
pub fn tasks_by_day(tasks: &[BakingTask], day: Weekday) -> impl Iterator<Item = &BakingTask> {
    tasks.iter().filter(move |task| task.day == day)
}

/// One column of the weekly board.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayLane {
    pub day: Weekday,
    pub tasks: Vec<BakingTask>,
}

/// All seven lanes, Monday first. Days without tasks get an empty lane.
pub fn week_lanes(tasks: &[BakingTask]) -> Vec<DayLane> {
    Weekday::ALL
        .into_iter()
        .map(|day| DayLane {
            day,
            tasks: tasks_by_day(tasks, day).cloned().collect(),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductTotal {
    pub product_name: String,
    pub quantity: u64,
}

/// Product with the largest total quantity across the week.
///
/// Ties go to the product whose first task was inserted earliest.
pub fn most_scheduled_product(tasks: &[BakingTask]) -> Option<ProductTotal> {
    let mut totals: Vec<ProductTotal> = Vec::new();
    for task in tasks {
        match totals
            .iter_mut()
            .find(|total| total.product_name == task.product_name)
        {
            Some(total) => total.quantity += u64::from(task.quantity),
            None => totals.push(ProductTotal {
                product_name: task.product_name.clone(),
                quantity: u64::from(task.quantity),
            }),
        }
    }

    let mut best: Option<ProductTotal> = None;
    for total in totals {
        match &best {
            Some(b) if total.quantity <= b.quantity => {}
            _ => best = Some(total),
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{TaskId, TaskStatus};

    fn task(id: u32, product: &str, quantity: u32, day: Weekday) -> BakingTask {
        BakingTask::new(TaskId(id), product, quantity, "06:00 AM", day)
    }

    #[test]
    fn test_form_defaults() {
        let form = TaskForm::default();
        assert_eq!(form.quantity, 12);
        assert_eq!(form.time, "08:00");
    }

    #[test]
    fn test_form_rejects_unknown_day() {
        let form = TaskForm {
            recipe: "Baguette".to_string(),
            day: "Funday".to_string(),
            ..TaskForm::default()
        };
        assert_eq!(
            form.parse(),
            Err(ScheduleError::InvalidDay("Funday".to_string()))
        );

        let form = TaskForm {
            day: "friday".to_string(),
            ..form
        };
        assert!(form.parse().is_err());
    }

    #[test]
    fn test_form_requires_recipe_and_time() {
        let form = TaskForm {
            day: "Friday".to_string(),
            ..TaskForm::default()
        };
        assert_eq!(form.parse(), Err(ScheduleError::MissingField("recipe")));

        let form = TaskForm {
            recipe: "  ".to_string(),
            ..form
        };
        assert_eq!(form.parse(), Err(ScheduleError::MissingField("recipe")));

        let form = TaskForm {
            recipe: "Rye Bread".to_string(),
            time: String::new(),
            ..form
        };
        assert_eq!(form.parse(), Err(ScheduleError::MissingField("time")));

        let form = TaskForm {
            time: "10:00".to_string(),
            ..form
        };
        assert!(form.parse().is_ok());
    }

    #[test]
    fn test_tasks_by_day_keeps_insertion_order() {
        let tasks = vec![
            task(1, "Sourdough Loaf", 25, Weekday::Friday),
            task(2, "Croissants", 50, Weekday::Monday),
            task(3, "Rye Bread", 10, Weekday::Friday),
        ];
        let friday: Vec<_> = tasks_by_day(&tasks, Weekday::Friday)
            .map(|t| t.id)
            .collect();
        assert_eq!(friday, vec![TaskId(1), TaskId(3)]);
    }

    #[test]
    fn test_week_lanes_include_empty_days() {
        let tasks = vec![task(1, "Baguette", 40, Weekday::Tuesday).with_status(TaskStatus::InProgress)];
        let lanes = week_lanes(&tasks);
        assert_eq!(lanes.len(), 7);
        assert_eq!(lanes[0].day, Weekday::Monday);
        assert!(lanes[0].tasks.is_empty());
        assert_eq!(lanes[1].tasks.len(), 1);
        assert_eq!(lanes[6].day, Weekday::Sunday);
    }

    #[test]
    fn test_most_scheduled_sums_across_days() {
        let tasks = vec![
            task(1, "Sourdough Loaf", 20, Weekday::Monday),
            task(2, "Croissants", 40, Weekday::Monday),
            task(3, "Sourdough Loaf", 25, Weekday::Friday),
        ];
        let top = most_scheduled_product(&tasks).unwrap();
        assert_eq!(top.product_name, "Sourdough Loaf");
        assert_eq!(top.quantity, 45);
    }

    #[test]
    fn test_most_scheduled_tie_goes_to_earliest() {
        let tasks = vec![
            task(1, "Baguette", 30, Weekday::Monday),
            task(2, "Croissants", 30, Weekday::Monday),
        ];
        assert_eq!(most_scheduled_product(&tasks).unwrap().product_name, "Baguette");
        assert!(most_scheduled_product(&[]).is_none());
    }
}
