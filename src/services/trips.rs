//! Trip aggregation service
//!
//! Runs one planning submission through the place, forecast and image
//! adapters and assembles a `TripRecord`. Callers see either a complete record
//! or the first failure; nothing is retried and no partial record escapes.

use chrono::{Local, NaiveDate};
use validator::Validate;

use crate::{
    dates::{self, parse_calendar_date},
    error::{AppError, AppResult},
    models::{TripRecord, TripRequest},
    providers::Providers,
};

/// In-progress stages of a planning run, used for tracing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanStage {
    ResolvingPlace,
    ResolvingForecastAndImage,
    Computed,
}

/// Submission that passed pre-flight validation
#[derive(Debug)]
struct Submission {
    city: String,
    departure: NaiveDate,
    return_date: NaiveDate,
}

impl Submission {
    fn from_request(request: &TripRequest) -> AppResult<Self> {
        let request = request.trimmed();
        request.validate()?;

        let departure = parse_calendar_date(&request.departure_date).map_err(|_| {
            AppError::Validation(format!("Invalid departure date: {}", request.departure_date))
        })?;
        let return_date = parse_calendar_date(&request.return_date).map_err(|_| {
            AppError::Validation(format!("Invalid return date: {}", request.return_date))
        })?;

        Ok(Self {
            city: request.city,
            departure,
            return_date,
        })
    }
}

#[derive(Clone)]
pub struct TripPlanner {
    providers: Providers,
}

impl TripPlanner {
    pub fn new(providers: Providers) -> Self {
        Self { providers }
    }

    /// Plan a trip relative to the local current date
    pub async fn plan(&self, request: &TripRequest) -> AppResult<TripRecord> {
        self.plan_on(request, Local::now().date_naive()).await
    }

    /// Plan a trip relative to `today`
    pub async fn plan_on(&self, request: &TripRequest, today: NaiveDate) -> AppResult<TripRecord> {
        let submission = Submission::from_request(request)?;

        match self.run(&submission, today).await {
            Ok(record) => {
                tracing::info!(
                    "Planned trip to {}, {}: {} day(s), departing in {} day(s)",
                    record.place.name,
                    record.place.country,
                    record.duration_days,
                    record.days_until_departure
                );
                Ok(record)
            }
            Err(e) => {
                tracing::warn!("Trip planning for {} failed: {}", submission.city, e);
                Err(e)
            }
        }
    }

    async fn run(&self, submission: &Submission, today: NaiveDate) -> AppResult<TripRecord> {
        tracing::debug!(stage = ?PlanStage::ResolvingPlace, city = %submission.city);
        let place = self.providers.places.lookup_place(&submission.city).await?;

        tracing::debug!(stage = ?PlanStage::ResolvingForecastAndImage, place = %place.name);
        let (forecast, image) = tokio::join!(
            self.providers.forecasts.lookup_forecast(
                place.latitude,
                place.longitude,
                submission.departure
            ),
            self.providers.images.lookup_image(&submission.city),
        );
        let forecast = forecast?;

        tracing::debug!(stage = ?PlanStage::Computed, image_found = !image.is_empty());
        Ok(TripRecord {
            place,
            forecast,
            image,
            departure_date: submission.departure,
            return_date: submission.return_date,
            days_until_departure: dates::days_until(submission.departure, today),
            duration_days: dates::duration(submission.departure, submission.return_date),
        })
    }
}
