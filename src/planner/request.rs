//! JSON request and response shapes.

use serde::{Deserialize, Serialize};

use super::plan::{Diagnostic, TourPlan, UnassignedOrder};
use crate::config::PlannerConfig;
use crate::error::ValidationError;
use crate::models::{Customer, Order, OrderStatusUpdate, Settings, Tour, Vehicle};

/// All inputs of a planning run in one document.
///
/// # Examples
///
/// ```
/// use u_tourplan::planner::{PlanRequest, TourBuilder};
///
/// let json = r#"{
///     "orders": [
///         {"id": "o1", "customerId": "c1", "containerCount": 2, "deliveryDate": "2024-05-06"}
///     ],
///     "vehicles": [{"id": "v1", "capacity": 10}],
///     "customers": [{"id": "c1", "name": "Bakery", "latitude": 52.53, "longitude": 13.41}],
///     "settings": {"depot": {"latitude": 52.52, "longitude": 13.405}}
/// }"#;
/// let request = PlanRequest::from_json_str(json).unwrap();
/// let response = TourBuilder::plan_request(&request).unwrap();
/// assert_eq!(response.tours.len(), 1);
/// assert_eq!(response.order_updates.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest {
    /// Orders to plan; only pending ones are used.
    pub orders: Vec<Order>,
    /// Fleet; only available vehicles are used.
    pub vehicles: Vec<Vehicle>,
    /// Customer positions.
    #[serde(default)]
    pub customers: Vec<Customer>,
    /// Depot and handling times.
    pub settings: Settings,
    /// Planner tunables.
    #[serde(default)]
    pub config: PlannerConfig,
}

impl PlanRequest {
    /// Parses a request document.
    pub fn from_json_str(json: &str) -> Result<Self, ValidationError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Result document of a planning run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanResponse {
    /// Generated tours.
    pub tours: Vec<Tour>,
    /// Orders left over.
    pub unassigned: Vec<UnassignedOrder>,
    /// Conditions observed while planning.
    pub diagnostics: Vec<Diagnostic>,
    /// Status changes the caller should persist.
    pub order_updates: Vec<OrderStatusUpdate>,
}

impl PlanResponse {
    /// Serializes the response.
    pub fn to_json_string(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl From<TourPlan> for PlanResponse {
    fn from(plan: TourPlan) -> Self {
        let order_updates = plan.status_updates();
        let (tours, unassigned, diagnostics) = plan.into_parts();
        Self {
            tours,
            unassigned,
            diagnostics,
            order_updates,
        }
    }
}
